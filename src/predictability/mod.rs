//! predictability — maximum predictability from entropy via the Fano bound.
//!
//! Purpose
//! -------
//! Collect the Fano-bound root finder and its shared infrastructure:
//! the objective F with its derivatives, the Halley solver driven by
//! `argmin`, validated solver options, error handling, and an end-to-end
//! report that chains the entropy estimator with the solver.
//!
//! Key behaviors
//! -------------
//! - [`max_predictability`] / [`max_predictability_with`] map (N, S) to
//!   [`MaxPredictability`]: a limit in (0, 1) or `NoSolution`.
//! - [`FanoObjective`] exposes F, F′, F″ and implements the `argmin`
//!   cost/gradient/Hessian traits; [`HalleyRoot`] is the `argmin` solver.
//! - [`SolverOptions`] configures tolerance, iteration cap and verbosity.
//! - [`PredictabilityReport::from_series`] runs the full pipeline.
//!
//! Invariants & assumptions
//! ------------------------
//! - Infeasible inputs (S > log₂ N) are a regular outcome, never an error.
//! - Numeric failures of the iteration are reported as
//!   [`PredictabilityError`] values; the iteration itself is not made more
//!   robust than the published procedure.
//! - All functions are pure; concurrent calls need no synchronization.
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code imports the main surface as:
//!
//!   ```rust
//!   use predictability_limit::predictability::{MaxPredictability, max_predictability};
//!
//!   match max_predictability(4, 1.0)? {
//!       MaxPredictability::Limit(p) => assert!(p > 0.25 && p < 1.0),
//!       MaxPredictability::NoSolution => unreachable!(),
//!   }
//!   # Ok::<(), predictability_limit::predictability::PredictabilityError>(())
//!   ```
//!
//! Testing notes
//! -------------
//! - [`fano`] checks the objective against closed forms and finite
//!   differences.
//! - [`halley`] checks convergence, caps and instability reporting of the
//!   raw solver.
//! - [`solver`] pins reference values, feasibility, the near-zero branch
//!   and monotonicity in S.
//! - [`report`] checks the full pipeline.

pub mod errors;
pub mod fano;
pub mod halley;
pub mod options;
pub mod report;
pub mod solver;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{PredictabilityError, PredictabilityResult};
pub use self::fano::{FanoObjective, halley_step};
pub use self::halley::{HalleyRoot, HalleyState};
pub use self::options::{
    DEFAULT_MAX_ITER, DEFAULT_TOL, FEASIBILITY_DECIMALS, INITIAL_GUESS_SCALE, NEAR_ZERO_ENTROPY,
    NEAR_ZERO_PREDICTABILITY, OUTPUT_DECIMALS, SolverOptions,
};
pub use self::report::PredictabilityReport;
pub use self::solver::{
    MaxPredictability, max_predictability, max_predictability_with, round_to_decimals,
};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use predictability_limit::predictability::prelude::*;
//
// to import the main predictability surface in a single line.

pub mod prelude {
    pub use super::errors::{PredictabilityError, PredictabilityResult};
    pub use super::options::SolverOptions;
    pub use super::report::PredictabilityReport;
    pub use super::solver::{MaxPredictability, max_predictability, max_predictability_with};
}
