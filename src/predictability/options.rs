//! predictability::options — solver configuration and numeric constants.
//!
//! Purpose
//! -------
//! Hold the validated configuration of the Fano-bound root finder and the
//! fixed numeric constants of the reference procedure, so the solver and its
//! callers agree on tolerances, rounding and iteration limits.
//!
//! Key behaviors
//! -------------
//! - [`SolverOptions::new`] validates the convergence tolerance and the
//!   optional iteration cap, returning typed errors instead of panicking.
//! - `SolverOptions::default()` reproduces the reference tolerance (1e-8)
//!   and adds a cap of [`DEFAULT_MAX_ITER`] iterations.
//!
//! Invariants & assumptions
//! ------------------------
//! - `tol` is finite and strictly positive.
//! - `max_iter`, when present, is strictly positive. `None` leaves the
//!   iteration uncapped, matching the reference loop, which can spin forever
//!   on pathological inputs.
//!
//! Conventions
//! -----------
//! - Constants are public so downstream reports can quote them.
//! - `verbose` only has an effect with the `obs_slog` feature.

use crate::predictability::errors::{PredictabilityError, PredictabilityResult};

/// Decimal digits S and log₂ N are rounded to before the feasibility check.
pub const FEASIBILITY_DECIMALS: i32 = 9;

/// Decimal digits of the returned Pmax.
pub const OUTPUT_DECIMALS: i32 = 10;

/// Entropies at or below this value are treated as fully predictable.
pub const NEAR_ZERO_ENTROPY: f64 = 0.01;

/// Pmax reported for near-zero entropy, avoiding the singularity at x → 1.
pub const NEAR_ZERO_PREDICTABILITY: f64 = 0.999;

/// Initial iterate is `INITIAL_GUESS_SCALE / N`, just above the uniform bound.
pub const INITIAL_GUESS_SCALE: f64 = 1.000_000_000_1;

/// Default convergence tolerance on |F(x)|.
pub const DEFAULT_TOL: f64 = 1e-8;

/// Default iteration cap. Typical inputs converge in fewer than 30 steps.
pub const DEFAULT_MAX_ITER: usize = 1_000;

/// Configuration for the maximum-predictability root finder.
///
/// Fields:
/// - `tol: f64` — stop once |F(x)| < `tol`.
/// - `max_iter: Option<usize>` — hard cap on Halley iterations; `None` runs
///   until convergence or numeric failure.
/// - `verbose: bool` — if `true`, logs the initial state and attaches a slog
///   observer (behind the `obs_slog` feature).
///
/// Default:
/// - `tol`: `1e-8`
/// - `max_iter`: `Some(1_000)`
/// - `verbose`: `false`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverOptions {
    pub tol: f64,
    pub max_iter: Option<usize>,
    pub verbose: bool,
}

impl SolverOptions {
    /// Construct validated solver options.
    ///
    /// # Rules
    /// - `tol` must be **finite and strictly positive**.
    /// - If provided, `max_iter` must be `> 0`.
    ///
    /// # Errors
    /// - [`PredictabilityError::InvalidTolerance`] for non-finite or non-positive `tol`.
    /// - [`PredictabilityError::InvalidMaxIter`] if `max_iter == Some(0)`.
    pub fn new(tol: f64, max_iter: Option<usize>, verbose: bool) -> PredictabilityResult<Self> {
        if !tol.is_finite() {
            return Err(PredictabilityError::InvalidTolerance {
                tol,
                reason: "Tolerance must be finite.",
            });
        }
        if tol <= 0.0 {
            return Err(PredictabilityError::InvalidTolerance {
                tol,
                reason: "Tolerance must be positive.",
            });
        }
        if let Some(max_iter) = max_iter {
            if max_iter == 0 {
                return Err(PredictabilityError::InvalidMaxIter {
                    max_iter,
                    reason: "Maximum iterations must be greater than zero.",
                });
            }
        }
        Ok(Self { tol, max_iter, verbose })
    }

    /// Options identical to the reference loop: default tolerance, no cap.
    pub fn uncapped() -> Self {
        Self { tol: DEFAULT_TOL, max_iter: None, verbose: false }
    }
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self { tol: DEFAULT_TOL, max_iter: Some(DEFAULT_MAX_ITER), verbose: false }
    }
}
