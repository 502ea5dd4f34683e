//! predictability::report — end-to-end predictability of a symbol series.
//!
//! Purpose
//! -------
//! Run the full pipeline on one series: encode symbols, estimate the
//! time-correlated entropy S, take N from the same encoding, and invert the
//! Fano bound for Pmax. Bundles every intermediate quantity in a
//! [`PredictabilityReport`] so callers do not recompute N with a different
//! canonicalization.
//!
//! Invariants & assumptions
//! ------------------------
//! - N always comes from [`EntropyOutcome::distinct_symbols`], i.e. the
//!   canonical token rule of [`crate::entropy::symbols`].
//! - Entropy failures surface as `PredictabilityError::Entropy`.

use crate::{
    entropy::{EntropyOutcome, Symbol},
    predictability::{
        errors::PredictabilityResult,
        options::SolverOptions,
        solver::{MaxPredictability, max_predictability_with},
    },
};

/// PredictabilityReport — entropy and predictability limit of one series.
///
/// Fields
/// ------
/// - `len`: series length n.
/// - `distinct_symbols`: N.
/// - `entropy`: S.
/// - `max_predictability`: Pmax or `NoSolution`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictabilityReport {
    pub len: usize,
    pub distinct_symbols: usize,
    pub entropy: f64,
    pub max_predictability: MaxPredictability,
}

impl PredictabilityReport {
    /// Estimate S and Pmax for `series`.
    ///
    /// Errors
    /// ------
    /// - `PredictabilityError::Entropy` for series shorter than two symbols.
    /// - Any solver error from
    ///   [`max_predictability_with`](crate::predictability::max_predictability_with).
    ///
    /// Examples
    /// --------
    /// ```rust
    /// use predictability_limit::predictability::{PredictabilityReport, SolverOptions};
    ///
    /// let series = ["home", "work", "home", "work", "home", "work"];
    /// let report = PredictabilityReport::from_series(&series, &SolverOptions::default()).unwrap();
    ///
    /// assert_eq!(report.distinct_symbols, 2);
    /// assert!(report.max_predictability.is_feasible());
    /// ```
    pub fn from_series<T: Symbol>(
        series: &[T], opts: &SolverOptions,
    ) -> PredictabilityResult<Self> {
        let outcome = EntropyOutcome::from_series(series)?;
        let max_predictability =
            max_predictability_with(outcome.distinct_symbols(), outcome.entropy(), opts)?;

        Ok(PredictabilityReport {
            len: outcome.len(),
            distinct_symbols: outcome.distinct_symbols(),
            entropy: outcome.entropy(),
            max_predictability,
        })
    }
}
