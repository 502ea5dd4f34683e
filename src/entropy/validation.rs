//! entropy::validation — shared input guards for the entropy estimator.
//!
//! Purpose
//! -------
//! Centralize the length check every entropy entry point performs before
//! building the substring length table, so the error semantics stay the same
//! across [`estimate_entropy`](crate::entropy::estimate_entropy),
//! [`shortest_substring_lengths`](crate::entropy::shortest_substring_lengths)
//! and [`EntropyOutcome`](crate::entropy::EntropyOutcome).
//!
//! Invariants & assumptions
//! ------------------------
//! - A series must contain at least two symbols: the estimator divides by
//!   Σ L(i) and multiplies by `ln(n)`, both of which degenerate for n < 2.
//! - Symbol contents are never inspected here; any value implementing
//!   [`Symbol`](crate::entropy::Symbol) is admissible.

use crate::entropy::errors::{EntropyError, EntropyResult};

/// Minimum number of symbols accepted by the entropy estimator.
pub const MIN_SERIES_LEN: usize = 2;

/// Validate the length of a symbol series.
///
/// Parameters
/// ----------
/// - `len`: `usize`
///   Number of symbols in the series.
///
/// Returns
/// -------
/// `EntropyResult<()>`
///   - `Ok(())` if `len >= MIN_SERIES_LEN`.
///   - `Err(EntropyError::InsufficientData { len })` otherwise.
///
/// Panics
/// ------
/// - Never panics.
///
/// Examples
/// --------
/// ```rust
/// # use predictability_limit::entropy::validation::validate_series;
/// # use predictability_limit::entropy::errors::EntropyError;
/// assert!(validate_series(2).is_ok());
/// assert_eq!(validate_series(1), Err(EntropyError::InsufficientData { len: 1 }));
/// ```
pub fn validate_series(len: usize) -> EntropyResult<()> {
    if len < MIN_SERIES_LEN {
        return Err(EntropyError::InsufficientData { len });
    }
    Ok(())
}
