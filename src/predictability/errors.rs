//! predictability::errors — error types for the Fano-bound solver.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias for the maximum-predictability
//! solver, its options and the end-to-end report, plus conversions from the
//! `argmin` backend, from [`EntropyError`] and (with `python-bindings`) into
//! Python exceptions.
//!
//! Key behaviors
//! -------------
//! - Separate invalid input (symbol count, entropy, tolerances) from numeric
//!   failures of the iteration (`NumericalInstability`, `NonConvergence`).
//! - Recover crate errors raised inside the `argmin` solver by downcasting
//!   the backend error, and wrap every other backend failure.
//!
//! Invariants & assumptions
//! ------------------------
//! - "No solution" is NOT an error: infeasible (N, S) pairs are reported as
//!   [`MaxPredictability::NoSolution`](crate::predictability::MaxPredictability::NoSolution).
//! - Numeric failures carry the iteration and iterate at which they were
//!   detected so callers can log or retry with other inputs.
//!
//! Testing notes
//! -------------
//! - Unit tests check `Display` payloads and the backend downcast path.

use argmin::core::{ArgminError, Error};

use crate::entropy::errors::EntropyError;

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type PredictabilityResult<T> = Result<T, PredictabilityError>;

#[derive(Debug, Clone, PartialEq)]
pub enum PredictabilityError {
    // ---- Input validation ----
    /// Distinct symbol count must be at least 1.
    InvalidSymbolCount { count: usize },

    /// Entropy must be finite and non-negative.
    InvalidEntropy { value: f64, reason: &'static str },

    // ---- SolverOptions ----
    /// Convergence tolerance must be finite and positive.
    InvalidTolerance { tol: f64, reason: &'static str },

    /// Iteration cap must be positive when provided.
    InvalidMaxIter { max_iter: usize, reason: &'static str },

    // ---- Iteration ----
    /// Halley step or objective left the real domain (x ∉ (0, 1), F'(x) ≈ 0).
    NumericalInstability { iteration: u64, x: f64, reason: &'static str },

    /// The iteration stopped before |F(x)| fell below the tolerance.
    NonConvergence { iterations: u64, last_x: f64, status: String },

    /// Backend finished without a current iterate.
    MissingRoot,

    // ---- Upstream ----
    /// Entropy estimation failed in the end-to-end report.
    Entropy(EntropyError),

    // ---- Argmin ----
    /// Wrapper for argmin::NotInitialized
    NotInitialized { text: String },
    /// Wrapper for other argmin::Error types
    BackendError { text: String },
}

impl std::error::Error for PredictabilityError {}

impl std::fmt::Display for PredictabilityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Input validation ----
            PredictabilityError::InvalidSymbolCount { count } => {
                write!(f, "Invalid distinct symbol count {count}: must be at least 1")
            }
            PredictabilityError::InvalidEntropy { value, reason } => {
                write!(f, "Invalid entropy {value}: {reason}")
            }

            // ---- SolverOptions ----
            PredictabilityError::InvalidTolerance { tol, reason } => {
                write!(f, "Invalid convergence tolerance {tol}: {reason}")
            }
            PredictabilityError::InvalidMaxIter { max_iter, reason } => {
                write!(f, "Invalid maximum iterations {max_iter}: {reason}")
            }

            // ---- Iteration ----
            PredictabilityError::NumericalInstability { iteration, x, reason } => {
                write!(f, "Numerical instability at iteration {iteration} (x = {x}): {reason}")
            }
            PredictabilityError::NonConvergence { iterations, last_x, status } => {
                write!(
                    f,
                    "Solver did not converge after {iterations} iterations (last x = {last_x}): {status}"
                )
            }
            PredictabilityError::MissingRoot => {
                write!(f, "Solver finished without an iterate")
            }

            // ---- Upstream ----
            PredictabilityError::Entropy(err) => write!(f, "Entropy estimation failed: {err}"),

            // ---- Argmin ----
            PredictabilityError::NotInitialized { text } => {
                write!(f, "Not initialized: {text}")
            }
            PredictabilityError::BackendError { text } => {
                write!(f, "Backend error: {text}")
            }
        }
    }
}

impl From<Error> for PredictabilityError {
    fn from(original_err: Error) -> Self {
        let original_err = match original_err.downcast::<PredictabilityError>() {
            Ok(pred_err) => return pred_err,
            Err(err) => err,
        };
        match original_err.downcast::<ArgminError>() {
            Ok(argmin_err) => match argmin_err {
                ArgminError::NotInitialized { text } => PredictabilityError::NotInitialized { text },
                other => PredictabilityError::BackendError { text: other.to_string() },
            },
            Err(err) => PredictabilityError::BackendError { text: err.to_string() },
        }
    }
}

impl From<EntropyError> for PredictabilityError {
    fn from(err: EntropyError) -> Self {
        PredictabilityError::Entropy(err)
    }
}

#[cfg(feature = "python-bindings")]
impl From<PredictabilityError> for PyErr {
    fn from(err: PredictabilityError) -> PyErr {
        PyValueError::new_err(format!("PredictabilityError: {err}"))
    }
}
