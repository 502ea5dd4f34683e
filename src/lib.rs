//! predictability_limit — predictability limits of discrete time series.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the two core routines to Python via the `_predictability_limit`
//! extension module. The crate estimates the time-correlated entropy S of a
//! symbol series and inverts the Fano bound to obtain the maximum
//! achievable prediction accuracy Pmax, following Zhao et al., "Predicting
//! taxi demand at high spatial resolution: approaching the limit of
//! predictability" (IEEE Big Data 2016).
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`entropy` and `predictability`) as the
//!   public crate surface.
//! - Define `#[pyfunction]` / `#[pyclass]` wrappers and the `#[pymodule]`
//!   initializer for the `_predictability_limit` Python extension when the
//!   `python-bindings` feature is enabled.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work lives in the inner modules; this file performs only
//!   FFI glue, input conversion, and error mapping.
//! - Symbols crossing the Python boundary are canonicalized with the same
//!   rule as native Rust symbols, so N and S agree between the two APIs.
//!
//! Conventions
//! -----------
//! - "No solution" outcomes are returned to Python as `None`; errors are
//!   raised as `ValueError` (invalid inputs, numeric failure) or
//!   `TypeError` (unsupported containers).
//!
//! Downstream usage
//! ----------------
//! - Native Rust code depends on [`entropy`] and [`predictability`]
//!   directly and can ignore the PyO3 items.
//!
//!   ```rust
//!   use predictability_limit::{entropy::EntropyOutcome, predictability::max_predictability};
//!
//!   let series = [1, 2, 1, 2, 1, 2, 1, 3];
//!   let outcome = EntropyOutcome::from_series(&series).unwrap();
//!   let pmax = max_predictability(outcome.distinct_symbols(), outcome.entropy()).unwrap();
//!   println!("S = {:.4}, Pmax = {pmax}", outcome.entropy());
//!   ```
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner modules
//!   and by `tests/integration_predictability_pipeline.rs`.
//! - The PyO3 wrappers are exercised from Python.

pub mod entropy;
pub mod predictability;
pub mod utils;

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    entropy::estimate_entropy,
    predictability::{
        DEFAULT_MAX_ITER, DEFAULT_TOL, PredictabilityReport, SolverOptions,
        max_predictability_with,
    },
    utils::extract_symbol_tokens,
};

/// Time-correlated entropy S of a 1-D sequence of symbols.
///
/// Accepts numpy arrays, pandas Series, or lists of ints, floats or
/// strings. Raises `ValueError` for sequences shorter than two symbols.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "estimate_entropy", text_signature = "(data, /)")]
pub fn py_estimate_entropy<'py>(raw_data: &Bound<'py, PyAny>) -> PyResult<f64> {
    let tokens: Vec<String> = extract_symbol_tokens(raw_data)?;
    Ok(estimate_entropy(&tokens)?)
}

/// Maximum predictability for `n` distinct symbols and entropy `s`.
///
/// Returns `None` when `s` exceeds `log2(n)` (no solution). `verbose` logs
/// solver progress when the extension is built with `obs_slog`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    name = "max_predictability",
    signature = (n, s, tol = DEFAULT_TOL, max_iter = Some(DEFAULT_MAX_ITER), verbose = false)
)]
pub fn py_max_predictability(
    n: usize, s: f64, tol: f64, max_iter: Option<usize>, verbose: bool,
) -> PyResult<Option<f64>> {
    let opts = SolverOptions::new(tol, max_iter, verbose)?;
    Ok(max_predictability_with(n, s, &opts)?.value())
}

/// PredictabilityAnalysis — Python-facing wrapper for [`PredictabilityReport`].
///
/// Purpose
/// -------
/// Run the full pipeline (symbol encoding, entropy, Fano inversion) on a
/// Python sequence and expose the results as read-only properties.
///
/// Parameters
/// ----------
/// Constructed from Python via
/// `PredictabilityAnalysis(data, tol=1e-8, max_iter=1000, verbose=False)`:
/// - `data`: 1-D array-like of ints, floats or strings, length ≥ 2.
/// - `tol`: positive convergence tolerance on |F(x)|.
/// - `max_iter`: positive iteration cap or `None` for no cap.
/// - `verbose`: log solver progress when built with `obs_slog`.
///
/// Notes
/// -----
/// - Native Rust code should call [`PredictabilityReport::from_series`].
#[cfg(feature = "python-bindings")]
#[pyclass(module = "predictability_limit", frozen)]
pub struct PredictabilityAnalysis {
    inner: PredictabilityReport,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl PredictabilityAnalysis {
    #[new]
    #[pyo3(signature = (raw_data, tol = DEFAULT_TOL, max_iter = Some(DEFAULT_MAX_ITER), verbose = false))]
    pub fn new<'py>(
        raw_data: &Bound<'py, PyAny>, tol: f64, max_iter: Option<usize>, verbose: bool,
    ) -> PyResult<PredictabilityAnalysis> {
        let opts = SolverOptions::new(tol, max_iter, verbose)?;
        let tokens: Vec<String> = extract_symbol_tokens(raw_data)?;
        let inner = PredictabilityReport::from_series(&tokens, &opts)?;
        Ok(PredictabilityAnalysis { inner })
    }

    /// Series length n.
    #[getter]
    pub fn length(&self) -> usize {
        self.inner.len
    }

    /// Distinct symbol count N.
    #[getter]
    pub fn distinct_symbols(&self) -> usize {
        self.inner.distinct_symbols
    }

    /// Time-correlated entropy S.
    #[getter]
    pub fn entropy(&self) -> f64 {
        self.inner.entropy
    }

    /// Pmax, or `None` when the Fano bound has no solution.
    #[getter]
    pub fn max_predictability(&self) -> Option<f64> {
        self.inner.max_predictability.value()
    }

    pub fn __repr__(&self) -> String {
        format!(
            "PredictabilityAnalysis(length={}, distinct_symbols={}, entropy={}, max_predictability={})",
            self.inner.len,
            self.inner.distinct_symbols,
            self.inner.entropy,
            self.inner.max_predictability
        )
    }
}

/// _predictability_limit — PyO3 module initializer for the Python extension.
///
/// Registers `estimate_entropy`, `max_predictability` and
/// `PredictabilityAnalysis`. Invoked by Python on import; never called
/// directly.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _predictability_limit<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_estimate_entropy, m)?)?;
    m.add_function(wrap_pyfunction!(py_max_predictability, m)?)?;
    m.add_class::<PredictabilityAnalysis>()?;
    Ok(())
}
