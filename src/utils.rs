//! PyO3 input helpers shared by the Python-facing wrappers in `lib.rs`.
//!
//! Python callers hand over numpy arrays, pandas Series, or plain lists of
//! ints, floats or strings. Everything is converted to canonical symbol
//! tokens (see [`crate::entropy::symbols`]) so that `1` and `1.0` are the
//! same symbol on both sides of the boundary.

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyTypeError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use numpy::PyReadonlyArray1;

#[cfg(feature = "python-bindings")]
use crate::entropy::Symbol;

/// Convert a 1-D Python container into canonical symbol tokens.
///
/// Tried in order: float64, float32, int64, int32 and bool numpy arrays,
/// objects exposing `to_numpy()` (pandas), homogeneous lists of ints, floats
/// or strings, then any sequence whose items are each an int, float or str.
#[cfg(feature = "python-bindings")]
pub fn extract_symbol_tokens<'py>(raw_data: &Bound<'py, PyAny>) -> PyResult<Vec<String>> {
    if let Some(tokens) = extract_numpy_tokens(raw_data) {
        return Ok(tokens);
    }

    if let Ok(obj) = raw_data.call_method1("to_numpy", (false,)) {
        if let Some(tokens) = extract_numpy_tokens(&obj) {
            return Ok(tokens);
        }
    }

    if let Ok(vec) = raw_data.extract::<Vec<i64>>() {
        return Ok(vec.iter().map(Symbol::canonical_token).collect());
    }
    if let Ok(vec) = raw_data.extract::<Vec<f64>>() {
        return Ok(vec.iter().map(Symbol::canonical_token).collect());
    }
    if let Ok(vec) = raw_data.extract::<Vec<String>>() {
        return Ok(vec);
    }
    if let Ok(items) = raw_data.extract::<Vec<Bound<'py, PyAny>>>() {
        return items.iter().map(item_token).collect();
    }

    Err(PyTypeError::new_err(
        "expected a 1-D numpy.ndarray, pandas.Series, or sequence of int, float or str",
    ))
}

#[cfg(feature = "python-bindings")]
fn item_token<'py>(item: &Bound<'py, PyAny>) -> PyResult<String> {
    if let Ok(value) = item.extract::<i64>() {
        return Ok(value.canonical_token());
    }
    if let Ok(value) = item.extract::<f64>() {
        return Ok(value.canonical_token());
    }
    if let Ok(value) = item.extract::<String>() {
        return Ok(value);
    }
    Err(PyTypeError::new_err(format!(
        "unsupported symbol of type {}; expected int, float or str",
        item.get_type().name()?
    )))
}

#[cfg(feature = "python-bindings")]
#[inline]
fn extract_numpy_tokens<'py>(raw_data: &Bound<'py, PyAny>) -> Option<Vec<String>> {
    if let Ok(arr) = raw_data.extract::<PyReadonlyArray1<'py, f64>>() {
        return Some(arr.as_array().iter().map(Symbol::canonical_token).collect());
    }
    if let Ok(arr) = raw_data.extract::<PyReadonlyArray1<'py, f32>>() {
        return Some(arr.as_array().iter().map(Symbol::canonical_token).collect());
    }
    if let Ok(arr) = raw_data.extract::<PyReadonlyArray1<'py, i64>>() {
        return Some(arr.as_array().iter().map(Symbol::canonical_token).collect());
    }
    if let Ok(arr) = raw_data.extract::<PyReadonlyArray1<'py, i32>>() {
        return Some(arr.as_array().iter().map(Symbol::canonical_token).collect());
    }
    if let Ok(arr) = raw_data.extract::<PyReadonlyArray1<'py, bool>>() {
        return Some(arr.as_array().iter().map(Symbol::canonical_token).collect());
    }
    None
}
