//! entropy::symbols — canonical symbol tokens and dense series encoding.
//!
//! Purpose
//! -------
//! Turn an arbitrary series of discrete observations into something the
//! substring search can compare cheaply and unambiguously. Every symbol is
//! first mapped to a canonical textual token, then tokens are interned into
//! dense integer codes in order of first appearance.
//!
//! Key behaviors
//! -------------
//! - [`Symbol`] defines the canonicalization rule for integers, floats,
//!   booleans, characters and strings.
//! - [`encode_series`] interns a series into an [`EncodedSeries`] holding
//!   one code per time step plus the alphabet of distinct tokens.
//! - [`distinct_symbol_count`] reports N, the alphabet size used by the
//!   predictability solver, with the same canonicalization.
//!
//! Invariants & assumptions
//! ------------------------
//! - Two symbols are equal iff their canonical tokens are equal. Codes are
//!   therefore equal iff the original symbols compare equal under this rule.
//! - Codes are assigned as 0, 1, 2, … in order of first appearance, so
//!   `codes[i] < alphabet.len()` for every `i`.
//!
//! Conventions
//! -----------
//! - Integers, `char`, `str` and `String` use their `Display` form.
//! - `bool` maps to `"1"` / `"0"`, so `true` is the same symbol as `1`.
//! - Floats use the shortest round-trip `Display` form of their `f64` value.
//!   `1.0_f64` prints as `"1"`, so it is the same symbol as the integer `1`.
//!   `f32` values are widened first, so `0.1_f32` equals the `f64` it widens
//!   to. `-0.0` is folded into `"0"` and every NaN becomes `"NaN"`.
//!
//! Testing notes
//! -------------
//! - Unit tests check int/float agreement, zero folding, NaN handling, code
//!   assignment order and distinct counts on mixed inputs.

use std::collections::HashMap;

/// Symbol — a discrete, equality-comparable observation.
///
/// Implementors return the canonical token the entropy estimator compares.
/// Two observations are treated as the same symbol iff their tokens are
/// byte-for-byte equal.
pub trait Symbol {
    fn canonical_token(&self) -> String;
}

macro_rules! display_symbol {
    ($($t:ty),* $(,)?) => {
        $(
            impl Symbol for $t {
                fn canonical_token(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

display_symbol!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char, str, String);

impl Symbol for bool {
    fn canonical_token(&self) -> String {
        u8::from(*self).canonical_token()
    }
}

impl Symbol for f64 {
    fn canonical_token(&self) -> String {
        if self.is_nan() {
            "NaN".to_string()
        } else if *self == 0.0 {
            "0".to_string()
        } else {
            self.to_string()
        }
    }
}

impl Symbol for f32 {
    fn canonical_token(&self) -> String {
        f64::from(*self).canonical_token()
    }
}

impl<T: Symbol + ?Sized> Symbol for &T {
    fn canonical_token(&self) -> String {
        (**self).canonical_token()
    }
}

/// EncodedSeries — a symbol series interned into dense integer codes.
///
/// Fields
/// ------
/// - `codes`: `Vec<usize>`
///   One code per time step; `codes[i]` identifies the symbol at step `i`.
/// - `alphabet`: `Vec<String>`
///   Canonical tokens indexed by code, in order of first appearance.
///
/// Invariants
/// ----------
/// - `codes.len()` equals the length of the encoded series.
/// - Every code is a valid index into `alphabet`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedSeries {
    codes: Vec<usize>,
    alphabet: Vec<String>,
}

impl EncodedSeries {
    /// Per-step symbol codes.
    pub fn codes(&self) -> &[usize] {
        &self.codes
    }

    /// Canonical tokens indexed by code.
    pub fn alphabet(&self) -> &[String] {
        &self.alphabet
    }

    /// Number of distinct symbols N.
    pub fn distinct(&self) -> usize {
        self.alphabet.len()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

/// Intern a series into dense codes using the [`Symbol`] canonicalization.
///
/// Parameters
/// ----------
/// - `series`: `&[T]`
///   Input observations. May be empty; length checks belong to callers.
///
/// Returns
/// -------
/// [`EncodedSeries`]
///   Codes assigned in order of first appearance, and the matching alphabet.
///
/// Performance
/// -----------
/// - One token allocation per symbol and one hash lookup per step.
pub fn encode_series<T: Symbol>(series: &[T]) -> EncodedSeries {
    let mut lookup: HashMap<String, usize> = HashMap::new();
    let mut alphabet: Vec<String> = Vec::new();
    let codes: Vec<usize> = series
        .iter()
        .map(|symbol| {
            let token = symbol.canonical_token();
            *lookup.entry(token).or_insert_with_key(|token| {
                alphabet.push(token.clone());
                alphabet.len() - 1
            })
        })
        .collect();

    EncodedSeries { codes, alphabet }
}

/// Count the distinct symbols N of a series under the [`Symbol`] rule.
///
/// Examples
/// --------
/// ```rust
/// # use predictability_limit::entropy::symbols::distinct_symbol_count;
/// assert_eq!(distinct_symbol_count(&[1.0_f64, 2.0, 1.0, -0.0, 0.0]), 3);
/// assert_eq!(distinct_symbol_count(&["home", "work", "home"]), 2);
/// ```
pub fn distinct_symbol_count<T: Symbol>(series: &[T]) -> usize {
    encode_series(series).distinct()
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Canonical tokens for integers, floats, strings and references.
    // - Folding of signed zeros and NaNs.
    // - Code assignment order and alphabet contents in `encode_series`.
    // - Distinct counts under the shared canonicalization.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Check that an integer and an integral float share one token while
    // distinct numeric values stay distinct.
    //
    // Given
    // -----
    // - 1_i64, 1.0_f64, 1.5_f64 and 1.0_f32.
    //
    // Expect
    // ------
    // - 1 and 1.0 (f64 or f32) produce "1"; 1.5 produces "1.5".
    fn canonical_token_unifies_integral_floats_with_integers() {
        // Act & Assert
        assert_eq!(1_i64.canonical_token(), "1");
        assert_eq!(1.0_f64.canonical_token(), "1");
        assert_eq!(1.0_f32.canonical_token(), "1");
        assert_eq!(1.5_f64.canonical_token(), "1.5");
    }

    #[test]
    // Purpose
    // -------
    // Narrow numeric types and booleans follow the value-equality rule used
    // for 64-bit inputs.
    //
    // Given
    // -----
    // - 7_i32, 0.1_f32, -0.0_f32, true and false.
    //
    // Expect
    // ------
    // - 7_i32 matches 7_i64; 0.1_f32 matches the f64 it widens to; -0.0_f32
    //   folds to "0"; true and false match 1 and 0.
    fn canonical_token_widens_narrow_types_and_booleans() {
        // Act & Assert
        assert_eq!(7_i32.canonical_token(), 7_i64.canonical_token());
        assert_eq!(0.1_f32.canonical_token(), f64::from(0.1_f32).canonical_token());
        assert_ne!(0.1_f32.canonical_token(), 0.1_f64.canonical_token());
        assert_eq!((-0.0_f32).canonical_token(), "0");
        assert_eq!(true.canonical_token(), 1_i64.canonical_token());
        assert_eq!(false.canonical_token(), "0");
    }

    #[test]
    // Purpose
    // -------
    // Ensure -0.0 and 0.0 are one symbol and all NaNs are one symbol.
    //
    // Given
    // -----
    // - -0.0, 0.0, f64::NAN and a NaN with a different payload sign.
    //
    // Expect
    // ------
    // - Zeros map to "0"; NaNs map to "NaN".
    fn canonical_token_folds_signed_zero_and_nan() {
        // Act & Assert
        assert_eq!((-0.0_f64).canonical_token(), "0");
        assert_eq!(0.0_f64.canonical_token(), "0");
        assert_eq!(f64::NAN.canonical_token(), "NaN");
        assert_eq!((-f64::NAN).canonical_token(), "NaN");
    }

    #[test]
    // Purpose
    // -------
    // Verify codes follow first appearance and the alphabet mirrors them.
    //
    // Given
    // -----
    // - The string series ["b", "a", "b", "c", "a"].
    //
    // Expect
    // ------
    // - codes = [0, 1, 0, 2, 1]; alphabet = ["b", "a", "c"]; distinct = 3.
    fn encode_series_assigns_codes_in_first_appearance_order() {
        // Arrange
        let series = ["b", "a", "b", "c", "a"];

        // Act
        let encoded = encode_series(&series);

        // Assert
        assert_eq!(encoded.codes(), &[0, 1, 0, 2, 1]);
        assert_eq!(encoded.alphabet(), &["b".to_string(), "a".to_string(), "c".to_string()]);
        assert_eq!(encoded.distinct(), 3);
        assert_eq!(encoded.len(), 5);
        assert!(!encoded.is_empty());
    }

    #[test]
    // Purpose
    // -------
    // Check distinct counts for numeric series with repeated values under
    // different representations, and for an empty series.
    //
    // Given
    // -----
    // - [3.0, 3.0, 4.25, -0.0, 0.0] and an empty slice.
    //
    // Expect
    // ------
    // - 3 distinct symbols, and 0 for the empty slice.
    fn distinct_symbol_count_uses_canonical_tokens() {
        // Arrange
        let series = [3.0_f64, 3.0, 4.25, -0.0, 0.0];
        let empty: [u8; 0] = [];

        // Act & Assert
        assert_eq!(distinct_symbol_count(&series), 3);
        assert_eq!(distinct_symbol_count(&empty), 0);
    }
}
