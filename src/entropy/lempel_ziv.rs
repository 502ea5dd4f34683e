//! entropy::lempel_ziv — time-correlated entropy of a discrete series.
//!
//! Purpose
//! -------
//! Estimate the time-correlated (Lempel–Ziv style) entropy S of a discrete
//! series as used in Zhao et al., "Predicting taxi demand at high spatial
//! resolution: approaching the limit of predictability" (IEEE Big Data
//! 2016). S feeds the Fano-bound solver in [`crate::predictability`].
//!
//! Key behaviors
//! -------------
//! - Build the substring length table {L(i)}: for each step i ≥ 1, the
//!   length of the shortest run starting at i that does not occur as a
//!   contiguous block in the prefix `series[..i]`, grown one symbol at a
//!   time and capped at the end of the series.
//! - Combine the table into S = ln(n) · n / Σᵢ L(i).
//! - Expose an [`EntropyOutcome`] value object carrying S together with the
//!   series length, the distinct symbol count N and the table itself.
//!
//! Invariants & assumptions
//! ------------------------
//! - L(0) = 1: the first symbol is trivially unseen.
//! - 1 ≤ L(i) ≤ n − i for every i ≥ 1. The upper bound is the boundary cap:
//!   when the run reaches the last symbol while still contained in the
//!   prefix, its length is the number of symbols left. This is an
//!   approximation of LZ78 entropy and is kept exactly, since published
//!   predictability figures were calibrated against it.
//! - The search never tries alternative offsets or shorter unseen runs; it
//!   only extends the run starting at i.
//! - Containment is exact block equality on canonical symbol codes (see
//!   [`crate::entropy::symbols`]), never subsequence matching.
//!
//! Conventions
//! -----------
//! - Natural logarithms throughout; S is in nats per symbol scaled as in the
//!   paper. The solver converts with ln 2 where the Fano bound needs bits.
//! - Input validation (n ≥ 2) is delegated to
//!   [`validate_series`](crate::entropy::validation::validate_series).
//!
//! Downstream usage
//! ----------------
//! - Call [`estimate_entropy`] for S alone, or
//!   [`EntropyOutcome::from_series`] when N is also needed for
//!   [`max_predictability`](crate::predictability::max_predictability).
//!
//! Testing notes
//! -------------
//! - Unit tests pin the table and S for constant, alternating, period-3 and
//!   all-distinct series against hand-computed values, check the boundary
//!   cap, and check block (not subsequence) containment.

use crate::entropy::{
    errors::EntropyResult,
    symbols::{Symbol, encode_series},
    validation::validate_series,
};

/// EntropyOutcome — time-correlated entropy of one series.
///
/// Purpose
/// -------
/// Bundle the entropy estimate S with the quantities the predictability
/// solver and reports need, so the series is encoded only once.
///
/// Fields
/// ------
/// - `entropy`: `f64`
///   S = ln(n) · n / Σ L(i).
/// - `len`: `usize`
///   Series length n (≥ 2).
/// - `distinct`: `usize`
///   Number of distinct symbols N under the canonical token rule.
/// - `lengths`: `Vec<usize>`
///   Substring length table, `lengths[0] == 1`.
///
/// Invariants
/// ----------
/// - `lengths.len() == len` and `1 ≤ distinct ≤ len`.
/// - `entropy` is finite and strictly positive.
#[derive(Debug, Clone, PartialEq)]
pub struct EntropyOutcome {
    entropy: f64,
    len: usize,
    distinct: usize,
    lengths: Vec<usize>,
}

impl EntropyOutcome {
    /// Estimate the time-correlated entropy of `series`.
    ///
    /// Parameters
    /// ----------
    /// - `series`: `&[T]`
    ///   Discrete observations, n ≥ 2. Not mutated.
    ///
    /// Returns
    /// -------
    /// `EntropyResult<EntropyOutcome>`
    ///   - `Ok` with S, n, N and the substring length table.
    ///   - `Err(EntropyError::InsufficientData { len })` when n < 2.
    ///
    /// Panics
    /// ------
    /// - Never panics.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// use predictability_limit::entropy::EntropyOutcome;
    ///
    /// let outcome = EntropyOutcome::from_series(&["A", "B", "B", "A"]).unwrap();
    ///
    /// assert_eq!(outcome.substring_lengths(), &[1, 1, 2, 1]);
    /// assert_eq!(outcome.distinct_symbols(), 2);
    /// assert!((outcome.entropy() - 4.0_f64.ln() * 4.0 / 5.0).abs() < 1e-12);
    /// ```
    pub fn from_series<T: Symbol>(series: &[T]) -> EntropyResult<Self> {
        validate_series(series.len())?;
        let encoded = encode_series(series);
        let lengths: Vec<usize> = substring_lengths(encoded.codes());
        let entropy: f64 = entropy_from_lengths(encoded.len(), &lengths);

        Ok(EntropyOutcome { entropy, len: encoded.len(), distinct: encoded.distinct(), lengths })
    }

    /// Time-correlated entropy S.
    pub fn entropy(&self) -> f64 {
        self.entropy
    }

    /// Series length n.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`; outcomes are only built from series with n ≥ 2.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Distinct symbol count N.
    pub fn distinct_symbols(&self) -> usize {
        self.distinct
    }

    /// Substring length table {L(i)}.
    pub fn substring_lengths(&self) -> &[usize] {
        &self.lengths
    }
}

/// Estimate the time-correlated entropy S of a discrete series.
///
/// Parameters
/// ----------
/// - `series`: `&[T]`
///   Discrete observations of length n ≥ 2.
///
/// Returns
/// -------
/// `EntropyResult<f64>`
///   S = ln(n) · n / Σ L(i), or `EntropyError::InsufficientData` for n < 2.
///
/// Notes
/// -----
/// - Repetitive series have long runs in the prefix, a large Σ L(i) and a
///   small S; series without repeats have L(i) = 1 and S = ln(n).
///
/// Examples
/// --------
/// ```rust
/// use predictability_limit::entropy::estimate_entropy;
///
/// let s = estimate_entropy(&[7, 7]).unwrap();
/// assert!((s - 2.0_f64.ln()).abs() < 1e-12);
/// assert!(estimate_entropy(&[7]).is_err());
/// ```
pub fn estimate_entropy<T: Symbol>(series: &[T]) -> EntropyResult<f64> {
    EntropyOutcome::from_series(series).map(|outcome| outcome.entropy)
}

/// Build the substring length table {L(i)} for a series.
///
/// Returns
/// -------
/// `EntropyResult<Vec<usize>>`
///   One entry per step with `L(0) = 1`, or
///   `EntropyError::InsufficientData` for n < 2.
pub fn shortest_substring_lengths<T: Symbol>(series: &[T]) -> EntropyResult<Vec<usize>> {
    validate_series(series.len())?;
    let encoded = encode_series(series);
    Ok(substring_lengths(encoded.codes()))
}

/// Test whether `block` occurs as a contiguous run inside `haystack`.
///
/// Parameters
/// ----------
/// - `haystack`: `&[T]`
///   Sequence to search.
/// - `block`: `&[T]`
///   Run to look for. The empty block is contained in every haystack.
///
/// Returns
/// -------
/// `bool`
///   `true` iff some offset `k` satisfies
///   `haystack[k..k + block.len()] == block`.
///
/// Examples
/// --------
/// ```rust
/// # use predictability_limit::entropy::contains_block;
/// assert!(contains_block(&[1, 2, 3, 4], &[2, 3]));
/// // [1, 3] is a subsequence but not a contiguous block.
/// assert!(!contains_block(&[1, 2, 3, 4], &[1, 3]));
/// ```
pub fn contains_block<T: PartialEq>(haystack: &[T], block: &[T]) -> bool {
    if block.is_empty() {
        return true;
    }
    haystack.windows(block.len()).any(|window| window == block)
}

//
// ---------- Private helpers ----------
//

/// Substring length table on interned codes.
///
/// For each i ≥ 1 the run `codes[i..i + len]` starts at length 1 and grows
/// while it is contained in `codes[..i]` and `i + len < n`. The second
/// condition is the boundary cap, so `len ≤ n − i`.
///
/// Panics
/// ------
/// - Never panics; an empty `codes` yields `[1]`, which callers exclude via
///   `validate_series`.
fn substring_lengths(codes: &[usize]) -> Vec<usize> {
    let n: usize = codes.len();
    let mut lengths: Vec<usize> = Vec::with_capacity(n.max(1));
    lengths.push(1);

    for i in 1..n {
        let prefix: &[usize] = &codes[..i];
        let mut len: usize = 1;
        while i + len < n && contains_block(prefix, &codes[i..i + len]) {
            len += 1;
        }
        lengths.push(len);
    }
    lengths
}

/// S = ln(n) · n / Σ L(i).
#[inline]
fn entropy_from_lengths(n: usize, lengths: &[usize]) -> f64 {
    let total: usize = lengths.iter().sum();
    let n = n as f64;
    n.ln() * n / total as f64
}
