//! entropy — time-correlated entropy estimation for discrete series.
//!
//! Purpose
//! -------
//! Collect the Lempel–Ziv style entropy estimator and its shared
//! infrastructure: symbol canonicalization, input validation and error
//! handling. The estimate S produced here is the input of the Fano-bound
//! solver in [`crate::predictability`].
//!
//! Key behaviors
//! -------------
//! - [`estimate_entropy`] and [`EntropyOutcome::from_series`] compute
//!   S = ln(n) · n / Σ L(i) from the substring length table.
//! - [`Symbol`] and [`encode_series`] fix one canonicalization rule used by
//!   both the estimator and [`distinct_symbol_count`].
//! - [`validate_series`] centralizes the n ≥ 2 guard.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs are discrete symbols; numeric closeness is never used.
//! - Entry points report failures via [`EntropyResult`] and never panic on
//!   user-facing invalid input.
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code imports the main surface as:
//!
//!   ```rust
//!   use predictability_limit::entropy::{EntropyOutcome, EntropyResult};
//!
//!   # fn main() -> EntropyResult<()> {
//!   let outcome = EntropyOutcome::from_series(&[3, 1, 3, 1, 2])?;
//!   let (s, n) = (outcome.entropy(), outcome.distinct_symbols());
//!   # assert!(s > 0.0 && n == 3);
//!   # Ok(())
//!   # }
//!   ```
//!
//! Testing notes
//! -------------
//! - [`lempel_ziv`] pins substring length tables on hand-computed series.
//! - [`symbols`] covers the canonicalization rule.
//! - [`validation`] and [`errors`] cover the guard and messages.

pub mod errors;
pub mod lempel_ziv;
pub mod symbols;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{EntropyError, EntropyResult};
pub use self::lempel_ziv::{
    EntropyOutcome, contains_block, estimate_entropy, shortest_substring_lengths,
};
pub use self::symbols::{EncodedSeries, Symbol, distinct_symbol_count, encode_series};
pub use self::validation::validate_series;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use predictability_limit::entropy::prelude::*;
//
// to import the main entropy surface in a single line.

pub mod prelude {
    pub use super::errors::{EntropyError, EntropyResult};
    pub use super::lempel_ziv::{EntropyOutcome, estimate_entropy};
    pub use super::symbols::{Symbol, distinct_symbol_count};
}
