//! predictability::solver — maximum predictability Pmax from (N, S).
//!
//! Purpose
//! -------
//! Invert the Fano bound: given the number of distinct symbols N and the
//! time-correlated entropy S of a series, find the maximum predictability
//! Pmax ∈ (0, 1) as the root of
//! F(x) = −x ln x − (1 − x) ln(1 − x) + (1 − x) ln(N − 1) − S ln 2,
//! following Zhao et al. (IEEE Big Data 2016).
//!
//! Key behaviors
//! -------------
//! - Round S to 9 decimals and report [`MaxPredictability::NoSolution`]
//!   when it exceeds log₂ N (also rounded to 9 decimals): no predictor can
//!   be described by the Fano bound at that entropy.
//! - Short-circuit S ≤ 0.01 to Pmax = 0.999, avoiding the singularity of
//!   F″ at x → 1.
//! - Otherwise run the Halley iteration from x₀ = 1.0000000001 / N until
//!   |F(x)| < tol and return x rounded to 10 decimals.
//!
//! Invariants & assumptions
//! ------------------------
//! - N ≥ 1 and S finite and ≥ 0; violations are typed errors.
//! - The rounded S, not the raw input, is used by the iteration.
//! - The iteration is not made more robust than the reference procedure.
//!   When F′(x) vanishes or an iterate leaves (0, 1) (e.g. N = 4, S = 0.05)
//!   the call fails with [`PredictabilityError::NumericalInstability`]. When
//!   the optional cap is hit it fails with
//!   [`PredictabilityError::NonConvergence`].
//!
//! Conventions
//! -----------
//! - Decimal rounding is half away from zero on the scaled value
//!   ([`round_to_decimals`]); it can differ from round-half-even in the last
//!   digit only on exact binary ties.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the infeasible and near-zero branches, reference
//!   values, monotonicity in S, the residual at the returned root, the
//!   iteration cap and the documented instability.

use argmin::core::{Executor, State, TerminationReason, TerminationStatus};

#[cfg(feature = "obs_slog")]
use argmin::core::observers::ObserverMode;
#[cfg(feature = "obs_slog")]
use argmin_observer_slog::SlogLogger;

use crate::predictability::{
    errors::{PredictabilityError, PredictabilityResult},
    fano::FanoObjective,
    halley::{HalleyRoot, HalleyState},
    options::{
        FEASIBILITY_DECIMALS, INITIAL_GUESS_SCALE, NEAR_ZERO_ENTROPY, NEAR_ZERO_PREDICTABILITY,
        OUTPUT_DECIMALS, SolverOptions,
    },
};

/// MaxPredictability — outcome of the Fano-bound inversion.
///
/// Variants
/// --------
/// - `Limit(f64)`
///   Pmax in (0, 1), rounded to 10 decimals.
/// - `NoSolution`
///   S exceeds log₂ N; the bound has no root. This is a regular outcome,
///   not an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MaxPredictability {
    Limit(f64),
    NoSolution,
}

impl MaxPredictability {
    /// Pmax if a solution exists.
    pub fn value(&self) -> Option<f64> {
        match self {
            MaxPredictability::Limit(p) => Some(*p),
            MaxPredictability::NoSolution => None,
        }
    }

    pub fn is_feasible(&self) -> bool {
        matches!(self, MaxPredictability::Limit(_))
    }
}

impl std::fmt::Display for MaxPredictability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MaxPredictability::Limit(p) => write!(f, "{p}"),
            MaxPredictability::NoSolution => write!(f, "No solutions"),
        }
    }
}

/// Compute the maximum predictability with default [`SolverOptions`].
///
/// Parameters
/// ----------
/// - `symbol_count`: `usize`
///   Number of distinct symbols N in the series (≥ 1).
/// - `entropy`: `f64`
///   Time-correlated entropy S (finite, ≥ 0), typically from
///   [`estimate_entropy`](crate::entropy::estimate_entropy).
///
/// Returns
/// -------
/// `PredictabilityResult<MaxPredictability>`
///   - `Ok(Limit(p))` with p ∈ (0, 1).
///   - `Ok(NoSolution)` when S > log₂ N after rounding.
///   - `Err(..)` for invalid inputs or numeric failure of the iteration.
///
/// Examples
/// --------
/// ```rust
/// use predictability_limit::predictability::{MaxPredictability, max_predictability};
///
/// assert_eq!(max_predictability(2, 1.5).unwrap(), MaxPredictability::NoSolution);
/// assert_eq!(max_predictability(5, 0.0).unwrap(), MaxPredictability::Limit(0.999));
///
/// let p = max_predictability(2, 0.5).unwrap().value().unwrap();
/// assert!((p - 0.8899721356).abs() < 1e-8);
/// ```
pub fn max_predictability(
    symbol_count: usize, entropy: f64,
) -> PredictabilityResult<MaxPredictability> {
    max_predictability_with(symbol_count, entropy, &SolverOptions::default())
}

/// Compute the maximum predictability with explicit [`SolverOptions`].
///
/// Errors
/// ------
/// - `PredictabilityError::InvalidSymbolCount` if `symbol_count == 0`.
/// - `PredictabilityError::InvalidEntropy` if `entropy` is NaN, infinite or
///   negative.
/// - `PredictabilityError::NumericalInstability` if F′ vanishes at an
///   iterate, or if a Halley step or the residual at the new iterate is not
///   finite.
/// - `PredictabilityError::NonConvergence` if `opts.max_iter` is reached.
/// - Backend wrappers (`NotInitialized`, `BackendError`, …) for failures of
///   the `argmin` executor itself.
pub fn max_predictability_with(
    symbol_count: usize, entropy: f64, opts: &SolverOptions,
) -> PredictabilityResult<MaxPredictability> {
    validate_inputs(symbol_count, entropy)?;

    let entropy = round_to_decimals(entropy, FEASIBILITY_DECIMALS);
    let max_entropy = round_to_decimals((symbol_count as f64).log2(), FEASIBILITY_DECIMALS);
    if entropy > max_entropy {
        return Ok(MaxPredictability::NoSolution);
    }
    if entropy <= NEAR_ZERO_ENTROPY {
        return Ok(MaxPredictability::Limit(NEAR_ZERO_PREDICTABILITY));
    }

    let root = solve_fano_root(FanoObjective::new(symbol_count, entropy), opts)?;
    Ok(MaxPredictability::Limit(round_to_decimals(root, OUTPUT_DECIMALS)))
}

/// Round `value` to `decimals` decimal digits, half away from zero.
///
/// Examples
/// --------
/// ```rust
/// # use predictability_limit::predictability::round_to_decimals;
/// assert_eq!(round_to_decimals(0.123_456_789_49, 9), 0.123_456_789);
/// assert_eq!(round_to_decimals(2.0, 9), 2.0);
/// ```
pub fn round_to_decimals(value: f64, decimals: i32) -> f64 {
    let scale = 10_f64.powi(decimals);
    (value * scale).round() / scale
}

// ---- Helper Methods ----

fn validate_inputs(symbol_count: usize, entropy: f64) -> PredictabilityResult<()> {
    if symbol_count == 0 {
        return Err(PredictabilityError::InvalidSymbolCount { count: symbol_count });
    }
    if !entropy.is_finite() {
        return Err(PredictabilityError::InvalidEntropy {
            value: entropy,
            reason: "Entropy must be finite.",
        });
    }
    if entropy < 0.0 {
        return Err(PredictabilityError::InvalidEntropy {
            value: entropy,
            reason: "Entropy must be non-negative.",
        });
    }
    Ok(())
}

/// Run the Halley solver from x₀ = INITIAL_GUESS_SCALE / N.
///
/// If `opts.verbose` and the `obs_slog` feature are both on, the initial
/// residual is printed and a terminal slog observer is attached.
fn solve_fano_root(objective: FanoObjective, opts: &SolverOptions) -> PredictabilityResult<f64> {
    let x0 = INITIAL_GUESS_SCALE / objective.symbol_count() as f64;
    #[cfg(feature = "obs_slog")]
    if opts.verbose {
        log_initial_state(x0, &objective);
    }

    let mut executor: Executor<FanoObjective, HalleyRoot, HalleyState> =
        Executor::new(objective, HalleyRoot::new(opts.tol)).configure(|state| state.param(x0));
    #[cfg(feature = "obs_slog")]
    if opts.verbose {
        executor = executor.add_observer(SlogLogger::term_noblock(), ObserverMode::Always);
    }
    if let Some(max_iter) = opts.max_iter {
        executor = executor.configure(|state| state.max_iters(max_iter as u64));
    }

    let result = executor.run()?;
    let state = result.state();
    match state.get_termination_status() {
        TerminationStatus::Terminated(TerminationReason::SolverConverged) => {
            state.get_param().copied().ok_or(PredictabilityError::MissingRoot)
        }
        status => Err(PredictabilityError::NonConvergence {
            iterations: state.get_iter(),
            last_x: state.get_param().copied().unwrap_or(f64::NAN),
            status: format!("{status:?}"),
        }),
    }
}

#[cfg(feature = "obs_slog")]
fn log_initial_state(x0: f64, objective: &FanoObjective) {
    eprintln!(
        "init: N = {}, S = {:.9}, x0 = {:.12}, F(x0) = {:.6e}",
        objective.symbol_count(),
        objective.entropy(),
        x0,
        objective.value(x0)
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predictability::options::DEFAULT_TOL;
    use approx::assert_relative_eq;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The NoSolution branch (S > log₂ N) including the 9-decimal rounding.
    // - The near-zero entropy short-circuit.
    // - Reference values of Pmax on representative (N, S) pairs.
    // - Monotonicity of Pmax in S and the residual at the returned root.
    // - Input validation, the iteration cap and the documented instability.
    //
    // They intentionally DO NOT cover:
    // - The entropy estimator; see `entropy::lempel_ziv`.
    // -------------------------------------------------------------------------

    fn limit(n: usize, s: f64) -> f64 {
        match max_predictability(n, s).expect("solver should succeed") {
            MaxPredictability::Limit(p) => p,
            MaxPredictability::NoSolution => panic!("expected a solution for N = {n}, S = {s}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Entropy above log₂ N has no Fano root.
    //
    // Given
    // -----
    // - (N, S) = (2, 1.5), (4, 2.1) and (1, 0.5).
    //
    // Expect
    // ------
    // - NoSolution in every case, with no numeric value attached.
    fn entropy_above_log2_n_returns_no_solution() {
        // Act & Assert
        for &(n, s) in &[(2_usize, 1.5_f64), (4, 2.1), (1, 0.5)] {
            let outcome = max_predictability(n, s).expect("valid inputs");
            assert_eq!(outcome, MaxPredictability::NoSolution, "N = {n}, S = {s}");
            assert_eq!(outcome.value(), None);
            assert!(!outcome.is_feasible());
        }
    }

    #[test]
    // Purpose
    // -------
    // The feasibility check compares 9-decimal roundings, so an entropy
    // exceeding log₂ N by less than 5e-10 is still feasible.
    //
    // Given
    // -----
    // - N = 4, S = 2 + 1e-10 and S = 2 + 1e-8.
    //
    // Expect
    // ------
    // - The first is solved (Pmax ≈ 0.25); the second is NoSolution.
    fn feasibility_check_uses_nine_decimal_rounding() {
        // Act
        let barely = max_predictability(4, 2.0 + 1e-10).expect("valid inputs");
        let above = max_predictability(4, 2.0 + 1e-8).expect("valid inputs");

        // Assert
        assert_relative_eq!(barely.value().expect("feasible"), 0.25, epsilon = 1e-9);
        assert_eq!(above, MaxPredictability::NoSolution);
    }

    #[test]
    // Purpose
    // -------
    // Near-zero entropy short-circuits to exactly 0.999.
    //
    // Given
    // -----
    // - (N, S) = (5, 0.0), (100, 0.005), (1, 0.0) and (4, 0.01).
    //
    // Expect
    // ------
    // - Limit(0.999) in every case.
    fn near_zero_entropy_returns_constant() {
        // Act & Assert
        for &(n, s) in &[(5_usize, 0.0_f64), (100, 0.005), (1, 0.0), (4, 0.01)] {
            assert_eq!(
                max_predictability(n, s).expect("valid inputs"),
                MaxPredictability::Limit(0.999),
                "N = {n}, S = {s}"
            );
        }
    }

    #[test]
    // Purpose
    // -------
    // Reproduce reference Pmax values of the procedure.
    //
    // Given
    // -----
    // - (N, S) pairs with known roots.
    //
    // Expect
    // ------
    // - Pmax within 1e-8 of the reference values.
    fn reference_values_are_reproduced() {
        // Arrange
        let cases = [
            (2_usize, 0.5_f64, 0.889_972_135_6_f64),
            (2, 0.1, 0.987_013_137_9),
            (3, 1.0, 0.772_907_804_8),
            (4, 1.0, 0.810_710_375_1),
            (10, 2.0, 0.660_628_065_7),
            (100, 3.0, 0.683_335_393_4),
        ];

        for &(n, s, expected) in &cases {
            // Act
            let p = limit(n, s);

            // Assert
            assert_relative_eq!(p, expected, epsilon = 1e-8);
        }
    }

    #[test]
    // Purpose
    // -------
    // The returned root satisfies F(Pmax) ≈ 0 and lies in (1/N, 1).
    //
    // Given
    // -----
    // - N = 6 and S ∈ {0.3, 1.0, 2.0}.
    //
    // Expect
    // ------
    // - |F(Pmax)| < 1e-6 and 1/6 < Pmax < 1.
    fn returned_root_has_small_residual() {
        for &s in &[0.3_f64, 1.0, 2.0] {
            // Act
            let p = limit(6, s);
            let residual = FanoObjective::new(6, s).value(p);

            // Assert
            assert!(residual.abs() < 1e-6, "F({p}) = {residual} for S = {s}");
            assert!(p > 1.0 / 6.0 && p < 1.0, "Pmax = {p} for S = {s}");
        }
    }

    #[test]
    // Purpose
    // -------
    // Higher entropy never yields higher predictability.
    //
    // Given
    // -----
    // - N = 4 and increasing S from 0.2 to 1.99.
    //
    // Expect
    // ------
    // - The sequence of Pmax values is non-increasing.
    fn predictability_is_non_increasing_in_entropy() {
        // Arrange
        let entropies = [0.2_f64, 0.4, 0.5, 0.8, 1.0, 1.2, 1.5, 1.8, 1.99];

        // Act
        let limits: Vec<f64> = entropies.iter().map(|&s| limit(4, s)).collect();

        // Assert
        for pair in limits.windows(2) {
            assert!(pair[0] >= pair[1], "Pmax not monotone: {limits:?}");
        }
    }

    #[test]
    // Purpose
    // -------
    // Invalid N or S are errors, not NoSolution.
    //
    // Given
    // -----
    // - N = 0; S = NaN; S = ∞; S = −0.1.
    //
    // Expect
    // ------
    // - InvalidSymbolCount or InvalidEntropy accordingly.
    fn invalid_inputs_return_errors() {
        // Act & Assert
        assert_eq!(
            max_predictability(0, 1.0),
            Err(PredictabilityError::InvalidSymbolCount { count: 0 })
        );
        for &s in &[f64::NAN, f64::INFINITY, -0.1] {
            assert!(
                matches!(max_predictability(3, s), Err(PredictabilityError::InvalidEntropy { .. })),
                "S = {s}"
            );
        }
    }

    #[test]
    // Purpose
    // -------
    // A tight iteration cap surfaces as NonConvergence.
    //
    // Given
    // -----
    // - N = 4, S = 1.0 (≈ 24 iterations needed) and max_iter = 5.
    //
    // Expect
    // ------
    // - NonConvergence reporting 5 iterations.
    fn iteration_cap_returns_non_convergence() {
        // Arrange
        let opts = SolverOptions::new(DEFAULT_TOL, Some(5), false).expect("valid options");

        // Act
        let result = max_predictability_with(4, 1.0, &opts);

        // Assert
        match result {
            Err(PredictabilityError::NonConvergence { iterations, .. }) => {
                assert_eq!(iterations, 5)
            }
            other => panic!("expected NonConvergence, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // The known overshoot of the reference iteration is reported, not
    // hidden behind a NaN result.
    //
    // Given
    // -----
    // - N = 4, S = 0.05 (just above the near-zero short-circuit) with the
    //   uncapped reference configuration.
    //
    // Expect
    // ------
    // - NumericalInstability.
    fn overshoot_past_one_returns_numerical_instability() {
        // Act
        let result = max_predictability_with(4, 0.05, &SolverOptions::uncapped());

        // Assert
        assert!(
            matches!(result, Err(PredictabilityError::NumericalInstability { .. })),
            "got {result:?}"
        );
    }

    #[test]
    // Purpose
    // -------
    // Check the rounding helper and the Display of both outcomes.
    //
    // Given
    // -----
    // - A 12-digit value rounded to 10 digits; Limit(0.5) and NoSolution.
    //
    // Expect
    // ------
    // - Rounded value within 1e-15 of the expectation; "0.5" and
    //   "No solutions".
    fn rounding_and_display_behave_as_documented() {
        // Act & Assert
        assert_relative_eq!(
            round_to_decimals(0.742_891_381_449, 10),
            0.742_891_381_4,
            epsilon = 1e-15
        );
        assert_eq!(MaxPredictability::Limit(0.5).to_string(), "0.5");
        assert_eq!(MaxPredictability::NoSolution.to_string(), "No solutions");
    }
}
