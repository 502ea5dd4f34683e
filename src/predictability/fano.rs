//! predictability::fano — the Fano-bound objective and its derivatives.
//!
//! Purpose
//! -------
//! Define the function whose root in (0, 1) is the maximum predictability
//! Pmax of a series with entropy S over N distinct symbols:
//!
//! ```text
//! F(x)   = −x ln x − (1 − x) ln(1 − x) + (1 − x) ln(N − 1) − S ln 2
//! F'(x)  = ln(1 − x) − ln x − ln(N − 1)
//! F''(x) = 1 / (x (x − 1))
//! ```
//!
//! and expose it to `argmin` as a problem with cost, gradient and Hessian.
//!
//! Invariants & assumptions
//! ------------------------
//! - F is evaluated without clamping. Outside (0, 1) the logarithms return
//!   NaN, and F'' is singular at 0 and 1; detecting that is the solver's job.
//! - `ln(N − 1)` is precomputed. For N = 1 it is −∞, which the solver never
//!   reaches because (N = 1, S > 0.01) is always infeasible.
//!
//! Conventions
//! -----------
//! - S is the (already rounded) entropy from the feasibility check.
//! - The `argmin` "cost" is F itself, not |F| and not a loss to minimize;
//!   the Halley solver only reads it as a residual.

use std::f64::consts::LN_2;

use argmin::core::{CostFunction, Error, Gradient, Hessian};

/// FanoObjective — F, F′ and F″ for a fixed (N, S).
///
/// Fields
/// ------
/// - `symbol_count`: `usize`
///   Number of distinct symbols N (≥ 1).
/// - `entropy`: `f64`
///   Entropy S in the units produced by the estimator.
/// - `ln_alternatives`: `f64`
///   Cached ln(N − 1).
/// - `entropy_nats`: `f64`
///   Cached S · ln 2.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FanoObjective {
    symbol_count: usize,
    entropy: f64,
    ln_alternatives: f64,
    entropy_nats: f64,
}

impl FanoObjective {
    pub fn new(symbol_count: usize, entropy: f64) -> Self {
        let alternatives = symbol_count.saturating_sub(1) as f64;
        FanoObjective {
            symbol_count,
            entropy,
            ln_alternatives: alternatives.ln(),
            entropy_nats: entropy * LN_2,
        }
    }

    pub fn symbol_count(&self) -> usize {
        self.symbol_count
    }

    pub fn entropy(&self) -> f64 {
        self.entropy
    }

    /// F(x).
    #[inline]
    pub fn value(&self, x: f64) -> f64 {
        let y = 1.0 - x;
        -x * x.ln() - y * y.ln() + y * self.ln_alternatives - self.entropy_nats
    }

    /// F′(x).
    #[inline]
    pub fn first_derivative(&self, x: f64) -> f64 {
        (1.0 - x).ln() - x.ln() - self.ln_alternatives
    }

    /// F″(x). Does not depend on N or S.
    #[inline]
    pub fn second_derivative(&self, x: f64) -> f64 {
        1.0 / ((x - 1.0) * x)
    }
}

/// Halley correction Δ = F / (F′ − F·F″ / (2F′)); the update is x ← x − Δ.
///
/// No guard is applied. With F′ = 0 the correction term is ±∞ and Δ
/// collapses to 0, so the iterate would never move; callers must reject a
/// vanishing F′ before stepping.
#[inline]
pub fn halley_step(value: f64, first: f64, second: f64) -> f64 {
    value / (first - value * second / (2.0 * first))
}

impl CostFunction for FanoObjective {
    type Param = f64;
    type Output = f64;

    fn cost(&self, x: &f64) -> Result<f64, Error> {
        Ok(self.value(*x))
    }
}

impl Gradient for FanoObjective {
    type Param = f64;
    type Gradient = f64;

    fn gradient(&self, x: &f64) -> Result<f64, Error> {
        Ok(self.first_derivative(*x))
    }
}

impl Hessian for FanoObjective {
    type Param = f64;
    type Hessian = f64;

    fn hessian(&self, x: &f64) -> Result<f64, Error> {
        Ok(self.second_derivative(*x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - F, F′ and F″ against closed-form values at simple points.
    // - Consistency of F′ and F″ with central finite differences.
    // - The Halley step formula and its blow-up at F′ = 0.
    // - The argmin trait wiring.
    // -------------------------------------------------------------------------

    const TOL: f64 = 1e-12;

    #[test]
    // Purpose
    // -------
    // At the uniform point x = 1/N the Fano entropy is log₂ N bits, so F
    // vanishes when S = log₂ N and F′ vanishes for any S.
    //
    // Given
    // -----
    // - N = 4, S = 2 and x = 0.25.
    //
    // Expect
    // ------
    // - F(0.25) ≈ 0 and F′(0.25) ≈ 0.
    fn objective_vanishes_at_uniform_point_for_maximal_entropy() {
        // Arrange
        let objective = FanoObjective::new(4, 2.0);

        // Act & Assert
        assert_relative_eq!(objective.value(0.25), 0.0, epsilon = TOL);
        assert_relative_eq!(objective.first_derivative(0.25), 0.0, epsilon = TOL);
        assert_eq!(objective.symbol_count(), 4);
        assert_eq!(objective.entropy(), 2.0);
    }

    #[test]
    // Purpose
    // -------
    // For N = 2 the ln(N − 1) term drops and F is binary entropy minus S ln 2.
    //
    // Given
    // -----
    // - N = 2, S = 0.5 and x = 0.5.
    //
    // Expect
    // ------
    // - F(0.5) = ln 2 − 0.5 ln 2 and F″(0.5) = −4.
    fn objective_reduces_to_binary_entropy_for_two_symbols() {
        // Arrange
        let objective = FanoObjective::new(2, 0.5);

        // Act & Assert
        assert_relative_eq!(objective.value(0.5), 0.5 * LN_2, epsilon = TOL);
        assert_relative_eq!(objective.second_derivative(0.5), -4.0, epsilon = TOL);
    }

    #[test]
    // Purpose
    // -------
    // Analytic derivatives agree with central finite differences.
    //
    // Given
    // -----
    // - N = 6, S = 1.3 and x ∈ {0.2, 0.5, 0.8}, h = 1e-6.
    //
    // Expect
    // ------
    // - |F′ − FD(F)| and |F″ − FD(F′)| below 1e-6.
    fn derivatives_match_finite_differences() {
        // Arrange
        let objective = FanoObjective::new(6, 1.3);
        let h = 1e-6;

        for &x in &[0.2, 0.5, 0.8] {
            // Act
            let fd_first = (objective.value(x + h) - objective.value(x - h)) / (2.0 * h);
            let fd_second =
                (objective.first_derivative(x + h) - objective.first_derivative(x - h)) / (2.0 * h);

            // Assert
            assert_relative_eq!(objective.first_derivative(x), fd_first, epsilon = 1e-6);
            assert_relative_eq!(objective.second_derivative(x), fd_second, epsilon = 1e-6);
        }
    }

    #[test]
    // Purpose
    // -------
    // Outside (0, 1) F is NaN rather than a silently clamped value.
    //
    // Given
    // -----
    // - N = 4, S = 1 and x = 1.001.
    //
    // Expect
    // ------
    // - F(1.001) is NaN.
    fn objective_is_nan_outside_unit_interval() {
        // Arrange
        let objective = FanoObjective::new(4, 1.0);

        // Act & Assert
        assert!(objective.value(1.001).is_nan());
    }

    #[test]
    // Purpose
    // -------
    // The Halley step matches its formula and makes no progress when F′ = 0.
    //
    // Given
    // -----
    // - (F, F′, F″) = (1, 2, −4) and (1, 0, −4).
    //
    // Expect
    // ------
    // - Δ = 1 / (2 + 1) = 1/3; the second case collapses to Δ = 0.
    fn halley_step_matches_formula_and_stalls_on_flat_slope() {
        // Act & Assert
        assert_relative_eq!(halley_step(1.0, 2.0, -4.0), 1.0 / 3.0, epsilon = TOL);
        assert_eq!(halley_step(1.0, 0.0, -4.0), 0.0);
    }

    #[test]
    // Purpose
    // -------
    // The argmin trait methods forward to the inherent methods.
    //
    // Given
    // -----
    // - N = 3, S = 1.0 and x = 0.6.
    //
    // Expect
    // ------
    // - cost/gradient/hessian equal value/first/second derivative.
    fn argmin_traits_forward_to_objective() {
        // Arrange
        let objective = FanoObjective::new(3, 1.0);
        let x = 0.6;

        // Act
        let cost = objective.cost(&x).expect("cost is infallible");
        let gradient = objective.gradient(&x).expect("gradient is infallible");
        let hessian = objective.hessian(&x).expect("hessian is infallible");

        // Assert
        assert_eq!(cost, objective.value(x));
        assert_eq!(gradient, objective.first_derivative(x));
        assert_eq!(hessian, objective.second_derivative(x));
    }
}
