//! Halley root finder implemented as an `argmin` solver.
//!
//! Each iteration reads the residual F(x) stored as the state's cost, the
//! first and second derivatives from the problem, applies
//! x ← x − F / (F′ − F·F″ / (2F′)) and stores F at the new iterate. The
//! solver declares convergence once |F(x)| < `tol`; the executor's
//! `max_iters` provides the optional cap.
//!
//! A non-finite step or a non-finite residual at the new iterate aborts the
//! run with [`PredictabilityError::NumericalInstability`]. This is where the
//! known fragility of the procedure surfaces (F′ ≈ 0, iterates escaping
//! (0, 1)); it is reported, not repaired.
use argmin::core::{
    ArgminError, CostFunction, Error, Gradient, Hessian, IterState, KV, Problem, Solver, State,
    TerminationReason, TerminationStatus,
};
use serde::{Deserialize, Serialize};

use crate::predictability::{errors::PredictabilityError, fano::halley_step};

/// Iteration state: scalar param, gradient and Hessian, `f64` float type.
pub type HalleyState = IterState<f64, f64, (), f64, (), f64>;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HalleyRoot {
    tol: f64,
}

impl HalleyRoot {
    pub fn new(tol: f64) -> Self {
        HalleyRoot { tol }
    }

    pub fn tol(&self) -> f64 {
        self.tol
    }
}

impl<O> Solver<O, HalleyState> for HalleyRoot
where
    O: CostFunction<Param = f64, Output = f64>
        + Gradient<Param = f64, Gradient = f64>
        + Hessian<Param = f64, Hessian = f64>,
{
    const NAME: &'static str = "Halley root";

    fn init(
        &mut self, problem: &mut Problem<O>, state: HalleyState,
    ) -> Result<(HalleyState, Option<KV>), Error> {
        let x0 = current_param(&state)?;
        let residual = problem.cost(&x0)?;
        if !residual.is_finite() {
            return Err(PredictabilityError::NumericalInstability {
                iteration: 0,
                x: x0,
                reason: "Objective is not finite at the initial iterate.",
            }
            .into());
        }
        Ok((state.cost(residual), None))
    }

    fn next_iter(
        &mut self, problem: &mut Problem<O>, state: HalleyState,
    ) -> Result<(HalleyState, Option<KV>), Error> {
        let x = current_param(&state)?;
        let iteration = state.get_iter() + 1;
        let residual = state.get_cost();
        let first = problem.gradient(&x)?;
        if first == 0.0 || !first.is_finite() {
            return Err(PredictabilityError::NumericalInstability {
                iteration,
                x,
                reason: "First derivative vanished or is not finite.",
            }
            .into());
        }
        let second = problem.hessian(&x)?;

        let next = x - halley_step(residual, first, second);
        if !next.is_finite() {
            return Err(PredictabilityError::NumericalInstability {
                iteration,
                x,
                reason: "Halley step is not finite.",
            }
            .into());
        }

        let next_residual = problem.cost(&next)?;
        if !next_residual.is_finite() {
            return Err(PredictabilityError::NumericalInstability {
                iteration,
                x: next,
                reason: "Iterate left the open interval (0, 1).",
            }
            .into());
        }
        Ok((state.param(next).cost(next_residual), None))
    }

    fn terminate(&mut self, state: &HalleyState) -> TerminationStatus {
        if state.get_cost().abs() < self.tol {
            TerminationStatus::Terminated(TerminationReason::SolverConverged)
        } else {
            TerminationStatus::NotTerminated
        }
    }
}

fn current_param(state: &HalleyState) -> Result<f64, Error> {
    state.get_param().copied().ok_or_else(|| {
        ArgminError::NotInitialized { text: "Halley root requires an initial iterate.".to_string() }
            .into()
    })
}
