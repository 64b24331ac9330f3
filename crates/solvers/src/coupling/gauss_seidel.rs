//! Block Gauss-Seidel fixed-point solver for coupled systems.
//!
//! # Algorithm
//!
//! Each iteration performs one sweep of the coupled system: the coupling
//! estimate is mapped to a model input, the model is called, and updated
//! coupling values are extracted. The solver converges when every coupling
//! variable changes by no more than the configured tolerance between
//! successive sweeps:
//!
//! ```text
//! y_{k+1} = g(y_k),    converged when |y_{k+1} - y_k| <= tol (per variable)
//! ```
//!
//! The model is always evaluated at least once, at the initial guess, so the
//! returned [`Solution`] carries a snapshot even when `max_iters` is zero.
//!
//! # Termination
//!
//! Exhausting the iteration budget is not an error: the solver returns
//! [`Status::MaxIters`] with the most recent coupling values, and the caller
//! decides whether to retry with a relaxed tolerance or a larger budget.
//! Hard errors are reserved for non-finite values and model/problem failures.
//!
//! # Observer
//!
//! The observer receives an [`Event`] for each sweep and may return
//! [`Action::StopEarly`] to halt the iteration.

mod action;
mod config;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use braid_core::{FixedPointProblem, Model, Observer};

use crate::coupling::evaluate;

/// Drives a coupled system to a fixed point using block Gauss-Seidel iteration.
///
/// The observer receives an [`Event`] for each sweep. See the
/// [module docs](self) for the convergence test and termination semantics.
///
/// # Errors
///
/// Returns an error if the initial guess is non-finite, the problem produces
/// a non-finite coupling value, or the model or problem fails during
/// evaluation.
pub fn solve<M, P, Obs, const N: usize>(
    model: &M,
    problem: &P,
    initial: [f64; N],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: FixedPointProblem<N, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output, N>, Action>,
{
    if let Some(&value) = initial.iter().find(|v| !v.is_finite()) {
        return Err(Error::NonFiniteInitial { value });
    }

    let mut eval = evaluate(model, problem, initial)?;

    if config.max_iters() == 0 {
        return Ok(Solution {
            status: Status::MaxIters,
            coupling: initial,
            iters: 0,
            snapshot: eval.snapshot,
        });
    }

    let mut iter = 0;
    loop {
        iter += 1;

        if let Some(&value) = eval.updated.iter().find(|v| !v.is_finite()) {
            return Err(Error::NonFiniteCoupling { iter, value });
        }

        let event = Event { iter, eval: &eval };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::from_eval(eval, Status::StoppedByObserver, iter));
        }

        let converged = eval
            .guess
            .iter()
            .zip(&eval.updated)
            .all(|(guess, updated)| (updated - guess).abs() <= config.coupling_tol());

        if converged {
            return Ok(Solution::from_eval(eval, Status::Converged, iter));
        }

        if iter == config.max_iters() {
            return Ok(Solution::from_eval(eval, Status::MaxIters, iter));
        }

        let next = eval.updated;
        eval = evaluate(model, problem, next)?;
    }
}

/// Drives a coupled system to a fixed point without observation.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the initial guess is non-finite, the problem produces
/// a non-finite coupling value, or the model or problem fails during
/// evaluation.
pub fn solve_unobserved<M, P, const N: usize>(
    model: &M,
    problem: &P,
    initial: [f64; N],
    config: &Config,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: FixedPointProblem<N, Input = M::Input, Output = M::Output>,
{
    solve(model, problem, initial, config, ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{cell::Cell, convert::Infallible};

    use approx::assert_relative_eq;

    // --- Test fixtures ---

    /// Model that applies a scalar affine map: `y -> slope * y + offset`.
    ///
    /// Contractive when `|slope| < 1`, with fixed point `offset / (1 - slope)`.
    struct AffineModel {
        slope: f64,
        offset: f64,
        calls: Cell<usize>,
    }

    impl AffineModel {
        fn new(slope: f64, offset: f64) -> Self {
            Self {
                slope,
                offset,
                calls: Cell::new(0),
            }
        }
    }

    impl Model for AffineModel {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.slope * input + self.offset)
        }
    }

    /// Problem for a scalar model whose output is the updated coupling value.
    struct ScalarCoupling;

    impl FixedPointProblem<1> for ScalarCoupling {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn input(&self, y: &[f64; 1]) -> Result<Self::Input, Self::Error> {
            Ok(y[0])
        }

        fn coupling(
            &self,
            _input: &Self::Input,
            output: &Self::Output,
        ) -> Result<[f64; 1], Self::Error> {
            Ok([*output])
        }
    }

    /// Model performing one sweep of a linear two-variable coupled system.
    ///
    /// The second variable is updated from the freshly computed first one,
    /// as in block Gauss-Seidel. Fixed point of the defaults: `[4/9, 10/9]`.
    struct LinearSweepModel;

    impl Model for LinearSweepModel {
        type Input = [f64; 2];
        type Output = [f64; 2];
        type Error = Infallible;

        fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
            let a = 1.0 - 0.5 * input[1];
            let b = 1.0 + 0.25 * a;
            Ok([a, b])
        }
    }

    /// Problem passing the two-variable estimate straight through.
    struct PairCoupling;

    impl FixedPointProblem<2> for PairCoupling {
        type Input = [f64; 2];
        type Output = [f64; 2];
        type Error = Infallible;

        fn input(&self, y: &[f64; 2]) -> Result<Self::Input, Self::Error> {
            Ok(*y)
        }

        fn coupling(
            &self,
            _input: &Self::Input,
            output: &Self::Output,
        ) -> Result<[f64; 2], Self::Error> {
            Ok(*output)
        }
    }

    /// Model that always produces NaN.
    struct NanModel;

    impl Model for NanModel {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn call(&self, _input: &Self::Input) -> Result<Self::Output, Self::Error> {
            Ok(f64::NAN)
        }
    }

    // --- Tests ---

    #[test]
    fn converges_to_scalar_fixed_point() {
        let model = AffineModel::new(0.5, 1.0);
        let problem = ScalarCoupling;

        let solution = solve_unobserved(&model, &problem, [0.0], &Config::default())
            .expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.coupling[0], 2.0, epsilon = 1e-5);

        // One more sweep moves the solution by less than the tolerance.
        let again = evaluate(&model, &problem, solution.coupling).expect("should evaluate");
        assert!((again.updated[0] - solution.coupling[0]).abs() < 1e-6);
    }

    #[test]
    fn converges_two_variable_sweep() {
        let model = LinearSweepModel;
        let problem = PairCoupling;

        let solution = solve_unobserved(&model, &problem, [1.0, 1.0], &Config::default())
            .expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.coupling[0], 4.0 / 9.0, epsilon = 1e-5);
        assert_relative_eq!(solution.coupling[1], 10.0 / 9.0, epsilon = 1e-5);
    }

    #[test]
    fn zero_max_iters_returns_initial() {
        let model = AffineModel::new(0.5, 1.0);
        let problem = ScalarCoupling;

        let config = Config::new(0, 1e-6).expect("valid config");
        let solution =
            solve_unobserved(&model, &problem, [3.0], &config).expect("should return initial");

        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.iters, 0);
        assert_relative_eq!(solution.coupling[0], 3.0);
        // The model is still evaluated once, at the initial guess.
        assert_eq!(model.calls.get(), 1);
        assert_relative_eq!(solution.snapshot.output, 2.5);
    }

    #[test]
    fn budget_exhaustion_is_not_an_error() {
        // Divergent map: y -> 2y + 1 from 0 gives 1, 3, 7, ...
        let model = AffineModel::new(2.0, 1.0);
        let problem = ScalarCoupling;

        let config = Config::new(3, 1e-6).expect("valid config");
        let solution =
            solve_unobserved(&model, &problem, [0.0], &config).expect("should not error");

        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.iters, 3);
        assert_relative_eq!(solution.coupling[0], 7.0);
    }

    #[test]
    fn observer_can_stop_early() {
        let model = AffineModel::new(0.5, 1.0);
        let problem = ScalarCoupling;

        let observer = |event: &Event<'_, f64, f64, 1>| {
            if event.iter >= 2 {
                Some(Action::StopEarly)
            } else {
                None
            }
        };

        let solution = solve(&model, &problem, [0.0], &Config::default(), observer)
            .expect("should stop cleanly");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 2);
    }

    #[test]
    fn observer_sees_each_sweep() {
        let model = AffineModel::new(0.5, 1.0);
        let problem = ScalarCoupling;

        let mut iters = Vec::new();
        let mut updates = Vec::new();
        solve(
            &model,
            &problem,
            [0.0],
            &Config::default(),
            |event: &Event<'_, f64, f64, 1>| {
                iters.push(event.iter);
                updates.push(event.eval.updated[0]);
                None
            },
        )
        .expect("should solve");

        assert_eq!(iters[..3], [1, 2, 3]);
        assert_relative_eq!(updates[0], 1.0);
        assert_relative_eq!(updates[1], 1.5);
        assert_relative_eq!(updates[2], 1.75);
    }

    #[test]
    fn identical_inputs_yield_identical_solutions() {
        let model = AffineModel::new(0.5, 1.0);
        let problem = ScalarCoupling;

        let first = solve_unobserved(&model, &problem, [0.0], &Config::default())
            .expect("should solve");
        let second = solve_unobserved(&model, &problem, [0.0], &Config::default())
            .expect("should solve");

        assert_eq!(first.status, second.status);
        assert_eq!(first.iters, second.iters);
        assert_eq!(first.coupling, second.coupling);
    }

    #[test]
    fn errors_on_non_finite_initial() {
        let model = AffineModel::new(0.5, 1.0);
        let problem = ScalarCoupling;

        let result = solve_unobserved(&model, &problem, [f64::NAN], &Config::default());
        assert!(matches!(result, Err(Error::NonFiniteInitial { .. })));

        let result = solve_unobserved(&model, &problem, [f64::INFINITY], &Config::default());
        assert!(matches!(result, Err(Error::NonFiniteInitial { .. })));
    }

    #[test]
    fn errors_on_non_finite_coupling() {
        let model = NanModel;
        let problem = ScalarCoupling;

        let result = solve_unobserved(&model, &problem, [1.0], &Config::default());

        assert!(matches!(
            result,
            Err(Error::NonFiniteCoupling { iter: 1, .. })
        ));
    }

    #[test]
    fn rejects_invalid_tolerance() {
        assert!(matches!(
            Config::new(10, -1.0),
            Err(ConfigError::CouplingTol)
        ));
        assert!(matches!(
            Config::new(10, f64::NAN),
            Err(ConfigError::CouplingTol)
        ));
    }

    #[test]
    fn zero_tolerance_accepts_exact_fixed_point() {
        // y -> 0 * y + 4 lands exactly on the fixed point in one sweep.
        let model = AffineModel::new(0.0, 4.0);
        let problem = ScalarCoupling;

        let config = Config::new(10, 0.0).expect("valid config");
        let solution = solve_unobserved(&model, &problem, [4.0], &config).expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters, 1);
        assert_relative_eq!(solution.coupling[0], 4.0);
    }
}
