use braid_core::Observer;

use crate::traits::{CanStopEarly, HasCouplingDelta};

/// Stops a solver once its updates are small enough.
///
/// Useful when a looser answer is acceptable before the solver's own
/// tolerance is met: after `min_iters` sweeps, the first sweep whose
/// coupling delta drops below `tolerance` stops the solve.
pub struct GoodEnough {
    tolerance: f64,
    min_iters: usize,
    iter: usize,
}

impl GoodEnough {
    /// Creates an observer that stops once the coupling delta drops below
    /// `tolerance`, but never before `min_iters` sweeps have run.
    #[must_use]
    pub fn new(tolerance: f64, min_iters: usize) -> Self {
        Self {
            tolerance,
            min_iters,
            iter: 0,
        }
    }
}

impl<E: HasCouplingDelta, A: CanStopEarly> Observer<E, A> for GoodEnough {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.iter += 1;
        if self.iter >= self.min_iters && event.coupling_delta().abs() < self.tolerance {
            return Some(A::stop_early());
        }
        None
    }
}
