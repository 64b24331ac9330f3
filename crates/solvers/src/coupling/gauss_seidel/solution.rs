use braid_core::Snapshot;

use crate::coupling::Evaluation;

/// Indicates whether the solver converged or hit the iteration limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Converged according to the configured tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    ///
    /// This is not an error: the caller may retry with a relaxed tolerance
    /// or a larger iteration budget.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a Gauss-Seidel solve.
#[derive(Debug, Clone)]
pub struct Solution<I, O, const N: usize> {
    /// Final solver status.
    pub status: Status,

    /// Coupling values when the solver finished.
    pub coupling: [f64; N],

    /// Number of sweeps performed.
    pub iters: usize,

    /// Snapshot of the model evaluation that produced the final values.
    pub snapshot: Snapshot<I, O>,
}

impl<I, O, const N: usize> Solution<I, O, N> {
    /// Constructs a solution from an evaluation result.
    pub(super) fn from_eval(eval: Evaluation<I, O, N>, status: Status, iters: usize) -> Self {
        Self {
            status,
            coupling: eval.updated,
            iters,
            snapshot: eval.snapshot,
        }
    }
}
