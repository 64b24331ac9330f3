use crate::coupling::Evaluation;

/// Iteration event emitted by the Gauss-Seidel solver.
///
/// One event is emitted per sweep, before the convergence test, so observers
/// see every evaluation including the one that converges.
pub struct Event<'a, I, O, const N: usize> {
    /// Sweep counter (1-based).
    pub iter: usize,

    /// Evaluation at the current coupling estimate.
    pub eval: &'a Evaluation<I, O, N>,
}
