//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasCouplingDelta`] — events that carry a per-sweep update magnitude
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use braid_core::Observer;
//! use braid_observers::traits::{CanStopEarly, HasCouplingDelta};
//!
//! struct Stall {
//!     previous: f64,
//! }
//!
//! impl<E: HasCouplingDelta, A: CanStopEarly> Observer<E, A> for Stall {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         let delta = event.coupling_delta();
//!         let stalled = delta >= self.previous;
//!         self.previous = delta;
//!         if stalled {
//!             return Some(A::stop_early());
//!         }
//!         None
//!     }
//! }
//! ```

use braid_solvers::coupling::gauss_seidel;

/// An event that carries a per-sweep coupling update magnitude.
pub trait HasCouplingDelta {
    /// Returns the largest per-variable change this sweep produced.
    fn coupling_delta(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl<I, O, const N: usize> HasCouplingDelta for gauss_seidel::Event<'_, I, O, N> {
    fn coupling_delta(&self) -> f64 {
        self.eval
            .guess
            .iter()
            .zip(&self.eval.updated)
            .map(|(guess, updated)| (updated - guess).abs())
            .fold(0.0, f64::max)
    }
}

impl CanStopEarly for gauss_seidel::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
