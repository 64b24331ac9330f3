//! Reusable observers for Braid solvers.
//!
//! - [`traits`] — capability traits that let observers work across solvers
//! - [`Trace`] — records each iteration's coupling estimate
//! - [`GoodEnough`] — stops a solver once its updates are small enough

pub mod traits;

mod good_enough;
mod trace;

pub use good_enough::GoodEnough;
pub use trace::Trace;
