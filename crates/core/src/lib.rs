//! Core traits and types for the Braid framework.
//!
//! This crate defines the shared abstractions that solvers, observers, and
//! models build on:
//!
//! - [`Model`] — a callable that maps a typed input to a typed output
//! - [`Snapshot`] — a captured input/output pair from a model call
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`FixedPointProblem`] — a problem trait that adapts coupling variables to
//!   model inputs and extracts updated coupling values from outputs

mod model;
mod observer;
mod problems;

pub use observer::Observer;
pub use problems::FixedPointProblem;
pub use {model::Model, model::Snapshot};
