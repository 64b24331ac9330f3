//! Numerical solvers for the Braid framework.

pub mod coupling;
