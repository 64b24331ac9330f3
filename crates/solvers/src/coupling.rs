//! Solvers for coupled systems — resolving coupling variables to a fixed point.
//!
//! A [`FixedPointProblem`] maps a coupling estimate `y: [f64; N]` to model
//! inputs, calls the model, and extracts updated coupling values. Solvers in
//! this module iterate until the updated values agree with the estimate that
//! produced them.
//!
//! # Solvers
//!
//! - [`gauss_seidel`] — block Gauss-Seidel fixed-point iteration
//!
//! [`FixedPointProblem`]: braid_core::FixedPointProblem

mod evaluate;

pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate};

pub mod gauss_seidel;
