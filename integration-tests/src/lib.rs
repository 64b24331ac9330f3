//! Shared fixtures for end-to-end tests.

use braid_components::sellar::{DesignVariables, SellarInput, SellarMda, SellarOutput, SellarProblem};
use braid_solvers::coupling::gauss_seidel::{self, Config, Error, Solution};

/// Default starting point for the coupling iteration.
pub const INITIAL_COUPLING: [f64; 2] = [1.0, 1.0];

/// Solves the two-discipline system at the given design point.
///
/// # Errors
///
/// Returns an error if the solver fails (it should not for finite designs).
pub fn solve_sellar(
    design: DesignVariables,
    config: &Config,
) -> Result<Solution<SellarInput, SellarOutput, 2>, Error> {
    gauss_seidel::solve_unobserved(
        &SellarMda,
        &SellarProblem::new(design),
        INITIAL_COUPLING,
        config,
    )
}
