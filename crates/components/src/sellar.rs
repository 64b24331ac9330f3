//! The classic two-discipline coupled system.
//!
//! Two disciplines exchange the coupling variables `y1` and `y2`: the first
//! computes `y1` from the design variables and `y2`, the second computes `y2`
//! from the design variables and `y1`. Neither can be evaluated in isolation,
//! so the pair must be iterated to a self-consistent fixed point.
//!
//! - [`DisciplineOne`] / [`DisciplineTwo`] — the individual disciplines
//! - [`SellarMda`] — one Gauss-Seidel sweep of both disciplines as a model
//! - [`SellarProblem`] — adapts the sweep to a fixed-point solver
//! - [`SellarObjective`] — objective and constraint values for an external
//!   driver

mod design;
mod disciplines;
mod mda;
mod objective;
mod problem;

pub use design::DesignVariables;
pub use disciplines::{
    DisciplineOne, DisciplineOneInput, DisciplineOneOutput, DisciplineTwo, DisciplineTwoInput,
    DisciplineTwoOutput,
};
pub use mda::{SellarInput, SellarMda, SellarOutput};
pub use objective::{ObjectiveInput, ObjectiveOutput, SellarObjective};
pub use problem::SellarProblem;
