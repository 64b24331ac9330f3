use std::convert::Infallible;

use serde::{Deserialize, Serialize};

use braid_core::Model;

use super::DesignVariables;

/// Objective and constraint values of the two-discipline system.
///
/// Computes `objective = x^2 + z2 + y1 + exp(-y2)` along with the two
/// constraint values `con1 = y1` and `con2 = y2`. An external driver applies
/// its own bounds to the constraints (classically `y1 >= 3.16` and
/// `y2 <= 24.0`); this component only reports the values.
pub struct SellarObjective;

/// The input for the [`SellarObjective`] component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObjectiveInput {
    pub design: DesignVariables,
    pub y1: f64,
    pub y2: f64,
}

/// The output for the [`SellarObjective`] component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObjectiveOutput {
    pub objective: f64,
    pub con1: f64,
    pub con2: f64,
}

impl Model for SellarObjective {
    type Input = ObjectiveInput;
    type Output = ObjectiveOutput;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let Self::Input { design, y1, y2 } = *input;

        Ok(Self::Output {
            objective: design.x * design.x + design.z2 + y1 + (-y2).exp(),
            con1: y1,
            con2: y2,
        })
    }
}
