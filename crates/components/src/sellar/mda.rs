use std::convert::Infallible;

use serde::{Deserialize, Serialize};

use braid_core::Model;

use super::{
    DesignVariables, DisciplineOne, DisciplineOneInput, DisciplineOneOutput, DisciplineTwo,
    DisciplineTwoInput, DisciplineTwoOutput,
};

/// One Gauss-Seidel sweep of the two-discipline system.
///
/// Calling the model computes a fresh `y1` from the incoming `y2`, then a
/// fresh `y2` from that `y1`. Iterating this sweep to a fixed point resolves
/// the coupling between the disciplines.
pub struct SellarMda;

/// The input for the [`SellarMda`] component.
///
/// Only `y2` feeds the sweep: `y1` is recomputed before anything consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SellarInput {
    pub design: DesignVariables,
    pub y2: f64,
}

/// The output for the [`SellarMda`] component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SellarOutput {
    pub y1: f64,
    pub y2: f64,
}

impl Model for SellarMda {
    type Input = SellarInput;
    type Output = SellarOutput;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let DesignVariables { x, z1, z2 } = input.design;

        let DisciplineOneOutput { y1 } = DisciplineOne.call(&DisciplineOneInput {
            z1,
            z2,
            x,
            y2: input.y2,
        })?;
        let DisciplineTwoOutput { y2 } = DisciplineTwo.call(&DisciplineTwoInput { z1, z2, y1 })?;

        Ok(Self::Output { y1, y2 })
    }
}
