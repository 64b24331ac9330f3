use std::convert::Infallible;

use serde::{Deserialize, Serialize};

use braid_core::Model;

/// The first discipline: `y1 = z1^2 + z2 + x - 0.2 * y2`.
///
/// Pure, with no error conditions; defined for all real inputs.
pub struct DisciplineOne;

/// The input for the [`DisciplineOne`] component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisciplineOneInput {
    pub z1: f64,
    pub z2: f64,
    pub x: f64,
    pub y2: f64,
}

/// The output for the [`DisciplineOne`] component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisciplineOneOutput {
    pub y1: f64,
}

impl Model for DisciplineOne {
    type Input = DisciplineOneInput;
    type Output = DisciplineOneOutput;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let Self::Input { z1, z2, x, y2 } = *input;

        Ok(Self::Output {
            y1: z1 * z1 + z2 + x - 0.2 * y2,
        })
    }
}

/// The second discipline: `y2 = sqrt(y1) + z1 + z2`.
///
/// A negative `y1` is sign-flipped before the square root. This is a domain
/// clamp, not an error condition: the discipline stays defined for all real
/// inputs, and the square root never receives a negative value.
pub struct DisciplineTwo;

/// The input for the [`DisciplineTwo`] component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisciplineTwoInput {
    pub z1: f64,
    pub z2: f64,
    pub y1: f64,
}

/// The output for the [`DisciplineTwo`] component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisciplineTwoOutput {
    pub y2: f64,
}

impl Model for DisciplineTwo {
    type Input = DisciplineTwoInput;
    type Output = DisciplineTwoOutput;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let Self::Input { z1, z2, y1 } = *input;

        // Defend against a negative square root argument.
        let y1 = if y1 < 0.0 { -y1 } else { y1 };

        Ok(Self::Output {
            y2: y1.sqrt() + z1 + z2,
        })
    }
}
