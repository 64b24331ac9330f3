use std::convert::Infallible;

use braid_core::FixedPointProblem;

use super::{DesignVariables, SellarInput, SellarOutput};

/// Adapts the two-discipline sweep to a fixed-point solver.
///
/// The problem owns the design variables, which stay fixed for the duration
/// of a solve. The coupling estimate is `[y1, y2]`; only `y2` enters the
/// sweep, since one sweep recomputes `y1` before `y2` consumes it. The `y1`
/// component still participates in the solver's convergence test.
pub struct SellarProblem {
    design: DesignVariables,
}

impl SellarProblem {
    /// Creates a problem for the given design point.
    #[must_use]
    pub fn new(design: DesignVariables) -> Self {
        Self { design }
    }

    /// Returns the design variables this problem evaluates at.
    #[must_use]
    pub fn design(&self) -> DesignVariables {
        self.design
    }
}

impl FixedPointProblem<2> for SellarProblem {
    type Input = SellarInput;
    type Output = SellarOutput;
    type Error = Infallible;

    fn input(&self, y: &[f64; 2]) -> Result<Self::Input, Self::Error> {
        Ok(SellarInput {
            design: self.design,
            y2: y[1],
        })
    }

    fn coupling(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 2], Self::Error> {
        Ok([output.y1, output.y2])
    }
}
