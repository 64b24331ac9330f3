//! Aircraft flyaway cost estimation.
//!
//! A weight-based power law with a cost escalation factor that adjusts a
//! base-year estimate to a target year.

use thiserror::Error;
use uom::si::{f64::Mass, mass::pound};

use braid_core::Model;

/// Reference year of the cost escalation factor tables.
const CEF_REFERENCE_YEAR: i32 = 2006;

/// Estimates aircraft flyaway cost from takeoff gross mass.
///
/// The cost model is `10^(3.3191 + 0.8043 ln m)` dollars, with `m` the gross
/// mass in pounds, scaled by the escalation factor between the base year the
/// power law was fit in and the target year the estimate is for.
pub struct FlyawayCost {
    target_year: i32,
    base_year: i32,
}

/// The input for the [`FlyawayCost`] component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostInput {
    /// Takeoff gross mass of the aircraft.
    pub gross_mass: Mass,
}

/// The output for the [`FlyawayCost`] component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostOutput {
    /// Estimated flyaway cost in target-year dollars.
    pub flyaway_cost: f64,
}

/// Errors that can occur when estimating flyaway cost.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CostError {
    #[error("gross mass must be positive")]
    NonPositiveMass,
}

impl Default for FlyawayCost {
    fn default() -> Self {
        Self::new(2030, 1989)
    }
}

impl FlyawayCost {
    /// Creates a cost model escalating from `base_year` to `target_year`.
    #[must_use]
    pub fn new(target_year: i32, base_year: i32) -> Self {
        Self {
            target_year,
            base_year,
        }
    }

    /// Returns the cost escalation factor between the base and target years.
    #[must_use]
    pub fn escalation(&self) -> f64 {
        let base = cef(self.base_year);
        let target = cef(self.target_year);

        target / base
    }
}

/// Cost escalation factor for a single year.
fn cef(year: i32) -> f64 {
    5.1703 + 0.104891 * f64::from(year - CEF_REFERENCE_YEAR)
}

impl Model for FlyawayCost {
    type Input = CostInput;
    type Output = CostOutput;
    type Error = CostError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let mass = input.gross_mass.get::<pound>();
        if mass.is_nan() || mass <= 0.0 {
            return Err(CostError::NonPositiveMass);
        }

        let base_cost = 10.0_f64.powf(3.3191 + 0.8043 * mass.ln());

        Ok(Self::Output {
            flyaway_cost: base_cost * self.escalation(),
        })
    }
}
