//! Benchmark objective functions.
//!
//! Small analytic objectives with known optima, offered for exercising
//! external optimization drivers. Each takes a [`Point2`] and produces the
//! objective value as a plain `f64`.

use std::{convert::Infallible, f64::consts::PI};

use serde::{Deserialize, Serialize};

use braid_core::Model;

/// A point in the plane, the input for every component in this module.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

/// Himmelblau's function: `(x^2 + y - 11)^2 + (x + y^2 - 7)^2`.
///
/// Non-negative everywhere, with four global minima of zero, one of them at
/// `(3, 2)`.
pub struct Himmelblau;

impl Model for Himmelblau {
    type Input = Point2;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let Point2 { x, y } = *input;

        let a = x * x + y - 11.0;
        let b = x + y * y - 7.0;

        Ok(a * a + b * b)
    }
}

/// A shifted quadratic with a cross term: `(x - 4)^2 + x y + (y + 3)^2 - 3`.
pub struct QuizQuadratic;

impl Model for QuizQuadratic {
    type Input = Point2;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let Point2 { x, y } = *input;

        Ok((x - 4.0) * (x - 4.0) + x * y + (y + 3.0) * (y + 3.0) - 3.0)
    }
}

/// A trigonometric valley with many local minima:
/// `0.1 (x + y) - |sin x cos y exp(|1 - sqrt(x^2 + y^2) / pi|)|`.
pub struct CrossValley;

impl Model for CrossValley {
    type Input = Point2;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let Point2 { x, y } = *input;

        let radius = (x * x + y * y).sqrt();
        let envelope = (1.0 - radius / PI).abs().exp();

        Ok(0.1 * (x + y) - (x.sin() * y.cos() * envelope).abs())
    }
}
