use thiserror::Error;

/// Configuration for the Gauss-Seidel solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    coupling_tol: f64,
}

/// Errors that can occur when validating a Gauss-Seidel solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("coupling_tol must be finite and non-negative")]
    CouplingTol,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(100, 1e-6).unwrap()
    }
}

impl Config {
    /// Creates a new config with a validated tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is negative or non-finite.
    pub fn new(max_iters: usize, coupling_tol: f64) -> Result<Self, ConfigError> {
        if !coupling_tol.is_finite() || coupling_tol < 0.0 {
            return Err(ConfigError::CouplingTol);
        }

        Ok(Self {
            max_iters,
            coupling_tol,
        })
    }

    /// Returns the maximum number of sweeps.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the per-variable tolerance for coupling convergence.
    #[must_use]
    pub fn coupling_tol(&self) -> f64 {
        self.coupling_tol
    }
}
