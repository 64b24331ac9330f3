use std::error::Error as StdError;

use crate::coupling::EvalError;

/// Errors that can occur during Gauss-Seidel solving.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("initial guess contains non-finite value: {value}")]
    NonFiniteInitial { value: f64 },

    #[error("non-finite coupling value {value} at iteration {iter}")]
    NonFiniteCoupling { iter: usize, value: f64 },

    #[error("model call failed")]
    Model(#[source] Box<dyn StdError + Send + Sync>),

    #[error("problem error")]
    Problem(#[source] Box<dyn StdError + Send + Sync>),
}

impl<ME, PE> From<EvalError<ME, PE>> for Error
where
    ME: StdError + Send + Sync + 'static,
    PE: StdError + Send + Sync + 'static,
{
    fn from(err: EvalError<ME, PE>) -> Self {
        match err {
            EvalError::Model(e) => Self::Model(Box::new(e)),
            EvalError::Problem(e) => Self::Problem(Box::new(e)),
        }
    }
}
