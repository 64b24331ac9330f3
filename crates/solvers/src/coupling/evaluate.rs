use thiserror::Error;

use braid_core::{FixedPointProblem, Model, Snapshot};

/// The result of evaluating a fixed-point problem at a coupling estimate.
#[derive(Debug, Clone)]
pub struct Evaluation<I, O, const N: usize> {
    /// The coupling estimate the model was evaluated at.
    pub guess: [f64; N],
    /// The updated coupling values extracted from the evaluation.
    pub updated: [f64; N],
    /// The captured model input and output.
    pub snapshot: Snapshot<I, O>,
}

/// Errors that can occur when evaluating a fixed-point problem.
#[derive(Debug, Error)]
pub enum EvalError<ME, PE> {
    /// The model call failed.
    #[error("model call failed")]
    Model(#[source] ME),
    /// Failed to construct input or extract coupling values.
    #[error("problem error")]
    Problem(#[source] PE),
}

/// Type alias for the result of [`evaluate`].
pub type EvaluateResult<M, P, const N: usize> = Result<
    Evaluation<<M as Model>::Input, <M as Model>::Output, N>,
    EvalError<<M as Model>::Error, <P as FixedPointProblem<N>>::Error>,
>;

/// Evaluates the model in the context of a fixed-point problem.
///
/// This function maps the coupling estimate to a model input, calls the
/// model, then extracts the updated coupling values from the input and
/// output.
///
/// # Errors
///
/// Returns an error if input mapping, the model call, or coupling extraction
/// fails.
pub fn evaluate<M, P, const N: usize>(
    model: &M,
    problem: &P,
    guess: [f64; N],
) -> EvaluateResult<M, P, N>
where
    M: Model,
    P: FixedPointProblem<N, Input = M::Input, Output = M::Output>,
{
    let input = problem.input(&guess).map_err(EvalError::Problem)?;
    let output = model.call(&input).map_err(EvalError::Model)?;
    let updated = problem
        .coupling(&input, &output)
        .map_err(EvalError::Problem)?;

    Ok(Evaluation {
        guess,
        updated,
        snapshot: Snapshot::new(input, output),
    })
}
