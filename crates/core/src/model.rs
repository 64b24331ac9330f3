/// A callable model that maps an input to an output.
///
/// A model can be a single discipline, one sweep of several coupled
/// disciplines, or any other computation a solver needs to call repeatedly.
/// Models must be deterministic: solvers compare successive evaluations, and
/// a model that answers differently for the same input breaks convergence
/// tests and reproducibility.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the model with the given input.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails. Models that are total functions
    /// of their inputs use [`std::convert::Infallible`].
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}

/// A captured input/output pair from a model call.
///
/// Solvers return the snapshot of their final evaluation so callers can
/// inspect the model state that produced the reported values without calling
/// the model again.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<I, O> {
    pub input: I,
    pub output: O,
}

impl<I, O> Snapshot<I, O> {
    /// Creates a new snapshot from input and output values.
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }
}
