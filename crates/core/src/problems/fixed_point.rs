/// Defines a coupled system to be driven to a self-consistent fixed point.
///
/// A fixed-point problem maps the current coupling estimate to a model input,
/// then extracts updated coupling values from the model input and output.
/// Solvers iterate until the updated values match the estimate within
/// tolerance: the fixed point of the coupled system.
///
/// The const generic `N` is the number of coupling variables. For example,
/// `N = 2` represents a two-discipline system with two coupling variables.
///
/// Design variables — quantities held fixed while the coupling iteration
/// runs — belong inside the problem value itself, set once per solve and
/// immutable for its duration.
pub trait FixedPointProblem<const N: usize> {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Maps the current coupling estimate (`y`) into a model input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the input cannot be constructed from `y`.
    fn input(&self, y: &[f64; N]) -> Result<Self::Input, Self::Error>;

    /// Extracts the updated coupling values from one model evaluation.
    ///
    /// Solvers iterate until these values agree with the estimate that
    /// produced them.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the coupling values cannot be extracted.
    fn coupling(
        &self,
        input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; N], Self::Error>;
}
