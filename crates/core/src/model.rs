/// A callable model that maps a typed input to a typed output.
///
/// Models must be deterministic, always producing the same result for a given
/// input. Outer solvers rely on this when they revisit a point with the same
/// coefficients.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the model with the given input.
    ///
    /// # Errors
    ///
    /// Each model defines its own `Error` type to represent domain-specific failures.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;

    /// Calls the model and captures the input alongside the output.
    ///
    /// # Errors
    ///
    /// Returns the model error unchanged.
    fn snapshot(
        &self,
        input: Self::Input,
    ) -> Result<Snapshot<Self::Input, Self::Output>, Self::Error>
    where
        Self: Sized,
    {
        let output = self.call(&input)?;
        Ok(Snapshot::new(input, output))
    }
}

/// A captured input/output pair from a model call.
#[derive(Debug, Clone, Copy, PartialEq)]
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
