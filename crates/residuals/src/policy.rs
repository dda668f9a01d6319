use crate::{COUNTRIES, Control, ExogenousState};

/// Maps a next-period shock realization to the control the fitted policy predicts.
///
/// Implementors own the approximation: basis coefficients, basis size, the
/// state-space bounds, and whether the basis is Chebyshev or something else.
/// The evaluators only ever ask for a prediction.
///
/// Closures of the form `Fn(&ExogenousState, &[f64; 2]) -> Result<Control, E>`
/// implement this trait, which keeps test doubles short.
pub trait PolicyEvaluator {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Predicts next period's control.
    ///
    /// `capital` is the current end-of-period capital of each country, the
    /// state the next-period control depends on.
    ///
    /// # Errors
    ///
    /// Returns an implementor-defined error, for example when the realization
    /// falls outside the approximation's domain.
    fn predict(
        &self,
        exog_lead: &ExogenousState,
        capital: &[f64; COUNTRIES],
    ) -> Result<Control, Self::Error>;
}

impl<F, E> PolicyEvaluator for F
where
    F: Fn(&ExogenousState, &[f64; COUNTRIES]) -> Result<Control, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn predict(
        &self,
        exog_lead: &ExogenousState,
        capital: &[f64; COUNTRIES],
    ) -> Result<Control, Self::Error> {
        self(exog_lead, capital)
    }
}
