//! The full residual vector handed to the outer fitting loop.

use ndarray::Array1;
use ngm_core::Observer;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Control, IntegrationNodes, N_ENDOG, N_RESIDUALS, NodeError, Parameters, Period, Persistence,
    PolicyEvaluator, control,
    euler_hat::{self, Expectation},
};

/// Capital-scaled Euler residuals followed by the resource-constraint control.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Residuals {
    pub states: [f64; N_ENDOG],
    pub control: Control,
}

impl Residuals {
    /// Concatenates the state residuals and the control, in that order.
    #[must_use]
    pub fn to_array(&self) -> [f64; N_RESIDUALS] {
        let [k_1, k_2] = self.states;
        [k_1, k_2, self.control.consumption]
    }

    #[must_use]
    pub fn to_array1(&self) -> Array1<f64> {
        Array1::from_iter(self.to_array())
    }

    /// Difference between the predicted and the observed values at `period`.
    ///
    /// This is what a fitting loop drives to zero: predicted capital minus
    /// current capital, and implied consumption minus current consumption.
    #[must_use]
    pub fn deviation(&self, period: &Period) -> [f64; N_RESIDUALS] {
        let [k_1, k_2] = period.endog.capital;
        let [hat_1, hat_2, c_hat] = self.to_array();
        [hat_1 - k_1, hat_2 - k_2, c_hat - period.control.consumption]
    }
}

/// Evaluates the Euler residuals and the control residual together.
///
/// # Errors
///
/// Returns a [`NodeError`] if the policy fails at any integration node.
pub fn evaluate<P: PolicyEvaluator>(
    params: &Parameters,
    period: &Period,
    persistence: &Persistence,
    nodes: &IntegrationNodes,
    policy: &P,
) -> Result<Residuals, NodeError<P::Error>> {
    evaluate_observed(params, period, persistence, nodes, policy, &mut ())
}

/// Like [`evaluate`], reporting the Euler expectation to `observer`.
///
/// # Errors
///
/// Returns a [`NodeError`] if the policy fails at any integration node.
pub fn evaluate_observed<P, O>(
    params: &Parameters,
    period: &Period,
    persistence: &Persistence,
    nodes: &IntegrationNodes,
    policy: &P,
    observer: &mut O,
) -> Result<Residuals, NodeError<P::Error>>
where
    P: PolicyEvaluator,
    O: for<'a> Observer<Expectation<'a>>,
{
    let states =
        euler_hat::evaluate_observed(params, period, persistence, nodes, policy, observer)?;
    let control = control::evaluate(params, &period.exog, &period.endog);

    Ok(Residuals { states, control })
}
