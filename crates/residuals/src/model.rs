use ngm_core::{Model, Observer};

use crate::{
    COUNTRIES, Calibration, Control, ExogenousState, IntegrationNodes, N_ENDOG, NodeError,
    Parameters, Period, Persistence, PolicyEvaluator, Residuals, control,
    euler_hat::{self, Expectation},
    integrand, residuals,
};

/// A calibrated two-country growth model paired with a candidate policy.
///
/// Everything that stays fixed while an outer solver sweeps the state space
/// is stored here once: parameters, shock persistence, integration nodes and
/// the policy being tested. Each call then only needs the current [`Period`].
#[derive(Debug, Clone)]
pub struct GrowthModel<P> {
    params: Parameters,
    persistence: Persistence,
    nodes: IntegrationNodes,
    policy: P,
}

impl<P: PolicyEvaluator> GrowthModel<P> {
    #[must_use]
    pub fn new(
        params: Parameters,
        persistence: Persistence,
        nodes: IntegrationNodes,
        policy: P,
    ) -> Self {
        Self {
            params,
            persistence,
            nodes,
            policy,
        }
    }

    /// Creates a model from a loaded calibration.
    #[must_use]
    pub fn from_calibration(calibration: Calibration, nodes: IntegrationNodes, policy: P) -> Self {
        Self::new(calibration.parameters, calibration.persistence, nodes, policy)
    }

    /// Returns the same calibration and nodes with a different policy.
    ///
    /// Useful when an outer loop proposes new coefficients each iteration.
    pub fn with_policy<Q: PolicyEvaluator>(self, policy: Q) -> GrowthModel<Q> {
        GrowthModel {
            params: self.params,
            persistence: self.persistence,
            nodes: self.nodes,
            policy,
        }
    }

    #[must_use]
    pub fn params(&self) -> &Parameters {
        &self.params
    }

    #[must_use]
    pub fn persistence(&self) -> &Persistence {
        &self.persistence
    }

    #[must_use]
    pub fn nodes(&self) -> &IntegrationNodes {
        &self.nodes
    }

    #[must_use]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// See [`integrand::evaluate`].
    ///
    /// # Errors
    ///
    /// Returns the policy error unchanged.
    pub fn integrand(
        &self,
        period: &Period,
        exog_lead: &ExogenousState,
    ) -> Result<[f64; COUNTRIES], P::Error> {
        integrand::evaluate(&self.params, period, exog_lead, &self.policy)
    }

    /// See [`euler_hat::evaluate`].
    ///
    /// # Errors
    ///
    /// Returns a [`NodeError`] if the policy fails at any node.
    pub fn euler_hat(&self, period: &Period) -> Result<[f64; N_ENDOG], NodeError<P::Error>> {
        self.euler_hat_observed(period, &mut ())
    }

    /// See [`euler_hat::evaluate_observed`].
    ///
    /// # Errors
    ///
    /// Returns a [`NodeError`] if the policy fails at any node.
    pub fn euler_hat_observed<O>(
        &self,
        period: &Period,
        observer: &mut O,
    ) -> Result<[f64; N_ENDOG], NodeError<P::Error>>
    where
        O: for<'a> Observer<Expectation<'a>>,
    {
        euler_hat::evaluate_observed(
            &self.params,
            period,
            &self.persistence,
            &self.nodes,
            &self.policy,
            observer,
        )
    }

    /// See [`control::evaluate`].
    #[must_use]
    pub fn control(&self, period: &Period) -> Control {
        control::evaluate(&self.params, &period.exog, &period.endog)
    }

    /// See [`residuals::evaluate`].
    ///
    /// # Errors
    ///
    /// Returns a [`NodeError`] if the policy fails at any node.
    pub fn residuals(&self, period: &Period) -> Result<Residuals, NodeError<P::Error>> {
        self.residuals_observed(period, &mut ())
    }

    /// See [`residuals::evaluate_observed`].
    ///
    /// # Errors
    ///
    /// Returns a [`NodeError`] if the policy fails at any node.
    pub fn residuals_observed<O>(
        &self,
        period: &Period,
        observer: &mut O,
    ) -> Result<Residuals, NodeError<P::Error>>
    where
        O: for<'a> Observer<Expectation<'a>>,
    {
        residuals::evaluate_observed(
            &self.params,
            period,
            &self.persistence,
            &self.nodes,
            &self.policy,
            observer,
        )
    }
}

impl<P: PolicyEvaluator> Model for GrowthModel<P> {
    type Input = Period;
    type Output = Residuals;
    type Error = NodeError<P::Error>;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.residuals(input)
    }
}
