//! Expected discounted return, scaled by current capital.
//!
//! The Euler equation for country `i` reads `1 = E[beta * integrand_i]`.
//! Multiplying both sides by current capital turns it into
//! `k_i = k_i * E[beta * integrand_i]`, so the value returned here is a
//! predicted capital stock that an outer solver compares with the observed
//! one. Keeping residuals on the scale of the state makes them comparable
//! across the state space.

use ndarray::{Array1, Array2};
use ngm_core::Observer;

use crate::{
    COUNTRIES, IntegrationNodes, N_ENDOG, NodeError, Parameters, Period, Persistence,
    PolicyEvaluator, integrand,
};

/// Diagnostic event emitted once per observed evaluation.
#[derive(Debug, Clone, Copy)]
pub struct Expectation<'a> {
    /// Discounted integrand at each node, one row per node.
    pub discounted: &'a Array2<f64>,
    /// Quadrature weights applied to the rows of `discounted`.
    pub weights: &'a Array1<f64>,
    /// Weighted sum of `discounted`, before scaling by capital.
    pub expectation: [f64; COUNTRIES],
}

impl Expectation<'_> {
    /// Expectation minus one, per country.
    ///
    /// Zero when the unscaled Euler equation holds exactly.
    #[must_use]
    pub fn gap(&self) -> [f64; COUNTRIES] {
        self.expectation.map(|e| e - 1.0)
    }
}

/// Evaluates the capital-scaled expected return.
///
/// # Errors
///
/// Returns a [`NodeError`] identifying the first node at which the policy fails.
pub fn evaluate<P: PolicyEvaluator>(
    params: &Parameters,
    period: &Period,
    persistence: &Persistence,
    nodes: &IntegrationNodes,
    policy: &P,
) -> Result<[f64; N_ENDOG], NodeError<P::Error>> {
    evaluate_observed(params, period, persistence, nodes, policy, &mut ())
}

/// Evaluates the capital-scaled expected return and reports the intermediate
/// expectation to `observer`.
///
/// The observer sees the per-node discounted integrands, the weights and the
/// raw expectation. It has no influence on the returned value.
///
/// # Errors
///
/// Returns a [`NodeError`] identifying the first node at which the policy
/// fails. The observer is not called in that case.
pub fn evaluate_observed<P, O>(
    params: &Parameters,
    period: &Period,
    persistence: &Persistence,
    nodes: &IntegrationNodes,
    policy: &P,
    observer: &mut O,
) -> Result<[f64; N_ENDOG], NodeError<P::Error>>
where
    P: PolicyEvaluator,
    O: for<'a> Observer<Expectation<'a>>,
{
    let mut discounted = Array2::<f64>::zeros((nodes.len(), N_ENDOG));

    for (node, innovation) in nodes.iter().enumerate() {
        let exog_lead = persistence.propagate(&period.exog, innovation);
        let value = integrand::evaluate(params, period, &exog_lead, policy)
            .map_err(|source| NodeError { node, source })?;

        discounted
            .row_mut(node)
            .iter_mut()
            .zip(value)
            .for_each(|(cell, v)| *cell = params.beta * v);
    }

    let rhs = nodes.weights().dot(&discounted);
    let expectation = [rhs[0], rhs[1]];

    observer.observe(&Expectation {
        discounted: &discounted,
        weights: nodes.weights(),
        expectation,
    });

    let capital = period.endog.capital;
    Ok(std::array::from_fn(|i| expectation[i] * capital[i]))
}
