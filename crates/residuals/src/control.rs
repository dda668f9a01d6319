use crate::{Control, EndogenousState, ExogenousState, Parameters};

/// Consumption implied by the global resource constraint.
///
/// Output of both countries, produced with last period's capital, plus the
/// undepreciated part of that capital, minus the capital carried into next
/// period, split evenly between the two countries:
///
/// ```text
/// c = 0.5 * [ (1 - delta) * (k_lag_1 + k_lag_2) - (k_1 + k_2)
///             + exp(z_1) * A * k_lag_1^alpha + exp(z_2) * A * k_lag_2^alpha ]
/// ```
#[must_use]
pub fn evaluate(params: &Parameters, exog: &ExogenousState, endog: &EndogenousState) -> Control {
    let [k_1, k_2] = endog.capital;
    let [k_lag_1, k_lag_2] = endog.capital_lag;
    let [z_1, z_2] = exog.log_tfp;

    let output = z_1.exp() * params.a * k_lag_1.powf(params.alpha)
        + z_2.exp() * params.a * k_lag_2.powf(params.alpha);
    let undepreciated = (1.0 - params.delta) * (k_lag_1 + k_lag_2);

    Control::new(0.5 * (undepreciated - (k_1 + k_2) + output))
}
