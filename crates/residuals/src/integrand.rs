//! The Euler-equation integrand at a single next-period shock realization.

use crate::{COUNTRIES, ExogenousState, Parameters, Period, PolicyEvaluator};

/// Evaluates the undiscounted integrand for both countries.
///
/// For country `i` this is
///
/// ```text
/// (c' / c)^(-gamma) * (1 - delta + exp(z'_i) * alpha * A * k_i^(alpha - 1))
/// ```
///
/// where `c'` is the policy's prediction at `exog_lead` and current capital,
/// `c` is current consumption, `z'_i` is the next-period log shock and `k_i`
/// is current capital. Consumption is shared, so both components use the same
/// marginal-utility ratio and differ only through capital and technology.
///
/// Domain violations such as non-positive capital yield NaN or infinity, not
/// an error.
///
/// # Errors
///
/// Returns the policy's error unchanged.
pub fn evaluate<P: PolicyEvaluator>(
    params: &Parameters,
    period: &Period,
    exog_lead: &ExogenousState,
    policy: &P,
) -> Result<[f64; COUNTRIES], P::Error> {
    let capital = &period.endog.capital;
    let control_lead = policy.predict(exog_lead, capital)?;

    let mu_ratio = (control_lead.consumption / period.control.consumption).powf(-params.gamma);

    Ok(std::array::from_fn(|i| {
        let marginal_product = exog_lead.log_tfp[i].exp()
            * params.alpha
            * params.a
            * capital[i].powf(params.alpha - 1.0);
        mu_ratio * (1.0 - params.delta + marginal_product)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;
    use thiserror::Error;

    use crate::{Control, EndogenousState};

    /// Policy that predicts the same consumption everywhere.
    struct Flat(f64);
    impl PolicyEvaluator for Flat {
        type Error = Infallible;

        fn predict(&self, _: &ExogenousState, _: &[f64; 2]) -> Result<Control, Infallible> {
            Ok(Control::new(self.0))
        }
    }

    #[derive(Debug, Error)]
    #[error("realization outside the approximation domain")]
    struct OutOfDomain;

    fn params() -> Parameters {
        Parameters::new(1.0, 0.33, 0.1, 2.0, 0.96)
    }

    fn period(capital: [f64; 2], consumption: f64) -> Period {
        Period::new(
            ExogenousState::new([0.0, 0.0]),
            EndogenousState::new(capital, [1.0, 1.0]),
            Control::new(consumption),
        )
    }

    #[test]
    fn steady_unit_values() {
        let value = evaluate(
            &params(),
            &period([1.0, 1.0], 1.0),
            &ExogenousState::new([0.0, 0.0]),
            &Flat(1.0),
        )
        .unwrap();

        assert_relative_eq!(value[0], 1.23, epsilon = 1e-12);
        assert_relative_eq!(value[1], 1.23, epsilon = 1e-12);
    }

    #[test]
    fn identical_countries_give_identical_components() {
        let value = evaluate(
            &params(),
            &period([2.5, 2.5], 0.8),
            &ExogenousState::new([0.05, 0.05]),
            &Flat(0.9),
        )
        .unwrap();

        assert_eq!(value[0], value[1]);
    }

    #[test]
    fn swapping_countries_swaps_components() {
        let lead = ExogenousState::new([0.05, -0.02]);
        let swapped_lead = ExogenousState::new([-0.02, 0.05]);

        let value = evaluate(&params(), &period([2.0, 3.0], 1.0), &lead, &Flat(1.1)).unwrap();
        let swapped =
            evaluate(&params(), &period([3.0, 2.0], 1.0), &swapped_lead, &Flat(1.1)).unwrap();

        assert_eq!(value, [swapped[1], swapped[0]]);
    }

    #[test]
    fn marginal_utility_ratio_scales_both_components() {
        let lead = ExogenousState::new([0.0, 0.0]);
        let base = evaluate(&params(), &period([1.0, 1.0], 1.0), &lead, &Flat(1.0)).unwrap();
        let richer = evaluate(&params(), &period([1.0, 1.0], 1.0), &lead, &Flat(2.0)).unwrap();

        // (2 / 1)^(-2) = 0.25
        assert_relative_eq!(richer[0], 0.25 * base[0], epsilon = 1e-12);
        assert_relative_eq!(richer[1], 0.25 * base[1], epsilon = 1e-12);
    }

    #[test]
    fn policy_sees_current_capital() {
        let policy = |_: &ExogenousState, capital: &[f64; 2]| -> Result<Control, Infallible> {
            assert_eq!(capital, &[2.0, 3.0]);
            Ok(Control::new(1.0))
        };

        evaluate(
            &params(),
            &period([2.0, 3.0], 1.0),
            &ExogenousState::new([0.0, 0.0]),
            &policy,
        )
        .unwrap();
    }

    #[test]
    fn policy_error_is_returned_unchanged() {
        let policy =
            |_: &ExogenousState, _: &[f64; 2]| -> Result<Control, OutOfDomain> { Err(OutOfDomain) };

        let result = evaluate(
            &params(),
            &period([1.0, 1.0], 1.0),
            &ExogenousState::new([0.0, 0.0]),
            &policy,
        );

        assert!(matches!(result, Err(OutOfDomain)));
    }

    #[test]
    fn negative_capital_propagates_nan() {
        let value = evaluate(
            &params(),
            &period([-1.0, 1.0], 1.0),
            &ExogenousState::new([0.0, 0.0]),
            &Flat(1.0),
        )
        .unwrap();

        assert!(value[0].is_nan());
        assert!(value[1].is_finite());
    }
}
