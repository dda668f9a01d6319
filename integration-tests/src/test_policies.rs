//! Stand-in policies and calibration fixtures shared by the integration tests.

pub mod policies {
    use ngm_residuals::{Control, ExogenousState, PolicyEvaluator};
    use serde::{Deserialize, Serialize};
    use thiserror::Error;

    /// A log-linear consumption rule around a steady state.
    ///
    /// `c' = c_ss * exp(shock_elasticity * mean(z')) * (mean(k) / k_ss)^capital_elasticity`
    #[derive(Debug, Clone, Copy, Serialize, Deserialize)]
    pub struct LogLinear {
        pub c_ss: f64,
        pub k_ss: f64,
        pub shock_elasticity: f64,
        pub capital_elasticity: f64,
    }

    impl PolicyEvaluator for LogLinear {
        type Error = std::convert::Infallible;

        fn predict(
            &self,
            exog_lead: &ExogenousState,
            capital: &[f64; 2],
        ) -> Result<Control, Self::Error> {
            let z = 0.5 * (exog_lead.log_tfp[0] + exog_lead.log_tfp[1]);
            let k = 0.5 * (capital[0] + capital[1]);
            Ok(Control::new(
                self.c_ss
                    * (self.shock_elasticity * z).exp()
                    * (k / self.k_ss).powf(self.capital_elasticity),
            ))
        }
    }

    /// The realization fell outside the box a policy was fitted on.
    #[derive(Debug, Error, PartialEq)]
    #[error("shock {value} of country {country} is outside [{lower}, {upper}]")]
    pub struct OutOfBounds {
        pub country: usize,
        pub value: f64,
        pub lower: f64,
        pub upper: f64,
    }

    /// Wraps a policy and rejects shock realizations outside fixed bounds,
    /// the way a fitted basis refuses to extrapolate.
    #[derive(Debug, Clone, Copy)]
    pub struct Bounded<P> {
        pub inner: P,
        pub lower: f64,
        pub upper: f64,
    }

    impl<P> PolicyEvaluator for Bounded<P>
    where
        P: PolicyEvaluator<Error = std::convert::Infallible>,
    {
        type Error = OutOfBounds;

        fn predict(
            &self,
            exog_lead: &ExogenousState,
            capital: &[f64; 2],
        ) -> Result<Control, Self::Error> {
            for (country, &value) in exog_lead.log_tfp.iter().enumerate() {
                if value < self.lower || value > self.upper {
                    return Err(OutOfBounds {
                        country,
                        value,
                        lower: self.lower,
                        upper: self.upper,
                    });
                }
            }
            let Ok(control) = self.inner.predict(exog_lead, capital);
            Ok(control)
        }
    }
}

pub mod calibrations {
    /// The textbook calibration used throughout the tests, as TOML.
    pub const BASELINE_TOML: &str = r#"
persistence = [0.95, 0.95]

[parameters]
A = 1.0
alpha = 0.33
delta = 0.1
gamma = 2.0
betta = 0.96
"#;

    /// The same calibration as JSON, spelling the discount factor `beta`.
    pub const BASELINE_JSON: &str = r#"{
  "parameters": { "A": 1.0, "alpha": 0.33, "delta": 0.1, "gamma": 2.0, "beta": 0.96 },
  "persistence": [0.95, 0.95]
}"#;

    /// The same calibration as YAML.
    pub const BASELINE_YAML: &str = "
parameters:
  A: 1.0
  alpha: 0.33
  delta: 0.1
  gamma: 2.0
  betta: 0.96
persistence: [0.95, 0.95]
";
}
