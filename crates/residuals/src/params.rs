//! Model calibration: structural parameters and shock persistence.

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{COUNTRIES, ExogenousState};

/// Errors raised when building or checking [`Parameters`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    /// A required key is absent from the parameter map.
    #[error("missing parameter `{key}`")]
    Missing { key: &'static str },

    /// A parameter is NaN or infinite.
    #[error("parameter `{key}` is not finite: {value}")]
    NonFinite { key: &'static str, value: f64 },

    /// A parameter lies outside its economically meaningful range.
    #[error("parameter `{key}` = {value} is outside {expected}")]
    OutOfDomain {
        key: &'static str,
        value: f64,
        expected: &'static str,
    },
}

/// Structural parameters of the growth model.
///
/// Keys follow the conventional calibration names: `A`, `alpha`, `delta`,
/// `gamma`, and `betta` (with `beta` accepted as an alias).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Parameters {
    /// Total factor productivity level.
    #[cfg_attr(feature = "serde", serde(rename = "A"))]
    pub a: f64,
    /// Capital share of output.
    pub alpha: f64,
    /// Depreciation rate.
    pub delta: f64,
    /// Coefficient of relative risk aversion.
    pub gamma: f64,
    /// Discount factor.
    #[cfg_attr(feature = "serde", serde(rename = "betta", alias = "beta"))]
    pub beta: f64,
}

impl Parameters {
    #[must_use]
    pub fn new(a: f64, alpha: f64, delta: f64, gamma: f64, beta: f64) -> Self {
        Self {
            a,
            alpha,
            delta,
            gamma,
            beta,
        }
    }

    /// Reads parameters from a string-keyed map.
    ///
    /// Every key must be present and finite. Unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::Missing`] for the first absent key and
    /// [`ParameterError::NonFinite`] for the first NaN or infinite value.
    pub fn from_map<S: std::hash::BuildHasher>(
        map: &HashMap<String, f64, S>,
    ) -> Result<Self, ParameterError> {
        let get = |key: &'static str| -> Result<f64, ParameterError> {
            let value = *map.get(key).ok_or(ParameterError::Missing { key })?;
            if value.is_finite() {
                Ok(value)
            } else {
                Err(ParameterError::NonFinite { key, value })
            }
        };

        let a = get("A")?;
        let alpha = get("alpha")?;
        let delta = get("delta")?;
        let gamma = get("gamma")?;
        let beta = match get("betta") {
            Err(ParameterError::Missing { .. }) => get("beta").map_err(|err| match err {
                ParameterError::Missing { .. } => ParameterError::Missing { key: "betta" },
                other => other,
            })?,
            other => other?,
        };

        Ok(Self::new(a, alpha, delta, gamma, beta))
    }

    /// Checks the conventional parameter ranges.
    ///
    /// Evaluation never calls this; values outside these ranges simply
    /// produce whatever the formulas produce, NaN included.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::OutOfDomain`] for the first parameter outside
    /// `alpha ∈ (0, 1)`, `delta ∈ [0, 1]`, `gamma > 0`, or `beta ∈ (0, 1)`.
    pub fn check_domain(&self) -> Result<(), ParameterError> {
        let checks = [
            ("alpha", self.alpha, self.alpha > 0.0 && self.alpha < 1.0, "(0, 1)"),
            ("delta", self.delta, (0.0..=1.0).contains(&self.delta), "[0, 1]"),
            ("gamma", self.gamma, self.gamma > 0.0, "(0, inf)"),
            ("betta", self.beta, self.beta > 0.0 && self.beta < 1.0, "(0, 1)"),
        ];

        for (key, value, ok, expected) in checks {
            if !ok {
                return Err(ParameterError::OutOfDomain {
                    key,
                    value,
                    expected,
                });
            }
        }
        Ok(())
    }
}

/// AR(1) persistence of each country's technology shock.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Persistence {
    pub rho: [f64; COUNTRIES],
}

impl Persistence {
    #[must_use]
    pub fn new(rho: [f64; COUNTRIES]) -> Self {
        Self { rho }
    }

    /// Propagates the current shock one period ahead: `rho ⊙ current + innovation`.
    #[must_use]
    pub fn propagate(
        &self,
        current: &ExogenousState,
        innovation: [f64; COUNTRIES],
    ) -> ExogenousState {
        ExogenousState::new(std::array::from_fn(|i| {
            self.rho[i] * current.log_tfp[i] + innovation[i]
        }))
    }
}

/// A complete calibration as stored in configuration files.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Calibration {
    pub parameters: Parameters,
    pub persistence: Persistence,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bag(entries: &[(&str, f64)]) -> HashMap<String, f64> {
        entries.iter().map(|(k, v)| ((*k).to_string(), *v)).collect()
    }

    fn full_bag() -> HashMap<String, f64> {
        bag(&[
            ("A", 1.0),
            ("alpha", 0.33),
            ("delta", 0.1),
            ("gamma", 2.0),
            ("betta", 0.96),
        ])
    }

    #[test]
    fn reads_every_key() {
        let params = Parameters::from_map(&full_bag()).unwrap();

        assert_eq!(params, Parameters::new(1.0, 0.33, 0.1, 2.0, 0.96));
    }

    #[test]
    fn accepts_beta_spelling() {
        let mut map = full_bag();
        map.remove("betta");
        map.insert("beta".into(), 0.95);

        let params = Parameters::from_map(&map).unwrap();

        assert_eq!(params.beta, 0.95);
    }

    #[test]
    fn missing_key_fails_fast() {
        let mut map = full_bag();
        map.remove("gamma");

        assert_eq!(
            Parameters::from_map(&map),
            Err(ParameterError::Missing { key: "gamma" })
        );
    }

    #[test]
    fn missing_discount_factor_names_betta() {
        let mut map = full_bag();
        map.remove("betta");

        assert_eq!(
            Parameters::from_map(&map),
            Err(ParameterError::Missing { key: "betta" })
        );
    }

    #[test]
    fn missing_keys_reported_in_calibration_order() {
        let map = bag(&[("delta", 0.1)]);
        assert_eq!(
            Parameters::from_map(&map),
            Err(ParameterError::Missing { key: "A" })
        );

        let map = bag(&[("A", 1.0), ("alpha", 0.33), ("delta", 0.1)]);
        assert_eq!(
            Parameters::from_map(&map),
            Err(ParameterError::Missing { key: "gamma" })
        );
    }

    #[test]
    fn rejects_non_finite_values() {
        let mut map = full_bag();
        map.insert("delta".into(), f64::INFINITY);

        assert!(matches!(
            Parameters::from_map(&map),
            Err(ParameterError::NonFinite { key: "delta", .. })
        ));
    }

    #[test]
    fn domain_check_flags_first_violation() {
        let params = Parameters::new(1.0, 0.33, 0.1, 2.0, 0.96);
        assert!(params.check_domain().is_ok());

        let params = Parameters::new(1.0, 1.2, 0.1, -1.0, 0.96);
        assert!(matches!(
            params.check_domain(),
            Err(ParameterError::OutOfDomain { key: "alpha", .. })
        ));

        let params = Parameters::new(1.0, 0.33, 0.1, 2.0, 1.0);
        assert!(matches!(
            params.check_domain(),
            Err(ParameterError::OutOfDomain { key: "betta", .. })
        ));
    }

    #[test]
    fn propagation_is_elementwise() {
        let persistence = Persistence::new([0.5, 0.9]);
        let current = ExogenousState::new([0.2, -0.1]);

        let lead = persistence.propagate(&current, [0.01, 0.02]);

        assert_eq!(lead.log_tfp, [0.5 * 0.2 + 0.01, 0.9 * -0.1 + 0.02]);
    }
}
