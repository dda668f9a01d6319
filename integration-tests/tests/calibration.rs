use std::collections::HashMap;

use integration_tests::calibrations::{BASELINE_JSON, BASELINE_TOML, BASELINE_YAML};
use ngm_residuals::{Calibration, ParameterError, Parameters, Persistence};

fn baseline() -> Calibration {
    Calibration {
        parameters: Parameters::new(1.0, 0.33, 0.1, 2.0, 0.96),
        persistence: Persistence::new([0.95, 0.95]),
    }
}

#[test]
fn loads_from_toml() {
    let calibration: Calibration = toml::from_str(BASELINE_TOML).expect("valid TOML calibration");

    assert_eq!(calibration, baseline());
}

#[test]
fn loads_from_json_with_beta_alias() {
    let calibration: Calibration =
        serde_json::from_str(BASELINE_JSON).expect("valid JSON calibration");

    assert_eq!(calibration, baseline());
}

#[test]
fn loads_from_yaml() {
    let calibration: Calibration =
        serde_yaml::from_str(BASELINE_YAML).expect("valid YAML calibration");

    assert_eq!(calibration, baseline());
}

#[test]
fn missing_parameter_fails_to_load() {
    let text = BASELINE_TOML.replace("gamma = 2.0\n", "");

    let err = toml::from_str::<Calibration>(&text).unwrap_err();

    assert!(err.to_string().contains("gamma"), "{err}");
}

#[test]
fn serialized_keys_use_calibration_names() {
    let json = serde_json::to_value(baseline().parameters).unwrap();

    assert_eq!(json["A"], 1.0);
    assert_eq!(json["betta"], 0.96);
    assert!(json.get("a").is_none());
}

#[test]
fn map_and_file_agree() {
    let map: HashMap<String, f64> = [
        ("A", 1.0),
        ("alpha", 0.33),
        ("delta", 0.1),
        ("gamma", 2.0),
        ("betta", 0.96),
        ("sigma", 0.01),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect();

    let params = Parameters::from_map(&map).unwrap();

    assert_eq!(params, baseline().parameters);
    assert_eq!(params.check_domain(), Ok(()));
}

#[test]
fn map_reports_first_missing_key() {
    let map: HashMap<String, f64> = [("alpha".to_string(), 0.33)].into_iter().collect();

    assert_eq!(
        Parameters::from_map(&map),
        Err(ParameterError::Missing { key: "A" })
    );
}
