//! Equilibrium residuals for a two-country stochastic neoclassical growth model.
//!
//! A projection solver approximates the consumption policy with a fitted
//! basis and adjusts its coefficients until the model's equilibrium
//! conditions hold across the state space. This crate evaluates those
//! conditions at one point for a given candidate policy. It does not fit,
//! iterate, or draw random numbers; the policy and the integration nodes are
//! supplied by the caller.
//!
//! # Evaluators
//!
//! - [`integrand`] — discounted-return integrand at one shock realization
//! - [`euler_hat`] — quadrature expectation of the integrand, scaled by capital
//! - [`control`] — consumption implied by the global resource constraint
//! - [`residuals`] — both of the above, concatenated
//!
//! [`GrowthModel`] bundles a calibration, integration nodes and a policy and
//! exposes the same evaluators as methods. It implements [`ngm_core::Model`],
//! so outer solvers can treat it as a plain `Period -> Residuals` callable.
//!
//! ```rust
//! use std::convert::Infallible;
//!
//! use ngm_core::Model;
//! use ngm_residuals::{
//!     Control, EndogenousState, ExogenousState, GrowthModel, IntegrationNodes, Parameters,
//!     Period, Persistence,
//! };
//!
//! let policy = |_: &ExogenousState, _: &[f64; 2]| -> Result<Control, Infallible> {
//!     Ok(Control::new(1.0))
//! };
//! let model = GrowthModel::new(
//!     Parameters::new(1.0, 0.33, 0.1, 2.0, 0.96),
//!     Persistence::new([1.0, 1.0]),
//!     IntegrationNodes::single([0.0, 0.0]),
//!     policy,
//! );
//! let period = Period::new(
//!     ExogenousState::new([0.0, 0.0]),
//!     EndogenousState::new([1.0, 1.0], [1.0, 1.0]),
//!     Control::new(1.0),
//! );
//!
//! let out = model.call(&period)?.to_array();
//!
//! assert!((out[0] - 1.1808).abs() < 1e-12);
//! assert!((out[1] - 1.1808).abs() < 1e-12);
//! assert!((out[2] - 0.9).abs() < 1e-12);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Features
//!
//! - `serde` (default) — derives `Serialize`/`Deserialize` for calibrations,
//!   states and residuals.

mod error;
mod model;
mod nodes;
mod params;
mod policy;
mod state;

pub mod control;
pub mod euler_hat;
pub mod integrand;
pub mod residuals;

pub use error::{NodeError, ShapeError};
pub use euler_hat::Expectation;
pub use model::GrowthModel;
pub use nodes::IntegrationNodes;
pub use params::{Calibration, ParameterError, Parameters, Persistence};
pub use policy::PolicyEvaluator;
pub use residuals::Residuals;
pub use state::{
    COUNTRIES, Control, EndogenousState, ExogenousState, N_CONT, N_ENDOG, N_RESIDUALS, Period,
};
