//! Per-period state and control values.
//!
//! The calibration is a two-country economy with a single shared consumption
//! control. Both facts are fixed in the types rather than carried as runtime
//! dimension counts.

use ndarray::ArrayView2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ShapeError;

/// Number of countries.
pub const COUNTRIES: usize = 2;

/// Number of endogenous states (one capital stock per country).
pub const N_ENDOG: usize = COUNTRIES;

/// Number of controls (consumption, shared across countries).
pub const N_CONT: usize = 1;

/// Length of the aggregated residual vector.
pub const N_RESIDUALS: usize = N_ENDOG + N_CONT;

/// Current log technology shock of each country.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExogenousState {
    pub log_tfp: [f64; COUNTRIES],
}

impl ExogenousState {
    #[must_use]
    pub fn new(log_tfp: [f64; COUNTRIES]) -> Self {
        Self { log_tfp }
    }

    /// Takes the most recent row of a lagged shock history.
    ///
    /// Rows are ordered most recent first, one column per country. Older rows
    /// are accepted but ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`ShapeError`] if the history has no rows or does not have
    /// one column per country.
    pub fn from_history(history: ArrayView2<'_, f64>) -> Result<Self, ShapeError> {
        let (rows, cols) = history.dim();
        if cols != COUNTRIES {
            return Err(ShapeError::Columns {
                what: "exogenous history",
                expected: COUNTRIES,
                found: cols,
            });
        }
        if rows == 0 {
            return Err(ShapeError::Empty {
                what: "exogenous history",
            });
        }
        Ok(Self::new([history[[0, 0]], history[[0, 1]]]))
    }
}

/// Capital stocks of both countries.
///
/// States are end-of-period: `capital` is chosen this period and carried into
/// the next, while `capital_lag` was installed last period and is what
/// produces output today.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EndogenousState {
    pub capital: [f64; COUNTRIES],
    pub capital_lag: [f64; COUNTRIES],
}

impl EndogenousState {
    #[must_use]
    pub fn new(capital: [f64; COUNTRIES], capital_lag: [f64; COUNTRIES]) -> Self {
        Self {
            capital,
            capital_lag,
        }
    }

    /// Builds the state from a 2×2 matrix whose row 0 is current capital and
    /// row 1 is lagged capital.
    ///
    /// # Errors
    ///
    /// Returns a [`ShapeError`] unless the matrix is exactly 2×2.
    pub fn from_matrix(matrix: ArrayView2<'_, f64>) -> Result<Self, ShapeError> {
        let (rows, cols) = matrix.dim();
        if rows != 2 {
            return Err(ShapeError::Rows {
                what: "endogenous state",
                expected: 2,
                found: rows,
            });
        }
        if cols != COUNTRIES {
            return Err(ShapeError::Columns {
                what: "endogenous state",
                expected: COUNTRIES,
                found: cols,
            });
        }
        Ok(Self::new(
            [matrix[[0, 0]], matrix[[0, 1]]],
            [matrix[[1, 0]], matrix[[1, 1]]],
        ))
    }
}

/// Consumption, shared by both countries in this calibration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Control {
    pub consumption: f64,
}

impl Control {
    #[must_use]
    pub fn new(consumption: f64) -> Self {
        Self { consumption }
    }

    /// Builds a control from a slice holding exactly one value.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::Length`] if the slice length is not [`N_CONT`].
    pub fn from_slice(values: &[f64]) -> Result<Self, ShapeError> {
        match values {
            [consumption] => Ok(Self::new(*consumption)),
            _ => Err(ShapeError::Length {
                what: "control vector",
                expected: N_CONT,
                found: values.len(),
            }),
        }
    }

    #[must_use]
    pub fn to_array(self) -> [f64; N_CONT] {
        [self.consumption]
    }
}

/// The current-period values an evaluation is performed at.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Period {
    pub exog: ExogenousState,
    pub endog: EndogenousState,
    pub control: Control,
}

impl Period {
    #[must_use]
    pub fn new(exog: ExogenousState, endog: EndogenousState, control: Control) -> Self {
        Self {
            exog,
            endog,
            control,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ndarray::array;

    #[test]
    fn history_keeps_most_recent_row() {
        let history = array![[0.1, -0.2], [0.5, 0.5], [0.9, 0.9]];

        let exog = ExogenousState::from_history(history.view()).unwrap();

        assert_eq!(exog.log_tfp, [0.1, -0.2]);
    }

    #[test]
    fn history_rejects_wrong_column_count() {
        let history = array![[0.1, 0.2, 0.3]];

        let result = ExogenousState::from_history(history.view());

        assert_eq!(
            result,
            Err(ShapeError::Columns {
                what: "exogenous history",
                expected: 2,
                found: 3,
            })
        );
    }

    #[test]
    fn history_rejects_empty_matrix() {
        let history = ndarray::Array2::<f64>::zeros((0, 2));

        let result = ExogenousState::from_history(history.view());

        assert!(matches!(result, Err(ShapeError::Empty { .. })));
    }

    #[test]
    fn endogenous_rows_are_current_then_lag() {
        let matrix = array![[1.0, 2.0], [3.0, 4.0]];

        let endog = EndogenousState::from_matrix(matrix.view()).unwrap();

        assert_eq!(endog.capital, [1.0, 2.0]);
        assert_eq!(endog.capital_lag, [3.0, 4.0]);
    }

    #[test]
    fn endogenous_rejects_single_row() {
        let matrix = array![[1.0, 2.0]];

        let result = EndogenousState::from_matrix(matrix.view());

        assert!(matches!(result, Err(ShapeError::Rows { found: 1, .. })));
    }

    #[test]
    fn control_requires_single_value() {
        assert_eq!(Control::from_slice(&[0.7]), Ok(Control::new(0.7)));
        assert!(matches!(
            Control::from_slice(&[0.7, 0.8]),
            Err(ShapeError::Length { found: 2, .. })
        ));
        assert!(Control::from_slice(&[]).is_err());
    }
}
