use ndarray::{Array1, Array2};

use crate::{COUNTRIES, ShapeError};

/// Innovation draws and quadrature weights used to integrate over next-period shocks.
///
/// Each row of `innovations` is one already-scaled draw of the technology
/// innovations, one column per country. Weights are used as given: Monte Carlo
/// weights of `1/n`, Gauss-Hermite weights, or anything else the caller
/// chooses. They are not normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegrationNodes {
    innovations: Array2<f64>,
    weights: Array1<f64>,
}

impl IntegrationNodes {
    /// Creates a node set from innovations and matching weights.
    ///
    /// # Errors
    ///
    /// Returns a [`ShapeError`] if there are no nodes, if `innovations` does
    /// not have one column per country, or if the number of weights differs
    /// from the number of innovation rows.
    pub fn new(innovations: Array2<f64>, weights: Array1<f64>) -> Result<Self, ShapeError> {
        let (rows, cols) = innovations.dim();
        if cols != COUNTRIES {
            return Err(ShapeError::Columns {
                what: "innovations",
                expected: COUNTRIES,
                found: cols,
            });
        }
        if rows == 0 {
            return Err(ShapeError::Empty {
                what: "innovations",
            });
        }
        if weights.len() != rows {
            return Err(ShapeError::Length {
                what: "weights",
                expected: rows,
                found: weights.len(),
            });
        }
        Ok(Self {
            innovations,
            weights,
        })
    }

    /// Creates a node set that weights every draw by `1/n`.
    ///
    /// # Errors
    ///
    /// Returns a [`ShapeError`] if there are no draws or the column count is wrong.
    pub fn equally_weighted(innovations: Array2<f64>) -> Result<Self, ShapeError> {
        let rows = innovations.nrows();
        #[allow(clippy::cast_precision_loss)]
        let weight = if rows == 0 { 0.0 } else { 1.0 / rows as f64 };
        Self::new(innovations, Array1::from_elem(rows, weight))
    }

    /// A single node carrying the whole probability mass.
    #[must_use]
    pub fn single(innovation: [f64; COUNTRIES]) -> Self {
        Self {
            innovations: Array2::from_shape_fn((1, COUNTRIES), |(_, j)| innovation[j]),
            weights: Array1::ones(1),
        }
    }

    /// Returns the same draws with every weight multiplied by `factor`.
    #[must_use]
    pub fn scale_weights(mut self, factor: f64) -> Self {
        self.weights.mapv_inplace(|w| w * factor);
        self
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Always `false`; construction rejects empty node sets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    #[must_use]
    pub fn innovations(&self) -> &Array2<f64> {
        &self.innovations
    }

    #[must_use]
    pub fn weights(&self) -> &Array1<f64> {
        &self.weights
    }

    /// Sum of the weights, 1 for a proper expectation.
    #[must_use]
    pub fn weight_sum(&self) -> f64 {
        self.weights.sum()
    }

    /// Iterates over the innovation rows as fixed-size arrays.
    pub fn iter(&self) -> impl Iterator<Item = [f64; COUNTRIES]> + '_ {
        self.innovations.outer_iter().map(|row| [row[0], row[1]])
    }
}
