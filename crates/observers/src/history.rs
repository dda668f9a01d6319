use ngm_core::Observer;
use ngm_residuals::{COUNTRIES, Expectation};

/// An owned copy of one [`Expectation`] event.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpectationRecord {
    /// Discounted integrand per node, row-major, `COUNTRIES` values per node.
    pub discounted: Vec<[f64; COUNTRIES]>,
    pub weights: Vec<f64>,
    pub expectation: [f64; COUNTRIES],
}

impl ExpectationRecord {
    /// Expectation minus one, per country.
    #[must_use]
    pub fn gap(&self) -> [f64; COUNTRIES] {
        self.expectation.map(|e| e - 1.0)
    }
}

impl From<&Expectation<'_>> for ExpectationRecord {
    fn from(event: &Expectation<'_>) -> Self {
        Self {
            discounted: event
                .discounted
                .outer_iter()
                .map(|row| [row[0], row[1]])
                .collect(),
            weights: event.weights.to_vec(),
            expectation: event.expectation,
        }
    }
}

/// Records every observed expectation, oldest first.
#[derive(Debug, Clone, Default)]
pub struct History {
    records: Vec<ExpectationRecord>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn records(&self) -> &[ExpectationRecord] {
        &self.records
    }

    #[must_use]
    pub fn last(&self) -> Option<&ExpectationRecord> {
        self.records.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Largest absolute gap seen across all records and countries.
    ///
    /// Returns `None` if nothing has been recorded. NaN gaps propagate.
    #[must_use]
    pub fn max_abs_gap(&self) -> Option<f64> {
        self.records
            .iter()
            .flat_map(ExpectationRecord::gap)
            .map(f64::abs)
            .reduce(|worst, gap| if gap.is_nan() || gap > worst { gap } else { worst })
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl Observer<Expectation<'_>> for History {
    fn observe(&mut self, event: &Expectation<'_>) {
        self.records.push(event.into());
    }
}
