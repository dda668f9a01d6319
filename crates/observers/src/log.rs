use ngm_core::Observer;
use ngm_residuals::Expectation;
use tracing::Level;

/// Emits evaluation diagnostics as structured `tracing` events.
///
/// Each [`Expectation`] becomes one event with the node count, the weight
/// sum, the expectation per country and its gap from one. With `detailed`
/// enabled the full per-node matrix and the weights are attached as debug
/// fields as well.
#[derive(Debug, Clone, Copy)]
pub struct LogObserver {
    level: Level,
    detailed: bool,
}

impl LogObserver {
    /// Creates an observer that logs at `DEBUG`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            level: Level::DEBUG,
            detailed: false,
        }
    }

    /// Sets the level events are emitted at.
    #[must_use]
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Attaches the per-node matrix and the weights to every event.
    #[must_use]
    pub fn detailed(mut self) -> Self {
        self.detailed = true;
        self
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! emit {
    ($level:expr, $($fields:tt)+) => {{
        let level = $level;
        if level == Level::TRACE {
            tracing::event!(Level::TRACE, $($fields)+);
        } else if level == Level::DEBUG {
            tracing::event!(Level::DEBUG, $($fields)+);
        } else if level == Level::INFO {
            tracing::event!(Level::INFO, $($fields)+);
        } else if level == Level::WARN {
            tracing::event!(Level::WARN, $($fields)+);
        } else {
            tracing::event!(Level::ERROR, $($fields)+);
        }
    }};
}

impl Observer<Expectation<'_>> for LogObserver {
    fn observe(&mut self, event: &Expectation<'_>) {
        let [expectation_0, expectation_1] = event.expectation;
        let [gap_0, gap_1] = event.gap();
        let nodes = event.weights.len();
        let weight_sum = event.weights.sum();

        if self.detailed {
            emit!(
                self.level,
                nodes,
                weight_sum,
                expectation_0,
                expectation_1,
                gap_0,
                gap_1,
                discounted = ?event.discounted,
                weights = ?event.weights,
                "Euler expectation"
            );
        } else {
            emit!(
                self.level,
                nodes,
                weight_sum,
                expectation_0,
                expectation_1,
                gap_0,
                gap_1,
                "Euler expectation"
            );
        }
    }
}
