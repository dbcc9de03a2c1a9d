//! Daily calorie budget.
use crate::core::clock::Clock;
use crate::core::messages::{self, Language};
use crate::core::tracker::{Budget, Tracker};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct EnergyBudget {
    tracker: Tracker,
}

impl EnergyBudget {
    pub fn new(limit: f64) -> Self {
        EnergyBudget {
            tracker: Tracker::new(limit),
        }
    }

    pub fn with_clock(limit: f64, clock: Arc<dyn Clock>) -> Self {
        EnergyBudget {
            tracker: Tracker::with_clock(limit, clock),
        }
    }

    /// Tells how much more can be consumed today, or to stop once the limit
    /// is reached.
    pub fn remaining_message(&self, lang: Language) -> String {
        let remaining = self.tracker.remaining();
        debug!(remaining, "Resolving energy budget message");
        if remaining > 0.0 {
            messages::energy_allowance(lang, remaining)
        } else {
            messages::energy_stop(lang)
        }
    }
}

impl Budget for EnergyBudget {
    fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    fn tracker_mut(&mut self) -> &mut Tracker {
        &mut self.tracker
    }
}
