//! Record storage and date-windowed aggregates shared by every budget.
use crate::core::clock::{Clock, SystemClock};
use crate::core::record::Record;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Number of days, today included, covered by the weekly aggregate.
pub const WEEK_DAYS: i64 = 7;

/// Holds a daily limit and the records counted against it.
#[derive(Clone)]
pub struct Tracker {
    limit: f64,
    records: Vec<Record>,
    clock: Arc<dyn Clock>,
}

impl fmt::Debug for Tracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tracker")
            .field("limit", &self.limit)
            .field("records", &self.records)
            .finish_non_exhaustive()
    }
}

impl Tracker {
    pub fn new(limit: f64) -> Self {
        Self::with_clock(limit, Arc::new(SystemClock))
    }

    pub fn with_clock(limit: f64, clock: Arc<dyn Clock>) -> Self {
        Tracker {
            limit,
            records: Vec::new(),
            clock,
        }
    }

    pub fn limit(&self) -> f64 {
        self.limit
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub fn add_record(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Sum of amounts recorded on the current day.
    pub fn today_stats(&self) -> f64 {
        let today = self.clock.today();
        let total: f64 = self
            .records
            .iter()
            .filter(|r| r.date() == today)
            .map(Record::amount)
            .sum();
        debug!(%today, total, "Computed today stats");
        total
    }

    /// Sum of amounts recorded within the last [`WEEK_DAYS`] days, today
    /// included. Future-dated records are ignored.
    pub fn week_stats(&self) -> f64 {
        let today = self.clock.today();
        let total: f64 = self
            .records
            .iter()
            .filter(|r| (0..WEEK_DAYS).contains(&(today - r.date()).num_days()))
            .map(Record::amount)
            .sum();
        debug!(%today, total, "Computed week stats");
        total
    }

    /// `limit - today_stats()`, in the tracker's own units.
    pub fn remaining(&self) -> f64 {
        self.limit - self.today_stats()
    }
}

/// Common surface of the specialized budgets. Implementors only expose their
/// inner [`Tracker`]; storage and aggregation are shared.
pub trait Budget {
    fn tracker(&self) -> &Tracker;

    fn tracker_mut(&mut self) -> &mut Tracker;

    fn add_record(&mut self, record: Record) {
        self.tracker_mut().add_record(record);
    }

    fn limit(&self) -> f64 {
        self.tracker().limit()
    }

    fn today_stats(&self) -> f64 {
        self.tracker().today_stats()
    }

    fn week_stats(&self) -> f64 {
        self.tracker().week_stats()
    }
}
