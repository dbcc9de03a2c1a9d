//! Core business logic: records, trackers and the specialized budgets

pub mod cash;
pub mod clock;
pub mod config;
pub mod currency;
pub mod energy;
pub mod error;
pub mod log;
pub mod messages;
pub mod record;
pub mod tracker;

// Re-export main types for cleaner imports
pub use cash::CashBudget;
pub use clock::{Clock, FixedClock, SystemClock};
pub use currency::{Currency, Rates};
pub use energy::EnergyBudget;
pub use error::TrackerError;
pub use messages::Language;
pub use record::Record;
pub use tracker::{Budget, Tracker};
