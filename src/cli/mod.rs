//! Command-line front end over the core budgets

pub mod setup;
pub mod status;
pub mod ui;
