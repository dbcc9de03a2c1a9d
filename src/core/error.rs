//! Error types surfaced by the tracking library.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TrackerError {
    /// A record date did not match the `DD.MM.YYYY` layout.
    #[error("Invalid record date '{input}': expected DD.MM.YYYY")]
    DateParse { input: String },

    #[error("Unsupported currency: '{code}' (expected one of usd, eur, rub)")]
    UnsupportedCurrency { code: String },
}

pub type Result<T> = std::result::Result<T, TrackerError>;
