//! Dated entries counted against a daily limit.

use crate::core::clock::{Clock, SystemClock};
use crate::core::error::{Result, TrackerError};
use chrono::NaiveDate;

/// Layout accepted for caller-supplied record dates.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    amount: f64,
    comment: String,
    date: NaiveDate,
}

impl Record {
    /// Creates a record, falling back to the system date when `date` is
    /// missing or empty.
    pub fn new(amount: f64, comment: impl Into<String>, date: Option<&str>) -> Result<Self> {
        Self::with_clock(amount, comment, date, &SystemClock)
    }

    /// Same as [`Record::new`] but resolves the default date through `clock`.
    pub fn with_clock(
        amount: f64,
        comment: impl Into<String>,
        date: Option<&str>,
        clock: &dyn Clock,
    ) -> Result<Self> {
        let date = match date {
            Some(raw) if !raw.is_empty() => parse_date(raw)?,
            _ => clock.today(),
        };
        Ok(Self::on(amount, comment, date))
    }

    pub fn on(amount: f64, comment: impl Into<String>, date: NaiveDate) -> Self {
        Record {
            amount,
            comment: comment.into(),
            date,
        }
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Parses a `DD.MM.YYYY` string into a calendar date.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|_| TrackerError::DateParse {
        input: input.to_string(),
    })
}
