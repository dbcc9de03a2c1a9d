//! Currencies the cash budget can report in, and their conversion rates.

use crate::core::error::TrackerError;
use crate::core::messages::Language;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Local currency units per one US dollar.
pub const USD_RATE: f64 = 60.0;
/// Local currency units per one euro.
pub const EURO_RATE: f64 = 70.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    Usd,
    Eur,
    Rub,
}

impl Currency {
    pub fn all() -> &'static [Currency] {
        &[Currency::Usd, Currency::Eur, Currency::Rub]
    }

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "usd",
            Currency::Eur => "eur",
            Currency::Rub => "rub",
        }
    }

    /// Name shown next to amounts in budget messages.
    pub fn label(&self, lang: Language) -> &'static str {
        match (self, lang) {
            (Currency::Usd, _) => "USD",
            (Currency::Eur, _) => "Euro",
            (Currency::Rub, Language::English) => "RUB",
            (Currency::Rub, Language::Russian) => "руб",
        }
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "usd" => Ok(Currency::Usd),
            "eur" => Ok(Currency::Eur),
            "rub" => Ok(Currency::Rub),
            _ => Err(TrackerError::UnsupportedCurrency {
                code: s.to_string(),
            }),
        }
    }
}

/// Exchange rates expressed in local currency per foreign unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rates {
    #[serde(default = "default_usd")]
    pub usd: f64,
    #[serde(default = "default_eur")]
    pub eur: f64,
}

fn default_usd() -> f64 {
    USD_RATE
}

fn default_eur() -> f64 {
    EURO_RATE
}

impl Default for Rates {
    fn default() -> Self {
        Rates {
            usd: USD_RATE,
            eur: EURO_RATE,
        }
    }
}

impl Rates {
    /// The local currency always converts at 1.
    pub fn rate(&self, currency: Currency) -> f64 {
        match currency {
            Currency::Usd => self.usd,
            Currency::Eur => self.eur,
            Currency::Rub => 1.0,
        }
    }

    pub fn convert(&self, local_amount: f64, currency: Currency) -> f64 {
        local_amount / self.rate(currency)
    }
}
