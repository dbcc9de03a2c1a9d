//! Daily cash budget reported in one of the supported currencies.
use crate::core::clock::Clock;
use crate::core::currency::{Currency, Rates};
use crate::core::error::Result;
use crate::core::messages::{self, Language};
use crate::core::tracker::{Budget, Tracker};
use std::sync::Arc;
use tracing::debug;

/// Tracks spending in local currency. Amounts and the limit are local units;
/// conversion happens only when reporting.
#[derive(Debug, Clone)]
pub struct CashBudget {
    tracker: Tracker,
    rates: Rates,
}

impl CashBudget {
    pub fn new(limit: f64) -> Self {
        CashBudget {
            tracker: Tracker::new(limit),
            rates: Rates::default(),
        }
    }

    pub fn with_clock(limit: f64, clock: Arc<dyn Clock>) -> Self {
        CashBudget {
            tracker: Tracker::with_clock(limit, clock),
            rates: Rates::default(),
        }
    }

    pub fn with_rates(mut self, rates: Rates) -> Self {
        self.rates = rates;
        self
    }

    pub fn rates(&self) -> Rates {
        self.rates
    }

    /// Remaining budget for today, converted into `currency`.
    pub fn remaining_in(&self, currency: Currency) -> f64 {
        self.rates.convert(self.tracker.remaining(), currency)
    }

    pub fn remaining_message(&self, currency: Currency, lang: Language) -> String {
        let remaining = self.remaining_in(currency);
        let label = currency.label(lang);
        debug!(%currency, remaining, "Resolving cash budget message");

        if remaining > 0.0 {
            messages::cash_left(lang, round_cents(remaining), label)
        } else if remaining == 0.0 {
            messages::cash_none(lang)
        } else {
            messages::cash_debt(lang, round_cents(remaining.abs()), label)
        }
    }

    /// Accepts a currency code such as `"usd"`. Unknown codes are rejected
    /// instead of being reported unconverted.
    pub fn remaining_message_for(&self, code: &str, lang: Language) -> Result<String> {
        let currency: Currency = code.parse()?;
        Ok(self.remaining_message(currency, lang))
    }
}

impl Budget for CashBudget {
    fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    fn tracker_mut(&mut self) -> &mut Tracker {
        &mut self.tracker
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FixedClock;
    use crate::core::error::TrackerError;
    use crate::core::record::Record;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn budget(limit: f64, spent: &[f64]) -> CashBudget {
        let mut budget = CashBudget::with_clock(limit, Arc::new(FixedClock(today())));
        for amount in spent {
            budget.add_record(Record::on(*amount, "purchase", today()));
        }
        budget
    }

    #[test]
    fn test_converts_remaining_to_usd() {
        let budget = budget(1000.0, &[]);
        assert_eq!(
            budget.remaining_message(Currency::Usd, Language::English),
            "Left for today: 16.67 USD"
        );
    }

    #[test]
    fn test_converts_remaining_to_euro() {
        let budget = budget(1000.0, &[300.0]);
        assert_eq!(
            budget.remaining_message(Currency::Eur, Language::Russian),
            "На сегодня осталось 10.00 Euro"
        );
    }

    #[test]
    fn test_debt_is_reported_as_positive_amount() {
        let budget = budget(500.0, &[800.0]);
        assert_eq!(
            budget.remaining_message(Currency::Rub, Language::Russian),
            "Денег нет, держись: твой долг - 300.00 руб"
        );
        assert_eq!(budget.remaining_in(Currency::Rub), -300.0);
    }

    #[test]
    fn test_exactly_spent_has_no_amount() {
        let budget = budget(500.0, &[200.0, 300.0]);
        for currency in Currency::all() {
            assert_eq!(
                budget.remaining_message(*currency, Language::English),
                "No money left, hold on"
            );
        }
    }

    #[test]
    fn test_custom_rates() {
        let budget = budget(900.0, &[]).with_rates(Rates {
            usd: 90.0,
            eur: 100.0,
        });
        assert_eq!(budget.remaining_in(Currency::Usd), 10.0);
        assert_eq!(budget.remaining_in(Currency::Eur), 9.0);
        assert_eq!(budget.remaining_in(Currency::Rub), 900.0);
    }

    #[test]
    fn test_unknown_currency_code_is_rejected() {
        let budget = budget(1000.0, &[]);
        let err = budget
            .remaining_message_for("gbp", Language::English)
            .unwrap_err();
        assert_eq!(
            err,
            TrackerError::UnsupportedCurrency {
                code: "gbp".to_string()
            }
        );

        let msg = budget
            .remaining_message_for("usd", Language::English)
            .unwrap();
        assert!(msg.contains("16.67 USD"));
    }
}
