use crate::core::cash::CashBudget;
use crate::core::clock::Clock;
use crate::core::currency::{Currency, Rates};
use crate::core::energy::EnergyBudget;
use crate::core::messages::Language;
use crate::core::record::Record;
use crate::core::tracker::{Budget, Tracker};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::{fs, path::PathBuf};
use tracing::debug;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RecordEntry {
    pub amount: f64,
    #[serde(default)]
    pub comment: String,
    /// `DD.MM.YYYY`; omitted means today.
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TrackerConfig {
    pub limit: f64,
    #[serde(default)]
    pub records: Vec<RecordEntry>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub language: Language,
    #[serde(default = "default_currency")]
    pub currency: Currency,
    #[serde(default)]
    pub rates: Rates,
    pub energy: Option<TrackerConfig>,
    pub cash: Option<TrackerConfig>,
}

fn default_currency() -> Currency {
    Currency::Rub
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("org", "daybudget", "daybudget")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    pub fn energy_budget(&self, clock: Arc<dyn Clock>) -> Result<Option<EnergyBudget>> {
        self.energy
            .as_ref()
            .map(|cfg| -> Result<EnergyBudget> {
                let mut budget = EnergyBudget::with_clock(cfg.limit, clock);
                fill(budget.tracker_mut(), &cfg.records).context("Invalid energy record")?;
                Ok(budget)
            })
            .transpose()
    }

    pub fn cash_budget(&self, clock: Arc<dyn Clock>) -> Result<Option<CashBudget>> {
        self.cash
            .as_ref()
            .map(|cfg| -> Result<CashBudget> {
                let mut budget = CashBudget::with_clock(cfg.limit, clock).with_rates(self.rates);
                fill(budget.tracker_mut(), &cfg.records).context("Invalid cash record")?;
                Ok(budget)
            })
            .transpose()
    }
}

fn fill(tracker: &mut Tracker, entries: &[RecordEntry]) -> Result<()> {
    for entry in entries {
        let record = Record::with_clock(
            entry.amount,
            entry.comment.as_str(),
            entry.date.as_deref(),
            tracker.clock(),
        )?;
        tracker.add_record(record);
    }
    debug!(count = entries.len(), "Loaded records");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FixedClock;
    use chrono::NaiveDate;

    fn clock() -> Arc<dyn Clock> {
        Arc::new(FixedClock(NaiveDate::from_ymd_opt(2019, 11, 8).unwrap()))
    }

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
language: ru
currency: usd
rates:
  usd: 65.5
energy:
  limit: 2000
  records:
    - amount: 1186
      comment: "Piece of cake"
    - amount: 1140
      comment: "Sandwich"
      date: "24.02.2019"
cash:
  limit: 1000
  records:
    - amount: 145
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.language, Language::Russian);
        assert_eq!(config.currency, Currency::Usd);
        assert_eq!(config.rates.usd, 65.5);
        assert_eq!(config.rates.eur, 70.0);

        let energy = config.energy.as_ref().unwrap();
        assert_eq!(energy.limit, 2000.0);
        assert_eq!(energy.records.len(), 2);
        assert_eq!(energy.records[0].comment, "Piece of cake");
        assert!(energy.records[0].date.is_none());
        assert_eq!(energy.records[1].date.as_deref(), Some("24.02.2019"));

        let cash = config.cash.as_ref().unwrap();
        assert_eq!(cash.records[0].amount, 145.0);
        assert_eq!(cash.records[0].comment, "");
    }

    #[test]
    fn test_defaults_when_sections_missing() {
        let config: AppConfig = serde_yaml::from_str("energy:\n  limit: 1500\n").unwrap();
        assert_eq!(config.language, Language::English);
        assert_eq!(config.currency, Currency::Rub);
        assert_eq!(config.rates, Rates::default());
        assert!(config.cash.is_none());
        assert!(config.cash_budget(clock()).unwrap().is_none());
    }

    #[test]
    fn test_unknown_currency_is_rejected() {
        let result: std::result::Result<AppConfig, _> = serde_yaml::from_str("currency: gbp\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_builds_budgets_from_records() -> Result<()> {
        let yaml_str = r#"
energy:
  limit: 2000
  records:
    - amount: 1200
    - amount: 300
      date: "08.11.2019"
    - amount: 5000
      date: "01.01.2019"
cash:
  limit: 1000
  records:
    - amount: 3000
      date: "08.11.2019"
"#;
        let config: AppConfig = serde_yaml::from_str(yaml_str)?;

        let energy = config.energy_budget(clock())?.unwrap();
        assert_eq!(energy.today_stats(), 1500.0);
        assert_eq!(energy.week_stats(), 1500.0);

        let cash = config.cash_budget(clock())?.unwrap();
        assert_eq!(cash.remaining_in(Currency::Rub), -2000.0);
        Ok(())
    }

    #[test]
    fn test_bad_record_date_fails_to_build() {
        let yaml_str = r#"
cash:
  limit: 1000
  records:
    - amount: 10
      date: "2019-11-08"
"#;
        let config: AppConfig = serde_yaml::from_str(yaml_str).unwrap();
        let err = config.cash_budget(clock()).unwrap_err();
        assert!(format!("{err:#}").contains("2019-11-08"));
    }
}
