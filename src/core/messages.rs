//! User-facing wording for the remaining-budget queries.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ru")]
    Russian,
}

impl Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Language::English => "en",
                Language::Russian => "ru",
            }
        )
    }
}

pub(crate) fn energy_allowance(lang: Language, remaining: f64) -> String {
    match lang {
        Language::English => format!(
            "You can eat something else today, but with a total energy of no more than {remaining} kcal"
        ),
        Language::Russian => format!(
            "Сегодня можно съесть что-нибудь ещё, но с общей калорийностью не более {remaining} кКал"
        ),
    }
}

pub(crate) fn energy_stop(lang: Language) -> String {
    match lang {
        Language::English => "Stop eating!".to_string(),
        Language::Russian => "Хватит есть!".to_string(),
    }
}

pub(crate) fn cash_left(lang: Language, remaining: f64, label: &str) -> String {
    match lang {
        Language::English => format!("Left for today: {remaining:.2} {label}"),
        Language::Russian => format!("На сегодня осталось {remaining:.2} {label}"),
    }
}

pub(crate) fn cash_none(lang: Language) -> String {
    match lang {
        Language::English => "No money left, hold on".to_string(),
        Language::Russian => "Денег нет, держись".to_string(),
    }
}

pub(crate) fn cash_debt(lang: Language, debt: f64, label: &str) -> String {
    match lang {
        Language::English => format!("No money left, hold on: your debt is {debt:.2} {label}"),
        Language::Russian => format!("Денег нет, держись: твой долг - {debt:.2} {label}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_yaml_codes() {
        let lang: Language = serde_yaml::from_str("ru").unwrap();
        assert_eq!(lang, Language::Russian);
        assert_eq!(serde_yaml::to_string(&Language::English).unwrap().trim(), "en");
    }

    #[test]
    fn test_cash_amounts_use_two_decimals() {
        assert_eq!(
            cash_left(Language::English, 16.666, "USD"),
            "Left for today: 16.67 USD"
        );
        assert_eq!(
            cash_debt(Language::Russian, 300.0, "руб"),
            "Денег нет, держись: твой долг - 300.00 руб"
        );
    }
}
