use super::ui;
use crate::core::config::AppConfig;
use crate::core::{Budget, CashBudget, Clock, Currency, EnergyBudget, Language};
use anyhow::Result;
use comfy_table::Cell;
use std::sync::Arc;
use tracing::debug;

/// One row of the status table.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetStatus {
    pub name: &'static str,
    pub limit: f64,
    pub today: f64,
    pub week: f64,
    pub message: String,
}

impl BudgetStatus {
    pub fn energy(budget: &EnergyBudget, lang: Language) -> Self {
        BudgetStatus {
            name: "Energy",
            limit: budget.limit(),
            today: budget.today_stats(),
            week: budget.week_stats(),
            message: budget.remaining_message(lang),
        }
    }

    pub fn cash(budget: &CashBudget, currency: Currency, lang: Language) -> Self {
        BudgetStatus {
            name: "Cash",
            limit: budget.limit(),
            today: budget.today_stats(),
            week: budget.week_stats(),
            message: budget.remaining_message(currency, lang),
        }
    }

    pub fn is_over(&self) -> bool {
        self.today >= self.limit
    }
}

/// Collects the status of every configured budget as of `clock`'s today.
pub fn collect(
    config: &AppConfig,
    clock: Arc<dyn Clock>,
    currency: Option<&str>,
) -> Result<Vec<BudgetStatus>> {
    let currency = match currency {
        Some(code) => code.parse::<Currency>()?,
        None => config.currency,
    };
    debug!(%currency, language = %config.language, "Collecting budget status");

    let mut statuses = Vec::new();
    if let Some(energy) = config.energy_budget(Arc::clone(&clock))? {
        statuses.push(BudgetStatus::energy(&energy, config.language));
    }
    if let Some(cash) = config.cash_budget(clock)? {
        statuses.push(BudgetStatus::cash(&cash, currency, config.language));
    }
    Ok(statuses)
}

pub fn display_as_table(statuses: &[BudgetStatus], today: &str) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Budget"),
        ui::header_cell("Limit"),
        ui::header_cell("Today"),
        ui::header_cell("Last 7 days"),
    ]);

    for status in statuses {
        table.add_row(vec![
            Cell::new(status.name),
            ui::amount_cell(status.limit, f64::INFINITY),
            ui::amount_cell(status.today, status.limit),
            ui::amount_cell(status.week, f64::INFINITY),
        ]);
    }

    let mut output = format!(
        "Status for {}\n\n",
        ui::style_text(today, ui::StyleType::Title)
    );
    output.push_str(&table.to_string());
    output.push('\n');

    for status in statuses {
        let style_type = if status.is_over() {
            ui::StyleType::Warning
        } else {
            ui::StyleType::Ok
        };
        output.push_str(&format!(
            "\n{} {}",
            ui::style_text(&format!("{}:", status.name), ui::StyleType::Subtle),
            ui::style_text(&status.message, style_type)
        ));
    }

    output
}

pub fn run(config: &AppConfig, clock: Arc<dyn Clock>, currency: Option<&str>) -> Result<()> {
    let today = clock.today().format("%d.%m.%Y").to_string();
    let statuses = collect(config, clock, currency)?;
    if statuses.is_empty() {
        anyhow::bail!("No budgets configured: add an `energy` or `cash` section");
    }
    println!("{}", display_as_table(&statuses, &today));
    Ok(())
}
