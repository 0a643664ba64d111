//! Command-line surface
//!
//! Each subcommand maps onto one session operation; mutating commands
//! persist the session before returning so the next invocation sees the
//! change.

use std::fs;
use std::path::PathBuf;

use clap::Subcommand;
use color_eyre::eyre::WrapErr;

use radar_core::analysis::{SweepRange, risk_indicators, strategic_advice};
use radar_core::model::{
    CapitalCategory, CapitalCostItem, CostItem, CostKind, Currency, CurrencySettings, InputField,
    Scenario,
};

use crate::data::{ExportDocument, StoragePort};
use crate::session::Session;
use crate::util::format::{format_count, format_currency, format_months, format_percent};

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the full metrics for the current state
    Metrics,
    /// Show the current input snapshot
    Inputs,
    /// Select a scenario preset, replacing the working inputs
    Scenario {
        /// optimistic, realistic, or pessimistic
        name: String,
    },
    /// Compare the three scenario presets side by side
    Scenarios,
    /// Update one input field
    Set {
        /// Field name, e.g. churn_rate or partner_count
        field: String,
        value: f64,
    },
    /// Re-evaluate the metrics while varying one input field
    Sweep {
        /// Field name, e.g. churn_rate or partner_count
        field: String,
        /// Range start (defaults to the field's recommended range)
        #[arg(long)]
        min: Option<f64>,
        /// Range end
        #[arg(long)]
        max: Option<f64>,
        /// Distance between samples
        #[arg(long)]
        step: Option<f64>,
    },
    /// Manage recurring monthly cost items
    Cost {
        #[command(subcommand)]
        action: CostAction,
    },
    /// Manage capital assets
    Capital {
        #[command(subcommand)]
        action: CapitalAction,
    },
    /// Select the display currency
    Currency {
        /// SAR or USD
        code: String,
        /// SAR per USD
        #[arg(long)]
        rate: Option<f64>,
    },
    /// Write the full state to a JSON file
    Export { path: PathBuf },
    /// Replace the state from a JSON file
    Import { path: PathBuf },
    /// Discard the stored state and return to defaults
    Reset,
}

#[derive(Subcommand, Debug)]
pub enum CostAction {
    /// List cost items with the fixed-cost total
    List,
    /// Add a cost item
    Add {
        id: String,
        name: String,
        amount: f64,
        /// fixed or variable
        #[arg(long, default_value = "fixed")]
        kind: String,
    },
    /// Remove a cost item by id
    Remove { id: String },
}

#[derive(Subcommand, Debug)]
pub enum CapitalAction {
    /// List capital assets with depreciation totals
    List,
    /// Add a capital asset
    Add {
        id: String,
        name: String,
        amount: f64,
        /// Useful life in months
        #[arg(long)]
        useful_life: u32,
        #[arg(long, default_value_t = 0.0)]
        salvage: f64,
        /// equipment, furniture, technology, infrastructure, or other
        #[arg(long, default_value = "other")]
        category: String,
        /// Purchase date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// Remove a capital asset by id
    Remove { id: String },
}

pub fn run<S: StoragePort>(command: Command, session: &mut Session<S>) -> color_eyre::Result<()> {
    match command {
        Command::Metrics => print_metrics(session),
        Command::Inputs => print_inputs(session),
        Command::Scenario { name } => {
            let scenario: Scenario = name.parse()?;
            session.set_scenario(scenario);
            session.save()?;
            println!("Scenario: {scenario}");
            print_metrics(session)
        }
        Command::Scenarios => print_scenario_comparison(session),
        Command::Set { field, value } => {
            let field: InputField = field.parse()?;
            session.update_input(field, value)?;
            session.save()?;
            println!("{} = {}", field.label(), value);
            print_metrics(session)
        }
        Command::Sweep {
            field,
            min,
            max,
            step,
        } => {
            let field: InputField = field.parse()?;
            let range = match (min, max, step) {
                (None, None, None) => None,
                _ => {
                    let default = SweepRange::default_for(field);
                    Some(SweepRange::new(
                        min.unwrap_or(default.min),
                        max.unwrap_or(default.max),
                        step.unwrap_or(default.step),
                    ))
                }
            };
            print_sweep(session, field, range)
        }
        Command::Cost { action } => run_cost(action, session),
        Command::Capital { action } => run_capital(action, session),
        Command::Currency { code, rate } => {
            let currency: Currency = code.parse()?;
            let exchange_rate = rate.unwrap_or(session.currency.exchange_rate);
            session.set_currency(CurrencySettings {
                currency,
                exchange_rate,
            });
            session.save()?;
            println!("Display currency: {} (1 USD = {} SAR)", code.to_uppercase(), exchange_rate);
            Ok(())
        }
        Command::Export { path } => {
            let json = session.to_document().to_json()?;
            fs::write(&path, json).wrap_err_with(|| format!("failed to write {}", path.display()))?;
            println!("Exported state to {}", path.display());
            Ok(())
        }
        Command::Import { path } => {
            let text = fs::read_to_string(&path)
                .wrap_err_with(|| format!("failed to read {}", path.display()))?;
            let document = ExportDocument::from_json(&text)?;
            session.apply_document(document)?;
            session.save()?;
            println!("Imported state from {}", path.display());
            print_metrics(session)
        }
        Command::Reset => {
            session.clear_saved()?;
            println!("Stored state discarded; next run starts from the realistic preset.");
            Ok(())
        }
    }
}

fn run_cost<S: StoragePort>(action: CostAction, session: &mut Session<S>) -> color_eyre::Result<()> {
    match action {
        CostAction::List => {
            for item in &session.ledger.cost_items {
                let kind = match item.kind {
                    CostKind::Fixed => "fixed",
                    CostKind::Variable => "variable",
                };
                println!(
                    "{:<16} {:<28} {:>14} {}",
                    item.id,
                    item.name,
                    format_currency(item.amount, &session.currency),
                    kind
                );
            }
            println!(
                "Monthly fixed total: {}",
                format_currency(session.ledger.monthly_fixed_total(), &session.currency)
            );
            Ok(())
        }
        CostAction::Add {
            id,
            name,
            amount,
            kind,
        } => {
            let kind: CostKind = kind.parse()?;
            session.add_cost_item(CostItem::new(id, name, amount, kind));
            session.save()?;
            run_cost(CostAction::List, session)
        }
        CostAction::Remove { id } => {
            session.remove_cost_item(&id)?;
            session.save()?;
            run_cost(CostAction::List, session)
        }
    }
}

fn run_capital<S: StoragePort>(
    action: CapitalAction,
    session: &mut Session<S>,
) -> color_eyre::Result<()> {
    match action {
        CapitalAction::List => {
            for item in &session.ledger.capital_items {
                println!(
                    "{:<16} {:<28} {:>14}  life {:>3} mo  {:>12}/mo",
                    item.id,
                    item.name,
                    format_currency(item.amount, &session.currency),
                    item.useful_life,
                    format_currency(item.monthly_depreciation(), &session.currency),
                );
            }
            println!(
                "Monthly depreciation: {}   Capital invested: {}",
                format_currency(session.ledger.monthly_depreciation(), &session.currency),
                format_currency(session.ledger.capital_investment(), &session.currency),
            );
            Ok(())
        }
        CapitalAction::Add {
            id,
            name,
            amount,
            useful_life,
            salvage,
            category,
            date,
        } => {
            let category: CapitalCategory = category.parse()?;
            let purchase_date = match date {
                Some(text) => text.parse()?,
                None => jiff::Zoned::now().date(),
            };
            session.add_capital_item(CapitalCostItem {
                id,
                name,
                amount,
                useful_life,
                purchase_date,
                salvage_value: salvage,
                category,
            })?;
            session.save()?;
            run_capital(CapitalAction::List, session)
        }
        CapitalAction::Remove { id } => {
            session.remove_capital_item(&id)?;
            session.save()?;
            run_capital(CapitalAction::List, session)
        }
    }
}

fn print_metrics<S: StoragePort>(session: &Session<S>) -> color_eyre::Result<()> {
    let metrics = session.metrics();
    let currency = &session.currency;

    println!("Scenario: {}", session.scenario);
    println!();
    println!("  LTV                     {:>14}", format_currency(metrics.ltv, currency));
    println!("  CAC                     {:>14}", format_currency(metrics.cac, currency));
    println!("  LTV:CAC                 {:>14}", format!("{:.1}x", metrics.ltv_cac_ratio()));
    println!("  Gross margin            {:>14}", format_percent(metrics.gross_margin_percentage));
    println!("  Payback period          {:>14}", format_months(metrics.payback_period));
    println!("  Break-even subscribers  {:>14}", format_count(metrics.break_even_subscribers));
    println!("  Total subscribers       {:>14}", format_count(metrics.total_subscribers));
    println!("  Lifetime revenue        {:>14}", format_currency(metrics.total_revenue, currency));
    println!();
    println!(
        "  Gross profit  3/6/12 mo  {} / {} / {}",
        format_currency(metrics.expected_profit_3_months, currency),
        format_currency(metrics.expected_profit_6_months, currency),
        format_currency(metrics.expected_profit_12_months, currency),
    );
    println!(
        "  Net profit    3/6/12 mo  {} / {} / {}",
        format_currency(metrics.net_profit_3_months, currency),
        format_currency(metrics.net_profit_6_months, currency),
        format_currency(metrics.net_profit_12_months, currency),
    );
    println!(
        "  Overhead per month       {} fixed + {} depreciation",
        format_currency(metrics.total_monthly_fixed_costs, currency),
        format_currency(metrics.total_monthly_depreciation, currency),
    );
    println!();

    for indicator in risk_indicators(&metrics) {
        let status = match indicator.status {
            radar_core::analysis::RiskStatus::Safe => "safe",
            radar_core::analysis::RiskStatus::Warning => "warning",
            radar_core::analysis::RiskStatus::Danger => "danger",
        };
        println!("  [{status:>7}] {:<18} {}", indicator.label, indicator.value);
    }
    println!();

    for advice in strategic_advice(&session.inputs, &metrics) {
        println!("  * {}: {}", advice.title, advice.content);
    }

    Ok(())
}

fn print_inputs<S: StoragePort>(session: &Session<S>) -> color_eyre::Result<()> {
    println!("Scenario: {}", session.scenario);
    for field in InputField::ALL {
        let value = field.get(&session.inputs);
        let rendered = if field.is_rate() {
            format_percent(value)
        } else {
            format!("{value}")
        };
        println!("  {:<28} {:>12}  ({})", field.label(), rendered, field.name());
    }
    Ok(())
}

fn print_scenario_comparison<S: StoragePort>(session: &Session<S>) -> color_eyre::Result<()> {
    let context = session.cost_context();
    let currency = &session.currency;

    println!(
        "{:<14} {:>12} {:>12} {:>8} {:>16}",
        "Scenario", "LTV", "CAC", "Ratio", "Net 12 mo"
    );
    for scenario in Scenario::ALL {
        let metrics = radar_core::engine::compute_metrics(&scenario.inputs(), &context);
        let marker = if scenario == session.scenario { "*" } else { " " };
        println!(
            "{marker}{:<13} {:>12} {:>12} {:>8} {:>16}",
            scenario.label(),
            format_currency(metrics.ltv, currency),
            format_currency(metrics.cac, currency),
            format!("{:.1}x", metrics.ltv_cac_ratio()),
            format_currency(metrics.net_profit_12_months, currency),
        );
    }
    Ok(())
}

fn print_sweep<S: StoragePort>(
    session: &Session<S>,
    field: InputField,
    range: Option<SweepRange>,
) -> color_eyre::Result<()> {
    let (series, insights) = session.sweep_field(field, range);
    let currency = &session.currency;
    let current = field.get(&session.inputs);

    println!("Sweep: {} (current value {current})", field.label());
    println!(
        "{:>12} {:>12} {:>12} {:>14} {:>10} {:>10}",
        field.name(),
        "LTV",
        "CAC",
        "Net 12 mo",
        "Margin",
        "Payback"
    );
    for point in &series.points {
        println!(
            "{:>12} {:>12} {:>12} {:>14} {:>10} {:>10}",
            point.value,
            format_currency(point.ltv, currency),
            format_currency(point.cac, currency),
            format_currency(point.net_profit_12_months, currency),
            format_percent(point.gross_margin_percentage),
            format_months(point.payback_period),
        );
    }

    if let Some(insights) = insights {
        println!();
        println!(
            "  Base  {} = {}  ->  net 12 mo {}",
            field.name(),
            insights.base.value,
            format_currency(insights.base.net_profit_12_months, currency)
        );
        println!(
            "  Best  {} = {}  ->  net 12 mo {}  (+{}, {})",
            field.name(),
            insights.best.value,
            format_currency(insights.best.net_profit_12_months, currency),
            format_currency(insights.profit_improvement, currency),
            format_percent(insights.improvement_percent),
        );
        println!(
            "  Worst {} = {}  ->  net 12 mo {}  (-{})",
            field.name(),
            insights.worst.value,
            format_currency(insights.worst.net_profit_12_months, currency),
            format_currency(insights.profit_decline, currency),
        );
    }

    Ok(())
}
