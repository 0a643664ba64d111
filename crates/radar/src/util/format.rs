//! Value formatting for terminal output
//!
//! The engine emits raw floating-point values; everything user-facing is
//! rounded and labelled here. Currency values are stored in SAR and
//! converted through the session's currency settings before display.

use radar_core::model::{Currency, CurrencySettings};

/// Format a currency amount in the selected display currency, rounded to
/// whole units with thousands separators
pub fn format_currency(value: f64, settings: &CurrencySettings) -> String {
    let converted = settings.convert(value);
    let rounded = converted.abs().round() as i64;
    let grouped = group_thousands(rounded);

    let sign = if converted < 0.0 && rounded != 0 { "-" } else { "" };
    match settings.currency {
        Currency::Sar => format!("{sign}{grouped} SAR"),
        Currency::Usd => format!("{sign}${grouped}"),
    }
}

/// Format a percentage value like "55.0%"
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Format a month count like "4.2 mo"
pub fn format_months(value: f64) -> String {
    format!("{value:.1} mo")
}

/// Format a subscriber or unit count, rounded with separators
pub fn format_count(value: f64) -> String {
    group_thousands(value.abs().round() as i64)
}

fn group_thousands(value: i64) -> String {
    let digits = value.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped.chars().rev().collect()
}
