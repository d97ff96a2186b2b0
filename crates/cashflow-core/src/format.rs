use chrono::NaiveDate;

use crate::dates::format_display_date;

/// Formats currency amounts for presentation.
pub trait CurrencyFormatter: Send + Sync {
    fn format_amount(&self, amount: f64, currency: &str) -> String;
}

/// Formats dates for presentation.
pub trait DateFormatter: Send + Sync {
    fn format_date(&self, date: NaiveDate) -> String;
}

/// Symbol-prefixed amounts with thousands grouping and at most two decimals,
/// trailing zeros dropped (`£1,234`, `£12.5`, `-£40.25`).
#[derive(Debug, Clone, Copy, Default)]
pub struct GroupedCurrencyFormatter;

impl CurrencyFormatter for GroupedCurrencyFormatter {
    fn format_amount(&self, amount: f64, currency: &str) -> String {
        let cents = (amount.abs() * 100.0).round() as u64;
        let whole = group_thousands(cents / 100);
        let fraction = cents % 100;
        let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
        match fraction {
            0 => format!("{sign}{currency}{whole}"),
            f if f % 10 == 0 => format!("{sign}{currency}{whole}.{}", f / 10),
            f => format!("{sign}{currency}{whole}.{f:02}"),
        }
    }
}

/// Timeline date style (`Fri 16 Oct`).
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayDateFormatter;

impl DateFormatter for DisplayDateFormatter {
    fn format_date(&self, date: NaiveDate) -> String {
        format_display_date(date)
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
