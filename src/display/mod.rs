//! Display formatting for terminal output
//!
//! Formatters return `String`s; the CLI decides where they are printed.
//! Money and dates go through [`money`] and [`date`] so the user's
//! currency symbol and date format apply everywhere.

pub mod budget;
pub mod category;
pub mod report;
pub mod transaction;

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;

use crate::config::Settings;
use crate::models::Money;

/// Fallback when the configured date format is not valid strftime
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Format an amount with the configured currency symbol
pub fn money(amount: Money, settings: &Settings) -> String {
    amount.format_with_symbol(&settings.currency_symbol)
}

/// Format a date with the configured date format
pub fn date(value: NaiveDate, settings: &Settings) -> String {
    let format = if StrftimeItems::new(&settings.date_format).any(|i| matches!(i, Item::Error)) {
        DEFAULT_DATE_FORMAT
    } else {
        settings.date_format.as_str()
    };
    value.format(format).to_string()
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

/// Width of the widest string, but at least `min`
pub fn column_width<'s>(values: impl Iterator<Item = &'s str>, min: usize) -> usize {
    values.map(|v| v.chars().count()).max().unwrap_or(min).max(min)
}
