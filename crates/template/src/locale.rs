//! Date and number conventions applied at render time.

use chrono::format::{Item, StrftimeItems};
use chrono::{FixedOffset, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Write};
use zoo_types::Timestamp;

/// Text used for a date or instant that is not set.
pub const MISSING: &str = "N/A";

/// Formatting conventions for rendered cells.
///
/// Kept as plain data handed to the renderer on every call; nothing is cached
/// between renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Locale {
    /// `chrono` pattern for calendar dates.
    pub date_format: String,
    /// `chrono` pattern for instants.
    pub datetime_format: String,
    pub decimal_separator: char,
    pub currency_symbol: String,
    /// Fixed offset for displaying instants. `None` uses the host time zone.
    pub utc_offset_minutes: Option<i32>,
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            date_format: "%d/%m/%Y".to_string(),
            datetime_format: "%d/%m/%Y, %H:%M:%S".to_string(),
            decimal_separator: '.',
            currency_symbol: "$".to_string(),
            utc_offset_minutes: None,
        }
    }
}

/// Writes a delayed chrono format, falling back when the pattern is invalid.
fn render_or(formatted: impl Display, fallback: impl FnOnce() -> String) -> String {
    let mut out = String::new();
    match write!(out, "{}", formatted) {
        Ok(()) => out,
        Err(_) => fallback(),
    }
}

fn fixed_offset(minutes: i32) -> Option<FixedOffset> {
    minutes.checked_mul(60).and_then(FixedOffset::east_opt)
}

fn check_pattern(name: &str, pattern: &str) -> Result<(), String> {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(format!("Invalid {} pattern: '{}'", name, pattern));
    }
    Ok(())
}

impl Locale {
    /// Rejects date patterns chrono cannot format.
    pub fn validate(&self) -> Result<(), String> {
        check_pattern("date", &self.date_format)?;
        check_pattern("date-time", &self.datetime_format)?;
        if let Some(minutes) = self.utc_offset_minutes {
            if fixed_offset(minutes).is_none() {
                return Err(format!("UTC offset out of range: {} minutes", minutes));
            }
        }
        Ok(())
    }

    pub fn format_date(&self, date: NaiveDate) -> String {
        render_or(date.format(&self.date_format), || date.to_string())
    }

    pub fn format_optional_date(&self, date: Option<NaiveDate>) -> String {
        date.map(|d| self.format_date(d))
            .unwrap_or_else(|| MISSING.to_string())
    }

    pub fn format_timestamp(&self, ts: Option<Timestamp>) -> String {
        let Some(ts) = ts else {
            return MISSING.to_string();
        };
        let offset = self.utc_offset_minutes.and_then(fixed_offset);
        let utc = ts.as_utc();
        match offset {
            Some(offset) => render_or(
                utc.with_timezone(&offset).format(&self.datetime_format),
                || utc.to_rfc3339(),
            ),
            None => render_or(
                utc.with_timezone(&Local).format(&self.datetime_format),
                || utc.to_rfc3339(),
            ),
        }
    }

    /// Integral values print without a fractional part.
    pub fn format_number(&self, value: f64) -> String {
        let text = if value.fract() == 0.0 && value.abs() < 1e15 {
            format!("{}", value as i64)
        } else {
            format!("{}", value)
        };
        if self.decimal_separator == '.' {
            text
        } else {
            text.replace('.', &self.decimal_separator.to_string())
        }
    }

    pub fn format_currency(&self, value: f64) -> String {
        format!("{}{}", self.currency_symbol, self.format_number(value))
    }
}
