//! Best-effort coercion of loosely typed CSV values
//!
//! Every function takes the raw value as `Option<&str>` (an absent column or
//! an empty cell is `None`) and returns `None` when the value cannot be
//! interpreted. Boolean coercion is the exception: it always answers,
//! falling back to the caller's default.

use crate::date_format::infer_date;
use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Coerce to a 32-bit integer. The value is parsed as given, without trimming.
pub fn coerce_int(raw: Option<&str>) -> Option<i32> {
    raw?.parse().ok()
}

/// Coerce to a 64-bit integer. The value is parsed as given, without trimming.
pub fn coerce_long(raw: Option<&str>) -> Option<i64> {
    raw?.parse().ok()
}

/// Decimal and grouping separators of a locale's number format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberFormat {
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl NumberFormat {
    pub const fn new(decimal_separator: char, grouping_separator: char) -> Self {
        Self {
            decimal_separator,
            grouping_separator,
        }
    }

    /// Parse a formatted number such as `1,234.5` (or `1.234,5` with a
    /// comma decimal separator). Grouping separators are ignored wherever
    /// they appear. Non-finite results are rejected.
    pub fn parse_f32(&self, value: &str) -> Option<f32> {
        if self.decimal_separator == self.grouping_separator {
            return None;
        }

        let normalized: String = value
            .chars()
            .filter(|c| *c != self.grouping_separator)
            .map(|c| if c == self.decimal_separator { '.' } else { c })
            .collect();

        if normalized.is_empty()
            || !normalized
                .chars()
                .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
        {
            return None;
        }

        normalized.parse::<f32>().ok().filter(|v| v.is_finite())
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::new('.', ',')
    }
}

/// Coerce to a float using the default `1,234.5` number format.
pub fn coerce_float(raw: Option<&str>) -> Option<f32> {
    coerce_float_with(raw, &NumberFormat::default())
}

/// Coerce to a float using an explicit number format.
pub fn coerce_float_with(raw: Option<&str>, format: &NumberFormat) -> Option<f32> {
    format.parse_f32(raw?)
}

/// Coerce to a date, inferring the layout from the value itself.
pub fn coerce_date(raw: Option<&str>) -> Option<DateTime<Utc>> {
    infer_date(raw?)
}

const TIME_FORMATS: [&str; 2] = ["%H:%M:%S", "%H:%M"];

/// Coerce to a time of day: `H:mm`, `H:mm:ss`, or compact `HHmm`.
pub fn coerce_time(raw: Option<&str>) -> Option<NaiveTime> {
    let value = raw?;

    if value.len() == 4 && value.bytes().all(|b| b.is_ascii_digit()) {
        return NaiveTime::parse_from_str(value, "%H%M").ok();
    }

    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(value, format).ok())
}

/// Localized words for "yes" and "no", matched in addition to the fixed
/// `yes/no/true/false/1/0` tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoolWords {
    pub yes: String,
    pub no: String,
}

impl BoolWords {
    pub fn new(yes: impl Into<String>, no: impl Into<String>) -> Self {
        Self {
            yes: yes.into(),
            no: no.into(),
        }
    }

    fn is_yes(&self, lowered: &str) -> bool {
        self.yes.to_lowercase() == lowered || matches!(lowered, "yes" | "true" | "1")
    }

    fn is_no(&self, lowered: &str) -> bool {
        self.no.to_lowercase() == lowered || matches!(lowered, "no" | "false" | "0")
    }
}

impl Default for BoolWords {
    fn default() -> Self {
        Self::new("Yes", "No")
    }
}

/// Coerce to a boolean with the English yes/no words.
pub fn coerce_bool(raw: Option<&str>, default: bool) -> bool {
    coerce_bool_with(raw, default, &BoolWords::default())
}

/// Coerce to a boolean.
///
/// Only the tokens that would flip `default` are checked: with a `true`
/// default a "no" token yields `false`, with a `false` default a "yes" token
/// yields `true`. Anything else, including absence, yields `default`.
pub fn coerce_bool_with(raw: Option<&str>, default: bool, words: &BoolWords) -> bool {
    let Some(value) = raw else {
        return default;
    };
    let lowered = value.to_lowercase();

    if default {
        !words.is_no(&lowered)
    } else {
        words.is_yes(&lowered)
    }
}
