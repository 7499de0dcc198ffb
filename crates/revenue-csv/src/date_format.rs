//! Date-format inference for imported CSV values
//!
//! [`DATE_FORMATS`] is an ordered table of `(pattern, format)` rules. Input is
//! lower-cased and tested against each pattern in order; the first pattern
//! that matches decides the format, and later rules are never consulted even
//! if parsing with the chosen format fails. The order of the table is part of
//! its meaning: purely numeric layouts are told apart only by their exact
//! digit count.
//!
//! All values are interpreted in UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;
use std::sync::LazyLock;

/// A single date layout: a pattern that recognizes it and the format used
/// to parse it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFormatRule {
    pattern: &'static str,
    format: &'static str,
    chrono_format: &'static str,
    has_time: bool,
    weekday_prefix: bool,
}

impl DateFormatRule {
    const fn date(pattern: &'static str, format: &'static str, chrono_format: &'static str) -> Self {
        Self {
            pattern,
            format,
            chrono_format,
            has_time: false,
            weekday_prefix: false,
        }
    }

    const fn date_time(
        pattern: &'static str,
        format: &'static str,
        chrono_format: &'static str,
    ) -> Self {
        Self {
            pattern,
            format,
            chrono_format,
            has_time: true,
            weekday_prefix: false,
        }
    }

    /// The weekday token is dropped before parsing; `chrono_format` covers
    /// the remainder only.
    const fn weekday_date(
        pattern: &'static str,
        format: &'static str,
        chrono_format: &'static str,
    ) -> Self {
        Self {
            pattern,
            format,
            chrono_format,
            has_time: false,
            weekday_prefix: true,
        }
    }

    /// The regular expression recognizing this layout.
    pub fn pattern(&self) -> &'static str {
        self.pattern
    }

    /// The layout in `yyyy-MM-dd HH:mm` notation.
    pub fn format(&self) -> &'static str {
        self.format
    }

    /// Whether the layout carries a time of day.
    pub fn has_time(&self) -> bool {
        self.has_time
    }

    /// Parse an already lower-cased value with this rule's format.
    pub fn parse(&self, lowered: &str) -> Option<DateTime<Utc>> {
        let text = if self.weekday_prefix {
            lowered.split_once(char::is_whitespace)?.1
        } else {
            lowered
        };

        let naive = if self.has_time {
            NaiveDateTime::parse_from_str(text, self.chrono_format).ok()?
        } else {
            NaiveDate::parse_from_str(text, self.chrono_format)
                .ok()?
                .and_hms_opt(0, 0, 0)?
        };

        Some(naive.and_utc())
    }
}

/// Date layouts in evaluation order.
pub static DATE_FORMATS: [DateFormatRule; 26] = [
    DateFormatRule::date(r"^\d{8}$", "yyyyMMdd", "%Y%m%d"),
    DateFormatRule::weekday_date(
        r"^[a-z]{2,3}\s\d{1,2}\s[a-z]{3}\s\d{4}$",
        "E dd MMM yyyy",
        "%d %b %Y",
    ),
    DateFormatRule::weekday_date(
        r"^[a-z]{2,3}\s\d{1,2}-[a-z]{3}-\d{4}$",
        "E dd-MMM-yyyy",
        "%d-%b-%Y",
    ),
    DateFormatRule::weekday_date(
        r"^[a-z]{4,}\s\d{1,2}\s[a-z]{3,}\s\d{4}$",
        "EEEE dd MMMM yyyy",
        "%d %B %Y",
    ),
    DateFormatRule::date(r"^\d{1,2}-\d{1,2}-\d{4}$", "dd-MM-yyyy", "%d-%m-%Y"),
    DateFormatRule::date(r"^\d{4}-\d{1,2}-\d{1,2}$", "yyyy-MM-dd", "%Y-%m-%d"),
    DateFormatRule::date(r"^\d{1,2}/\d{1,2}/\d{4}$", "MM/dd/yyyy", "%m/%d/%Y"),
    DateFormatRule::date(r"^\d{4}/\d{1,2}/\d{1,2}$", "yyyy/MM/dd", "%Y/%m/%d"),
    DateFormatRule::date(r"^\d{1,2}\s[a-z]{3}\s\d{4}$", "dd MMM yyyy", "%d %b %Y"),
    DateFormatRule::date(r"^\d{1,2}\s[a-z]{4,}\s\d{4}$", "dd MMMM yyyy", "%d %B %Y"),
    // minute precision
    DateFormatRule::date_time(r"^\d{12}$", "yyyyMMddHHmm", "%Y%m%d%H%M"),
    DateFormatRule::date_time(r"^\d{8}\s\d{4}$", "yyyyMMdd HHmm", "%Y%m%d %H%M"),
    DateFormatRule::date_time(
        r"^\d{1,2}-\d{1,2}-\d{4}\s\d{1,2}:\d{2}$",
        "dd-MM-yyyy HH:mm",
        "%d-%m-%Y %H:%M",
    ),
    DateFormatRule::date_time(
        r"^\d{4}-\d{1,2}-\d{1,2}\s\d{1,2}:\d{2}$",
        "yyyy-MM-dd HH:mm",
        "%Y-%m-%d %H:%M",
    ),
    DateFormatRule::date_time(
        r"^\d{1,2}/\d{1,2}/\d{4}\s\d{1,2}:\d{2}$",
        "MM/dd/yyyy HH:mm",
        "%m/%d/%Y %H:%M",
    ),
    DateFormatRule::date_time(
        r"^\d{4}/\d{1,2}/\d{1,2}\s\d{1,2}:\d{2}$",
        "yyyy/MM/dd HH:mm",
        "%Y/%m/%d %H:%M",
    ),
    DateFormatRule::date_time(
        r"^\d{1,2}\s[a-z]{3}\s\d{4}\s\d{1,2}:\d{2}$",
        "dd MMM yyyy HH:mm",
        "%d %b %Y %H:%M",
    ),
    DateFormatRule::date_time(
        r"^\d{1,2}\s[a-z]{4,}\s\d{4}\s\d{1,2}:\d{2}$",
        "dd MMMM yyyy HH:mm",
        "%d %B %Y %H:%M",
    ),
    // second precision
    DateFormatRule::date_time(r"^\d{14}$", "yyyyMMddHHmmss", "%Y%m%d%H%M%S"),
    DateFormatRule::date_time(r"^\d{8}\s\d{6}$", "yyyyMMdd HHmmss", "%Y%m%d %H%M%S"),
    DateFormatRule::date_time(
        r"^\d{1,2}-\d{1,2}-\d{4}\s\d{1,2}:\d{2}:\d{2}$",
        "dd-MM-yyyy HH:mm:ss",
        "%d-%m-%Y %H:%M:%S",
    ),
    DateFormatRule::date_time(
        r"^\d{4}-\d{1,2}-\d{1,2}\s\d{1,2}:\d{2}:\d{2}$",
        "yyyy-MM-dd HH:mm:ss",
        "%Y-%m-%d %H:%M:%S",
    ),
    DateFormatRule::date_time(
        r"^\d{1,2}/\d{1,2}/\d{4}\s\d{1,2}:\d{2}:\d{2}$",
        "MM/dd/yyyy HH:mm:ss",
        "%m/%d/%Y %H:%M:%S",
    ),
    DateFormatRule::date_time(
        r"^\d{4}/\d{1,2}/\d{1,2}\s\d{1,2}:\d{2}:\d{2}$",
        "yyyy/MM/dd HH:mm:ss",
        "%Y/%m/%d %H:%M:%S",
    ),
    DateFormatRule::date_time(
        r"^\d{1,2}\s[a-z]{3}\s\d{4}\s\d{1,2}:\d{2}:\d{2}$",
        "dd MMM yyyy HH:mm:ss",
        "%d %b %Y %H:%M:%S",
    ),
    DateFormatRule::date_time(
        r"^\d{1,2}\s[a-z]{4,}\s\d{4}\s\d{1,2}:\d{2}:\d{2}$",
        "dd MMMM yyyy HH:mm:ss",
        "%d %B %Y %H:%M:%S",
    ),
];

/// Compiled patterns, index-aligned with [`DATE_FORMATS`].
static PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    DATE_FORMATS
        .iter()
        .map(|rule| Regex::new(rule.pattern).unwrap())
        .collect()
});

fn first_match(lowered: &str) -> Option<&'static DateFormatRule> {
    PATTERNS
        .iter()
        .position(|re| re.is_match(lowered))
        .map(|idx| &DATE_FORMATS[idx])
}

/// Find the rule that decides how `raw` is parsed, if any.
pub fn matching_rule(raw: &str) -> Option<&'static DateFormatRule> {
    first_match(&raw.to_lowercase())
}

/// Infer the date layout of `raw` and parse it.
///
/// Returns `None` when no layout matches or the matching layout cannot parse
/// the value (for example `31-02-2023`). Absence means "could not infer",
/// never a hard failure.
pub fn infer_date(raw: &str) -> Option<DateTime<Utc>> {
    let lowered = raw.to_lowercase();
    let rule = first_match(&lowered)?;
    let parsed = rule.parse(&lowered);
    if parsed.is_none() {
        tracing::trace!(
            value = raw,
            format = rule.format(),
            "Date matched layout but did not parse"
        );
    }
    parsed
}
