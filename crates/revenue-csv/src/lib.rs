//! CSV value interpretation for Glasspath Revenue
//!
//! Imported CSV rows arrive as loosely typed strings. This crate turns them
//! into domain values on a best-effort basis:
//!
//! - [`date_format`]: ordered, first-match-wins table of date layouts
//! - [`coerce`]: integer, float, date, time, and boolean coercion
//! - [`separator`]: the field separator choice used for import and export
//!
//! Nothing in the coercion path returns an error; a value that cannot be
//! interpreted is simply absent.

pub mod coerce;
pub mod date_format;
pub mod error;
pub mod separator;

pub use coerce::{
    BoolWords, NumberFormat, coerce_bool, coerce_bool_with, coerce_date, coerce_float,
    coerce_float_with, coerce_int, coerce_long, coerce_time,
};
pub use date_format::{DATE_FORMATS, DateFormatRule, infer_date, matching_rule};
pub use error::{Error, Result};
pub use separator::CsvSeparator;
