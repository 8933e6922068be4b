//! Column extraction helpers for result tables.
//!
//! Values are read through non-strict casts, so a column loaded as text or
//! as floats still yields integer positions, and unparseable cells become
//! `None` instead of failing the whole table.

use chrono::NaiveDate;
use polars::prelude::{BooleanChunked, Column, DataFrame, DataType};

use crate::error::{Result, TransformError};

/// Look up a column, reporting a missing one as a contract violation.
pub fn require_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    df.column(name).map_err(|_| TransformError::MissingColumn {
        column: name.to_string(),
    })
}

/// Whether the table carries a column with this exact name.
pub fn has_column(df: &DataFrame, name: &str) -> bool {
    df.column(name).is_ok()
}

/// Read a column as optional integers.
pub fn int_values(df: &DataFrame, name: &str) -> Result<Vec<Option<i64>>> {
    let column = require_column(df, name)?.cast(&DataType::Int64)?;
    Ok(column.i64()?.into_iter().collect())
}

/// Read a column as optional floats.
pub fn float_values(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let column = require_column(df, name)?.cast(&DataType::Float64)?;
    Ok(column.f64()?.into_iter().collect())
}

/// Read a column as optional strings.
pub fn string_values(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let column = require_column(df, name)?.cast(&DataType::String)?;
    Ok(column
        .str()?
        .into_iter()
        .map(|value| value.map(str::to_string))
        .collect())
}

/// Keep the rows whose mask entry is `true`.
pub fn filter_rows(df: &DataFrame, mask: impl IntoIterator<Item = bool>) -> Result<DataFrame> {
    let mask: BooleanChunked = mask.into_iter().collect();
    Ok(df.filter(&mask)?)
}

/// Parse a race date as delivered by the export.
///
/// Accepts ISO dates with an optional time part (`2024-01-15`,
/// `2024-01-15 00:00:00`, `2024-01-15T00:00:00`) and already formatted
/// display dates (`15.01.2024`).
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use podium_transform::data_utils::parse_race_date;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 15);
/// assert_eq!(parse_race_date("2024-01-15"), date);
/// assert_eq!(parse_race_date("2024-01-15 10:30:00"), date);
/// assert_eq!(parse_race_date("15.01.2024"), date);
/// assert_eq!(parse_race_date("soon"), None);
/// ```
pub fn parse_race_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    let date_part = trimmed
        .split(|ch: char| ch == ' ' || ch == 'T')
        .next()
        .unwrap_or(trimmed);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(date_part, "%d.%m.%Y"))
        .ok()
}

/// Format a race date for metric labels (`dd.mm.yyyy`).
///
/// Returns `None` when the value is not a recognizable date.
pub fn format_race_date(value: &str) -> Option<String> {
    parse_race_date(value).map(|date| date.format("%d.%m.%Y").to_string())
}
