//! Projection of raw result tables into display tables.

use polars::prelude::{DataFrame, NamedFrom, Series};
use tracing::debug;

use podium_model::columns::{
    BOOKKEEPING_COLUMNS, CATEGORY, COMPETITOR_NAME, DISPLAY_RENAMES, POSITION, STATUS,
    STATUS_QUALIFIED,
};
use podium_model::{View, ViewOptions};

use crate::data_utils::{has_column, int_values, require_column, string_values};
use crate::error::Result;

/// Turn a raw result table into a display table.
///
/// Drops the bookkeeping columns, the athlete name unless
/// `options.compare_mode` is set and the category code unless
/// `options.include_category` is set. Position `0` and status `QLF` become
/// null, and the remaining columns receive their display labels. The row
/// count never changes.
///
/// The input must be a raw table: every dropped column has to be present,
/// so projecting an already projected table fails with
/// [`TransformError::MissingColumn`](crate::TransformError::MissingColumn).
pub fn normalize_and_project(df: &DataFrame, options: ViewOptions) -> Result<DataFrame> {
    let mut dropped: Vec<&str> = BOOKKEEPING_COLUMNS.to_vec();
    if !options.compare_mode {
        dropped.push(COMPETITOR_NAME);
    }
    if !options.include_category {
        dropped.push(CATEGORY);
    }
    for name in &dropped {
        require_column(df, name)?;
    }

    let mut projected = df.clone();
    for name in &dropped {
        projected = projected.drop(name)?;
    }

    let positions: Vec<Option<i64>> = int_values(&projected, POSITION)?
        .into_iter()
        .map(|position| position.filter(|value| *value != 0))
        .collect();
    projected.with_column(Series::new(POSITION.into(), positions))?;

    let statuses: Vec<Option<String>> = string_values(&projected, STATUS)?
        .into_iter()
        .map(|status| status.filter(|value| value != STATUS_QUALIFIED))
        .collect();
    projected.with_column(Series::new(STATUS.into(), statuses))?;

    for (source, target) in DISPLAY_RENAMES {
        if has_column(&projected, source) {
            projected.rename(source, target.into())?;
        }
    }

    debug!(
        rows = projected.height(),
        columns = projected.width(),
        compare_mode = options.compare_mode,
        include_category = options.include_category,
        "projected result table"
    );
    Ok(projected)
}

/// Select the display columns of a projected table in view order.
///
/// Columns of the layout that the table does not carry are skipped.
pub fn select_display_columns(df: &DataFrame, view: View, compare_mode: bool) -> Result<DataFrame> {
    let present: Vec<&str> = view
        .display_columns(compare_mode)
        .into_iter()
        .filter(|name| has_column(df, name))
        .collect();
    Ok(df.select(present)?)
}
