//! Selection options offered to the user for a result table.

use std::cmp::Reverse;
use std::collections::HashSet;

use polars::prelude::DataFrame;

use podium_model::Season;
use podium_model::columns::{
    CATEGORY, COMPETITOR_NAME, COMPETITOR_NATION, DESCRIPTION, POSITION, SEASON,
};

use crate::data_utils::{int_values, string_values};
use crate::error::Result;

/// Distinct seasons, most recent first.
pub fn season_options(df: &DataFrame) -> Result<Vec<Season>> {
    let mut seasons: Vec<i64> = int_values(df, SEASON)?.into_iter().flatten().collect();
    seasons.sort_unstable_by_key(|&code| Reverse(code));
    seasons.dedup();
    Ok(seasons.into_iter().map(Season).collect())
}

/// Distinct athlete names, best finishers first.
///
/// Rows are ordered by position (unranked last) and then by season, most
/// recent first; each athlete appears at their first row in that order.
pub fn athlete_options(df: &DataFrame) -> Result<Vec<String>> {
    let names = string_values(df, COMPETITOR_NAME)?;
    let positions = int_values(df, POSITION)?;
    let seasons = int_values(df, SEASON)?;

    let mut order: Vec<usize> = (0..names.len()).collect();
    order.sort_by_key(|&idx| {
        let ranked = positions[idx].filter(|position| *position > 0);
        (ranked.is_none(), ranked, Reverse(seasons[idx]))
    });
    Ok(distinct_in_order(
        order.into_iter().filter_map(|idx| names[idx].clone()),
    ))
}

/// Distinct discipline descriptions in table order.
pub fn discipline_options(df: &DataFrame) -> Result<Vec<String>> {
    Ok(distinct_in_order(
        string_values(df, DESCRIPTION)?.into_iter().flatten(),
    ))
}

/// Distinct category codes in table order.
pub fn category_options(df: &DataFrame) -> Result<Vec<String>> {
    Ok(distinct_in_order(
        string_values(df, CATEGORY)?.into_iter().flatten(),
    ))
}

/// Nation code of the first row, used in single-athlete headings.
pub fn athlete_nation(df: &DataFrame) -> Result<Option<String>> {
    Ok(string_values(df, COMPETITOR_NATION)?
        .into_iter()
        .flatten()
        .next())
}

fn distinct_in_order(values: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|value| seen.insert(value.clone()))
        .collect()
}
