//! Rank points awarded by finishing position.

use std::collections::BTreeMap;

use polars::prelude::{DataFrame, NamedFrom, Series};
use serde::Serialize;
use tracing::debug;

use podium_model::columns::{DESCRIPTION, POSITION, RANK_POINTS};

use crate::data_utils::{int_values, string_values};
use crate::error::Result;

/// Points for positions 1 through 30, in order.
pub const RANK_POINTS_TABLE: [u32; 30] = [
    100, 80, 60, 50, 45, 40, 36, 32, 29, 26, //
    24, 22, 20, 18, 16, 15, 14, 13, 12, 11, //
    10, 9, 8, 7, 6, 5, 4, 3, 2, 1,
];

/// Label of the aggregate entry appended by [`rank_points_by_discipline`].
pub const TOTAL_POINTS_LABEL: &str = "Total Points";

/// Rank points for a finishing position.
///
/// Positions outside `1..=30`, including the unranked `0` and an absent
/// position, score nothing.
///
/// # Examples
///
/// ```
/// use podium_transform::compute_rank_points;
///
/// assert_eq!(compute_rank_points(Some(1)), 100);
/// assert_eq!(compute_rank_points(Some(30)), 1);
/// assert_eq!(compute_rank_points(Some(31)), 0);
/// assert_eq!(compute_rank_points(None), 0);
/// ```
pub fn compute_rank_points(position: Option<i64>) -> u32 {
    match position {
        Some(rank @ 1..=30) => RANK_POINTS_TABLE[(rank - 1) as usize],
        _ => 0,
    }
}

/// Return a copy of the table with the derived `WC_Points` column.
pub fn with_rank_points(df: &DataFrame) -> Result<DataFrame> {
    let points: Vec<i64> = int_values(df, POSITION)?
        .into_iter()
        .map(|position| i64::from(compute_rank_points(position)))
        .collect();
    let mut derived = df.clone();
    derived.with_column(Series::new(RANK_POINTS.into(), points))?;
    Ok(derived)
}

/// Rank points collected in one discipline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisciplineTotal {
    pub discipline: String,
    pub points: i64,
}

/// Sum rank points per discipline, followed by a `Total Points` entry.
///
/// Disciplines are ordered by name. Rows without a discipline are ignored.
pub fn rank_points_by_discipline(df: &DataFrame) -> Result<Vec<DisciplineTotal>> {
    let disciplines = string_values(df, DESCRIPTION)?;
    let positions = int_values(df, POSITION)?;

    let mut sums: BTreeMap<String, i64> = BTreeMap::new();
    let mut total = 0i64;
    for (discipline, position) in disciplines.into_iter().zip(positions) {
        let Some(discipline) = discipline else {
            continue;
        };
        let points = i64::from(compute_rank_points(position));
        total += points;
        *sums.entry(discipline).or_insert(0) += points;
    }

    let mut totals: Vec<DisciplineTotal> = sums
        .into_iter()
        .map(|(discipline, points)| DisciplineTotal { discipline, points })
        .collect();
    totals.push(DisciplineTotal {
        discipline: TOTAL_POINTS_LABEL.to_string(),
        points: total,
    });
    debug!(disciplines = totals.len() - 1, total, "summed rank points");
    Ok(totals)
}
