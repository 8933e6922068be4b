//! Best FIS points per discipline.

use std::collections::BTreeMap;

use polars::prelude::DataFrame;
use serde::Serialize;
use tracing::debug;

use podium_model::columns::{DESCRIPTION, PENALTY_POINTS, PLACE, RACE_DATE};

use crate::data_utils::{float_values, format_race_date, string_values};
use crate::error::{Result, TransformError};

/// Points value of a [`BestResult`] that carries no data.
pub const NO_POINTS: f64 = -1.0;

/// The n-th best penalty-points result in a discipline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestResult {
    /// Penalty points, or [`NO_POINTS`] when there is no such result.
    pub points: f64,
    pub place: Option<String>,
    /// Race date as `dd.mm.yyyy`.
    pub date: Option<String>,
}

impl BestResult {
    /// The "no value" result.
    pub fn none() -> Self {
        Self {
            points: NO_POINTS,
            place: None,
            date: None,
        }
    }

    /// Whether this is an actual result. Negative points mean no data.
    pub fn has_points(&self) -> bool {
        self.points >= 0.0
    }

    /// Metric label, e.g. `Best Slalom: (Zermatt)` or `2nd. Best Slalom: (Zermatt)`.
    pub fn metric_label(&self, discipline: &str, n: usize) -> String {
        let place = self.place.as_deref().unwrap_or("-");
        if n == 1 {
            format!("Best {discipline}: ({place})")
        } else {
            format!("2nd. Best {discipline}: ({place})")
        }
    }

    /// Metric value, e.g. `12.30 pts. (15.01.2024)` or `No points`.
    pub fn metric_value(&self) -> String {
        if !self.has_points() {
            return "No points".to_string();
        }
        let date = self.date.as_deref().unwrap_or("-");
        format!("{:.2} pts. ({date})", self.points)
    }
}

/// Return the `n`-th smallest penalty points of a discipline (`n` is 1 or 2).
///
/// Rows are matched on the discipline description. Rows without points are
/// ignored and equal points keep their table order. When fewer than `n`
/// results exist the [`BestResult::none`] sentinel is returned.
///
/// # Errors
///
/// Returns [`TransformError::InvalidArgument`] when `n` is not 1 or 2.
pub fn best_n_in_discipline(df: &DataFrame, discipline: &str, n: usize) -> Result<BestResult> {
    if !(1..=2).contains(&n) {
        return Err(TransformError::InvalidArgument {
            name: "n",
            reason: format!("expected 1 or 2, got {n}"),
        });
    }

    let descriptions = string_values(df, DESCRIPTION)?;
    let points = float_values(df, PENALTY_POINTS)?;
    let places = string_values(df, PLACE)?;
    let dates = string_values(df, RACE_DATE)?;

    let mut candidates: Vec<(usize, f64)> = descriptions
        .iter()
        .zip(&points)
        .enumerate()
        .filter_map(|(idx, (description, value))| {
            let value = (*value)?;
            (description.as_deref() == Some(discipline) && !value.is_nan()).then_some((idx, value))
        })
        .collect();
    candidates.sort_by(|a, b| a.1.total_cmp(&b.1));

    let Some(&(idx, value)) = candidates.get(n - 1) else {
        debug!(discipline, n, found = candidates.len(), "no best result");
        return Ok(BestResult::none());
    };
    Ok(BestResult {
        points: value,
        place: places[idx].clone(),
        date: dates[idx].as_deref().and_then(format_race_date),
    })
}

/// Mean of the two best penalty points of a discipline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisciplineAverage {
    pub discipline: String,
    pub points: f64,
}

/// Average the two smallest penalty points per discipline.
///
/// A discipline with a single result averages that result alone. Disciplines
/// without any points are left out. Output is ordered by discipline name.
pub fn average_best_two_by_discipline(df: &DataFrame) -> Result<Vec<DisciplineAverage>> {
    let descriptions = string_values(df, DESCRIPTION)?;
    let points = float_values(df, PENALTY_POINTS)?;

    let mut by_discipline: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for (description, value) in descriptions.into_iter().zip(points) {
        if let (Some(description), Some(value)) = (description, value)
            && !value.is_nan()
        {
            by_discipline.entry(description).or_default().push(value);
        }
    }

    Ok(by_discipline
        .into_iter()
        .map(|(discipline, mut values)| {
            values.sort_by(f64::total_cmp);
            let best: Vec<f64> = values.into_iter().take(2).collect();
            DisciplineAverage {
                discipline,
                points: best.iter().sum::<f64>() / best.len() as f64,
            }
        })
        .collect())
}
