//! Row filters applied before projection.

use polars::prelude::{DataFrame, DataType, IdxCa, IdxSize};
use serde::{Deserialize, Serialize};
use tracing::debug;

use podium_model::columns::{
    CATEGORY, CATEGORY_WORLD_CUP, COMPETITOR_NAME, COMPETITOR_NATION, DESCRIPTION, GENDER,
    PENALTY_POINTS, RACE_DATE, RACE_NATION, SEASON, SECTOR, STATUS, STATUS_DNS,
};
use podium_model::{LOWER_CUP_DISCIPLINES, Season, View};

use crate::data_utils::{filter_rows, int_values, parse_race_date, require_column, string_values};
use crate::error::Result;

/// Row selection for one dashboard view.
///
/// `None` leaves a dimension unrestricted; `Some` with an empty list keeps
/// no rows, like an empty multi-select.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultFilter {
    pub season: Option<Season>,
    pub athletes: Option<Vec<String>>,
    pub disciplines: Option<Vec<String>>,
    pub categories: Option<Vec<String>>,
    /// Only races held in this nation.
    pub race_nation: Option<String>,
    pub genders: Option<Vec<String>>,
    /// Nations of the athletes, not of the races.
    pub athlete_nations: Option<Vec<String>>,
}

impl ResultFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_season(mut self, season: Season) -> Self {
        self.season = Some(season);
        self
    }

    pub fn with_athletes(mut self, athletes: Vec<String>) -> Self {
        self.athletes = Some(athletes);
        self
    }

    pub fn with_disciplines(mut self, disciplines: Vec<String>) -> Self {
        self.disciplines = Some(disciplines);
        self
    }

    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = Some(categories);
        self
    }

    pub fn with_race_nation(mut self, nation: impl Into<String>) -> Self {
        self.race_nation = Some(nation.into());
        self
    }

    pub fn with_genders(mut self, genders: Vec<String>) -> Self {
        self.genders = Some(genders);
        self
    }

    pub fn with_athlete_nations(mut self, nations: Vec<String>) -> Self {
        self.athlete_nations = Some(nations);
        self
    }

    /// The same filter without the season restriction.
    pub fn all_seasons(&self) -> Self {
        Self {
            season: None,
            ..self.clone()
        }
    }

    /// Keep the rows matching every restricted dimension.
    pub fn apply(&self, df: &DataFrame) -> Result<DataFrame> {
        let mut mask = vec![true; df.height()];
        if let Some(season) = self.season {
            let seasons = int_values(df, SEASON)?;
            for (keep, value) in mask.iter_mut().zip(seasons) {
                *keep &= value == Some(season.code());
            }
        }
        if let Some(athletes) = &self.athletes {
            restrict_text(df, COMPETITOR_NAME, athletes, &mut mask)?;
        }
        if let Some(disciplines) = &self.disciplines {
            restrict_text(df, DESCRIPTION, disciplines, &mut mask)?;
        }
        if let Some(categories) = &self.categories {
            restrict_text(df, CATEGORY, categories, &mut mask)?;
        }
        if let Some(nation) = &self.race_nation {
            restrict_text(df, RACE_NATION, std::slice::from_ref(nation), &mut mask)?;
        }
        if let Some(genders) = &self.genders {
            restrict_text(df, GENDER, genders, &mut mask)?;
        }
        if let Some(nations) = &self.athlete_nations {
            restrict_text(df, COMPETITOR_NATION, nations, &mut mask)?;
        }

        let filtered = filter_rows(df, mask)?;
        debug!(
            rows_in = df.height(),
            rows_out = filtered.height(),
            "filtered result table"
        );
        Ok(filtered)
    }
}

fn restrict_text(
    df: &DataFrame,
    column: &str,
    allowed: &[String],
    mask: &mut [bool],
) -> Result<()> {
    let values = string_values(df, column)?;
    for (keep, value) in mask.iter_mut().zip(values) {
        *keep &= value.is_some_and(|value| allowed.contains(&value));
    }
    Ok(())
}

/// Order rows by race date, oldest first.
///
/// The sort is stable; rows with an unreadable date go last.
pub fn sort_by_race_date(df: &DataFrame) -> Result<DataFrame> {
    let dates: Vec<_> = string_values(df, RACE_DATE)?
        .into_iter()
        .map(|value| value.as_deref().and_then(parse_race_date))
        .collect();
    let mut order: Vec<usize> = (0..dates.len()).collect();
    order.sort_by_key(|&idx| (dates[idx].is_none(), dates[idx]));

    let indices: Vec<IdxSize> = order.into_iter().map(|idx| idx as IdxSize).collect();
    Ok(df.take(&IdxCa::from_vec("idx".into(), indices))?)
}

/// Cast penalty points to floats; missing or non-numeric values become null.
pub fn coerce_penalty_points(df: &DataFrame) -> Result<DataFrame> {
    let points = require_column(df, PENALTY_POINTS)?.cast(&DataType::Float64)?;
    let mut coerced = df.clone();
    coerced.with_column(points)?;
    Ok(coerced)
}

/// Narrow a raw export to the rows a view covers.
pub fn scope_to_view(df: &DataFrame, view: View) -> Result<DataFrame> {
    match view {
        View::CrossCountry => restrict_to_cross_country(df),
        View::LowerCup => restrict_to_lower_cup(df),
    }
}

/// Narrow a raw export to the cross-country scope.
///
/// Keeps cross-country sector rows and drops did-not-start entries.
pub fn restrict_to_cross_country(df: &DataFrame) -> Result<DataFrame> {
    let sectors = string_values(df, SECTOR)?;
    let scoped = filter_rows(
        df,
        sectors
            .into_iter()
            .map(|sector| sector.as_deref() == Some(View::CrossCountry.sector())),
    )?;
    drop_did_not_start(&scoped)
}

/// Narrow a raw export to the lower cup scope.
///
/// Keeps alpine sector rows outside the World Cup in the five alpine
/// disciplines, drops did-not-start entries and coerces penalty points to
/// floats.
pub fn restrict_to_lower_cup(df: &DataFrame) -> Result<DataFrame> {
    let sectors = string_values(df, SECTOR)?;
    let categories = string_values(df, CATEGORY)?;
    let descriptions = string_values(df, DESCRIPTION)?;
    let statuses = string_values(df, STATUS)?;
    let mask = sectors
        .into_iter()
        .zip(categories)
        .zip(descriptions.into_iter().zip(statuses))
        .map(|((sector, category), (description, status))| {
            sector.as_deref() == Some(View::LowerCup.sector())
                && category.as_deref() != Some(CATEGORY_WORLD_CUP)
                && description.is_some_and(|value| LOWER_CUP_DISCIPLINES.contains(&value.as_str()))
                && status.as_deref() != Some(STATUS_DNS)
        });
    let scoped = filter_rows(df, mask)?;
    debug!(
        rows_in = df.height(),
        rows_out = scoped.height(),
        "scoped to lower cup"
    );
    coerce_penalty_points(&scoped)
}

/// Drop did-not-start entries.
pub fn drop_did_not_start(df: &DataFrame) -> Result<DataFrame> {
    let statuses = string_values(df, STATUS)?;
    filter_rows(
        df,
        statuses
            .into_iter()
            .map(|status| status.as_deref() != Some(STATUS_DNS)),
    )
}
