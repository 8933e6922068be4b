//! View reports: one pipeline run per dashboard page.
//!
//! Each builder takes the loaded export, resolves the selection and returns
//! everything the renderer needs. The export itself is never modified.

use anyhow::{Context, Result, bail};
use polars::prelude::DataFrame;
use tracing::{info, info_span};

use podium_model::{HOME_NATION, Season, View, ViewOptions};
use podium_transform::selection::{athlete_nation, athlete_options, season_options};
use podium_transform::{
    BestResult, CardMetrics, DisciplineAverage, DisciplineTotal, OutcomeCounts, PodiumCounts,
    ResultFilter, average_best_two_by_discipline, best_n_in_discipline, compute_card_metrics,
    count_dnf_dsq, count_podiums, fis_points_range, normalize_and_project,
    rank_points_by_discipline, scope_to_view, select_display_columns, sort_by_race_date,
    with_rank_points,
};

/// Disciplines with best-result cards, in card order.
const BEST_RESULT_DISCIPLINES: [&str; 5] = [
    "Slalom",
    "Giant Slalom",
    "Super G",
    "Downhill",
    "Alpine Combined",
];

/// What the user picked for a view.
#[derive(Debug, Clone, Default)]
pub struct ViewRequest {
    /// Season to show; the most recent one when absent.
    pub season: Option<Season>,
    /// Athletes to show; the best ranked one when empty.
    pub athletes: Vec<String>,
    pub disciplines: Option<Vec<String>>,
    pub categories: Option<Vec<String>>,
    /// Athlete genders to consider.
    pub genders: Option<Vec<String>>,
    /// Athlete nations to consider.
    pub athlete_nations: Option<Vec<String>>,
    /// Only races held in Switzerland.
    pub swiss_only: bool,
}

impl ViewRequest {
    /// Filter for the athlete gender and nation restrictions.
    pub fn audience(&self) -> ResultFilter {
        let mut filter = ResultFilter::new();
        filter.genders = self.genders.clone();
        filter.athlete_nations = self.athlete_nations.clone();
        filter
    }
}

/// Selection after defaults were filled in.
#[derive(Debug, Clone)]
pub struct Selection {
    pub season: Season,
    pub athletes: Vec<String>,
    /// Nation of the athlete, single-athlete views only.
    pub nation: Option<String>,
}

impl Selection {
    pub fn compare_mode(&self) -> bool {
        self.athletes.len() > 1
    }

    /// Heading used above the overview and the result table.
    pub fn heading(&self) -> String {
        if self.compare_mode() {
            return "selected athletes".to_string();
        }
        let athlete = self.athletes.join(", ");
        match &self.nation {
            Some(nation) => format!("{athlete} ({nation})"),
            None => athlete,
        }
    }
}

/// Overview for a single cross-country athlete.
#[derive(Debug, Clone)]
pub struct CrossCountryOverview {
    pub discipline_totals: Vec<DisciplineTotal>,
    pub podiums: PodiumCounts,
    pub cards: CardMetrics,
}

#[derive(Debug, Clone)]
pub struct CrossCountryReport {
    pub selection: Selection,
    /// Absent in compare mode.
    pub overview: Option<CrossCountryOverview>,
    pub table: DataFrame,
}

/// Best and second best FIS points of one discipline.
#[derive(Debug, Clone)]
pub struct BestResultCard {
    pub discipline: String,
    pub best: BestResult,
    pub second: BestResult,
}

/// Overview for a single lower cup athlete.
#[derive(Debug, Clone)]
pub struct LowerCupOverview {
    pub averages: Vec<DisciplineAverage>,
    pub outcomes: OutcomeCounts,
    pub best_results: Vec<BestResultCard>,
}

#[derive(Debug, Clone)]
pub struct LowerCupReport {
    pub selection: Selection,
    pub overview: Option<LowerCupOverview>,
    pub table: DataFrame,
    /// Range for FIS points highlighting.
    pub fis_range: Option<(f64, f64)>,
}

fn resolve_selection(scoped: &DataFrame, request: &ViewRequest) -> Result<Selection> {
    let season = match request.season {
        Some(season) => season,
        None => season_options(scoped)?
            .into_iter()
            .next()
            .context("results contain no season")?,
    };
    let athletes = if request.athletes.is_empty() {
        let season_rows = request.audience().with_season(season).apply(scoped)?;
        let best = athlete_options(&season_rows)?
            .into_iter()
            .next()
            .with_context(|| format!("no athletes in season {season}"))?;
        vec![best]
    } else {
        request.athletes.clone()
    };
    Ok(Selection {
        season,
        athletes,
        nation: None,
    })
}

/// Run the cross-country page pipeline.
pub fn build_cross_country(raw: &DataFrame, request: &ViewRequest) -> Result<CrossCountryReport> {
    let span = info_span!("cross_country");
    let _guard = span.enter();

    let scoped = scope_to_view(raw, View::CrossCountry)?;
    let mut selection = resolve_selection(&scoped, request)?;
    let compare_mode = selection.compare_mode();

    let athlete_rows = request
        .audience()
        .with_athletes(selection.athletes.clone())
        .apply(&scoped)?;
    if !compare_mode {
        selection.nation = athlete_nation(&athlete_rows)?;
    }

    let mut discipline_filter = ResultFilter::new();
    discipline_filter.disciplines = request.disciplines.clone();
    let card_rows = discipline_filter.apply(&athlete_rows)?;

    let season_rows = with_rank_points(
        &ResultFilter::new()
            .with_season(selection.season)
            .apply(&athlete_rows)?,
    )?;
    ensure_results(&season_rows, &selection)?;
    let view_rows = sort_by_race_date(&discipline_filter.apply(&season_rows)?)?;
    info!(
        season = %selection.season,
        athletes = selection.athletes.len(),
        rows = view_rows.height(),
        "cross-country view"
    );

    let overview = if compare_mode {
        None
    } else {
        Some(CrossCountryOverview {
            discipline_totals: rank_points_by_discipline(&season_rows)?,
            podiums: count_podiums(&view_rows)?,
            cards: compute_card_metrics(&view_rows, &card_rows, selection.season)?,
        })
    };

    let options = ViewOptions::for_view(View::CrossCountry, compare_mode);
    let projected = normalize_and_project(&view_rows, options)?;
    let table = select_display_columns(&projected, View::CrossCountry, compare_mode)?;

    Ok(CrossCountryReport {
        selection,
        overview,
        table,
    })
}

/// Run the lower cup page pipeline.
pub fn build_lower_cup(raw: &DataFrame, request: &ViewRequest) -> Result<LowerCupReport> {
    let span = info_span!("lower_cup");
    let _guard = span.enter();

    let scoped = scope_to_view(raw, View::LowerCup)?;
    let mut selection = resolve_selection(&scoped, request)?;
    let compare_mode = selection.compare_mode();

    let mut filter = request
        .audience()
        .with_season(selection.season)
        .with_athletes(selection.athletes.clone());
    if request.swiss_only {
        filter = filter.with_race_nation(HOME_NATION);
    }
    let results = filter.apply(&scoped)?;
    ensure_results(&results, &selection)?;
    if !compare_mode {
        selection.nation = athlete_nation(&results)?;
    }

    let mut table_filter = ResultFilter::new();
    table_filter.disciplines = request.disciplines.clone();
    table_filter.categories = request.categories.clone();
    let table_rows = sort_by_race_date(&table_filter.apply(&results)?)?;
    info!(
        season = %selection.season,
        athletes = selection.athletes.len(),
        rows = table_rows.height(),
        "lower cup view"
    );

    let overview = if compare_mode {
        None
    } else {
        Some(LowerCupOverview {
            averages: average_best_two_by_discipline(&results)?,
            outcomes: count_dnf_dsq(&results)?,
            best_results: best_result_cards(&results, request.disciplines.as_deref())?,
        })
    };

    let options = ViewOptions::for_view(View::LowerCup, compare_mode);
    let projected = normalize_and_project(&table_rows, options)?;
    let fis_range = fis_points_range(&projected)?;
    let table = select_display_columns(&projected, View::LowerCup, compare_mode)?;

    Ok(LowerCupReport {
        selection,
        overview,
        table,
        fis_range,
    })
}

/// Fail when the selection matched no rows of the season.
fn ensure_results(rows: &DataFrame, selection: &Selection) -> Result<()> {
    if rows.height() == 0 {
        bail!(
            "no results for {} in season {}",
            selection.athletes.join(", "),
            selection.season
        );
    }
    Ok(())
}

fn best_result_cards(
    results: &DataFrame,
    selected: Option<&[String]>,
) -> Result<Vec<BestResultCard>> {
    let mut cards = Vec::new();
    for discipline in BEST_RESULT_DISCIPLINES {
        if selected.is_some_and(|chosen| !chosen.iter().any(|d| d == discipline)) {
            continue;
        }
        cards.push(BestResultCard {
            discipline: discipline.to_string(),
            best: best_n_in_discipline(results, discipline, 1)?,
            second: best_n_in_discipline(results, discipline, 2)?,
        });
    }
    Ok(cards)
}
