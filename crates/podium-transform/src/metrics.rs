//! Summary metrics derived from result tables.
//!
//! Every function here treats missing data as zero counts, so an empty or
//! sparse table still yields a renderable metric.

use polars::prelude::DataFrame;
use serde::Serialize;
use tracing::debug;

use podium_model::Season;
use podium_model::columns::{
    CATEGORY, CATEGORY_TRAINING, POSITION, SEASON, STATUS, STATUS_DNF, STATUS_DSQ,
};

use crate::data_utils::{int_values, string_values};
use crate::error::Result;

/// Labels of the three tier metrics, in tier order.
pub const TIER_LABELS: [&str; 3] = [
    "Finished in [1-3]",
    "Finished in [4-10]",
    "Finished in [11-30]",
];

/// Number of results per position tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TierCounts {
    /// Positions 1 to 3.
    pub top3: usize,
    /// Positions 4 to 10.
    pub top10: usize,
    /// Positions 11 to 30.
    pub top30: usize,
}

impl TierCounts {
    /// Count positions into tiers. Absent and zero positions are skipped.
    pub fn from_positions(positions: impl IntoIterator<Item = Option<i64>>) -> Self {
        let mut counts = TierCounts::default();
        for position in positions.into_iter().flatten() {
            match position {
                1..=3 => counts.top3 += 1,
                4..=10 => counts.top10 += 1,
                11..=30 => counts.top30 += 1,
                _ => {}
            }
        }
        counts
    }

    pub fn as_array(&self) -> [usize; 3] {
        [self.top3, self.top10, self.top30]
    }
}

/// Tier counts together with the number of starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TierSummary {
    pub tiers: TierCounts,
    /// All rows, whatever their position.
    pub total: usize,
}

/// Count results per tier and the total number of rows.
pub fn count_result_tiers(df: &DataFrame) -> Result<TierSummary> {
    let positions = int_values(df, POSITION)?;
    let summary = TierSummary {
        tiers: TierCounts::from_positions(positions),
        total: df.height(),
    };
    debug!(?summary, "counted result tiers");
    Ok(summary)
}

/// Change of a tier count against the previous season.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TierDeltas {
    pub top3: i64,
    pub top10: i64,
    pub top30: i64,
}

impl TierDeltas {
    fn between(current: TierCounts, baseline: TierCounts) -> Self {
        let diff = |now: usize, before: usize| now as i64 - before as i64;
        Self {
            top3: diff(current.top3, baseline.top3),
            top10: diff(current.top10, baseline.top10),
            top30: diff(current.top30, baseline.top30),
        }
    }

    pub fn as_array(&self) -> [i64; 3] {
        [self.top3, self.top10, self.top30]
    }
}

/// Tier metric cards with their season-over-season change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CardMetrics {
    pub current: TierCounts,
    pub baseline: TierCounts,
    pub deltas: TierDeltas,
}

/// One rendered metric card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricCard {
    pub label: &'static str,
    pub value: usize,
    pub delta: i64,
}

impl CardMetrics {
    /// Label, value and delta triples in tier order.
    pub fn cards(&self) -> Vec<MetricCard> {
        TIER_LABELS
            .into_iter()
            .zip(self.current.as_array())
            .zip(self.deltas.as_array())
            .map(|((label, value), delta)| MetricCard {
                label,
                value,
                delta,
            })
            .collect()
    }
}

/// Compare the tier counts of `current` with the season before `season`.
///
/// `baseline` is narrowed to `season - 1` with unranked rows removed. When
/// nothing remains the baseline counts and the deltas are all zero.
pub fn compute_card_metrics(
    current: &DataFrame,
    baseline: &DataFrame,
    season: Season,
) -> Result<CardMetrics> {
    let current_counts = TierCounts::from_positions(int_values(current, POSITION)?);

    let previous = season.previous().code();
    let seasons = int_values(baseline, SEASON)?;
    let positions = int_values(baseline, POSITION)?;
    let prior: Vec<Option<i64>> = seasons
        .into_iter()
        .zip(positions)
        .filter(|(row_season, position)| *row_season == Some(previous) && *position != Some(0))
        .map(|(_, position)| position)
        .collect();

    if prior.is_empty() {
        debug!(season = %season, "no results in previous season");
        return Ok(CardMetrics {
            current: current_counts,
            ..CardMetrics::default()
        });
    }

    let baseline_counts = TierCounts::from_positions(prior);
    Ok(CardMetrics {
        current: current_counts,
        baseline: baseline_counts,
        deltas: TierDeltas::between(current_counts, baseline_counts),
    })
}

/// Wins, second and third places.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PodiumCounts {
    pub wins: usize,
    pub seconds: usize,
    pub thirds: usize,
    /// All rows, whatever their position.
    pub total: usize,
}

/// Count podium finishes by place.
pub fn count_podiums(df: &DataFrame) -> Result<PodiumCounts> {
    let mut counts = PodiumCounts {
        total: df.height(),
        ..PodiumCounts::default()
    };
    for position in int_values(df, POSITION)?.into_iter().flatten() {
        match position {
            1 => counts.wins += 1,
            2 => counts.seconds += 1,
            3 => counts.thirds += 1,
            _ => {}
        }
    }
    Ok(counts)
}

/// Starts, did-not-finish and disqualification counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OutcomeCounts {
    pub races: usize,
    pub dnf: usize,
    pub dsq: usize,
}

/// Count races, DNF and DSQ outcomes, ignoring training entries.
///
/// Status codes are matched by substring, so compound codes such as `DNF1`
/// count as DNF.
pub fn count_dnf_dsq(df: &DataFrame) -> Result<OutcomeCounts> {
    let categories = string_values(df, CATEGORY)?;
    let statuses = string_values(df, STATUS)?;

    let mut counts = OutcomeCounts::default();
    for (category, status) in categories.into_iter().zip(statuses) {
        if category.as_deref() == Some(CATEGORY_TRAINING) {
            continue;
        }
        counts.races += 1;
        let status = status.unwrap_or_default();
        if status.contains(STATUS_DNF) {
            counts.dnf += 1;
        }
        if status.contains(STATUS_DSQ) {
            counts.dsq += 1;
        }
    }
    debug!(?counts, "counted race outcomes");
    Ok(counts)
}
