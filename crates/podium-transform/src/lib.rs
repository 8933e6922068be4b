//! Ski race result transformations.
//!
//! This crate turns raw result tables into display tables and metrics:
//!
//! - **projection**: column drops, sentinel normalization and display labels
//! - **points**: rank points by finishing position
//! - **metrics**: tier counts, season deltas, podiums, DNF/DSQ counts
//! - **best**: best FIS points per discipline
//! - **highlight**: cell styling for positions, statuses and FIS points
//! - **filter**: row filters and view scoping
//! - **selection**: option lists for seasons, athletes, disciplines, categories
//!
//! All operations are pure: they borrow a `DataFrame` and return new values.

pub mod best;
pub mod data_utils;
pub mod error;
pub mod filter;
pub mod highlight;
pub mod metrics;
pub mod points;
pub mod projection;
pub mod selection;

pub use best::{
    BestResult, DisciplineAverage, average_best_two_by_discipline, best_n_in_discipline,
};
pub use error::{Result, TransformError};
pub use filter::{
    ResultFilter, coerce_penalty_points, drop_did_not_start, restrict_to_cross_country,
    restrict_to_lower_cup, scope_to_view, sort_by_race_date,
};
pub use highlight::{
    CellStyle, Rgb, fis_points_range, highlight_fis_points, highlight_position, highlight_status,
};
pub use metrics::{
    CardMetrics, MetricCard, OutcomeCounts, PodiumCounts, TierCounts, TierDeltas, TierSummary,
    compute_card_metrics, count_dnf_dsq, count_podiums, count_result_tiers,
};
pub use points::{
    DisciplineTotal, compute_rank_points, rank_points_by_discipline, with_rank_points,
};
pub use projection::{normalize_and_project, select_display_columns};
