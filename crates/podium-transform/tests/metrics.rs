//! Tests for tier, podium and outcome metrics.

use polars::prelude::{DataFrame, IntoColumn, NamedFrom, Series};

use podium_model::Season;
use podium_transform::{
    CardMetrics, TierCounts, TierDeltas, compute_card_metrics, count_dnf_dsq, count_podiums,
    count_result_tiers,
};

fn positions(values: Vec<Option<i64>>) -> DataFrame {
    DataFrame::new(vec![Series::new("Position".into(), values).into_column()]).unwrap()
}

fn seasonal(rows: Vec<(i64, i64)>) -> DataFrame {
    let (seasons, positions): (Vec<i64>, Vec<i64>) = rows.into_iter().unzip();
    DataFrame::new(vec![
        Series::new("Seasoncode".into(), seasons).into_column(),
        Series::new("Position".into(), positions).into_column(),
    ])
    .unwrap()
}

#[test]
fn tiers_split_positions_and_count_all_starts() {
    let df = positions(
        [1, 2, 3, 5, 9, 15, 31, 0]
            .into_iter()
            .map(Some)
            .collect(),
    );

    let summary = count_result_tiers(&df).unwrap();

    assert_eq!(
        summary.tiers,
        TierCounts {
            top3: 3,
            top10: 2,
            top30: 1,
        }
    );
    assert_eq!(summary.total, 8);
}

#[test]
fn tiers_ignore_absent_positions() {
    let df = positions(vec![None, Some(10), Some(11), Some(30), None]);

    let summary = count_result_tiers(&df).unwrap();

    assert_eq!(summary.tiers.as_array(), [0, 1, 2]);
    assert_eq!(summary.total, 5);
}

#[test]
fn card_metrics_without_previous_season_have_zero_deltas() {
    let current = seasonal(vec![(2024, 1), (2024, 12)]);
    let baseline = seasonal(vec![(2024, 1), (2024, 12), (2022, 2), (2023, 0)]);

    let metrics = compute_card_metrics(&current, &baseline, Season(2024)).unwrap();

    assert_eq!(metrics.current.as_array(), [1, 0, 1]);
    assert_eq!(metrics.baseline, TierCounts::default());
    assert_eq!(metrics.deltas, TierDeltas::default());
}

#[test]
fn card_metrics_compare_against_previous_season() {
    let current = seasonal(vec![(2024, 1), (2024, 2), (2024, 7)]);
    let baseline = seasonal(vec![
        (2024, 1),
        (2023, 3),
        (2023, 8),
        (2023, 9),
        (2023, 25),
        (2023, 0),
    ]);

    let metrics = compute_card_metrics(&current, &baseline, Season(2024)).unwrap();

    assert_eq!(
        metrics,
        CardMetrics {
            current: TierCounts {
                top3: 2,
                top10: 1,
                top30: 0,
            },
            baseline: TierCounts {
                top3: 1,
                top10: 2,
                top30: 1,
            },
            deltas: TierDeltas {
                top3: 1,
                top10: -1,
                top30: -1,
            },
        }
    );
    let cards = metrics.cards();
    assert_eq!(cards[1].label, "Finished in [4-10]");
    assert_eq!(cards[1].value, 1);
    assert_eq!(cards[1].delta, -1);
}

#[test]
fn podium_counts_by_place() {
    let df = positions(vec![Some(1), Some(1), Some(3), Some(0), None, Some(4)]);

    let podiums = count_podiums(&df).unwrap();

    assert_eq!(podiums.wins, 2);
    assert_eq!(podiums.seconds, 0);
    assert_eq!(podiums.thirds, 1);
    assert_eq!(podiums.total, 6);
}

fn outcomes(categories: Vec<&str>, statuses: Vec<Option<&str>>) -> DataFrame {
    DataFrame::new(vec![
        Series::new("Catcode".into(), categories).into_column(),
        Series::new("Status".into(), statuses).into_column(),
    ])
    .unwrap()
}

#[test]
fn dnf_dsq_counts_match_substrings() {
    let df = outcomes(
        vec!["FIS", "FIS", "EC", "NJR", "FIS"],
        vec![Some("DNF1"), Some("DSQ2"), None, Some("DNF"), Some("")],
    );

    let counts = count_dnf_dsq(&df).unwrap();

    assert_eq!(counts.races, 5);
    assert_eq!(counts.dnf, 2);
    assert_eq!(counts.dsq, 1);
}

#[test]
fn dnf_dsq_counts_exclude_training_entries() {
    let df = outcomes(
        vec!["TRA", "TRA", "FIS"],
        vec![Some("DNF"), Some("DSQ"), Some("DNF2")],
    );

    let counts = count_dnf_dsq(&df).unwrap();

    assert_eq!(counts.races, 1);
    assert_eq!(counts.dnf, 1);
    assert_eq!(counts.dsq, 0);
}
