//! Tests for best FIS points per discipline.

use polars::prelude::{DataFrame, IntoColumn, NamedFrom, Series};

use podium_transform::best::NO_POINTS;
use podium_transform::{
    BestResult, TransformError, average_best_two_by_discipline, best_n_in_discipline,
};

fn lower_cup(rows: Vec<(&str, Option<f64>, &str, &str)>) -> DataFrame {
    let mut descriptions = Vec::new();
    let mut points = Vec::new();
    let mut places = Vec::new();
    let mut dates = Vec::new();
    for (description, value, place, date) in rows {
        descriptions.push(description);
        points.push(value);
        places.push(place);
        dates.push(date);
    }
    DataFrame::new(vec![
        Series::new("Description".into(), descriptions).into_column(),
        Series::new("Racepoints".into(), points).into_column(),
        Series::new("Place".into(), places).into_column(),
        Series::new("Racedate".into(), dates).into_column(),
    ])
    .unwrap()
}

fn slalom_season() -> DataFrame {
    lower_cup(vec![
        ("Slalom", Some(12.3), "Zinal", "2024-01-10"),
        ("Slalom", Some(8.5), "Hasliberg", "2024-02-03"),
        ("Giant Slalom", Some(4.0), "Veysonnaz", "2024-01-20"),
        ("Slalom", Some(30.1), "Davos", "2024-03-01"),
        ("Slalom", None, "Andermatt", "2024-03-05"),
    ])
}

#[test]
fn best_and_second_best_in_discipline() {
    let df = slalom_season();

    let best = best_n_in_discipline(&df, "Slalom", 1).unwrap();
    let second = best_n_in_discipline(&df, "Slalom", 2).unwrap();

    assert_eq!(
        best,
        BestResult {
            points: 8.5,
            place: Some("Hasliberg".to_string()),
            date: Some("03.02.2024".to_string()),
        }
    );
    assert_eq!(second.points, 12.3);
    assert_eq!(second.place.as_deref(), Some("Zinal"));
    assert_eq!(second.date.as_deref(), Some("10.01.2024"));
}

#[test]
fn missing_discipline_yields_sentinel() {
    let df = slalom_season();

    let result = best_n_in_discipline(&df, "Downhill", 1).unwrap();

    assert_eq!(result, BestResult::none());
    assert_eq!(result.points, NO_POINTS);
    assert!(!result.has_points());
}

#[test]
fn single_result_has_no_second_best() {
    let df = slalom_season();

    assert_eq!(best_n_in_discipline(&df, "Giant Slalom", 1).unwrap().points, 4.0);
    assert_eq!(
        best_n_in_discipline(&df, "Giant Slalom", 2).unwrap(),
        BestResult::none()
    );
}

#[test]
fn ties_keep_table_order() {
    let df = lower_cup(vec![
        ("Super G", Some(20.0), "First", "2024-01-01"),
        ("Super G", Some(20.0), "Second", "2024-01-02"),
    ]);

    let best = best_n_in_discipline(&df, "Super G", 1).unwrap();
    let second = best_n_in_discipline(&df, "Super G", 2).unwrap();

    assert_eq!(best.place.as_deref(), Some("First"));
    assert_eq!(second.place.as_deref(), Some("Second"));
}

#[test]
fn rank_outside_one_or_two_is_rejected() {
    let df = slalom_season();

    for n in [0, 3] {
        let err = best_n_in_discipline(&df, "Slalom", n).unwrap_err();
        assert!(matches!(err, TransformError::InvalidArgument { name: "n", .. }));
    }
}

#[test]
fn metric_strings() {
    let df = slalom_season();
    let best = best_n_in_discipline(&df, "Slalom", 1).unwrap();

    insta::assert_snapshot!(best.metric_label("Slalom", 1), @"Best Slalom: (Hasliberg)");
    insta::assert_snapshot!(best.metric_label("Slalom", 2), @"2nd. Best Slalom: (Hasliberg)");
    insta::assert_snapshot!(best.metric_value(), @"8.50 pts. (03.02.2024)");
    insta::assert_snapshot!(BestResult::none().metric_value(), @"No points");
}

#[test]
fn best_two_average_per_discipline() {
    let df = slalom_season();

    let averages = average_best_two_by_discipline(&df).unwrap();

    assert_eq!(averages.len(), 2);
    assert_eq!(averages[0].discipline, "Giant Slalom");
    assert_eq!(averages[0].points, 4.0);
    assert_eq!(averages[1].discipline, "Slalom");
    assert!((averages[1].points - 10.4).abs() < 1e-9);
}
