//! Tests for row filters, scoping and option lists.

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use podium_model::{Season, View};
use podium_transform::selection::{
    athlete_nation, athlete_options, category_options, discipline_options, season_options,
};
use podium_transform::{
    ResultFilter, drop_did_not_start, restrict_to_cross_country, restrict_to_lower_cup,
    scope_to_view, sort_by_race_date,
};

fn text(name: &str, values: Vec<&str>) -> Column {
    Series::new(name.into(), values).into_column()
}

fn results() -> DataFrame {
    DataFrame::new(vec![
        text("Competitorname", vec!["Meier Lea", "Keller Nico", "Meier Lea", "Rossi Gina", "Keller Nico"]),
        text("Competitor_Nationcode", vec!["SUI", "SUI", "SUI", "ITA", "SUI"]),
        text("Gender", vec!["W", "M", "W", "W", "M"]),
        text("Sectorcode", vec!["AL", "AL", "AL", "AL", "AL"]),
        Series::new("Seasoncode".into(), vec![2024i64, 2024, 2023, 2024, 2023]).into_column(),
        text("Description", vec!["Slalom", "Downhill", "Slalom", "Parallel", "Super G"]),
        text("Catcode", vec!["FIS", "EC", "FIS", "FIS", "NJR"]),
        text("Nationcode", vec!["SUI", "AUT", "SUI", "SUI", "FRA"]),
        Series::new("Position".into(), vec![0i64, 5, 2, 1, 14]).into_column(),
        text("Status", vec!["DNF", "", "", "", "DNS"]),
        text("Racepoints", vec!["", "45.12", "18.5", "9.01", "n/a"]),
        text("Racedate", vec!["2024-02-10", "2023-12-01", "2023-01-05", "2024-01-15", "2023-03-01"]),
    ])
    .unwrap()
}

fn names(df: &DataFrame) -> Vec<Option<String>> {
    df.column("Competitorname")
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .map(|value| value.map(str::to_string))
        .collect()
}

#[test]
fn unrestricted_filter_keeps_everything() {
    let df = results();
    assert_eq!(ResultFilter::new().apply(&df).unwrap().height(), 5);
}

#[test]
fn filter_combines_dimensions() {
    let df = results();
    let filter = ResultFilter::new()
        .with_season(Season(2024))
        .with_athletes(vec!["Meier Lea".to_string(), "Keller Nico".to_string()])
        .with_disciplines(vec!["Slalom".to_string(), "Downhill".to_string()]);

    let filtered = filter.apply(&df).unwrap();

    assert_eq!(
        names(&filtered),
        vec![Some("Meier Lea".to_string()), Some("Keller Nico".to_string())]
    );

    let all_seasons = filter.all_seasons().apply(&df).unwrap();
    assert_eq!(all_seasons.height(), 3);
}

#[test]
fn empty_selection_keeps_no_rows() {
    let df = results();
    let filtered = ResultFilter::new().with_categories(Vec::new()).apply(&df).unwrap();
    assert_eq!(filtered.height(), 0);
}

#[test]
fn race_nation_filter_keeps_home_races() {
    let df = results();
    let filtered = ResultFilter::new().with_race_nation("SUI").apply(&df).unwrap();
    assert_eq!(filtered.height(), 3);
}

#[test]
fn gender_and_athlete_nation_narrow_rows() {
    let df = results();

    let women = ResultFilter::new()
        .with_genders(vec!["W".to_string()])
        .apply(&df)
        .unwrap();
    assert_eq!(women.height(), 3);

    let swiss_women = ResultFilter::new()
        .with_genders(vec!["W".to_string()])
        .with_athlete_nations(vec!["SUI".to_string()])
        .apply(&df)
        .unwrap();
    assert_eq!(
        names(&swiss_women),
        vec![Some("Meier Lea".to_string()), Some("Meier Lea".to_string())]
    );
}

fn mixed_sectors() -> DataFrame {
    DataFrame::new(vec![
        text("Sectorcode", vec!["AL", "AL", "CC", "CC"]),
        text("Catcode", vec!["FIS", "WC", "WC", "WC"]),
        text("Description", vec!["Slalom", "Slalom", "10 km C", "10 km C"]),
        text("Status", vec!["", "", "", "DNS"]),
        text("Racepoints", vec!["12.0", "3.5", "0.0", "0.0"]),
    ])
    .unwrap()
}

fn descriptions_and_categories(df: &DataFrame) -> Vec<(String, String)> {
    let descriptions = df.column("Description").unwrap().str().unwrap();
    let categories = df.column("Catcode").unwrap().str().unwrap();
    descriptions
        .into_iter()
        .zip(categories)
        .map(|(d, c)| (d.unwrap().to_string(), c.unwrap().to_string()))
        .collect()
}

#[test]
fn lower_cup_scope_keeps_alpine_rows_outside_world_cup() {
    let scoped = restrict_to_lower_cup(&mixed_sectors()).unwrap();

    assert_eq!(
        descriptions_and_categories(&scoped),
        vec![("Slalom".to_string(), "FIS".to_string())]
    );
}

#[test]
fn cross_country_scope_keeps_started_cross_country_rows() {
    let scoped = restrict_to_cross_country(&mixed_sectors()).unwrap();

    assert_eq!(
        descriptions_and_categories(&scoped),
        vec![("10 km C".to_string(), "WC".to_string())]
    );
}

#[test]
fn scope_to_view_follows_the_view() {
    let df = mixed_sectors();
    assert_eq!(scope_to_view(&df, View::CrossCountry).unwrap().height(), 1);
    let lower_cup = scope_to_view(&df, View::LowerCup).unwrap();
    assert_eq!(
        lower_cup.column("Racepoints").unwrap().f64().unwrap().get(0),
        Some(12.0)
    );
}

#[test]
fn sort_by_race_date_is_chronological() {
    let df = results();

    let sorted = sort_by_race_date(&df).unwrap();

    let dates: Vec<Option<&str>> = sorted
        .column("Racedate")
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .collect();
    assert_eq!(
        dates,
        vec![
            Some("2023-01-05"),
            Some("2023-03-01"),
            Some("2023-12-01"),
            Some("2024-01-15"),
            Some("2024-02-10"),
        ]
    );
}

#[test]
fn lower_cup_scope_drops_other_disciplines_and_dns() {
    let df = results();

    let scoped = restrict_to_lower_cup(&df).unwrap();

    assert_eq!(scoped.height(), 3);
    let points = scoped.column("Racepoints").unwrap().f64().unwrap();
    assert_eq!(points.get(0), None);
    assert_eq!(points.get(1), Some(45.12));
    assert_eq!(points.get(2), Some(18.5));
}

#[test]
fn did_not_start_rows_are_dropped() {
    let df = results();
    assert_eq!(drop_did_not_start(&df).unwrap().height(), 4);
}

#[test]
fn season_options_are_descending() {
    let df = results();
    assert_eq!(season_options(&df).unwrap(), vec![Season(2024), Season(2023)]);
}

#[test]
fn athlete_options_rank_best_finishers_first() {
    let df = results();
    assert_eq!(
        athlete_options(&df).unwrap(),
        vec!["Rossi Gina", "Meier Lea", "Keller Nico"]
    );
}

#[test]
fn discipline_and_category_options_keep_table_order() {
    let df = results();
    assert_eq!(
        discipline_options(&df).unwrap(),
        vec!["Slalom", "Downhill", "Parallel", "Super G"]
    );
    assert_eq!(category_options(&df).unwrap(), vec!["FIS", "EC", "NJR"]);
    assert_eq!(athlete_nation(&df).unwrap().as_deref(), Some("SUI"));
}
