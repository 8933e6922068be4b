//! Tests for cell highlighting.

use polars::prelude::{DataFrame, IntoColumn, NamedFrom, Series};

use podium_transform::{
    CellStyle, Rgb, fis_points_range, highlight_fis_points, highlight_position, highlight_status,
};

#[test]
fn positions_fall_into_bands() {
    assert_eq!(highlight_position(None), CellStyle::Transparent);
    assert_eq!(highlight_position(Some(0)), CellStyle::Transparent);
    assert_eq!(highlight_position(Some(1)), CellStyle::Podium);
    assert_eq!(highlight_position(Some(3)), CellStyle::Podium);
    assert_eq!(highlight_position(Some(4)), CellStyle::TopTen);
    assert_eq!(highlight_position(Some(10)), CellStyle::TopTen);
    assert_eq!(highlight_position(Some(11)), CellStyle::TopThirty);
    assert_eq!(highlight_position(Some(30)), CellStyle::TopThirty);
    assert_eq!(highlight_position(Some(31)), CellStyle::Unstyled);
}

#[test]
fn status_highlights_did_not_finish() {
    assert_eq!(highlight_status(None), CellStyle::Transparent);
    assert_eq!(highlight_status(Some("DNF2")), CellStyle::DidNotFinish);
    assert_eq!(highlight_status(Some("DSQ")), CellStyle::Unstyled);
}

#[test]
fn fis_points_gradient_spans_min_to_headroom() {
    assert_eq!(highlight_fis_points(None, 10.0, 100.0), CellStyle::Transparent);
    assert_eq!(highlight_fis_points(Some(0.0), 10.0, 100.0), CellStyle::Transparent);
    assert_eq!(
        highlight_fis_points(Some(10.0), 10.0, 100.0),
        CellStyle::Gradient(Rgb::new(0, 102, 255))
    );
    assert_eq!(
        highlight_fis_points(Some(60.0), 10.0, 100.0),
        CellStyle::Gradient(Rgb::new(128, 178, 255))
    );
    assert_eq!(
        highlight_fis_points(Some(110.0), 10.0, 100.0),
        CellStyle::Gradient(Rgb::new(255, 255, 255))
    );
}

#[test]
fn fis_points_gradient_clamps() {
    assert_eq!(
        highlight_fis_points(Some(5.0), 10.0, 100.0),
        CellStyle::Gradient(Rgb::new(0, 102, 255))
    );
    assert_eq!(
        highlight_fis_points(Some(500.0), 10.0, 100.0),
        CellStyle::Gradient(Rgb::new(255, 255, 255))
    );
    // Degenerate range maps to the low end.
    assert_eq!(
        highlight_fis_points(Some(-5.0), 0.0, -10.0),
        CellStyle::Gradient(Rgb::new(0, 102, 255))
    );
}

#[test]
fn css_rendering() {
    insta::assert_snapshot!(CellStyle::Transparent.css(), @"background-color: rgba(0, 0, 0, 0)");
    insta::assert_snapshot!(CellStyle::Podium.css(), @"background-color: rgba(0, 102, 255, 0.8)");
    insta::assert_snapshot!(CellStyle::TopTen.css(), @"background-color: rgba(102, 163, 255, 0.8)");
    insta::assert_snapshot!(CellStyle::TopThirty.css(), @"background-color: rgba(204, 224, 255, 0.8)");
    insta::assert_snapshot!(
        CellStyle::DidNotFinish.css(),
        @"background-color: rgb(255, 153, 153); color: black"
    );
    assert_eq!(CellStyle::Unstyled.css(), "");
}

#[test]
fn fis_points_range_ignores_zero_minimum() {
    let df = DataFrame::new(vec![
        Series::new(
            "FIS Points".into(),
            vec![Some(0.0f64), Some(14.2), None, Some(48.0)],
        )
        .into_column(),
    ])
    .unwrap();

    assert_eq!(fis_points_range(&df).unwrap(), Some((14.2, 48.0)));
}

#[test]
fn fis_points_range_without_points() {
    let df = DataFrame::new(vec![
        Series::new("FIS Points".into(), vec![Some(0.0f64), None]).into_column(),
    ])
    .unwrap();

    assert_eq!(fis_points_range(&df).unwrap(), None);
}
