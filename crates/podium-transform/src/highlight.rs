//! Cell highlighting for result tables.
//!
//! Pure mappings from a cell value to a [`CellStyle`]. Renderers turn the
//! style into CSS ([`CellStyle::css`]) or a terminal color
//! ([`CellStyle::background`]).

use polars::prelude::DataFrame;
use serde::Serialize;

use podium_model::columns::{STATUS_DNF, display};

use crate::data_utils::float_values;
use crate::error::Result;

const PODIUM: Rgb = Rgb::new(0, 102, 255);
const TOP_TEN: Rgb = Rgb::new(102, 163, 255);
const TOP_THIRTY: Rgb = Rgb::new(204, 224, 255);
const DID_NOT_FINISH: Rgb = Rgb::new(255, 153, 153);

/// Gradient endpoints for FIS points, best to worst.
const GRADIENT_LOW: Rgb = Rgb::new(0, 102, 255);
const GRADIENT_HIGH: Rgb = Rgb::new(255, 255, 255);
/// Number of discrete gradient steps.
const GRADIENT_STEPS: usize = 256;
/// Headroom added above the column maximum before normalizing.
const GRADIENT_HEADROOM: f64 = 0.1;

/// An opaque color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Styling tag attached to a table cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CellStyle {
    /// Absent or zero value: explicitly transparent.
    Transparent,
    /// A value outside every band.
    Unstyled,
    /// Positions 1 to 3.
    Podium,
    /// Positions 4 to 10.
    TopTen,
    /// Positions 11 to 30.
    TopThirty,
    /// Status containing DNF.
    DidNotFinish,
    /// FIS points on the blue to white gradient.
    Gradient(Rgb),
}

impl CellStyle {
    /// Background color, if the style paints one.
    pub fn background(self) -> Option<Rgb> {
        match self {
            CellStyle::Transparent | CellStyle::Unstyled => None,
            CellStyle::Podium => Some(PODIUM),
            CellStyle::TopTen => Some(TOP_TEN),
            CellStyle::TopThirty => Some(TOP_THIRTY),
            CellStyle::DidNotFinish => Some(DID_NOT_FINISH),
            CellStyle::Gradient(color) => Some(color),
        }
    }

    /// CSS declaration for web renderers.
    pub fn css(self) -> String {
        match self {
            CellStyle::Transparent => "background-color: rgba(0, 0, 0, 0)".to_string(),
            CellStyle::Unstyled => String::new(),
            CellStyle::DidNotFinish => {
                let Rgb { r, g, b } = DID_NOT_FINISH;
                format!("background-color: rgb({r}, {g}, {b}); color: black")
            }
            style => {
                let Rgb { r, g, b } = style.background().unwrap_or(GRADIENT_HIGH);
                format!("background-color: rgba({r}, {g}, {b}, 0.8)")
            }
        }
    }
}

/// Style a finishing position by tier.
pub fn highlight_position(position: Option<i64>) -> CellStyle {
    match position {
        None | Some(0) => CellStyle::Transparent,
        Some(value) if value <= 3 => CellStyle::Podium,
        Some(4..=10) => CellStyle::TopTen,
        Some(11..=30) => CellStyle::TopThirty,
        Some(_) => CellStyle::Unstyled,
    }
}

/// Style a status code. Only did-not-finish codes are painted.
pub fn highlight_status(status: Option<&str>) -> CellStyle {
    match status {
        None => CellStyle::Transparent,
        Some(value) if value.contains(STATUS_DNF) => CellStyle::DidNotFinish,
        Some(_) => CellStyle::Unstyled,
    }
}

/// Style FIS points on a gradient between the column minimum and 110% of
/// the column maximum.
///
/// The normalized value is clamped to `[0, 1]` and quantized to 256 steps.
pub fn highlight_fis_points(points: Option<f64>, min: f64, max: f64) -> CellStyle {
    let Some(value) = points.filter(|v| !v.is_nan() && *v != 0.0) else {
        return CellStyle::Transparent;
    };
    let upper = max + max * GRADIENT_HEADROOM;
    let norm = if upper > min {
        ((value - min) / (upper - min)).clamp(0.0, 1.0)
    } else {
        0.0
    };
    CellStyle::Gradient(gradient_color(norm))
}

fn gradient_color(norm: f64) -> Rgb {
    let step = ((norm * GRADIENT_STEPS as f64) as usize).min(GRADIENT_STEPS - 1);
    let fraction = step as f64 / (GRADIENT_STEPS - 1) as f64;
    let channel = |low: u8, high: u8| {
        let low = f64::from(low) / 255.0;
        let high = f64::from(high) / 255.0;
        ((low + (high - low) * fraction) * 255.0) as u8
    };
    Rgb::new(
        channel(GRADIENT_LOW.r, GRADIENT_HIGH.r),
        channel(GRADIENT_LOW.g, GRADIENT_HIGH.g),
        channel(GRADIENT_LOW.b, GRADIENT_HIGH.b),
    )
}

/// Range used by [`highlight_fis_points`] for a projected table.
///
/// The minimum ignores zero points. Returns `None` when the `FIS Points`
/// column has no non-zero value.
pub fn fis_points_range(df: &DataFrame) -> Result<Option<(f64, f64)>> {
    let values: Vec<f64> = float_values(df, display::FIS_POINTS)?
        .into_iter()
        .flatten()
        .filter(|value| !value.is_nan())
        .collect();
    let min = values
        .iter()
        .copied()
        .filter(|value| *value != 0.0)
        .reduce(f64::min);
    let max = values.iter().copied().reduce(f64::max);
    Ok(min.zip(max))
}
