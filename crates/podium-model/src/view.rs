//! Competition views and their display layouts.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::columns::{
    BIB, CATEGORY, COMPETITOR_NAME, PLACE, POSITION, RACE_DATE, SECTOR_ALPINE,
    SECTOR_CROSS_COUNTRY, STATUS, WEB_COMMENT, display,
};

/// Alpine disciplines shown in the lower cup view.
pub const LOWER_CUP_DISCIPLINES: [&str; 5] = [
    "Downhill",
    "Slalom",
    "Super G",
    "Giant Slalom",
    "Alpine Combined",
];

/// Race nation used by the "only Swiss races" filter.
pub const HOME_NATION: &str = "SUI";

/// The dashboard page a result table is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum View {
    /// Top-level cross-country races scored with rank points.
    CrossCountry,
    /// Secondary alpine competitions scored with FIS penalty points.
    LowerCup,
}

impl View {
    /// Whether the category code column is part of the display table.
    pub fn includes_category(self) -> bool {
        matches!(self, View::LowerCup)
    }

    /// Sector code of the races a view covers.
    pub fn sector(self) -> &'static str {
        match self {
            View::CrossCountry => SECTOR_CROSS_COUNTRY,
            View::LowerCup => SECTOR_ALPINE,
        }
    }

    /// Display column order, with the athlete column only in compare mode.
    pub fn display_columns(self, compare_mode: bool) -> Vec<&'static str> {
        let mut columns = vec![display::RACE_ID, RACE_DATE, PLACE, display::COUNTRY];
        if self.includes_category() {
            columns.push(CATEGORY);
        }
        columns.push(display::DISCIPLINE);
        if compare_mode {
            columns.push(COMPETITOR_NAME);
        }
        columns.extend([WEB_COMMENT, BIB, POSITION]);
        match self {
            View::CrossCountry => columns.extend([
                STATUS,
                display::RACE_TIME,
                display::RANK_POINTS,
                display::FIS_POINTS,
            ]),
            View::LowerCup => {
                columns.extend([display::FIS_POINTS, STATUS, display::RACE_TIME]);
            }
        }
        columns
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::CrossCountry => f.write_str("Cross Country"),
            View::LowerCup => f.write_str("Lower Cup"),
        }
    }
}

/// A season code such as `2024`.
///
/// Season codes are assumed to be sequential integers, so the season before
/// `N` is always `N - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Season(pub i64);

impl Season {
    pub fn code(self) -> i64 {
        self.0
    }

    pub fn previous(self) -> Season {
        Season(self.0.saturating_sub(1))
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Season {
    fn from(code: i64) -> Self {
        Season(code)
    }
}
