//! Column names of the race result schema.
//!
//! Raw names are the ones delivered by the results export. Display names are
//! the labels produced by the projection step.

// Athlete identity
pub const COMPETITOR_ID: &str = "Competitorid";
pub const COMPETITOR_NAME: &str = "Competitorname";
pub const COMPETITOR_NATION: &str = "Competitor_Nationcode";
pub const FIS_CODE: &str = "Fiscode";
pub const TEAM_ID: &str = "Teamid";
pub const IS_TEAM_RESULT: &str = "IsTeamResult";

// Race identity
pub const RACE_ID: &str = "Raceid";
pub const RACE_DATE: &str = "Racedate";
pub const PLACE: &str = "Place";
pub const RACE_NATION: &str = "Nationcode";
pub const SEASON: &str = "Seasoncode";
pub const CALENDAR_STATUS: &str = "Calstatuscode";

// Classification
pub const SECTOR: &str = "Sectorcode";
pub const CATEGORY: &str = "Catcode";
pub const CATEGORY_NAME: &str = "Catname";
pub const DISCIPLINE_CODE: &str = "Disciplinecode";
pub const DISCIPLINE_NAME: &str = "Disciplinename";
pub const DESCRIPTION: &str = "Description";
pub const GENDER: &str = "Gender";
pub const LEVEL: &str = "Level";

// Outcome
pub const POSITION: &str = "Position";
pub const STATUS: &str = "Status";
pub const PENALTY_POINTS: &str = "Racepoints";
pub const DETAILS: &str = "Details";
pub const WEB_COMMENT: &str = "Webcomment";
pub const BIB: &str = "Bib";

/// Derived rank points column, filled from [`POSITION`].
pub const RANK_POINTS: &str = "WC_Points";

/// Display labels assigned by the projection step.
pub mod display {
    pub const RACE_ID: &str = "RaceID";
    pub const RANK_POINTS: &str = "WC Points";
    pub const FIS_POINTS: &str = "FIS Points";
    pub const RACE_TIME: &str = "Racetime";
    pub const DISCIPLINE: &str = "Discipline";
    pub const COUNTRY: &str = "Country";
}

/// Bookkeeping columns removed from every display table.
pub const BOOKKEEPING_COLUMNS: [&str; 13] = [
    SEASON,
    DESCRIPTION,
    GENDER,
    CALENDAR_STATUS,
    SECTOR,
    COMPETITOR_ID,
    COMPETITOR_NATION,
    FIS_CODE,
    LEVEL,
    TEAM_ID,
    DISCIPLINE_NAME,
    CATEGORY_NAME,
    IS_TEAM_RESULT,
];

/// Raw to display renames. Absent source columns are skipped.
pub const DISPLAY_RENAMES: [(&str, &str); 6] = [
    (RACE_ID, display::RACE_ID),
    (RANK_POINTS, display::RANK_POINTS),
    (PENALTY_POINTS, display::FIS_POINTS),
    (DETAILS, display::RACE_TIME),
    (DISCIPLINE_CODE, display::DISCIPLINE),
    (RACE_NATION, display::COUNTRY),
];

/// Columns a results export must carry for the pipeline to run.
pub const REQUIRED_COLUMNS: [&str; 24] = [
    COMPETITOR_ID,
    COMPETITOR_NAME,
    COMPETITOR_NATION,
    FIS_CODE,
    TEAM_ID,
    IS_TEAM_RESULT,
    RACE_ID,
    RACE_DATE,
    PLACE,
    RACE_NATION,
    SEASON,
    CALENDAR_STATUS,
    SECTOR,
    CATEGORY,
    CATEGORY_NAME,
    DISCIPLINE_CODE,
    DISCIPLINE_NAME,
    DESCRIPTION,
    GENDER,
    LEVEL,
    POSITION,
    STATUS,
    PENALTY_POINTS,
    DETAILS,
];

/// Status code for qualification-only entries.
pub const STATUS_QUALIFIED: &str = "QLF";
/// Status code fragment for did-not-finish.
pub const STATUS_DNF: &str = "DNF";
/// Status code fragment for disqualified.
pub const STATUS_DSQ: &str = "DSQ";
/// Status code for did-not-start.
pub const STATUS_DNS: &str = "DNS";
/// Category code of training entries.
pub const CATEGORY_TRAINING: &str = "TRA";

/// Sector code of cross-country races.
pub const SECTOR_CROSS_COUNTRY: &str = "CC";
/// Sector code of alpine races.
pub const SECTOR_ALPINE: &str = "AL";
/// Category code of World Cup races, which the lower cup leaves out.
pub const CATEGORY_WORLD_CUP: &str = "WC";
