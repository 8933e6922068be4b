//! CLI library components for the race result dashboards.

pub mod load;
pub mod logging;
pub mod report;
pub mod summary;
