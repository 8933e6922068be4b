//! Data model for ski race results.
//!
//! - **columns**: raw and display column names of the result schema
//! - **view**: competition views, display column orders and season codes
//! - **options**: projection flags

pub mod columns;
pub mod options;
pub mod view;

pub use options::ViewOptions;
pub use view::{HOME_NATION, LOWER_CUP_DISCIPLINES, Season, View};
