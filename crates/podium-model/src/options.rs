//! Options controlling how a result table is projected for display.

use serde::{Deserialize, Serialize};

use crate::view::View;

/// Flags passed to the projection step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewOptions {
    /// Keep the athlete name column because several athletes are in scope.
    pub compare_mode: bool,
    /// Keep the category code column (lower cup tables only).
    pub include_category: bool,
}

impl ViewOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options matching the layout of the given view.
    pub fn for_view(view: View, compare_mode: bool) -> Self {
        Self {
            compare_mode,
            include_category: view.includes_category(),
        }
    }

    pub fn with_compare_mode(mut self, enable: bool) -> Self {
        self.compare_mode = enable;
        self
    }

    pub fn with_category(mut self, enable: bool) -> Self {
        self.include_category = enable;
        self
    }
}
