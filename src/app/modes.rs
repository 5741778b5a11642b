//! Bar and view state types.
//!
//! # State Machine
//!
//! - open → `OpenEmpty`
//! - non-empty query → `OpenResults` or `OpenNoMatch`, by result count
//! - query cleared → `OpenEmpty`
//! - Escape, close, or a navigation effect → `Closed`

use crate::domain::InstalledPlugin;

/// Lifecycle state of the command bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarState {
    Closed,
    /// No query; the static command list is shown.
    OpenEmpty,
    /// Query active with at least one result.
    OpenResults,
    /// Query active, nothing matched; the sentinel is shown.
    OpenNoMatch,
}

impl BarState {
    #[must_use]
    pub const fn is_open(self) -> bool {
        !matches!(self, Self::Closed)
    }
}

/// Which screen the open bar is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Palette,
    /// Actions for one installed plugin, opened from the result list.
    PluginDetail(InstalledPlugin),
}

/// Rows of the plugin detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailAction {
    Activate,
    Deactivate,
    Back,
}

impl DetailAction {
    /// Rows offered for `plugin`, in display order.
    #[must_use]
    pub fn for_plugin(plugin: &InstalledPlugin) -> [Self; 2] {
        if plugin.active {
            [Self::Deactivate, Self::Back]
        } else {
            [Self::Activate, Self::Back]
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Activate => "Activate",
            Self::Deactivate => "Deactivate",
            Self::Back => "Back to results",
        }
    }
}
