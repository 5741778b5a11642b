//! Effects produced in action mode.
//!
//! Renderers never execute anything themselves; they describe the side
//! effect and the controller turns it into runtime actions.

use crate::domain::InstalledPlugin;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Open an admin URL, then close the bar.
    Navigate { url: String },
    InstallPlugin(String),
    ActivatePlugin(String),
    DeactivatePlugin(String),
    /// Hand the plugin to the detail view instead of acting on it.
    OpenPluginDetail(InstalledPlugin),
    RefreshPlugins,
    /// Nothing to do (already active, operation running, malformed item).
    None,
}

impl Effect {
    /// Whether executing the effect should close the bar.
    #[must_use]
    pub const fn closes_bar(&self) -> bool {
        matches!(self, Self::Navigate { .. })
    }
}
