//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They hold display-ready data only: the renderer never looks
//! at entities, pools, or selection state directly.

use crate::registry::Icon;

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    pub header: HeaderInfo,

    /// Query input; absent in the plugin detail view.
    pub search_bar: Option<SearchBarInfo>,

    /// Visible window of rows, top to bottom.
    pub rows: Vec<DisplayRow>,

    /// Sentinel message shown above the affordance rows when nothing matched.
    pub empty_state: Option<EmptyState>,

    /// Out-of-band status, e.g. a failed search or plugin operation.
    pub status: Option<StatusLine>,

    pub footer: FooterInfo,
}

/// One line of the result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    /// Category label, set only on the first row of each group.
    pub group: Option<String>,
    pub icon: Icon,
    pub title: String,
    pub badge: Option<String>,
    /// Badge reflects a failure (rendered in the error colour).
    pub badge_is_error: bool,
    pub hint: String,
    /// Row Enter would act on (hovered, else selected).
    pub is_active: bool,
    /// Character ranges of `title` matched by the query, end exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
}

#[derive(Debug, Clone)]
pub struct FooterInfo {
    pub keybindings: String,
}

#[derive(Debug, Clone)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    pub query: String,
    /// Remote searches for the current query are still running.
    pub loading: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub message: String,
}
