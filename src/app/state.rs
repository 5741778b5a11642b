//! Command bar state and view model computation.
//!
//! [`AppState`] is the single source of truth for the open palette: the query,
//! the pools gathered for it, the composed result list, selection, in-flight
//! plugin operations, and the search sequence tokens. The handler mutates it
//! in response to events; the renderer reads it through
//! [`AppState::compute_viewmodel`].
//!
//! # Pools
//!
//! - commands and installed plugins are local and re-filtered on every
//!   keystroke
//! - posts, pages, and directory plugins come from remote searches, are
//!   dropped when the query changes, and refilled as responses arrive for the
//!   current token
//!
//! # Example
//!
//! ```rust
//! use wp_palette::app::{AppState, BarState, PaletteSettings};
//! use wp_palette::domain::HostContext;
//! use wp_palette::ui::Theme;
//!
//! let mut state = AppState::new(PaletteSettings::default(), HostContext::default(), Theme::default());
//! state.open();
//! assert_eq!(state.bar, BarState::OpenEmpty);
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert!(!viewmodel.rows.is_empty());
//! ```

use super::actions::Action;
use super::modes::{BarState, DetailAction, View};
use super::selection::SelectionState;
use crate::domain::{builtin_commands, Command, HostContext, InstalledPlugin, Plugin};
use crate::provider::{ProviderRequest, SearchPool};
use crate::registry::{self, Badge, Effect, Icon, ItemView, OperationTracker, PluginOperation, RenderContext};
use crate::search::{self, CategoryOrder, Composition, Intent, NoMatch, Pools, QueryTracker, ResultEntry};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DisplayRow, EmptyState, FooterInfo, HeaderInfo, SearchBarInfo, StatusLine, UIViewModel,
};
use fuzzy_matcher::skim::SkimMatcherV2;
use std::collections::HashSet;

/// First terminal row of the result list (1-indexed).
pub const LIST_FIRST_ROW: usize = 7;

/// Rows used by header, search box, status line, border, and footer.
const CHROME_ROWS: usize = 9;

/// Rows taken by the sentinel message in the no-match state.
const NO_MATCH_MESSAGE_ROWS: usize = 3;

/// Tunables read from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteSettings {
    pub category_order: CategoryOrder,
    /// Maximum results requested per remote pool.
    pub result_limit: usize,
    /// Delay between the last keystroke and the remote search; 0 disables it.
    pub debounce_ms: u64,
}

impl Default for PaletteSettings {
    fn default() -> Self {
        Self {
            category_order: CategoryOrder::default(),
            result_limit: 10,
            debounce_ms: 250,
        }
    }
}

/// How selection reacts when the result list is recomposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SelectionPolicy {
    /// New query: start over at the first row.
    Reset,
    /// Same query, more data: keep the row, clamped.
    Clamp,
}

/// Central command bar state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub bar: BarState,
    pub view: View,
    pub query: String,

    /// Static commands in declared order.
    pub commands: Vec<Command>,
    /// Full installed plugin list, unfiltered.
    pub installed: Vec<InstalledPlugin>,
    /// Filtered candidates for the current query.
    pub pools: Pools,
    pub composition: Composition,

    pub selection: SelectionState,
    pub detail_selection: SelectionState,

    pub operations: OperationTracker,
    pub host: HostContext,
    pub settings: PaletteSettings,
    pub theme: Theme,

    /// Latest out-of-band error.
    pub status: Option<String>,

    queries: QueryTracker,
    pending_pools: HashSet<SearchPool>,
    pending_timers: usize,
    search_dirty: bool,
    installed_generation: u64,
}

impl AppState {
    #[must_use]
    pub fn new(settings: PaletteSettings, host: HostContext, theme: Theme) -> Self {
        let commands = builtin_commands();
        let composition = search::compose("", &commands, &Pools::default(), &settings.category_order);
        let selection = SelectionState::first(composition.len());

        Self {
            bar: BarState::Closed,
            view: View::Palette,
            query: String::new(),
            commands,
            installed: Vec::new(),
            pools: Pools::default(),
            composition,
            selection,
            detail_selection: SelectionState::default(),
            operations: OperationTracker::new(),
            host,
            settings,
            theme,
            status: None,
            queries: QueryTracker::default(),
            pending_pools: HashSet::new(),
            pending_timers: 0,
            search_dirty: false,
            installed_generation: 0,
        }
    }

    /// Opens the bar on the static command list.
    pub fn open(&mut self) {
        self.reset_query();
        self.view = View::Palette;
        self.status = None;
        self.bar = BarState::OpenEmpty;
    }

    /// Closes the bar and discards everything tied to the query.
    pub fn close(&mut self) {
        self.reset_query();
        self.view = View::Palette;
        self.bar = BarState::Closed;
    }

    fn reset_query(&mut self) {
        self.query.clear();
        self.pools = Pools::default();
        self.queries.invalidate();
        self.pending_pools.clear();
        self.search_dirty = false;
        self.recompose(SelectionPolicy::Reset);
    }

    #[must_use]
    pub fn render_context(&self) -> RenderContext<'_> {
        RenderContext::new(&self.host, &self.operations)
    }

    /// Whether remote searches for the current query are outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.search_dirty || !self.pending_pools.is_empty()
    }

    /// Remote pools the host context allows us to query for the current query.
    fn searchable_pools(&self) -> Vec<SearchPool> {
        SearchPool::ALL
            .into_iter()
            .filter(|pool| match pool {
                SearchPool::Posts | SearchPool::Pages => self.host.can("edit_posts"),
                SearchPool::Plugins => self.host.can("install_plugins"),
            })
            .filter(|pool| pool.accepts(&self.query))
            .collect()
    }

    /// Re-filters local pools and recomposes the list.
    fn recompose(&mut self, policy: SelectionPolicy) {
        self.pools.commands = search::filter_commands(&self.commands, &self.query);
        self.pools.installed = if self.host.can("activate_plugins") {
            search::filter_installed(&self.installed, &self.query)
        } else {
            Vec::new()
        };

        let was_no_match = matches!(self.composition, Composition::NoMatch(_));
        self.composition = search::compose(
            &self.query,
            &self.commands,
            &self.pools,
            &self.settings.category_order,
        );

        match (&self.composition, policy) {
            (Composition::NoMatch(_), SelectionPolicy::Clamp) if was_no_match => {
                self.selection.clamp(NoMatch::AFFORDANCES);
            }
            (Composition::NoMatch(_), _) => self.selection.clear(),
            (Composition::Results(entries), SelectionPolicy::Reset) => {
                self.selection = SelectionState::first(entries.len());
            }
            (Composition::Results(entries), SelectionPolicy::Clamp) => {
                if self.selection.selected().is_none() {
                    self.selection = SelectionState::first(entries.len());
                } else {
                    self.selection.clamp(entries.len());
                }
            }
        }

        if self.bar.is_open() {
            self.bar = if self.query.trim().is_empty() {
                BarState::OpenEmpty
            } else if matches!(self.composition, Composition::NoMatch(_)) {
                BarState::OpenNoMatch
            } else {
                BarState::OpenResults
            };
        }
    }

    /// Reacts to an edited query: drops remote results and schedules search.
    pub fn on_query_changed(&mut self) -> Vec<Action> {
        self.pools.clear_remote();
        self.queries.invalidate();
        self.pending_pools.clear();
        self.search_dirty = false;
        self.recompose(SelectionPolicy::Reset);

        if self.query.trim().is_empty() {
            return vec![];
        }

        if self.settings.debounce_ms == 0 {
            return self.dispatch_searches();
        }

        self.search_dirty = true;
        self.pending_timers += 1;
        vec![Action::ScheduleTimer {
            millis: self.settings.debounce_ms,
        }]
    }

    /// Handles a debounce timer; only the last outstanding one dispatches.
    pub fn on_timer(&mut self) -> Vec<Action> {
        self.pending_timers = self.pending_timers.saturating_sub(1);
        if self.pending_timers == 0 && self.search_dirty {
            self.dispatch_searches()
        } else {
            vec![]
        }
    }

    /// Issues a new token and one search request per allowed remote pool.
    pub fn dispatch_searches(&mut self) -> Vec<Action> {
        self.search_dirty = false;
        let pools = self.searchable_pools();
        if pools.is_empty() || self.query.trim().is_empty() {
            return vec![];
        }

        let token = self.queries.issue();
        tracing::debug!(token = %token, query = %self.query, pools = pools.len(), "dispatching searches");

        self.pending_pools = pools.iter().copied().collect();
        pools
            .into_iter()
            .map(|pool| {
                Action::Provider(ProviderRequest::Search {
                    token,
                    pool,
                    query: self.query.clone(),
                    limit: self.settings.result_limit,
                })
            })
            .collect()
    }

    /// Applies one pool's search response. Returns `false` for stale tokens.
    pub fn apply_search(
        &mut self,
        token: search::QueryToken,
        pool: SearchPool,
        outcome: Result<super::PoolResults, String>,
    ) -> bool {
        if !self.queries.is_current(token) {
            tracing::debug!(token = %token, pool = pool.name(), "discarding stale search response");
            return false;
        }
        self.pending_pools.remove(&pool);

        match outcome {
            Ok(super::PoolResults::Posts(posts)) => self.pools.posts = posts,
            Ok(super::PoolResults::Pages(pages)) => self.pools.pages = pages,
            Ok(super::PoolResults::Plugins(mut plugins)) => {
                annotate_installed(&mut plugins, &self.installed);
                self.pools.plugins = plugins;
            }
            Err(error) => {
                tracing::warn!(pool = pool.name(), error = %error, "search failed");
                match pool {
                    SearchPool::Posts => self.pools.posts.clear(),
                    SearchPool::Pages => self.pools.pages.clear(),
                    SearchPool::Plugins => self.pools.plugins.clear(),
                }
                self.status = Some(format!("{} search failed: {error}", pool.name()));
            }
        }

        self.recompose(SelectionPolicy::Clamp);
        true
    }

    /// Requests a fresh installed plugin list.
    pub fn refresh_installed(&mut self) -> Vec<Action> {
        if !self.host.can("activate_plugins") {
            return vec![];
        }
        self.installed_generation += 1;
        vec![Action::Provider(ProviderRequest::ListInstalled {
            generation: self.installed_generation,
        })]
    }

    /// Applies an installed plugin listing. Returns `false` if superseded.
    pub fn apply_installed(&mut self, generation: u64, outcome: Result<Vec<InstalledPlugin>, String>) -> bool {
        if generation != self.installed_generation {
            tracing::debug!(generation, latest = self.installed_generation, "discarding stale plugin list");
            return false;
        }

        match outcome {
            Ok(installed) => {
                self.installed = installed;
                annotate_installed(&mut self.pools.plugins, &self.installed);
                if let View::PluginDetail(current) = &mut self.view {
                    if let Some(fresh) = self.installed.iter().find(|p| p.slug == current.slug) {
                        *current = fresh.clone();
                    }
                }
            }
            Err(error) => {
                tracing::warn!(error = %error, "listing installed plugins failed");
                self.status = Some(format!("plugin list failed: {error}"));
            }
        }

        self.recompose(SelectionPolicy::Clamp);
        true
    }

    /// Records the outcome of an install/activate/deactivate.
    pub fn finish_operation(&mut self, slug: &str, operation: PluginOperation, error: Option<String>) -> Vec<Action> {
        match error {
            None => {
                tracing::debug!(slug = %slug, operation = operation.verb(), "plugin operation succeeded");
                self.operations.complete(slug);
                for plugin in self.pools.plugins.iter_mut().filter(|p| p.slug.as_deref() == Some(slug)) {
                    match operation {
                        PluginOperation::Install => plugin.installed = true,
                        PluginOperation::Activate => plugin.active = true,
                        PluginOperation::Deactivate => plugin.active = false,
                    }
                }
                self.record_installed(slug, operation);
                if let View::PluginDetail(current) = &mut self.view {
                    if current.slug.as_deref() == Some(slug) && operation != PluginOperation::Install {
                        current.active = operation == PluginOperation::Activate;
                    }
                }
                self.recompose(SelectionPolicy::Clamp);
                self.refresh_installed()
            }
            Some(error) => {
                tracing::warn!(slug = %slug, operation = operation.verb(), error = %error, "plugin operation failed");
                self.operations.fail(slug, operation);
                self.status = Some(format!("{} {slug} failed: {error}", operation.verb()));
                vec![]
            }
        }
    }

    /// Mirrors a successful operation into the installed list, so directory
    /// results arriving before the next refresh are annotated correctly.
    fn record_installed(&mut self, slug: &str, operation: PluginOperation) {
        let index = match self.installed.iter().position(|p| p.slug.as_deref() == Some(slug)) {
            Some(index) => index,
            None => {
                let title = self
                    .pools
                    .plugins
                    .iter()
                    .find(|p| p.slug.as_deref() == Some(slug))
                    .and_then(|p| p.name.clone());
                self.installed.push(InstalledPlugin {
                    slug: Some(slug.to_string()),
                    title,
                    active: false,
                });
                self.installed.len() - 1
            }
        };

        match operation {
            PluginOperation::Install => {}
            PluginOperation::Activate => self.installed[index].active = true,
            PluginOperation::Deactivate => self.installed[index].active = false,
        }
    }

    /// Computes the effect of activating row `index` of the palette.
    #[must_use]
    pub fn effect_at(&self, index: usize) -> Effect {
        let ctx = self.render_context();
        match &self.composition {
            Composition::Results(entries) => match entries.get(index) {
                Some(ResultEntry::Command(command)) => registry::command::activate(command, &ctx),
                Some(ResultEntry::Item(item)) => registry::activate(item, &ctx),
                None => Effect::None,
            },
            Composition::NoMatch(sentinel) => sentinel
                .intent(index)
                .map_or(Effect::None, |intent| self.consume_intent(&intent)),
        }
    }

    /// Turns a no-match intent into a navigation.
    #[must_use]
    pub fn consume_intent(&self, intent: &Intent) -> Effect {
        let url = match intent {
            Intent::SearchPosts(query) => self.host.search_posts_url(query.trim()),
            Intent::SearchPages(query) => self.host.search_pages_url(query.trim()),
        };
        Effect::Navigate { url }
    }

    /// Executes an effect against the state, returning runtime actions.
    pub fn execute_effect(&mut self, effect: Effect) -> Vec<Action> {
        tracing::debug!(effect = ?effect, "executing effect");

        let plugin_request = |state: &mut Self, operation: PluginOperation, slug: String| {
            if state.operations.begin(&slug, operation) {
                vec![Action::Provider(ProviderRequest::Plugin { operation, slug })]
            } else {
                vec![]
            }
        };

        match effect {
            Effect::Navigate { url } => {
                self.close();
                vec![Action::Provider(ProviderRequest::Open { url }), Action::CloseFocus]
            }
            Effect::InstallPlugin(slug) => plugin_request(self, PluginOperation::Install, slug),
            Effect::ActivatePlugin(slug) => plugin_request(self, PluginOperation::Activate, slug),
            Effect::DeactivatePlugin(slug) => plugin_request(self, PluginOperation::Deactivate, slug),
            Effect::OpenPluginDetail(plugin) => {
                self.view = View::PluginDetail(plugin);
                self.detail_selection = SelectionState::first(2);
                vec![]
            }
            Effect::RefreshPlugins => self.refresh_installed(),
            Effect::None => vec![],
        }
    }

    /// Effect of the chosen row in the plugin detail view.
    #[must_use]
    pub fn detail_effect(&self, plugin: &InstalledPlugin, action: DetailAction) -> Option<Effect> {
        let slug = plugin.slug.clone().filter(|s| !s.is_empty());
        match action {
            DetailAction::Activate => Some(slug.map_or(Effect::None, Effect::ActivatePlugin)),
            DetailAction::Deactivate => Some(slug.map_or(Effect::None, Effect::DeactivatePlugin)),
            DetailAction::Back => None,
        }
    }

    /// Maps a terminal line (1-indexed) to a result index.
    #[must_use]
    pub fn index_at_line(&self, line: usize, rows: usize) -> Option<usize> {
        let first_row = self.list_first_row();
        let len = self.list_len();
        let (start, end) = visible_window(len, self.anchor(), self.available_rows(rows));
        let index = start + line.checked_sub(first_row)?;
        (index < end).then_some(index)
    }

    /// Rows in the current view's list.
    #[must_use]
    pub fn list_len(&self) -> usize {
        match &self.view {
            View::PluginDetail(plugin) => DetailAction::for_plugin(plugin).len(),
            View::Palette => self.composition.len(),
        }
    }

    fn anchor(&self) -> usize {
        match self.view {
            View::PluginDetail(_) => self.detail_selection.selected().unwrap_or(0),
            View::Palette => self.selection.selected().unwrap_or(0),
        }
    }

    fn list_first_row(&self) -> usize {
        if matches!(self.composition, Composition::NoMatch(_)) && self.view == View::Palette {
            LIST_FIRST_ROW + NO_MATCH_MESSAGE_ROWS
        } else {
            LIST_FIRST_ROW
        }
    }

    fn available_rows(&self, rows: usize) -> usize {
        rows.saturating_sub(CHROME_ROWS + self.list_first_row() - LIST_FIRST_ROW)
    }

    /// Computes a renderable view model for a `rows` x `cols` pane.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, _cols: usize) -> UIViewModel {
        let status = self.status.clone().map(|message| StatusLine { message });

        if let View::PluginDetail(plugin) = &self.view {
            return self.compute_detail_viewmodel(plugin, status);
        }

        let (start, end) = visible_window(self.list_len(), self.anchor(), self.available_rows(rows));
        let active = self.selection.active();
        let ctx = self.render_context();

        let (rows_vm, empty_state) = match &self.composition {
            Composition::Results(entries) => {
                let matcher = (!self.query.trim().is_empty()).then(SkimMatcherV2::default);
                let rows_vm = entries[start..end]
                    .iter()
                    .enumerate()
                    .map(|(offset, entry)| {
                        let index = start + offset;
                        let view = match entry {
                            ResultEntry::Command(command) => registry::command::render(command),
                            ResultEntry::Item(item) => registry::render(item, &ctx),
                        };
                        let first_of_group = index == 0 || entries[index - 1].category() != entry.category();
                        let group = (first_of_group || offset == 0).then(|| entry.category().label().to_string());
                        let ranges = matcher
                            .as_ref()
                            .map_or_else(Vec::new, |m| highlight_ranges(m, &view.title, self.query.trim()));
                        display_row(view, group, active == Some(index), ranges)
                    })
                    .collect();
                (rows_vm, None)
            }
            Composition::NoMatch(sentinel) => {
                let rows_vm = sentinel
                    .affordances()
                    .iter()
                    .enumerate()
                    .map(|(index, intent)| {
                        let view = ItemView {
                            icon: Icon::Search,
                            title: intent.label(),
                            badge: None,
                            hint: "Open in browser".to_string(),
                        };
                        display_row(view, None, active == Some(index), vec![])
                    })
                    .collect();
                let empty = EmptyState {
                    message: "No command found".to_string(),
                    subtitle: if self.is_loading() {
                        "Still searching posts, pages and plugins...".to_string()
                    } else {
                        "Try a broader search:".to_string()
                    },
                };
                (rows_vm, Some(empty))
            }
        };

        UIViewModel {
            header: self.compute_header(),
            search_bar: Some(SearchBarInfo {
                query: self.query.clone(),
                loading: self.is_loading(),
            }),
            rows: rows_vm,
            empty_state,
            status,
            footer: self.compute_footer(),
        }
    }

    fn compute_detail_viewmodel(&self, plugin: &InstalledPlugin, status: Option<StatusLine>) -> UIViewModel {
        let ctx = self.render_context();
        let summary = registry::plugin::InstalledPluginRenderer::summary(plugin, &ctx);
        let active = self.detail_selection.active();

        let rows = DetailAction::for_plugin(plugin)
            .iter()
            .enumerate()
            .map(|(index, action)| {
                let view = ItemView {
                    icon: if *action == DetailAction::Back { Icon::Command } else { Icon::InstalledPlugin },
                    title: action.label().to_string(),
                    badge: None,
                    hint: String::new(),
                };
                display_row(view, None, active == Some(index), vec![])
            })
            .collect();

        UIViewModel {
            header: HeaderInfo {
                title: format!(" {summary} "),
            },
            search_bar: None,
            rows,
            empty_state: None,
            status,
            footer: FooterInfo {
                keybindings: "Up/Down: navigate  Enter: run  Esc: back".to_string(),
            },
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let title = match self.bar {
            BarState::OpenEmpty | BarState::Closed => " Command Palette ".to_string(),
            BarState::OpenResults => format!(" Command Palette ({}) ", self.composition.len()),
            BarState::OpenNoMatch => " Command Palette (no matches) ".to_string(),
        };
        HeaderInfo { title }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.bar {
            BarState::OpenNoMatch => "Up/Down: choose search  Enter: open  Esc: close",
            _ => "Up/Down or Ctrl+n/p: navigate  Enter: run  Ctrl+u: clear  Esc: close",
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

/// Sets installed/active flags on directory results from the installed list.
fn annotate_installed(plugins: &mut [Plugin], installed: &[InstalledPlugin]) {
    for plugin in plugins {
        let found = installed
            .iter()
            .find(|i| i.slug.is_some() && i.slug == plugin.slug);
        plugin.installed = found.is_some();
        plugin.active = found.is_some_and(|i| i.active);
    }
}

fn display_row(view: ItemView, group: Option<String>, is_active: bool, highlight_ranges: Vec<(usize, usize)>) -> DisplayRow {
    DisplayRow {
        group,
        icon: view.icon,
        badge_is_error: view.badge.as_ref().is_some_and(Badge::is_error),
        badge: view.badge.map(|b| b.to_string()),
        title: view.title,
        hint: view.hint,
        is_active,
        highlight_ranges,
    }
}

/// Window of `available` rows kept around `anchor`, as `(start, end)`.
fn visible_window(len: usize, anchor: usize, available: usize) -> (usize, usize) {
    if available == 0 || len == 0 {
        return (0, 0);
    }
    let mut start = anchor.saturating_sub(available / 2);
    let end = (start + available).min(len);
    if end - start < available && len >= available {
        start = end - available;
    }
    (start, end)
}

/// Coalesces fuzzy match indices into contiguous `(start, end)` ranges.
///
/// Each whitespace-separated query token is matched on its own, the way the
/// local filters score candidates, and the matched characters are merged.
fn highlight_ranges(matcher: &SkimMatcherV2, text: &str, query: &str) -> Vec<(usize, usize)> {
    use fuzzy_matcher::FuzzyMatcher;

    let mut indices: Vec<usize> = query
        .split_whitespace()
        .filter_map(|token| matcher.fuzzy_indices(text, &token.to_lowercase()))
        .flat_map(|(_score, indices)| indices)
        .collect();
    indices.sort_unstable();
    indices.dedup();

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for idx in indices {
        match ranges.last_mut() {
            Some((_, end)) if *end == idx => *end = idx + 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_follows_anchor() {
        assert_eq!(visible_window(100, 0, 10), (0, 10));
        assert_eq!(visible_window(100, 50, 10), (45, 55));
        assert_eq!(visible_window(100, 99, 10), (90, 100));
        assert_eq!(visible_window(3, 2, 10), (0, 3));
        assert_eq!(visible_window(3, 2, 0), (0, 0));
    }

    #[test]
    fn contiguous_matches_are_merged() {
        let matcher = SkimMatcherV2::default();
        assert_eq!(highlight_ranges(&matcher, "plugins", "plu"), vec![(0, 3)]);
        assert!(highlight_ranges(&matcher, "plugins", "zz").is_empty());
    }

    #[test]
    fn each_query_word_is_highlighted() {
        let matcher = SkimMatcherV2::default();
        assert_eq!(highlight_ranges(&matcher, "Add New Page", "new page"), vec![(4, 7), (8, 12)]);
        assert_eq!(highlight_ranges(&matcher, "Add New Page", "page  zz"), vec![(8, 12)]);
    }

    #[test]
    fn annotation_marks_installed_and_active() {
        let mut plugins = vec![
            Plugin { slug: Some("a".into()), ..Plugin::default() },
            Plugin { slug: Some("b".into()), ..Plugin::default() },
            Plugin { slug: None, ..Plugin::default() },
        ];
        let installed = vec![
            InstalledPlugin { slug: Some("a".into()), title: None, active: true },
            InstalledPlugin { slug: None, title: Some("broken".into()), active: true },
        ];
        annotate_installed(&mut plugins, &installed);
        assert!(plugins[0].installed && plugins[0].active);
        assert!(!plugins[1].installed);
        assert!(!plugins[2].installed);
    }
}
