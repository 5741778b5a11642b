//! Event handling and state transition logic.
//!
//! This module implements the command bar controller: it takes user input and
//! collaborator results, mutates [`AppState`], and returns the actions the
//! plugin runtime must perform.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime (keys, pointer, timers, command results)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Lifecycle**: `Open`, `Hidden`, `Escape`
//! - **Navigation**: `KeyDown`, `KeyUp`, `Hover`, `PointerLeave`, `Click`, `Enter`
//! - **Input**: `Char`, `Backspace`, `ClearQuery`
//! - **Collaborators**: `TimerElapsed`, `SearchCompleted`, `InstalledListed`,
//!   `PluginOperationFinished`
//!
//! # Example
//!
//! ```rust
//! use wp_palette::app::{handle_event, AppState, Event, PaletteSettings};
//! use wp_palette::domain::HostContext;
//! use wp_palette::ui::Theme;
//!
//! let mut state = AppState::new(PaletteSettings::default(), HostContext::default(), Theme::default());
//! let (should_render, _actions) = handle_event(&mut state, &Event::Open)?;
//! assert!(should_render);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use super::modes::{BarState, DetailAction, View};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::{InstalledPlugin, Page, Plugin, Post};
use crate::provider::SearchPool;
use crate::registry::PluginOperation;
use crate::search::QueryToken;

/// Decoded results of one remote pool search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolResults {
    Posts(Vec<Post>),
    Pages(Vec<Page>),
    Plugins(Vec<Plugin>),
}

/// Events triggered by user input or collaborator results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The pane became visible; opens the bar with an empty query.
    Open,
    /// The pane was hidden by the host.
    Hidden,
    /// Backs out of the detail view, or closes the bar.
    Escape,

    /// Moves selection down one row (wraps to top).
    KeyDown,
    /// Moves selection up one row (wraps to bottom).
    KeyUp,
    /// Pointer moved over result row `index`.
    Hover(usize),
    /// Pointer left the result list.
    PointerLeave,
    /// Pointer clicked result row `index`.
    Click(usize),
    /// Activates the hovered row, else the selected row.
    Enter,

    /// Appends a character to the query.
    Char(char),
    /// Removes the last character from the query.
    Backspace,
    /// Empties the query.
    ClearQuery,

    /// A debounce timer expired.
    TimerElapsed,

    /// One remote pool answered the search tagged with `token`.
    SearchCompleted {
        token: QueryToken,
        pool: SearchPool,
        outcome: std::result::Result<PoolResults, String>,
    },

    /// The installed plugin listing for refresh `generation` finished.
    InstalledListed {
        generation: u64,
        outcome: std::result::Result<Vec<InstalledPlugin>, String>,
    },

    /// An install/activate/deactivate finished; `error` is set on failure.
    PluginOperationFinished {
        slug: String,
        operation: PluginOperation,
        error: Option<String>,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// The returned flag tells the runtime whether the UI needs a re-render.
///
/// # Errors
///
/// Reserved for state mutations that can fail; every current path returns `Ok`.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Open => {
            tracing::debug!("opening command bar");
            state.open();
            Ok((true, state.refresh_installed()))
        }
        Event::Hidden => {
            if state.bar.is_open() {
                tracing::debug!("pane hidden, closing command bar");
                state.close();
            }
            Ok((false, vec![]))
        }
        Event::Escape => {
            if let View::PluginDetail(_) = state.view {
                state.view = View::Palette;
                return Ok((true, vec![]));
            }
            state.close();
            Ok((false, vec![Action::CloseFocus]))
        }

        Event::KeyDown | Event::KeyUp => {
            let len = state.list_len();
            let selection = active_selection(state);
            if *event == Event::KeyDown {
                selection.move_down(len);
            } else {
                selection.move_up(len);
            }
            Ok((true, vec![]))
        }
        Event::Hover(index) => {
            let len = state.list_len();
            let selection = active_selection(state);
            let before = selection.hover();
            selection.set_hover(*index, len);
            Ok((selection.hover() != before, vec![]))
        }
        Event::PointerLeave => {
            let selection = active_selection(state);
            let had_hover = selection.hover().is_some();
            selection.clear_hover();
            Ok((had_hover, vec![]))
        }
        Event::Click(index) => {
            let len = state.list_len();
            active_selection(state).set_hover(*index, len);
            activate(state)
        }
        Event::Enter => activate(state),

        Event::Char(c) => {
            if !matches!(state.view, View::Palette) {
                return Ok((false, vec![]));
            }
            state.query.push(*c);
            state.status = None;
            Ok((true, state.on_query_changed()))
        }
        Event::Backspace => {
            if !matches!(state.view, View::Palette) || state.query.pop().is_none() {
                return Ok((false, vec![]));
            }
            state.status = None;
            Ok((true, state.on_query_changed()))
        }
        Event::ClearQuery => {
            if !matches!(state.view, View::Palette) || state.query.is_empty() {
                return Ok((false, vec![]));
            }
            state.query.clear();
            state.status = None;
            Ok((true, state.on_query_changed()))
        }

        Event::TimerElapsed => {
            let actions = state.on_timer();
            Ok((!actions.is_empty(), actions))
        }
        Event::SearchCompleted { token, pool, outcome } => {
            let applied = state.apply_search(*token, *pool, outcome.clone());
            Ok((applied && state.bar.is_open(), vec![]))
        }
        Event::InstalledListed { generation, outcome } => {
            let applied = state.apply_installed(*generation, outcome.clone());
            Ok((applied && state.bar.is_open(), vec![]))
        }
        Event::PluginOperationFinished { slug, operation, error } => {
            let actions = state.finish_operation(slug, *operation, error.clone());
            Ok((state.bar.is_open(), actions))
        }
    }
}

fn active_selection(state: &mut AppState) -> &mut super::selection::SelectionState {
    match state.view {
        View::PluginDetail(_) => &mut state.detail_selection,
        View::Palette => &mut state.selection,
    }
}

/// Runs the active row of the current view.
fn activate(state: &mut AppState) -> Result<(bool, Vec<Action>)> {
    if let View::PluginDetail(plugin) = &state.view {
        let plugin = plugin.clone();
        let Some(index) = state.detail_selection.active() else {
            return Ok((false, vec![]));
        };
        let Some(action) = DetailAction::for_plugin(&plugin).get(index).copied() else {
            return Ok((false, vec![]));
        };

        tracing::debug!(slug = ?plugin.slug, action = action.label(), "detail action");
        return match state.detail_effect(&plugin, action) {
            Some(effect) => {
                let actions = state.execute_effect(effect);
                Ok((true, actions))
            }
            None => {
                state.view = View::Palette;
                Ok((true, vec![]))
            }
        };
    }

    let Some(index) = state.selection.active() else {
        tracing::debug!("enter with nothing selected");
        return Ok((false, vec![]));
    };

    let effect = state.effect_at(index);
    let closes = effect.closes_bar();
    let actions = state.execute_effect(effect);

    if closes {
        debug_assert_eq!(state.bar, BarState::Closed);
        return Ok((false, actions));
    }
    Ok((true, actions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::HostContext;
    use crate::provider::ProviderRequest;
    use crate::search::Composition;
    use crate::ui::theme::Theme;

    fn state_with(debounce_ms: u64) -> AppState {
        let settings = crate::app::PaletteSettings {
            debounce_ms,
            ..Default::default()
        };
        let mut state = AppState::new(settings, HostContext::default(), Theme::default());
        handle_event(&mut state, &Event::Open).unwrap();
        state
    }

    fn type_query(state: &mut AppState, query: &str) -> Vec<Action> {
        let mut last = vec![];
        for c in query.chars() {
            last = handle_event(state, &Event::Char(c)).unwrap().1;
        }
        last
    }

    fn search_tokens(actions: &[Action]) -> Vec<QueryToken> {
        actions
            .iter()
            .filter_map(|a| match a {
                Action::Provider(ProviderRequest::Search { token, .. }) => Some(*token),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn open_requests_installed_list() {
        let mut state = AppState::new(Default::default(), HostContext::default(), Theme::default());
        let (render, actions) = handle_event(&mut state, &Event::Open).unwrap();
        assert!(render);
        assert_eq!(state.bar, BarState::OpenEmpty);
        assert_eq!(
            actions,
            vec![Action::Provider(ProviderRequest::ListInstalled { generation: 1 })]
        );
    }

    #[test]
    fn typing_debounces_searches() {
        let mut state = state_with(250);
        let actions = type_query(&mut state, "ab");
        assert_eq!(actions, vec![Action::ScheduleTimer { millis: 250 }]);

        let (_, first) = handle_event(&mut state, &Event::TimerElapsed).unwrap();
        assert!(first.is_empty(), "superseded timer must not dispatch");

        let (_, second) = handle_event(&mut state, &Event::TimerElapsed).unwrap();
        assert_eq!(search_tokens(&second).len(), 3);
    }

    #[test]
    fn stale_search_results_are_discarded() {
        let mut state = state_with(0);
        let old = search_tokens(&type_query(&mut state, "a"))[0];
        let new = search_tokens(&type_query(&mut state, "b"))[0];
        assert!(new > old);

        let stale = Event::SearchCompleted {
            token: old,
            pool: SearchPool::Posts,
            outcome: Ok(PoolResults::Posts(vec![Post {
                id: Some(1),
                title: Some("stale".into()),
                status: None,
            }])),
        };
        let (render, _) = handle_event(&mut state, &stale).unwrap();
        assert!(!render);
        assert!(state.pools.posts.is_empty());

        let fresh = Event::SearchCompleted {
            token: new,
            pool: SearchPool::Posts,
            outcome: Ok(PoolResults::Posts(vec![Post {
                id: Some(2),
                title: Some("fresh ab".into()),
                status: None,
            }])),
        };
        handle_event(&mut state, &fresh).unwrap();
        assert_eq!(state.pools.posts[0].id, Some(2));
    }

    #[test]
    fn escape_leaves_detail_view_before_closing() {
        let mut state = state_with(0);
        state.view = View::PluginDetail(InstalledPlugin {
            slug: Some("akismet".into()),
            title: None,
            active: false,
        });

        let (render, actions) = handle_event(&mut state, &Event::Escape).unwrap();
        assert!(render && actions.is_empty());
        assert_eq!(state.view, View::Palette);

        let (_, actions) = handle_event(&mut state, &Event::Escape).unwrap();
        assert_eq!(actions, vec![Action::CloseFocus]);
        assert_eq!(state.bar, BarState::Closed);
    }

    #[test]
    fn enter_on_command_navigates_and_closes() {
        let mut state = state_with(0);
        let (render, actions) = handle_event(&mut state, &Event::Enter).unwrap();
        assert!(!render);
        assert!(matches!(actions[0], Action::Provider(ProviderRequest::Open { .. })));
        assert_eq!(actions[1], Action::CloseFocus);
        assert_eq!(state.bar, BarState::Closed);
    }

    #[test]
    fn no_match_enter_without_selection_does_nothing() {
        let mut state = state_with(0);
        type_query(&mut state, "zzqqxx");
        assert!(matches!(state.composition, Composition::NoMatch(_)));
        assert_eq!(state.bar, BarState::OpenNoMatch);

        let (_, actions) = handle_event(&mut state, &Event::Enter).unwrap();
        assert!(actions.is_empty());

        handle_event(&mut state, &Event::KeyDown).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::Enter).unwrap();
        let Action::Provider(ProviderRequest::Open { url }) = &actions[0] else {
            panic!("expected open");
        };
        assert!(url.ends_with("edit.php?s=zzqqxx"));
    }

    #[test]
    fn hover_overrides_selection_until_pointer_leaves() {
        let mut state = state_with(0);
        handle_event(&mut state, &Event::Hover(3)).unwrap();
        assert_eq!(state.selection.active(), Some(3));

        let (render, _) = handle_event(&mut state, &Event::Hover(3)).unwrap();
        assert!(!render);

        handle_event(&mut state, &Event::PointerLeave).unwrap();
        assert_eq!(state.selection.active(), Some(0));
    }

    #[test]
    fn failed_operation_sets_status_line() {
        let mut state = state_with(0);
        state.operations.begin("theme-x", PluginOperation::Install);
        let (_, actions) = handle_event(
            &mut state,
            &Event::PluginOperationFinished {
                slug: "theme-x".into(),
                operation: PluginOperation::Install,
                error: Some("Error: download failed".into()),
            },
        )
        .unwrap();
        assert!(actions.is_empty());
        assert!(state.status.as_deref().is_some_and(|s| s.contains("theme-x")));
        assert!(!state.operations.is_in_flight("theme-x"));
    }

    fn plugin_row(state: &AppState, slug: &str) -> usize {
        state
            .composition
            .entries()
            .iter()
            .position(|e| {
                matches!(e, crate::search::ResultEntry::Item(crate::domain::SearchResultItem::Plugin(p))
                    if p.slug.as_deref() == Some(slug))
            })
            .unwrap()
    }

    #[test]
    fn empty_query_lists_every_command_and_wraps() {
        let mut state = state_with(0);
        let total = crate::domain::command::builtin_commands().len();
        assert_eq!(state.composition.len(), total);
        assert!(state
            .composition
            .entries()
            .iter()
            .all(|e| matches!(e, crate::search::ResultEntry::Command(_))));

        handle_event(&mut state, &Event::KeyUp).unwrap();
        assert_eq!(state.selection.active(), Some(total - 1));
        handle_event(&mut state, &Event::KeyDown).unwrap();
        assert_eq!(state.selection.active(), Some(0));
    }

    #[test]
    fn repeated_install_runs_once() {
        let mut state = state_with(0);
        let token = search_tokens(&type_query(&mut state, "theme-x"))[0];
        handle_event(
            &mut state,
            &Event::SearchCompleted {
                token,
                pool: SearchPool::Plugins,
                outcome: Ok(PoolResults::Plugins(vec![Plugin {
                    slug: Some("theme-x".into()),
                    name: Some("Theme X".into()),
                    installed: false,
                    active: false,
                }])),
            },
        )
        .unwrap();

        let row = plugin_row(&state, "theme-x");
        let (_, first) = handle_event(&mut state, &Event::Click(row)).unwrap();
        let (_, second) = handle_event(&mut state, &Event::Click(row)).unwrap();
        assert_eq!(
            first,
            vec![Action::Provider(ProviderRequest::Plugin {
                operation: PluginOperation::Install,
                slug: "theme-x".into(),
            })]
        );
        assert!(second.is_empty());
        assert!(state.bar.is_open());

        let Some(crate::search::ResultEntry::Item(item)) = state.composition.entries().get(row) else {
            panic!("expected plugin row");
        };
        let view = crate::registry::render(item, &state.render_context());
        assert_eq!(view.badge, Some(crate::registry::Badge::Installing));

        let (_, actions) = handle_event(
            &mut state,
            &Event::PluginOperationFinished {
                slug: "theme-x".into(),
                operation: PluginOperation::Install,
                error: None,
            },
        )
        .unwrap();
        assert_eq!(
            actions,
            vec![Action::Provider(ProviderRequest::ListInstalled { generation: 2 })]
        );
        assert!(state.pools.plugins[0].installed);
    }

    #[test]
    fn installed_plugin_detail_activates() {
        let mut state = state_with(0);
        handle_event(
            &mut state,
            &Event::InstalledListed {
                generation: 1,
                outcome: Ok(vec![InstalledPlugin {
                    slug: Some("p1".into()),
                    title: Some("Plugin One".into()),
                    active: false,
                }]),
            },
        )
        .unwrap();
        type_query(&mut state, "plugin one");

        let row = state
            .composition
            .entries()
            .iter()
            .position(|e| {
                matches!(e, crate::search::ResultEntry::Item(crate::domain::SearchResultItem::InstalledPlugin(_)))
            })
            .unwrap();
        handle_event(&mut state, &Event::Click(row)).unwrap();
        assert!(matches!(&state.view, View::PluginDetail(p) if p.slug.as_deref() == Some("p1")));

        let (_, actions) = handle_event(&mut state, &Event::Enter).unwrap();
        assert_eq!(
            actions,
            vec![Action::Provider(ProviderRequest::Plugin {
                operation: PluginOperation::Activate,
                slug: "p1".into(),
            })]
        );

        handle_event(
            &mut state,
            &Event::PluginOperationFinished {
                slug: "p1".into(),
                operation: PluginOperation::Activate,
                error: None,
            },
        )
        .unwrap();
        assert!(matches!(&state.view, View::PluginDetail(p) if p.active));
        assert!(state.installed[0].active);
    }

    #[test]
    fn draft_post_opens_editor() {
        let mut state = state_with(0);
        let token = search_tokens(&type_query(&mut state, "hello"))[0];
        handle_event(
            &mut state,
            &Event::SearchCompleted {
                token,
                pool: SearchPool::Posts,
                outcome: Ok(PoolResults::Posts(vec![Post {
                    id: Some(42),
                    title: Some("Hello draft".into()),
                    status: Some("draft".into()),
                }])),
            },
        )
        .unwrap();

        let row = state
            .composition
            .entries()
            .iter()
            .position(|e| matches!(e, crate::search::ResultEntry::Item(crate::domain::SearchResultItem::Post(_))))
            .unwrap();
        let (render, actions) = handle_event(&mut state, &Event::Click(row)).unwrap();
        assert!(!render);
        assert_eq!(
            actions,
            vec![
                Action::Provider(ProviderRequest::Open {
                    url: "http://localhost/wp-admin/post.php?post=42&action=edit".into(),
                }),
                Action::CloseFocus,
            ]
        );
        assert_eq!(state.bar, BarState::Closed);
    }

    fn theme_x_results(state: &mut AppState, token: QueryToken) {
        handle_event(
            state,
            &Event::SearchCompleted {
                token,
                pool: SearchPool::Plugins,
                outcome: Ok(PoolResults::Plugins(vec![Plugin {
                    slug: Some("theme-x".into()),
                    name: Some("Theme X".into()),
                    installed: false,
                    active: false,
                }])),
            },
        )
        .unwrap();
    }

    fn plugin_requests(actions: &[Action]) -> Vec<&ProviderRequest> {
        actions
            .iter()
            .filter_map(|a| match a {
                Action::Provider(request @ ProviderRequest::Plugin { .. }) => Some(request),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn keyboard_enter_installs_once() {
        let mut state = state_with(0);
        let token = search_tokens(&type_query(&mut state, "theme"))[0];
        theme_x_results(&mut state, token);

        let row = plugin_row(&state, "theme-x");
        assert!(row > 0, "theme commands are listed first");
        for _ in 0..row {
            handle_event(&mut state, &Event::KeyDown).unwrap();
        }
        assert_eq!(state.selection.active(), Some(row));

        let (_, first) = handle_event(&mut state, &Event::Enter).unwrap();
        let (_, second) = handle_event(&mut state, &Event::Enter).unwrap();
        let requests: Vec<_> = plugin_requests(&first).into_iter().chain(plugin_requests(&second)).collect();
        assert_eq!(
            requests,
            vec![&ProviderRequest::Plugin {
                operation: PluginOperation::Install,
                slug: "theme-x".into(),
            }]
        );
    }

    #[test]
    fn lone_directory_result_installs_on_enter() {
        let mut state = state_with(0);
        let token = search_tokens(&type_query(&mut state, "theme-x"))[0];
        theme_x_results(&mut state, token);

        assert!(state.pools.commands.is_empty());
        assert_eq!(state.composition.len(), 1);
        let Some(crate::search::ResultEntry::Item(item)) = state.composition.entries().first() else {
            panic!("expected the plugin row");
        };
        assert_eq!(
            crate::registry::render(item, &state.render_context()).badge,
            Some(crate::registry::Badge::Install)
        );
        assert_eq!(state.selection.active(), Some(0));

        let (_, first) = handle_event(&mut state, &Event::Enter).unwrap();
        let (_, second) = handle_event(&mut state, &Event::Enter).unwrap();
        assert_eq!(plugin_requests(&first).len(), 1);
        assert!(plugin_requests(&second).is_empty());
    }

    #[test]
    fn installed_plugin_stays_installed_before_refresh() {
        let host = HostContext::new("http://localhost/wp-admin/", ["edit_posts", "install_plugins"]);
        let settings = crate::app::PaletteSettings {
            debounce_ms: 0,
            ..Default::default()
        };
        let mut state = AppState::new(settings, host, Theme::default());
        handle_event(&mut state, &Event::Open).unwrap();

        let token = search_tokens(&type_query(&mut state, "theme"))[0];
        theme_x_results(&mut state, token);
        let row = plugin_row(&state, "theme-x");
        handle_event(&mut state, &Event::Click(row)).unwrap();
        let (_, actions) = handle_event(
            &mut state,
            &Event::PluginOperationFinished {
                slug: "theme-x".into(),
                operation: PluginOperation::Install,
                error: None,
            },
        )
        .unwrap();
        assert!(actions.is_empty(), "no installed list to refresh without activate_plugins");

        let token = search_tokens(&type_query(&mut state, "s"))[0];
        theme_x_results(&mut state, token);

        let row = plugin_row(&state, "theme-x");
        let Some(crate::search::ResultEntry::Item(item)) = state.composition.entries().get(row) else {
            panic!("expected plugin row");
        };
        assert_eq!(
            crate::registry::render(item, &state.render_context()).badge,
            Some(crate::registry::Badge::Activate)
        );
        let (_, actions) = handle_event(&mut state, &Event::Click(row)).unwrap();
        assert_eq!(
            plugin_requests(&actions),
            vec![&ProviderRequest::Plugin {
                operation: PluginOperation::Activate,
                slug: "theme-x".into(),
            }]
        );
    }

    #[test]
    fn option_like_query_skips_directory_search() {
        let mut state = state_with(0);
        let actions = type_query(&mut state, "--exec=phpinfo();");
        let pools: Vec<SearchPool> = actions
            .iter()
            .filter_map(|a| match a {
                Action::Provider(ProviderRequest::Search { pool, .. }) => Some(*pool),
                _ => None,
            })
            .collect();
        assert_eq!(pools, vec![SearchPool::Posts, SearchPool::Pages]);
    }
}
