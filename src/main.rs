//! Zellij plugin wrapper and entry point.
//!
//! This is the thin integration layer between the palette library and the
//! Zellij plugin system: it translates Zellij events into library events,
//! runs [`handle_event`], and executes the returned actions.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Permissions**: `RunCommands` for WP-CLI, `ChangeApplicationState` to hide the pane
//! 3. **Open**: On permission grant or when the pane becomes visible
//! 4. **Update**: Map events, delegate to the library, execute actions
//! 5. **Render**: Call the library render function
//!
//! # Event Mapping
//!
//! - `Key(Down)` / `Ctrl+n` → `Event::KeyDown`
//! - `Key(Up)` / `Ctrl+p` → `Event::KeyUp`
//! - `Key(Enter)` → `Event::Enter`
//! - `Key(Esc)` → `Event::Escape`
//! - `Key(Backspace)` → `Event::Backspace`, `Ctrl+u` → `Event::ClearQuery`
//! - `Key(Char(c))` → `Event::Char(c)`
//! - `Mouse(Hover)` / `Mouse(LeftClick)` → `Event::Hover` / `Event::Click` or `Event::PointerLeave`
//! - `Timer` → `Event::TimerElapsed`
//! - `RunCommandResult` → decoded by [`provider::decode`]
//! - `Visible(true | false)` → `Event::Open` / `Event::Hidden`

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use wp_palette::provider::{self, WpCli};
use wp_palette::{handle_event, Action, Config, Event};

register_plugin!(State);

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with the Zellij-specific pieces: the
/// WP-CLI invocation settings and the last rendered pane height, which the
/// mouse mapping needs.
struct State {
    app: wp_palette::AppState,
    cli: WpCli,
    rows: usize,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: wp_palette::initialize(&Config::default()),
            cli: WpCli::default(),
            rows: 0,
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        wp_palette::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        if let Err(e) = config.validate() {
            tracing::warn!(error = %e, "questionable configuration");
        }

        self.app = wp_palette::initialize(&config);
        self.cli = config.wp_cli();
        tracing::debug!(wp_binary = %self.cli.binary, wp_path = ?self.cli.path, "app state initialized");

        request_permission(&[
            PermissionType::RunCommands,
            PermissionType::ChangeApplicationState,
        ]);

        subscribe(&[
            EventType::Key,
            EventType::Mouse,
            EventType::Timer,
            EventType::Visible,
            EventType::RunCommandResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Translates and handles one Zellij event; returns whether to re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", otel.name = %format!("plugin_update::{event_name}"), event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match Self::map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Mouse(mouse) => match self.map_mouse_event(mouse) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Timer(_) => Event::TimerElapsed,
            zellij_tile::prelude::Event::Visible(true) => Event::Open,
            zellij_tile::prelude::Event::Visible(false) => Event::Hidden,
            zellij_tile::prelude::Event::RunCommandResult(exit_code, stdout, stderr, context) => {
                match provider::decode(&context, exit_code, &stdout, &stderr) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(PermissionStatus::Granted) => {
                tracing::debug!("permissions granted - opening palette");
                Event::Open
            }
            zellij_tile::prelude::Event::PermissionRequestResult(PermissionStatus::Denied) => {
                tracing::warn!("permissions denied - WP-CLI requests will fail");
                return false;
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    self.execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        wp_palette::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Mouse(..) => "Mouse".to_string(),
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            zellij_tile::prelude::Event::Visible(visible) => format!("Visible({visible})"),
            zellij_tile::prelude::Event::RunCommandResult(..) => "RunCommandResult".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    fn map_key_event(key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::KeyDown),
                BareKey::Char('p') => Some(Event::KeyUp),
                BareKey::Char('u') => Some(Event::ClearQuery),
                BareKey::Char('c') => Some(Event::Escape),
                _ => None,
            };
        }

        Some(match key.bare_key {
            BareKey::Down => Event::KeyDown,
            BareKey::Up => Event::KeyUp,
            BareKey::Enter => Event::Enter,
            BareKey::Esc => Event::Escape,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    /// Maps pointer events onto result rows using the last rendered height.
    fn map_mouse_event(&self, mouse: Mouse) -> Option<Event> {
        let (line, click) = match mouse {
            Mouse::Hover(line, _col) => (line, false),
            Mouse::LeftClick(line, _col) => (line, true),
            _ => return None,
        };

        // Zellij reports 0-indexed pane lines; rendering is 1-indexed.
        let index = usize::try_from(line)
            .ok()
            .and_then(|line| self.app.index_at_line(line + 1, self.rows));

        Some(match (index, click) {
            (Some(index), false) => Event::Hover(index),
            (Some(index), true) => Event::Click(index),
            (None, false) => Event::PointerLeave,
            (None, true) => return None,
        })
    }

    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("hiding palette");
                hide_self();
            }
            Action::ScheduleTimer { millis } => {
                #[allow(clippy::cast_precision_loss)]
                set_timeout(*millis as f64 / 1000.0);
            }
            Action::Provider(request) => {
                let argv = self.cli.argv(request);
                tracing::debug!(kind = request.kind(), argv = ?argv, "running provider command");
                let argv: Vec<&str> = argv.iter().map(String::as_str).collect();
                run_command(&argv, request.context());
            }
        }
    }
}
