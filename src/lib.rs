//! wp-palette: a WordPress admin command palette as a Zellij plugin.
//!
//! The palette provides:
//! - A static list of admin commands, shown grouped when the query is empty
//! - Live search over posts, pages, the plugin directory, and installed plugins
//! - Plugin install/activate/deactivate from the result list
//! - Keyboard and pointer navigation with last-query-wins result handling
//!
//! All site access goes through WP-CLI (`wp ...`), run by Zellij on the host.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Command bar controller
//! │  - Event handling, debounce, query tokens           │
//! │  - Selection and view model computation             │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Search        │   │ Registry      │   │ Provider      │
//! │ (search/)     │   │ (registry/)   │   │ (provider/)   │
//! │ - Filtering   │   │ - Render      │   │ - WP-CLI argv │
//! │ - Composition │   │ - Activate    │   │ - JSON decode │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/), UI (ui/), Infrastructure,        │
//! │  Observability (observability/)                     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Command bar state machine with event/action model
//! - [`domain`]: Entities, commands, host context, errors
//! - [`search`]: Local filtering, result composition, query tokens
//! - [`registry`]: Per-entity render and activate operations
//! - [`provider`]: WP-CLI request building and response decoding
//! - [`ui`]: Terminal rendering with theme support
//! - [`infrastructure`]: Sandbox path helpers
//! - `observability`: OpenTelemetry tracing to a JSON-lines file
//!
//! # Configuration
//!
//! ```kdl
//! plugin location="file:/path/to/wp-palette.wasm" {
//!     admin_url "https://example.test/wp-admin/"
//!     capabilities "edit_posts,install_plugins,activate_plugins"
//!     wp_path "/srv/www/example"
//!     debounce_ms "250"
//!     category_order "commands,plugins,posts,pages,installed-plugins"
//!     theme "catppuccin-mocha"
//!     trace_level "info"
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use wp_palette::{handle_event, initialize, Action, Config, Event};
//!
//! let config = Config::from_zellij(&BTreeMap::new());
//! let mut state = initialize(&config);
//!
//! handle_event(&mut state, &Event::Open)?;
//! let (_, actions) = handle_event(&mut state, &Event::Enter)?;
//! assert_eq!(actions.last(), Some(&Action::CloseFocus));
//! # Ok::<(), wp_palette::PaletteError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod provider;
pub mod registry;
pub mod search;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, PaletteSettings};
pub use domain::{HostContext, PaletteError, Result};
pub use ui::Theme;

use domain::context::{DEFAULT_ADMIN_URL, DEFAULT_CAPABILITIES};
use provider::WpCli;
use search::CategoryOrder;
use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's plugin configuration block.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base admin URL; every navigation target is joined onto it.
    pub admin_url: String,
    /// Capabilities of the current user; they decide which pools are searched.
    pub capabilities: Vec<String>,

    /// WP-CLI executable. Default: `wp`
    pub wp_binary: String,
    /// `--path` passed to WP-CLI, if set.
    pub wp_path: Option<String>,
    /// Program used to open admin URLs. Default: `xdg-open`
    pub open_command: String,

    /// Quiet period before remote searches run, in milliseconds; 0 disables it.
    pub debounce_ms: u64,
    /// Maximum results requested per remote pool.
    pub result_limit: usize,
    pub category_order: CategoryOrder,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,
    /// Path to a custom TOML theme file; `~` maps to the sandbox `/host`.
    pub theme_file: Option<String>,

    /// Tracing level. Options: `trace`, `debug`, `info`, `warn`, `error`.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        let settings = PaletteSettings::default();
        let cli = WpCli::default();
        Self {
            admin_url: DEFAULT_ADMIN_URL.to_string(),
            capabilities: DEFAULT_CAPABILITIES.iter().map(ToString::to_string).collect(),
            wp_binary: cli.binary,
            wp_path: cli.path,
            open_command: cli.open_command,
            debounce_ms: settings.debounce_ms,
            result_limit: settings.result_limit,
            category_order: settings.category_order,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Missing or unparsable values fall back to the defaults:
    ///
    /// - `capabilities`: comma-separated; an explicitly empty value grants nothing
    /// - `debounce_ms`, `result_limit`: integers (`result_limit` must be > 0)
    /// - `category_order`: comma-separated category names, see [`CategoryOrder::parse`]
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use wp_palette::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("capabilities".to_string(), "edit_posts".to_string());
    /// map.insert("debounce_ms".to_string(), "0".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.capabilities, vec!["edit_posts"]);
    /// assert_eq!(config.debounce_ms, 0);
    /// assert_eq!(config.result_limit, 10);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let non_blank = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let capabilities = config.get("capabilities").map_or(defaults.capabilities, |s| {
            s.split(',')
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(String::from)
                .collect()
        });

        Self {
            admin_url: non_blank("admin_url").unwrap_or(defaults.admin_url),
            capabilities,
            wp_binary: non_blank("wp_binary").unwrap_or(defaults.wp_binary),
            wp_path: non_blank("wp_path"),
            open_command: non_blank("open_command").unwrap_or(defaults.open_command),
            debounce_ms: non_blank("debounce_ms")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.debounce_ms),
            result_limit: non_blank("result_limit")
                .and_then(|s| s.parse().ok())
                .filter(|&n| n > 0)
                .unwrap_or(defaults.result_limit),
            category_order: non_blank("category_order")
                .map_or(defaults.category_order, |s| CategoryOrder::parse(&s)),
            theme_name: non_blank("theme"),
            theme_file: non_blank("theme_file"),
            trace_level: non_blank("trace_level"),
        }
    }

    /// Reports settings that parsed but will not work as intended.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::Config`] naming the first offending option.
    pub fn validate(&self) -> Result<()> {
        if !(self.admin_url.starts_with("http://") || self.admin_url.starts_with("https://")) {
            return Err(PaletteError::Config(format!(
                "admin_url must be an http(s) URL, got {:?}",
                self.admin_url
            )));
        }
        if self.capabilities.is_empty() {
            return Err(PaletteError::Config(
                "capabilities is empty; only static commands will be searched".to_string(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn host_context(&self) -> HostContext {
        HostContext::new(&self.admin_url, self.capabilities.iter().cloned())
    }

    #[must_use]
    pub fn wp_cli(&self) -> WpCli {
        WpCli {
            binary: self.wp_binary.clone(),
            path: self.wp_path.clone(),
            open_command: self.open_command.clone(),
        }
    }

    #[must_use]
    pub fn settings(&self) -> PaletteSettings {
        PaletteSettings {
            category_order: self.category_order.clone(),
            result_limit: self.result_limit,
            debounce_ms: self.debounce_ms,
        }
    }

    /// Theme from `theme_file`, else `theme`, else the default.
    #[must_use]
    pub fn theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            let path = infrastructure::expand_tilde(theme_file);
            return Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %path, error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Builds the closed command bar from configuration.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(
        admin_url = %config.admin_url,
        capabilities = ?config.capabilities,
        debounce_ms = config.debounce_ms,
        "initializing command palette"
    );

    AppState::new(config.settings(), config.host_context(), config.theme())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    #[test]
    fn defaults_when_empty() {
        let config = Config::from_zellij(&BTreeMap::new());
        assert_eq!(config.admin_url, DEFAULT_ADMIN_URL);
        assert_eq!(config.debounce_ms, 250);
        assert_eq!(config.result_limit, 10);
        assert_eq!(config.wp_cli(), WpCli::default());
        assert!(config.validate().is_ok());
        assert!(config.host_context().can("install_plugins"));
    }

    #[test]
    fn bad_numbers_fall_back() {
        let config = Config::from_zellij(&map(&[("debounce_ms", "soon"), ("result_limit", "0")]));
        assert_eq!(config.debounce_ms, 250);
        assert_eq!(config.result_limit, 10);
    }

    #[test]
    fn empty_capabilities_grant_nothing() {
        let config = Config::from_zellij(&map(&[("capabilities", "")]));
        assert!(matches!(config.validate(), Err(PaletteError::Config(_))));
        let host = config.host_context();
        assert!(!host.can("edit_posts"));
        assert!(!host.can("install_plugins"));
    }

    #[test]
    fn admin_url_and_wp_path() {
        let config = Config::from_zellij(&map(&[
            ("admin_url", "https://example.test/wp-admin"),
            ("wp_path", "/srv/www"),
        ]));
        assert_eq!(config.host_context().admin_url(), "https://example.test/wp-admin/");
        assert_eq!(config.wp_cli().path.as_deref(), Some("/srv/www"));

        let relative = Config::from_zellij(&map(&[("admin_url", "/wp-admin/")]));
        assert!(relative.validate().is_err());
    }

    #[test]
    fn unknown_theme_falls_back_to_default() {
        let config = Config::from_zellij(&map(&[("theme", "nope")]));
        assert_eq!(config.theme().name, "catppuccin-mocha");
    }
}
