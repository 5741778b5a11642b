//! Requests to the WP-CLI collaborator.
//!
//! A request knows how to turn itself into an argv for `run_command` and into
//! the context map Zellij hands back with the command's result. The context
//! is the only state that survives the round trip, so it carries everything
//! needed to route the response: the request kind, the query token, the pool,
//! the plugin slug.

use crate::registry::PluginOperation;
use crate::search::QueryToken;
use std::collections::BTreeMap;

pub const KEY_REQUEST: &str = "request";
pub const KEY_TOKEN: &str = "token";
pub const KEY_POOL: &str = "pool";
pub const KEY_GENERATION: &str = "generation";
pub const KEY_OPERATION: &str = "operation";
pub const KEY_SLUG: &str = "slug";
pub const KEY_URL: &str = "url";

/// Remote pools searched through WP-CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchPool {
    Posts,
    Pages,
    Plugins,
}

impl SearchPool {
    pub const ALL: [Self; 3] = [Self::Posts, Self::Pages, Self::Plugins];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Posts => "posts",
            Self::Pages => "pages",
            Self::Plugins => "plugins",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    /// Whether `query` can be sent to this pool.
    ///
    /// The directory search takes the query as a positional argument, so a
    /// query that looks like an option is never sent there.
    #[must_use]
    pub fn accepts(self, query: &str) -> bool {
        let query = query.trim();
        match self {
            Self::Posts | Self::Pages => !query.is_empty(),
            Self::Plugins => !query.is_empty() && !query.starts_with('-'),
        }
    }
}

/// Positional search term for `wp plugin search`; leading dashes are dropped.
fn directory_term(query: &str) -> &str {
    query.trim().trim_start_matches('-').trim_start()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderRequest {
    /// `searchPosts` / `searchPages` / `searchPlugins`.
    Search {
        token: QueryToken,
        pool: SearchPool,
        query: String,
        limit: usize,
    },
    /// `listInstalledPlugins`; `generation` orders overlapping refreshes.
    ListInstalled { generation: u64 },
    /// `installPlugin` / `activatePlugin` / `deactivatePlugin`.
    Plugin {
        operation: PluginOperation,
        slug: String,
    },
    /// Open an admin URL in the browser.
    Open { url: String },
}

impl ProviderRequest {
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Search { .. } => "search",
            Self::ListInstalled { .. } => "installed",
            Self::Plugin { .. } => "plugin",
            Self::Open { .. } => "open",
        }
    }

    /// Context map attached to the `run_command` call.
    #[must_use]
    pub fn context(&self) -> BTreeMap<String, String> {
        let mut context = BTreeMap::new();
        context.insert(KEY_REQUEST.to_string(), self.kind().to_string());

        match self {
            Self::Search { token, pool, .. } => {
                context.insert(KEY_TOKEN.to_string(), token.to_string());
                context.insert(KEY_POOL.to_string(), pool.name().to_string());
            }
            Self::ListInstalled { generation } => {
                context.insert(KEY_GENERATION.to_string(), generation.to_string());
            }
            Self::Plugin { operation, slug } => {
                context.insert(KEY_OPERATION.to_string(), operation.verb().to_string());
                context.insert(KEY_SLUG.to_string(), slug.clone());
            }
            Self::Open { url } => {
                context.insert(KEY_URL.to_string(), url.clone());
            }
        }

        context
    }
}

/// How to invoke WP-CLI and the URL opener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WpCli {
    pub binary: String,
    /// `--path` of the WordPress install, when not running from inside it.
    pub path: Option<String>,
    pub open_command: String,
}

impl Default for WpCli {
    fn default() -> Self {
        Self {
            binary: "wp".to_string(),
            path: None,
            open_command: "xdg-open".to_string(),
        }
    }
}

impl WpCli {
    /// Builds the argv for `request`.
    ///
    /// # Example
    ///
    /// ```
    /// use wp_palette::provider::{ProviderRequest, WpCli};
    /// use wp_palette::registry::PluginOperation;
    ///
    /// let cli = WpCli { path: Some("/srv/www".into()), ..WpCli::default() };
    /// let argv = cli.argv(&ProviderRequest::Plugin {
    ///     operation: PluginOperation::Install,
    ///     slug: "theme-x".into(),
    /// });
    /// assert_eq!(argv, ["wp", "plugin", "install", "theme-x", "--path=/srv/www"]);
    /// ```
    #[must_use]
    pub fn argv(&self, request: &ProviderRequest) -> Vec<String> {
        let args: Vec<String> = match request {
            ProviderRequest::Open { url } => {
                return vec![self.open_command.clone(), url.clone()];
            }
            ProviderRequest::Search { pool: SearchPool::Plugins, query, limit, .. } => vec![
                "plugin".into(),
                "search".into(),
                directory_term(query).to_string(),
                format!("--per-page={limit}"),
                "--fields=name,slug".into(),
                "--format=json".into(),
            ],
            ProviderRequest::Search { pool, query, limit, .. } => {
                let post_type = if *pool == SearchPool::Pages { "page" } else { "post" };
                vec![
                    "post".into(),
                    "list".into(),
                    format!("--post_type={post_type}"),
                    "--post_status=any".into(),
                    format!("--s={}", query.trim()),
                    format!("--posts_per_page={limit}"),
                    "--fields=ID,post_title,post_status".into(),
                    "--format=json".into(),
                ]
            }
            ProviderRequest::ListInstalled { .. } => vec![
                "plugin".into(),
                "list".into(),
                "--fields=name,title,status".into(),
                "--format=json".into(),
            ],
            ProviderRequest::Plugin { operation, slug } => {
                vec!["plugin".into(), operation.verb().into(), slug.clone()]
            }
        };

        let mut argv = Vec::with_capacity(args.len() + 2);
        argv.push(self.binary.clone());
        argv.extend(args);
        if let Some(path) = self.path.as_deref().filter(|p| !p.is_empty()) {
            argv.push(format!("--path={path}"));
        }
        argv
    }
}
