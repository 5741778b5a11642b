//! Decoding WP-CLI results into application events.
//!
//! Zellij returns the exit code, stdout, stderr, and the context map of every
//! `run_command`. [`decode`] reads the context to find out which request the
//! result belongs to and turns the output into an [`Event`]. Decoding never
//! fails the plugin: a bad payload becomes a failure event carrying the error
//! message, which the controller shows as an empty pool plus a status line.

use super::request::{
    SearchPool, KEY_GENERATION, KEY_OPERATION, KEY_POOL, KEY_REQUEST, KEY_SLUG, KEY_TOKEN, KEY_URL,
};
use crate::app::{Event, PoolResults};
use crate::domain::{InstalledPlugin, PaletteError, Plugin, Post, Result};
use crate::registry::PluginOperation;
use crate::search::QueryToken;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Deserialize)]
struct PostRecord {
    #[serde(rename = "ID")]
    id: Option<u64>,
    post_title: Option<String>,
    post_status: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DirectoryPluginRecord {
    name: Option<String>,
    slug: Option<String>,
}

#[derive(Debug, Deserialize)]
struct InstalledPluginRecord {
    /// `wp plugin list` reports the slug as `name`.
    name: Option<String>,
    title: Option<String>,
    status: Option<String>,
}

/// Turns a command result into an event, or `None` if it is not ours.
#[must_use]
pub fn decode(
    context: &BTreeMap<String, String>,
    exit_code: Option<i32>,
    stdout: &[u8],
    stderr: &[u8],
) -> Option<Event> {
    let request = context.get(KEY_REQUEST)?;
    let stdout = String::from_utf8_lossy(stdout);
    let failure = (exit_code != Some(0)).then(|| failure_message(exit_code, stderr));

    tracing::debug!(request = %request, exit_code = ?exit_code, stdout_len = stdout.len(), "decoding provider result");

    match request.as_str() {
        "search" => {
            let token = QueryToken::new(context.get(KEY_TOKEN)?.parse().ok()?);
            let pool = SearchPool::from_name(context.get(KEY_POOL)?)?;
            let outcome = match failure {
                Some(error) => Err(error),
                None => parse_pool(pool, &stdout).map_err(|e| e.to_string()),
            };
            Some(Event::SearchCompleted { token, pool, outcome })
        }
        "installed" => {
            let generation = context.get(KEY_GENERATION)?.parse().ok()?;
            let outcome = match failure {
                Some(error) => Err(error),
                None => parse_installed(&stdout).map_err(|e| e.to_string()),
            };
            Some(Event::InstalledListed { generation, outcome })
        }
        "plugin" => {
            let operation = PluginOperation::from_verb(context.get(KEY_OPERATION)?)?;
            let slug = context.get(KEY_SLUG)?.clone();
            Some(Event::PluginOperationFinished {
                slug,
                operation,
                error: failure,
            })
        }
        "open" => {
            if let Some(error) = failure {
                tracing::warn!(url = ?context.get(KEY_URL), error = %error, "failed to open admin url");
            }
            None
        }
        other => {
            tracing::debug!(request = %other, "ignoring result for unknown request");
            None
        }
    }
}

fn failure_message(exit_code: Option<i32>, stderr: &[u8]) -> String {
    let stderr = String::from_utf8_lossy(stderr);
    let line = stderr
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .unwrap_or_default();

    if line.is_empty() {
        format!("wp exited with status {}", exit_code.map_or_else(|| "unknown".to_string(), |c| c.to_string()))
    } else {
        PaletteError::Provider(line.to_string()).to_string()
    }
}

/// Parses a JSON array out of WP-CLI stdout.
///
/// Some commands print `Success: ...` or `Warning: ...` lines before the
/// JSON, so parsing starts at the first line that opens with `[`. Output
/// without such a line is an empty result. Elements that do not fit the
/// record shape are skipped with a warning.
fn parse_records<T: DeserializeOwned>(stdout: &str) -> Result<Vec<T>> {
    let Some(start) = json_start(stdout) else {
        if stdout.trim().is_empty() || stdout.trim_start().starts_with("Success:") {
            return Ok(Vec::new());
        }
        return Err(PaletteError::Provider(format!(
            "unexpected output: {}",
            stdout.lines().next().unwrap_or_default()
        )));
    };

    let values: Vec<serde_json::Value> = serde_json::from_str(stdout[start..].trim_end())?;
    Ok(values
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<T>(value) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(error = %e, "skipping record that does not decode");
                None
            }
        })
        .collect())
}

/// Byte offset of the first line whose first non-blank character is `[`.
fn json_start(stdout: &str) -> Option<usize> {
    let mut offset = 0;
    for line in stdout.split_inclusive('\n') {
        let body = line.trim_start();
        if body.starts_with('[') {
            return Some(offset + line.len() - body.len());
        }
        offset += line.len();
    }
    None
}

fn parse_pool(pool: SearchPool, stdout: &str) -> Result<PoolResults> {
    Ok(match pool {
        SearchPool::Posts => PoolResults::Posts(parse_posts(stdout)?),
        SearchPool::Pages => PoolResults::Pages(parse_posts(stdout)?),
        SearchPool::Plugins => PoolResults::Plugins(
            parse_records::<DirectoryPluginRecord>(stdout)?
                .into_iter()
                .map(|r| Plugin {
                    slug: r.slug,
                    name: r.name.map(|n| decode_entities(&n)),
                    installed: false,
                    active: false,
                })
                .collect(),
        ),
    })
}

fn parse_posts(stdout: &str) -> Result<Vec<Post>> {
    Ok(parse_records::<PostRecord>(stdout)?
        .into_iter()
        .map(|r| Post {
            id: r.id,
            title: r.post_title.map(|t| decode_entities(&t)),
            status: r.post_status,
        })
        .collect())
}

/// Parses `wp plugin list` output.
///
/// # Errors
///
/// Returns [`PaletteError::Decode`] if the array itself is not valid JSON.
pub fn parse_installed(stdout: &str) -> Result<Vec<InstalledPlugin>> {
    Ok(parse_records::<InstalledPluginRecord>(stdout)?
        .into_iter()
        .map(|r| InstalledPlugin {
            active: r
                .status
                .as_deref()
                .is_some_and(|s| s.starts_with("active") || s == "must-use"),
            slug: r.name,
            title: r.title.map(|t| decode_entities(&t)),
        })
        .collect())
}

/// Decodes the handful of HTML entities WordPress puts in titles.
fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    [
        ("&#8217;", "\u{2019}"),
        ("&#8216;", "\u{2018}"),
        ("&#8220;", "\u{201c}"),
        ("&#8221;", "\u{201d}"),
        ("&#8211;", "\u{2013}"),
        ("&#8212;", "\u{2014}"),
        ("&#039;", "'"),
        ("&quot;", "\""),
        ("&lt;", "<"),
        ("&gt;", ">"),
        ("&amp;", "&"),
    ]
    .iter()
    .fold(text.to_string(), |acc, (entity, plain)| acc.replace(entity, plain))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::ProviderRequest;

    fn search_context(token: u64, pool: SearchPool) -> BTreeMap<String, String> {
        ProviderRequest::Search {
            token: QueryToken::new(token),
            pool,
            query: "q".into(),
            limit: 10,
        }
        .context()
    }

    #[test]
    fn decodes_post_list() {
        let stdout = br#"[{"ID":42,"post_title":"Tips &amp; Tricks","post_status":"draft"},{"post_title":"No id"}]"#;
        let event = decode(&search_context(4, SearchPool::Posts), Some(0), stdout, b"").unwrap();

        let Event::SearchCompleted { token, pool, outcome: Ok(PoolResults::Posts(posts)) } = event else {
            panic!("unexpected event");
        };
        assert_eq!(token, QueryToken::new(4));
        assert_eq!(pool, SearchPool::Posts);
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title.as_deref(), Some("Tips & Tricks"));
        assert_eq!(posts[1].id, None);
    }

    #[test]
    fn plugin_search_skips_success_banner() {
        let stdout = b"Success: Showing 1 of 1 plugins.\n[{\"name\":\"Theme X\",\"slug\":\"theme-x\"}]\n";
        let event = decode(&search_context(1, SearchPool::Plugins), Some(0), stdout, b"").unwrap();
        let Event::SearchCompleted { outcome: Ok(PoolResults::Plugins(plugins)), .. } = event else {
            panic!("unexpected event");
        };
        assert_eq!(plugins[0].slug.as_deref(), Some("theme-x"));
        assert!(!plugins[0].installed);
    }

    #[test]
    fn brackets_in_warning_lines_are_not_json() {
        let stdout = b"Warning: [akismet] is using a deprecated hook.\n[{\"name\":\"Akismet\",\"slug\":\"akismet\"}]\n";
        let event = decode(&search_context(5, SearchPool::Plugins), Some(0), stdout, b"").unwrap();
        let Event::SearchCompleted { outcome: Ok(PoolResults::Plugins(plugins)), .. } = event else {
            panic!("unexpected event");
        };
        assert_eq!(plugins.len(), 1);
        assert_eq!(plugins[0].slug.as_deref(), Some("akismet"));
        assert_eq!(json_start("  [1]"), Some(2));
        assert_eq!(json_start("Warning: [x]"), None);
    }

    #[test]
    fn failed_search_reports_stderr() {
        let event = decode(
            &search_context(2, SearchPool::Pages),
            Some(1),
            b"",
            b"\nError: Error establishing a database connection.\n",
        )
        .unwrap();
        let Event::SearchCompleted { outcome: Err(error), .. } = event else {
            panic!("unexpected event");
        };
        assert!(error.contains("database connection"));
    }

    #[test]
    fn garbage_output_is_an_error_not_a_panic() {
        let event = decode(&search_context(2, SearchPool::Posts), Some(0), b"[{\"ID\":", b"").unwrap();
        assert!(matches!(event, Event::SearchCompleted { outcome: Err(_), .. }));
    }

    #[test]
    fn installed_status_maps_to_active_flag() {
        let plugins = parse_installed(
            r#"[{"name":"akismet","title":"Akismet","status":"inactive"},
                {"name":"jetpack","title":"Jetpack","status":"active-network"},
                {"name":"mu","title":"MU","status":"must-use"}]"#,
        )
        .unwrap();
        let active: Vec<bool> = plugins.iter().map(|p| p.active).collect();
        assert_eq!(active, [false, true, true]);
    }

    #[test]
    fn plugin_operation_result() {
        let context = ProviderRequest::Plugin {
            operation: PluginOperation::Activate,
            slug: "p1".into(),
        }
        .context();

        let ok = decode(&context, Some(0), b"Success: Activated 1 of 1 plugins.", b"").unwrap();
        assert_eq!(
            ok,
            Event::PluginOperationFinished { slug: "p1".into(), operation: PluginOperation::Activate, error: None }
        );

        let failed = decode(&context, None, b"", b"").unwrap();
        let Event::PluginOperationFinished { error: Some(error), .. } = failed else {
            panic!("expected failure");
        };
        assert_eq!(error, "wp exited with status unknown");
    }

    #[test]
    fn foreign_results_are_ignored() {
        assert_eq!(decode(&BTreeMap::new(), Some(0), b"[]", b""), None);
    }
}
