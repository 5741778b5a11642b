//! Client-side fuzzy filtering for the pools held locally.
//!
//! Static commands and the installed plugin list never leave the plugin, so
//! they are filtered here with the Skim matcher. Every whitespace-separated
//! token of the query must match one of the candidate's haystacks; candidates
//! are ordered by total score, ties keeping their original order.

use crate::domain::{Command, InstalledPlugin};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

fn tokenize(query: &str) -> Vec<String> {
    query.split_whitespace().map(str::to_lowercase).collect()
}

/// Sum of the best per-token scores, or `None` if any token misses.
fn score(matcher: &SkimMatcherV2, haystacks: &[&str], tokens: &[String]) -> Option<i64> {
    let haystacks: Vec<String> = haystacks.iter().map(|h| h.to_lowercase()).collect();

    tokens.iter().try_fold(0_i64, |total, token| {
        haystacks
            .iter()
            .filter_map(|h| matcher.fuzzy_match(h, token))
            .max()
            .map(|best| total + best)
    })
}

fn rank<T: Clone>(candidates: &[T], query: &str, haystacks: impl Fn(&T) -> Vec<&str>) -> Vec<T> {
    let tokens = tokenize(query);
    if tokens.is_empty() {
        return candidates.to_vec();
    }

    let matcher = SkimMatcherV2::default();
    let mut scored: Vec<(i64, &T)> = candidates
        .iter()
        .filter_map(|c| score(&matcher, &haystacks(c), &tokens).map(|s| (s, c)))
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    scored.into_iter().map(|(_, c)| c.clone()).collect()
}

/// Commands matching `query` on title or keywords, best first.
#[must_use]
pub fn filter_commands(commands: &[Command], query: &str) -> Vec<Command> {
    let _span = tracing::trace_span!("filter_commands", total = commands.len()).entered();

    rank(commands, query, |command| {
        let mut haystacks = vec![command.title];
        haystacks.extend_from_slice(command.keywords);
        haystacks
    })
}

/// Installed plugins matching `query` on title or slug, best first.
#[must_use]
pub fn filter_installed(plugins: &[InstalledPlugin], query: &str) -> Vec<InstalledPlugin> {
    let _span = tracing::trace_span!("filter_installed", total = plugins.len()).entered();

    rank(plugins, query, |plugin| {
        plugin
            .title
            .as_deref()
            .into_iter()
            .chain(plugin.slug.as_deref())
            .collect()
    })
}
