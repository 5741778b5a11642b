//! Result composition: merges the pools into one ordered list.
//!
//! # Algorithm
//!
//! 1. Empty query: the static commands alone, declared order, grouped by
//!    category.
//! 2. Non-empty query with every pool empty: a [`NoMatch`] sentinel carrying
//!    the raw query and two deep-link affordances.
//! 3. Otherwise: pools concatenated in [`CategoryOrder`], each keeping its
//!    internal (relevance) order.
//! 4. Duplicate `(category, key)` pairs keep their first occurrence. Entries
//!    without a key are never merged.
//!
//! Relevance inside a pool is the search collaborator's job; the composer
//! only merges and orders categories.

use super::pools::{CategoryOrder, Pools, ResultEntry};
use crate::domain::{Category, Command, EntityKey};
use std::collections::HashSet;

/// Follow-up offered by the no-match sentinel, consumed by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    SearchPosts(String),
    SearchPages(String),
}

impl Intent {
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::SearchPosts(q) => format!("Search posts for \"{q}\""),
            Self::SearchPages(q) => format!("Search pages for \"{q}\""),
        }
    }
}

/// Sentinel shown when a non-empty query matched nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoMatch {
    /// The query exactly as typed.
    pub query: String,
}

impl NoMatch {
    /// Number of selectable affordances.
    pub const AFFORDANCES: usize = 2;

    #[must_use]
    pub fn affordances(&self) -> [Intent; Self::AFFORDANCES] {
        [
            Intent::SearchPosts(self.query.clone()),
            Intent::SearchPages(self.query.clone()),
        ]
    }

    #[must_use]
    pub fn intent(&self, index: usize) -> Option<Intent> {
        self.affordances().into_iter().nth(index)
    }
}

/// Output of [`compose`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Composition {
    Results(Vec<ResultEntry>),
    NoMatch(NoMatch),
}

impl Composition {
    /// Number of navigable rows (affordances for the sentinel).
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Results(entries) => entries.len(),
            Self::NoMatch(_) => NoMatch::AFFORDANCES,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn entries(&self) -> &[ResultEntry] {
        match self {
            Self::Results(entries) => entries,
            Self::NoMatch(_) => &[],
        }
    }
}

impl Default for Composition {
    fn default() -> Self {
        Self::Results(Vec::new())
    }
}

/// Composes the ordered, deduplicated result list for `query`.
///
/// `commands` is the full static list (used for the empty query); `pools`
/// holds the already-filtered candidates for a non-empty query.
#[must_use]
pub fn compose(query: &str, commands: &[Command], pools: &Pools, order: &CategoryOrder) -> Composition {
    let _span = tracing::debug_span!("compose", query_len = query.len()).entered();

    if query.trim().is_empty() {
        return Composition::Results(group_commands(commands));
    }

    let mut seen: HashSet<(Category, EntityKey)> = HashSet::new();
    let mut entries = Vec::new();

    for &category in order.as_slice() {
        for entry in pools.entries(category) {
            if let Some(key) = entry.key() {
                if !seen.insert((category, key)) {
                    tracing::trace!(category = %category, "dropping duplicate entry");
                    continue;
                }
            }
            entries.push(entry);
        }
    }

    if entries.is_empty() {
        tracing::debug!("no pool matched, showing sentinel");
        return Composition::NoMatch(NoMatch {
            query: query.to_string(),
        });
    }

    tracing::debug!(result_count = entries.len(), "results composed");
    Composition::Results(entries)
}

/// Stable group-by on first appearance of each command category.
fn group_commands(commands: &[Command]) -> Vec<ResultEntry> {
    let mut groups: Vec<&str> = Vec::new();
    for command in commands {
        if !groups.contains(&command.category) {
            groups.push(command.category);
        }
    }

    groups
        .iter()
        .flat_map(|group| commands.iter().filter(move |c| c.category == *group))
        .cloned()
        .map(ResultEntry::Command)
        .collect()
}
