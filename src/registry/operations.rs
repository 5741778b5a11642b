//! Per-plugin tracking of install/activate/deactivate operations.
//!
//! The executors run asynchronously; while one is in flight the plugin's
//! badge shows its progress, and when it fails the badge shows `Failed` until
//! the user retries. Keys are plugin slugs.

use std::collections::HashMap;

/// A plugin operation the palette can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluginOperation {
    Install,
    Activate,
    Deactivate,
}

impl PluginOperation {
    /// WP-CLI subcommand name (`wp plugin <verb> <slug>`).
    #[must_use]
    pub const fn verb(self) -> &'static str {
        match self {
            Self::Install => "install",
            Self::Activate => "activate",
            Self::Deactivate => "deactivate",
        }
    }

    #[must_use]
    pub fn from_verb(verb: &str) -> Option<Self> {
        match verb {
            "install" => Some(Self::Install),
            "activate" => Some(Self::Activate),
            "deactivate" => Some(Self::Deactivate),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationState {
    InFlight(PluginOperation),
    Failed(PluginOperation),
}

/// Operation status keyed by plugin slug.
#[derive(Debug, Clone, Default)]
pub struct OperationTracker {
    states: HashMap<String, OperationState>,
}

impl OperationTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, slug: &str) -> Option<OperationState> {
        self.states.get(slug).copied()
    }

    #[must_use]
    pub fn is_in_flight(&self, slug: &str) -> bool {
        matches!(self.get(slug), Some(OperationState::InFlight(_)))
    }

    /// Marks `operation` as started. Returns `false` (and changes nothing)
    /// when another operation for the slug is still running.
    pub fn begin(&mut self, slug: &str, operation: PluginOperation) -> bool {
        if self.is_in_flight(slug) {
            return false;
        }
        self.states
            .insert(slug.to_string(), OperationState::InFlight(operation));
        true
    }

    /// Clears the slug after a successful run.
    pub fn complete(&mut self, slug: &str) {
        self.states.remove(slug);
    }

    pub fn fail(&mut self, slug: &str, operation: PluginOperation) {
        self.states
            .insert(slug.to_string(), OperationState::Failed(operation));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_refuses_while_in_flight() {
        let mut tracker = OperationTracker::new();
        assert!(tracker.begin("hello-dolly", PluginOperation::Install));
        assert!(!tracker.begin("hello-dolly", PluginOperation::Activate));
        assert_eq!(
            tracker.get("hello-dolly"),
            Some(OperationState::InFlight(PluginOperation::Install))
        );
    }

    #[test]
    fn failure_allows_retry() {
        let mut tracker = OperationTracker::new();
        tracker.begin("p1", PluginOperation::Activate);
        tracker.fail("p1", PluginOperation::Activate);
        assert!(!tracker.is_in_flight("p1"));
        assert!(tracker.begin("p1", PluginOperation::Activate));
        tracker.complete("p1");
        assert_eq!(tracker.get("p1"), None);
    }

    #[test]
    fn verbs_round_trip() {
        for op in [PluginOperation::Install, PluginOperation::Activate, PluginOperation::Deactivate] {
            assert_eq!(PluginOperation::from_verb(op.verb()), Some(op));
        }
        assert_eq!(PluginOperation::from_verb("delete"), None);
    }
}
