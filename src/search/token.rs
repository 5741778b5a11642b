//! Sequence tokens for last-query-wins.
//!
//! Every remote search dispatch is tagged with a fresh token. A response is
//! applied only if it carries the token issued most recently; anything older
//! belongs to a superseded query and is dropped.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QueryToken(u64);

impl QueryToken {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for QueryToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Issues monotonically increasing tokens and remembers the latest one.
#[derive(Debug, Clone, Default)]
pub struct QueryTracker {
    next: u64,
    current: Option<QueryToken>,
}

impl QueryTracker {
    /// Issues a new token, superseding every earlier one.
    pub fn issue(&mut self) -> QueryToken {
        self.next += 1;
        let token = QueryToken(self.next);
        self.current = Some(token);
        token
    }

    /// Supersedes every outstanding token without issuing a new one.
    pub fn invalidate(&mut self) {
        self.current = None;
    }

    #[must_use]
    pub fn is_current(&self, token: QueryToken) -> bool {
        self.current == Some(token)
    }
}
