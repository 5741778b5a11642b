//! Search and result composition.
//!
//! - [`filter`]: client-side fuzzy filtering of the local pools
//! - [`pools`]: per-category candidate lists and the configurable precedence
//! - [`composer`]: merge, order, and deduplicate into the final list
//! - [`token`]: sequence tokens guarding against stale responses

pub mod composer;
pub mod filter;
pub mod pools;
pub mod token;

pub use composer::{compose, Composition, Intent, NoMatch};
pub use filter::{filter_commands, filter_installed};
pub use pools::{CategoryOrder, Pools, ResultEntry};
pub use token::{QueryToken, QueryTracker};
