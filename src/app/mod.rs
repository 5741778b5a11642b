//! Application layer coordinating state, events, and actions.
//!
//! This module is the command bar controller. It sits between the plugin
//! runtime (main.rs) and the search/registry/provider layers.
//!
//! # Architecture
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └────── WP-CLI Command Results ────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Bar lifecycle and view types
//! - [`selection`]: Keyboard/pointer selection over the result list
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod selection;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event, PoolResults};
pub use modes::{BarState, DetailAction, View};
pub use selection::SelectionState;
pub use state::{AppState, PaletteSettings};
