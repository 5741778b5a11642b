//! Domain layer for the palette.
//!
//! Core types independent of Zellij and WP-CLI.
//!
//! # Organization
//!
//! - [`command`]: static palette commands
//! - [`context`]: read-only host context (admin URL, capabilities)
//! - [`entity`]: search result entities and categories
//! - [`error`]: error types and result alias

pub mod command;
pub mod context;
pub mod entity;
pub mod error;

pub use command::{builtin_commands, Command, CommandAction};
pub use context::HostContext;
pub use entity::{Category, EntityKey, InstalledPlugin, Page, Plugin, Post, SearchResultItem};
pub use error::{PaletteError, Result};
