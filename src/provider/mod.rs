//! WP-CLI bridge implementing the external collaborators.
//!
//! The palette core only sees [`ProviderRequest`]s going out (as
//! [`Action`](crate::app::Action)s) and [`Event`](crate::app::Event)s coming
//! back. This module is the glue in between:
//!
//! ```text
//! Action::Provider(request) ──▶ WpCli::argv + request.context() ──▶ run_command
//!                                                                      │
//! Event ◀── response::decode(context, exit code, stdout, stderr) ◀─────┘
//! ```
//!
//! - [`request`]: argv and context construction
//! - [`response`]: output parsing into events

pub mod request;
pub mod response;

pub use request::{ProviderRequest, SearchPool, WpCli};
pub use response::decode;
