//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event; the
//! plugin shim executes them in order. Actions are the boundary between the
//! pure controller and Zellij: nothing in the library calls Zellij directly.
//!
//! # Example
//!
//! ```rust
//! use wp_palette::app::Action;
//! use wp_palette::provider::ProviderRequest;
//!
//! let actions = vec![
//!     Action::Provider(ProviderRequest::Open { url: "http://localhost/wp-admin/".into() }),
//!     Action::CloseFocus,
//! ];
//! assert_eq!(actions.len(), 2);
//! ```

use crate::provider::ProviderRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the floating pane.
    CloseFocus,

    /// Runs a collaborator request through WP-CLI (or the URL opener).
    ///
    /// The result comes back later as a `RunCommandResult` carrying the
    /// request's context map.
    Provider(ProviderRequest),

    /// Arms a one-shot timer; its expiry is delivered as `Event::TimerElapsed`.
    ScheduleTimer {
        /// Delay in milliseconds.
        millis: u64,
    },
}
