//! Renderer for static commands.

use super::{Effect, Icon, ItemView, RenderContext};
use crate::domain::{Command, CommandAction};

#[must_use]
pub fn render(command: &Command) -> ItemView {
    ItemView {
        icon: Icon::Command,
        title: command.title.to_string(),
        badge: None,
        hint: command.category.to_string(),
    }
}

#[must_use]
pub fn activate(command: &Command, ctx: &RenderContext<'_>) -> Effect {
    match command.action {
        CommandAction::Navigate(path) => Effect::Navigate {
            url: ctx.host.admin_path(path),
        },
        CommandAction::RefreshPlugins => Effect::RefreshPlugins,
    }
}
