//! Renderers for directory plugins and installed plugins.
//!
//! Directory plugins act directly (install, then activate). Installed plugins
//! never act on their own; activating one opens the detail view where the
//! user picks what to do.

use super::operations::{OperationState, PluginOperation};
use super::view::Badge;
use super::{EntityRenderer, Effect, Icon, ItemView, RenderContext};
use crate::domain::{InstalledPlugin, Plugin};

const UNKNOWN_PLUGIN: &str = "(unknown plugin)";

pub struct PluginRenderer;
pub struct InstalledPluginRenderer;

fn valid_slug(slug: Option<&String>) -> Option<&str> {
    slug.map(String::as_str).filter(|s| !s.trim().is_empty())
}

/// Badge for an operation that is running or has failed, if any.
fn operation_badge(ctx: &RenderContext<'_>, slug: &str) -> Option<Badge> {
    ctx.operations.get(slug).map(|state| match state {
        OperationState::InFlight(PluginOperation::Install) => Badge::Installing,
        OperationState::InFlight(PluginOperation::Activate) => Badge::Activating,
        OperationState::InFlight(PluginOperation::Deactivate) => Badge::Deactivating,
        OperationState::Failed(_) => Badge::Failed,
    })
}

impl EntityRenderer for PluginRenderer {
    type Item = Plugin;

    fn render(item: &Plugin, ctx: &RenderContext<'_>) -> ItemView {
        let Some(slug) = valid_slug(item.slug.as_ref()) else {
            return ItemView {
                icon: Icon::Plugin,
                title: item.name.clone().unwrap_or_else(|| UNKNOWN_PLUGIN.to_string()),
                badge: None,
                hint: String::new(),
            };
        };

        let (state_badge, hint) = match (item.installed, item.active) {
            (false, _) => (Badge::Install, "Install plugin"),
            (true, false) => (Badge::Activate, "Activate plugin"),
            (true, true) => (Badge::Active, "Already active"),
        };
        let badge = operation_badge(ctx, slug).unwrap_or(state_badge);
        let hint = if ctx.operations.is_in_flight(slug) { "Working..." } else { hint };

        ItemView {
            icon: Icon::Plugin,
            title: item
                .name
                .as_deref()
                .filter(|n| !n.trim().is_empty())
                .unwrap_or(slug)
                .to_string(),
            badge: Some(badge),
            hint: hint.to_string(),
        }
    }

    fn activate(item: &Plugin, ctx: &RenderContext<'_>) -> Effect {
        let Some(slug) = valid_slug(item.slug.as_ref()) else {
            tracing::warn!(name = ?item.name, "activated plugin without a slug, ignoring");
            return Effect::None;
        };

        if ctx.operations.is_in_flight(slug) {
            tracing::debug!(slug = %slug, "plugin operation already running");
            return Effect::None;
        }

        match (item.installed, item.active) {
            (false, _) => Effect::InstallPlugin(slug.to_string()),
            (true, false) => Effect::ActivatePlugin(slug.to_string()),
            (true, true) => Effect::None,
        }
    }
}

impl InstalledPluginRenderer {
    /// One-line description for the detail view header.
    #[must_use]
    pub fn summary(item: &InstalledPlugin, ctx: &RenderContext<'_>) -> String {
        let view = Self::render(item, ctx);
        match (view.badge, item.slug.as_deref()) {
            (Some(badge), Some(slug)) if view.title != slug => format!("{} ({slug}): {badge}", view.title),
            (Some(badge), _) => format!("{}: {badge}", view.title),
            (None, _) => view.title,
        }
    }
}

impl EntityRenderer for InstalledPluginRenderer {
    type Item = InstalledPlugin;

    fn render(item: &InstalledPlugin, ctx: &RenderContext<'_>) -> ItemView {
        let title = item.display_name().unwrap_or(UNKNOWN_PLUGIN).to_string();
        let Some(slug) = valid_slug(item.slug.as_ref()) else {
            return ItemView {
                icon: Icon::InstalledPlugin,
                title,
                badge: None,
                hint: String::new(),
            };
        };

        let state_badge = if item.active { Badge::Active } else { Badge::Inactive };

        ItemView {
            icon: Icon::InstalledPlugin,
            title,
            badge: Some(operation_badge(ctx, slug).unwrap_or(state_badge)),
            hint: "Manage".to_string(),
        }
    }

    fn activate(item: &InstalledPlugin, _ctx: &RenderContext<'_>) -> Effect {
        if valid_slug(item.slug.as_ref()).is_none() {
            tracing::warn!(title = ?item.title, "activated installed plugin without a slug, ignoring");
            return Effect::None;
        }
        Effect::OpenPluginDetail(item.clone())
    }
}
