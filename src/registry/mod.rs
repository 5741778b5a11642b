//! Item renderer registry.
//!
//! Every entity type supports two explicit operations:
//!
//! - **render**: a pure function producing an [`ItemView`] (icon, title,
//!   status badge, hint)
//! - **activate**: a function producing the [`Effect`] the controller should
//!   execute when the item is chosen
//!
//! Dispatch goes through the [`SearchResultItem`] tagged union, so adding a
//! variant without a renderer is a compile error.
//!
//! Renderers fail closed: an item missing its id or slug renders a fallback
//! title without a badge, and activating it yields [`Effect::None`].
//!
//! # Example
//!
//! ```rust
//! use wp_palette::domain::{HostContext, Post, SearchResultItem};
//! use wp_palette::registry::{self, Effect, OperationTracker, RenderContext};
//!
//! let host = HostContext::default();
//! let operations = OperationTracker::new();
//! let ctx = RenderContext::new(&host, &operations);
//!
//! let item = SearchResultItem::Post(Post { id: Some(42), title: Some("Hello".into()), status: Some("draft".into()) });
//! assert_eq!(registry::render(&item, &ctx).badge.unwrap().to_string(), "Draft");
//! assert!(matches!(registry::activate(&item, &ctx), Effect::Navigate { .. }));
//! ```

pub mod command;
pub mod effect;
pub mod operations;
pub mod plugin;
pub mod post;
pub mod view;

pub use effect::Effect;
pub use operations::{OperationState, OperationTracker, PluginOperation};
pub use view::{Badge, Icon, ItemView};

use crate::domain::{HostContext, SearchResultItem};

/// Read-only inputs shared by all renderers.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub host: &'a HostContext,
    pub operations: &'a OperationTracker,
}

impl<'a> RenderContext<'a> {
    #[must_use]
    pub const fn new(host: &'a HostContext, operations: &'a OperationTracker) -> Self {
        Self { host, operations }
    }
}

/// Render/activate pair for one entity type.
pub trait EntityRenderer {
    type Item;

    fn render(item: &Self::Item, ctx: &RenderContext<'_>) -> ItemView;

    fn activate(item: &Self::Item, ctx: &RenderContext<'_>) -> Effect;
}

/// Renders any search result.
#[must_use]
pub fn render(item: &SearchResultItem, ctx: &RenderContext<'_>) -> ItemView {
    match item {
        SearchResultItem::Post(p) => post::PostRenderer::render(p, ctx),
        SearchResultItem::Page(p) => post::PageRenderer::render(p, ctx),
        SearchResultItem::Plugin(p) => plugin::PluginRenderer::render(p, ctx),
        SearchResultItem::InstalledPlugin(p) => plugin::InstalledPluginRenderer::render(p, ctx),
    }
}

/// Computes the effect of choosing any search result.
#[must_use]
pub fn activate(item: &SearchResultItem, ctx: &RenderContext<'_>) -> Effect {
    match item {
        SearchResultItem::Post(p) => post::PostRenderer::activate(p, ctx),
        SearchResultItem::Page(p) => post::PageRenderer::activate(p, ctx),
        SearchResultItem::Plugin(p) => plugin::PluginRenderer::activate(p, ctx),
        SearchResultItem::InstalledPlugin(p) => plugin::InstalledPluginRenderer::activate(p, ctx),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{InstalledPlugin, Plugin, Post};

    fn plugin(slug: &str, installed: bool, active: bool) -> SearchResultItem {
        SearchResultItem::Plugin(Plugin {
            slug: Some(slug.to_string()),
            name: Some(slug.to_uppercase()),
            installed,
            active,
        })
    }

    #[test]
    fn draft_post_renders_badge_and_navigates_to_edit_screen() {
        let host = HostContext::default();
        let ops = OperationTracker::new();
        let ctx = RenderContext::new(&host, &ops);
        let item = SearchResultItem::Post(Post {
            id: Some(42),
            title: Some("Launch notes".into()),
            status: Some("draft".into()),
        });

        let view = render(&item, &ctx);
        assert_eq!(view.badge, Some(Badge::Draft));
        assert_eq!(view.icon, Icon::Post);

        let Effect::Navigate { url } = activate(&item, &ctx) else {
            panic!("expected navigation");
        };
        assert!(url.contains("post=42"));
        assert!(activate(&item, &ctx).closes_bar());
    }

    #[test]
    fn installed_inactive_plugin_activates() {
        let host = HostContext::default();
        let ops = OperationTracker::new();
        let ctx = RenderContext::new(&host, &ops);
        let item = plugin("p1", true, false);

        assert_eq!(render(&item, &ctx).badge, Some(Badge::Activate));
        assert_eq!(activate(&item, &ctx), Effect::ActivatePlugin("p1".into()));
    }

    #[test]
    fn plugin_lifecycle_badges() {
        let host = HostContext::default();
        let mut ops = OperationTracker::new();

        {
            let ctx = RenderContext::new(&host, &ops);
            assert_eq!(render(&plugin("x", false, false), &ctx).badge, Some(Badge::Install));
            assert_eq!(render(&plugin("x", true, true), &ctx).badge, Some(Badge::Active));
            assert_eq!(activate(&plugin("x", true, true), &ctx), Effect::None);
        }

        ops.begin("x", PluginOperation::Install);
        {
            let ctx = RenderContext::new(&host, &ops);
            assert_eq!(render(&plugin("x", false, false), &ctx).badge, Some(Badge::Installing));
            assert_eq!(activate(&plugin("x", false, false), &ctx), Effect::None);
        }

        ops.fail("x", PluginOperation::Install);
        let ctx = RenderContext::new(&host, &ops);
        assert_eq!(render(&plugin("x", false, false), &ctx).badge, Some(Badge::Failed));
        assert_eq!(activate(&plugin("x", false, false), &ctx), Effect::InstallPlugin("x".into()));
    }

    #[test]
    fn malformed_items_fail_closed() {
        let host = HostContext::default();
        let ops = OperationTracker::new();
        let ctx = RenderContext::new(&host, &ops);

        let post = SearchResultItem::Page(Post { id: None, title: None, status: Some("publish".into()) });
        let view = render(&post, &ctx);
        assert_eq!(view.title, "(untitled)");
        assert_eq!(view.badge, None);
        assert_eq!(activate(&post, &ctx), Effect::None);

        let plugin = SearchResultItem::Plugin(Plugin::default());
        assert_eq!(render(&plugin, &ctx).title, "(unknown plugin)");
        assert_eq!(activate(&plugin, &ctx), Effect::None);

        let installed = SearchResultItem::InstalledPlugin(InstalledPlugin::default());
        assert_eq!(render(&installed, &ctx).badge, None);
        assert_eq!(activate(&installed, &ctx), Effect::None);
    }

    #[test]
    fn installed_plugin_forwards_to_detail_view() {
        let host = HostContext::default();
        let ops = OperationTracker::new();
        let ctx = RenderContext::new(&host, &ops);
        let installed = InstalledPlugin {
            slug: Some("akismet".into()),
            title: Some("Akismet".into()),
            active: false,
        };
        let item = SearchResultItem::InstalledPlugin(installed.clone());

        assert_eq!(render(&item, &ctx).badge, Some(Badge::Inactive));
        assert_eq!(activate(&item, &ctx), Effect::OpenPluginDetail(installed));
    }
}
