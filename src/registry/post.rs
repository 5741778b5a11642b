//! Renderers for posts and pages.

use super::{EntityRenderer, Effect, Icon, ItemView, RenderContext};
use super::view::Badge;
use crate::domain::{Page, Post};

const UNTITLED: &str = "(untitled)";

pub struct PostRenderer;
pub struct PageRenderer;

impl EntityRenderer for PostRenderer {
    type Item = Post;

    fn render(item: &Post, _ctx: &RenderContext<'_>) -> ItemView {
        view(item, Icon::Post, "Edit post")
    }

    fn activate(item: &Post, ctx: &RenderContext<'_>) -> Effect {
        edit(item, ctx, "post")
    }
}

impl EntityRenderer for PageRenderer {
    type Item = Page;

    fn render(item: &Page, _ctx: &RenderContext<'_>) -> ItemView {
        view(item, Icon::Page, "Edit page")
    }

    fn activate(item: &Page, ctx: &RenderContext<'_>) -> Effect {
        edit(item, ctx, "page")
    }
}

fn view(item: &Post, icon: Icon, hint: &str) -> ItemView {
    let title = item
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(UNTITLED);

    ItemView {
        icon,
        title: title.to_string(),
        badge: item.id.and(item.status.as_deref()).and_then(Badge::for_post_status),
        hint: if item.id.is_some() { hint.to_string() } else { String::new() },
    }
}

fn edit(item: &Post, ctx: &RenderContext<'_>, kind: &str) -> Effect {
    let Some(id) = item.id else {
        tracing::warn!(kind = kind, title = ?item.title, "activated entry without an id, ignoring");
        return Effect::None;
    };

    Effect::Navigate {
        url: ctx.host.edit_post_url(id),
    }
}
