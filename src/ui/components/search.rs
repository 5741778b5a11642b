//! Search bar component renderer.

use crate::ui::helpers::{char_len, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

/// Renders the 3-line bordered query box. Returns the next row.
///
/// ```text
/// [margin] ┌──────────────────┐ [margin]
/// [margin] │ > query▏    ...  │ [margin]
/// [margin] └──────────────────┘ [margin]
/// ```
///
/// While remote searches are running the right edge shows `searching...`.
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);

    render_box_edge(row, '┌', '┐', inner_width, theme);

    let indicator = if search.loading { "searching... " } else { "" };
    let text_width = inner_width.saturating_sub(indicator.len());
    let search_text = truncate(&format!(" > {}▏", search.query), text_width);
    let padding = text_width.saturating_sub(char_len(&search_text));

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("│");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{search_text}");
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{indicator}");
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("│");
    print!("{}", Theme::reset());

    render_box_edge(row + 2, '└', '┘', inner_width, theme);

    row + 3
}

/// Renders the box frame with a dimmed caption where the query would be.
pub fn render_caption_box(row: usize, caption: &str, theme: &Theme, cols: usize) -> usize {
    let inner_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2).saturating_sub(2);
    let caption = truncate(&format!(" {caption}"), inner_width);

    render_box_edge(row, '┌', '┐', inner_width, theme);

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("│");
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{caption}");
    print!("{}", " ".repeat(inner_width.saturating_sub(char_len(&caption))));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("│");
    print!("{}", Theme::reset());

    render_box_edge(row + 2, '└', '┘', inner_width, theme);
    row + 3
}

fn render_box_edge(row: usize, left: char, right: char, inner_width: usize, theme: &Theme) {
    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("{left}{}{right}", "─".repeat(inner_width));
    print!("{}", Theme::reset());
}
