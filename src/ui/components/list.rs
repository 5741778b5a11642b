//! Result list renderer.
//!
//! Each row is laid out as:
//!
//! ```text
//! GROUP         ✎ Title with highlights ........ [Badge]  hint
//! ```
//!
//! The group column is filled only on the first row of a category. The active
//! row (hovered, else selected) gets the selection background across the
//! full width.

use crate::ui::helpers::{self, char_len, icon_glyph, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayRow;

/// Width of the category label column.
const GROUP_WIDTH: usize = 18;

/// Widest hint shown before it is cut.
const HINT_WIDTH: usize = 18;

/// Renders `items` from `row` down, then blanks the rest up to `last_row`.
/// Returns the next row.
pub fn render_rows(row: usize, items: &[DisplayRow], theme: &Theme, cols: usize, last_row: usize) -> usize {
    let mut current_row = row;
    for item in items {
        if current_row > last_row {
            break;
        }
        current_row = render_row(current_row, item, theme, cols);
    }
    while current_row <= last_row {
        position_cursor(current_row, 1);
        print!("{}", " ".repeat(cols));
        current_row += 1;
    }
    current_row
}

fn render_row(row: usize, item: &DisplayRow, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let base = || {
        if item.is_active {
            format!("{}{}", Theme::fg(&theme.colors.selection_fg), Theme::bg(&theme.colors.selection_bg))
        } else {
            Theme::fg(&theme.colors.text_normal)
        }
    };

    let group = truncate(item.group.as_deref().unwrap_or_default(), GROUP_WIDTH - 1);
    print!("{}", Theme::fg(&theme.colors.group_fg));
    print!("{group}{}", " ".repeat(GROUP_WIDTH - char_len(&group)));
    print!("{}", Theme::reset());

    let badge = item.badge.as_deref().map(|b| format!("[{b}] ")).unwrap_or_default();
    let hint = truncate(&item.hint, HINT_WIDTH);
    let right_len = char_len(&badge) + char_len(&hint) + 1;
    let title_width = cols.saturating_sub(GROUP_WIDTH + 2 + right_len);
    let title = truncate(&item.title, title_width);

    print!("{}", base());
    print!("{} ", icon_glyph(item.icon));
    helpers::render_highlighted_text(&title, &item.highlight_ranges, theme, item.is_active);
    print!("{}", " ".repeat(title_width.saturating_sub(char_len(&title))));

    if !badge.is_empty() {
        let badge_color = if item.badge_is_error {
            &theme.colors.error_fg
        } else {
            &theme.colors.badge_fg
        };
        if !item.is_active {
            print!("{}", Theme::fg(badge_color));
        }
        print!("{badge}");
        print!("{}", base());
    }

    if !item.is_active {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{hint} ");

    let used = GROUP_WIDTH + 2 + title_width + right_len;
    print!("{}", " ".repeat(cols.saturating_sub(used)));
    print!("{}", Theme::reset());
    row + 1
}
