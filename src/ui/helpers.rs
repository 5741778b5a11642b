//! Shared rendering utilities.
//!
//! Low-level helpers used across the UI components: cursor positioning, glyphs,
//! width-aware truncation, and fuzzy match highlighting. All width arithmetic
//! is done in characters, never bytes, so titles with multi-byte characters
//! line up.

use crate::registry::Icon;
use crate::ui::theme::Theme;

/// Moves the cursor to `row`, `col` (both 1-indexed).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Glyph drawn in the icon column.
#[must_use]
pub const fn icon_glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Command => "›",
        Icon::Post => "✎",
        Icon::Page => "▤",
        Icon::Plugin => "⬇",
        Icon::InstalledPlugin => "⚙",
        Icon::Search => "⌕",
    }
}

/// Number of characters in `text`.
#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to at most `width` characters, ending in `…` when shortened.
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if char_len(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(width - 1).collect();
    out.push('…');
    out
}

/// Prints `text` with the character ranges in `ranges` highlighted.
///
/// Ranges are `(start, end)` character indices, end exclusive. When
/// `is_active` is set the row already has the selection background, so after
/// each highlight the selection colors are restored rather than reset.
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)], theme: &Theme, is_active: bool) {
    if ranges.is_empty() {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }

        let normal_section: String = chars[current_pos..start].iter().collect();
        print!("{normal_section}");

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());

        if is_active {
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_counts_characters() {
        assert_eq!(truncate("Über uns", 20), "Über uns");
        assert_eq!(truncate("Über uns", 4), "Übe…");
        assert_eq!(truncate("abc", 0), "");
        assert_eq!(char_len("Über"), 4);
    }
}
