//! Footer and status line renderers.

use crate::ui::helpers::{char_len, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FooterInfo, StatusLine};

/// Renders centered keybinding help. Returns the next row.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let help_text = truncate(&footer.keybindings, cols);
    let text_len = char_len(&help_text);
    let padding = (cols.saturating_sub(text_len)) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(padding));
    print!("{help_text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the latest error, or clears the line when there is none.
pub fn render_status(row: usize, status: Option<&StatusLine>, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    match status {
        Some(status) => {
            let message = truncate(&format!(" {}", status.message), cols);
            print!("{}", Theme::fg(&theme.colors.error_fg));
            print!("{message}");
            print!("{}", " ".repeat(cols.saturating_sub(char_len(&message))));
            print!("{}", Theme::reset());
        }
        None => print!("{}", " ".repeat(cols)),
    }
    row + 1
}
