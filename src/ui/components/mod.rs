//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: Title bar
//! - [`search`]: Query input box (or the caption box in the detail view)
//! - [`list`]: Result rows with group, icon, title, badge, and hint columns
//! - [`empty`]: No-match sentinel message
//! - [`footer`]: Status line and keybinding hints
//!
//! # Layout
//!
//! ```text
//! row 1           [blank]
//! row 2           [Header]
//! row 3           [Border]
//! rows 4-6        [Search bar | caption box]
//! row 7..         [No-match message, 3 lines]   (only when nothing matched)
//!                 [Result rows]
//!                 [Blank padding to fill screen]
//! rows - 2        [Status line]
//! rows - 1        [Border]
//! rows            [Footer]
//! ```

mod empty;
mod footer;
mod header;
mod list;
mod search;

use crate::app::state::LIST_FIRST_ROW;
use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use empty::render_empty_state;
use footer::{render_footer, render_status};
use header::render_header;
use list::render_rows;
use search::{render_caption_box, render_search_bar};

/// Renders a horizontal border line. Returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full pane layout for `vm`.
pub fn render_layout(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = match &vm.search_bar {
        Some(search) => render_search_bar(current_row, search, theme, cols),
        None => render_caption_box(current_row, "Choose an action", theme, cols),
    };
    debug_assert_eq!(current_row, LIST_FIRST_ROW);

    let footer_row = rows;
    let border_row = footer_row.saturating_sub(1);
    let status_row = border_row.saturating_sub(1);

    if let Some(empty) = &vm.empty_state {
        current_row = render_empty_state(current_row, empty, theme, cols);
    }
    render_rows(current_row, &vm.rows, theme, cols, status_row.saturating_sub(1));

    render_status(status_row, vm.status.as_ref(), theme, cols);
    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}
