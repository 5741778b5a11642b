//! Keyboard and pointer selection over the flattened result list.
//!
//! `selected` is driven by the arrow keys and always stays inside
//! `[0, len - 1]`; `hover` is set by the pointer and cleared when it leaves
//! the list. The active item is the hovered one if any, else the selected one.

/// Selection over a list whose length is supplied on every call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<usize>,
    hover: Option<usize>,
}

impl SelectionState {
    /// Selection starting on the first row of a non-empty list.
    #[must_use]
    pub const fn first(len: usize) -> Self {
        Self {
            selected: if len == 0 { None } else { Some(0) },
            hover: None,
        }
    }

    #[must_use]
    pub const fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub const fn hover(&self) -> Option<usize> {
        self.hover
    }

    /// The row Enter acts on.
    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.hover.or(self.selected)
    }

    /// Moves down one row, wrapping from the last row to the first.
    pub fn move_down(&mut self, len: usize) {
        if len == 0 {
            self.clear();
            return;
        }
        self.hover = None;
        self.selected = Some(self.selected.map_or(0, |i| (i + 1) % len));
    }

    /// Moves up one row, wrapping from the first row to the last.
    pub fn move_up(&mut self, len: usize) {
        if len == 0 {
            self.clear();
            return;
        }
        self.hover = None;
        self.selected = Some(match self.selected {
            Some(0) | None => len - 1,
            Some(i) => (i - 1).min(len - 1),
        });
    }

    /// Pointer entered row `index`; out-of-range rows count as leaving.
    pub fn set_hover(&mut self, index: usize, len: usize) {
        self.hover = (index < len).then_some(index);
    }

    pub fn clear_hover(&mut self) {
        self.hover = None;
    }

    /// Re-establishes the bounds after the list changed size.
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.clear();
            return;
        }
        self.selected = self.selected.map(|i| i.min(len - 1));
        self.hover = self.hover.filter(|&i| i < len);
    }

    pub fn clear(&mut self) {
        self.selected = None;
        self.hover = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_down_wraps_to_first_row() {
        let mut sel = SelectionState::first(3);
        sel.move_down(3);
        sel.move_down(3);
        assert_eq!(sel.selected(), Some(2));
        sel.move_down(3);
        assert_eq!(sel.selected(), Some(0));
    }

    #[test]
    fn arrow_up_wraps_to_last_row() {
        let mut sel = SelectionState::first(4);
        sel.move_up(4);
        assert_eq!(sel.selected(), Some(3));
    }

    #[test]
    fn arrows_from_cleared_selection() {
        let mut sel = SelectionState::default();
        sel.move_down(2);
        assert_eq!(sel.selected(), Some(0));

        let mut sel = SelectionState::default();
        sel.move_up(2);
        assert_eq!(sel.selected(), Some(1));
    }

    #[test]
    fn index_stays_in_bounds_for_any_sequence() {
        for len in 1..6 {
            let mut sel = SelectionState::first(len);
            for step in 0..50 {
                if step % 3 == 0 {
                    sel.move_up(len);
                } else {
                    sel.move_down(len);
                }
                let idx = sel.selected().unwrap();
                assert!(idx < len, "index {idx} out of bounds for {len}");
            }
        }
    }

    #[test]
    fn hover_wins_until_pointer_leaves() {
        let mut sel = SelectionState::first(5);
        sel.set_hover(3, 5);
        assert_eq!(sel.active(), Some(3));
        sel.set_hover(9, 5);
        assert_eq!(sel.active(), Some(0));
        sel.set_hover(2, 5);
        sel.clear_hover();
        assert_eq!(sel.active(), Some(0));
    }

    #[test]
    fn clamp_after_shrink_and_clear_on_empty() {
        let mut sel = SelectionState::first(10);
        for _ in 0..8 {
            sel.move_down(10);
        }
        sel.set_hover(9, 10);
        sel.clamp(3);
        assert_eq!(sel.selected(), Some(2));
        assert_eq!(sel.hover(), None);

        sel.clamp(0);
        assert_eq!(sel.active(), None);
    }
}
