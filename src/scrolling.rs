//! Viewport scrolling for long lists
//!
//! Tracks the window offset for the checklist so the cursor stays visible
//! as the user navigates. The cursor itself lives in `AppState`; this type
//! only owns the viewport arithmetic.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollState {
    /// Total number of rows in the list
    total_items: usize,
    /// Rows that fit in the viewport
    visible_items: usize,
    /// Index of the first visible row
    offset: usize,
}

impl ScrollState {
    pub fn new(total_items: usize, visible_items: usize) -> Self {
        Self {
            total_items,
            visible_items,
            offset: 0,
        }
    }

    /// First visible row index.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Rows that fit in the viewport.
    pub fn visible_items(&self) -> usize {
        self.visible_items
    }

    /// Update the viewport height after a terminal resize.
    ///
    /// Clamps the offset so the viewport never scrolls past the end.
    pub fn update_visible_items(&mut self, visible_items: usize) {
        self.visible_items = visible_items.max(1);
        self.clamp_offset();
    }

    /// Scroll the minimum distance needed to bring `cursor` into view.
    pub fn scroll_to(&mut self, cursor: usize) {
        if cursor < self.offset {
            self.offset = cursor;
        } else if cursor >= self.offset + self.visible_items {
            self.offset = cursor + 1 - self.visible_items;
        }
        self.clamp_offset();
    }

    /// Whether a row is currently inside the viewport.
    pub fn is_visible(&self, row: usize) -> bool {
        row >= self.offset && row < self.offset + self.visible_items
    }

    fn clamp_offset(&mut self) {
        let max_offset = self.total_items.saturating_sub(self.visible_items);
        if self.offset > max_offset {
            self.offset = max_offset;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_down_past_viewport() {
        let mut scroll = ScrollState::new(50, 10);
        scroll.scroll_to(0);
        assert_eq!(scroll.offset(), 0);

        // Cursor at row 9 still fits
        scroll.scroll_to(9);
        assert_eq!(scroll.offset(), 0);

        // Row 10 needs one row of scroll
        scroll.scroll_to(10);
        assert_eq!(scroll.offset(), 1);

        // Jump to the end
        scroll.scroll_to(49);
        assert_eq!(scroll.offset(), 40);
    }

    #[test]
    fn test_scroll_back_up() {
        let mut scroll = ScrollState::new(50, 10);
        scroll.scroll_to(49);
        scroll.scroll_to(5);
        assert_eq!(scroll.offset(), 5);
        assert!(scroll.is_visible(5));
        assert!(!scroll.is_visible(15));
    }

    #[test]
    fn test_resize_clamps_offset() {
        let mut scroll = ScrollState::new(50, 10);
        scroll.scroll_to(49);
        assert_eq!(scroll.offset(), 40);

        // Taller terminal: offset must shrink so the list stays full
        scroll.update_visible_items(30);
        assert_eq!(scroll.offset(), 20);
    }

    #[test]
    fn test_short_list_never_scrolls() {
        let mut scroll = ScrollState::new(5, 10);
        scroll.scroll_to(4);
        assert_eq!(scroll.offset(), 0);
    }
}
