//! Scroll windows over flat lists
//!
//! One [`Viewport`] tracks the visible slice of each scrollable panel: the
//! table list, data rows, structure rows and index rows. The number of
//! content lines depends on how much chrome the panel reserves, and the
//! optional scroll indicators themselves depend on the scroll position, so
//! the visible count is recomputed whenever offset, height or total change.

use std::ops::Range;

/// Non-content lines a panel reserves inside its height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Chrome {
    /// Lines always present (title, header row, pagination footer, help)
    pub fixed_lines: usize,
    /// Whether the panel draws a one-line "more above" / "more below" marker
    pub scroll_indicators: bool,
}

impl Chrome {
    pub const fn new(fixed_lines: usize, scroll_indicators: bool) -> Self {
        Self {
            fixed_lines,
            scroll_indicators,
        }
    }
}

/// The viewport - which slice of a list is on screen
///
/// Invariant: `offset <= max(0, total_count - visible_count)` after every
/// public operation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Viewport {
    offset: usize,
    visible_count: usize,
    total_count: usize,

    /// Lines allotted to the panel, chrome included
    height: usize,
    chrome: Chrome,

    /// Indicator lines reserved by the last layout pass
    up_indicator: bool,
    down_indicator: bool,
}

impl Viewport {
    pub fn new(chrome: Chrome) -> Self {
        Self {
            chrome,
            ..Self::default()
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn chrome(&self) -> Chrome {
        self.chrome
    }

    /// Largest offset that still fills the window.
    pub fn max_offset(&self) -> usize {
        self.total_count.saturating_sub(self.visible_count)
    }

    /// Indices of the items currently on screen.
    pub fn visible_range(&self) -> Range<usize> {
        let end = (self.offset + self.visible_count).min(self.total_count);
        self.offset.min(end)..end
    }

    pub fn show_up_indicator(&self) -> bool {
        self.up_indicator
    }

    pub fn show_down_indicator(&self) -> bool {
        self.down_indicator
    }

    /// Update the panel height (in lines, chrome included).
    pub fn resize(&mut self, height: usize) {
        self.height = height;
        self.relayout();
    }

    /// Update the length of the underlying list.
    pub fn set_total(&mut self, total: usize) {
        self.total_count = total;
        self.relayout();
    }

    pub fn set_chrome(&mut self, chrome: Chrome) {
        self.chrome = chrome;
        self.relayout();
    }

    /// Back to the top, used when the list changes identity.
    pub fn reset(&mut self, total: usize) {
        self.offset = 0;
        self.total_count = total;
        self.relayout();
    }

    /// Scroll the minimum amount needed to bring `index` on screen.
    pub fn ensure_visible(&mut self, index: usize) {
        if self.total_count == 0 {
            return;
        }
        let index = index.min(self.total_count - 1);

        // showing the up indicator can shrink the window, so settle in a few rounds
        for _ in 0..4 {
            if self.visible_count == 0 {
                self.offset = index.min(self.max_offset());
                self.relayout();
                return;
            }
            let before = self.offset;
            if index < self.offset {
                self.offset = index;
            } else if index >= self.offset + self.visible_count {
                self.offset = index + 1 - self.visible_count;
            }
            self.relayout();
            if self.offset == before && self.visible_range().contains(&index) {
                return;
            }
        }
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.offset = self.offset.saturating_sub(lines);
        self.relayout();
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.offset = self.offset.saturating_add(lines);
        self.relayout();
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.visible_count);
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.visible_count);
    }

    pub fn home(&mut self) {
        self.offset = 0;
        self.relayout();
    }

    pub fn end(&mut self) {
        self.offset = self.total_count;
        self.relayout();
    }

    /// Pull `index` into the visible range and the list bounds.
    ///
    /// Returns 0 for an empty list.
    pub fn clamp_cursor(&self, index: usize) -> usize {
        if self.total_count == 0 {
            return 0;
        }
        let last = self.total_count - 1;
        let range = self.visible_range();
        if range.is_empty() {
            return index.min(last);
        }
        index.clamp(range.start, range.end - 1)
    }

    fn content_budget(&self) -> usize {
        self.height.saturating_sub(self.chrome.fixed_lines)
    }

    /// Visible line count for a given offset, plus the indicator lines it needs.
    ///
    /// First pass reserves the up indicator (known from the offset alone),
    /// second pass checks whether the remaining window leaves items below
    /// and reserves the down indicator if so. Indicators never take the last
    /// content line: in a window that short the down indicator is dropped
    /// first, then the up indicator.
    fn layout_for(&self, offset: usize) -> (usize, bool, bool) {
        let budget = self.content_budget();
        if !self.chrome.scroll_indicators || budget == 0 {
            return (budget, false, false);
        }
        let mut up = offset > 0;
        let provisional = budget - usize::from(up);
        let mut down = offset + provisional < self.total_count;
        if budget <= usize::from(up) + usize::from(down) {
            down = false;
            up = up && budget > 1;
        }
        (budget - usize::from(up) - usize::from(down), up, down)
    }

    fn apply_layout(&mut self) {
        let (visible, up, down) = self.layout_for(self.offset);
        self.visible_count = visible;
        self.up_indicator = up;
        self.down_indicator = down;
    }

    fn relayout(&mut self) {
        for _ in 0..4 {
            self.apply_layout();
            let max = self.max_offset();
            if self.offset <= max {
                return;
            }
            self.offset = max;
        }
        self.offset = self.offset.min(self.max_offset());
        self.apply_layout();
    }
}
