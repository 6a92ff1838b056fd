//! Screen layout
//!
//! ```text
//! row 0      tab bar
//! rows 1..   [ sidebar ][ main panel          ]   both bordered
//! last row   status bar
//! ```

use ratatui::layout::{Constraint, Layout, Rect};

use crate::config::UiConfig;

/// Smallest terminal the panels are drawn in.
pub const MIN_WIDTH: u16 = 40;
pub const MIN_HEIGHT: u16 = 8;

/// The main panel keeps at least this many columns.
const MIN_MAIN_WIDTH: u16 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub tab_bar: Rect,
    pub sidebar: Rect,
    pub main: Rect,
    pub status_bar: Rect,
}

impl ScreenLayout {
    /// Split `area`, or `None` when the terminal is too small to be useful.
    pub fn compute(area: Rect, ui: &UiConfig) -> Option<Self> {
        if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
            return None;
        }

        let [tab_bar, body, status_bar] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        let sidebar_width = sidebar_width(area.width, ui);
        let [sidebar, main] =
            Layout::horizontal([Constraint::Length(sidebar_width), Constraint::Min(0)])
                .areas(body);

        Some(Self {
            tab_bar,
            sidebar,
            main,
            status_bar,
        })
    }

    /// Content lines inside a bordered panel of this layout.
    pub fn panel_content_height(&self) -> usize {
        inner(self.main).height as usize
    }
}

/// `max(min_width, width * percent / 100)`, leaving room for the main panel.
pub fn sidebar_width(width: u16, ui: &UiConfig) -> u16 {
    let proportional = (u32::from(width) * u32::from(ui.sidebar_percent) / 100) as u16;
    proportional
        .max(ui.sidebar_min_width)
        .min(width.saturating_sub(MIN_MAIN_WIDTH))
}

/// Area inside a one-cell border.
pub fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

/// A `width` x `height` rect centered in `area`, shrunk to fit.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
