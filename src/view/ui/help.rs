//! Key help lines shown at the bottom of the main panel

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use super::panel::put_line;
use crate::app::types::MainTab;
use crate::view::theme::Theme;

/// Lines reserved while help is visible.
pub const HELP_LINES: usize = 2;

const DATA_KEYS: &str =
    "Navigation: ↑/↓/←/→ or j/k/h/l | Edit: e or Enter | Modal: ctrl+e | Null: ctrl+n";
const EDIT_KEYS: &str = "Editing: Type to modify | Submit: Enter | Cancel: Esc";
const LIST_KEYS: &str = "Scroll: ↑/↓ or j/k | Page: pgup/pgdown | Jump: home/end";
const GLOBAL_KEYS: &str = "Tabs: d/s/i | Focus: tab/1/2 | Help: ? | Quit: q";

/// Help lines a panel of `content_height` lines can give up.
///
/// Help is left out unless one content line still fits below the two fixed
/// chrome lines.
pub fn reserved_help_lines(show: bool, content_height: usize) -> usize {
    if show && content_height > 2 + HELP_LINES {
        HELP_LINES
    } else {
        0
    }
}

pub fn help_lines(tab: MainTab, editing: bool) -> [&'static str; HELP_LINES] {
    match tab {
        MainTab::Data if editing => [DATA_KEYS, EDIT_KEYS],
        MainTab::Data => [DATA_KEYS, GLOBAL_KEYS],
        MainTab::Structure | MainTab::Indices => [LIST_KEYS, GLOBAL_KEYS],
    }
}

pub struct HelpRenderer;

impl HelpRenderer {
    /// Draw on the last two lines of `area`.
    pub fn render(buf: &mut Buffer, area: Rect, lines: [&str; HELP_LINES], theme: &Theme) {
        let height = area.height as usize;
        if height < HELP_LINES {
            return;
        }
        for (i, line) in lines.iter().enumerate() {
            put_line(buf, area, height - HELP_LINES + i, line, theme.dim(theme.help_fg));
        }
    }
}
