//! Tab bar: application name over the sidebar, tab titles over the main panel

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Tabs, Widget};

use crate::app::types::MainTab;
use crate::view::theme::Theme;

pub struct TabsRenderer;

impl TabsRenderer {
    pub fn render(buf: &mut Buffer, area: Rect, sidebar_width: u16, active: MainTab, theme: &Theme) {
        let brand_width = sidebar_width.min(area.width);
        buf.set_stringn(
            area.x,
            area.y,
            " tabletop",
            brand_width as usize,
            Style::default().add_modifier(Modifier::BOLD),
        );

        let tabs_area = Rect {
            x: area.x + brand_width,
            y: area.y,
            width: area.width - brand_width,
            height: 1,
        };
        let titles: Vec<String> = MainTab::ALL
            .iter()
            .map(|tab| format!("{} ({})", tab.label(), tab.key()))
            .collect();
        Tabs::new(titles)
            .select(active.index())
            .style(Style::default().fg(theme.tab_inactive_fg))
            .highlight_style(
                Style::default()
                    .fg(theme.tab_active_fg)
                    .bg(theme.tab_active_bg)
                    .add_modifier(Modifier::BOLD),
            )
            .divider("│")
            .render(tabs_area, buf);
    }
}
