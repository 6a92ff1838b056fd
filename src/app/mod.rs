mod edit_actions;
mod input;
mod render;

pub mod edit;
pub mod types;

use ratatui::layout::Rect;

use crate::config::Config;
use crate::input::KeybindingResolver;
use crate::model::{TableSession, Workspace};
use crate::view::layout::ScreenLayout;
use crate::view::theme::Theme;
use crate::view::ui::data_grid::data_grid_chrome;
use crate::view::ui::help::reserved_help_lines;
use crate::view::ui::listing::listing_chrome;
use crate::view::ui::sidebar::SIDEBAR_CHROME;
use crate::view::viewport::Viewport;

pub use edit::{EditMode, EditState, EditTarget};
pub use render::buffer_to_string;
pub use types::{CursorState, Focus, MainTab};

/// The table browser application.
///
/// Owns the workspace and every piece of UI state. Key events go through
/// [`App::handle_key`]; drawing is a pure projection of this state (see
/// [`App::render_into`]).
pub struct App {
    workspace: Workspace,
    config: Config,

    /// Data source label shown in the status bar
    source_label: String,

    theme: Theme,
    keybindings: KeybindingResolver,

    /// Terminal size the viewports were laid out for
    width: u16,
    height: u16,

    focus: Focus,
    tab: MainTab,

    /// Highlighted entry of the table list
    selected_table: usize,
    /// Table shown in the main panel
    active_table: usize,

    cursor: CursorState,
    edit: EditState,

    sidebar_viewport: Viewport,
    data_viewport: Viewport,
    structure_viewport: Viewport,
    indices_viewport: Viewport,

    show_help: bool,
    status_message: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(
        workspace: Workspace,
        config: Config,
        source_label: impl Into<String>,
        width: u16,
        height: u16,
    ) -> Self {
        let show_help = config.ui.show_help;
        let mut app = Self {
            workspace,
            config,
            source_label: source_label.into(),
            theme: Theme::default(),
            keybindings: KeybindingResolver::new(),
            width,
            height,
            focus: Focus::default(),
            tab: MainTab::default(),
            selected_table: 0,
            active_table: 0,
            cursor: CursorState::default(),
            edit: EditState::default(),
            sidebar_viewport: Viewport::new(SIDEBAR_CHROME),
            data_viewport: Viewport::new(data_grid_chrome(0)),
            structure_viewport: Viewport::new(listing_chrome(0)),
            indices_viewport: Viewport::new(listing_chrome(0)),
            show_help,
            status_message: None,
            should_quit: false,
        };
        tracing::debug!(
            "App created: {} tables, {}x{}",
            app.workspace.len(),
            width,
            height
        );
        app.sync_viewports();
        app
    }

    /// Show `message` in the status bar from the first frame on
    pub fn with_status_message(mut self, message: Option<String>) -> Self {
        self.status_message = message;
        self
    }

    pub fn handle_resize(&mut self, width: u16, height: u16) {
        tracing::trace!("Resize to {}x{}", width, height);
        self.width = width;
        self.height = height;
        self.sync_viewports();
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn source_label(&self) -> &str {
        &self.source_label
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn tab(&self) -> MainTab {
        self.tab
    }

    pub fn selected_table(&self) -> usize {
        self.selected_table
    }

    pub fn active_table_index(&self) -> usize {
        self.active_table
    }

    pub fn active_table(&self) -> Option<&TableSession> {
        self.workspace.table(self.active_table)
    }

    pub fn cursor(&self) -> CursorState {
        self.cursor
    }

    pub fn edit_state(&self) -> &EditState {
        &self.edit
    }

    pub fn sidebar_viewport(&self) -> &Viewport {
        &self.sidebar_viewport
    }

    pub fn data_viewport(&self) -> &Viewport {
        &self.data_viewport
    }

    pub fn structure_viewport(&self) -> &Viewport {
        &self.structure_viewport
    }

    pub fn indices_viewport(&self) -> &Viewport {
        &self.indices_viewport
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn set_status_message(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!("Status: {}", message);
        self.status_message = Some(message);
    }

    fn layout(&self) -> Option<ScreenLayout> {
        ScreenLayout::compute(Rect::new(0, 0, self.width, self.height), &self.config.ui)
    }

    /// Bring every viewport in line with the current terminal size, help
    /// visibility and table contents, then keep the selection and the
    /// cursor on screen.
    ///
    /// Runs after every key and resize, so the invariants
    /// `offset <= max_offset` and "selection visible" hold between events.
    fn sync_viewports(&mut self) {
        let content_height = self
            .layout()
            .map(|layout| layout.panel_content_height())
            .unwrap_or(0);
        let help = reserved_help_lines(self.show_help, content_height);

        let table_count = self.workspace.len();
        self.selected_table = self.selected_table.min(table_count.saturating_sub(1));
        self.sidebar_viewport.set_chrome(SIDEBAR_CHROME);
        self.sidebar_viewport.resize(content_height);
        self.sidebar_viewport.set_total(table_count);
        self.sidebar_viewport.ensure_visible(self.selected_table);

        let (rows, cols, indices) = self
            .active_table()
            .map(|t| (t.row_count(), t.column_count(), t.indices.len()))
            .unwrap_or((0, 0, 0));

        self.cursor = self.cursor.clamp(rows, cols);
        self.data_viewport.set_chrome(data_grid_chrome(help));
        self.data_viewport.resize(content_height);
        self.data_viewport.set_total(rows);
        self.data_viewport.ensure_visible(self.cursor.row);

        self.structure_viewport.set_chrome(listing_chrome(help));
        self.structure_viewport.resize(content_height);
        self.structure_viewport.set_total(cols);

        self.indices_viewport.set_chrome(listing_chrome(help));
        self.indices_viewport.resize(content_height);
        self.indices_viewport.set_total(indices);
    }
}
