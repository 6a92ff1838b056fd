use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::types::{Focus, MainTab};
use super::{App, EditMode};
use crate::input::{describe_key, Action, KeyContext};
use crate::view::viewport::Viewport;

impl App {
    /// Handle a key press.
    ///
    /// The focused panel and the edit mode decide which binding contexts
    /// apply; the first matching binding wins. Unbound keys are ignored.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        let event = KeyEvent::new(code, modifiers);
        let contexts = self.key_contexts();
        let Some(action) = self.keybindings.resolve(&event, &contexts) else {
            tracing::trace!("Unbound key {} in {:?}", describe_key(&event), contexts);
            return;
        };
        tracing::debug!("handle_key: {} -> {:?}", describe_key(&event), action);

        self.dispatch(action);
        self.sync_viewports();
    }

    /// Binding contexts for the current state, most specific first
    fn key_contexts(&self) -> Vec<KeyContext> {
        if self.edit.is_editing() {
            return vec![KeyContext::Editing];
        }
        match (self.focus, self.tab) {
            (Focus::Sidebar, _) => vec![KeyContext::Sidebar, KeyContext::Global],
            (Focus::Main, MainTab::Data) => {
                vec![KeyContext::DataGrid, KeyContext::Main, KeyContext::Global]
            }
            (Focus::Main, _) => vec![KeyContext::Main, KeyContext::Global],
        }
    }

    fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => {
                tracing::info!("Quit requested");
                self.should_quit = true;
            }
            Action::ToggleFocus => self.focus = self.focus.toggled(),
            Action::FocusSidebar => self.focus = Focus::Sidebar,
            Action::FocusMain => self.focus = Focus::Main,
            Action::ToggleHelp => self.show_help = !self.show_help,

            Action::Activate => self.activate_selected_table(),
            Action::ShowData => self.tab = MainTab::Data,
            Action::ShowStructure => self.tab = MainTab::Structure,
            Action::ShowIndices => self.tab = MainTab::Indices,

            Action::BeginInlineEdit => self.begin_edit(EditMode::Inline),
            Action::BeginModalEdit => self.begin_edit(EditMode::Modal),
            Action::SetNull => self.set_null_at_cursor(),
            Action::InsertChar(c) => {
                self.edit.insert_char(c);
            }
            Action::DeleteBackward => self.edit.backspace(),
            Action::CommitEdit => self.commit_edit(),
            Action::CancelEdit => self.cancel_edit(),

            Action::MoveUp
            | Action::MoveDown
            | Action::MoveLeft
            | Action::MoveRight
            | Action::PageUp
            | Action::PageDown
            | Action::Home
            | Action::End => self.navigate(action),
        }
    }

    /// Make the highlighted table the one shown in the main panel.
    ///
    /// Scroll positions and the cursor of the main panel start over; the
    /// sidebar keeps its own.
    fn activate_selected_table(&mut self) {
        let Some(table) = self.workspace.table(self.selected_table) else {
            return;
        };
        tracing::debug!("Activate table {}", table.name);
        let (rows, cols, indices) = (table.row_count(), table.column_count(), table.indices.len());

        self.active_table = self.selected_table;
        self.cursor = Default::default();
        self.data_viewport.reset(rows);
        self.structure_viewport.reset(cols);
        self.indices_viewport.reset(indices);
    }

    fn navigate(&mut self, action: Action) {
        match (self.focus, self.tab) {
            (Focus::Sidebar, _) => self.navigate_sidebar(action),
            (Focus::Main, MainTab::Data) => self.navigate_data(action),
            (Focus::Main, MainTab::Structure) => scroll_listing(&mut self.structure_viewport, action),
            (Focus::Main, MainTab::Indices) => scroll_listing(&mut self.indices_viewport, action),
        }
    }

    fn navigate_sidebar(&mut self, action: Action) {
        let count = self.workspace.len();
        if count == 0 {
            return;
        }
        let vp = &mut self.sidebar_viewport;
        match action {
            Action::MoveUp => self.selected_table = self.selected_table.saturating_sub(1),
            Action::MoveDown => {
                if self.selected_table + 1 < count {
                    self.selected_table += 1;
                }
            }
            Action::PageUp => {
                vp.page_up();
                self.selected_table = vp.clamp_cursor(self.selected_table);
            }
            Action::PageDown => {
                vp.page_down();
                self.selected_table = vp.clamp_cursor(self.selected_table);
            }
            Action::Home => {
                vp.home();
                self.selected_table = 0;
            }
            Action::End => {
                vp.end();
                self.selected_table = count - 1;
            }
            _ => return,
        }
        vp.ensure_visible(self.selected_table);
    }

    fn navigate_data(&mut self, action: Action) {
        let Some(table) = self.active_table() else {
            return;
        };
        if !table.has_data() {
            return;
        }
        let (rows, cols) = (table.row_count(), table.column_count());
        let vp = &mut self.data_viewport;
        let cursor = &mut self.cursor;
        match action {
            Action::MoveUp => cursor.row = cursor.row.saturating_sub(1),
            Action::MoveDown => cursor.row = (cursor.row + 1).min(rows - 1),
            Action::MoveLeft => cursor.col = cursor.col.saturating_sub(1),
            Action::MoveRight => cursor.col = (cursor.col + 1).min(cols.saturating_sub(1)),
            Action::PageUp => {
                vp.page_up();
                cursor.row = vp.clamp_cursor(cursor.row);
            }
            Action::PageDown => {
                vp.page_down();
                cursor.row = vp.clamp_cursor(cursor.row);
            }
            Action::Home => {
                vp.home();
                cursor.row = 0;
            }
            Action::End => {
                vp.end();
                cursor.row = rows - 1;
            }
            _ => return,
        }
        vp.ensure_visible(cursor.row);
    }
}

/// Structure and indices have no cursor; arrows scroll one line.
fn scroll_listing(vp: &mut Viewport, action: Action) {
    match action {
        Action::MoveUp => vp.scroll_up(1),
        Action::MoveDown => vp.scroll_down(1),
        Action::PageUp => vp.page_up(),
        Action::PageDown => vp.page_down(),
        Action::Home => vp.home(),
        Action::End => vp.end(),
        _ => {}
    }
}
