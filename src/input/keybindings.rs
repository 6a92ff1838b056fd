use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Where a binding applies.
///
/// The application hands the resolver a chain of contexts, most specific
/// first: e.g. `[DataGrid, Main, Global]` while browsing the data tab, or just
/// `[Editing]` while a cell is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyContext {
    /// Works whenever no edit is in progress
    Global,
    /// Table list has focus
    Sidebar,
    /// Main panel has focus, any tab
    Main,
    /// Main panel has focus on the data tab
    DataGrid,
    /// A cell edit is in progress (inline or modal)
    Editing,
}

/// High-level actions the application performs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ToggleFocus,
    FocusSidebar,
    FocusMain,
    ToggleHelp,

    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    PageUp,
    PageDown,
    Home,
    End,

    /// Open the selected table
    Activate,

    ShowData,
    ShowStructure,
    ShowIndices,

    BeginInlineEdit,
    BeginModalEdit,
    SetNull,

    InsertChar(char),
    DeleteBackward,
    CommitEdit,
    CancelEdit,
}

/// Default transition table
const BINDINGS: &[(KeyContext, &str, Action)] = &[
    (KeyContext::Global, "q", Action::Quit),
    (KeyContext::Global, "ctrl+c", Action::Quit),
    (KeyContext::Global, "tab", Action::ToggleFocus),
    (KeyContext::Global, "1", Action::FocusSidebar),
    (KeyContext::Global, "2", Action::FocusMain),
    (KeyContext::Global, "?", Action::ToggleHelp),
    // table list
    (KeyContext::Sidebar, "up", Action::MoveUp),
    (KeyContext::Sidebar, "k", Action::MoveUp),
    (KeyContext::Sidebar, "down", Action::MoveDown),
    (KeyContext::Sidebar, "j", Action::MoveDown),
    (KeyContext::Sidebar, "enter", Action::Activate),
    (KeyContext::Sidebar, "pgup", Action::PageUp),
    (KeyContext::Sidebar, "pgdown", Action::PageDown),
    (KeyContext::Sidebar, "home", Action::Home),
    (KeyContext::Sidebar, "end", Action::End),
    // main panel, every tab
    (KeyContext::Main, "d", Action::ShowData),
    (KeyContext::Main, "s", Action::ShowStructure),
    (KeyContext::Main, "i", Action::ShowIndices),
    (KeyContext::Main, "up", Action::MoveUp),
    (KeyContext::Main, "k", Action::MoveUp),
    (KeyContext::Main, "down", Action::MoveDown),
    (KeyContext::Main, "j", Action::MoveDown),
    (KeyContext::Main, "pgup", Action::PageUp),
    (KeyContext::Main, "pgdown", Action::PageDown),
    (KeyContext::Main, "home", Action::Home),
    (KeyContext::Main, "end", Action::End),
    // data tab
    (KeyContext::DataGrid, "left", Action::MoveLeft),
    (KeyContext::DataGrid, "h", Action::MoveLeft),
    (KeyContext::DataGrid, "right", Action::MoveRight),
    (KeyContext::DataGrid, "l", Action::MoveRight),
    (KeyContext::DataGrid, "enter", Action::BeginInlineEdit),
    (KeyContext::DataGrid, "e", Action::BeginInlineEdit),
    (KeyContext::DataGrid, "ctrl+e", Action::BeginModalEdit),
    (KeyContext::DataGrid, "ctrl+n", Action::SetNull),
    // cell edit
    (KeyContext::Editing, "ctrl+c", Action::Quit),
    (KeyContext::Editing, "enter", Action::CommitEdit),
    (KeyContext::Editing, "esc", Action::CancelEdit),
    (KeyContext::Editing, "backspace", Action::DeleteBackward),
];

/// Terminal-style name of a key event: `q`, `ctrl+e`, `pgdown`, `shift+tab`.
///
/// Shifted letters are reported as the uppercase char, not as `shift+x`.
pub fn describe_key(event: &KeyEvent) -> String {
    let mut prefix = String::new();
    if event.modifiers.contains(KeyModifiers::CONTROL) {
        prefix.push_str("ctrl+");
    }
    if event.modifiers.contains(KeyModifiers::ALT) {
        prefix.push_str("alt+");
    }

    let name = match event.code {
        KeyCode::Char(c) if prefix.is_empty() => return c.to_string(),
        KeyCode::Char(' ') => "space".to_string(),
        KeyCode::Char(c) => c.to_ascii_lowercase().to_string(),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Esc => "esc".to_string(),
        KeyCode::Tab => "tab".to_string(),
        KeyCode::BackTab => "shift+tab".to_string(),
        KeyCode::Backspace => "backspace".to_string(),
        KeyCode::Delete => "delete".to_string(),
        KeyCode::Up => "up".to_string(),
        KeyCode::Down => "down".to_string(),
        KeyCode::Left => "left".to_string(),
        KeyCode::Right => "right".to_string(),
        KeyCode::PageUp => "pgup".to_string(),
        KeyCode::PageDown => "pgdown".to_string(),
        KeyCode::Home => "home".to_string(),
        KeyCode::End => "end".to_string(),
        KeyCode::F(n) => format!("f{n}"),
        _ => return String::new(),
    };
    prefix + &name
}

/// Resolves key events to actions for a chain of contexts
#[derive(Debug, Clone)]
pub struct KeybindingResolver {
    bindings: HashMap<KeyContext, HashMap<String, Action>>,
}

impl Default for KeybindingResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingResolver {
    pub fn new() -> Self {
        let mut bindings: HashMap<KeyContext, HashMap<String, Action>> = HashMap::new();
        for (context, key, action) in BINDINGS {
            bindings
                .entry(*context)
                .or_default()
                .insert((*key).to_string(), *action);
        }
        Self { bindings }
    }

    /// First binding for `event` in `contexts`, in order.
    ///
    /// In the Editing context every printable character without ctrl/alt is
    /// text input, including keys that are commands elsewhere (`q`, `1`, `?`).
    pub fn resolve(&self, event: &KeyEvent, contexts: &[KeyContext]) -> Option<Action> {
        let key = describe_key(event);
        tracing::trace!("KeybindingResolver.resolve: key={:?}, contexts={:?}", key, contexts);

        for context in contexts {
            if let Some(action) = self.bindings.get(context).and_then(|m| m.get(&key)) {
                return Some(*action);
            }
            if *context == KeyContext::Editing {
                if let KeyCode::Char(c) = event.code {
                    let plain = !event
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
                    if plain && !c.is_control() {
                        return Some(Action::InsertChar(c));
                    }
                }
            }
        }
        None
    }
}
