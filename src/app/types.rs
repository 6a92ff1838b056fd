/// Which panel receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The table list on the left
    #[default]
    Sidebar,
    /// The data/structure/indices panel
    Main,
}

impl Focus {
    pub fn toggled(self) -> Self {
        match self {
            Focus::Sidebar => Focus::Main,
            Focus::Main => Focus::Sidebar,
        }
    }
}

/// Tabs of the main panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MainTab {
    #[default]
    Data,
    Structure,
    Indices,
}

impl MainTab {
    /// Tab bar order
    pub const ALL: [MainTab; 3] = [MainTab::Data, MainTab::Structure, MainTab::Indices];

    pub fn label(self) -> &'static str {
        match self {
            MainTab::Data => "Data",
            MainTab::Structure => "Structure",
            MainTab::Indices => "Indices",
        }
    }

    /// Key that switches to this tab
    pub fn key(self) -> char {
        match self {
            MainTab::Data => 'd',
            MainTab::Structure => 's',
            MainTab::Indices => 'i',
        }
    }

    pub fn index(self) -> usize {
        match self {
            MainTab::Data => 0,
            MainTab::Structure => 1,
            MainTab::Indices => 2,
        }
    }
}

/// Selected cell of the data grid (0-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CursorState {
    pub row: usize,
    pub col: usize,
}

impl CursorState {
    /// Pull the cursor back inside a `rows` x `cols` grid.
    /// An empty grid puts it at the origin.
    pub fn clamp(self, rows: usize, cols: usize) -> Self {
        Self {
            row: self.row.min(rows.saturating_sub(1)),
            col: self.col.min(cols.saturating_sub(1)),
        }
    }
}
