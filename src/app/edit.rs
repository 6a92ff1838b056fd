//! Cell edit state machine
//!
//! ```text
//! Browsing --e--> Inline --Enter--> Browsing (value coerced and written)
//! Browsing --E--> Modal  --Esc----> Browsing (record untouched)
//! ```
//!
//! This type only owns the buffer and the target. Writing the committed
//! buffer back into a table is done by the app, which knows the column.

use unicode_segmentation::UnicodeSegmentation;

/// Where the edit buffer is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Browsing,
    /// In place, inside the grid cell
    Inline,
    /// In a centered dialog
    Modal,
}

/// Cell an edit was started on, captured when the edit begins
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTarget {
    /// Index of the table in the workspace
    pub table: usize,
    pub row: usize,
    pub col: usize,
    /// Field name the committed value is written under
    pub field_name: String,
}

#[derive(Debug, Clone, Default)]
pub struct EditState {
    mode: EditMode,
    buffer: String,
    target: Option<EditTarget>,
}

impl EditState {
    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode != EditMode::Browsing
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn target(&self) -> Option<&EditTarget> {
        self.target.as_ref()
    }

    /// Start editing `target` with `seed` as the initial buffer.
    ///
    /// Returns false (and changes nothing) if an edit is already in progress
    /// or `mode` is [`EditMode::Browsing`].
    pub fn begin(&mut self, mode: EditMode, target: EditTarget, seed: String) -> bool {
        if self.is_editing() || mode == EditMode::Browsing {
            return false;
        }
        tracing::debug!(
            "Begin {:?} edit of {} (row {}, col {})",
            mode,
            target.field_name,
            target.row,
            target.col
        );
        self.mode = mode;
        self.buffer = seed;
        self.target = Some(target);
        true
    }

    /// Append a typed character. Control characters are ignored.
    pub fn insert_char(&mut self, c: char) -> bool {
        if !self.is_editing() || c.is_control() {
            return false;
        }
        self.buffer.push(c);
        true
    }

    /// Remove the last grapheme cluster, so a combined emoji or an accented
    /// letter goes away in one keypress.
    pub fn backspace(&mut self) {
        if !self.is_editing() {
            return;
        }
        if let Some((idx, _)) = self.buffer.grapheme_indices(true).next_back() {
            self.buffer.truncate(idx);
        }
    }

    /// Abandon the edit. The buffer is discarded.
    pub fn cancel(&mut self) {
        if self.is_editing() {
            tracing::debug!("Edit cancelled");
        }
        self.reset();
    }

    /// Leave edit mode, handing back the target and the final buffer
    pub fn finish(&mut self) -> Option<(EditTarget, String)> {
        if !self.is_editing() {
            return None;
        }
        let target = self.target.take();
        let buffer = std::mem::take(&mut self.buffer);
        self.reset();
        target.map(|target| (target, buffer))
    }

    fn reset(&mut self) {
        self.mode = EditMode::Browsing;
        self.buffer.clear();
        self.target = None;
    }
}
