use crate::document::Document;
use crate::terminal::Key;
use crate::view::Viewport;

/// Editing state shared by every mode controller: the document, the scroll
/// window over it, the transient warning line, and the session options.
/// Owned by the dispatch loop and lent to one handler per keystroke.
pub struct SharedEditorState {
    pub document: Document,
    pub viewport: Viewport,
    pub warning: String,
    pub read_only: bool,
}

impl SharedEditorState {
    pub fn new(document: Document, visible_rows: usize, read_only: bool) -> Self {
        Self {
            document,
            viewport: Viewport::new(visible_rows),
            warning: String::new(),
            read_only,
        }
    }

    /// Set the warning shown on the status line. It survives exactly until
    /// the next dispatch cycle clears it.
    pub fn warn(&mut self, message: impl Into<String>) {
        self.warning = message.into();
    }
}

/// Result of handling one key in a mode controller.
#[derive(Debug, PartialEq, Eq)]
pub enum ModeTransition {
    Stay,
    ToMode(super::Mode),
    Quit,
}

/// Implemented once per mode; applies exactly one mutation per key.
pub trait ModeController {
    fn handle_key(&mut self, key: Key, shared: &mut SharedEditorState) -> ModeTransition;
}
