use crate::controller::command::CommandController;
use crate::controller::command_types::Mode;
use crate::controller::insert::InsertController;
use crate::controller::normal::NormalController;
use crate::controller::shared_state::{ModeController, ModeTransition, SharedEditorState};
use crate::document::Document;
use crate::terminal::{Key, Terminal};
use crate::view::{RenderParams, View};
use std::io;

/// Owns the dispatch loop: read one key, clear the previous warning, hand
/// the key to the active mode's controller, reconcile the viewport, redraw.
/// Strictly sequential; the only suspension point is the blocking key read.
pub struct EditorController {
    shared: SharedEditorState,
    mode: Mode,
    normal: NormalController,
    insert: InsertController,
    command: CommandController,
    view: View,
}

impl EditorController {
    pub fn new(document: Document, view: View, read_only: bool, visible_rows: usize) -> Self {
        Self {
            shared: SharedEditorState::new(document, visible_rows, read_only),
            mode: Mode::Normal,
            normal: NormalController::new(),
            insert: InsertController::new(),
            command: CommandController::new(),
            view,
        }
    }

    pub fn run(&mut self, term: &mut dyn Terminal) -> io::Result<()> {
        loop {
            self.render(term)?;

            let key = term.read_key()?;
            self.shared.warning.clear();

            if let Key::Resize(rows, _) = key {
                let text_rows = rows.saturating_sub(2) as usize;
                self.shared
                    .viewport
                    .resize(text_rows, self.shared.document.cursor_line);
                continue;
            }

            let transition = match self.mode {
                Mode::Normal => self.normal.handle_key(key, &mut self.shared),
                Mode::Insert => self.insert.handle_key(key, &mut self.shared),
                Mode::Command => self.command.handle_key(key, &mut self.shared),
            };

            match transition {
                ModeTransition::Stay => {}
                ModeTransition::ToMode(mode) => self.transition_to(mode),
                ModeTransition::Quit => return Ok(()),
            }

            self.shared
                .viewport
                .scroll_to_cursor(self.shared.document.cursor_line);
        }
    }

    fn transition_to(&mut self, mode: Mode) {
        if mode == Mode::Command {
            self.command.command_buffer.clear();
        }
        self.mode = mode;
    }

    fn render(&mut self, term: &mut dyn Terminal) -> io::Result<()> {
        let params = RenderParams {
            mode: self.mode,
            command_buffer: self.command.buffer(),
            warning: &self.shared.warning,
        };
        self.view
            .render(term, &self.shared.document, &self.shared.viewport, &params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::WrapMode;
    use crate::terminal::scripted::ScriptedTerminal;
    use tempfile::TempDir;

    fn editor(document: Document, read_only: bool, visible_rows: usize) -> EditorController {
        EditorController::new(
            document,
            View::new(WrapMode::Scroll, 4),
            read_only,
            visible_rows,
        )
    }

    #[test]
    fn test_full_session_on_new_file() {
        // Open a nonexistent path, type "hi", save and quit.
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fresh.txt");
        let document = Document::open(path.clone(), false);
        assert!(document.new_file);
        assert_eq!(document.lines, vec![String::new()]);

        let mut editor = editor(document, false, 8);
        let mut term = ScriptedTerminal::new(10, 40);
        term.queue_keys([Key::Char('i')]);
        term.queue_str("hi");
        term.queue_keys([Key::Escape, Key::Char(':')]);
        term.queue_str("wq");
        term.queue_keys([Key::Enter]);

        editor.run(&mut term).unwrap();

        assert_eq!(editor.shared.document.lines, vec!["hi".to_string()]);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hi\n");
    }

    #[test]
    fn test_rejected_quit_keeps_session_alive() {
        let mut editor = editor(Document::from_string("abc".to_string()), false, 8);
        let mut term = ScriptedTerminal::new(10, 40);
        term.queue_keys([Key::Char('i'), Key::Char('x'), Key::Escape, Key::Char(':')]);
        term.queue_str("q");
        term.queue_keys([Key::Enter]);

        // The rejected quit leaves the loop running until the script runs dry.
        let result = editor.run(&mut term);
        assert!(result.is_err());
        assert_eq!(
            editor.shared.warning,
            "No write since last change (add ! to override)"
        );
        assert_eq!(editor.mode, Mode::Normal);
    }

    #[test]
    fn test_warning_lives_one_keystroke() {
        let mut editor = editor(Document::from_string("abc".to_string()), false, 8);
        let mut term = ScriptedTerminal::new(10, 40);
        term.queue_keys([Key::Char(':')]);
        term.queue_str("zz");
        term.queue_keys([Key::Enter]);
        let _ = editor.run(&mut term);
        assert_eq!(editor.shared.warning, "Command not found.");

        // The next key clears it.
        term.queue_keys([Key::Up]);
        let _ = editor.run(&mut term);
        assert!(editor.shared.warning.is_empty());
    }

    #[test]
    fn test_command_buffer_resets_on_each_entry() {
        let mut editor = editor(Document::from_string("abc".to_string()), false, 8);
        let mut term = ScriptedTerminal::new(10, 40);
        term.queue_keys([Key::Char(':')]);
        term.queue_str("qq");
        term.queue_keys([Key::Escape, Key::Char(':')]);
        let _ = editor.run(&mut term);
        assert_eq!(editor.mode, Mode::Command);
        assert_eq!(editor.command.buffer(), "");
    }

    #[test]
    fn test_typing_scrolls_viewport_to_cursor() {
        let content = (0..20).map(|i| format!("line{i}")).collect::<Vec<_>>();
        let mut editor = editor(Document::from_string(content.join("\n")), false, 4);
        let mut term = ScriptedTerminal::new(6, 40);
        term.queue_keys(std::iter::repeat(Key::Down).take(9));
        let _ = editor.run(&mut term);

        assert_eq!(editor.shared.document.cursor_line, 9);
        let vp = editor.shared.viewport;
        assert_eq!(vp.start_line + vp.screen_row(9), 9);
        assert!(vp.screen_row(9) < vp.visible_rows);
        // The cursor's line is on screen.
        assert_eq!(term.row(vp.screen_row(9)), "line9");
    }

    #[test]
    fn test_resize_keeps_cursor_on_screen() {
        let content = (0..20).map(|i| format!("line{i}")).collect::<Vec<_>>();
        let mut editor = editor(Document::from_string(content.join("\n")), false, 8);
        let mut term = ScriptedTerminal::new(10, 40);
        term.queue_keys(std::iter::repeat(Key::Down).take(9));
        term.queue_keys([Key::Resize(5, 40)]);
        let _ = editor.run(&mut term);

        let vp = editor.shared.viewport;
        assert_eq!(vp.visible_rows, 3);
        assert_eq!(editor.shared.document.cursor_line, 9);
        assert!(vp.start_line <= 9 && 9 < vp.start_line + vp.visible_rows);
    }

    #[test]
    fn test_resize_in_insert_mode_types_nothing() {
        let mut editor = editor(Document::from_string(String::new()), false, 8);
        let mut term = ScriptedTerminal::new(10, 40);
        term.queue_keys([Key::Char('i'), Key::Char('a'), Key::Resize(12, 40), Key::Char('b')]);
        let _ = editor.run(&mut term);
        assert_eq!(editor.shared.document.lines, vec!["ab".to_string()]);
        assert_eq!(editor.mode, Mode::Insert);
    }

    #[test]
    fn test_force_quit_discards_changes() {
        let mut editor = editor(Document::from_string("abc".to_string()), false, 8);
        let mut term = ScriptedTerminal::new(10, 40);
        term.queue_keys([Key::Char('i'), Key::Char('x'), Key::Escape, Key::Char(':')]);
        term.queue_str("q!");
        term.queue_keys([Key::Enter]);
        editor.run(&mut term).unwrap();
    }
}
