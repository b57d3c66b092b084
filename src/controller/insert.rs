use crate::controller::command_types::{Command, Mode};
use crate::controller::key_handler::KeyHandler;
use crate::controller::shared_state::{ModeController, ModeTransition, SharedEditorState};
use crate::terminal::Key;

/// Insert mode: printable keys mutate the buffer at the cursor. Navigation
/// behaves as in Normal mode except the cursor may rest on the append
/// position one past the end of the line.
pub struct InsertController;

impl InsertController {
    pub fn new() -> Self {
        Self
    }
}

impl ModeController for InsertController {
    fn handle_key(&mut self, key: Key, shared: &mut SharedEditorState) -> ModeTransition {
        let Some(command) = KeyHandler::parse_insert_key(key) else {
            return ModeTransition::Stay;
        };

        match command {
            Command::ExitToNormal => return ModeTransition::ToMode(Mode::Normal),
            Command::InsertChar(c) => shared.document.insert_char(c),
            Command::InsertNewline => shared.document.split_line(),
            Command::DeleteBackward => shared.document.backspace(),
            Command::DeleteForward => shared.document.delete_forward(),
            Command::MoveUp => shared.document.move_up(true),
            Command::MoveDown => shared.document.move_down(true),
            Command::MoveLeft => shared.document.move_left(true),
            Command::MoveRight => shared.document.move_right(true),
            Command::MoveLineStart => shared.document.move_line_start(),
            Command::MoveLineEnd => shared.document.move_line_end(true),
            _ => {}
        }
        ModeTransition::Stay
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;

    fn shared(lines: &[&str]) -> SharedEditorState {
        SharedEditorState::new(Document::from_string(lines.join("\n")), 10, false)
    }

    fn press(controller: &mut InsertController, shared: &mut SharedEditorState, keys: &[Key]) {
        for &key in keys {
            controller.handle_key(key, shared);
        }
    }

    #[test]
    fn test_typed_chars_land_at_cursor() {
        let mut controller = InsertController::new();
        let mut shared = shared(&[""]);
        press(
            &mut controller,
            &mut shared,
            &[Key::Char('h'), Key::Char('i')],
        );
        assert_eq!(shared.document.lines, vec!["hi".to_string()]);
        assert_eq!(shared.document.cursor_column, 2);
        assert!(shared.document.modified);
    }

    #[test]
    fn test_escape_returns_to_normal() {
        let mut controller = InsertController::new();
        let mut shared = shared(&["abc"]);
        assert_eq!(
            controller.handle_key(Key::Escape, &mut shared),
            ModeTransition::ToMode(Mode::Normal)
        );
    }

    #[test]
    fn test_enter_splits_line_at_cursor() {
        let mut controller = InsertController::new();
        let mut shared = shared(&["abcd"]);
        shared.document.cursor_column = 2;
        press(&mut controller, &mut shared, &[Key::Enter]);
        assert_eq!(
            shared.document.lines,
            vec!["ab".to_string(), "cd".to_string()]
        );
        assert_eq!(shared.document.cursor_line, 1);
        assert_eq!(shared.document.cursor_column, 0);
    }

    #[test]
    fn test_backspace_at_line_start_joins_lines() {
        let mut controller = InsertController::new();
        let mut shared = shared(&["ab", "cd"]);
        shared.document.cursor_line = 1;
        press(&mut controller, &mut shared, &[Key::Backspace]);
        assert_eq!(shared.document.lines, vec!["abcd".to_string()]);
        assert_eq!(shared.document.cursor_line, 0);
        assert_eq!(shared.document.cursor_column, 2);
    }

    #[test]
    fn test_delete_at_line_end_merges_next() {
        let mut controller = InsertController::new();
        let mut shared = shared(&["ab", "cd"]);
        shared.document.cursor_column = 2;
        press(&mut controller, &mut shared, &[Key::Delete]);
        assert_eq!(shared.document.lines, vec!["abcd".to_string()]);
    }

    #[test]
    fn test_tab_inserts_nothing() {
        let mut controller = InsertController::new();
        let mut shared = shared(&["ab"]);
        press(&mut controller, &mut shared, &[Key::Tab]);
        assert_eq!(shared.document.lines, vec!["ab".to_string()]);
        assert!(!shared.document.modified);
    }

    #[test]
    fn test_end_reaches_append_position() {
        let mut controller = InsertController::new();
        let mut shared = shared(&["abc"]);
        press(&mut controller, &mut shared, &[Key::End]);
        assert_eq!(shared.document.cursor_column, 3);
        press(&mut controller, &mut shared, &[Key::Char('!')]);
        assert_eq!(shared.document.lines, vec!["abc!".to_string()]);
    }

    #[test]
    fn test_up_clamps_to_append_position() {
        let mut controller = InsertController::new();
        let mut shared = shared(&["ab", "longer line"]);
        shared.document.cursor_line = 1;
        shared.document.cursor_column = 8;
        press(&mut controller, &mut shared, &[Key::Up]);
        assert_eq!(shared.document.cursor_line, 0);
        assert_eq!(shared.document.cursor_column, 2);
    }
}
