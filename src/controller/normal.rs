use crate::controller::command_types::{Command, Mode};
use crate::controller::key_handler::KeyHandler;
use crate::controller::shared_state::{ModeController, ModeTransition, SharedEditorState};
use crate::terminal::Key;

pub const READ_ONLY_WARNING: &str = "File is read-only";

/// Normal mode: navigation plus the `dd` chord. The chord cache lives here
/// so no other mode can observe a half-typed chord.
pub struct NormalController {
    pending_chord: Option<char>,
}

impl NormalController {
    pub fn new() -> Self {
        Self {
            pending_chord: None,
        }
    }
}

impl ModeController for NormalController {
    fn handle_key(&mut self, key: Key, shared: &mut SharedEditorState) -> ModeTransition {
        let Some(command) = KeyHandler::parse_normal_key(key, &mut self.pending_chord) else {
            return ModeTransition::Stay;
        };

        match command {
            Command::EnterInsertMode => {
                if shared.read_only {
                    shared.warn(READ_ONLY_WARNING);
                    return ModeTransition::Stay;
                }
                return ModeTransition::ToMode(Mode::Insert);
            }
            Command::EnterCommandMode => return ModeTransition::ToMode(Mode::Command),
            Command::DeleteLine => {
                if shared.read_only {
                    shared.warn(READ_ONLY_WARNING);
                } else {
                    shared.document.delete_line();
                }
            }
            Command::MoveUp => shared.document.move_up(false),
            Command::MoveDown => shared.document.move_down(false),
            Command::MoveLeft => shared.document.move_left(false),
            Command::MoveRight => shared.document.move_right(false),
            Command::MoveWordForward => shared.document.move_word_forward(),
            Command::MoveWordBackward => shared.document.move_word_backward(),
            Command::MoveLineStart => shared.document.move_line_start(),
            Command::MoveLineEnd => shared.document.move_line_end(false),
            _ => {}
        }
        ModeTransition::Stay
    }
}
