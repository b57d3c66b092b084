use crate::controller::command_types::Mode;
use crate::controller::normal::READ_ONLY_WARNING;
use crate::controller::shared_state::{ModeController, ModeTransition, SharedEditorState};
use crate::terminal::Key;

/// Command-line mode: accumulates text after `:` and evaluates it against
/// the fixed grammar on Enter. Every non-terminating evaluation returns to
/// Normal mode.
pub struct CommandController {
    pub command_buffer: String,
}

impl CommandController {
    pub fn new() -> Self {
        Self {
            command_buffer: String::new(),
        }
    }

    pub fn buffer(&self) -> &str {
        &self.command_buffer
    }
}

impl ModeController for CommandController {
    fn handle_key(&mut self, key: Key, shared: &mut SharedEditorState) -> ModeTransition {
        match key {
            Key::Char(c) => {
                self.command_buffer.push(c);
                ModeTransition::Stay
            }
            Key::Backspace => {
                self.command_buffer.pop();
                ModeTransition::Stay
            }
            Key::Escape => {
                self.command_buffer.clear();
                ModeTransition::ToMode(Mode::Normal)
            }
            Key::Enter => {
                let outcome = self.evaluate(shared);
                self.command_buffer.clear();
                outcome
            }
            _ => ModeTransition::Stay,
        }
    }
}

impl CommandController {
    fn evaluate(&mut self, shared: &mut SharedEditorState) -> ModeTransition {
        match self.command_buffer.as_str() {
            "w" => {
                if shared.read_only {
                    shared.warn(READ_ONLY_WARNING);
                } else if shared.document.save().is_err() {
                    shared.warn("Failed to save file!");
                }
                ModeTransition::ToMode(Mode::Normal)
            }
            "q" => {
                if shared.document.is_modified() {
                    shared.warn("No write since last change (add ! to override)");
                    ModeTransition::ToMode(Mode::Normal)
                } else {
                    ModeTransition::Quit
                }
            }
            "q!" => ModeTransition::Quit,
            "wq" => {
                if shared.read_only {
                    shared.warn(READ_ONLY_WARNING);
                    ModeTransition::ToMode(Mode::Normal)
                } else {
                    // The quit goes through even when the save fails.
                    shared.document.save().ok();
                    ModeTransition::Quit
                }
            }
            _ => {
                shared.warn("Command not found.");
                ModeTransition::ToMode(Mode::Normal)
            }
        }
    }
}
