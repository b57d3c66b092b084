use crate::controller::command_types::Command;
use crate::terminal::Key;

/// Translates raw keys into commands for the mode controllers. Stateless
/// except for the single-key chord cache threaded through by Normal mode.
pub struct KeyHandler;

impl KeyHandler {
    /// Normal-mode parse. `pending_chord` is the one-key lookahead cache
    /// for the `dd` chord: the first `d` arms it, a second consecutive `d`
    /// completes the deletion, and any other key disarms it without doing
    /// anything else.
    pub fn parse_normal_key(key: Key, pending_chord: &mut Option<char>) -> Option<Command> {
        if pending_chord.take().is_some() {
            if key == Key::Char('d') {
                return Some(Command::DeleteLine);
            }
            return None;
        }
        if key == Key::Char('d') {
            *pending_chord = Some('d');
            return None;
        }

        match key {
            Key::Char('i') => Some(Command::EnterInsertMode),
            Key::Char(':') => Some(Command::EnterCommandMode),
            Key::Up => Some(Command::MoveUp),
            Key::Down => Some(Command::MoveDown),
            Key::Left => Some(Command::MoveLeft),
            Key::Right => Some(Command::MoveRight),
            Key::Char('w') => Some(Command::MoveWordForward),
            Key::Char('b') => Some(Command::MoveWordBackward),
            Key::Char('0') | Key::Home => Some(Command::MoveLineStart),
            Key::Char('$') | Key::End => Some(Command::MoveLineEnd),
            _ => None,
        }
    }

    pub fn parse_insert_key(key: Key) -> Option<Command> {
        match key {
            Key::Escape => Some(Command::ExitToNormal),
            Key::Backspace => Some(Command::DeleteBackward),
            Key::Delete => Some(Command::DeleteForward),
            Key::Enter => Some(Command::InsertNewline),
            Key::Up => Some(Command::MoveUp),
            Key::Down => Some(Command::MoveDown),
            Key::Left => Some(Command::MoveLeft),
            Key::Right => Some(Command::MoveRight),
            Key::Home => Some(Command::MoveLineStart),
            Key::End => Some(Command::MoveLineEnd),
            // Tab is never inserted as a literal character; resize is
            // handled by the event loop before dispatch.
            Key::Tab | Key::Resize(_, _) => None,
            Key::Char(c) => Some(Command::InsertChar(c)),
        }
    }
}
