use crossterm::{
    cursor,
    event::{self, Event, KeyCode},
    execute, queue,
    style::Print,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
        disable_raw_mode, enable_raw_mode},
};
use std::io::{self, Write, stdout};

/// One decoded input event. Printable keys carry their character; everything
/// else the editor reacts to is named.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    Enter,
    Escape,
    Backspace,
    Delete,
    Tab,
    /// Terminal geometry changed: (rows, cols).
    Resize(u16, u16),
}

/// Minimal terminal surface the editing core runs against. The crossterm
/// backend implements it for real sessions; tests drive the editor through a
/// scripted implementation instead.
pub trait Terminal {
    /// Current size as (rows, cols).
    fn size(&self) -> (u16, u16);
    fn clear(&mut self) -> io::Result<()>;
    /// Replace the contents of one screen row.
    fn draw_line(&mut self, row: u16, text: &str) -> io::Result<()>;
    fn set_cursor(&mut self, row: u16, col: u16) -> io::Result<()>;
    fn flush(&mut self) -> io::Result<()>;
    /// Block until the next key press or resize notification.
    fn read_key(&mut self) -> io::Result<Key>;
}

/// Real terminal backend. Construction switches the terminal into raw mode
/// and the alternate screen; both are released on drop.
pub struct CrosstermTerminal {
    rows: u16,
    cols: u16,
}

impl CrosstermTerminal {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen, cursor::Show)?;
        let (cols, rows) = terminal::size()?;
        Ok(Self { rows, cols })
    }
}

impl Drop for CrosstermTerminal {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), LeaveAlternateScreen);
    }
}

impl Terminal for CrosstermTerminal {
    fn size(&self) -> (u16, u16) {
        (self.rows, self.cols)
    }

    fn clear(&mut self) -> io::Result<()> {
        queue!(stdout(), Clear(ClearType::All))
    }

    fn draw_line(&mut self, row: u16, text: &str) -> io::Result<()> {
        queue!(
            stdout(),
            cursor::MoveTo(0, row),
            Clear(ClearType::CurrentLine),
            Print(text)
        )
    }

    fn set_cursor(&mut self, row: u16, col: u16) -> io::Result<()> {
        queue!(stdout(), cursor::MoveTo(col, row))
    }

    fn flush(&mut self) -> io::Result<()> {
        stdout().flush()
    }

    fn read_key(&mut self) -> io::Result<Key> {
        loop {
            match event::read()? {
                Event::Key(key_event) => {
                    let key = match key_event.code {
                        KeyCode::Char(c) => Some(Key::Char(c)),
                        KeyCode::Up => Some(Key::Up),
                        KeyCode::Down => Some(Key::Down),
                        KeyCode::Left => Some(Key::Left),
                        KeyCode::Right => Some(Key::Right),
                        KeyCode::Home => Some(Key::Home),
                        KeyCode::End => Some(Key::End),
                        KeyCode::Enter => Some(Key::Enter),
                        KeyCode::Esc => Some(Key::Escape),
                        KeyCode::Backspace => Some(Key::Backspace),
                        KeyCode::Delete => Some(Key::Delete),
                        KeyCode::Tab => Some(Key::Tab),
                        _ => None,
                    };
                    if let Some(key) = key {
                        return Ok(key);
                    }
                }
                Event::Resize(cols, rows) => {
                    self.cols = cols;
                    self.rows = rows;
                    return Ok(Key::Resize(rows, cols));
                }
                _ => {}
            }
        }
    }
}

/// Scripted in-memory terminal used by the editor and renderer tests.
#[cfg(test)]
pub mod scripted {
    use super::{Key, Terminal};
    use std::collections::VecDeque;
    use std::io;

    pub struct ScriptedTerminal {
        rows: u16,
        cols: u16,
        keys: VecDeque<Key>,
        pub screen: Vec<String>,
        pub cursor: (u16, u16),
    }

    impl ScriptedTerminal {
        pub fn new(rows: u16, cols: u16) -> Self {
            Self {
                rows,
                cols,
                keys: VecDeque::new(),
                screen: vec![String::new(); rows as usize],
                cursor: (0, 0),
            }
        }

        pub fn queue_keys(&mut self, keys: impl IntoIterator<Item = Key>) {
            self.keys.extend(keys);
        }

        pub fn queue_str(&mut self, text: &str) {
            self.keys.extend(text.chars().map(Key::Char));
        }

        pub fn row(&self, row: usize) -> &str {
            &self.screen[row]
        }
    }

    impl Terminal for ScriptedTerminal {
        fn size(&self) -> (u16, u16) {
            (self.rows, self.cols)
        }

        fn clear(&mut self) -> io::Result<()> {
            for line in &mut self.screen {
                line.clear();
            }
            Ok(())
        }

        fn draw_line(&mut self, row: u16, text: &str) -> io::Result<()> {
            if let Some(slot) = self.screen.get_mut(row as usize) {
                *slot = text.to_string();
            }
            Ok(())
        }

        fn set_cursor(&mut self, row: u16, col: u16) -> io::Result<()> {
            self.cursor = (row, col);
            Ok(())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }

        fn read_key(&mut self) -> io::Result<Key> {
            match self.keys.pop_front() {
                Some(Key::Resize(rows, cols)) => {
                    self.rows = rows;
                    self.cols = cols;
                    self.screen.resize(rows as usize, String::new());
                    Ok(Key::Resize(rows, cols))
                }
                Some(key) => Ok(key),
                None => Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "script exhausted",
                )),
            }
        }
    }
}
