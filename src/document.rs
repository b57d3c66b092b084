use std::fs;
use std::io;
use std::path::PathBuf;

/// The document being edited: an ordered sequence of lines plus the cursor
/// that addresses it. Invariant: `lines` is never empty, `cursor_line` stays
/// in bounds, and `cursor_column` never exceeds the current line length.
#[derive(Clone)]
pub struct Document {
    pub lines: Vec<String>,
    pub cursor_line: usize,
    pub cursor_column: usize,
    pub filename: PathBuf,
    pub modified: bool,
    pub new_file: bool,
}

impl Document {
    /// Open a file for editing. A missing or unreadable path yields a single
    /// empty line flagged as a new file; `truncate` skips reading entirely.
    pub fn open(filename: PathBuf, truncate: bool) -> Self {
        if truncate {
            let new_file = !filename.exists();
            return Self {
                lines: vec![String::new()],
                cursor_line: 0,
                cursor_column: 0,
                filename,
                modified: false,
                new_file,
            };
        }

        match fs::read_to_string(&filename) {
            Ok(content) => {
                let lines: Vec<String> = if content.is_empty() {
                    vec![String::new()]
                } else {
                    content.lines().map(|s| s.to_string()).collect()
                };
                Self {
                    lines,
                    cursor_line: 0,
                    cursor_column: 0,
                    filename,
                    modified: false,
                    new_file: false,
                }
            }
            Err(_) => Self {
                lines: vec![String::new()],
                cursor_line: 0,
                cursor_column: 0,
                filename,
                modified: false,
                new_file: true,
            },
        }
    }

    pub fn from_string(content: String) -> Self {
        let lines: Vec<String> = if content.is_empty() {
            vec![String::new()]
        } else {
            content.lines().map(|s| s.to_string()).collect()
        };
        Self {
            lines,
            cursor_line: 0,
            cursor_column: 0,
            filename: PathBuf::new(),
            modified: false,
            new_file: true,
        }
    }

    /// Write every line followed by a newline, overwriting the target path.
    pub fn save(&mut self) -> io::Result<()> {
        let mut content = String::new();
        for line in &self.lines {
            content.push_str(line);
            content.push('\n');
        }
        fs::write(&self.filename, content)?;
        self.modified = false;
        self.new_file = false;
        Ok(())
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, row: usize) -> &str {
        &self.lines[row]
    }

    /// Line length in characters, not bytes.
    pub fn line_len(&self, row: usize) -> usize {
        self.lines[row].chars().count()
    }

    /// Last addressable column in Normal mode: the final character of the
    /// line, or 0 when the line is empty.
    pub fn last_column(&self, row: usize) -> usize {
        self.line_len(row).saturating_sub(1)
    }

    /// Highest column the cursor may occupy on `row`. Insert mode permits
    /// the append position one past the final character.
    pub fn max_column(&self, row: usize, append: bool) -> usize {
        if append {
            self.line_len(row)
        } else {
            self.last_column(row)
        }
    }

    /// Column of the first non-space character, or 0 if there is none.
    pub fn first_non_space(&self, row: usize) -> usize {
        self.lines[row].chars().position(|c| c != ' ').unwrap_or(0)
    }

    fn byte_index(line: &str, col: usize) -> usize {
        line.char_indices()
            .nth(col)
            .map(|(i, _)| i)
            .unwrap_or(line.len())
    }

    /// Insert one character at the cursor and advance past it.
    pub fn insert_char(&mut self, c: char) {
        let idx = Self::byte_index(&self.lines[self.cursor_line], self.cursor_column);
        self.lines[self.cursor_line].insert(idx, c);
        self.cursor_column += 1;
        self.modified = true;
    }

    /// Delete the character before the cursor. At column 0 the current line
    /// is joined onto the previous one and the cursor lands on the join
    /// point; at the very start of the document this is a no-op.
    pub fn backspace(&mut self) {
        if self.cursor_column > 0 {
            let idx = Self::byte_index(&self.lines[self.cursor_line], self.cursor_column - 1);
            self.lines[self.cursor_line].remove(idx);
            self.cursor_column -= 1;
            self.modified = true;
        } else if self.cursor_line > 0 {
            let tail = self.lines.remove(self.cursor_line);
            self.cursor_line -= 1;
            self.cursor_column = self.line_len(self.cursor_line);
            self.lines[self.cursor_line].push_str(&tail);
            self.modified = true;
        }
    }

    /// Delete the character under the cursor. At the end of the line the
    /// next line is merged onto this one; at the very end of the document
    /// this is a no-op.
    pub fn delete_forward(&mut self) {
        if self.cursor_column < self.line_len(self.cursor_line) {
            let idx = Self::byte_index(&self.lines[self.cursor_line], self.cursor_column);
            self.lines[self.cursor_line].remove(idx);
            self.modified = true;
        } else if self.cursor_line < self.lines.len() - 1 {
            let next = self.lines.remove(self.cursor_line + 1);
            self.lines[self.cursor_line].push_str(&next);
            self.modified = true;
        }
    }

    /// Split the current line at the cursor. Text from the cursor onward
    /// becomes a new line below and the cursor moves to its start.
    pub fn split_line(&mut self) {
        let idx = Self::byte_index(&self.lines[self.cursor_line], self.cursor_column);
        let tail = self.lines[self.cursor_line].split_off(idx);
        self.lines.insert(self.cursor_line + 1, tail);
        self.cursor_line += 1;
        self.cursor_column = 0;
        self.modified = true;
    }

    /// Delete the current line (the `dd` chord). The cursor stays on the
    /// line that shifts into its row, or moves up when the deleted line was
    /// last, landing on the first non-space character either way. Deleting
    /// the sole line leaves a single empty line so the document is never
    /// empty.
    pub fn delete_line(&mut self) {
        self.lines.remove(self.cursor_line);
        self.modified = true;

        if self.lines.is_empty() {
            self.lines.push(String::new());
            self.cursor_line = 0;
            self.cursor_column = 0;
            return;
        }

        if self.cursor_line >= self.lines.len() {
            self.cursor_line = self.lines.len() - 1;
        }
        self.cursor_column = self.first_non_space(self.cursor_line);
    }
}
