use crate::cli::WrapMode;
use crate::controller::Mode;
use crate::document::Document;
use crate::terminal::Terminal;
use crate::view::Viewport;
use std::io;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub struct RenderParams<'a> {
    pub mode: Mode,
    pub command_buffer: &'a str,
    pub warning: &'a str,
}

/// Paints one frame: the visible document lines, the status line, the
/// command/mode line, and the hardware cursor. Owns the presentation-only
/// state (wrap mode, tab stop, horizontal scroll); everything it shows is
/// read from the document and viewport.
pub struct View {
    wrap_mode: WrapMode,
    tab_stop: usize,
    horizontal_scroll: usize,
}

impl View {
    pub fn new(wrap_mode: WrapMode, tab_stop: usize) -> Self {
        Self {
            wrap_mode,
            tab_stop,
            horizontal_scroll: 0,
        }
    }

    pub fn render(
        &mut self,
        term: &mut dyn Terminal,
        doc: &Document,
        viewport: &Viewport,
        params: &RenderParams<'_>,
    ) -> io::Result<()> {
        let (rows, cols) = term.size();
        let width = (cols as usize).max(1);
        let text_rows = rows.saturating_sub(2) as usize;

        let cursor_display =
            self.display_column(doc.line(doc.cursor_line), doc.cursor_column);
        self.adjust_horizontal_scroll(cursor_display, width);

        let doc_cursor = match self.wrap_mode {
            WrapMode::Scroll => {
                self.draw_scrolled(term, doc, viewport, text_rows, width)?;
                let row = viewport
                    .screen_row(doc.cursor_line)
                    .min(text_rows.saturating_sub(1));
                let col = cursor_display.saturating_sub(self.horizontal_scroll);
                (row, col.min(width.saturating_sub(1)))
            }
            WrapMode::Break => {
                self.draw_folded(term, doc, viewport, text_rows, width)?;
                let (row, col) = self.folded_cursor(doc, viewport, width, cursor_display);
                (row.min(text_rows.saturating_sub(1)), col.min(width - 1))
            }
        };

        let status = if params.warning.is_empty() {
            let new_file = if doc.new_file { " (new file)" } else { "" };
            format!(
                "\"{}\"{}  Line {}  Col {}",
                doc.filename.display(),
                new_file,
                doc.cursor_line + 1,
                doc.cursor_column + 1
            )
        } else {
            format!("[WARN]{}", params.warning)
        };
        term.draw_line(rows.saturating_sub(2), &slice_display_cols(&status, 0, width))?;

        let command_line = match params.mode {
            Mode::Command => format!(":{}", params.command_buffer),
            Mode::Insert => "--INSERT--".to_string(),
            Mode::Normal => "minivim".to_string(),
        };
        term.draw_line(
            rows.saturating_sub(1),
            &slice_display_cols(&command_line, 0, width),
        )?;

        match params.mode {
            Mode::Command => {
                let col = 1 + params.command_buffer.width();
                term.set_cursor(rows.saturating_sub(1), col.min(width - 1) as u16)?;
            }
            _ => {
                term.set_cursor(doc_cursor.0 as u16, doc_cursor.1 as u16)?;
            }
        }
        term.flush()
    }

    fn adjust_horizontal_scroll(&mut self, cursor_display: usize, width: usize) {
        if self.wrap_mode != WrapMode::Scroll {
            self.horizontal_scroll = 0;
            return;
        }
        if cursor_display < self.horizontal_scroll {
            self.horizontal_scroll = cursor_display;
        } else if cursor_display >= self.horizontal_scroll + width {
            self.horizontal_scroll = cursor_display + 1 - width;
        }
    }

    /// One screen row per document line, shifted left by the horizontal
    /// scroll.
    fn draw_scrolled(
        &self,
        term: &mut dyn Terminal,
        doc: &Document,
        viewport: &Viewport,
        text_rows: usize,
        width: usize,
    ) -> io::Result<()> {
        for i in 0..text_rows {
            let doc_row = viewport.start_line + i;
            let text = if doc_row < doc.line_count() {
                let expanded = self.expand_tabs(doc.line(doc_row));
                slice_display_cols(&expanded, self.horizontal_scroll, width)
            } else {
                String::new()
            };
            term.draw_line(i as u16, &text)?;
        }
        Ok(())
    }

    /// Long lines fold across successive screen rows. Display-only: the
    /// viewport stays line-based, so folded tails past the bottom of the
    /// text area are clipped.
    fn draw_folded(
        &self,
        term: &mut dyn Terminal,
        doc: &Document,
        viewport: &Viewport,
        text_rows: usize,
        width: usize,
    ) -> io::Result<()> {
        let mut screen_row = 0usize;
        let mut doc_row = viewport.start_line;
        while screen_row < text_rows {
            if doc_row >= doc.line_count() {
                term.draw_line(screen_row as u16, "")?;
                screen_row += 1;
                continue;
            }
            let expanded = self.expand_tabs(doc.line(doc_row));
            for (_, chunk) in break_chunks(&expanded, width) {
                if screen_row >= text_rows {
                    break;
                }
                term.draw_line(screen_row as u16, &chunk)?;
                screen_row += 1;
            }
            doc_row += 1;
        }
        Ok(())
    }

    fn folded_cursor(
        &self,
        doc: &Document,
        viewport: &Viewport,
        width: usize,
        cursor_display: usize,
    ) -> (usize, usize) {
        let mut row = 0usize;
        for r in viewport.start_line..doc.cursor_line {
            row += break_chunks(&self.expand_tabs(doc.line(r)), width).len();
        }
        let chunks = break_chunks(&self.expand_tabs(doc.line(doc.cursor_line)), width);
        let last = chunks.len() - 1;
        for (i, (start, chunk)) in chunks.iter().enumerate() {
            if cursor_display < start + chunk.width().max(1) || i == last {
                return (row + i, cursor_display - start);
            }
        }
        (row, cursor_display)
    }

    /// Display column of a logical cursor column, accounting for tab
    /// expansion and wide characters.
    pub fn display_column(&self, line: &str, logical_col: usize) -> usize {
        let mut display_col = 0;
        for (i, ch) in line.chars().enumerate() {
            if i >= logical_col {
                break;
            }
            match ch {
                '\t' => display_col = (display_col / self.tab_stop + 1) * self.tab_stop,
                c => display_col += c.width().unwrap_or(1),
            }
        }
        display_col
    }

    fn expand_tabs(&self, line: &str) -> String {
        let mut out = String::new();
        let mut col = 0usize;
        for ch in line.chars() {
            if ch == '\t' {
                let next = (col / self.tab_stop + 1) * self.tab_stop;
                while col < next {
                    out.push(' ');
                    col += 1;
                }
            } else {
                out.push(ch);
                col += ch.width().unwrap_or(1);
            }
        }
        out
    }
}

/// Take up to `width` display columns starting at display column `skip`.
/// A wide character straddling the left edge is replaced by a space so the
/// slice keeps its alignment.
fn slice_display_cols(text: &str, skip: usize, width: usize) -> String {
    let mut out = String::new();
    let mut col = 0usize;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(1);
        if col + w > skip + width {
            break;
        }
        if col >= skip {
            out.push(ch);
        } else if col + w > skip {
            out.push(' ');
        }
        col += w;
    }
    out
}

/// Split a tab-expanded line into display rows of at most `width` columns.
/// Each chunk carries the display column it starts at. Always returns at
/// least one (possibly empty) chunk.
fn break_chunks(text: &str, width: usize) -> Vec<(usize, String)> {
    let width = width.max(1);
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut start = 0usize;
    let mut used = 0usize;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(1);
        if used + w > width && !current.is_empty() {
            chunks.push((start, current));
            start += used;
            current = String::new();
            used = 0;
        }
        current.push(ch);
        used += w;
    }
    chunks.push((start, current));
    chunks
}
