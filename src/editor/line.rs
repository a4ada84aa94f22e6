//! Single-line editor driven by decoded key events.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::term::KeyEvent;

/// Result of applying one key event to the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// State changed; the caller should re-render.
    Redraw,
    /// Event was a no-op (clamped cursor motion, unknown sequence).
    Ignored,
    /// Enter: the finalized value, with the default substituted for an empty
    /// buffer when one is configured.
    Submitted(String),
    /// Ctrl-C.
    Cancelled,
}

/// Line editor state: UTF-8 buffer plus a byte cursor on a char boundary.
///
/// Cursor motion and deletion operate on grapheme clusters so multi-byte
/// input edits the way it reads. Invariant: `0 <= cursor <= buffer.len()`.
pub struct LineEditor {
    buffer: String,
    cursor: usize,
    masked: bool,
    default_value: Option<String>,
}

/// Placeholder glyph shown per grapheme when input is masked.
const MASK_GLYPH: char = '*';

impl LineEditor {
    pub fn new(masked: bool, default_value: Option<String>) -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            masked,
            default_value,
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Byte length of the grapheme immediately before the cursor.
    fn grapheme_before(&self) -> usize {
        self.buffer[..self.cursor]
            .graphemes(true)
            .next_back()
            .map_or(0, str::len)
    }

    /// Byte length of the grapheme at the cursor.
    fn grapheme_at(&self) -> usize {
        self.buffer[self.cursor..]
            .graphemes(true)
            .next()
            .map_or(0, str::len)
    }

    fn insert(&mut self, text: &str) {
        self.buffer.insert_str(self.cursor, text);
        self.cursor += text.len();
    }

    pub fn apply(&mut self, event: &KeyEvent) -> EditOutcome {
        match event {
            KeyEvent::Char(text) => {
                if text.is_empty() {
                    return EditOutcome::Ignored;
                }
                self.insert(text);
                EditOutcome::Redraw
            }
            KeyEvent::Backspace => {
                let len = self.grapheme_before();
                if len == 0 {
                    return EditOutcome::Ignored;
                }
                let start = self.cursor - len;
                self.buffer.replace_range(start..self.cursor, "");
                self.cursor = start;
                EditOutcome::Redraw
            }
            KeyEvent::Delete => {
                let len = self.grapheme_at();
                if len == 0 {
                    return EditOutcome::Ignored;
                }
                self.buffer.replace_range(self.cursor..self.cursor + len, "");
                EditOutcome::Redraw
            }
            KeyEvent::ArrowLeft => {
                let len = self.grapheme_before();
                if len == 0 {
                    return EditOutcome::Ignored;
                }
                self.cursor -= len;
                EditOutcome::Redraw
            }
            KeyEvent::ArrowRight => {
                let len = self.grapheme_at();
                if len == 0 {
                    return EditOutcome::Ignored;
                }
                self.cursor += len;
                EditOutcome::Redraw
            }
            KeyEvent::Home => {
                if self.cursor == 0 {
                    return EditOutcome::Ignored;
                }
                self.cursor = 0;
                EditOutcome::Redraw
            }
            KeyEvent::End => {
                if self.cursor == self.buffer.len() {
                    return EditOutcome::Ignored;
                }
                self.cursor = self.buffer.len();
                EditOutcome::Redraw
            }
            KeyEvent::Enter => {
                let value = if self.buffer.is_empty() {
                    self.default_value
                        .clone()
                        .unwrap_or_default()
                } else {
                    self.buffer.clone()
                };
                EditOutcome::Submitted(value)
            }
            KeyEvent::Cancel => EditOutcome::Cancelled,
            KeyEvent::ArrowUp | KeyEvent::ArrowDown | KeyEvent::Unknown(_) => EditOutcome::Ignored,
        }
    }

    /// Full in-place redraw: return to column 0, clear the line, rewrite the
    /// prompt and buffer, then step the cursor back to its logical column.
    ///
    /// Column math uses display width (masked: one glyph per grapheme), never
    /// byte counts, so multi-byte input renders with the cursor in the right
    /// place.
    pub fn render(&self, prompt: &str) -> String {
        let mut out = String::with_capacity(prompt.len() + self.buffer.len() + 16);
        out.push_str("\r\x1b[K");
        out.push_str(prompt);
        out.push(' ');

        let move_back = if self.masked {
            for _ in self.buffer.graphemes(true) {
                out.push(MASK_GLYPH);
            }
            self.buffer[self.cursor..].graphemes(true).count()
        } else {
            out.push_str(&self.buffer);
            self.buffer[self.cursor..].width()
        };

        if move_back > 0 {
            out.push_str(&format!("\x1b[{move_back}D"));
        }
        out
    }
}
