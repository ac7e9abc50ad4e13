//! Code-point cursor over a text buffer.
//!
//! The buffer is held in a [`ropey::Rope`], which indexes by `char` (Unicode
//! scalar value) in O(log n). The cursor is therefore always a code-point
//! index, never a byte or UTF-16 offset.

use crate::error::{Error, Result};
use ropey::Rope;

/// Code-point cursor with a consume accumulator.
///
/// # Examples
///
/// ```
/// use richrun::unicode::Scanner;
///
/// let mut scanner = Scanner::new();
/// scanner.load("a😀b");
/// assert_eq!(scanner.code_point_count(), 3);
///
/// scanner.skip(1);
/// assert_eq!(scanner.peek(), Some('😀'));
/// scanner.consume().unwrap();
/// scanner.move_forward();
/// scanner.consume().unwrap();
/// assert_eq!(scanner.take_consumed(), vec!['😀', 'b']);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Scanner {
    text: Rope,
    cursor: usize,
    consumed: Vec<char>,
}

impl Scanner {
    /// Create a scanner over an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scanner over `text`.
    #[must_use]
    pub fn with_text(text: &str) -> Self {
        let mut scanner = Self::new();
        scanner.load(text);
        scanner
    }

    /// Replace the buffer and reset the cursor to 0.
    ///
    /// The consume accumulator is left untouched; drain it with
    /// [`Scanner::take_consumed`].
    pub fn load(&mut self, text: &str) {
        self.text = Rope::from_str(text);
        self.cursor = 0;
    }

    /// Code point under the cursor, or `None` at or past the end.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.text.get_char(self.cursor)
    }

    /// Code point immediately before the cursor, or `None` at the start.
    #[must_use]
    pub fn peek_back(&self) -> Option<char> {
        self.cursor
            .checked_sub(1)
            .and_then(|idx| self.text.get_char(idx))
    }

    /// Advance the cursor by one code point.
    pub fn move_forward(&mut self) {
        self.cursor += 1;
    }

    /// Step the cursor back by one code point.
    pub fn move_back(&mut self) -> Result<()> {
        self.cursor = self.cursor.checked_sub(1).ok_or(Error::ScannerUnderflow)?;
        Ok(())
    }

    /// Advance the cursor by `n` code points.
    pub fn skip(&mut self, n: usize) {
        self.cursor += n;
    }

    /// Current cursor position in code points.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor to an absolute code-point position.
    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor;
    }

    /// Whether the cursor is at or past the end of the buffer.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.cursor >= self.text.len_chars()
    }

    /// Append the code point under the cursor to the accumulator.
    ///
    /// Does not move the cursor.
    pub fn consume(&mut self) -> Result<()> {
        let c = self.peek().ok_or(Error::ScannerExhausted {
            cursor: self.cursor,
        })?;
        self.consumed.push(c);
        Ok(())
    }

    /// Drain and return the accumulator.
    pub fn take_consumed(&mut self) -> Vec<char> {
        std::mem::take(&mut self.consumed)
    }

    /// Number of code points in the loaded buffer.
    ///
    /// Independent of the cursor position.
    #[must_use]
    pub fn code_point_count(&self) -> usize {
        self.text.len_chars()
    }
}
