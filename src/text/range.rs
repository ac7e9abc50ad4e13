//! Absolute code-point ranges.

use crate::error::{Error, Result};

/// Half-open range `[start, end)` of code-point positions.
///
/// A zero-length range is a caret.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TextRange {
    pub start: usize,
    pub end: usize,
}

impl TextRange {
    /// Create a range. Ordering is checked by [`TextRange::validate`].
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Create a caret at `position`.
    #[must_use]
    pub const fn caret(position: usize) -> Self {
        Self {
            start: position,
            end: position,
        }
    }

    /// Number of code points covered.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if this is a caret.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Alias for [`TextRange::is_empty`].
    #[must_use]
    pub const fn is_caret(&self) -> bool {
        self.is_empty()
    }

    /// Check `start <= end <= len`.
    pub fn validate(&self, len: usize) -> Result<()> {
        if self.start > self.end {
            return Err(Error::InvertedRange {
                start: self.start,
                end: self.end,
            });
        }
        if self.end > len {
            return Err(Error::RangeOutOfBounds {
                start: self.start,
                end: self.end,
                len,
            });
        }
        Ok(())
    }

    /// Closed-interval overlap with `[start, end]`.
    ///
    /// Touching endpoints count as overlapping, so a run ending exactly at
    /// `self.start` overlaps.
    #[must_use]
    pub fn touches(&self, start: usize, end: usize) -> bool {
        start.max(end) >= self.start.min(self.end) && self.start.max(self.end) >= start.min(end)
    }
}

impl From<std::ops::Range<usize>> for TextRange {
    fn from(range: std::ops::Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl From<TextRange> for std::ops::Range<usize> {
    fn from(range: TextRange) -> Self {
        range.start..range.end
    }
}
