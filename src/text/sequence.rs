//! Ordered run sequences and absolute-position lookup.

use crate::error::{Error, Result};
use crate::text::normalize::normalize;
use crate::text::run::Run;

/// Where a caret sits relative to the run that owns it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaretPosition {
    /// Index of the run in the sequence.
    pub index: usize,
    /// Caret is on the run's left edge.
    pub left_bound: bool,
    /// Caret is on the run's right edge.
    pub right_bound: bool,
    /// Offset inside the run; 0 when on either edge.
    pub offset: usize,
}

/// Ordered list of runs.
///
/// A sequence exclusively owns its runs. Mutations consume a `&Sequence` and
/// return a fresh one; the input is never modified.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sequence {
    runs: Vec<Run>,
}

impl Sequence {
    /// Create an empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap runs as-is, without normalizing.
    #[must_use]
    pub fn from_runs(runs: Vec<Run>) -> Self {
        Self { runs }
    }

    /// Wrap runs and merge adjacent attribute-equal text.
    #[must_use]
    pub fn normalized(runs: Vec<Run>) -> Self {
        Self {
            runs: normalize(runs),
        }
    }

    /// Borrow the runs.
    #[must_use]
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Take the runs.
    #[must_use]
    pub fn into_runs(self) -> Vec<Run> {
        self.runs
    }

    /// Iterate over runs.
    pub fn iter(&self) -> std::slice::Iter<'_, Run> {
        self.runs.iter()
    }

    /// Get a run by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Run> {
        self.runs.get(index)
    }

    /// Number of runs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    /// Check if the sequence has no runs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Sum of every run's content length.
    #[must_use]
    pub fn flattened_len(&self) -> usize {
        self.runs.iter().map(Run::len).sum()
    }

    /// All content flattened into one string.
    #[must_use]
    pub fn text(&self) -> String {
        self.runs.iter().flat_map(|run| run.content.iter()).collect()
    }

    /// All content flattened into code points.
    #[must_use]
    pub fn code_points(&self) -> Vec<char> {
        self.runs
            .iter()
            .flat_map(|run| run.content.iter().copied())
            .collect()
    }

    /// Runs paired with their absolute start position.
    pub fn spans(&self) -> impl Iterator<Item = (usize, &Run)> + '_ {
        self.runs.iter().scan(0usize, |offset, run| {
            let start = *offset;
            *offset += run.len();
            Some((start, run))
        })
    }

    /// Fail unless `position <= flattened_len`.
    pub fn check_position(&self, position: usize) -> Result<()> {
        let len = self.flattened_len();
        if position > len {
            return Err(Error::PositionOutOfBounds { position, len });
        }
        Ok(())
    }

    /// First run whose closed span `[start, end]` contains `position`.
    ///
    /// On a boundary between two runs the earlier one wins.
    pub fn run_at(&self, position: usize) -> Result<(usize, &Run)> {
        if self.runs.is_empty() {
            return Err(Error::EmptySequence);
        }
        self.check_position(position)?;
        self.spans()
            .enumerate()
            .find(|(_, (start, run))| position >= *start && position <= start + run.len())
            .map(|(index, (_, run))| (index, run))
            .ok_or(Error::PositionOutOfBounds {
                position,
                len: self.flattened_len(),
            })
    }

    /// Describe where a caret at `position` sits.
    ///
    /// Returns `None` for an empty sequence or a position past the end.
    #[must_use]
    pub fn caret_at(&self, position: usize) -> Option<CaretPosition> {
        for (index, (start, run)) in self.spans().enumerate() {
            let end = start + run.len();
            if position == start {
                return Some(CaretPosition {
                    index,
                    left_bound: true,
                    right_bound: false,
                    offset: 0,
                });
            }
            if position == end {
                return Some(CaretPosition {
                    index,
                    left_bound: false,
                    right_bound: true,
                    offset: 0,
                });
            }
            if position > start && position < end {
                return Some(CaretPosition {
                    index,
                    left_bound: false,
                    right_bound: false,
                    offset: position - start,
                });
            }
        }
        None
    }
}

impl From<Vec<Run>> for Sequence {
    fn from(runs: Vec<Run>) -> Self {
        Self::from_runs(runs)
    }
}

impl FromIterator<Run> for Sequence {
    fn from_iter<I: IntoIterator<Item = Run>>(iter: I) -> Self {
        Self::from_runs(iter.into_iter().collect())
    }
}

impl IntoIterator for Sequence {
    type Item = Run;
    type IntoIter = std::vec::IntoIter<Run>;

    fn into_iter(self) -> Self::IntoIter {
        self.runs.into_iter()
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Run;
    type IntoIter = std::slice::Iter<'a, Run>;

    fn into_iter(self) -> Self::IntoIter {
        self.runs.iter()
    }
}
