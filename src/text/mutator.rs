//! Attribute and content mutation over absolute ranges.
//!
//! [`Mutator`] is the single entry point for changing a [`Sequence`]. Every
//! operation validates its range, resolves and splits the affected runs,
//! applies the change to the crossed runs only, and returns a fresh,
//! normalized sequence. The input sequence is never modified.
//!
//! # Examples
//!
//! ```
//! use richrun::{Format, Mutator, Sequence, TextRange};
//! use richrun::unicode::text_to_code_points;
//!
//! let mut mutator = Mutator::new();
//! let seq = mutator
//!     .insert_content(&Sequence::new(), TextRange::caret(0), &text_to_code_points("hello world"))
//!     .unwrap();
//!
//! let seq = mutator.set_format(&seq, Some(TextRange::new(0, 5)), Format::BOLD).unwrap();
//! assert_eq!(seq.len(), 2);
//! assert!(seq.runs()[0].style.format.contains(Format::BOLD));
//!
//! // Toggling again over the same range restores a single plain run.
//! let seq = mutator.set_format(&seq, Some(TextRange::new(0, 5)), Format::BOLD).unwrap();
//! assert_eq!(seq.len(), 1);
//! ```

use crate::error::{Error, Result};
use crate::event::{LogLevel, emit_log_with};
use crate::style::{FontSize, Format, RunStyle};
use crate::text::range::TextRange;
use crate::text::resolver::resolve;
use crate::text::run::{Run, RunKind};
use crate::text::sequence::Sequence;
use crate::text::split::{SplitResult, split};

/// Attributes for text typed into an empty document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MutatorDefaults {
    /// Default font family.
    pub font_family: String,
    /// Default font size.
    pub font_size: FontSize,
    /// Default text color.
    pub color: String,
}

impl Default for MutatorDefaults {
    fn default() -> Self {
        Self {
            font_family: "Arial".to_string(),
            font_size: FontSize::Pt16,
            color: "#000000".to_string(),
        }
    }
}

impl MutatorDefaults {
    /// The unformatted style these defaults describe.
    #[must_use]
    pub fn style(&self) -> RunStyle {
        RunStyle::new(self.color.clone(), self.font_family.clone(), self.font_size)
    }
}

/// Applies edits to run sequences.
///
/// Besides the defaults, the mutator keeps a single remembered run: when an
/// edit empties the document, the attributes of its first text run are kept
/// so that typing into the now-empty document continues in that style.
#[derive(Clone, Debug, Default)]
pub struct Mutator {
    defaults: MutatorDefaults,
    last_actual: Option<Run>,
}

impl Mutator {
    /// Create a mutator with the standard defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mutator with custom defaults.
    #[must_use]
    pub fn with_defaults(defaults: MutatorDefaults) -> Self {
        Self {
            defaults,
            last_actual: None,
        }
    }

    /// Current defaults.
    #[must_use]
    pub fn defaults(&self) -> &MutatorDefaults {
        &self.defaults
    }

    /// Set the default font size.
    pub fn set_default_font_size(&mut self, font_size: FontSize) {
        self.defaults.font_size = font_size;
    }

    /// Set the default color.
    pub fn set_default_color(&mut self, color: impl Into<String>) {
        self.defaults.color = color.into();
    }

    /// Set the default font family.
    pub fn set_default_font_family(&mut self, font_family: impl Into<String>) {
        self.defaults.font_family = font_family.into();
    }

    /// The remembered run, if an edit has emptied the document.
    #[must_use]
    pub fn last_actual_run(&self) -> Option<&Run> {
        self.last_actual.as_ref()
    }

    /// Forget the remembered run.
    pub fn clear_last_actual_run(&mut self) {
        self.last_actual = None;
    }

    /// Toggle a format flag.
    ///
    /// With no range or a caret the whole sequence is affected. If every
    /// affected run already has `format`, it is cleared on all of them;
    /// otherwise it is set on all of them. [`Format::NONE`] clears all flags.
    pub fn set_format(
        &self,
        seq: &Sequence,
        range: Option<TextRange>,
        format: Format,
    ) -> Result<Sequence> {
        self.apply("set_format", seq, range, |runs, targets| {
            toggle_format(runs, targets, format);
        })
    }

    /// Overwrite the color of the affected runs.
    pub fn set_color(
        &self,
        seq: &Sequence,
        range: Option<TextRange>,
        color: &str,
    ) -> Result<Sequence> {
        self.apply("set_color", seq, range, |runs, targets| {
            for &i in targets {
                runs[i].style.color = color.to_string();
            }
        })
    }

    /// Overwrite the font family of the affected runs.
    pub fn set_font_family(
        &self,
        seq: &Sequence,
        range: Option<TextRange>,
        font_family: &str,
    ) -> Result<Sequence> {
        self.apply("set_font_family", seq, range, |runs, targets| {
            for &i in targets {
                runs[i].style.font_family = font_family.to_string();
            }
        })
    }

    /// Overwrite the font size of the affected runs.
    pub fn set_font_size(
        &self,
        seq: &Sequence,
        range: Option<TextRange>,
        font_size: FontSize,
    ) -> Result<Sequence> {
        self.apply("set_font_size", seq, range, |runs, targets| {
            for &i in targets {
                runs[i].style.font_size = font_size;
            }
        })
    }

    /// Replace `range` with `units`.
    ///
    /// A non-empty range is removed first; the units then go in at
    /// `range.start`. On a boundary between runs the earlier text run
    /// receives them. An empty sequence gets a new text run styled from the
    /// remembered run, or from the defaults when nothing is remembered.
    pub fn insert_content(
        &mut self,
        seq: &Sequence,
        range: TextRange,
        units: &[char],
    ) -> Result<Sequence> {
        range.validate(seq.flattened_len())?;

        let mut runs = seq.runs().to_vec();
        if !range.is_caret() {
            let remaining = split_range(&runs, range)?.without_crossed();
            if remaining.is_empty() {
                self.remember(&runs);
            }
            runs = remaining;
        }

        let runs = self.insert_at(runs, range.start, units)?;
        emit_log_with(LogLevel::Debug, || {
            format!(
                "insert_content range={}..{} units={} runs {}->{}",
                range.start,
                range.end,
                units.len(),
                seq.len(),
                runs.len()
            )
        });
        Ok(Sequence::normalized(runs))
    }

    /// Remove every code point inside `range`.
    ///
    /// The range is isolated by splitting, then the isolated pieces are
    /// dropped. Atomic runs touched by the range are dropped whole. A caret
    /// removes nothing.
    pub fn remove_range(&self, seq: &Sequence, range: TextRange) -> Result<Sequence> {
        range.validate(seq.flattened_len())?;
        if range.is_caret() {
            return Ok(Sequence::normalized(seq.runs().to_vec()));
        }

        let runs = split_range(seq.runs(), range)?.without_crossed();
        emit_log_with(LogLevel::Debug, || {
            format!(
                "remove_range range={}..{} runs {}->{}",
                range.start,
                range.end,
                seq.len(),
                runs.len()
            )
        });
        Ok(Sequence::normalized(runs))
    }

    /// Insert a line break at `position`.
    ///
    /// A text run strictly containing the position is split around the
    /// break. On a boundary the break goes after every run that ends at or
    /// before the position. It takes the style of the run before it, else
    /// the run after it, else the remembered run or the defaults.
    pub fn insert_line_break(&self, seq: &Sequence, position: usize) -> Result<Sequence> {
        seq.check_position(position)?;

        let mut runs = seq.runs().to_vec();
        let mut index = 0;
        for (start, run) in seq.spans() {
            let end = start + run.len();
            if end <= position {
                index += 1;
                continue;
            }
            if start < position {
                if !run.kind.is_splittable() {
                    return Err(Error::InsideAtomicRun { position });
                }
                let local = position - start;
                let pieces = [
                    run.fragment(0..local),
                    Run::line_break(run.style.clone()),
                    run.fragment(local..run.len()),
                ];
                runs.splice(index..=index, pieces);
                return Ok(line_break_inserted(seq, position, runs));
            }
            break;
        }

        let style = index
            .checked_sub(1)
            .and_then(|i| runs.get(i))
            .or_else(|| runs.get(index))
            .map_or_else(|| self.template_run().style, |run| run.style.clone());
        runs.insert(index, Run::line_break(style));
        Ok(line_break_inserted(seq, position, runs))
    }

    /// Remember the first text run of `before` if `after` is empty.
    ///
    /// Call after any edit that may have emptied the document. Only the most
    /// recent emptied state is kept.
    pub fn update_last_actual_run(&mut self, before: &Sequence, after: &Sequence) {
        if after.is_empty() {
            self.remember(before.runs());
        }
    }

    fn remember(&mut self, runs: &[Run]) {
        if let Some(run) = runs.iter().find(|run| run.kind.is_plain_text()) {
            self.last_actual = Some(run.emptied());
        }
    }

    fn template_run(&self) -> Run {
        self.last_actual
            .clone()
            .unwrap_or_else(|| Run::new(RunKind::PlainText, Vec::new(), self.defaults.style()))
    }

    fn insert_at(&self, mut runs: Vec<Run>, position: usize, units: &[char]) -> Result<Vec<Run>> {
        if runs.is_empty() {
            if position != 0 {
                return Err(Error::PositionOutOfBounds { position, len: 0 });
            }
            if !units.is_empty() {
                let mut run = self.template_run();
                run.content = units.to_vec();
                runs.push(run);
            }
            return Ok(runs);
        }
        if units.is_empty() {
            return Ok(runs);
        }

        // First atomic run whose edge is at `position`, and whether the
        // position is its right edge.
        let mut neighbour: Option<(usize, bool)> = None;
        let mut start = 0usize;
        for index in 0..runs.len() {
            let end = start + runs[index].len();
            if position < start {
                break;
            }
            if position <= end {
                if runs[index].kind.is_plain_text() {
                    let local = position - start;
                    runs[index]
                        .content
                        .splice(local..local, units.iter().copied());
                    return Ok(runs);
                }
                if position > start && position < end {
                    return Err(Error::InsideAtomicRun { position });
                }
                neighbour.get_or_insert((index, position == end));
            }
            start = end;
        }

        let (index, after) = neighbour.ok_or(Error::PositionOutOfBounds {
            position,
            len: start,
        })?;
        let run = Run::new(
            RunKind::PlainText,
            units.to_vec(),
            runs[index].style.clone(),
        );
        runs.insert(if after { index + 1 } else { index }, run);
        Ok(runs)
    }

    /// Resolve targets, apply `op` to them and normalize.
    fn apply<F>(&self, name: &str, seq: &Sequence, range: Option<TextRange>, op: F) -> Result<Sequence>
    where
        F: FnOnce(&mut [Run], &[usize]),
    {
        let len = seq.flattened_len();
        let (mut runs, targets) = match range {
            Some(range) if !range.is_caret() => {
                let SplitResult { runs, crossed } = split_range(seq.runs(), range)?;
                (runs, crossed)
            }
            Some(caret) => {
                caret.validate(len)?;
                (seq.runs().to_vec(), (0..seq.len()).collect())
            }
            None => (seq.runs().to_vec(), (0..seq.len()).collect()),
        };

        op(runs.as_mut_slice(), targets.as_slice());
        emit_log_with(LogLevel::Debug, || {
            format!(
                "{name} range={range:?} targets={} runs {}->{}",
                targets.len(),
                seq.len(),
                runs.len()
            )
        });
        Ok(Sequence::normalized(runs))
    }
}

fn line_break_inserted(seq: &Sequence, position: usize, runs: Vec<Run>) -> Sequence {
    emit_log_with(LogLevel::Debug, || {
        format!(
            "insert_line_break position={position} runs {}->{}",
            seq.len(),
            runs.len()
        )
    });
    Sequence::normalized(runs)
}

fn split_range(runs: &[Run], range: TextRange) -> Result<SplitResult> {
    let spans = resolve(runs, range)?;
    Ok(split(runs, &spans))
}

/// All-set clears, anything else sets.
fn toggle_format(runs: &mut [Run], targets: &[usize], format: Format) {
    let any = targets
        .iter()
        .any(|&i| runs[i].style.format.intersects(format));
    let every = targets
        .iter()
        .all(|&i| runs[i].style.format.intersects(format));

    for &i in targets {
        let current = &mut runs[i].style.format;
        if any && every {
            current.toggle(format);
        } else if format.is_none() {
            *current = Format::NONE;
        } else {
            current.insert(format);
        }
    }
}
