//! Documents and editing sessions.
//!
//! This module provides [`EditSession`], which owns a [`Document`] together
//! with the [`Mutator`] and [`PhraseParser`] that edit it. An input layer
//! translates user gestures into an [`EditIntent`] plus an absolute
//! selection, and the session turns that into a new normalized sequence.
//!
//! # Examples
//!
//! ```
//! use richrun::{EditIntent, EditSession, Format, TextRange};
//!
//! let mut session = EditSession::new();
//! let outcome = session
//!     .apply(EditIntent::InsertText("hello #name".into()), Some(TextRange::caret(0)))
//!     .unwrap();
//! assert_eq!(outcome.selection, Some(TextRange::caret(11)));
//! assert_eq!(outcome.phrases.len(), 1);
//!
//! session
//!     .apply(EditIntent::SetFormat(Format::BOLD), Some(TextRange::new(0, 5)))
//!     .unwrap();
//! assert_eq!(session.runs().len(), 2);
//!
//! // Backspace at the end removes one code point.
//! session
//!     .apply(EditIntent::DeleteBackward, Some(TextRange::caret(11)))
//!     .unwrap();
//! assert_eq!(session.text(), "hello #nam");
//! ```

use std::fmt;

use crate::error::{Error, Result};
use crate::event::{DOCUMENT_CHANGED, LogLevel, emit_event, emit_log_with};
use crate::parser::{PhraseParser, SpecialPhrase};
use crate::style::{FontSize, Format};
use crate::text::{Mutator, MutatorDefaults, RunSpan, Sequence, TextRange, resolve};
use crate::unicode::{code, is_line_break};

/// Horizontal alignment of a document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

/// A document: a run sequence plus block-level presentation.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    /// Host-assigned identifier.
    pub id: String,
    /// Content, always normalized once owned by a session.
    pub runs: Sequence,
    /// Horizontal alignment.
    pub align: TextAlign,
    /// Line height as a multiple of the font size.
    pub line_height: f32,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            id: String::new(),
            runs: Sequence::new(),
            align: TextAlign::Left,
            line_height: 1.26,
        }
    }
}

impl Document {
    /// Create an empty document with the given id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Return the document with the given content.
    #[must_use]
    pub fn with_runs(mut self, runs: Sequence) -> Self {
        self.runs = runs;
        self
    }
}

/// Session configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionOptions {
    /// Attributes for text typed into an empty document.
    pub defaults: MutatorDefaults,
    /// Special phrase triggers.
    pub triggers: Vec<char>,
    /// Alignment of the initial document.
    pub align: TextAlign,
    /// Line height of the initial document.
    pub line_height: f32,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            defaults: MutatorDefaults::default(),
            triggers: vec![code::HASH],
            align: TextAlign::Left,
            line_height: 1.26,
        }
    }
}

/// A single user edit, already detached from any display surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditIntent {
    /// Typed text replacing the selection. Line terminators become
    /// line-break runs.
    InsertText(String),
    /// Pasted text replacing the selection, handled like `InsertText`.
    Paste(String),
    /// Backspace: the selection, or the code point before a caret.
    DeleteBackward,
    /// Delete: the selection, or the code point after a caret.
    DeleteForward,
    /// Toggle a format flag.
    SetFormat(Format),
    /// Set the text color.
    SetColor(String),
    /// Set the font family.
    SetFontFamily(String),
    /// Set the font size.
    SetFontSize(FontSize),
}

/// Result of applying an intent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditOutcome {
    /// Whether the document changed.
    pub changed: bool,
    /// Where the caret or selection belongs after the edit.
    pub selection: Option<TextRange>,
    /// Special phrases in the updated content.
    pub phrases: Vec<SpecialPhrase>,
}

type Subscriber = Box<dyn FnMut(&Document)>;

/// One editing session over one document.
///
/// Not thread-safe; edits are applied one at a time.
pub struct EditSession {
    document: Document,
    mutator: Mutator,
    parser: PhraseParser,
    subscribers: Vec<Subscriber>,
    revision: u64,
}

impl fmt::Debug for EditSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditSession")
            .field("document", &self.document)
            .field("mutator", &self.mutator)
            .field("parser", &self.parser)
            .field("subscribers", &self.subscribers.len())
            .field("revision", &self.revision)
            .finish()
    }
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditSession {
    /// Create a session over an empty document with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(SessionOptions::default())
    }

    /// Create a session over an empty document.
    #[must_use]
    pub fn with_options(options: SessionOptions) -> Self {
        let document = Document {
            align: options.align,
            line_height: options.line_height,
            ..Document::default()
        };
        Self {
            document,
            mutator: Mutator::with_defaults(options.defaults),
            parser: PhraseParser::with_triggers(options.triggers),
            subscribers: Vec::new(),
            revision: 0,
        }
    }

    /// The current document.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The current run sequence.
    #[must_use]
    pub fn runs(&self) -> &Sequence {
        &self.document.runs
    }

    /// Flattened text of the current document.
    #[must_use]
    pub fn text(&self) -> String {
        self.document.runs.text()
    }

    /// Number of accepted changes so far.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The session's mutator.
    #[must_use]
    pub fn mutator(&self) -> &Mutator {
        &self.mutator
    }

    /// The session's phrase parser.
    #[must_use]
    pub fn parser(&self) -> &PhraseParser {
        &self.parser
    }

    /// Register an additional special phrase trigger.
    pub fn add_trigger(&mut self, trigger: char) {
        self.parser.add_trigger(trigger);
    }

    /// Call `subscriber` after every accepted change.
    pub fn subscribe<F>(&mut self, subscriber: F)
    where
        F: FnMut(&Document) + 'static,
    {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Replace the whole document. Its runs are normalized.
    pub fn set_document(&mut self, document: Document) {
        let runs = Sequence::normalized(document.runs.into_runs());
        self.document = Document { runs, ..document };
        self.commit();
    }

    /// Set the alignment.
    pub fn set_align(&mut self, align: TextAlign) {
        self.document.align = align;
        self.commit();
    }

    /// Set the line height.
    pub fn set_line_height(&mut self, line_height: f32) {
        self.document.line_height = line_height;
        self.commit();
    }

    /// Set the default font size for typing into an empty document.
    pub fn set_default_font_size(&mut self, font_size: FontSize) {
        self.mutator.set_default_font_size(font_size);
    }

    /// Set the default color for typing into an empty document.
    pub fn set_default_color(&mut self, color: impl Into<String>) {
        self.mutator.set_default_color(color);
    }

    /// Set the default font family for typing into an empty document.
    pub fn set_default_font_family(&mut self, font_family: impl Into<String>) {
        self.mutator.set_default_font_family(font_family);
    }

    /// Special phrases in the current content.
    pub fn phrases(&mut self) -> Result<Vec<SpecialPhrase>> {
        self.parser.parse_sequence(&self.document.runs)
    }

    /// How `selection` covers the current runs.
    ///
    /// Without a selection every run is reported as fully covered.
    pub fn selection_spans(&self, selection: Option<TextRange>) -> Result<Vec<RunSpan>> {
        match selection {
            Some(range) => resolve(self.document.runs.runs(), range),
            None => Ok(self
                .document
                .runs
                .spans()
                .enumerate()
                .map(|(index, (run_start, _))| RunSpan {
                    index,
                    run_start,
                    is_full: true,
                    local_start: 0,
                    local_end: 0,
                })
                .collect()),
        }
    }

    /// Apply one edit.
    ///
    /// A contract violation leaves the document untouched and is returned
    /// to the caller; retry with a fresh selection.
    pub fn apply(
        &mut self,
        intent: EditIntent,
        selection: Option<TextRange>,
    ) -> Result<EditOutcome> {
        let edited = self.edit(&intent, selection).inspect_err(|err| {
            emit_log_with(LogLevel::Warn, || {
                format!("rejected {intent:?} at {selection:?}: {err}")
            });
        })?;

        let (runs, selection) = match edited {
            Some((runs, hint)) if runs != self.document.runs => (runs, hint),
            Some((_, hint)) => return self.unchanged(hint),
            None => return self.unchanged(selection),
        };

        self.document.runs = runs;
        self.commit();
        Ok(EditOutcome {
            changed: true,
            selection,
            phrases: self.phrases()?,
        })
    }

    fn unchanged(&mut self, selection: Option<TextRange>) -> Result<EditOutcome> {
        Ok(EditOutcome {
            changed: false,
            selection,
            phrases: self.phrases()?,
        })
    }

    /// New runs and selection, or `None` for a no-op.
    fn edit(
        &mut self,
        intent: &EditIntent,
        selection: Option<TextRange>,
    ) -> Result<Option<(Sequence, Option<TextRange>)>> {
        let current = &self.document.runs;
        let edited = match intent {
            EditIntent::InsertText(text) | EditIntent::Paste(text) => {
                let range = selection.ok_or(Error::NoSelection)?;
                let units = self.parser.convert_to_code_points(text);
                let (units, breaks) = extract_line_breaks(&units);
                let mut runs = self.mutator.insert_content(current, range, &units)?;
                for offset in breaks.into_iter().rev() {
                    runs = self.mutator.insert_line_break(&runs, range.start + offset)?;
                }
                (runs, Some(TextRange::caret(range.start + units.len())))
            }
            EditIntent::DeleteBackward | EditIntent::DeleteForward => {
                let range = selection.ok_or(Error::NoSelection)?;
                range.validate(current.flattened_len())?;
                let range = if range.is_caret() {
                    let widened = if *intent == EditIntent::DeleteBackward {
                        range.start.checked_sub(1).map(|s| TextRange::new(s, range.start))
                    } else {
                        Some(TextRange::new(range.start, range.start + 1))
                            .filter(|r| r.end <= current.flattened_len())
                    };
                    let Some(widened) = widened else {
                        return Ok(None);
                    };
                    widened
                } else {
                    range
                };
                let runs = self.mutator.remove_range(current, range)?;
                self.mutator.update_last_actual_run(current, &runs);
                (runs, Some(TextRange::caret(range.start)))
            }
            EditIntent::SetFormat(format) => {
                (self.mutator.set_format(current, selection, *format)?, selection)
            }
            EditIntent::SetColor(color) => {
                (self.mutator.set_color(current, selection, color)?, selection)
            }
            EditIntent::SetFontFamily(family) => (
                self.mutator.set_font_family(current, selection, family)?,
                selection,
            ),
            EditIntent::SetFontSize(size) => {
                (self.mutator.set_font_size(current, selection, *size)?, selection)
            }
        };
        Ok(Some(edited))
    }

    fn commit(&mut self) {
        self.revision += 1;
        for subscriber in &mut self.subscribers {
            subscriber(&self.document);
        }
        emit_event(
            DOCUMENT_CHANGED,
            &format!(
                "revision={} runs={} len={}",
                self.revision,
                self.document.runs.len(),
                self.document.runs.flattened_len()
            ),
        );
    }
}

/// Split line terminators out of typed text.
///
/// Returns the remaining units and, per terminator, its offset into them.
/// `\r\n` is a single break.
fn extract_line_breaks(units: &[char]) -> (Vec<char>, Vec<usize>) {
    let mut text = Vec::with_capacity(units.len());
    let mut breaks = Vec::new();
    let mut units = units.iter().copied().peekable();
    while let Some(c) = units.next() {
        if is_line_break(c) {
            if c == code::RETURN {
                units.next_if_eq(&code::NEW_LINE);
            }
            breaks.push(text.len());
        } else {
            text.push(c);
        }
    }
    (text, breaks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::RunStyle;
    use crate::text::{Run, RunKind};
    use std::cell::Cell;
    use std::rc::Rc;

    fn gray() -> RunStyle {
        RunStyle::new("gray", "Arial", FontSize::Pt16)
    }

    fn session_with(text: &str) -> EditSession {
        let mut session = EditSession::new();
        session.set_document(
            Document::new("1").with_runs(Sequence::from_runs(vec![Run::text(text, gray())])),
        );
        session
    }

    #[test]
    fn test_typing_into_empty_document() {
        let mut session = EditSession::new();
        for (i, c) in "hi".chars().enumerate() {
            let outcome = session
                .apply(EditIntent::InsertText(c.to_string()), Some(TextRange::caret(i)))
                .unwrap();
            assert!(outcome.changed);
            assert_eq!(outcome.selection, Some(TextRange::caret(i + 1)));
        }
        assert_eq!(session.text(), "hi");
        assert_eq!(session.runs().len(), 1);
        assert_eq!(session.runs().runs()[0].style.font_family, "Arial");
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut session = session_with("abc");
        let revision = session.revision();
        let outcome = session
            .apply(EditIntent::DeleteBackward, Some(TextRange::caret(0)))
            .unwrap();
        assert!(!outcome.changed);
        assert_eq!(session.revision(), revision);
        assert_eq!(session.text(), "abc");
    }

    #[test]
    fn test_delete_forward() {
        let mut session = session_with("abc");
        session
            .apply(EditIntent::DeleteForward, Some(TextRange::caret(1)))
            .unwrap();
        assert_eq!(session.text(), "ac");

        let outcome = session
            .apply(EditIntent::DeleteForward, Some(TextRange::caret(2)))
            .unwrap();
        assert!(!outcome.changed);
    }

    #[test]
    fn test_delete_selection_then_type_keeps_style() {
        let mut session = session_with("abc");
        session
            .apply(EditIntent::SetColor("red".into()), None)
            .unwrap();
        session
            .apply(EditIntent::DeleteBackward, Some(TextRange::new(0, 3)))
            .unwrap();
        assert!(session.runs().is_empty());

        session
            .apply(EditIntent::InsertText("z".into()), Some(TextRange::caret(0)))
            .unwrap();
        assert_eq!(session.runs().runs()[0].style.color, "red");
    }

    #[test]
    fn test_paste_counts_code_points() {
        let mut session = session_with("ab");
        let outcome = session
            .apply(EditIntent::Paste("🎉🎉".into()), Some(TextRange::caret(1)))
            .unwrap();
        assert_eq!(session.text(), "a🎉🎉b");
        assert_eq!(outcome.selection, Some(TextRange::caret(3)));
    }

    #[test]
    fn test_paste_turns_newlines_into_breaks() {
        let mut session = session_with("xy");
        let outcome = session
            .apply(EditIntent::Paste("ab\ncd\r\n\nef".into()), Some(TextRange::caret(1)))
            .unwrap();
        assert_eq!(session.text(), "xabcdefy");
        assert_eq!(outcome.selection, Some(TextRange::caret(7)));

        let kinds: Vec<&RunKind> = session.runs().iter().map(|r| &r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                &RunKind::PlainText,
                &RunKind::LineBreak,
                &RunKind::PlainText,
                &RunKind::LineBreak,
                &RunKind::LineBreak,
                &RunKind::PlainText,
            ]
        );
        let parts: Vec<String> = session.runs().iter().map(Run::content_string).collect();
        assert_eq!(parts, vec!["xab", "", "cd", "", "", "efy"]);
    }

    #[test]
    fn test_extract_line_breaks() {
        let (text, breaks) = extract_line_breaks(&['\n', 'a', '\r', '\n', 'b', '\r']);
        assert_eq!(text, vec!['a', 'b']);
        assert_eq!(breaks, vec![0, 1, 2]);
    }

    #[test]
    fn test_unchanged_edit_keeps_revision() {
        let mut session = session_with("abc");
        let revision = session.revision();

        let outcome = session
            .apply(EditIntent::SetColor("gray".into()), Some(TextRange::new(0, 2)))
            .unwrap();
        assert!(!outcome.changed);
        assert_eq!(outcome.selection, Some(TextRange::new(0, 2)));

        let outcome = session
            .apply(EditIntent::InsertText(String::new()), Some(TextRange::caret(1)))
            .unwrap();
        assert!(!outcome.changed);
        assert_eq!(outcome.selection, Some(TextRange::caret(1)));
        assert_eq!(session.revision(), revision);

        let outcome = session
            .apply(EditIntent::SetColor("red".into()), Some(TextRange::new(0, 2)))
            .unwrap();
        assert!(outcome.changed);
        assert_eq!(session.revision(), revision + 1);
    }

    #[test]
    fn test_content_edit_needs_selection() {
        let mut session = session_with("ab");
        assert_eq!(
            session.apply(EditIntent::InsertText("x".into()), None),
            Err(Error::NoSelection)
        );
        assert_eq!(session.text(), "ab");
    }

    #[test]
    fn test_rejected_edit_leaves_document() {
        let mut session = session_with("ab");
        let before = session.document().clone();
        assert!(
            session
                .apply(EditIntent::SetFormat(Format::BOLD), Some(TextRange::new(1, 9)))
                .is_err()
        );
        assert_eq!(session.document(), &before);
    }

    #[test]
    fn test_subscribers_notified() {
        let mut session = EditSession::new();
        let calls = Rc::new(Cell::new(0));
        let seen = Rc::clone(&calls);
        session.subscribe(move |_doc| seen.set(seen.get() + 1));

        session
            .apply(EditIntent::InsertText("a".into()), Some(TextRange::caret(0)))
            .unwrap();
        session.set_align(TextAlign::Center);
        session.set_line_height(2.0);
        assert_eq!(calls.get(), 3);
        assert_eq!(session.document().align, TextAlign::Center);
    }

    #[test]
    fn test_selection_spans() {
        let mut session = EditSession::new();
        session.set_document(Document::new("x").with_runs(Sequence::from_runs(vec![
            Run::text("ab", gray()),
            Run::text("cd", gray().with_bold()),
        ])));

        let all = session.selection_spans(None).unwrap();
        assert_eq!(all.len(), 2);
        assert!(all.iter().all(|s| s.is_full));
        assert_eq!(all[1].run_start, 2);

        let partial = session.selection_spans(Some(TextRange::new(1, 3))).unwrap();
        assert_eq!(partial.len(), 2);
        assert!(!partial[0].is_full);
    }

    #[test]
    fn test_set_document_normalizes() {
        let mut session = EditSession::new();
        session.set_document(Document::new("n").with_runs(Sequence::from_runs(vec![
            Run::text("Hello ", gray()),
            Run::text("my ", gray()),
            Run::text("friend", gray()),
        ])));
        assert_eq!(session.runs().len(), 1);
        assert_eq!(session.document().id, "n");
    }

    #[test]
    fn test_custom_options() {
        let options = SessionOptions {
            triggers: vec!['@'],
            defaults: MutatorDefaults {
                font_family: "Mono".into(),
                font_size: FontSize::Pt12,
                color: "blue".into(),
            },
            ..SessionOptions::default()
        };
        let mut session = EditSession::with_options(options);
        let outcome = session
            .apply(EditIntent::InsertText("@ann #tag".into()), Some(TextRange::caret(0)))
            .unwrap();
        assert_eq!(outcome.phrases.len(), 1);
        assert_eq!(outcome.phrases[0].trigger, '@');
        assert_eq!(session.runs().runs()[0].style.font_family, "Mono");
    }
}
