//! Special phrase detection.
//!
//! A special phrase is a registered trigger code point (such as `#`) followed
//! by one or more Latin letters, e.g. `#name`. The trigger must start the
//! buffer or follow inline whitespace; a trigger with no letters after it is
//! discarded.
//!
//! # Examples
//!
//! ```
//! use richrun::PhraseParser;
//!
//! let mut parser = PhraseParser::with_triggers(['#']);
//! let phrases = parser.parse("say #name now").unwrap();
//!
//! assert_eq!(phrases.len(), 1);
//! assert_eq!(phrases[0].position, 4);
//! assert_eq!(phrases[0].name(), "name");
//! assert_eq!(phrases[0].code_point_count, 5);
//!
//! assert!(parser.parse("x#name").unwrap().is_empty());
//! ```

use crate::error::Result;
use crate::text::{Sequence, TextRange};
use crate::unicode::{Scanner, is_alpha, is_whitespace, text_to_code_points};

/// A recognized trigger-plus-letters phrase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpecialPhrase {
    /// The trigger code point.
    pub trigger: char,
    /// Code-point offset of the trigger.
    pub position: usize,
    /// Letters after the trigger, as typed.
    pub content: Vec<char>,
    /// Letters plus the trigger.
    pub code_point_count: usize,
}

impl SpecialPhrase {
    /// The letters as a string, without the trigger.
    #[must_use]
    pub fn name(&self) -> String {
        self.content.iter().collect()
    }

    /// Absolute range covered by the phrase, trigger included.
    #[must_use]
    pub fn range(&self) -> TextRange {
        TextRange::new(self.position, self.position + self.code_point_count)
    }
}

/// Parser state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    /// Looking for a whitespace-prefixed trigger.
    ExpectTrigger,
    /// Inside a phrase, accumulating letters in the scanner.
    ConsumingLetters { trigger: char, start: usize },
}

/// Emit the phrase, or discard it when no letters followed the trigger.
fn finish(trigger: char, start: usize, letters: Vec<char>) -> Option<SpecialPhrase> {
    if letters.is_empty() {
        return None;
    }
    Some(SpecialPhrase {
        trigger,
        position: start,
        code_point_count: letters.len() + 1,
        content: letters,
    })
}

/// Whether a trigger at the cursor may start a phrase.
///
/// Only a present, non-whitespace predecessor rejects it.
fn accepts_predecessor(prev: Option<char>) -> bool {
    prev.is_none_or(is_whitespace)
}

/// Scans text for special phrases.
#[derive(Clone, Debug, Default)]
pub struct PhraseParser {
    triggers: Vec<char>,
    scanner: Scanner,
}

impl PhraseParser {
    /// Create a parser with no triggers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with the given triggers.
    #[must_use]
    pub fn with_triggers<I>(triggers: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        let mut parser = Self::new();
        for trigger in triggers {
            parser.add_trigger(trigger);
        }
        parser
    }

    /// Register a trigger code point.
    pub fn add_trigger(&mut self, trigger: char) {
        if !self.triggers.contains(&trigger) {
            self.triggers.push(trigger);
        }
    }

    /// Registered triggers, in registration order.
    #[must_use]
    pub fn triggers(&self) -> &[char] {
        &self.triggers
    }

    /// Check if `c` is a registered trigger.
    #[must_use]
    pub fn is_trigger(&self, c: char) -> bool {
        self.triggers.contains(&c)
    }

    /// Find every special phrase in `text`, in order.
    pub fn parse(&mut self, text: &str) -> Result<Vec<SpecialPhrase>> {
        self.scanner.load(text);
        self.scanner.take_consumed();

        let mut phrases = Vec::new();
        let mut state = State::ExpectTrigger;
        loop {
            let current = self.scanner.peek();
            match state {
                State::ExpectTrigger => {
                    let Some(c) = current else {
                        break;
                    };
                    if self.is_trigger(c) && accepts_predecessor(self.scanner.peek_back()) {
                        state = State::ConsumingLetters {
                            trigger: c,
                            start: self.scanner.cursor(),
                        };
                    }
                    self.scanner.move_forward();
                }
                State::ConsumingLetters { trigger, start } => {
                    if current.is_some_and(is_alpha) {
                        self.scanner.consume()?;
                        self.scanner.move_forward();
                    } else {
                        // The terminator is re-examined as a possible trigger.
                        phrases.extend(finish(trigger, start, self.scanner.take_consumed()));
                        state = State::ExpectTrigger;
                    }
                }
            }
        }

        Ok(phrases)
    }

    /// Find every special phrase in a sequence's flattened content.
    pub fn parse_sequence(&mut self, seq: &Sequence) -> Result<Vec<SpecialPhrase>> {
        self.parse(&seq.text())
    }

    /// Convert raw input text into content units.
    #[must_use]
    pub fn convert_to_code_points(&self, text: &str) -> Vec<char> {
        text_to_code_points(text)
    }
}
