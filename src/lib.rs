//! `richrun` - Rich-text run model and editing core
//!
//! Content is an ordered sequence of styled runs. Every edit is expressed as
//! an absolute code-point range, resolved against the runs it touches, split
//! so that no run straddles the range, applied, and normalized so that
//! adjacent text runs with equal attributes merge back together.
//!
//! # Examples
//!
//! ```
//! use richrun::{EditIntent, EditSession, Format, TextRange};
//!
//! let mut session = EditSession::new();
//! session
//!     .apply(EditIntent::InsertText("hello world".into()), Some(TextRange::caret(0)))
//!     .unwrap();
//! session
//!     .apply(EditIntent::SetFormat(Format::ITALIC), Some(TextRange::new(6, 11)))
//!     .unwrap();
//!
//! let parts: Vec<String> = session.runs().iter().map(|r| r.content_string()).collect();
//! assert_eq!(parts, ["hello ", "world"]);
//! ```

// Crate-level lint configuration
#![warn(unsafe_code)]
#![allow(clippy::module_name_repetitions)] // Allow text::TextRange etc
#![allow(clippy::missing_errors_doc)] // Every error is a documented contract violation
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::needless_pass_by_value)] // Allow pass by value for small Copy types
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::redundant_clone)] // Clones in tests for clarity are fine
#![allow(clippy::needless_collect)] // Collect for assertions is clear
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer

pub mod document;
pub mod error;
pub mod event;
pub mod parser;
pub mod style;
pub mod text;
pub mod unicode;

// Re-export core types at crate root
pub use error::{Error, Result};
pub use event::{
    DOCUMENT_CHANGED, LogLevel, clear_event_callback, clear_log_callback, emit_event, emit_log,
    set_event_callback, set_log_callback,
};
pub use style::{FontSize, Format, RunStyle, RunStyleBuilder};

// Re-export the run model
pub use text::{
    CaretPosition, Mutator, MutatorDefaults, Run, RunKind, RunSpan, Sequence, SplitResult,
    TextRange,
};

// Re-export parsing and sessions
pub use document::{Document, EditIntent, EditOutcome, EditSession, SessionOptions, TextAlign};
pub use parser::{PhraseParser, SpecialPhrase};
