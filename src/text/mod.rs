//! The run model and its algorithms.
//!
//! A document is a [`Sequence`] of [`Run`]s. Positions count code points
//! across the flattened content of all runs; a [`TextRange`] is a half-open
//! interval of such positions.
//!
//! Edits flow leaf-first through:
//!
//! - [`resolve`]: which runs a range touches, and which part of each
//! - [`split`]: fragments runs so none straddles a range boundary
//! - [`Mutator`]: applies attribute or content changes to the crossed runs
//! - [`normalize`]: merges adjacent attribute-equal text runs
//!
//! # Examples
//!
//! ```
//! use richrun::{FontSize, Run, RunStyle, Sequence, TextRange};
//! use richrun::text::{resolve, split};
//!
//! let style = RunStyle::new("#000000", "Arial", FontSize::Pt16);
//! let seq = Sequence::from_runs(vec![Run::text("hello world", style)]);
//!
//! let spans = resolve(seq.runs(), TextRange::new(2, 7)).unwrap();
//! let result = split(seq.runs(), &spans);
//!
//! let parts: Vec<String> = result.runs.iter().map(|r| r.content_string()).collect();
//! assert_eq!(parts, ["he", "llo w", "orld"]);
//! assert_eq!(result.crossed, [1]);
//! ```

mod mutator;
mod normalize;
mod range;
mod resolver;
mod run;
mod sequence;
mod split;

pub use mutator::{Mutator, MutatorDefaults};
pub use normalize::{is_normalized, normalize};
pub use range::TextRange;
pub use resolver::{RunSpan, resolve};
pub use run::{Run, RunKind};
pub use sequence::{CaretPosition, Sequence};
pub use split::{SplitResult, split};
