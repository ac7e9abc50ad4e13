//! Range-to-run resolution.
//!
//! Given a sequence and an absolute range, [`resolve`] reports every run the
//! range touches and which part of it is covered.

use crate::error::Result;
use crate::text::range::TextRange;
use crate::text::run::Run;

/// How a range covers one run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSpan {
    /// Index of the run in the sequence.
    pub index: usize,
    /// Absolute position of the run's first code point.
    pub run_start: usize,
    /// The run lies wholly inside the range.
    pub is_full: bool,
    /// Run-relative start of the covered part. 0 when `is_full`.
    pub local_start: usize,
    /// Run-relative end of the covered part. 0 when `is_full`.
    pub local_end: usize,
}

impl RunSpan {
    /// Partial span covering nothing: the range only touches an edge of the
    /// run, or a zero-length run sits on a range boundary.
    #[must_use]
    pub const fn is_edge_only(&self) -> bool {
        !self.is_full && self.local_start == self.local_end
    }
}

/// Resolve `range` against `runs`.
///
/// A run `[run_start, run_end]` is reported when it overlaps the range as a
/// closed interval, so runs that merely touch the range boundary are
/// included as zero-width partial spans (see [`RunSpan::is_edge_only`]).
/// A zero-length run such as a line break is full only when it lies strictly
/// inside the range; on a boundary it is edge-only. Local offsets are clamped
/// into `[0, run length]`.
pub fn resolve(runs: &[Run], range: TextRange) -> Result<Vec<RunSpan>> {
    let total: usize = runs.iter().map(Run::len).sum();
    range.validate(total)?;

    let mut spans = Vec::new();
    let mut run_start = 0usize;
    for (index, run) in runs.iter().enumerate() {
        let len = run.len();
        let run_end = run_start + len;

        if range.touches(run_start, run_end) {
            // A zero-length run is covered only when strictly inside the range.
            let is_full = if len == 0 {
                range.start < run_start && run_start < range.end
            } else {
                run_start >= range.start && run_end <= range.end
            };
            if is_full {
                spans.push(RunSpan {
                    index,
                    run_start,
                    is_full: true,
                    local_start: 0,
                    local_end: 0,
                });
            } else {
                let local_start = range.start.saturating_sub(run_start).min(len);
                let local_end = if run_end >= range.end {
                    len - (run_end - range.end).min(len)
                } else {
                    len
                };
                spans.push(RunSpan {
                    index,
                    run_start,
                    is_full: false,
                    local_start,
                    local_end: local_end.max(local_start),
                });
            }
        }

        run_start = run_end;
    }

    Ok(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::style::{FontSize, RunStyle};

    fn style() -> RunStyle {
        RunStyle::new("#000000", "Arial", FontSize::Pt16)
    }

    fn runs(parts: &[&str]) -> Vec<Run> {
        parts.iter().map(|p| Run::text(p, style())).collect()
    }

    #[test]
    fn test_partial_inside_single_run() {
        let spans = resolve(&runs(&["hello world"]), TextRange::new(2, 7)).unwrap();
        assert_eq!(
            spans,
            vec![RunSpan {
                index: 0,
                run_start: 0,
                is_full: false,
                local_start: 2,
                local_end: 7,
            }]
        );
    }

    #[test]
    fn test_full_and_partial_mix() {
        // "abc" [0,3) "def" [3,6) "ghi" [6,9)
        let spans = resolve(&runs(&["abc", "def", "ghi"]), TextRange::new(1, 7)).unwrap();
        assert_eq!(spans.len(), 3);
        assert_eq!((spans[0].local_start, spans[0].local_end), (1, 3));
        assert!(spans[1].is_full);
        assert_eq!((spans[2].local_start, spans[2].local_end), (0, 1));
    }

    #[test]
    fn test_touching_runs_are_edge_only() {
        // Range exactly covers the middle run; neighbours only touch it.
        let spans = resolve(&runs(&["abc", "def", "ghi"]), TextRange::new(3, 6)).unwrap();
        assert_eq!(spans.len(), 3);
        assert!(spans[0].is_edge_only());
        assert_eq!(spans[0].local_start, 3);
        assert!(spans[1].is_full);
        assert!(spans[2].is_edge_only());
        assert_eq!(spans[2].local_end, 0);
    }

    #[test]
    fn test_non_overlapping_runs_are_omitted() {
        let spans = resolve(&runs(&["abc", "def", "ghi"]), TextRange::new(7, 8)).unwrap();
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].index, 2);
    }

    #[test]
    fn test_empty_run_inside_range_is_full() {
        let seq = vec![
            Run::text("ab", style()),
            Run::line_break(style()),
            Run::text("cd", style()),
        ];
        let spans = resolve(&seq, TextRange::new(1, 3)).unwrap();
        assert!(spans.iter().any(|s| s.index == 1 && s.is_full));
    }

    #[test]
    fn test_empty_run_on_boundary_is_edge_only() {
        let seq = vec![
            Run::text("ab", style()),
            Run::line_break(style()),
            Run::text("cd", style()),
        ];
        for range in [TextRange::new(0, 2), TextRange::new(2, 4), TextRange::new(1, 2)] {
            let spans = resolve(&seq, range).unwrap();
            let brk = spans.iter().find(|s| s.index == 1).unwrap();
            assert!(!brk.is_full, "{range:?}");
            assert!(brk.is_edge_only(), "{range:?}");
        }
    }

    #[test]
    fn test_out_of_bounds_range_fails() {
        assert_eq!(
            resolve(&runs(&["abc"]), TextRange::new(1, 4)),
            Err(Error::RangeOutOfBounds {
                start: 1,
                end: 4,
                len: 3
            })
        );
    }
}
