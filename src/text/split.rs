//! Splitting runs at range boundaries.
//!
//! After [`split`], no run straddles a boundary of the range it was resolved
//! against: every run is wholly inside it, wholly outside it, or atomic.

use crate::text::resolver::RunSpan;
use crate::text::run::Run;

/// Output of [`split`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SplitResult {
    /// Every run after splitting, untouched runs included.
    pub runs: Vec<Run>,
    /// Indices into `runs` of the crossed runs, ascending.
    pub crossed: Vec<usize>,
}

impl SplitResult {
    /// Iterate over the crossed runs.
    pub fn crossed_runs(&self) -> impl Iterator<Item = &Run> + '_ {
        self.crossed.iter().map(|&i| &self.runs[i])
    }

    /// Whether `index` refers to a crossed run.
    #[must_use]
    pub fn is_crossed(&self, index: usize) -> bool {
        self.crossed.binary_search(&index).is_ok()
    }

    /// Runs that were not crossed, in order.
    #[must_use]
    pub fn without_crossed(self) -> Vec<Run> {
        let crossed = self.crossed;
        self.runs
            .into_iter()
            .enumerate()
            .filter(|(i, _)| crossed.binary_search(i).is_err())
            .map(|(_, run)| run)
            .collect()
    }

    fn push(&mut self, run: Run) {
        self.runs.push(run);
    }

    fn push_crossed(&mut self, run: Run) {
        self.crossed.push(self.runs.len());
        self.runs.push(run);
    }
}

/// Split `runs` according to resolver output.
///
/// Per run, in order:
///
/// - no span, or an edge-only span: copied unchanged
/// - full span: copied and crossed
/// - partial span over an atomic run (link, field): copied and crossed whole
/// - partial span over a splittable run: up to three fragments
///   `left | middle | right`, with `middle` crossed
///
/// Fragments are fresh copies; `runs` is never modified.
#[must_use]
pub fn split(runs: &[Run], spans: &[RunSpan]) -> SplitResult {
    let mut result = SplitResult {
        runs: Vec::with_capacity(runs.len() + 2),
        crossed: Vec::new(),
    };
    let mut spans = spans.iter().peekable();

    for (index, run) in runs.iter().enumerate() {
        let span = spans.next_if(|span| span.index == index);

        let Some(span) = span else {
            result.push(run.clone());
            continue;
        };

        if span.is_full {
            result.push_crossed(run.clone());
            continue;
        }

        if span.is_edge_only() {
            result.push(run.clone());
            continue;
        }

        if !run.kind.is_splittable() {
            result.push_crossed(run.clone());
            continue;
        }

        let len = run.len();
        let (start, end) = (span.local_start, span.local_end);
        match (start != 0, end != len) {
            (true, true) => {
                result.push(run.fragment(0..start));
                result.push_crossed(run.fragment(start..end));
                result.push(run.fragment(end..len));
            }
            (true, false) => {
                result.push(run.fragment(0..start));
                result.push_crossed(run.fragment(start..len));
            }
            (false, true) => {
                result.push_crossed(run.fragment(0..end));
                result.push(run.fragment(end..len));
            }
            (false, false) => result.push_crossed(run.clone()),
        }
    }

    result
}
