//! Merging of adjacent attribute-equal text runs.

use crate::text::run::Run;

/// Merge adjacent plain-text runs with equal attributes.
///
/// Single left-to-right pass. After a merge the same index is examined again,
/// since the grown run may now match its next neighbour.
#[must_use]
pub fn normalize(mut runs: Vec<Run>) -> Vec<Run> {
    let mut i = 0;
    while i + 1 < runs.len() {
        if runs[i].can_merge(&runs[i + 1]) {
            let next = runs.remove(i + 1);
            runs[i].content.extend(next.content);
        } else {
            i += 1;
        }
    }
    runs
}

/// Whether no two adjacent runs could be merged.
#[must_use]
pub fn is_normalized(runs: &[Run]) -> bool {
    runs.windows(2).all(|pair| !pair[0].can_merge(&pair[1]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{FontSize, RunStyle};

    fn style() -> RunStyle {
        RunStyle::new("gray", "Arial", FontSize::Pt16)
    }

    #[test]
    fn test_merges_chain() {
        let runs = vec![
            Run::text("Hello ", style()),
            Run::text("my ", style()),
            Run::text("friend", style()),
        ];
        let merged = normalize(runs);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].content_string(), "Hello my friend");
    }

    #[test]
    fn test_keeps_different_attributes_apart() {
        let runs = vec![
            Run::text("a", style()),
            Run::text("b", style().with_bold()),
            Run::text("c", style()),
        ];
        let merged = normalize(runs.clone());
        assert_eq!(merged, runs);
        assert!(is_normalized(&merged));
    }

    #[test]
    fn test_non_text_runs_never_merge() {
        let runs = vec![
            Run::link("x", "https://a", style()),
            Run::link("y", "https://a", style()),
            Run::line_break(style()),
            Run::line_break(style()),
        ];
        assert_eq!(normalize(runs.clone()), runs);
    }

    #[test]
    fn test_merge_around_removed_middle() {
        let runs = vec![
            Run::text("he", style()),
            Run::text("orld", style()),
            Run::text("!", style().with_italic()),
            Run::text("?", style().with_italic()),
        ];
        let merged = normalize(runs);
        let contents: Vec<String> = merged.iter().map(Run::content_string).collect();
        assert_eq!(contents, vec!["heorld", "!?"]);
    }

    #[test]
    fn test_idempotent() {
        let runs = vec![
            Run::text("a", style()),
            Run::text("b", style()),
            Run::line_break(style()),
            Run::text("c", style()),
        ];
        let once = normalize(runs);
        let twice = normalize(once.clone());
        assert_eq!(once, twice);
    }
}
