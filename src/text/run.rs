//! Attributed runs of content units.

use crate::style::RunStyle;

/// What a run represents.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RunKind {
    /// Ordinary typed text.
    PlainText,
    /// A placeholder resolved by the host (e.g. `#name` fields).
    DynamicField { value: String },
    /// A hyperlink; the content is its visible label.
    Link { url: String },
    /// A hard line break. Carries no content.
    LineBreak,
}

impl RunKind {
    /// Whether a run of this kind may be split at an arbitrary code point.
    ///
    /// Fields and links are atomic: a range that only partially covers them
    /// covers all of them.
    #[must_use]
    pub const fn is_splittable(&self) -> bool {
        matches!(self, Self::PlainText | Self::LineBreak)
    }

    /// Whether runs of this kind take part in normalization.
    #[must_use]
    pub const fn is_plain_text(&self) -> bool {
        matches!(self, Self::PlainText)
    }
}

/// A span of code points sharing one attribute set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Run {
    /// What the run represents.
    pub kind: RunKind,
    /// Content units (Unicode code points).
    pub content: Vec<char>,
    /// Format and presentation attributes.
    pub style: RunStyle,
}

impl Run {
    /// Create a run.
    #[must_use]
    pub fn new(kind: RunKind, content: Vec<char>, style: RunStyle) -> Self {
        Self {
            kind,
            content,
            style,
        }
    }

    /// Create a plain-text run from a string.
    #[must_use]
    pub fn text(text: &str, style: RunStyle) -> Self {
        Self::new(RunKind::PlainText, text.chars().collect(), style)
    }

    /// Create a link run whose content is the visible label.
    #[must_use]
    pub fn link(label: &str, url: impl Into<String>, style: RunStyle) -> Self {
        Self::new(
            RunKind::Link { url: url.into() },
            label.chars().collect(),
            style,
        )
    }

    /// Create a dynamic-field run.
    #[must_use]
    pub fn dynamic_field(label: &str, value: impl Into<String>, style: RunStyle) -> Self {
        Self::new(
            RunKind::DynamicField {
                value: value.into(),
            },
            label.chars().collect(),
            style,
        )
    }

    /// Create a line break.
    #[must_use]
    pub fn line_break(style: RunStyle) -> Self {
        Self::new(RunKind::LineBreak, Vec::new(), style)
    }

    /// Length in code points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Check if the run has no content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Content as a `String`.
    #[must_use]
    pub fn content_string(&self) -> String {
        self.content.iter().collect()
    }

    /// Copy of this run holding `content[range]`, same kind and attributes.
    #[must_use]
    pub fn fragment(&self, range: std::ops::Range<usize>) -> Self {
        Self {
            kind: self.kind.clone(),
            content: self.content[range].to_vec(),
            style: self.style.clone(),
        }
    }

    /// Copy of this run with its content cleared.
    #[must_use]
    pub fn emptied(&self) -> Self {
        Self {
            kind: self.kind.clone(),
            content: Vec::new(),
            style: self.style.clone(),
        }
    }

    /// Whether `other` may be merged into this run.
    #[must_use]
    pub fn can_merge(&self, other: &Self) -> bool {
        self.kind.is_plain_text()
            && other.kind.is_plain_text()
            && self.style.attribute_eq(&other.style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::FontSize;

    fn style() -> RunStyle {
        RunStyle::new("gray", "Arial", FontSize::Pt16)
    }

    #[test]
    fn test_len_counts_code_points() {
        let run = Run::text("añ🎉", style());
        assert_eq!(run.len(), 3);
        assert_eq!(run.content_string(), "añ🎉");
    }

    #[test]
    fn test_fragment_is_independent() {
        let run = Run::text("hello", style());
        let mut left = run.fragment(0..2);
        left.content.push('!');
        assert_eq!(left.content_string(), "he!");
        assert_eq!(run.content_string(), "hello");
        assert_eq!(left.style, run.style);
    }

    #[test]
    fn test_splittable_kinds() {
        assert!(RunKind::PlainText.is_splittable());
        assert!(RunKind::LineBreak.is_splittable());
        assert!(!RunKind::Link { url: "x".into() }.is_splittable());
        assert!(
            !RunKind::DynamicField {
                value: "name".into()
            }
            .is_splittable()
        );
    }

    #[test]
    fn test_can_merge_requires_plain_text() {
        let a = Run::text("a", style());
        let b = Run::text("b", style());
        let link = Run::link("c", "https://example.com", style());
        assert!(a.can_merge(&b));
        assert!(!a.can_merge(&link));
        assert!(!a.can_merge(&Run::text("b", style().with_bold())));
    }

    #[test]
    fn test_line_break_is_empty() {
        let br = Run::line_break(style());
        assert!(br.is_empty());
        assert_eq!(br.emptied(), br);
    }
}
