//! Run attributes: format flags, font size and the full attribute set.
//!
//! - [`Format`]: Bitflags for bold and italic
//! - [`FontSize`]: Point sizes a run can be rendered at
//! - [`RunStyle`]: Everything that decides whether two runs may merge
//! - [`RunStyleBuilder`]: Fluent builder for constructing styles
//!
//! Color and font family are opaque strings. The core never interprets them,
//! it only compares and copies them.
//!
//! # Examples
//!
//! ```
//! use richrun::{FontSize, Format, RunStyle};
//!
//! let heading = RunStyle::builder()
//!     .bold()
//!     .color("#1a1a2e")
//!     .font_family("Georgia")
//!     .font_size(FontSize::Pt28)
//!     .build();
//!
//! assert!(heading.format.contains(Format::BOLD));
//! assert!(heading.attribute_eq(&heading.clone()));
//! ```

use bitflags::bitflags;

bitflags! {
    /// Inline format flags.
    ///
    /// The empty set doubles as the "no formatting" command: enabling it
    /// clears every flag on the affected runs instead of OR-ing nothing in.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct Format: u8 {
        /// Bold weight.
        const BOLD   = 0x01;
        /// Italic slant.
        const ITALIC = 0x02;
    }
}

impl Format {
    /// The "no formatting" value.
    pub const NONE: Self = Self::empty();

    /// Whether this value is the "no formatting" command.
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.is_empty()
    }
}

/// Font size in points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FontSize {
    Pt8,
    Pt10,
    Pt12,
    Pt14,
    #[default]
    Pt16,
    Pt18,
    Pt20,
    Pt24,
    Pt28,
    Pt32,
    Pt36,
    Pt48,
    Pt72,
}

impl FontSize {
    /// All sizes, smallest first.
    pub const ALL: [Self; 13] = [
        Self::Pt8,
        Self::Pt10,
        Self::Pt12,
        Self::Pt14,
        Self::Pt16,
        Self::Pt18,
        Self::Pt20,
        Self::Pt24,
        Self::Pt28,
        Self::Pt32,
        Self::Pt36,
        Self::Pt48,
        Self::Pt72,
    ];

    /// Size in points.
    #[must_use]
    pub const fn points(self) -> u8 {
        match self {
            Self::Pt8 => 8,
            Self::Pt10 => 10,
            Self::Pt12 => 12,
            Self::Pt14 => 14,
            Self::Pt16 => 16,
            Self::Pt18 => 18,
            Self::Pt20 => 20,
            Self::Pt24 => 24,
            Self::Pt28 => 28,
            Self::Pt32 => 32,
            Self::Pt36 => 36,
            Self::Pt48 => 48,
            Self::Pt72 => 72,
        }
    }

    /// Look up a size by its point value.
    #[must_use]
    pub fn from_points(points: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.points() == points)
    }
}

/// Complete attribute set of a run.
///
/// Two runs are attribute-equal iff their styles compare equal. Run kind and
/// content never take part in the comparison.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RunStyle {
    /// Inline format flags.
    pub format: Format,
    /// Text color, opaque to the core.
    pub color: String,
    /// Font family name, opaque to the core.
    pub font_family: String,
    /// Font size.
    pub font_size: FontSize,
}

impl RunStyle {
    /// Create a new style builder.
    #[must_use]
    pub fn builder() -> RunStyleBuilder {
        RunStyleBuilder::default()
    }

    /// Create an unformatted style.
    #[must_use]
    pub fn new(color: impl Into<String>, font_family: impl Into<String>, font_size: FontSize) -> Self {
        Self {
            format: Format::NONE,
            color: color.into(),
            font_family: font_family.into(),
            font_size,
        }
    }

    /// Return a new style with the given format flags added.
    #[must_use]
    pub fn with_format(mut self, format: Format) -> Self {
        self.format |= format;
        self
    }

    /// Return a new style with the bold flag added.
    #[must_use]
    pub fn with_bold(self) -> Self {
        self.with_format(Format::BOLD)
    }

    /// Return a new style with the italic flag added.
    #[must_use]
    pub fn with_italic(self) -> Self {
        self.with_format(Format::ITALIC)
    }

    /// Return a new style with the specified color.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Return a new style with the specified font family.
    #[must_use]
    pub fn with_font_family(mut self, font_family: impl Into<String>) -> Self {
        self.font_family = font_family.into();
        self
    }

    /// Return a new style with the specified font size.
    #[must_use]
    pub fn with_font_size(mut self, font_size: FontSize) -> Self {
        self.font_size = font_size;
        self
    }

    /// Merge predicate: format, color, font family and font size all equal.
    #[must_use]
    pub fn attribute_eq(&self, other: &Self) -> bool {
        self == other
    }
}

/// Builder for creating run styles fluently.
#[derive(Clone, Debug, Default)]
pub struct RunStyleBuilder {
    style: RunStyle,
}

impl RunStyleBuilder {
    /// Add bold flag.
    #[must_use]
    pub fn bold(mut self) -> Self {
        self.style.format |= Format::BOLD;
        self
    }

    /// Add italic flag.
    #[must_use]
    pub fn italic(mut self) -> Self {
        self.style.format |= Format::ITALIC;
        self
    }

    /// Set format flags, replacing any already set.
    #[must_use]
    pub fn format(mut self, format: Format) -> Self {
        self.style.format = format;
        self
    }

    /// Set color.
    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.style.color = color.into();
        self
    }

    /// Set font family.
    #[must_use]
    pub fn font_family(mut self, font_family: impl Into<String>) -> Self {
        self.style.font_family = font_family.into();
        self
    }

    /// Set font size.
    #[must_use]
    pub fn font_size(mut self, font_size: FontSize) -> Self {
        self.style.font_size = font_size;
        self
    }

    /// Build the final style.
    #[must_use]
    pub fn build(self) -> RunStyle {
        self.style
    }
}
