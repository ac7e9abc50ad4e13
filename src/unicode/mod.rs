//! Code-point scanning and classification.
//!
//! Every position in this crate counts Unicode code points. [`Scanner`] is the
//! single bridge from stored text to that unit, and [`text_to_code_points`]
//! turns typed or pasted text into run content.

mod chars;
mod scanner;

pub use chars::{code, is_alpha, is_line_break, is_whitespace};
pub use scanner::Scanner;

/// Convert text into content units.
///
/// ```
/// use richrun::unicode::text_to_code_points;
///
/// assert_eq!(text_to_code_points("hé🎉"), vec!['h', 'é', '🎉']);
/// ```
#[must_use]
pub fn text_to_code_points(text: &str) -> Vec<char> {
    let mut scanner = Scanner::with_text(text);
    let mut points = Vec::with_capacity(scanner.code_point_count());
    while let Some(c) = scanner.peek() {
        points.push(c);
        scanner.move_forward();
    }
    points
}

/// Number of code points in `text`.
#[must_use]
pub fn code_point_count(text: &str) -> usize {
    Scanner::with_text(text).code_point_count()
}
