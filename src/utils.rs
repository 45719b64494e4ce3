//! Common utility functions shared across the codebase.

/// Convert a byte offset into 1-based (line, column) coordinates.
///
/// The column counts characters, not bytes, so diagnostics point at the
/// right place in lines containing multi-byte characters.
///
/// # Examples
///
/// ```
/// use marklint::utils::line_col;
///
/// let source = "first\nsecond\n";
/// assert_eq!(line_col(source, 0), (1, 1));
/// assert_eq!(line_col(source, 6), (2, 1));
/// assert_eq!(line_col(source, 8), (2, 3));
/// ```
pub fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let offset = offset.min(source.len());
    let before = &source[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let col = before[line_start..].chars().count() + 1;
    (line, col)
}
