//! Argument extraction for the value portion of a directive.
//!
//! Turns `rule='self.x > 0',message='x must be positive'` into ordered
//! `(key, raw value)` pairs. Values are preserved byte-for-byte, quotes and
//! escapes included, so checkers can reinsert them verbatim when building
//! corrective edits. Splitting happens only at true top-level separators:
//! an unquoted comma between pairs, an unquoted `=` between key and value.
//! Domain-specific separators such as `;` inside a value are never split
//! points.
//!
//! Byte offsets of every value are reported alongside the text so the
//! tokenizer can attach source spans precise enough to replace one
//! argument's value without touching the rest of the directive.

use crate::markers::scan::QuoteTracker;

/// One extracted `(key, raw value)` pair with its offsets into the
/// argument span it was split from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawExpression<'a> {
    /// Argument key, trimmed; empty for an unnamed (positional) value.
    pub key: &'a str,
    /// Raw value text, byte-for-byte as written.
    pub value: &'a str,
    /// Where `value` starts within the argument span.
    pub value_start: usize,
    /// Byte range of the whole comma-delimited segment.
    pub segment_start: usize,
    pub segment_end: usize,
}

/// Split an argument span into ordered `(key, raw value)` pairs.
///
/// The key is empty for an unnamed (positional) value. Keys are trimmed of
/// surrounding ASCII whitespace; values are kept exactly as written. An
/// unterminated quote swallows the rest of the span into the current value
/// rather than failing.
pub(crate) fn split_expressions(args: &str) -> Vec<RawExpression<'_>> {
    split_top_level(args, b',')
        .into_iter()
        .map(|(start, end)| split_pair(args, start, end))
        .collect()
}

/// Byte ranges of the segments of `text` between unquoted occurrences of
/// `separator`.
fn split_top_level(text: &str, separator: u8) -> Vec<(usize, usize)> {
    let bytes = text.as_bytes();
    let mut tracker = QuoteTracker::new();
    let mut segments = Vec::new();
    let mut segment_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if !tracker.in_quote() && bytes[i] == separator {
            segments.push((segment_start, i));
            segment_start = i + 1;
            i += 1;
            continue;
        }
        i += tracker.step(bytes, i);
    }
    segments.push((segment_start, text.len()));
    segments
}

/// Split one comma-delimited segment at its first unquoted `=`.
fn split_pair(args: &str, segment_start: usize, segment_end: usize) -> RawExpression<'_> {
    let segment = &args[segment_start..segment_end];
    let bytes = segment.as_bytes();
    let mut tracker = QuoteTracker::new();
    let mut i = 0;

    while i < bytes.len() {
        if !tracker.in_quote() && bytes[i] == b'=' {
            let value_start = segment_start + i + 1;
            return RawExpression {
                key: segment[..i].trim_ascii(),
                value: &args[value_start..segment_end],
                value_start,
                segment_start,
                segment_end,
            };
        }
        i += tracker.step(bytes, i);
    }
    // No key: the whole segment is a single unnamed value
    RawExpression {
        key: "",
        value: segment,
        value_start: segment_start,
        segment_start,
        segment_end,
    }
}
