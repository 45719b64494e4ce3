//! Directive tokenizer: one raw comment line in, one [`Marker`] out.
//!
//! The hard part is the identifier/argument boundary. Identifiers are
//! namespaced by any number of `:`/`.` segments and the same raw text is
//! ambiguous: in `kubebuilder:validation:XValidation:rule='...'` the
//! trailing `rule` is an argument key, while in `foo:bar:rule='...'` (no
//! registered prefix) the whole path is the identifier. The registry acts
//! as an oracle, queried with decreasing-length prefixes, so resolution is
//! O(segments) with no backtracking.
//!
//! Every stripping step accumulates its consumed offset, so the marker's
//! span and each argument's value span land in original-source coordinates
//! no matter how much markup preceded the directive.
//!
//! Malformed input never fails: an unterminated quote or dangling separator
//! degrades to a best-effort marker that downstream checkers simply don't
//! recognize.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::markers::collection::Marker;
use crate::markers::expressions::split_expressions;
use crate::markers::registry::Registry;
use crate::markers::scan::QuoteTracker;
use crate::markers::span::Span;

// Comment markup (`//`, `///`, `#`) plus the `+` directive prefix. The
// match end is the byte offset of the directive body, keeping later span
// math anchored to the original source buffer.
static DIRECTIVE_PREFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?://+|#+)\s*\+").unwrap());

/// How a candidate path resolved against the registry.
#[derive(Debug, PartialEq, Eq)]
enum Resolution<'a> {
    /// A registered prefix was found; `rest` holds any trailing segments,
    /// which become the key of the first argument.
    Resolved {
        identifier: &'a str,
        rest: Option<&'a str>,
    },
    /// No prefix is registered; the whole candidate path is the identifier.
    Unresolved { path: &'a str },
}

/// Parse one raw comment line believed to encode a directive.
///
/// `comment_span` is the byte range of `raw_comment` in the source buffer
/// and becomes the marker's span. Returns `None` when the line carries no
/// `+` directive after its comment markup.
pub fn parse_marker(raw_comment: &str, comment_span: Span, registry: &Registry) -> Option<Marker> {
    let prefix = DIRECTIVE_PREFIX_REGEX.find(raw_comment)?;
    let after_prefix = &raw_comment[prefix.end()..];
    let body = after_prefix.trim();
    if body.is_empty() {
        return None;
    }
    // Offset of `body` in the source buffer, accumulated through the
    // markup strip and the whitespace trim
    let body_base =
        comment_span.start + prefix.end() + (after_prefix.len() - after_prefix.trim_start().len());

    let marker = match find_separator(body) {
        None => Marker {
            identifier: body.to_string(),
            expressions: BTreeMap::new(),
            raw_comment: raw_comment.to_string(),
            span: comment_span,
            value_spans: BTreeMap::new(),
        },
        Some((index, len)) => {
            let candidate = body[..index].trim_ascii();
            let rhs = &body[index + len..];
            let rhs_base = body_base + index + len;

            let mut expressions = BTreeMap::new();
            let mut value_spans = BTreeMap::new();

            let identifier = match resolve_path(candidate, registry) {
                Resolution::Resolved { identifier, rest } => {
                    for (position, expr) in split_expressions(rhs).into_iter().enumerate() {
                        // Trailing path segments become the first argument
                        // key: `...XValidation:rule='x'` parses as key
                        // `rule` with the whole first segment as its value.
                        let (key, value, start) = match (position, rest) {
                            (0, Some(rest)) => (
                                rest,
                                &rhs[expr.segment_start..expr.segment_end],
                                expr.segment_start,
                            ),
                            _ => (expr.key, expr.value, expr.value_start),
                        };
                        expressions.insert(key.to_string(), value.to_string());
                        value_spans.insert(
                            key.to_string(),
                            Span::new(rhs_base + start, rhs_base + expr.segment_end),
                        );
                    }
                    identifier.to_string()
                }
                // Unregistered: the whole path is the identifier and the
                // right-hand side is one unnamed raw value, never split.
                Resolution::Unresolved { path } => {
                    expressions.insert(String::new(), rhs.to_string());
                    value_spans
                        .insert(String::new(), Span::new(rhs_base, rhs_base + rhs.len()));
                    path.to_string()
                }
            };

            Marker {
                identifier,
                expressions,
                raw_comment: raw_comment.to_string(),
                span: comment_span,
                value_spans,
            }
        }
    };

    Some(marker)
}

/// Find the first unquoted separator (`=` or `:=`) in the directive body.
///
/// Returns the byte index of the separator and its length. A `:` directly
/// followed by `=` is one `:=` token; a bare `=` is never split out of a
/// `:=` that has not been consumed yet.
fn find_separator(body: &str) -> Option<(usize, usize)> {
    let bytes = body.as_bytes();
    let mut tracker = QuoteTracker::new();
    let mut i = 0;

    while i < bytes.len() {
        if !tracker.in_quote() {
            if bytes[i] == b':' && i + 1 < bytes.len() && bytes[i + 1] == b'=' {
                return Some((i, 2));
            }
            if bytes[i] == b'=' {
                return Some((i, 1));
            }
        }
        i += tracker.step(bytes, i);
    }
    None
}

/// Resolve a `:`/`.`-delimited candidate path against the registry.
///
/// The longest registered prefix (by segment boundary) wins. Boundaries are
/// walked longest-first and the first registered hit is taken, so even a
/// buggy registration with two equally-long prefixes resolves
/// deterministically.
fn resolve_path<'a>(path: &'a str, registry: &Registry) -> Resolution<'a> {
    if registry.contains(path) {
        return Resolution::Resolved {
            identifier: path,
            rest: None,
        };
    }

    let bytes = path.as_bytes();
    let boundaries = (0..bytes.len()).filter(|&i| bytes[i] == b':' || bytes[i] == b'.');
    for boundary in boundaries.collect::<Vec<_>>().into_iter().rev() {
        let prefix = &path[..boundary];
        if registry.contains(prefix) {
            return Resolution::Resolved {
                identifier: prefix,
                rest: Some(&path[boundary + 1..]),
            };
        }
    }

    Resolution::Unresolved { path }
}
