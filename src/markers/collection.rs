//! Marker records and the per-declaration marker set.
//!
//! A [`Marker`] is one parsed directive occurrence; a [`MarkerSet`] is every
//! directive attached to one declaration, queryable by identifier. Sets are
//! built once by the collector and never mutated afterwards; rule checkers
//! share them read-only.

use std::collections::{BTreeMap, HashMap};

use crate::markers::span::Span;

/// One parsed directive occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    /// The resolved namespaced identifier, e.g. `kubebuilder:object:root`.
    pub identifier: String,
    /// Argument key to raw value text. The empty key is the unnamed
    /// (positional) value. Values keep quotes and escapes exactly as
    /// written.
    pub expressions: BTreeMap<String, String>,
    /// The full original comment text the directive was extracted from.
    pub raw_comment: String,
    /// Byte range of the directive's comment line in the source buffer.
    pub span: Span,
    /// Byte range of each argument's raw value in the source buffer, for
    /// edits that replace one value and nothing else.
    pub(crate) value_spans: BTreeMap<String, Span>,
}

impl Marker {
    /// Raw value of the unnamed (positional) argument, if present.
    pub fn value(&self) -> Option<&str> {
        self.expressions.get("").map(String::as_str)
    }

    /// Raw value of a named argument, if present.
    pub fn expression(&self, key: &str) -> Option<&str> {
        self.expressions.get(key).map(String::as_str)
    }

    /// Byte range of an argument's raw value in the original source, if the
    /// directive carries that argument. Slicing the source with it yields
    /// exactly the raw value text.
    pub fn expression_span(&self, key: &str) -> Option<Span> {
        self.value_spans.get(key).copied()
    }

    /// Deterministic rendering of the expressions: keys sorted, `key=value`
    /// joined by `,`, the unnamed value rendered bare.
    ///
    /// Two markers are the same directive occurrence iff their identifiers
    /// and this rendering are equal.
    pub fn expressions_string(&self) -> String {
        let parts: Vec<String> = self
            .expressions
            .iter()
            .map(|(key, value)| {
                if key.is_empty() {
                    value.clone()
                } else {
                    format!("{}={}", key, value)
                }
            })
            .collect();
        parts.join(",")
    }

    /// Whether `other` is a duplicate of this directive occurrence.
    pub fn is_duplicate_of(&self, other: &Marker) -> bool {
        self.identifier == other.identifier
            && self.expressions_string() == other.expressions_string()
    }
}

/// All directives attached to one declaration.
///
/// Identifiers map to their occurrences in source order; a single
/// identifier may legitimately repeat (e.g. several validation rules).
#[derive(Debug, Clone, Default)]
pub struct MarkerSet {
    markers: HashMap<String, Vec<Marker>>,
    len: usize,
}

impl MarkerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, marker: Marker) {
        self.markers
            .entry(marker.identifier.clone())
            .or_default()
            .push(marker);
        self.len += 1;
    }

    /// Whether any occurrence of `identifier` is present.
    pub fn has(&self, identifier: &str) -> bool {
        self.markers.contains_key(identifier)
    }

    /// Whether some occurrence of `identifier` renders to exactly the given
    /// argument text (see [`Marker::expressions_string`]).
    pub fn has_with_expressions(&self, identifier: &str, expressions: &str) -> bool {
        self.get(identifier)
            .iter()
            .any(|marker| marker.expressions_string() == expressions)
    }

    /// All occurrences of `identifier` in source order; empty if absent.
    pub fn get(&self, identifier: &str) -> &[Marker] {
        self.markers.get(identifier).map_or(&[], Vec::as_slice)
    }

    /// Flattened view over every occurrence, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Marker> {
        self.markers.values().flatten()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl FromIterator<Marker> for MarkerSet {
    fn from_iter<I: IntoIterator<Item = Marker>>(iter: I) -> Self {
        let mut set = Self::new();
        for marker in iter {
            set.insert(marker);
        }
        set
    }
}
