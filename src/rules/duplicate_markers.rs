//! Duplicate marker detection rule.
//!
//! Two markers are the same directive occurrence iff their identifiers and
//! the rendered form of their arguments are equal; the same identifier with
//! different arguments (e.g. several `XValidation` rules) is legitimate.
//! Every occurrence after the first is flagged and carries its comment
//! span so the fix can delete exactly that line.

use std::collections::HashMap;

use crate::issue::{DuplicateMarkerIssue, Issue};
use crate::markers::Marker;
use crate::rules::{Checker, FileContext, marker_location};

pub struct DuplicateMarkersRule;

impl Checker for DuplicateMarkersRule {
    fn name(&self) -> &'static str {
        "duplicate_markers"
    }

    fn check(&self, ctx: &FileContext) -> Vec<Issue> {
        let mut issues = Vec::new();

        for declaration in ctx.declarations {
            // Group every occurrence by (identifier, rendered arguments)
            let mut groups: HashMap<(String, String), Vec<&Marker>> = HashMap::new();
            for marker in declaration.markers.iter() {
                groups
                    .entry((marker.identifier.clone(), marker.expressions_string()))
                    .or_default()
                    .push(marker);
            }

            for ((identifier, expressions), mut occurrences) in groups {
                if occurrences.len() < 2 {
                    continue;
                }
                // The first occurrence in source order stays; the rest are
                // duplicates
                occurrences.sort_by_key(|marker| marker.span.start);
                for duplicate in &occurrences[1..] {
                    issues.push(Issue::DuplicateMarker(DuplicateMarkerIssue {
                        location: marker_location(ctx, duplicate),
                        declaration: declaration.name.clone(),
                        identifier: identifier.clone(),
                        expressions: expressions.clone(),
                        span: duplicate.span,
                        source_line: duplicate.raw_comment.clone(),
                    }));
                }
            }
        }

        issues
    }
}
