//! Unknown marker detection rule.
//!
//! Unregistered identifiers are valid as far as the parser is concerned
//! (the whole candidate path simply becomes the identifier). But inside a
//! reserved namespace like `kubebuilder:` an unregistered identifier is
//! almost always a typo in a well-known marker, so surface it.

use crate::issue::{Issue, UnknownMarkerIssue};
use crate::rules::{Checker, FileContext, marker_location};

pub struct UnknownMarkerRule;

impl Checker for UnknownMarkerRule {
    fn name(&self) -> &'static str {
        "unknown_marker"
    }

    fn check(&self, ctx: &FileContext) -> Vec<Issue> {
        let mut issues = Vec::new();

        for declaration in ctx.declarations {
            for marker in declaration.markers.iter() {
                let reserved = ctx.config.reserved_namespaces.iter().any(|ns| {
                    marker.identifier == *ns
                        || marker.identifier.starts_with(&format!("{}:", ns))
                });
                if reserved && !ctx.registry.contains(&marker.identifier) {
                    issues.push(Issue::UnknownMarker(UnknownMarkerIssue {
                        location: marker_location(ctx, marker),
                        declaration: declaration.name.clone(),
                        identifier: marker.identifier.clone(),
                        source_line: marker.raw_comment.clone(),
                    }));
                }
            }
        }

        issues
    }
}
