//! Conflicting modifier detection rule.
//!
//! A declaration marked both optional and required (in either spelling) is
//! ambiguous for schema generation and always a mistake.

use crate::issue::{ConflictingModifiersIssue, Issue};
use crate::rules::{Checker, FileContext, marker_location};

const OPTIONAL_MARKERS: &[&str] = &["optional", "kubebuilder:validation:Optional"];
const REQUIRED_MARKERS: &[&str] = &["required", "kubebuilder:validation:Required"];

pub struct ConflictingModifiersRule;

impl Checker for ConflictingModifiersRule {
    fn name(&self) -> &'static str {
        "conflicting_modifiers"
    }

    fn identifiers(&self) -> &'static [&'static str] {
        &[
            "optional",
            "required",
            "kubebuilder:validation:Optional",
            "kubebuilder:validation:Required",
        ]
    }

    fn check(&self, ctx: &FileContext) -> Vec<Issue> {
        let mut issues = Vec::new();

        for declaration in ctx.declarations {
            let optional = OPTIONAL_MARKERS
                .iter()
                .find(|id| declaration.markers.has(id));
            let required = REQUIRED_MARKERS
                .iter()
                .find(|id| declaration.markers.has(id));

            if let (Some(optional), Some(required)) = (optional, required) {
                // Point at the required marker's comment; the optional one
                // is named in the message
                let marker = &declaration.markers.get(required)[0];
                issues.push(Issue::ConflictingModifiers(ConflictingModifiersIssue {
                    location: marker_location(ctx, marker),
                    declaration: declaration.name.clone(),
                    optional_marker: optional.to_string(),
                    required_marker: required.to_string(),
                    source_line: marker.raw_comment.clone(),
                }));
            }
        }

        issues
    }
}
