//! Missing value detection rule.
//!
//! Validation markers like `kubebuilder:validation:MaxLength` are
//! meaningless without a value; schema generators reject or silently drop
//! them. The marker core never interprets values, so "has any expressions
//! at all" is the whole check.

use crate::issue::{Issue, MissingValueIssue};
use crate::rules::{Checker, FileContext, known, marker_location};

pub struct MissingValueRule;

impl Checker for MissingValueRule {
    fn name(&self) -> &'static str {
        "missing_value"
    }

    fn identifiers(&self) -> &'static [&'static str] {
        known::VALUE_MARKERS
    }

    fn check(&self, ctx: &FileContext) -> Vec<Issue> {
        let mut issues = Vec::new();

        for declaration in ctx.declarations {
            for marker in declaration.markers.iter() {
                if known::VALUE_MARKERS.contains(&marker.identifier.as_str())
                    && marker.expressions.is_empty()
                {
                    issues.push(Issue::MissingValue(MissingValueIssue {
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
