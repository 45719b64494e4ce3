//! DeleteDuplicateMarker action.
//!
//! Deletes the duplicate occurrence's comment line. The first occurrence
//! of the directive always stays; the issue's span already points at the
//! extra one.

use crate::issue::DuplicateMarkerIssue;

use super::operation::Operation;
use super::traits::Action;

/// Action to delete duplicate marker comments.
pub struct DeleteDuplicateMarker;

impl Action<DuplicateMarkerIssue> for DeleteDuplicateMarker {
    fn to_operations(issues: &[DuplicateMarkerIssue]) -> Vec<Operation> {
        issues
            .iter()
            .map(|issue| Operation::Delete {
                file_path: issue.location.file_path.clone(),
                span: issue.span,
            })
            .collect()
    }
}
