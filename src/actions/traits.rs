//! Action trait definition.
//!
//! Actions convert Issues into Operations. Each Action can be implemented
//! for multiple Issue types, providing type-safe handling.

use anyhow::Result;

use crate::actions::operation::{Operation, execute_all};

/// Statistics from running an action.
#[derive(Debug, Clone, Default)]
pub struct ActionStats {
    /// Number of issues processed.
    pub processed: usize,
    /// Number of issues skipped (e.g., missing required fields).
    pub skipped: usize,
    /// Number of files modified.
    pub files_modified: usize,
}

impl std::ops::AddAssign for ActionStats {
    fn add_assign(&mut self, other: Self) {
        self.processed += other.processed;
        self.skipped += other.skipped;
        self.files_modified += other.files_modified;
    }
}

/// Action trait - converts Issues into Operations and executes them.
///
/// Each Action struct can implement this trait for multiple Issue types,
/// providing type-safe handling of different issues.
///
/// # Example
///
/// ```ignore
/// // In command code:
/// if apply {
///     DeleteDuplicateMarker::run(&issues)?;
/// } else {
///     DeleteDuplicateMarker::preview(&issues);
/// }
/// ```
pub trait Action<I> {
    /// Convert issues to low-level operations.
    ///
    /// This is the only method that must be implemented.
    fn to_operations(issues: &[I]) -> Vec<Operation>;

    /// Execute the action (modify files).
    ///
    /// Default implementation converts to operations and applies them,
    /// batched per file.
    fn run(issues: &[I]) -> Result<ActionStats> {
        let ops = Self::to_operations(issues);
        let files_modified = execute_all(&ops)?;

        Ok(ActionStats {
            processed: ops.len(),
            skipped: issues.len().saturating_sub(ops.len()),
            files_modified,
        })
    }

    /// Preview the action (dry-run mode).
    ///
    /// Default implementation converts to operations and previews each.
    fn preview(issues: &[I]) {
        let ops = Self::to_operations(issues);
        for op in &ops {
            op.preview();
        }
    }
}
