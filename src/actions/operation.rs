//! Low-level file operations.
//!
//! Operations are literal text edits at byte offsets into the original
//! source. The marker core guarantees that directive spans are correct and
//! non-overlapping, so a batch of operations against one file can be
//! applied back-to-front without invalidating earlier offsets.

use std::collections::HashMap;
use std::fs;

use anyhow::{Context, Result, bail};
use colored::Colorize;

use crate::markers::Span;

/// One literal text edit against one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Delete the spanned text; when the span covers a whole line the
    /// following newline is removed with it.
    Delete { file_path: String, span: Span },
    /// Insert `text` at a byte offset.
    Insert {
        file_path: String,
        offset: usize,
        text: String,
    },
    /// Replace the spanned text with `text`.
    Replace {
        file_path: String,
        span: Span,
        text: String,
    },
}

impl Operation {
    pub fn file_path(&self) -> &str {
        match self {
            Operation::Delete { file_path, .. }
            | Operation::Insert { file_path, .. }
            | Operation::Replace { file_path, .. } => file_path,
        }
    }

    fn start(&self) -> usize {
        match self {
            Operation::Delete { span, .. } | Operation::Replace { span, .. } => span.start,
            Operation::Insert { offset, .. } => *offset,
        }
    }

    fn end(&self) -> usize {
        match self {
            Operation::Delete { span, .. } | Operation::Replace { span, .. } => span.end,
            Operation::Insert { offset, .. } => *offset,
        }
    }

    /// Print a human-readable description of the edit (dry-run mode).
    pub fn preview(&self) {
        match self {
            Operation::Delete { file_path, span } => {
                println!(
                    "{} {} [{}..{}]",
                    "would delete".yellow(),
                    file_path,
                    span.start,
                    span.end
                );
            }
            Operation::Insert {
                file_path, offset, ..
            } => {
                println!("{} {} [{}]", "would insert".yellow(), file_path, offset);
            }
            Operation::Replace {
                file_path, span, ..
            } => {
                println!(
                    "{} {} [{}..{}]",
                    "would replace".yellow(),
                    file_path,
                    span.start,
                    span.end
                );
            }
        }
    }

    fn apply(&self, source: &mut String) {
        match self {
            Operation::Delete { span, .. } => {
                let mut end = span.end;
                // Take the line terminator with the line
                if source[end..].starts_with("\r\n") {
                    end += 2;
                } else if source[end..].starts_with('\n') {
                    end += 1;
                }
                source.replace_range(span.start..end, "");
            }
            Operation::Insert { offset, text, .. } => {
                source.insert_str(*offset, text);
            }
            Operation::Replace { span, text, .. } => {
                source.replace_range(span.start..span.end, text);
            }
        }
    }
}

/// Apply a batch of operations to one source string.
///
/// Exact-duplicate operations collapse to one; partially overlapping
/// operations are a bug in the producing rule and fail the batch.
pub fn apply_to_source(source: &str, operations: &[Operation]) -> Result<String> {
    let mut ordered: Vec<&Operation> = operations.iter().collect();
    ordered.sort_by_key(|op| std::cmp::Reverse((op.start(), op.end())));
    ordered.dedup_by(|a, b| a == b);

    for pair in ordered.windows(2) {
        // Descending order: pair[1] starts at or before pair[0]
        if pair[1].end() > pair[0].start() {
            bail!(
                "overlapping edits at bytes {}..{} and {}..{}",
                pair[1].start(),
                pair[1].end(),
                pair[0].start(),
                pair[0].end()
            );
        }
    }

    let mut result = source.to_string();
    for op in ordered {
        op.apply(&mut result);
    }
    Ok(result)
}

/// Execute operations grouped per file. Returns the number of files
/// modified.
pub fn execute_all(operations: &[Operation]) -> Result<usize> {
    let mut by_file: HashMap<&str, Vec<Operation>> = HashMap::new();
    for op in operations {
        by_file.entry(op.file_path()).or_default().push(op.clone());
    }

    for (file_path, ops) in &by_file {
        let source = fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read file: {}", file_path))?;
        let modified = apply_to_source(&source, ops)?;
        fs::write(file_path, modified)
            .with_context(|| format!("Failed to write file: {}", file_path))?;
    }

    Ok(by_file.len())
}
