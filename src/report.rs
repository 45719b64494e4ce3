//! Report formatting and printing utilities.
//!
//! This module is separate from the core library logic to allow marklint
//! to be used as a library without printing side effects.

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::issue::{Diagnostic, Issue, Severity};

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓
/// Failure mark for consistent output formatting
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in a cargo-style format.
///
/// Issues are sorted by location and displayed with:
/// - Severity and message
/// - Clickable file location (path:line:col)
/// - Source code context with caret indicator
/// - Summary of total errors/warnings
pub fn print_report(issues: &[Issue]) {
    let mut sorted = issues.to_vec();
    sorted.sort_by(|a, b| a.location().cmp(b.location()));

    // Calculate max line number width for alignment
    let max_line_width = sorted
        .iter()
        .map(|i| i.location().line)
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1);

    for issue in &sorted {
        let location = issue.location();

        // Print severity and message (cargo-style)
        let severity_str = match issue.severity() {
            Severity::Error => "error".bold().red(),
            Severity::Warning => "warning".bold().yellow(),
        };

        println!(
            "{}: {}  {}",
            severity_str,
            issue.message(),
            issue.rule().to_string().dimmed().cyan()
        );

        // Print clickable location: --> path:line:col
        println!(
            "  {} {}:{}:{}",
            "-->".blue(),
            location.file_path,
            location.line,
            location.col
        );

        let source_line = issue.source_line();
        let caret_char = match issue.severity() {
            Severity::Error => "^".red(),
            Severity::Warning => "^".yellow(),
        };

        println!("{:>width$} {}", "", "|".blue(), width = max_line_width);
        println!(
            "{:>width$} {} {}",
            location.line.to_string().blue(),
            "|".blue(),
            source_line,
            width = max_line_width
        );
        // Caret pointing to the column (col is 1-based)
        // Use unicode display width for correct positioning
        let prefix = if location.col > 1 {
            source_line.chars().take(location.col - 1).collect::<String>()
        } else {
            String::new()
        };
        let caret_padding = UnicodeWidthStr::width(prefix.as_str());
        println!(
            "{:>width$} {} {:>padding$}{}",
            "",
            "|".blue(),
            "",
            caret_char,
            width = max_line_width,
            padding = caret_padding
        );

        println!(); // Empty line between issues
    }

    // Summary
    let total_errors = sorted
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();
    let total_warnings = sorted
        .iter()
        .filter(|i| i.severity() == Severity::Warning)
        .count();
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        println!(
            "{} {} problems ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
            total_errors,
            if total_errors == 1 { "error" } else { "errors" }.red(),
            total_warnings,
            if total_warnings == 1 {
                "warning"
            } else {
                "warnings"
            }
            .yellow()
        );
    }
}

/// Print a success message when no issues are found.
///
/// Displays the number of files checked to give the user confidence
/// that the check actually ran and covered the expected scope.
pub fn print_success(files_checked: usize) {
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} {} - no issues found",
            files_checked,
            if files_checked == 1 { "file" } else { "files" }
        )
    );
}
