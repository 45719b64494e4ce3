//! The `check` command: run every rule and report issues.

use anyhow::Result;

use crate::cli::args::CheckCommand;
use crate::issue::{Diagnostic, Severity};
use crate::report::{print_report, print_success};

use super::command_result::CommandResult;
use super::helper::{load_config, run_check};

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let config = load_config(&cmd.common)?;
    let outcome = run_check(&config, &cmd.common.root, cmd.common.verbose)?;

    let error_count = outcome
        .issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();
    let warning_count = outcome.issues.len() - error_count;

    if outcome.issues.is_empty() {
        print_success(outcome.files_checked);
    } else {
        print_report(&outcome.issues);
    }

    Ok(CommandResult {
        error_count,
        warning_count,
        files_checked: outcome.files_checked,
    })
}
