//! The `fix` command: delete duplicate marker comments.
//!
//! Only duplicate-marker issues have an unambiguous fix (the extra comment
//! line goes away). Everything else stays a diagnostic for a human.

use anyhow::Result;
use colored::Colorize;

use crate::actions::{Action, DeleteDuplicateMarker};
use crate::cli::args::FixCommand;
use crate::issue::{DuplicateMarkerIssue, Issue};

use super::command_result::CommandResult;
use super::helper::{load_config, run_check};

pub fn fix(cmd: FixCommand) -> Result<CommandResult> {
    let config = load_config(&cmd.common)?;
    let outcome = run_check(&config, &cmd.common.root, cmd.common.verbose)?;

    let duplicates: Vec<DuplicateMarkerIssue> = outcome
        .issues
        .iter()
        .filter_map(|issue| match issue {
            Issue::DuplicateMarker(duplicate) => Some(duplicate.clone()),
            _ => None,
        })
        .collect();

    if duplicates.is_empty() {
        println!("Nothing to fix");
        return Ok(CommandResult {
            files_checked: outcome.files_checked,
            ..CommandResult::default()
        });
    }

    if cmd.dry_run {
        DeleteDuplicateMarker::preview(&duplicates);
        println!(
            "{} duplicate {} would be removed (dry run)",
            duplicates.len(),
            if duplicates.len() == 1 {
                "marker"
            } else {
                "markers"
            }
        );
    } else {
        let stats = DeleteDuplicateMarker::run(&duplicates)?;
        println!(
            "{} Removed {} duplicate {} in {} {}",
            "✓".green(),
            stats.processed,
            if stats.processed == 1 {
                "marker"
            } else {
                "markers"
            },
            stats.files_modified,
            if stats.files_modified == 1 {
                "file"
            } else {
                "files"
            }
        );
    }

    Ok(CommandResult {
        files_checked: outcome.files_checked,
        ..CommandResult::default()
    })
}
