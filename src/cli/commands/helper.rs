//! Shared plumbing for the check and fix commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rayon::prelude::*;

use crate::cli::args::CommonArgs;
use crate::collect::{collect_declarations, scan_files};
use crate::config::{Config, find_config_file};
use crate::issue::Issue;
use crate::markers;
use crate::rules::{self, FileContext};

/// Load the nearest config file, falling back to defaults when none exists.
pub(crate) fn load_config(common: &CommonArgs) -> Result<Config> {
    match find_config_file(&common.root) {
        Some(path) => {
            if common.verbose {
                eprintln!("Using config: {}", path.display());
            }
            Config::load(&path)
        }
        None => {
            if common.verbose {
                eprintln!("No {} found, using defaults", crate::config::CONFIG_FILE_NAME);
            }
            Ok(Config::default())
        }
    }
}

/// Everything the check pipeline produced for one run.
pub(crate) struct CheckOutcome {
    pub issues: Vec<Issue>,
    pub files_checked: usize,
}

/// Run the full check pipeline: register identifiers, discover files, parse
/// declarations and apply every rule.
///
/// Registration happens before the parallel phase starts; during parsing
/// the registry is only read, so files can be checked concurrently.
pub(crate) fn run_check(config: &Config, base_dir: &Path, verbose: bool) -> Result<CheckOutcome> {
    let registry = markers::shared();
    rules::register_identifiers(registry);

    let scan = scan_files(
        &base_dir.to_string_lossy(),
        &config.includes,
        &config.ignores,
        &config.file_extensions,
        config.ignore_test_files,
        verbose,
    );
    let mut files: Vec<String> = scan.files.into_iter().collect();
    files.sort();

    let checkers = rules::all_checkers();
    let per_file: Vec<Vec<Issue>> = files
        .par_iter()
        .map(|file_path| -> Result<Vec<Issue>> {
            let source = fs::read_to_string(file_path)
                .with_context(|| format!("Failed to read file: {}", file_path))?;
            let declarations = collect_declarations(&source, registry, &config.comment_markup);
            let ctx = FileContext {
                file_path,
                source: &source,
                declarations: &declarations,
                config,
                registry,
            };
            Ok(checkers
                .iter()
                .flat_map(|checker| checker.check(&ctx))
                .collect())
        })
        .collect::<Result<_>>()?;

    Ok(CheckOutcome {
        issues: per_file.into_iter().flatten().collect(),
        files_checked: files.len(),
    })
}
