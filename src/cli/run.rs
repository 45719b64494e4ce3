//! Main entry point for the marklint CLI.
//!
//! Dispatches to the appropriate command handler based on the parsed
//! arguments and maps the result to an exit status.

use std::{fs, path::Path};

use anyhow::Result;

use crate::config::{CONFIG_FILE_NAME, default_config_json};

use super::{
    args::{Arguments, Command},
    commands::{check::check, fix::fix},
    exit_status::ExitStatus,
};

pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Check(cmd)) => Ok(check(cmd)?.exit_status()),
        Some(Command::Fix(cmd)) => Ok(fix(cmd)?.exit_status()),
        Some(Command::Init) => {
            init()?;
            println!("Created {}", CONFIG_FILE_NAME);
            Ok(ExitStatus::Success)
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}

fn init() -> Result<()> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    Ok(())
}
