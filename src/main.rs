use std::process::ExitCode;

use clap::Parser;
use marklint::cli::{Arguments, ExitStatus};

fn main() -> ExitCode {
    let Some(args) = Arguments::parse().with_command_or_help() else {
        return ExitStatus::Success.into();
    };

    match marklint::cli::run(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitStatus::Error.into()
        }
    }
}
