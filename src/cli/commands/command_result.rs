use crate::cli::exit_status::ExitStatus;

/// Outcome of a CLI command, used to derive the process exit code.
#[derive(Debug, Default)]
pub struct CommandResult {
    pub error_count: usize,
    pub warning_count: usize,
    pub files_checked: usize,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        if self.error_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}
