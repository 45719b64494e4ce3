//! Command handlers for the marklint CLI.

pub mod check;
mod command_result;
pub mod fix;
mod helper;

pub use command_result::CommandResult;
