use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::CommandResult,
    commands::{analyze::analyze, init::init, usage::usage},
};

/// Dispatch to the handler for the parsed command.
///
/// # Returns
/// - `Ok(CommandResult)` with the summary to print and the exit status
/// - `Err` if the command fails (e.g. schema file missing, config invalid)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Analyze(cmd)) => analyze(cmd),
        Some(Command::Usage(cmd)) => usage(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
