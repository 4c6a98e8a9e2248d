//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `analyze`: Find case-duplicate tables and write the report and cleanup script
//! - `usage`: Count quoted references to a table name across files
//! - `init`: Initialize casedup configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Analyze(cmd)) => cmd.args.common.verbose,
            Some(Command::Usage(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Schema dump to scan (overrides config file)
    #[arg(long, env = "CASEDUP_SCHEMA")]
    pub schema: Option<PathBuf>,

    /// Report file to write (overrides config file)
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// SQL cleanup script to write (overrides config file)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Database name used in the generated script (overrides config file)
    #[arg(long, env = "CASEDUP_DATABASE")]
    pub database: Option<String>,
}

#[derive(Debug, Args)]
pub struct AnalyzeCommand {
    #[command(flatten)]
    pub args: AnalyzeArgs,
}

#[derive(Debug, Parser)]
pub struct UsageArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Table name to look for (case-sensitive)
    pub table: String,

    /// Files, directories or glob patterns to scan
    #[arg(required = true)]
    pub paths: Vec<String>,
}

#[derive(Debug, Args)]
pub struct UsageCommand {
    #[command(flatten)]
    pub args: UsageArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Find tables that differ only by letter case and generate a cleanup script
    Analyze(AnalyzeCommand),
    /// Count quoted references to a table name in files
    Usage(UsageCommand),
    /// Initialize a new .casedup.json configuration file
    Init,
}
