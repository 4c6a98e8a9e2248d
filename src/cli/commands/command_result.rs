use std::path::PathBuf;

use super::super::exit_status::ExitStatus;
use crate::schema::ResolvedGroup;

#[derive(Debug)]
pub enum CommandSummary {
    Analyze(AnalyzeSummary),
    Usage(UsageSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct AnalyzeSummary {
    pub table_count: usize,
    pub groups: Vec<ResolvedGroup>,
    pub dropped: Vec<String>,
    pub report_file: PathBuf,
    pub output_file: PathBuf,
    pub database: String,
    pub db_user: String,
}

#[derive(Debug)]
pub struct UsageSummary {
    pub table: String,
    pub files_scanned: usize,
    pub usage_count: usize,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running casedup commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
}

impl CommandResult {
    pub fn new(summary: CommandSummary) -> Self {
        Self { summary }
    }

    pub fn exit_status(&self) -> ExitStatus {
        match &self.summary {
            CommandSummary::Init(InitSummary { created: false }) => ExitStatus::Failure,
            _ => ExitStatus::Success,
        }
    }
}
