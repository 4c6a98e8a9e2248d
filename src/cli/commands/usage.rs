use anyhow::Result;

use super::super::args::UsageCommand;
use super::super::report::print_verbose_file;
use super::{CommandResult, CommandSummary, UsageSummary};
use crate::usage::{collect_files, count_table_usage};

pub fn usage(cmd: UsageCommand) -> Result<CommandResult> {
    let args = cmd.args;
    let files = collect_files(&args.paths)?;

    if args.common.verbose {
        for file in &files {
            print_verbose_file(file);
        }
    }

    let usage_count = count_table_usage(&args.table, &files);

    Ok(CommandResult::new(CommandSummary::Usage(UsageSummary {
        table: args.table,
        files_scanned: files.len(),
        usage_count,
    })))
}
