//! Console output for CLI commands.
//!
//! Progress lines are printed while a command runs; the closing summary is
//! printed from the command result. Kept apart from the library so the
//! pipeline can be used without printing side effects.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;

use super::commands::{AnalyzeSummary, CommandResult, CommandSummary, InitSummary, UsageSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::schema::ResolvedGroup;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

const RULE_WIDTH: usize = 80;

const BACKUP_REMINDER: &str = "Back up the database before running the script!";

/// Print the closing summary for a finished command.
pub fn print(result: &CommandResult, verbose: bool) {
    let mut out = io::stdout().lock();
    match &result.summary {
        CommandSummary::Analyze(summary) => print_analyze_summary_to(summary, &mut out),
        CommandSummary::Usage(summary) => print_usage_summary_to(summary, verbose, &mut out),
        CommandSummary::Init(summary) => print_init_summary(summary),
    }
}

/// Announce the start of a phase.
pub fn print_phase(message: &str) {
    let _ = writeln!(io::stdout().lock(), "\n{}", message.bold());
}

/// Print an indented detail line under the current phase.
pub fn print_detail(message: &str) {
    let _ = writeln!(io::stdout().lock(), "   {}", message);
}

/// Print that a file was written.
pub fn print_written(label: &str, path: &Path) {
    let _ = writeln!(
        io::stdout().lock(),
        "   {} {}: {}",
        SUCCESS_MARK.green(),
        label,
        path.display()
    );
}

pub fn print_config_source(from_file: bool) {
    let source = if from_file {
        format!("Using {}", CONFIG_FILE_NAME)
    } else {
        format!("No {} found, using defaults", CONFIG_FILE_NAME)
    };
    let _ = writeln!(io::stderr().lock(), "{}", source.dimmed());
}

pub fn print_verbose_file(path: &Path) {
    let _ = writeln!(
        io::stderr().lock(),
        "{} {}",
        "scanning".dimmed(),
        path.display()
    );
}

/// Print every group and its decision.
pub fn print_groups(groups: &[ResolvedGroup]) {
    print_groups_to(groups, &mut io::stdout().lock());
}

pub fn print_groups_to<W: Write>(groups: &[ResolvedGroup], writer: &mut W) {
    for group in groups {
        let _ = writeln!(writer, "   {}", group.key.cyan());
        for variant in &group.variants {
            if group.is_primary(variant) {
                let _ = writeln!(writer, "     {} keep   {}", SUCCESS_MARK.green(), variant);
            } else {
                let _ = writeln!(writer, "     {} remove {}", FAILURE_MARK.red(), variant);
            }
        }
    }
}

pub fn print_analyze_summary_to<W: Write>(summary: &AnalyzeSummary, writer: &mut W) {
    let rule = "=".repeat(RULE_WIDTH);
    let report = summary.report_file.display();
    let output = summary.output_file.display();

    let _ = writeln!(writer, "\n{}", rule);
    let _ = writeln!(writer, "{}", "DONE".green().bold());
    let _ = writeln!(writer, "{}", rule);
    let _ = writeln!(
        writer,
        "\n   {} tables, {} duplicate groups, {} tables to drop",
        summary.table_count,
        summary.groups.len(),
        summary.dropped.len()
    );

    let _ = writeln!(writer, "\nFiles created:");
    let _ = writeln!(writer, "   1. {} - detailed report", report);
    let _ = writeln!(writer, "   2. {} - SQL cleanup script", output);

    let (user, database) = (&summary.db_user, &summary.database);
    let command = format!("mysql -u {user} -p {database} < {output}");

    let _ = writeln!(writer, "\n{}", "IMPORTANT:".yellow().bold());
    let _ = writeln!(writer, "   1. Review {}", report);
    let _ = writeln!(writer, "   2. {}", BACKUP_REMINDER);
    let _ = writeln!(writer, "   3. Run: {}", command.cyan());
    let _ = writeln!(writer);
}

pub fn print_usage_summary_to<W: Write>(summary: &UsageSummary, verbose: bool, writer: &mut W) {
    if verbose {
        let _ = writeln!(
            writer,
            "{} {} {} scanned",
            SUCCESS_MARK.green(),
            summary.files_scanned,
            if summary.files_scanned == 1 {
                "file"
            } else {
                "files"
            }
        );
    }
    let _ = writeln!(writer, "{}: {}", summary.table.cyan(), summary.usage_count);
}

fn print_init_summary(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        eprintln!(
            "{} {} already exists",
            "error:".bold().red(),
            CONFIG_FILE_NAME
        );
    }
}
