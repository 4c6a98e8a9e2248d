use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::super::{
    args::{AnalyzeArgs, AnalyzeCommand},
    report::{print_config_source, print_detail, print_groups, print_phase, print_written},
};
use super::{AnalyzeSummary, CommandResult, CommandSummary};
use crate::{
    config::{Config, load_config},
    pipeline::analyze_tables,
    render::{render_cleanup_sql, render_report},
    schema::read_table_names,
};

impl AnalyzeArgs {
    /// Apply command-line overrides on top of the loaded config.
    fn apply_to(&self, mut config: Config) -> Config {
        if let Some(schema) = &self.schema {
            config.schema_file = schema.to_string_lossy().into_owned();
        }
        if let Some(report) = &self.report {
            config.report_file = report.to_string_lossy().into_owned();
        }
        if let Some(output) = &self.output {
            config.output_file = output.to_string_lossy().into_owned();
        }
        if let Some(database) = &self.database {
            config.database = database.clone();
        }
        config
    }
}

pub fn analyze(cmd: AnalyzeCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let verbose = args.common.verbose;

    let cwd = env::current_dir().context("Failed to determine current directory")?;
    let loaded = load_config(&cwd)?;
    let config = args.apply_to(loaded.config);
    config.validate()?;

    if verbose {
        print_config_source(loaded.from_file);
    }

    print_phase("Analyzing database structure...");
    let tables = read_table_names(Path::new(&config.schema_file))?;
    print_detail(&format!("Tables found: {}", tables.len()));

    print_phase("Searching for duplicates...");
    let analysis = analyze_tables(tables, &config.keep_prefix);
    let group_count = analysis.groups.len();
    print_detail(&format!("Duplicate groups found: {group_count}"));
    if verbose {
        print_groups(&analysis.groups);
    }

    let report_file = PathBuf::from(&config.report_file);
    fs::write(&report_file, render_report(&analysis.groups))
        .with_context(|| format!("Failed to write {}", report_file.display()))?;
    print_written("Report written", &report_file);

    print_phase("Generating SQL script...");
    let output_file = PathBuf::from(&config.output_file);
    let script = render_cleanup_sql(&analysis.groups, &config.sql_options());
    fs::write(&output_file, &script.sql)
        .with_context(|| format!("Failed to write {}", output_file.display()))?;
    print_written("Created", &output_file);
    print_detail(&format!("Tables to drop: {}", script.dropped.len()));

    Ok(CommandResult::new(CommandSummary::Analyze(AnalyzeSummary {
        table_count: analysis.tables.len(),
        groups: analysis.groups,
        dropped: script.dropped,
        report_file,
        output_file,
        database: config.database,
        db_user: config.db_user,
    })))
}
