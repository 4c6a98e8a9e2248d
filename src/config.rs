use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

use crate::render::SqlOptions;

pub const CONFIG_FILE_NAME: &str = ".casedup.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Schema dump to scan.
    #[serde(default = "default_schema_file")]
    pub schema_file: String,
    /// Plain-text duplicate report to write.
    #[serde(default = "default_report_file")]
    pub report_file: String,
    /// Generated cleanup script to write.
    #[serde(default = "default_output_file")]
    pub output_file: String,
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_db_user")]
    pub db_user: String,
    /// Variants starting with this prefix are kept.
    #[serde(default = "default_keep_prefix")]
    pub keep_prefix: String,
}

fn default_schema_file() -> String {
    "socialhub-01-structure.sql".to_string()
}

fn default_report_file() -> String {
    "duplicates_report.txt".to_string()
}

fn default_output_file() -> String {
    "cleanup_duplicates.sql".to_string()
}

fn default_database() -> String {
    "socialhub".to_string()
}

fn default_db_user() -> String {
    "social".to_string()
}

fn default_keep_prefix() -> String {
    "wo_".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema_file: default_schema_file(),
            report_file: default_report_file(),
            output_file: default_output_file(),
            database: default_database(),
            db_user: default_db_user(),
            keep_prefix: default_keep_prefix(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// The database name ends up in a `USE` statement, so it must be a single
    /// bare word.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("schemaFile", &self.schema_file),
            ("reportFile", &self.report_file),
            ("outputFile", &self.output_file),
        ] {
            if value.trim().is_empty() {
                bail!("'{}' must not be empty", field);
            }
        }

        if self.database.is_empty() {
            bail!("'database' must not be empty");
        }
        if self
            .database
            .chars()
            .any(|c| c.is_whitespace() || c == '`' || c == ';')
        {
            bail!("Invalid database name in 'database': \"{}\"", self.database);
        }

        Ok(())
    }

    pub fn sql_options(&self) -> SqlOptions {
        SqlOptions {
            database: self.database.clone(),
            db_user: self.db_user.clone(),
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
