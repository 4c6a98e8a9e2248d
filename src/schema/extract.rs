//! Table name extraction from a schema dump.
//!
//! This is a plain text scan, not a SQL parser. Any `CREATE TABLE` followed
//! by a backtick-quoted identifier is accepted, including matches inside
//! comments.

use std::{fs, path::Path, sync::LazyLock};

use anyhow::{Context, Result};
use regex::Regex;

// Capture group 1: the identifier between the backticks.
static CREATE_TABLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"CREATE TABLE `([^`]+)`").unwrap());

/// Extract every declared table name, in order of appearance.
///
/// Repeated declarations are returned repeatedly. Content without any
/// `CREATE TABLE` statement yields an empty list.
pub fn extract_table_names(content: &str) -> Vec<String> {
    CREATE_TABLE_REGEX
        .captures_iter(content)
        .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
        .collect()
}

/// Read a schema dump from disk and extract its table names.
pub fn read_table_names(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read schema file: {}", path.display()))?;
    Ok(extract_table_names(&content))
}
