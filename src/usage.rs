//! Usage counting for a single table name across arbitrary files.
//!
//! Diagnostic only: the analyze flow never calls into this module.

use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::glob;
use regex::Regex;
use walkdir::WalkDir;

/// Check if a pattern contains glob wildcards (* or ?).
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Build the matcher for `` `name` ``, `"name"` and `'name'`.
fn quoted_name_regex(table: &str) -> Regex {
    let name = regex::escape(table);
    // Escaped input always forms a valid pattern.
    Regex::new(&format!(r#"`{name}`|"{name}"|'{name}'"#)).unwrap()
}

/// Count quoted occurrences of `table` in `content`.
pub fn count_in_text(table: &str, content: &str) -> usize {
    quoted_name_regex(table).find_iter(content).count()
}

/// Count quoted occurrences of `table` across all readable files.
///
/// Files that cannot be read contribute nothing. Content is decoded lossily,
/// so non-UTF-8 files are still scanned.
pub fn count_table_usage(table: &str, files: &[PathBuf]) -> usize {
    let re = quoted_name_regex(table);
    files
        .iter()
        .filter_map(|path| fs::read(path).ok())
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
        .map(|content| re.find_iter(&content).count())
        .sum()
}

/// Expand paths and glob patterns into a sorted list of files.
///
/// Directories are walked recursively. Literal paths that do not exist are
/// dropped, so the result only lists files that were actually found.
pub fn collect_files(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files: BTreeSet<PathBuf> = BTreeSet::new();

    for pattern in patterns {
        if is_glob_pattern(pattern) {
            let entries = glob(pattern)
                .with_context(|| format!("Invalid glob pattern: \"{}\"", pattern))?;
            for entry in entries.flatten() {
                add_path(&entry, &mut files);
            }
        } else {
            add_path(Path::new(pattern), &mut files);
        }
    }

    Ok(files.into_iter().collect())
}

fn add_path(path: &Path, files: &mut BTreeSet<PathBuf>) {
    if path.is_dir() {
        for entry in WalkDir::new(path).into_iter().flatten() {
            if entry.file_type().is_file() {
                files.insert(entry.into_path());
            }
        }
    } else if path.exists() {
        files.insert(path.to_path_buf());
    }
}
