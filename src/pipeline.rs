//! The analysis pipeline: extract, group, resolve, sort.

use crate::schema::{ResolvedGroup, extract_table_names, find_duplicates, resolve, sorted_by_key};

/// Result of analyzing one schema dump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    /// Every extracted table name, in order of appearance.
    pub tables: Vec<String>,
    /// Duplicate groups sorted by key, each with its primary variant.
    pub groups: Vec<ResolvedGroup>,
}

/// Analyze schema text, keeping variants that start with `keep_prefix`.
pub fn analyze(content: &str, keep_prefix: &str) -> Analysis {
    analyze_tables(extract_table_names(content), keep_prefix)
}

/// Group and resolve an already extracted list of table names.
pub fn analyze_tables(tables: Vec<String>, keep_prefix: &str) -> Analysis {
    let groups = sorted_by_key(find_duplicates(&tables))
        .into_iter()
        .map(|group| resolve(group, keep_prefix))
        .collect();

    Analysis { tables, groups }
}
