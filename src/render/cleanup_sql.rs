use crate::schema::ResolvedGroup;

const SECTION_RULE: &str = "-- ============================================";

/// Values baked into the generated script.
#[derive(Debug, Clone)]
pub struct SqlOptions {
    /// Database selected with `USE` and named in the backup hint.
    pub database: String,
    /// User named in the backup hint.
    pub db_user: String,
}

/// A rendered cleanup script and the tables it drops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupScript {
    pub sql: String,
    /// Dropped tables in group order, variants in first-seen order.
    pub dropped: Vec<String>,
}

/// Render the DROP TABLE script for every non-primary variant.
///
/// The per-group comments follow group order. The `DROP TABLE` statements
/// are sorted by table name on their own, independent of the groups.
pub fn render_cleanup_sql(groups: &[ResolvedGroup], options: &SqlOptions) -> CleanupScript {
    let mut lines: Vec<String> = vec![
        SECTION_RULE.to_string(),
        "-- Duplicate table cleanup script".to_string(),
        "-- Generated automatically".to_string(),
        SECTION_RULE.to_string(),
        String::new(),
        "-- IMPORTANT: back up the database before running this script!".to_string(),
        format!("-- {}", backup_command(options)),
        String::new(),
        format!("USE {};", options.database),
        String::new(),
    ];

    let mut dropped: Vec<String> = Vec::new();

    for group in groups {
        lines.push(format!("-- Group: {}", group.key));
        lines.push(format!("-- Keep: {}", group.primary));
        for table in group.to_drop() {
            lines.push(format!("-- Drop: {}", table));
            dropped.push(table.to_string());
        }
        lines.push(String::new());
    }

    lines.push(SECTION_RULE.to_string());
    lines.push("-- DROP TABLE statements".to_string());
    lines.push(SECTION_RULE.to_string());
    lines.push(String::new());

    let mut statements: Vec<&String> = dropped.iter().collect();
    statements.sort();
    lines.extend(statements.into_iter().map(|t| drop_statement(t)));

    lines.push(String::new());
    lines.push(format!("-- Total tables to drop: {}", dropped.len()));
    lines.push(String::new());

    CleanupScript {
        sql: lines.join("\n"),
        dropped,
    }
}

pub fn drop_statement(table: &str) -> String {
    format!("DROP TABLE IF EXISTS `{}`;", table)
}

/// Shell command suggested for taking a backup first.
///
/// The date is expanded by the shell when the command is run, never here.
pub fn backup_command(options: &SqlOptions) -> String {
    format!(
        "mysqldump -u {} -p {} > backup_$(date +%Y%m%d_%H%M%S).sql",
        options.db_user, options.database
    )
}
