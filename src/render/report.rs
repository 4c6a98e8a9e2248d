use std::fmt::Write;

use crate::schema::ResolvedGroup;

const BANNER_WIDTH: usize = 80;

const KEEP_MARKER: &str = "KEEP";
const REMOVE_MARKER: &str = "REMOVE";

/// Render the plain-text duplicate report.
///
/// Groups are expected in key order (see [`crate::schema::sorted_by_key`]);
/// variants are listed in first-seen order, each marked keep or remove.
pub fn render_report(groups: &[ResolvedGroup]) -> String {
    let rule = "=".repeat(BANNER_WIDTH);
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "DUPLICATE TABLES REPORT");
    let _ = writeln!(out, "{}", rule);
    out.push('\n');

    for group in groups {
        let _ = writeln!(out, "Group: {}", group.key);
        let _ = writeln!(out, "  Variants:");
        for variant in &group.variants {
            let marker = if group.is_primary(variant) {
                KEEP_MARKER
            } else {
                REMOVE_MARKER
            };
            let _ = writeln!(out, "    - {} [{}]", variant, marker);
        }
        out.push('\n');
    }

    let _ = writeln!(out, "\nTotal duplicate groups: {}", groups.len());
    out
}
