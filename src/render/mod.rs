//! Text renderers for the duplicate report and the cleanup script.
//!
//! Renderers only build strings. Writing files and printing to the console
//! is left to the CLI layer so the library stays free of side effects.

pub mod cleanup_sql;
pub mod report;

pub use cleanup_sql::{CleanupScript, SqlOptions, render_cleanup_sql};
pub use report::render_report;
