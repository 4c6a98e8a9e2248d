//! casedup - find case-duplicate tables in a SQL schema dump
//!
//! Scans a schema dump for `CREATE TABLE` declarations whose names differ
//! only by letter case (`wo_profile` vs `Wo_profile`), picks the spelling to
//! keep and generates a report plus a SQL script dropping the rest.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `pipeline`: Extract, group and resolve in one call
//! - `render`: Report and cleanup script rendering
//! - `schema`: Table name extraction, grouping and resolution
//! - `usage`: Quoted table name usage counting

pub mod cli;
pub mod config;
pub mod pipeline;
pub mod render;
pub mod schema;
pub mod usage;
