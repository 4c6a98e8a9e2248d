//! Table name analysis: extraction, case-insensitive grouping and resolution.

pub mod extract;
pub mod group;
pub mod resolve;

pub use extract::{extract_table_names, read_table_names};
pub use group::{DuplicateGroup, find_duplicates, sorted_by_key};
pub use resolve::{ResolvedGroup, determine_primary, resolve};
