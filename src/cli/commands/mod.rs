pub mod analyze;
mod command_result;
pub mod init;
pub mod usage;

pub use command_result::*;
