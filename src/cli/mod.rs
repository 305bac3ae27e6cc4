//! CLI command handling

pub mod config;
pub mod notify;

pub use config::*;
pub use notify::*;
