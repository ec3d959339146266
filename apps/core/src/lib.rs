//! ScriptSmith core.
//!
//! Paste a viral video script, get topic ideas, and render a new script modeled on the
//! original's structure. Analysis is local and rule-based; projects persist in SQLite.

pub mod brain;
pub mod config;
pub mod error;
pub mod export;
pub mod fs_manager;
pub mod humanize;
pub mod logging;
pub mod models;
pub mod source;
pub mod store;
pub mod workflow;

pub use error::AppError;

#[cfg(test)]
mod tests;
