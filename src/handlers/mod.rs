//! MCP tool handlers for the task dashboard server
//!
//! Each handler group is in a separate file.

pub mod analytics;
pub mod list;
pub mod settings;
pub mod tasks;
