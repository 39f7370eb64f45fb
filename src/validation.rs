//! Validation helper functions for the task dashboard server
//!
//! This module parses raw tool arguments (priorities, filters, dates) into
//! domain values and converts failures into MCP errors.

use crate::engine::{FilterCriteria, PriorityFilter, StatusFilter};
use crate::task::Priority;
use chrono::NaiveDate;
use mcp_attr::Result as McpResult;

fn invalid_params(message: String) -> mcp_attr::Error {
    mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(message, true)
}

/// Parse and validate a priority parameter
///
/// # Arguments
/// * `priority_str` - Priority string (high, medium, low)
pub fn parse_priority(priority_str: &str) -> McpResult<Priority> {
    priority_str.parse::<Priority>().map_err(invalid_params)
}

/// Parse and validate a date parameter
///
/// # Arguments
/// * `date_str` - Date string in YYYY-MM-DD format
pub fn parse_date(date_str: &str) -> McpResult<NaiveDate> {
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d").map_err(|_| {
        invalid_params(format!(
            "Invalid date format '{}'. Use YYYY-MM-DD (e.g., '2025-03-15')",
            date_str
        ))
    })
}

/// Parse an optional date where an empty string means "no date"
pub fn parse_clearable_date(date_str: &str) -> McpResult<Option<NaiveDate>> {
    if date_str.trim().is_empty() {
        Ok(None)
    } else {
        parse_date(date_str).map(Some)
    }
}

/// Build filter criteria from optional tool arguments; absent means "all"
///
/// # Arguments
/// * `search` - Free-text search term
/// * `priority` - all, high, medium or low
/// * `status` - all, completed or pending
pub fn parse_filter_criteria(
    search: Option<String>,
    priority: Option<String>,
    status: Option<String>,
) -> McpResult<FilterCriteria> {
    let priority = match priority {
        Some(p) => p.parse::<PriorityFilter>().map_err(invalid_params)?,
        None => PriorityFilter::All,
    };
    let status = match status {
        Some(s) => s.parse::<StatusFilter>().map_err(invalid_params)?,
        None => StatusFilter::All,
    };

    Ok(FilterCriteria {
        search_term: search.unwrap_or_default(),
        priority,
        status,
    })
}

/// Normalize a task ID by trimming surrounding whitespace
///
/// # Examples
/// ```
/// # use task_dashboard::validation::normalize_task_id;
/// assert_eq!(normalize_task_id(" task-1 "), "task-1");
/// ```
pub fn normalize_task_id(task_id: &str) -> String {
    task_id.trim().to_string()
}
