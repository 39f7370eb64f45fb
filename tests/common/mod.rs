//! Common test utilities for integration tests
#![allow(dead_code)]

use chrono::NaiveDate;
use task_dashboard::{Config, DashboardHandler, Priority, Task};

/// Reference date used across the integration tests
pub fn test_today() -> NaiveDate {
    date("2024-01-15")
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Create a test handler with no seed tasks and a pinned reference date
pub fn get_test_handler() -> DashboardHandler {
    DashboardHandler::new(Config::default(), Some(test_today()))
}

/// Create a test handler from inline TOML configuration
pub fn get_seeded_handler(toml_config: &str) -> DashboardHandler {
    let config: Config = toml::from_str(toml_config).unwrap();
    DashboardHandler::new(config, Some(test_today()))
}

/// Extract task ID from add_task() response message
/// Response format: "Task created with ID: <id>\n..."
pub fn extract_id_from_response(response: &str) -> String {
    response
        .lines()
        .next()
        .and_then(|line| line.strip_prefix("Task created with ID: "))
        .unwrap_or("")
        .trim()
        .to_string()
}

/// Create a test task with minimal fields
pub fn create_test_task(id: &str, title: &str, priority: Priority, completed: bool) -> Task {
    Task {
        id: id.to_string(),
        title: title.to_string(),
        description: None,
        completed,
        priority,
        category: "General".to_string(),
        due_date: None,
        created_at: test_today(),
    }
}

/// Create a test task with all fields
pub fn create_full_test_task(
    id: &str,
    title: &str,
    description: Option<&str>,
    priority: Priority,
    category: &str,
    completed: bool,
    due_date: Option<&str>,
) -> Task {
    Task {
        id: id.to_string(),
        title: title.to_string(),
        description: description.map(str::to_string),
        completed,
        priority,
        category: category.to_string(),
        due_date: due_date.map(date),
        created_at: test_today(),
    }
}
