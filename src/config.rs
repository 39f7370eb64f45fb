//! Startup configuration
//!
//! The configuration file is TOML, read once at startup and never written
//! back. Every key is optional; a missing file yields the defaults.

use crate::labels;
use crate::settings::UserSettings;
use crate::task::{Priority, Task, TaskStore};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Number of tasks shown in the dashboard's recent list by default
pub const DEFAULT_RECENT_LIMIT: usize = 4;

/// Seed task as written in the configuration file
///
/// Fields are kept as raw strings so malformed values can be normalized with
/// a warning instead of rejecting the whole file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TaskRecord {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub priority: String,
    pub category: String,
    /// Optional due date (format: YYYY-MM-DD)
    pub due_date: Option<String>,
    /// Creation date (format: YYYY-MM-DD); the load date when absent
    pub created_at: Option<String>,
}

fn parse_record_date(task_id: &str, field: &str, value: Option<&str>) -> Option<NaiveDate> {
    let raw = value?.trim();
    if raw.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(d) => Some(d),
        Err(_) => {
            tracing::warn!(task_id, field, value = raw, "ignoring malformed date in seed task");
            None
        }
    }
}

impl TaskRecord {
    /// Convert into a task, normalizing malformed fields
    ///
    /// # Arguments
    /// * `today` - Creation date used when `created_at` is absent or malformed
    pub fn into_task(self, today: NaiveDate) -> Task {
        let priority = if self.priority.trim().is_empty() {
            Priority::Medium
        } else {
            Priority::from_raw(&self.priority)
        };
        if !priority.is_known() {
            tracing::warn!(
                task_id = %self.id,
                priority = %priority,
                "seed task has an unknown priority"
            );
        }

        let due_date = parse_record_date(&self.id, "due_date", self.due_date.as_deref());
        let created_at =
            parse_record_date(&self.id, "created_at", self.created_at.as_deref()).unwrap_or(today);

        Task {
            id: self.id.trim().to_string(),
            title: self.title.trim().to_string(),
            description: self.description.filter(|d| !d.trim().is_empty()),
            completed: self.completed,
            priority,
            category: self.category.trim().to_string(),
            due_date,
            created_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of tasks in the dashboard's recent list
    pub recent_limit: usize,
    /// Default values of the settings panel
    pub settings: UserSettings,
    /// Seed tasks, in display order
    pub tasks: Vec<TaskRecord>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            recent_limit: DEFAULT_RECENT_LIMIT,
            settings: UserSettings::default(),
            tasks: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Configuration file; `None` or a missing file yields defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        if !path.exists() {
            tracing::info!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        tracing::info!(
            path = %path.display(),
            seed_tasks = config.tasks.len(),
            "config loaded"
        );
        Ok(config)
    }

    /// Build the task store from the seed tasks
    ///
    /// Seed records without an ID get a generated one. Records with an empty
    /// title or a duplicate ID are skipped with a warning.
    pub fn build_store(&self, today: NaiveDate) -> TaskStore {
        let language = self.settings.preferences.language;
        let mut store = TaskStore::new(labels::default_category(language));

        let tasks: Vec<Task> = self
            .tasks
            .iter()
            .map(|record| record.clone().into_task(today))
            .collect();
        // Generated IDs must not collide with explicit IDs seeded later
        let reserved: HashSet<String> = tasks
            .iter()
            .filter(|t| !t.id.is_empty())
            .map(|t| t.id.clone())
            .collect();

        for mut task in tasks {
            if task.id.is_empty() {
                task.id = loop {
                    let id = store.generate_id();
                    if !reserved.contains(&id) {
                        break id;
                    }
                };
            }
            let id = task.id.clone();
            if let Err(e) = store.insert(task) {
                tracing::warn!(task_id = %id, error = %e, "skipping seed task");
            }
        }

        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Language;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_record_normalization() {
        let record = TaskRecord {
            id: " 7 ".to_string(),
            title: "Entretien candidat".to_string(),
            description: Some("  ".to_string()),
            completed: true,
            priority: "HIGH".to_string(),
            category: "RH".to_string(),
            due_date: Some("2024-13-45".to_string()),
            created_at: None,
        };
        let task = record.into_task(date("2024-01-15"));
        assert_eq!(task.id, "7");
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.description, None);
        assert_eq!(task.due_date, None);
        assert_eq!(task.created_at, date("2024-01-15"));
    }

    #[test]
    fn test_record_unknown_priority_is_kept() {
        let record = TaskRecord {
            id: "1".to_string(),
            title: "Odd".to_string(),
            priority: "critical".to_string(),
            ..Default::default()
        };
        let task = record.into_task(date("2024-01-15"));
        assert_eq!(task.priority, Priority::Unknown("critical".to_string()));
    }

    #[test]
    fn test_build_store_skips_invalid_records() {
        let config: Config = toml::from_str(
            r#"
[settings.preferences]
language = "en"

[[tasks]]
id = "1"
title = "Write report"
priority = "high"
due_date = "2024-01-15"

[[tasks]]
id = "1"
title = "Duplicate"

[[tasks]]
id = "2"
title = "   "
"#,
        )
        .unwrap();
        let store = config.build_store(date("2024-01-10"));
        assert_eq!(store.len(), 1);
        let task = store.get("1").unwrap();
        assert_eq!(task.category, "General");
        assert_eq!(task.due_date, Some(date("2024-01-15")));
        assert_eq!(store.default_category(), labels::default_category(Language::en));
    }

    #[test]
    fn test_missing_path_yields_defaults() {
        let config = Config::load(None).unwrap();
        assert_eq!(config.recent_limit, DEFAULT_RECENT_LIMIT);
        assert!(config.tasks.is_empty());

        let config = Config::load(Some(Path::new("/nonexistent/task-dashboard.toml"))).unwrap();
        assert!(config.tasks.is_empty());
    }
}
