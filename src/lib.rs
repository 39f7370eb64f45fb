//! Task Dashboard MCP Server Library
//!
//! This library provides a Model Context Protocol (MCP) server for a personal
//! task dashboard: create, edit, delete and filter tasks, view completion
//! statistics, and manage a settings panel. All state lives in memory.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **MCP Layer**: `DashboardHandler` - Handles MCP protocol communication
//! - **Engine Layer**: `engine` module - Pure aggregation and filtering over task snapshots
//! - **State Layer**: `task` and `settings` modules - In-memory task store and settings panel,
//!   seeded from a TOML configuration file (`config`)
//!
//! # Example
//!
//! ```no_run
//! use task_dashboard::{Config, DashboardHandler};
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let handler = DashboardHandler::new(Config::load(None)?, None);
//!     // Use handler with MCP server...
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod engine;
pub mod formatting;
mod handlers;
pub mod labels;
pub mod logging;
pub mod settings;
pub mod task;
pub mod validation;

use anyhow::Result;
use chrono::NaiveDate;
use mcp_attr::Result as McpResult;
use mcp_attr::server::{McpServer, mcp_server};
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

// Re-export commonly used types
pub use config::Config;
pub use engine::{FilterCriteria, PriorityFilter, Statistics, StatusFilter};
pub use settings::{Language, SettingsPanel, UserSettings};
pub use task::{NewTask, Priority, Task, TaskPatch, TaskStore};

/// MCP Server handler for the task dashboard
///
/// Owns the task store and the settings panel. Every tool call locks the
/// state it needs for the duration of the call and runs the engines on a
/// borrowed snapshot.
pub struct DashboardHandler {
    pub(crate) store: Mutex<TaskStore>,
    pub(crate) settings: Mutex<SettingsPanel>,
    /// Pinned reference date; the local date is used when `None`
    pub(crate) fixed_today: Option<NaiveDate>,
    pub(crate) recent_limit: usize,
}

impl DashboardHandler {
    /// Create a new handler from a loaded configuration
    ///
    /// # Arguments
    /// * `config` - Seed tasks, default settings and display options
    /// * `fixed_today` - Reference date for statistics and task creation;
    ///   the local date at each call when `None`
    pub fn new(config: Config, fixed_today: Option<NaiveDate>) -> Self {
        let today = fixed_today.unwrap_or_else(task::local_date_today);
        let store = config.build_store(today);
        tracing::info!(tasks = store.len(), "task store initialized");

        Self {
            store: Mutex::new(store),
            settings: Mutex::new(SettingsPanel::new(config.settings)),
            fixed_today,
            recent_limit: config.recent_limit,
        }
    }

    /// Create a new handler from a configuration file path
    ///
    /// # Example
    /// ```no_run
    /// # use task_dashboard::DashboardHandler;
    /// # use anyhow::Result;
    /// # fn main() -> Result<()> {
    /// let handler = DashboardHandler::from_config_file(Some("dashboard.toml".as_ref()), None)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_config_file(path: Option<&Path>, fixed_today: Option<NaiveDate>) -> Result<Self> {
        let config = Config::load(path)?;
        Ok(Self::new(config, fixed_today))
    }

    /// Reference date for the current call
    pub fn today(&self) -> NaiveDate {
        self.fixed_today.unwrap_or_else(task::local_date_today)
    }

    /// Clone of the current task list, in display order
    pub fn tasks(&self) -> Vec<Task> {
        self.store().tasks().to_vec()
    }

    pub(crate) fn store(&self) -> MutexGuard<'_, TaskStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn settings(&self) -> MutexGuard<'_, SettingsPanel> {
        self.settings.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Label language selected in the settings panel
    pub(crate) fn language(&self) -> Language {
        self.settings().current().preferences.language
    }
}

/// Personal task dashboard: manage tasks, filter the list, and review statistics.
///
/// Key concepts:
/// - **Task**: title, optional description, priority (high/medium/low), category, optional due date
/// - **Overdue**: incomplete task whose due date is before today
/// - **Upcoming**: incomplete task due within the next 7 days, today included
/// - **Settings**: profile, notifications, preferences and privacy options; edits stay unsaved until save_settings
///
/// Dates use format YYYY-MM-DD. New tasks appear at the top of the list.
#[mcp_server]
impl McpServer for DashboardHandler {
    /// **Add**: Create a task. Title is required; priority defaults to medium, category to the general bucket.
    #[tool]
    async fn add_task(
        &self,
        /// Title: brief description (required, non-empty)
        title: String,
        /// Description: free text (optional)
        description: Option<String>,
        /// Priority: high/medium/low (optional, default medium)
        priority: Option<String>,
        /// Category: free-text label (optional)
        category: Option<String>,
        /// Due date: YYYY-MM-DD (optional)
        due_date: Option<String>,
    ) -> McpResult<String> {
        self.handle_add_task(title, description, priority, category, due_date)
            .await
    }

    /// **Edit**: Update task fields. Use ""(empty string) to clear description or due date.
    #[tool]
    async fn update_task(
        &self,
        /// ID of task to update
        id: String,
        /// New title (optional)
        title: Option<String>,
        /// New description, ""=clear (optional)
        description: Option<String>,
        /// New priority: high/medium/low (optional)
        priority: Option<String>,
        /// New category, ""=default category (optional)
        category: Option<String>,
        /// New due date YYYY-MM-DD, ""=clear (optional)
        due_date: Option<String>,
    ) -> McpResult<String> {
        self.handle_update_task(id, title, description, priority, category, due_date)
            .await
    }

    /// **Delete**: Permanently remove a task.
    #[tool]
    async fn delete_task(
        &self,
        /// ID of task to delete
        id: String,
    ) -> McpResult<String> {
        self.handle_delete_task(id).await
    }

    /// **Complete**: Toggle a task between completed and pending.
    #[tool]
    async fn toggle_task(
        &self,
        /// ID of task to toggle
        id: String,
    ) -> McpResult<String> {
        self.handle_toggle_task(id).await
    }

    /// **Review**: List tasks. All filters are combined; omit a filter to match everything.
    #[tool]
    async fn list_tasks(
        &self,
        /// Search: case-insensitive text matched in title and description (optional)
        search: Option<String>,
        /// Priority filter: all/high/medium/low (optional)
        priority: Option<String>,
        /// Status filter: all/completed/pending (optional)
        status: Option<String>,
    ) -> McpResult<String> {
        self.handle_list_tasks(search, priority, status).await
    }

    /// **Dashboard**: Total, completed, pending and urgent counts with the most recent tasks.
    #[tool]
    async fn dashboard(&self) -> McpResult<String> {
        self.handle_dashboard().await
    }

    /// **Analytics**: Completion rate, priority/category breakdowns, overdue and upcoming counts, assessment and recommendations.
    #[tool]
    async fn statistics(
        &self,
        /// Reference date YYYY-MM-DD (optional, default today)
        date: Option<String>,
    ) -> McpResult<String> {
        self.handle_statistics(date).await
    }

    /// **Settings**: Show all settings and whether there are unsaved changes.
    #[tool]
    async fn get_settings(&self) -> McpResult<String> {
        self.handle_get_settings().await
    }

    /// **Settings**: Change one setting, e.g. section="preferences", field="theme", value="dark".
    /// Sections: profile(name,email), notifications(email,push,deadlines,daily_digest),
    /// preferences(theme,language,timezone,date_format), privacy(profile_public,analytics_tracking,data_sharing).
    #[tool]
    async fn update_setting(
        &self,
        /// Section: profile/notifications/preferences/privacy
        section: String,
        /// Field name within the section
        field: String,
        /// New value; booleans use true/false
        value: String,
    ) -> McpResult<String> {
        self.handle_update_setting(section, field, value).await
    }

    /// **Settings**: Accept pending setting changes.
    #[tool]
    async fn save_settings(&self) -> McpResult<String> {
        self.handle_save_settings().await
    }

    /// **Settings**: Restore default settings. Changes still need save_settings.
    #[tool]
    async fn reset_settings(&self) -> McpResult<String> {
        self.handle_reset_settings().await
    }
}
