//! Task mutation handlers: add, update, delete, toggle

use crate::DashboardHandler;
use crate::formatting;
use crate::task::{NewTask, Priority, TaskPatch};
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl DashboardHandler {
    /// Creates a task and prepends it to the list.
    pub async fn handle_add_task(
        &self,
        title: String,
        description: Option<String>,
        priority: Option<String>,
        category: Option<String>,
        due_date: Option<String>,
    ) -> McpResult<String> {
        let priority = match priority {
            Some(ref p) => validation::parse_priority(p)?,
            None => Priority::Medium,
        };
        let due_date = match due_date {
            Some(ref d) => validation::parse_clearable_date(d)?,
            None => None,
        };

        let language = self.language();
        let today = self.today();
        let new_task = NewTask {
            title,
            description,
            priority,
            category,
            due_date,
        };

        let mut store = self.store();
        match store.add(new_task, today) {
            Ok(task) => {
                tracing::info!(task_id = %task.id, "task created");
                Ok(format!(
                    "Task created with ID: {}\n{}",
                    task.id,
                    formatting::format_task(task, language)
                ))
            }
            Err(e) => bail_public!(_, "{}", e),
        }
    }

    /// Updates task fields. An empty string clears description and due date,
    /// and resets the category to the default one.
    pub async fn handle_update_task(
        &self,
        id: String,
        title: Option<String>,
        description: Option<String>,
        priority: Option<String>,
        category: Option<String>,
        due_date: Option<String>,
    ) -> McpResult<String> {
        let id = validation::normalize_task_id(&id);
        let patch = TaskPatch {
            title,
            description: description.map(|d| Some(d).filter(|d| !d.trim().is_empty())),
            priority: match priority {
                Some(ref p) => Some(validation::parse_priority(p)?),
                None => None,
            },
            category,
            due_date: match due_date {
                Some(ref d) => Some(validation::parse_clearable_date(d)?),
                None => None,
            },
        };

        if patch.is_empty() {
            bail_public!(
                _,
                "Nothing to update. Provide at least one of: title, description, priority, category, due_date"
            );
        }

        let language = self.language();
        let mut store = self.store();
        match store.update(&id, patch) {
            Ok(task) => {
                tracing::info!(task_id = %task.id, "task updated");
                Ok(format!(
                    "Task {} updated\n{}",
                    task.id,
                    formatting::format_task(task, language)
                ))
            }
            Err(e) => bail_public!(_, "{}", e),
        }
    }

    /// Permanently removes a task.
    pub async fn handle_delete_task(&self, id: String) -> McpResult<String> {
        let id = validation::normalize_task_id(&id);
        let mut store = self.store();
        match store.delete(&id) {
            Ok(task) => {
                tracing::info!(task_id = %task.id, "task deleted");
                Ok(format!("Deleted task {} ({})", task.id, task.title))
            }
            Err(e) => bail_public!(_, "{}", e),
        }
    }

    /// Flips the completion flag of a task.
    pub async fn handle_toggle_task(&self, id: String) -> McpResult<String> {
        let id = validation::normalize_task_id(&id);
        let mut store = self.store();
        match store.toggle(&id) {
            Ok(completed) => {
                tracing::info!(task_id = %id, completed, "task toggled");
                Ok(format!(
                    "Task {} marked as {}",
                    id,
                    if completed { "completed" } else { "pending" }
                ))
            }
            Err(e) => bail_public!(_, "{}", e),
        }
    }
}
