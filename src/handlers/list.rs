//! List handler for the task dashboard server

use crate::DashboardHandler;
use crate::engine;
use crate::formatting;
use crate::validation;
use mcp_attr::Result as McpResult;

impl DashboardHandler {
    /// Handles list/filter operations - applies filters and formats results for display.
    pub async fn handle_list_tasks(
        &self,
        search: Option<String>,
        priority: Option<String>,
        status: Option<String>,
    ) -> McpResult<String> {
        let criteria = validation::parse_filter_criteria(search, priority, status)?;
        let language = self.language();

        let store = self.store();
        let tasks = engine::filter_tasks(store.tasks(), &criteria);
        Ok(formatting::format_tasks(&tasks, store.len(), language))
    }
}
