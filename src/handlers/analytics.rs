//! Dashboard and statistics handlers

use crate::DashboardHandler;
use crate::engine::{DashboardSummary, Statistics};
use crate::formatting;
use crate::validation;
use mcp_attr::Result as McpResult;

impl DashboardHandler {
    /// Summary cards and the most recent tasks.
    pub async fn handle_dashboard(&self) -> McpResult<String> {
        let language = self.language();
        let store = self.store();
        let summary = DashboardSummary::compute(store.tasks(), self.recent_limit);
        Ok(formatting::format_dashboard(&summary, language))
    }

    /// Statistics against `date`, or the server's reference date when absent.
    pub async fn handle_statistics(&self, date: Option<String>) -> McpResult<String> {
        let today = match date {
            Some(ref d) => validation::parse_date(d)?,
            None => self.today(),
        };
        let language = self.language();

        let stats = {
            let store = self.store();
            Statistics::compute(store.tasks(), today)
        };
        Ok(formatting::format_statistics(&stats, today, language))
    }
}
