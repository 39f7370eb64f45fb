//! Settings panel handlers

use crate::DashboardHandler;
use crate::formatting;
use crate::labels;
use mcp_attr::{Result as McpResult, bail_public};

impl DashboardHandler {
    pub async fn handle_get_settings(&self) -> McpResult<String> {
        let panel = self.settings();
        Ok(formatting::format_settings(
            panel.current(),
            panel.has_changes(),
        ))
    }

    /// Sets one settings field. Changing the language also changes the
    /// category given to new tasks created without one.
    pub async fn handle_update_setting(
        &self,
        section: String,
        field: String,
        value: String,
    ) -> McpResult<String> {
        let language = {
            let mut panel = self.settings();
            if let Err(e) = panel.set(section.trim(), field.trim(), &value) {
                bail_public!(_, "{}", e);
            }
            panel.current().preferences.language
        };

        if section.trim() == "preferences" && field.trim() == "language" {
            self.store()
                .set_default_category(labels::default_category(language));
        }

        tracing::info!(section = %section, field = %field, "setting changed");
        Ok(format!(
            "Setting {}.{} set to '{}' (unsaved)",
            section.trim(),
            field.trim(),
            value
        ))
    }

    pub async fn handle_save_settings(&self) -> McpResult<String> {
        if self.settings().save() {
            Ok("Settings saved".to_string())
        } else {
            Ok("No changes to save".to_string())
        }
    }

    /// Restores the configured defaults; the result still needs saving.
    pub async fn handle_reset_settings(&self) -> McpResult<String> {
        let language = {
            let mut panel = self.settings();
            panel.reset();
            panel.current().preferences.language
        };
        self.store()
            .set_default_category(labels::default_category(language));
        Ok("Settings reset to defaults (unsaved)".to_string())
    }
}
