//! Settings screen handlers

use crate::TodoServerHandler;
use crate::handlers::respond;
use crate::validation;
use mcp_attr::Result as McpResult;

impl TodoServerHandler {
    pub async fn handle_open_settings(&self) -> McpResult<String> {
        let mut app = self.app()?;
        let outcome = app.open_settings().map(|_| "Opened settings".to_string());
        respond(&mut app, outcome)
    }

    pub async fn handle_back(&self) -> McpResult<String> {
        let mut app = self.app()?;
        let outcome = app.back().map(|_| "Back to tasks".to_string());
        respond(&mut app, outcome)
    }

    pub async fn handle_open_setting(&self, name: String) -> McpResult<String> {
        let page = validation::parse_setting_page(&name)?;

        let mut app = self.app()?;
        let outcome = app
            .open_setting(page)
            .map(|_| format!("{} is not available", page));
        respond(&mut app, outcome)
    }

    /// Placeholder: warns, deletes nothing.
    pub async fn handle_delete_account(&self) -> McpResult<String> {
        let mut app = self.app()?;
        let outcome = app
            .delete_account()
            .map(|_| "Account deletion is not available".to_string());
        respond(&mut app, outcome)
    }
}
