//! Session status handler

use crate::TodoServerHandler;
use crate::formatting;
use mcp_attr::Result as McpResult;

impl TodoServerHandler {
    /// Reports the current screen, sign-in state and task count.
    pub async fn handle_status(&self) -> McpResult<String> {
        let app = self.app()?;
        Ok(formatting::format_status(
            app.screen(),
            app.is_logged_in(),
            app.tasks().len(),
        ))
    }
}
