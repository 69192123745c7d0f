//! Task list handlers

use crate::TodoServerHandler;
use crate::formatting;
use crate::handlers::respond;
use crate::validation;
use mcp_attr::Result as McpResult;

impl TodoServerHandler {
    /// Adds a task. Blank titles are accepted but add nothing.
    pub async fn handle_add_task(&self, title: String) -> McpResult<String> {
        let mut app = self.app()?;
        let outcome = app.add_task(&title).map(|added| match added {
            Some(id) => format!("Task created with ID: {} (title: {})", id, title.trim()),
            None => "Nothing added: title is blank".to_string(),
        });
        respond(&mut app, outcome)
    }

    pub async fn handle_toggle_task(&self, id: String) -> McpResult<String> {
        let id = validation::normalize_task_id(&id);

        let mut app = self.app()?;
        let outcome = app
            .toggle_task(&id)
            .map(|task| formatting::format_task(&task));
        respond(&mut app, outcome)
    }

    pub async fn handle_delete_task(&self, id: String) -> McpResult<String> {
        let id = validation::normalize_task_id(&id);

        let mut app = self.app()?;
        let outcome = app
            .delete_task(&id)
            .map(|task| format!("Task {} deleted", task.id));
        respond(&mut app, outcome)
    }

    /// Lists tasks in display order. Read-only, available on any screen.
    pub async fn handle_list_tasks(&self) -> McpResult<String> {
        let app = self.app()?;
        Ok(formatting::format_tasks(app.tasks()))
    }
}
