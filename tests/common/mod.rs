//! Common test utilities for integration tests
#![allow(dead_code)]

use todo_mcp::{AppConfig, Screen, Task, TodoServerHandler};

/// Create a test handler with the default seed and no login delay
pub fn get_test_handler() -> TodoServerHandler {
    TodoServerHandler::new(&AppConfig::default())
}

/// Create a test handler that is already signed in on the tasks screen
pub async fn get_logged_in_handler() -> TodoServerHandler {
    let handler = get_test_handler();
    handler
        .handle_login("user@example.com".to_string(), "secret".to_string())
        .await
        .unwrap();
    handler
}

/// Extract task ID from add_task() response message
/// Response format: "Task created with ID: <id> (title: ...)"
pub fn extract_id_from_response(response: &str) -> String {
    if let Some(start) = response.find("ID: ") {
        let id_part = &response[start + 4..];
        if let Some(end) = id_part.find(" (") {
            return id_part[..end].trim().to_string();
        }
    }
    response
        .split_whitespace()
        .last()
        .unwrap_or("")
        .trim_end_matches(')')
        .to_string()
}

pub fn screen(handler: &TodoServerHandler) -> Screen {
    handler.with_app(|app| app.screen()).unwrap()
}

pub fn is_logged_in(handler: &TodoServerHandler) -> bool {
    handler.with_app(|app| app.is_logged_in()).unwrap()
}

pub fn tasks(handler: &TodoServerHandler) -> Vec<Task> {
    handler.with_app(|app| app.tasks().to_vec()).unwrap()
}

pub fn titles(handler: &TodoServerHandler) -> Vec<String> {
    tasks(handler).into_iter().map(|t| t.title).collect()
}
