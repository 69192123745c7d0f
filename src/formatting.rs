//! Formatting helper functions for the to-do MCP server
//!
//! This module turns session state and notifications into the text returned
//! by MCP tools.

use crate::controller::Screen;
use crate::notifier::{Notification, Severity};
use crate::todo::Task;

/// Format a single task line
///
/// # Example
/// `- [1] GYM (status: open)`
pub fn format_task(task: &Task) -> String {
    format!(
        "- [{}] {} (status: {})",
        task.id,
        task.title,
        if task.completed { "done" } else { "open" }
    )
}

/// Format the task list into a display string
pub fn format_tasks(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "No tasks found".to_string();
    }

    let done = tasks.iter().filter(|t| t.completed).count();
    let mut result = format!("Found {} task(s), {} done:\n\n", tasks.len(), done);
    for task in tasks {
        result.push_str(&format_task(task));
        result.push('\n');
    }
    result
}

/// Format notifications as a trailing block; empty input yields an empty string
pub fn format_notifications(notifications: &[Notification]) -> String {
    if notifications.is_empty() {
        return String::new();
    }

    let mut result = String::from("\n\nNotifications:\n");
    for n in notifications {
        match n.severity {
            Severity::Default => {
                result.push_str(&format!("- {}: {}\n", n.title, n.description));
            }
            Severity::Destructive => {
                result.push_str(&format!("- [{}] {}: {}\n", n.severity, n.title, n.description));
            }
        }
    }
    result
}

/// One-line session summary
pub fn format_status(screen: Screen, logged_in: bool, task_count: usize) -> String {
    format!(
        "Screen: {}, logged in: {}, tasks: {}",
        screen,
        if logged_in { "yes" } else { "no" },
        task_count
    )
}
