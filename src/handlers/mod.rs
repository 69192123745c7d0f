//! MCP tool handlers for the to-do server
//!
//! Each handler locks the session, applies one action, and answers with a
//! text summary followed by the notifications that action produced.

pub mod auth;
pub mod settings;
pub mod status;
pub mod tasks;

use crate::controller::AppController;
use crate::error::ActionError;
use crate::formatting;
use mcp_attr::Result as McpResult;

/// Turn an action outcome into a tool response, draining notifications
///
/// Rejected actions become `INVALID_PARAMS` errors that still carry the
/// notifications, so the client sees the same message a user would.
pub(crate) fn respond(
    app: &mut AppController,
    outcome: Result<String, ActionError>,
) -> McpResult<String> {
    let notifications = app.notifier_mut().drain();
    let trailer = formatting::format_notifications(&notifications);
    match outcome {
        Ok(summary) => Ok(format!("{}{}", summary, trailer)),
        Err(e) => Err(
            mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS)
                .with_message(format!("{}{}", e, trailer), true),
        ),
    }
}
