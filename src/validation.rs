//! Validation helper functions for the to-do MCP server
//!
//! This module contains parameter parsing for tool arguments that only accept
//! a fixed set of values, plus task id normalization.

use mcp_attr::Result as McpResult;

/// Settings pages reachable from the settings screen
pub const SETTING_PAGES: [&str; 3] = ["Themes", "Sounds", "About Us"];

/// Third-party sign-in providers offered on the login screen
pub const SOCIAL_PROVIDERS: [&str; 3] = ["Google", "Facebook", "Apple"];

fn parse_choice(
    value: &str,
    choices: &[&'static str],
    what: &str,
) -> McpResult<&'static str> {
    let value = value.trim();
    choices
        .iter()
        .find(|c| c.eq_ignore_ascii_case(value))
        .copied()
        .ok_or_else(|| {
            mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(
                format!(
                    "Invalid {} '{}'. Valid options: {}",
                    what,
                    value,
                    choices.join(", ")
                ),
                true,
            )
        })
}

/// Parse a settings page name (case-insensitive) into its canonical form
///
/// # Arguments
/// * `name` - Page name, e.g. "themes" or "About Us"
pub fn parse_setting_page(name: &str) -> McpResult<&'static str> {
    parse_choice(name, &SETTING_PAGES, "setting")
}

/// Parse a social login provider (case-insensitive) into its canonical form
pub fn parse_social_provider(provider: &str) -> McpResult<&'static str> {
    parse_choice(provider, &SOCIAL_PROVIDERS, "provider")
}

/// Normalize a task ID by trimming surrounding whitespace
///
/// # Examples
/// ```
/// # use todo_mcp::validation::normalize_task_id;
/// assert_eq!(normalize_task_id(" 1 "), "1");
/// ```
pub fn normalize_task_id(task_id: &str) -> String {
    task_id.trim().to_string()
}
