//! To-do MCP Server Library
//!
//! This library provides a Model Context Protocol (MCP) server for a small
//! to-do list session: mock sign-in, a task list with add/toggle/delete, and a
//! settings screen with logout. All state lives in memory for the lifetime of
//! the server process.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **MCP Layer**: `TodoServerHandler` - one tool per user action
//! - **Session Layer**: `AppController` - the screen state machine that routes
//!   actions and reports them through a `Notifier`
//! - **Domain Layer**: `AuthSession` and `TaskStore` - the sign-in gate and the
//!   ordered task collection
//!
//! # Example
//!
//! ```no_run
//! use todo_mcp::{AppConfig, TodoServerHandler};
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let handler = TodoServerHandler::new(&AppConfig::default());
//!     // Use handler with MCP server...
//!     Ok(())
//! }
//! ```

mod auth;
mod config;
mod controller;
mod error;
pub mod formatting;
pub mod handlers;
mod notifier;
pub mod telemetry;
mod todo;
pub mod validation;

use mcp_attr::Result as McpResult;
use mcp_attr::server::{McpServer, mcp_server};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

// Re-export commonly used types
pub use auth::AuthSession;
pub use config::{AppConfig, DEFAULT_LOG_FILTER};
pub use controller::{AppController, Screen};
pub use error::{ActionError, AuthError, TaskError};
pub use notifier::{Notification, NotificationLog, Notifier, Severity};
pub use todo::{DEFAULT_SEED, Task, TaskStore};

/// MCP Server handler for a to-do list session
///
/// Owns exactly one session. Tools are applied one at a time in the order
/// they arrive.
pub struct TodoServerHandler {
    pub(crate) app: Mutex<AppController>,
    pub(crate) login_delay: Duration,
}

impl TodoServerHandler {
    /// Create a new handler from configuration
    ///
    /// # Example
    /// ```
    /// # use todo_mcp::{AppConfig, Screen, TodoServerHandler};
    /// let handler = TodoServerHandler::new(&AppConfig::default());
    /// assert_eq!(handler.with_app(|app| app.screen()).unwrap(), Screen::Login);
    /// ```
    pub fn new(config: &AppConfig) -> Self {
        let tasks = TaskStore::with_seed(config.seed_tasks.iter().cloned());
        let app = AppController::with_parts(tasks, NotificationLog::new());
        tracing::info!(
            seed_tasks = config.seed_tasks.len(),
            login_delay_ms = config.login_delay_ms,
            "session created"
        );
        Self {
            app: Mutex::new(app),
            login_delay: Duration::from_millis(config.login_delay_ms),
        }
    }

    /// Run a read-only closure against the session
    pub fn with_app<R>(&self, f: impl FnOnce(&AppController) -> R) -> McpResult<R> {
        let app = self.app()?;
        Ok(f(&app))
    }

    pub(crate) fn app(&self) -> McpResult<MutexGuard<'_, AppController>> {
        self.app.lock().map_err(|_| {
            tracing::error!("session lock poisoned");
            mcp_attr::Error::new(mcp_attr::ErrorCode::INTERNAL_ERROR)
                .with_message("Session state is unavailable".to_string(), true)
        })
    }

    /// Cosmetic sign-in latency; never holds the session lock
    pub(crate) async fn simulate_latency(&self) {
        if !self.login_delay.is_zero() {
            tokio::time::sleep(self.login_delay).await;
        }
    }
}

/// To-do list session server with mock authentication.
///
/// The session moves between four screens: login, signup, tasks and settings.
/// It starts on login. Actions only work on the screen that offers them and
/// are otherwise rejected without changing anything:
/// - **login**: login, toggle_form (to signup), forgot_password, social_login
/// - **signup**: signup, toggle_form (to login)
/// - **tasks**: add_task, toggle_task, delete_task, open_settings
/// - **settings**: back (to tasks), logout, open_setting, delete_account
///
/// list_tasks and status work everywhere. Authentication is mocked: any
/// non-empty email and password are accepted.
#[mcp_server]
impl McpServer for TodoServerHandler {
    /// **Status**: Show the current screen, whether a user is signed in, and the task count.
    #[tool]
    async fn status(&self) -> McpResult<String> {
        self.handle_status().await
    }

    /// **Navigate**: Switch between the login and signup forms. Login/signup screens only.
    #[tool]
    async fn toggle_form(&self) -> McpResult<String> {
        self.handle_toggle_form().await
    }

    /// **Sign in**: Any non-empty email and password succeed and open the task list. Login screen only.
    #[tool]
    async fn login(
        &self,
        /// Email address
        email: String,
        /// Password
        password: String,
    ) -> McpResult<String> {
        self.handle_login(email, password).await
    }

    /// **Sign up**: Create an account and open the task list. Passwords must match. Signup screen only.
    #[tool]
    async fn signup(
        &self,
        /// Email address
        email: String,
        /// Password
        password: String,
        /// Password again, must equal password
        confirm_password: String,
    ) -> McpResult<String> {
        self.handle_signup(email, password, confirm_password).await
    }

    /// **Forgot password**: Not implemented; does nothing. Login screen only.
    #[tool]
    async fn forgot_password(&self) -> McpResult<String> {
        self.handle_forgot_password().await
    }

    /// **Social login**: Placeholder for third-party sign-in; only shows a message. Login screen only.
    #[tool]
    async fn social_login(
        &self,
        /// Provider: Google/Facebook/Apple
        provider: String,
    ) -> McpResult<String> {
        self.handle_social_login(provider).await
    }

    /// **Settings**: Open the settings screen. Tasks screen only.
    #[tool]
    async fn open_settings(&self) -> McpResult<String> {
        self.handle_open_settings().await
    }

    /// **Back**: Return from settings to the task list. Settings screen only.
    #[tool]
    async fn back(&self) -> McpResult<String> {
        self.handle_back().await
    }

    /// **Sign out**: Log out and return to login. The task list is reset. Settings screen only.
    #[tool]
    async fn logout(&self) -> McpResult<String> {
        self.handle_logout().await
    }

    /// **Add**: Append a task to the end of the list. Blank titles are ignored. Tasks screen only.
    #[tool]
    async fn add_task(
        &self,
        /// Title: brief description, surrounding whitespace is trimmed
        title: String,
    ) -> McpResult<String> {
        self.handle_add_task(title).await
    }

    /// **Toggle**: Mark a task complete, or reopen a completed one. Tasks screen only.
    #[tool]
    async fn toggle_task(
        &self,
        /// Task ID as shown by list_tasks
        id: String,
    ) -> McpResult<String> {
        self.handle_toggle_task(id).await
    }

    /// **Delete**: Remove a task permanently. Tasks screen only.
    #[tool]
    async fn delete_task(
        &self,
        /// Task ID as shown by list_tasks
        id: String,
    ) -> McpResult<String> {
        self.handle_delete_task(id).await
    }

    /// **List**: Show all tasks in display order with their IDs and status.
    #[tool]
    async fn list_tasks(&self) -> McpResult<String> {
        self.handle_list_tasks().await
    }

    /// **Setting page**: Open a settings page; only shows a message. Settings screen only.
    #[tool]
    async fn open_setting(
        &self,
        /// Page: Themes/Sounds/About Us
        name: String,
    ) -> McpResult<String> {
        self.handle_open_setting(name).await
    }

    /// **Delete account**: Placeholder; shows a warning and deletes nothing. Settings screen only.
    #[tool]
    async fn delete_account(&self) -> McpResult<String> {
        self.handle_delete_account().await
    }
}
