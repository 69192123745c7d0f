//! Session state machine
//!
//! [`AppController`] owns the authentication gate, the task list and the
//! current screen, and routes every user action to them. An action that has
//! no transition from the current screen is ignored: nothing changes, no
//! notification is emitted, and the caller gets [`ActionError::Unavailable`].
//!
//! | From     | Action      | To       |
//! |----------|-------------|----------|
//! | Login    | toggle_form | Signup   |
//! | Signup   | toggle_form | Login    |
//! | Login    | login ok    | Tasks    |
//! | Signup   | signup ok   | Tasks    |
//! | Tasks    | open_settings | Settings |
//! | Settings | back        | Tasks    |
//! | Settings | logout      | Login    |

use crate::auth::AuthSession;
use crate::error::{ActionError, AuthError, Result};
use crate::notifier::{Notification, NotificationLog, Notifier};
use crate::todo::{Task, TaskStore};
use std::fmt;

/// Screen the session is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Login,
    Signup,
    Tasks,
    Settings,
}

impl Screen {
    /// Whether this screen belongs to a signed-in session
    pub fn requires_login(self) -> bool {
        matches!(self, Screen::Tasks | Screen::Settings)
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Screen::Login => "login",
            Screen::Signup => "signup",
            Screen::Tasks => "tasks",
            Screen::Settings => "settings",
        };
        f.write_str(name)
    }
}

pub struct AppController<N: Notifier = NotificationLog> {
    screen: Screen,
    session: AuthSession,
    tasks: TaskStore,
    notifier: N,
}

impl AppController<NotificationLog> {
    /// Controller with the default seed list and a buffering notifier
    pub fn new() -> Self {
        Self::with_parts(TaskStore::default(), NotificationLog::new())
    }
}

impl Default for AppController<NotificationLog> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Notifier> AppController<N> {
    /// Start a session on the login screen with the given task list
    pub fn with_parts(tasks: TaskStore, notifier: N) -> Self {
        Self {
            screen: Screen::Login,
            session: AuthSession::new(),
            tasks,
            notifier,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }

    /// Read-only view of the task list in display order
    pub fn tasks(&self) -> &[Task] {
        self.tasks.list()
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    /// Signed-in state and screen agree with each other
    pub fn is_consistent(&self) -> bool {
        self.session.is_logged_in() == self.screen.requires_login()
    }

    fn require(&self, action: &'static str, allowed: &[Screen]) -> Result<()> {
        if allowed.contains(&self.screen) {
            Ok(())
        } else {
            tracing::debug!(action, screen = %self.screen, "ignoring unavailable action");
            Err(ActionError::Unavailable {
                action,
                screen: self.screen,
            })
        }
    }

    fn go_to(&mut self, screen: Screen) {
        tracing::debug!(from = %self.screen, to = %screen, "screen transition");
        self.screen = screen;
        debug_assert!(self.is_consistent());
    }

    fn report_auth_error(&mut self, err: &AuthError) {
        let notification = match err {
            AuthError::MissingField => {
                Notification::destructive("Error", "Please fill in all fields.")
            }
            AuthError::PasswordMismatch => {
                Notification::destructive("Password Mismatch", "Passwords do not match.")
            }
        };
        self.notifier.notify(notification);
    }

    /// Switch between the login and signup forms
    pub fn toggle_form(&mut self) -> Result<Screen> {
        self.require("toggle_form", &[Screen::Login, Screen::Signup])?;
        let next = if self.screen == Screen::Login {
            Screen::Signup
        } else {
            Screen::Login
        };
        self.go_to(next);
        Ok(next)
    }

    pub fn login(&mut self, email: &str, password: &str) -> Result<()> {
        self.require("login", &[Screen::Login])?;
        if let Err(e) = self.session.login(email, password) {
            tracing::info!(error = %e, "login rejected");
            self.report_auth_error(&e);
            return Err(e.into());
        }
        self.go_to(Screen::Tasks);
        tracing::info!("user logged in");
        self.notifier.notify(Notification::info(
            "Welcome back!",
            "You've successfully logged in.",
        ));
        Ok(())
    }

    pub fn signup(&mut self, email: &str, password: &str, confirm_password: &str) -> Result<()> {
        self.require("signup", &[Screen::Signup])?;
        if let Err(e) = self.session.signup(email, password, confirm_password) {
            tracing::info!(error = %e, "signup rejected");
            self.report_auth_error(&e);
            return Err(e.into());
        }
        self.go_to(Screen::Tasks);
        tracing::info!("account created");
        self.notifier.notify(Notification::info(
            "Account Created!",
            "Welcome to your new to-do app.",
        ));
        Ok(())
    }

    /// Password recovery has no behavior; accepted on the login screen and
    /// otherwise ignored
    pub fn forgot_password(&mut self) -> Result<()> {
        self.require("forgot_password", &[Screen::Login])
    }

    /// Third-party sign-in placeholder; only notifies
    pub fn social_login(&mut self, provider: &str) -> Result<()> {
        self.require("social_login", &[Screen::Login])?;
        self.notifier.notify(Notification::info(
            format!("{} Login", provider),
            "Social login would be implemented here.",
        ));
        Ok(())
    }

    pub fn open_settings(&mut self) -> Result<()> {
        self.require("open_settings", &[Screen::Tasks])?;
        self.go_to(Screen::Settings);
        Ok(())
    }

    pub fn back(&mut self) -> Result<()> {
        self.require("back", &[Screen::Settings])?;
        self.go_to(Screen::Tasks);
        Ok(())
    }

    /// Sign out and return to the login form
    ///
    /// The task list is reset to its seed so the next sign-in starts fresh.
    pub fn logout(&mut self) -> Result<()> {
        self.require("logout", &[Screen::Settings])?;
        self.session.logout();
        self.tasks.reset();
        self.go_to(Screen::Login);
        tracing::info!("user logged out");
        self.notifier.notify(Notification::info(
            "Logged Out",
            "You've been successfully logged out.",
        ));
        Ok(())
    }

    /// Add a task; `Ok(None)` means the title was blank and nothing happened
    pub fn add_task(&mut self, title: &str) -> Result<Option<String>> {
        self.require("add_task", &[Screen::Tasks])?;
        let Some(id) = self.tasks.add(title) else {
            tracing::debug!("ignoring blank task title");
            return Ok(None);
        };
        tracing::info!(id = %id, "task added");
        self.notifier.notify(Notification::info(
            "Task Added!",
            format!("\"{}\" has been added to your list.", title.trim()),
        ));
        Ok(Some(id))
    }

    /// Flip a task's completed flag, returning the updated task
    pub fn toggle_task(&mut self, id: &str) -> Result<Task> {
        self.require("toggle_task", &[Screen::Tasks])?;
        let toggled = self.tasks.toggle(id).cloned();
        let task = match toggled {
            Ok(task) => task,
            Err(e) => return Err(self.report_missing_task(id, e.into())),
        };
        tracing::info!(id = %task.id, completed = task.completed, "task toggled");
        let notification = if task.completed {
            Notification::info(
                "Task Completed!",
                format!("\"{}\" marked as complete.", task.title),
            )
        } else {
            Notification::info("Task Reopened", format!("\"{}\" reopened.", task.title))
        };
        self.notifier.notify(notification);
        Ok(task)
    }

    pub fn delete_task(&mut self, id: &str) -> Result<Task> {
        self.require("delete_task", &[Screen::Tasks])?;
        let task = match self.tasks.delete(id) {
            Ok(task) => task,
            Err(e) => return Err(self.report_missing_task(id, e.into())),
        };
        tracing::info!(id = %task.id, "task deleted");
        self.notifier.notify(Notification::info(
            "Task Deleted",
            format!("\"{}\" has been removed.", task.title),
        ));
        Ok(task)
    }

    fn report_missing_task(&mut self, id: &str, err: ActionError) -> ActionError {
        tracing::info!(id, "task not found");
        self.notifier.notify(Notification::destructive(
            "Task Not Found",
            format!("No task with ID \"{}\".", id),
        ));
        err
    }

    /// Open one of the settings pages; only notifies
    pub fn open_setting(&mut self, name: &str) -> Result<()> {
        self.require("open_setting", &[Screen::Settings])?;
        self.notifier.notify(Notification::info(
            name,
            format!("{} settings would open here.", name),
        ));
        Ok(())
    }

    /// Account deletion placeholder; warns but changes nothing
    pub fn delete_account(&mut self) -> Result<()> {
        self.require("delete_account", &[Screen::Settings])?;
        self.notifier.notify(Notification::destructive(
            "Account Deletion",
            "This would delete your account permanently.",
        ));
        Ok(())
    }
}
