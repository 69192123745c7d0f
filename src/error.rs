//! Error taxonomy for the to-do session
//!
//! Every error here is local to the single action that produced it: state is
//! left unchanged and nothing is retried.

use crate::controller::Screen;
use thiserror::Error;

/// Credential check failures from the mocked authentication gate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Please fill in all fields")]
    MissingField,

    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Task lookup failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    #[error("Task '{0}' not found")]
    NotFound(String),
}

/// Failure of a user action routed through the controller
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Task(#[from] TaskError),

    /// The action has no transition from the current screen and was ignored
    #[error("Action '{action}' is not available on the {screen} screen")]
    Unavailable { action: &'static str, screen: Screen },
}

pub type Result<T> = std::result::Result<T, ActionError>;
