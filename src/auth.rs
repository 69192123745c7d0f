//! Mocked authentication gate
//!
//! There is no credential store: a login succeeds whenever both fields are
//! filled in. The type exists so the rest of the session can ask one place
//! whether a user is signed in.

use crate::error::AuthError;

#[derive(Debug, Default, Clone)]
pub struct AuthSession {
    logged_in: bool,
}

impl AuthSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    /// Sign in with an email and password
    ///
    /// Fields are not trimmed; whitespace counts as content.
    pub fn login(&mut self, email: &str, password: &str) -> Result<(), AuthError> {
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingField);
        }
        self.logged_in = true;
        Ok(())
    }

    /// Create an account and sign in
    ///
    /// The password confirmation is checked before the empty-field rule.
    pub fn signup(
        &mut self,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<(), AuthError> {
        if password != confirm_password {
            return Err(AuthError::PasswordMismatch);
        }
        self.login(email, password)
    }

    pub fn logout(&mut self) {
        self.logged_in = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_logged_out() {
        assert!(!AuthSession::new().is_logged_in());
    }

    #[test]
    fn test_login_missing_fields() {
        for (email, password) in [("", ""), ("", "x"), ("x", "")] {
            let mut session = AuthSession::new();
            assert_eq!(
                session.login(email, password),
                Err(AuthError::MissingField),
                "email={email:?} password={password:?}"
            );
            assert!(!session.is_logged_in());
        }
    }

    #[test]
    fn test_login_success() {
        let mut session = AuthSession::new();
        assert!(session.login("x", "y").is_ok());
        assert!(session.is_logged_in());
    }

    #[test]
    fn test_login_whitespace_counts_as_content() {
        let mut session = AuthSession::new();
        assert!(session.login(" ", " ").is_ok());
    }

    #[test]
    fn test_signup_password_mismatch() {
        for email in ["", "a@b.com", "anything"] {
            let mut session = AuthSession::new();
            assert_eq!(
                session.signup(email, "a", "b"),
                Err(AuthError::PasswordMismatch)
            );
            assert!(!session.is_logged_in());
        }
    }

    #[test]
    fn test_signup_missing_fields() {
        let mut session = AuthSession::new();
        assert_eq!(session.signup("", "p", "p"), Err(AuthError::MissingField));
        assert_eq!(
            session.signup("a@b.com", "", ""),
            Err(AuthError::MissingField)
        );
        assert!(!session.is_logged_in());
    }

    #[test]
    fn test_signup_success() {
        let mut session = AuthSession::new();
        assert!(session.signup("a@b.com", "p", "p").is_ok());
        assert!(session.is_logged_in());
    }

    #[test]
    fn test_logout_is_unconditional() {
        let mut session = AuthSession::new();
        session.logout();
        assert!(!session.is_logged_in());

        session.login("x", "y").unwrap();
        session.logout();
        assert!(!session.is_logged_in());
    }
}
