//! Sign-in handlers: form toggling, login, signup, logout

use crate::TodoServerHandler;
use crate::handlers::respond;
use crate::validation;
use mcp_attr::Result as McpResult;

impl TodoServerHandler {
    /// Switches between the login and signup forms.
    pub async fn handle_toggle_form(&self) -> McpResult<String> {
        let mut app = self.app()?;
        let outcome = app
            .toggle_form()
            .map(|screen| format!("Switched to the {} form", screen));
        respond(&mut app, outcome)
    }

    /// Mock login - any non-empty email and password are accepted.
    pub async fn handle_login(&self, email: String, password: String) -> McpResult<String> {
        self.simulate_latency().await;

        let mut app = self.app()?;
        let outcome = app
            .login(&email, &password)
            .map(|_| format!("Logged in as {}", email));
        respond(&mut app, outcome)
    }

    /// Mock signup - passwords must match, then the login rule applies.
    pub async fn handle_signup(
        &self,
        email: String,
        password: String,
        confirm_password: String,
    ) -> McpResult<String> {
        // A mismatch is rejected straight away, before any simulated latency
        if password == confirm_password {
            self.simulate_latency().await;
        }

        let mut app = self.app()?;
        let outcome = app
            .signup(&email, &password, &confirm_password)
            .map(|_| format!("Account created for {}", email));
        respond(&mut app, outcome)
    }

    /// Password recovery is not implemented; accepted as a no-op.
    pub async fn handle_forgot_password(&self) -> McpResult<String> {
        let mut app = self.app()?;
        let outcome = app
            .forgot_password()
            .map(|_| "Password recovery is not available".to_string());
        respond(&mut app, outcome)
    }

    pub async fn handle_social_login(&self, provider: String) -> McpResult<String> {
        let provider = validation::parse_social_provider(&provider)?;

        let mut app = self.app()?;
        let outcome = app
            .social_login(provider)
            .map(|_| format!("{} login is not available", provider));
        respond(&mut app, outcome)
    }

    /// Signs out, resets the task list and returns to the login form.
    pub async fn handle_logout(&self) -> McpResult<String> {
        let mut app = self.app()?;
        let outcome = app.logout().map(|_| "Logged out".to_string());
        respond(&mut app, outcome)
    }
}
