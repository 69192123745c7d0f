//! Login / signup / logout tests
mod common;

use common::{get_test_handler, is_logged_in, screen};
use todo_mcp::Screen;

#[tokio::test]
async fn test_login_missing_fields() {
    for (email, password) in [("", ""), ("", "x"), ("x", "")] {
        let handler = get_test_handler();
        let result = handler
            .handle_login(email.to_string(), password.to_string())
            .await;
        assert!(result.is_err(), "email={email:?} password={password:?}");
        assert_eq!(screen(&handler), Screen::Login);
        assert!(!is_logged_in(&handler));
    }
}

#[tokio::test]
async fn test_login_success() {
    let handler = get_test_handler();
    let result = handler
        .handle_login("x".to_string(), "y".to_string())
        .await
        .unwrap();
    assert!(result.contains("Logged in as x"));
    assert!(result.contains("Welcome back!: You've successfully logged in."));
    assert_eq!(screen(&handler), Screen::Tasks);
    assert!(is_logged_in(&handler));
}

#[tokio::test]
async fn test_signup_password_mismatch() {
    for email in ["", "a@b.com"] {
        let handler = get_test_handler();
        handler.handle_toggle_form().await.unwrap();

        let result = handler
            .handle_signup(email.to_string(), "a".to_string(), "b".to_string())
            .await;
        assert!(result.is_err());
        assert_eq!(screen(&handler), Screen::Signup);
        assert!(!is_logged_in(&handler));
    }
}

#[tokio::test]
async fn test_signup_requires_signup_form() {
    let handler = get_test_handler();
    let result = handler
        .handle_signup("a@b.com".to_string(), "p".to_string(), "p".to_string())
        .await;
    assert!(result.is_err());
    assert_eq!(screen(&handler), Screen::Login);
    assert!(!is_logged_in(&handler));
}

#[tokio::test]
async fn test_signup_settings_logout_cycle() {
    let handler = get_test_handler();
    assert_eq!(screen(&handler), Screen::Login);

    handler.handle_toggle_form().await.unwrap();
    assert_eq!(screen(&handler), Screen::Signup);

    let result = handler
        .handle_signup("a@b.com".to_string(), "p".to_string(), "p".to_string())
        .await
        .unwrap();
    assert!(result.contains("Account Created!"));
    assert_eq!(screen(&handler), Screen::Tasks);
    assert!(is_logged_in(&handler));

    handler.handle_open_settings().await.unwrap();
    assert_eq!(screen(&handler), Screen::Settings);

    let result = handler.handle_logout().await.unwrap();
    assert!(result.contains("Logged Out"));
    assert_eq!(screen(&handler), Screen::Login);
    assert!(!is_logged_in(&handler));
}

#[tokio::test]
async fn test_toggle_form_back_and_forth() {
    let handler = get_test_handler();
    let result = handler.handle_toggle_form().await.unwrap();
    assert_eq!(result, "Switched to the signup form");
    let result = handler.handle_toggle_form().await.unwrap();
    assert_eq!(result, "Switched to the login form");
}

#[tokio::test]
async fn test_forgot_password_is_noop() {
    let handler = get_test_handler();
    let result = handler.handle_forgot_password().await.unwrap();
    assert_eq!(result, "Password recovery is not available");
    assert_eq!(screen(&handler), Screen::Login);
}

#[tokio::test]
async fn test_social_login() {
    let handler = get_test_handler();
    let result = handler
        .handle_social_login("facebook".to_string())
        .await
        .unwrap();
    assert!(result.contains("Facebook Login: Social login would be implemented here."));
    assert!(!is_logged_in(&handler));

    assert!(
        handler
            .handle_social_login("unknown".to_string())
            .await
            .is_err()
    );
}
