//! Account Service contract tests
//!
//! Exercises the HTTP client against a wiremock stand-in for the Account
//! Service: request body shape, detail extraction, fallbacks, and transport
//! failures.

use assert_matches::assert_matches;
use dekrai::egui_app::account;
use dekrai::egui_app::config::Config;
use dekrai::egui_app::types::LoginMethod;
use dekrai::shared::config::AppConfig;
use dekrai::shared::error::AccountError;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

/// Matches a JSON object body with exactly the given top-level keys.
struct ExactKeys(&'static [&'static str]);

impl wiremock::Match for ExactKeys {
    fn matches(&self, request: &Request) -> bool {
        let Ok(value) = serde_json::from_slice::<serde_json::Value>(&request.body) else {
            return false;
        };
        let Some(map) = value.as_object() else {
            return false;
        };
        map.len() == self.0.len() && self.0.iter().all(|key| map.contains_key(*key))
    }
}

fn config_for(server: &MockServer) -> Config {
    Config::with_builder(AppConfig::builder().server_url(server.uri())).unwrap()
}

#[tokio::test]
async fn login_with_email_method_sends_email_key_only() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/users/login"))
        .and(body_partial_json(
            json!({"email": "a@b.com", "password_hash": "pw"}),
        ))
        .and(ExactKeys(&["email", "password_hash"]))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user_id": 1,
            "username": "alice",
            "email": "a@b.com",
            "created_at": "2024-09-23T00:00:00"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server);
    let identity = tokio::task::spawn_blocking(move || {
        account::login(
            &config,
            LoginMethod::Email,
            "a@b.com".to_string(),
            "pw".to_string(),
        )
    })
    .await
    .unwrap()
    .unwrap();

    assert_eq!(identity.username, "alice");
    assert_eq!(identity.email, "a@b.com");
}

#[tokio::test]
async fn login_with_username_method_sends_username_key_only() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/users/login"))
        .and(body_partial_json(
            json!({"username": "alice", "password_hash": "pw"}),
        ))
        .and(ExactKeys(&["username", "password_hash"]))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "username": "alice",
            "email": "a@b.com"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server);
    let result = tokio::task::spawn_blocking(move || {
        account::login(
            &config,
            LoginMethod::Username,
            "alice".to_string(),
            "pw".to_string(),
        )
    })
    .await
    .unwrap();

    assert!(result.is_ok());
}

#[tokio::test]
async fn login_rejection_surfaces_detail_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/users/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"detail": "Invalid credentials"})),
        )
        .mount(&server)
        .await;

    let config = config_for(&server);
    let error = tokio::task::spawn_blocking(move || {
        account::login(
            &config,
            LoginMethod::Email,
            "a@b.com".to_string(),
            "wrong".to_string(),
        )
    })
    .await
    .unwrap()
    .unwrap_err();

    assert_eq!(error, AccountError::rejected("Invalid credentials"));
}

#[tokio::test]
async fn login_rejection_without_detail_uses_fallback() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/users/login"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({})))
        .mount(&server)
        .await;

    let config = config_for(&server);
    let error = tokio::task::spawn_blocking(move || {
        account::login(
            &config,
            LoginMethod::Email,
            "a@b.com".to_string(),
            "pw".to_string(),
        )
    })
    .await
    .unwrap()
    .unwrap_err();

    assert_eq!(error, AccountError::rejected("Login failed"));
}

#[tokio::test]
async fn login_malformed_success_body_is_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/users/login"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let config = config_for(&server);
    let error = tokio::task::spawn_blocking(move || {
        account::login(
            &config,
            LoginMethod::Email,
            "a@b.com".to_string(),
            "pw".to_string(),
        )
    })
    .await
    .unwrap()
    .unwrap_err();

    assert_matches!(error, AccountError::Transport { .. });
}

#[tokio::test]
async fn register_sends_full_body_and_succeeds() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/users/create"))
        .and(body_partial_json(json!({
            "username": "alice",
            "email": "a@b.com",
            "password_hash": "pw"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user_id": 1,
            "username": "alice",
            "email": "a@b.com",
            "created_at": "2024-09-23T00:00:00"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server);
    let result = tokio::task::spawn_blocking(move || {
        account::register(
            &config,
            "alice".to_string(),
            "a@b.com".to_string(),
            "pw".to_string(),
        )
    })
    .await
    .unwrap();

    assert!(result.is_ok());
}

#[tokio::test]
async fn register_rejection_surfaces_detail_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/users/create"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"detail": "Username already exists"})),
        )
        .mount(&server)
        .await;

    let config = config_for(&server);
    let error = tokio::task::spawn_blocking(move || {
        account::register(
            &config,
            "alice".to_string(),
            "a@b.com".to_string(),
            "pw".to_string(),
        )
    })
    .await
    .unwrap()
    .unwrap_err();

    assert_eq!(error, AccountError::rejected("Username already exists"));
}

#[tokio::test]
async fn register_rejection_with_empty_body_uses_fallback() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/users/create"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&server)
        .await;

    let config = config_for(&server);
    let error = tokio::task::spawn_blocking(move || {
        account::register(
            &config,
            "alice".to_string(),
            "a@b.com".to_string(),
            "pw".to_string(),
        )
    })
    .await
    .unwrap()
    .unwrap_err();

    assert_eq!(error, AccountError::rejected("Registration failed"));
}
