//! Account Service Client
//!
//! HTTP client functions for the login and registration endpoints. Each call
//! runs to completion on its own tokio runtime; the app state spawns these on
//! worker threads so the UI never blocks.

use crate::egui_app::config::Config;
use crate::egui_app::types::{ErrorDetail, Identity, LoginMethod, LoginRequest, RegisterRequest};
use crate::shared::error::AccountError;
use reqwest::Client;
use tokio::runtime::Runtime;

/// Login endpoint path
pub const LOGIN_PATH: &str = "/api/users/login";

/// Registration endpoint path
pub const REGISTER_PATH: &str = "/api/users/create";

/// Log in with an email or username.
///
/// The identifier is sent under the JSON key matching `method`; no
/// client-side validation happens here, the service is authoritative.
pub fn login(
    config: &Config,
    method: LoginMethod,
    identifier: String,
    password: String,
) -> Result<Identity, AccountError> {
    let client = Client::new();
    let url = config.api_url(LOGIN_PATH);

    let request = LoginRequest::new(method, identifier, password);

    let rt = Runtime::new()
        .map_err(|e| AccountError::transport(format!("Failed to create runtime: {}", e)))?;

    rt.block_on(async {
        let response = client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            return Err(AccountError::rejected(error_detail(response, "Login failed").await));
        }

        let identity: Identity = response.json().await?;
        Ok(identity)
    })
}

/// Register a new account.
///
/// A 2xx response means the account exists; the body is not otherwise
/// consumed. Registration alone does not authenticate.
pub fn register(
    config: &Config,
    username: String,
    email: String,
    password: String,
) -> Result<(), AccountError> {
    let client = Client::new();
    let url = config.api_url(REGISTER_PATH);

    let request = RegisterRequest {
        username,
        email,
        password_hash: password,
    };

    let rt = Runtime::new()
        .map_err(|e| AccountError::transport(format!("Failed to create runtime: {}", e)))?;

    rt.block_on(async {
        let response = client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            return Err(AccountError::rejected(
                error_detail(response, "Registration failed").await,
            ));
        }

        Ok(())
    })
}

/// Extract the service's `detail` string, else the per-operation fallback.
async fn error_detail(response: reqwest::Response, fallback: &str) -> String {
    response
        .json::<ErrorDetail>()
        .await
        .ok()
        .and_then(|body| body.detail)
        .unwrap_or_else(|| fallback.to_string())
}
