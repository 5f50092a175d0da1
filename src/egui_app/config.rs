use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};

/// Default Account Service URL
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

/// Environment variable overriding the Account Service URL
const SERVER_URL_ENV: &str = "DEKRAI_API_URL";

/// Application configuration wrapper.
///
/// No token or session material lives here; the client carries identity only
/// through navigation parameters after login.
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
}

impl Default for Config {
    fn default() -> Self {
        let server_url =
            std::env::var(SERVER_URL_ENV).unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        let app = AppConfig::builder()
            .server_url(server_url)
            .build()
            .unwrap_or_else(|_| AppConfig::default());
        Self { app }
    }
}

impl Config {
    /// Create a new configuration from the environment and defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration from an explicit builder
    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        let app = builder.build()?;
        Ok(Self { app })
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url(), path)
    }

    pub fn server_url(&self) -> &str {
        self.app.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }
}
