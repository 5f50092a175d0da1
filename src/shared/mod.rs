//! Shared Module
//!
//! This module contains types that do not depend on egui or the rendering
//! loop: application configuration and the error taxonomy for the Account
//! Service client. Keeping them UI-free lets tests exercise them directly.

/// Account Service error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use error::AccountError;
