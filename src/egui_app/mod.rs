//! egui Native Desktop App Module
//!
//! This module provides the native desktop client using egui/eframe that
//! talks to the remote Account Service for authentication.
//!
//! # Architecture
//!
//! The egui_app module is organized into focused submodules:
//!
//! - **`config`** - Configuration management (Account Service URL)
//! - **`account`** - Account Service HTTP client (login/register)
//! - **`types`** - Shared types, wire contract, and app state enums
//! - **`session`** - Identity handoff into the dashboard
//! - **`state`** - Central app state and form submission handling
//! - **`views`** - Auth and dashboard screens
//! - **`theme`** - DEK RAI color palette and frame styles
//! - **`debug`** - In-app diagnostic logger
//! - **`main`** - Application entry point (binary)

pub mod account;
pub mod config;
pub mod debug;
pub mod session;
pub mod state;
pub mod theme;
pub mod types;
pub mod views;

// Re-export commonly used types
pub use config::Config;
pub use debug::{DebugCategory, DebugLevel, DebugLogger};
pub use session::DashboardParams;
pub use state::AppState;
pub use types::{AppView, AuthMode, Identity, LoginMethod};
