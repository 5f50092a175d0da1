//! Shared Types Module
//!
//! App view states, the auth form enums, the wire types of the Account
//! Service contract, and the single-slot notification.

use serde::{Deserialize, Serialize};

/// Current app view/mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    /// Combined login/registration screen
    Auth,
    /// Dashboard with sidebar and content tabs
    Dashboard,
}

/// Which variant of the auth form is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

impl AuthMode {
    /// The opposite mode, used by the toggle link under the form
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        }
    }
}

/// Which identifier the login form submits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginMethod {
    Email,
    Username,
}

/// Dashboard content tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardTab {
    Dashboard,
    MyTasks,
    Calendar,
    Settings,
}

impl DashboardTab {
    /// All tabs in sidebar order
    pub const ALL: [DashboardTab; 4] = [
        DashboardTab::Dashboard,
        DashboardTab::MyTasks,
        DashboardTab::Calendar,
        DashboardTab::Settings,
    ];

    /// Sidebar button label
    pub fn label(self) -> &'static str {
        match self {
            DashboardTab::Dashboard => "Dashboard",
            DashboardTab::MyTasks => "My Tasks",
            DashboardTab::Calendar => "Calendar",
            DashboardTab::Settings => "Settings",
        }
    }
}

/// Authenticated user identity as returned by the Account Service.
///
/// Extra response fields (user id, timestamps) are ignored; the client only
/// carries the name/email pair forward and never stores credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub username: String,
    pub email: String,
}

/// Login request body.
///
/// Exactly one of `email`/`username` is present, chosen by the login method.
/// The `password_hash` field name is part of the fixed service contract; the
/// value is the raw password text as observed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub password_hash: String,
}

impl LoginRequest {
    /// Build a login body keyed by the given method
    pub fn new(method: LoginMethod, identifier: String, password: String) -> Self {
        let (email, username) = match method {
            LoginMethod::Email => (Some(identifier), None),
            LoginMethod::Username => (None, Some(identifier)),
        };
        Self {
            email,
            username,
            password_hash: password,
        }
    }
}

/// Registration request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// Error payload of a non-2xx Account Service response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub detail: Option<String>,
}

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// Single-slot user-facing message surfaced after a form action.
///
/// A new notification replaces the previous one; dismissing keeps the slot
/// but hides it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    pub visible: bool,
}

impl Notification {
    /// Create a visible success notification
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
            visible: true,
        }
    }

    /// Create a visible error notification
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
            visible: true,
        }
    }
}
