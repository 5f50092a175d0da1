//! Session Handoff
//!
//! Carries an authenticated identity from the auth screen into the dashboard
//! without any persistent store. The dashboard reads its name/email from
//! `DashboardParams`; when the parameters are absent (direct navigation,
//! sign-out reset) it shows literal placeholder strings. Identity therefore
//! does not survive a reset, which is the intended behavior.

use crate::egui_app::types::Identity;

/// Navigation parameters attached to the dashboard route.
///
/// The only mechanism by which identity reaches the dashboard; there is no
/// session token, cookie, or on-disk state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardParams {
    pub username: Option<String>,
    pub email: Option<String>,
}

impl DashboardParams {
    /// Sidebar name shown when no username parameter is present
    pub const FALLBACK_USERNAME: &'static str = "Username";

    /// Sidebar email shown when no email parameter is present
    pub const FALLBACK_EMAIL: &'static str = "useremail@example.com";

    /// Header greeting shown when no username parameter is present
    pub const FALLBACK_GREETING: &'static str = "User";

    /// Username for the sidebar, with placeholder fallback
    pub fn display_username(&self) -> &str {
        self.username.as_deref().unwrap_or(Self::FALLBACK_USERNAME)
    }

    /// Email for the sidebar, with placeholder fallback
    pub fn display_email(&self) -> &str {
        self.email.as_deref().unwrap_or(Self::FALLBACK_EMAIL)
    }

    /// Name for the header greeting, with placeholder fallback
    pub fn greeting_name(&self) -> &str {
        self.username.as_deref().unwrap_or(Self::FALLBACK_GREETING)
    }
}

impl From<Identity> for DashboardParams {
    fn from(identity: Identity) -> Self {
        Self {
            username: Some(identity.username),
            email: Some(identity.email),
        }
    }
}
