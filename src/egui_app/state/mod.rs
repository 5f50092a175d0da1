use std::sync::mpsc::{channel, Receiver, TryRecvError};

use crate::egui_app::session::DashboardParams;
use crate::egui_app::types::{
    AppView, AuthMode, DashboardTab, Identity, LoginMethod, Notification,
};
use crate::egui_app::{account, Config, DebugCategory, DebugLogger};
use crate::shared::error::AccountError;

/// Outcome of a completed submission worker
#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    LoggedIn(Identity),
    Registered,
}

/// Channel end of one in-flight submission
struct PendingSubmit {
    rx: Receiver<Result<SubmitOutcome, AccountError>>,
}

/// Central application state shared across egui views.
///
/// Owns the auth form fields, the mode toggles, the single notification
/// slot, and the pending submission channels. Field values are never cleared
/// implicitly: failed submissions and mode toggles leave every input intact.
pub struct AppState {
    pub config: Config,
    pub current_view: AppView,

    // Auth form
    pub auth_mode: AuthMode,
    pub login_method: LoginMethod,
    pub login_identifier: String,
    pub login_password: String,
    pub register_name: String,
    pub register_email: String,
    pub register_password: String,
    pub register_confirm_password: String,
    pub notification: Option<Notification>,

    // Dashboard
    pub dashboard_params: DashboardParams,
    pub active_tab: DashboardTab,

    pending: Vec<PendingSubmit>,
    pub debug_logger: DebugLogger,
}

impl AppState {
    pub fn new() -> Self {
        let debug_logger = DebugLogger::new(1000);
        debug_logger.info(DebugCategory::Other, "AppState initialized");

        Self {
            config: Config::new(),
            current_view: AppView::Auth,
            auth_mode: AuthMode::Login,
            login_method: LoginMethod::Email,
            login_identifier: String::new(),
            login_password: String::new(),
            register_name: String::new(),
            register_email: String::new(),
            register_password: String::new(),
            register_confirm_password: String::new(),
            notification: None,
            dashboard_params: DashboardParams::default(),
            active_tab: DashboardTab::Dashboard,
            pending: Vec::new(),
            debug_logger,
        }
    }

    /// Switch the active form variant. The inactive mode's field values are
    /// preserved so toggling back restores prior input.
    pub fn set_mode(&mut self, mode: AuthMode) {
        self.auth_mode = mode;
        self.notification = None;
    }

    pub fn toggle_mode(&mut self) {
        self.set_mode(self.auth_mode.toggled());
    }

    /// Switch which key carries the login identifier. The identifier text
    /// itself is preserved.
    pub fn set_login_method(&mut self, method: LoginMethod) {
        self.login_method = method;
    }

    pub fn notify_success(&mut self, message: impl Into<String>) {
        self.notification = Some(Notification::success(message));
    }

    pub fn notify_error(&mut self, message: impl Into<String>) {
        self.notification = Some(Notification::error(message));
    }

    /// Hide the active notification. Idempotent.
    pub fn dismiss_notification(&mut self) {
        if let Some(notification) = &mut self.notification {
            notification.visible = false;
        }
    }

    /// Number of submissions still waiting on the Account Service
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Submit the login form.
    ///
    /// Empty fields are sent as-is; the Account Service is authoritative for
    /// validation. Repeated submissions produce overlapping independent
    /// requests, there is no debouncing.
    pub fn submit_login(&mut self) {
        let method = self.login_method;
        let identifier = self.login_identifier.clone();
        let password = self.login_password.clone();
        let config = self.config.clone();

        self.debug_logger
            .info(DebugCategory::Auth, "Login submitted");

        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result =
                account::login(&config, method, identifier, password).map(SubmitOutcome::LoggedIn);
            let _ = tx.send(result);
        });

        self.pending.push(PendingSubmit { rx });
    }

    /// Submit the registration form.
    ///
    /// The only client-side precondition: password and confirmation must
    /// match, otherwise an error notification is raised and no request is
    /// issued.
    pub fn submit_register(&mut self) {
        if self.register_password != self.register_confirm_password {
            self.debug_logger
                .warn(DebugCategory::Auth, "Registration blocked: password mismatch");
            self.notify_error("Passwords do not match");
            return;
        }

        let username = self.register_name.clone();
        let email = self.register_email.clone();
        let password = self.register_password.clone();
        let config = self.config.clone();

        self.debug_logger
            .info(DebugCategory::Auth, "Registration submitted");

        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = account::register(&config, username, email, password)
                .map(|_| SubmitOutcome::Registered);
            let _ = tx.send(result);
        });

        self.pending.push(PendingSubmit { rx });
    }

    /// Drain completed submissions, called once per frame.
    ///
    /// Results completed by the same frame are applied in submission order;
    /// the last applied result wins the notification slot. A successful
    /// login discards every other in-flight submission: once navigation
    /// fires the form is gone and late responses have nowhere to write.
    pub fn check_submit_results(&mut self) {
        let mut ready = Vec::new();
        self.pending.retain(|pending| match pending.rx.try_recv() {
            Ok(result) => {
                ready.push(result);
                false
            }
            Err(TryRecvError::Empty) => true,
            Err(TryRecvError::Disconnected) => false,
        });

        for result in ready {
            match result {
                Ok(SubmitOutcome::LoggedIn(identity)) => {
                    self.debug_logger.info(
                        DebugCategory::Auth,
                        format!("Login successful: {}", identity.email),
                    );
                    // Notification is set before the navigation side effect.
                    self.notify_success("Login successful!");
                    self.handoff(identity);
                    break;
                }
                Ok(SubmitOutcome::Registered) => {
                    self.debug_logger
                        .info(DebugCategory::Auth, "Registration successful");
                    self.notify_success("Registration successful!");
                }
                Err(e) => {
                    self.debug_logger
                        .error(DebugCategory::Auth, format!("Submission failed: {}", e));
                    self.notify_error(e.to_string());
                }
            }
        }
    }

    /// Carry the authenticated identity into the dashboard via navigation
    /// parameters. The only channel by which identity reaches the next
    /// screen; nothing is persisted.
    fn handoff(&mut self, identity: Identity) {
        self.debug_logger.info(
            DebugCategory::Nav,
            format!("Navigating to dashboard as {}", identity.username),
        );
        self.dashboard_params = DashboardParams::from(identity);
        self.active_tab = DashboardTab::Dashboard;
        self.current_view = AppView::Dashboard;
        self.pending.clear();
    }

    /// Return to the auth screen, dropping the carried identity.
    pub fn sign_out(&mut self) {
        self.debug_logger
            .info(DebugCategory::Nav, "Signed out, returning to auth screen");
        self.dashboard_params = DashboardParams::default();
        self.current_view = AppView::Auth;
        self.notification = None;
        self.login_password.clear();
        self.register_password.clear();
        self.register_confirm_password.clear();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::egui_app::types::Severity;

    fn state() -> AppState {
        AppState::new()
    }

    #[test]
    fn test_mode_toggle_preserves_login_fields() {
        let mut state = state();
        state.login_identifier = "a@b.com".to_string();
        state.login_password = "pw".to_string();

        state.set_mode(AuthMode::Register);
        state.set_mode(AuthMode::Login);

        assert_eq!(state.login_identifier, "a@b.com");
        assert_eq!(state.login_password, "pw");
    }

    #[test]
    fn test_mode_toggle_preserves_register_fields() {
        let mut state = state();
        state.register_name = "alice".to_string();
        state.register_email = "a@b.com".to_string();

        state.set_mode(AuthMode::Login);
        state.set_mode(AuthMode::Register);

        assert_eq!(state.register_name, "alice");
        assert_eq!(state.register_email, "a@b.com");
    }

    #[test]
    fn test_set_mode_clears_notification() {
        let mut state = state();
        state.notify_error("Login failed");
        state.set_mode(AuthMode::Register);
        assert!(state.notification.is_none());
    }

    #[test]
    fn test_set_login_method_preserves_identifier() {
        let mut state = state();
        state.login_identifier = "alice".to_string();
        state.set_login_method(LoginMethod::Username);
        assert_eq!(state.login_identifier, "alice");
        state.set_login_method(LoginMethod::Email);
        assert_eq!(state.login_identifier, "alice");
    }

    #[test]
    fn test_dismiss_notification_is_idempotent() {
        let mut state = state();
        state.notify_success("Login successful!");

        state.dismiss_notification();
        assert!(!state.notification.as_ref().unwrap().visible);

        state.dismiss_notification();
        assert!(!state.notification.as_ref().unwrap().visible);
    }

    #[test]
    fn test_dismiss_without_notification_is_noop() {
        let mut state = state();
        state.dismiss_notification();
        assert!(state.notification.is_none());
    }

    #[test]
    fn test_register_password_mismatch_blocks_submission() {
        let mut state = state();
        state.register_name = "alice".to_string();
        state.register_email = "a@b.com".to_string();
        state.register_password = "x".to_string();
        state.register_confirm_password = "y".to_string();

        state.submit_register();

        let notification = state.notification.as_ref().unwrap();
        assert_eq!(notification.message, "Passwords do not match");
        assert_eq!(notification.severity, Severity::Error);
        assert_eq!(state.pending_count(), 0, "no network call may be issued");

        // Field values survive the failed submission untouched.
        assert_eq!(state.register_name, "alice");
        assert_eq!(state.register_email, "a@b.com");
        assert_eq!(state.register_password, "x");
        assert_eq!(state.register_confirm_password, "y");
        assert_eq!(state.auth_mode, AuthMode::Login);
    }

    #[test]
    fn test_new_notification_replaces_previous() {
        let mut state = state();
        state.notify_error("Login failed");
        state.notify_success("Login successful!");

        let notification = state.notification.as_ref().unwrap();
        assert_eq!(notification.message, "Login successful!");
        assert_eq!(notification.severity, Severity::Success);
        assert!(notification.visible);
    }

    #[test]
    fn test_sign_out_resets_identity_and_view() {
        let mut state = state();
        state.dashboard_params = DashboardParams {
            username: Some("alice".to_string()),
            email: Some("a@b.com".to_string()),
        };
        state.current_view = AppView::Dashboard;

        state.sign_out();

        assert_eq!(state.current_view, AppView::Auth);
        assert_eq!(state.dashboard_params, DashboardParams::default());
        assert_eq!(state.dashboard_params.display_username(), "Username");
    }
}
