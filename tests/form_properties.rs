//! Property-based tests for the auth form

use dekrai::egui_app::types::{AuthMode, LoginMethod, LoginRequest, Severity};
use dekrai::egui_app::AppState;
use proptest::prelude::*;

proptest! {
    /// Mismatched password pairs never reach the network, whatever the text.
    #[test]
    fn mismatched_passwords_never_issue_a_request(
        password in "\\PC{1,32}",
        confirm in "\\PC{1,32}",
    ) {
        prop_assume!(password != confirm);

        let mut state = AppState::new();
        state.set_mode(AuthMode::Register);
        state.register_password = password.clone();
        state.register_confirm_password = confirm.clone();

        state.submit_register();

        prop_assert_eq!(state.pending_count(), 0);
        let notification = state.notification.as_ref().unwrap();
        prop_assert_eq!(notification.message.as_str(), "Passwords do not match");
        prop_assert_eq!(notification.severity, Severity::Error);
        prop_assert_eq!(state.register_password.as_str(), password.as_str());
        prop_assert_eq!(state.register_confirm_password.as_str(), confirm.as_str());
    }

    /// Toggling between modes preserves every field value in both directions.
    #[test]
    fn mode_toggling_preserves_field_values(
        identifier in "\\PC{0,32}",
        login_password in "\\PC{0,32}",
        name in "\\PC{0,32}",
        email in "\\PC{0,32}",
    ) {
        let mut state = AppState::new();
        state.login_identifier = identifier.clone();
        state.login_password = login_password.clone();
        state.register_name = name.clone();
        state.register_email = email.clone();

        state.toggle_mode();
        state.toggle_mode();

        prop_assert_eq!(state.auth_mode, AuthMode::Login);
        prop_assert_eq!(state.login_identifier, identifier);
        prop_assert_eq!(state.login_password, login_password);
        prop_assert_eq!(state.register_name, name);
        prop_assert_eq!(state.register_email, email);
    }

    /// The login body carries exactly one identifier key, chosen by method.
    #[test]
    fn login_body_has_exactly_one_identifier_key(
        identifier in "\\PC{0,32}",
        password in "\\PC{0,32}",
        use_email in any::<bool>(),
    ) {
        let method = if use_email { LoginMethod::Email } else { LoginMethod::Username };
        let request = LoginRequest::new(method, identifier.clone(), password.clone());
        let value = serde_json::to_value(&request).unwrap();
        let map = value.as_object().unwrap();

        prop_assert_eq!(map.len(), 2);
        prop_assert!(map.contains_key("password_hash"));
        if use_email {
            prop_assert_eq!(map["email"].as_str().unwrap(), identifier.as_str());
            prop_assert!(!map.contains_key("username"));
        } else {
            prop_assert_eq!(map["username"].as_str().unwrap(), identifier.as_str());
            prop_assert!(!map.contains_key("email"));
        }
    }
}
