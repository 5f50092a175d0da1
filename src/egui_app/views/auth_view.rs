use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::types::{AuthMode, LoginMethod, Severity};

const INPUT_WIDTH: f32 = 280.0;
const LABEL_WIDTH: f32 = 90.0;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let available_rect = ui.available_rect_before_wrap();
    ui.painter()
        .rect_filled(available_rect, 0.0, colors::BG_LIGHT);

    ui.scope_builder(egui::UiBuilder::new().max_rect(available_rect), |ui| {
        ui.vertical_centered(|ui| {
            let total_height = match state.auth_mode {
                AuthMode::Login => 340.0,
                AuthMode::Register => 420.0,
            };
            let top_space = (available_rect.height() - total_height).max(0.0) / 2.0;
            ui.add_space(top_space);

            ui.allocate_ui(egui::vec2(INPUT_WIDTH + LABEL_WIDTH + 80.0, total_height), |ui| {
                styles::form_frame().show(ui, |ui| {
                    ui.vertical_centered(|ui| match state.auth_mode {
                        AuthMode::Login => render_login_form(ui, state),
                        AuthMode::Register => render_register_form(ui, state),
                    });

                    ui.add_space(12.0);
                    render_mode_toggle(ui, state);
                    render_notification(ui, state);
                });
            });
        });
    });
}

fn render_login_form(ui: &mut egui::Ui, state: &mut AppState) {
    ui.label(
        egui::RichText::new("HELLO! PLEASE LOGIN")
            .size(24.0)
            .strong()
            .color(colors::TITLE),
    );
    ui.label(egui::RichText::new("Fill in your details").color(colors::SUBTITLE));
    ui.add_space(16.0);

    // Email/username toggle; the identifier text survives switching.
    ui.horizontal(|ui| {
        let email_active = state.login_method == LoginMethod::Email;
        if ui
            .selectable_label(email_active, "Login with Email")
            .clicked()
        {
            state.set_login_method(LoginMethod::Email);
        }
        if ui
            .selectable_label(!email_active, "Login with Username")
            .clicked()
        {
            state.set_login_method(LoginMethod::Username);
        }
    });
    ui.add_space(12.0);

    let identifier_label = match state.login_method {
        LoginMethod::Email => "Email:",
        LoginMethod::Username => "Username:",
    };

    text_field(ui, identifier_label, &mut state.login_identifier, false);
    ui.add_space(8.0);
    text_field(ui, "Password:", &mut state.login_password, true);
    ui.add_space(20.0);

    let login_btn = egui::Button::new(
        egui::RichText::new("LOGIN").color(colors::TEXT_ON_ACCENT),
    )
    .fill(colors::ACTION);
    if ui.add_sized([INPUT_WIDTH, 32.0], login_btn).clicked() {
        state.submit_login();
    }
}

fn render_register_form(ui: &mut egui::Ui, state: &mut AppState) {
    ui.label(
        egui::RichText::new("REGISTER")
            .size(24.0)
            .strong()
            .color(colors::TITLE),
    );
    ui.label(egui::RichText::new("Create a new account").color(colors::SUBTITLE));
    ui.add_space(16.0);

    text_field(ui, "Name:", &mut state.register_name, false);
    ui.add_space(8.0);
    text_field(ui, "Email:", &mut state.register_email, false);
    ui.add_space(8.0);
    text_field(ui, "Password:", &mut state.register_password, true);
    ui.add_space(8.0);
    text_field(ui, "Confirm:", &mut state.register_confirm_password, true);
    ui.add_space(20.0);

    let register_btn = egui::Button::new(
        egui::RichText::new("REGISTER").color(colors::TEXT_ON_ACCENT),
    )
    .fill(colors::ACTION);
    if ui.add_sized([INPUT_WIDTH, 32.0], register_btn).clicked() {
        state.submit_register();
    }
}

fn render_mode_toggle(ui: &mut egui::Ui, state: &mut AppState) {
    let toggle_text = match state.auth_mode {
        AuthMode::Login => "Don't have an account? Register here!",
        AuthMode::Register => "Already have an account? Login here!",
    };

    ui.vertical_centered(|ui| {
        if ui
            .link(egui::RichText::new(toggle_text).color(colors::TITLE))
            .clicked()
        {
            state.toggle_mode();
        }
    });
}

fn render_notification(ui: &mut egui::Ui, state: &mut AppState) {
    let Some(notification) = state.notification.clone() else {
        return;
    };
    if !notification.visible {
        return;
    }

    let color = match notification.severity {
        Severity::Success => colors::SUCCESS,
        Severity::Error => colors::ERROR,
    };

    ui.add_space(10.0);
    ui.horizontal(|ui| {
        ui.colored_label(color, &notification.message);
        if ui.small_button("✖").clicked() {
            state.dismiss_notification();
        }
    });
}

fn text_field(ui: &mut egui::Ui, label: &str, value: &mut String, password: bool) {
    ui.horizontal(|ui| {
        ui.add_sized(
            [LABEL_WIDTH, 24.0],
            egui::Label::new(egui::RichText::new(label).color(colors::TEXT_SECONDARY)),
        );
        ui.add_sized(
            [INPUT_WIDTH, 28.0],
            egui::TextEdit::singleline(value)
                .password(password)
                .text_color(colors::TEXT_PRIMARY),
        );
    });
}
