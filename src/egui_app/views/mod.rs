use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::AppView;

pub mod auth_view;
pub mod dashboard_view;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("top_panel")
        .frame(styles::top_bar_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(
                    colors::ACCENT,
                    egui::RichText::new("DEK").size(18.0).strong(),
                );
                ui.colored_label(
                    colors::ACCENT_SOFT,
                    egui::RichText::new("RAI").size(18.0).strong(),
                );
                ui.colored_label(colors::TOP_BAR_TEXT, "Task Management");

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(16.0);

                    if state.current_view == AppView::Dashboard {
                        if ui.button("Sign out").clicked() {
                            state.sign_out();
                        }
                        ui.colored_label(
                            colors::TOP_BAR_TEXT,
                            format!("@{}", state.dashboard_params.display_username()),
                        );
                    }
                });
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    let frame = egui::Frame::default()
        .fill(colors::BG_LIGHT)
        .inner_margin(egui::Margin::same(0));

    egui::CentralPanel::default()
        .frame(frame)
        .show(ctx, |ui| match state.current_view {
            AppView::Auth => auth_view::render(ui, state),
            AppView::Dashboard => dashboard_view::render(ui, state),
        });
}
