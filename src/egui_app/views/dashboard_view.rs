use chrono::Local;
use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::types::DashboardTab;

/// Sidebar width in pixels
const SIDEBAR_WIDTH: f32 = 240.0;

/// Render the dashboard: sidebar on the left, tab content on the right.
///
/// Name and email come from the navigation parameters set by the session
/// handoff; without them the literal placeholders render instead.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let available_size = ui.available_size();

    ui.horizontal(|ui| {
        ui.allocate_ui_with_layout(
            egui::vec2(SIDEBAR_WIDTH, available_size.y),
            egui::Layout::top_down(egui::Align::LEFT),
            |ui| {
                styles::sidebar_frame().show(ui, |ui| {
                    render_sidebar(ui, state);
                });
            },
        );

        ui.add(egui::Separator::default().vertical());

        ui.allocate_ui_with_layout(
            egui::vec2(available_size.x - SIDEBAR_WIDTH - 1.0, available_size.y),
            egui::Layout::top_down(egui::Align::LEFT),
            |ui| {
                render_content(ui, state);
            },
        );
    });
}

fn render_sidebar(ui: &mut egui::Ui, state: &mut AppState) {
    ui.set_min_width(SIDEBAR_WIDTH - 40.0);
    ui.set_min_height(ui.available_height());

    ui.vertical_centered(|ui| {
        ui.horizontal(|ui| {
            ui.add_space(40.0);
            ui.colored_label(colors::ACCENT, egui::RichText::new("DEK").size(28.0).strong());
            ui.colored_label(
                colors::ACCENT_SOFT,
                egui::RichText::new("RAI").size(28.0).strong(),
            );
        });
        ui.add_space(20.0);

        ui.colored_label(
            colors::TEXT_PRIMARY,
            egui::RichText::new(state.dashboard_params.display_username())
                .size(16.0)
                .strong(),
        );
        ui.colored_label(
            colors::TEXT_SECONDARY,
            state.dashboard_params.display_email().to_string(),
        );
        ui.add_space(30.0);
    });

    for tab in DashboardTab::ALL {
        let active = state.active_tab == tab;
        let color = if active {
            colors::ACCENT
        } else {
            colors::TEXT_PRIMARY
        };
        let label = egui::SelectableLabel::new(
            active,
            egui::RichText::new(tab.label()).color(color),
        );
        if ui
            .add_sized([ui.available_width(), 28.0], label)
            .clicked()
        {
            state.active_tab = tab;
        }
    }
}

fn render_content(ui: &mut egui::Ui, state: &mut AppState) {
    let content_rect = ui.available_rect_before_wrap();
    ui.painter().rect_filled(content_rect, 0.0, colors::CONTENT_BG);

    ui.scope_builder(egui::UiBuilder::new().max_rect(content_rect.shrink(20.0)), |ui| {
        styles::header_frame().show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.colored_label(
                colors::TEXT_ON_ACCENT,
                egui::RichText::new(format!(
                    "Hello, {}",
                    state.dashboard_params.greeting_name()
                ))
                .size(22.0),
            );
            ui.colored_label(
                colors::TEXT_ON_ACCENT,
                format!("Today is {}", Local::now().format("%A, %-d %B %Y")),
            );
        });
        ui.add_space(20.0);

        match state.active_tab {
            DashboardTab::Dashboard => render_dashboard_tab(ui, state),
            DashboardTab::MyTasks => render_tasks_tab(ui),
            DashboardTab::Calendar => render_calendar_tab(ui),
            DashboardTab::Settings => render_settings_tab(ui),
        }
    });
}

fn render_dashboard_tab(ui: &mut egui::Ui, state: &AppState) {
    styles::section_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.colored_label(
            colors::TEXT_PRIMARY,
            egui::RichText::new(format!(
                "Welcome to your dashboard, {}!",
                state.dashboard_params.greeting_name()
            ))
            .size(16.0)
            .strong(),
        );
        ui.add_space(8.0);
        ui.colored_label(
            colors::TEXT_PRIMARY,
            "Here you can find an overview of your activities and performance.",
        );
    });
}

fn render_tasks_tab(ui: &mut egui::Ui) {
    styles::section_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.colored_label(
            colors::TEXT_PRIMARY,
            egui::RichText::new("My Tasks").size(16.0).strong(),
        );
        ui.add_space(8.0);
        ui.colored_label(
            colors::TEXT_PRIMARY,
            "List of your current tasks and their status.",
        );
    });
}

fn render_calendar_tab(ui: &mut egui::Ui) {
    styles::calendar_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.set_min_height(300.0);
        ui.centered_and_justified(|ui| {
            ui.colored_label(
                colors::ACCENT,
                egui::RichText::new("Calendar View (Coming Soon)").size(16.0),
            );
        });
    });
}

fn render_settings_tab(ui: &mut egui::Ui) {
    styles::section_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.colored_label(
            colors::TEXT_PRIMARY,
            egui::RichText::new("Settings").size(16.0).strong(),
        );
        ui.add_space(8.0);
        ui.colored_label(
            colors::TEXT_PRIMARY,
            "Adjust your account settings and preferences here.",
        );
    });
}
