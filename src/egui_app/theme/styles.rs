//! Theme Styling Functions
//!
//! Helper functions applying the orange DEK RAI scheme consistently across
//! the auth and dashboard screens.

use super::colors;
use eframe::egui::{self, CornerRadius, Stroke};

/// Apply the global light theme to the egui context
pub fn apply_global_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals.window_fill = colors::PANEL_BG;
    style.visuals.window_stroke = Stroke::new(1.0, colors::BORDER);
    style.visuals.panel_fill = colors::BG_LIGHT;

    style.visuals.widgets.noninteractive.bg_fill = colors::PANEL_BG;
    style.visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, colors::TEXT_PRIMARY);

    style.visuals.widgets.inactive.bg_fill = colors::PANEL_BG;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, colors::TEXT_PRIMARY);

    style.visuals.widgets.hovered.bg_fill = colors::CONTENT_BG;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, colors::TEXT_PRIMARY);

    style.visuals.widgets.active.bg_fill = colors::ACCENT;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, colors::TEXT_ON_ACCENT);

    style.visuals.selection.bg_fill = colors::ACCENT_SOFT;
    style.visuals.selection.stroke = Stroke::new(1.0, colors::TEXT_PRIMARY);

    ctx.set_style(style);
}

/// Frame for the auth form card
pub fn form_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::PANEL_BG)
        .stroke(Stroke::new(1.0, colors::BORDER))
        .corner_radius(CornerRadius::same(15))
        .inner_margin(egui::Margin::same(30))
        .shadow(egui::epaint::Shadow {
            offset: [0, 4],
            blur: 20,
            spread: 0,
            color: egui::Color32::from_black_alpha(25),
        })
}

/// Frame for the dashboard sidebar
pub fn sidebar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::PANEL_BG)
        .inner_margin(egui::Margin::symmetric(20, 30))
}

/// Frame for the orange dashboard header
pub fn header_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::ACCENT)
        .corner_radius(CornerRadius {
            nw: 0,
            ne: 0,
            sw: 15,
            se: 15,
        })
        .inner_margin(egui::Margin::same(20))
}

/// Frame for a white content card
pub fn section_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::PANEL_BG)
        .corner_radius(CornerRadius::same(15))
        .inner_margin(egui::Margin::same(20))
        .shadow(egui::epaint::Shadow {
            offset: [0, 4],
            blur: 20,
            spread: 0,
            color: egui::Color32::from_black_alpha(25),
        })
}

/// Frame for the calendar placeholder outline
pub fn calendar_frame() -> egui::Frame {
    egui::Frame::new()
        .stroke(Stroke::new(2.0, colors::ACCENT))
        .corner_radius(CornerRadius::same(10))
        .inner_margin(egui::Margin::same(20))
}

/// Frame for the top navigation bar
pub fn top_bar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 8))
}
