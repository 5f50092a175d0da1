//! DEK RAI desktop client entry point.

use dekrai::egui_app::theme::styles;
use dekrai::egui_app::{views, AppState};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "DEK RAI - Task Management",
        options,
        Box::new(|cc| {
            styles::apply_global_theme(&cc.egui_ctx);
            Ok(Box::new(DekRaiApp::default()))
        }),
    )
}

/// Main application shell
#[derive(Default)]
struct DekRaiApp {
    state: AppState,
}

impl eframe::App for DekRaiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.check_submit_results();

        views::render_top_bar(ctx, &mut self.state);
        views::render_main_panel(ctx, &mut self.state);

        // In-flight submissions complete on worker threads; keep painting so
        // their results are picked up promptly.
        ctx.request_repaint();
    }
}
