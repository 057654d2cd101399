//! egui renderer for the application UI.

mod form_panel;
mod hints;
mod hotkey_runtime;
pub mod style;
mod toast;
mod training_panel;

use std::time::Duration;

use eframe::egui::{self, Vec2};

use crate::config::AppConfig;
use crate::egui_app::controller::EguiController;

/// Minimum window size that keeps both steps readable.
pub const MIN_VIEWPORT_SIZE: Vec2 = Vec2::new(560.0, 480.0);

/// How often to look for worker results while a request is outstanding.
const JOB_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: EguiController,
    visuals_set: bool,
}

impl EguiApp {
    /// Create the app against the configured server.
    pub fn new(config: &AppConfig) -> Result<Self, String> {
        let controller = EguiController::from_config(config)
            .map_err(|err| format!("Failed to configure server endpoints: {err}"))?;
        Ok(Self::with_controller(controller))
    }

    pub fn with_controller(mut controller: EguiController) -> Self {
        controller.schedule_startup_tip();
        Self {
            controller,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn schedule_repaint(&self, ctx: &egui::Context) {
        let mut wait = self.controller.has_outstanding_requests().then_some(JOB_POLL_INTERVAL);
        if let Some(deadline) = self.controller.next_deadline() {
            let until = deadline.saturating_duration_since(self.controller.now());
            wait = Some(wait.map_or(until, |current| current.min(until)));
        }
        if let Some(wait) = wait {
            ctx.request_repaint_after(wait);
        }
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.controller.poll();
        self.process_hotkeys(ctx);
        self.render_hint_bar(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    self.render_training_panel(ui);
                    ui.add_space(18.0);
                    self.render_form_panel(ui);
                    self.render_result_region(ui);
                });
        });
        self.render_toast(ctx);
        self.schedule_repaint(ctx);
    }
}
