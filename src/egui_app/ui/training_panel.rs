use eframe::egui::{self, Frame, Margin, RichText};

use super::EguiApp;
use super::style;

impl EguiApp {
    pub(super) fn render_training_panel(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        ui.heading("Step 1: Train the model");
        ui.add_space(6.0);
        let trigger = self.controller.ui.training.trigger.clone();
        ui.horizontal(|ui| {
            if trigger.busy {
                ui.spinner();
            }
            let button = egui::Button::new(RichText::new(&trigger.label).strong());
            if ui.add_enabled(trigger.enabled, button).clicked() {
                self.controller.start_training();
            }
        });

        let status = &self.controller.ui.training.status;
        if !status.visible {
            return;
        }
        ui.add_space(8.0);
        let accent = style::status_accent(status.class);
        Frame::new()
            .fill(palette.bg_primary)
            .stroke(egui::Stroke::new(1.0, accent))
            .inner_margin(Margin::symmetric(10, 8))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    if status.loader_visible {
                        ui.spinner();
                    }
                    ui.label(RichText::new(&status.message).color(accent).strong());
                });
                if !status.details.is_empty() {
                    ui.label(RichText::new(&status.details).color(palette.text_muted));
                }
            });
    }
}
