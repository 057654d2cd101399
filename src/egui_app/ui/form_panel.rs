use eframe::egui::{self, Frame, Margin, RichText, StrokeKind};

use super::EguiApp;
use super::style;
use crate::wine::WineFeature;

const FIELD_WIDTH: f32 = 140.0;

impl EguiApp {
    pub(super) fn render_form_panel(&mut self, ui: &mut egui::Ui) {
        let heading = ui.heading("Step 2: Predict quality");
        if self.controller.take_scroll_request() {
            heading.scroll_to_me(Some(egui::Align::TOP));
        }
        ui.add_space(6.0);
        let now = self.controller.now();
        egui::Grid::new("wine_form")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                for feature in WineFeature::ALL {
                    ui.label(feature.label());
                    self.render_field(ui, feature, now);
                    ui.end_row();
                }
            });
        ui.add_space(8.0);
        let submit = self.controller.ui.form.submit.clone();
        ui.horizontal(|ui| {
            if submit.busy {
                ui.spinner();
            }
            if ui
                .add_enabled(submit.enabled, egui::Button::new(&submit.label))
                .clicked()
            {
                self.controller.submit_prediction();
            }
        });
    }

    fn render_field(&mut self, ui: &mut egui::Ui, feature: WineFeature, now: std::time::Instant) {
        let palette = style::palette();
        let field = self.controller.ui.form.field(feature);
        let stroke = style::field_stroke(field.accent, field.emphasized);
        let highlighted = field.highlight_until.is_some_and(|until| until > now);
        let mut value = field.value.clone();
        let mut edit = egui::TextEdit::singleline(&mut value)
            .id_salt(feature.key())
            .desired_width(FIELD_WIDTH)
            .hint_text(feature.key());
        if highlighted {
            edit = edit.background_color(palette.highlight);
        }
        let response = ui.add(edit);
        ui.painter()
            .rect_stroke(response.rect, 0.0, stroke, StrokeKind::Outside);
        if response.changed() {
            self.controller.set_field_value(feature, value);
        }
        if response.gained_focus() {
            self.controller.set_field_focus(feature, true);
        }
        if response.lost_focus() {
            self.controller.set_field_focus(feature, false);
        }
    }

    pub(super) fn render_result_region(&mut self, ui: &mut egui::Ui) {
        let result = &self.controller.ui.result;
        if !result.visible {
            return;
        }
        let palette = style::palette();
        let accent = if result.is_error {
            palette.accent_error
        } else {
            palette.accent_success
        };
        ui.add_space(12.0);
        Frame::new()
            .fill(palette.bg_primary)
            .stroke(egui::Stroke::new(1.0, accent))
            .inner_margin(Margin::symmetric(10, 8))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(&result.text).color(accent));
            });
    }
}
