use eframe::egui::{self, Frame, Margin, RichText};

use super::EguiApp;
use super::style;
use crate::egui_app::controller::hotkeys;

impl EguiApp {
    pub(super) fn render_hint_bar(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::bottom("hint_bar")
            .frame(
                Frame::new()
                    .fill(palette.bg_primary)
                    .stroke(style::section_stroke())
                    .inner_margin(Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                ui.label(RichText::new(hotkeys::describe_actions()).color(palette.text_muted));
            });
    }
}
