use std::time::{Duration, Instant};

use eframe::egui::{self, Align2, Frame, Margin, Order, RichText};

use super::EguiApp;
use super::style;
use crate::egui_app::controller::NotificationTiming;
use crate::egui_app::state::{NotificationPhase, NotificationView};

const TOAST_WIDTH: f32 = 320.0;
const TOAST_MARGIN: f32 = 16.0;

impl EguiApp {
    pub(super) fn render_toast(&mut self, ctx: &egui::Context) {
        let Some(view) = self.controller.notification() else {
            return;
        };
        let now = self.controller.now();
        let visibility = visibility(&view, self.controller.notification_timing(), now);
        if visibility < 1.0 {
            ctx.request_repaint();
        }
        let palette = style::palette();
        let accent = style::severity_accent(view.notification.severity);
        let slide = (1.0 - visibility) * (TOAST_WIDTH + TOAST_MARGIN);
        egui::Area::new(egui::Id::new("notification_toast"))
            .order(Order::Foreground)
            .anchor(
                Align2::RIGHT_TOP,
                egui::vec2(-TOAST_MARGIN + slide, TOAST_MARGIN),
            )
            .interactable(false)
            .show(ctx, |ui| {
                ui.set_opacity(visibility);
                Frame::new()
                    .fill(palette.bg_tertiary)
                    .stroke(egui::Stroke::new(2.0, accent))
                    .inner_margin(Margin::symmetric(12, 10))
                    .show(ui, |ui| {
                        ui.set_max_width(TOAST_WIDTH);
                        ui.label(RichText::new(&view.notification.text).color(palette.text_primary));
                    });
            });
    }
}

/// 0.0 is fully off-screen, 1.0 fully shown.
fn visibility(view: &NotificationView, timing: NotificationTiming, now: Instant) -> f32 {
    match view.phase {
        NotificationPhase::Shown => {
            progress(now.saturating_duration_since(view.notification.created_at), timing.entrance)
        }
        NotificationPhase::Exiting { since } => {
            1.0 - progress(now.saturating_duration_since(since), timing.exit)
        }
    }
}

fn progress(elapsed: Duration, total: Duration) -> f32 {
    if total.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::egui_app::state::{Notification, NotificationId, Severity};

    fn view(phase: NotificationPhase, created_at: Instant) -> NotificationView {
        NotificationView {
            notification: Notification {
                id: NotificationId(1),
                text: "hello".into(),
                severity: Severity::Info,
                created_at,
            },
            phase,
        }
    }

    #[test]
    fn slides_in_then_out() {
        let start = Instant::now();
        let timing = NotificationTiming::default();
        let shown = view(NotificationPhase::Shown, start);
        assert_eq!(visibility(&shown, timing, start), 0.0);
        assert_eq!(visibility(&shown, timing, start + timing.entrance), 1.0);

        let since = start + timing.dwell;
        let exiting = view(NotificationPhase::Exiting { since }, start);
        assert_eq!(visibility(&exiting, timing, since), 1.0);
        assert_eq!(visibility(&exiting, timing, since + timing.exit), 0.0);
    }

    #[test]
    fn zero_length_transition_is_instant() {
        assert_eq!(progress(Duration::ZERO, Duration::ZERO), 1.0);
    }
}
