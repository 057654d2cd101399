use eframe::egui::{
    Color32, Stroke, Visuals,
    epaint::{CornerRadius, Shadow},
    style::WidgetVisuals,
};

use crate::egui_app::state::{FieldAccent, Severity, StatusClass};

#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_tertiary: Color32,
    pub panel_outline: Color32,
    pub grid_soft: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent_info: Color32,
    pub accent_success: Color32,
    pub accent_warning: Color32,
    pub accent_error: Color32,
    pub highlight: Color32,
}

pub fn palette() -> Palette {
    Palette {
        bg_primary: Color32::from_rgb(10, 10, 12),
        bg_secondary: Color32::from_rgb(26, 28, 30),
        bg_tertiary: Color32::from_rgb(42, 44, 48),
        panel_outline: Color32::from_rgb(38, 42, 48),
        grid_soft: Color32::from_rgb(30, 32, 36),
        text_primary: Color32::from_rgb(185, 192, 200),
        text_muted: Color32::from_rgb(140, 146, 155),
        accent_info: Color32::from_rgb(0x21, 0x96, 0xF3),
        accent_success: Color32::from_rgb(0x4C, 0xAF, 0x50),
        accent_warning: Color32::from_rgb(0xFF, 0x98, 0x00),
        accent_error: Color32::from_rgb(0xF4, 0x43, 0x36),
        highlight: Color32::from_rgb(0x5A, 0x4A, 0x1E),
    }
}

pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.bg_primary;
    visuals.panel_fill = palette.bg_secondary;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.hyperlink_color = palette.accent_info;
    visuals.extreme_bg_color = palette.bg_primary;
    visuals.faint_bg_color = palette.bg_secondary;
    visuals.error_fg_color = palette.accent_error;
    visuals.warn_fg_color = palette.accent_warning;
    visuals.selection.bg_fill = palette.grid_soft;
    visuals.selection.stroke = Stroke::new(1.0, palette.accent_info);
    visuals.widgets.noninteractive.bg_fill = palette.bg_secondary;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_primary);
    set_rectilinear(&mut visuals.widgets.inactive, palette);
    set_rectilinear(&mut visuals.widgets.hovered, palette);
    set_rectilinear(&mut visuals.widgets.active, palette);
    set_rectilinear(&mut visuals.widgets.open, palette);
    visuals.window_corner_radius = CornerRadius::ZERO;
    visuals.menu_corner_radius = CornerRadius::ZERO;
    visuals.popup_shadow = Shadow::NONE;
    visuals.button_frame = true;
}

fn set_rectilinear(vis: &mut WidgetVisuals, palette: Palette) {
    vis.corner_radius = CornerRadius::ZERO;
    vis.bg_fill = palette.bg_tertiary;
    vis.weak_bg_fill = palette.grid_soft;
    vis.bg_stroke = Stroke::new(1.0, palette.panel_outline);
    vis.fg_stroke = Stroke::new(1.0, palette.text_primary);
}

pub fn section_stroke() -> Stroke {
    Stroke::new(1.0, palette().panel_outline)
}

pub fn severity_accent(severity: Severity) -> Color32 {
    let palette = palette();
    match severity {
        Severity::Info => palette.accent_info,
        Severity::Success => palette.accent_success,
        Severity::Warning => palette.accent_warning,
        Severity::Error => palette.accent_error,
    }
}

pub fn status_accent(class: StatusClass) -> Color32 {
    let palette = palette();
    match class {
        StatusClass::Idle => palette.text_muted,
        StatusClass::Pending => palette.accent_info,
        StatusClass::Success => palette.accent_success,
        StatusClass::Error => palette.accent_error,
    }
}

/// Border drawn around a numeric input.
pub fn field_stroke(accent: FieldAccent, emphasized: bool) -> Stroke {
    let palette = palette();
    let color = match accent {
        FieldAccent::Neutral => palette.panel_outline,
        FieldAccent::Valid => palette.accent_success,
        FieldAccent::Invalid => palette.accent_error,
    };
    let width = if emphasized { 2.0 } else { 1.0 };
    Stroke::new(width, color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severities_have_distinct_accents() {
        let accents = [
            severity_accent(Severity::Info),
            severity_accent(Severity::Success),
            severity_accent(Severity::Warning),
            severity_accent(Severity::Error),
        ];
        for (i, a) in accents.iter().enumerate() {
            for b in &accents[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn focus_thickens_the_field_border() {
        let plain = field_stroke(FieldAccent::Valid, false);
        let focused = field_stroke(FieldAccent::Valid, true);
        assert_eq!(plain.color, focused.color);
        assert!(focused.width > plain.width);
        assert_eq!(
            field_stroke(FieldAccent::Invalid, false).color,
            palette().accent_error
        );
    }
}
