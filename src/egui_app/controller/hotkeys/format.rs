use super::types::KeyPress;
use egui::Key;

/// Render a keypress in a user-friendly format (e.g. "Ctrl + T").
pub(crate) fn format_keypress(press: &KeyPress) -> String {
    let mut parts: Vec<&'static str> = Vec::new();
    if press.command {
        parts.push(command_label());
    }
    if press.shift {
        parts.push("Shift");
    }
    if press.alt {
        parts.push("Alt");
    }
    parts.push(key_label(press.key));
    parts.join(" + ")
}

pub(crate) fn command_label() -> &'static str {
    if cfg!(target_os = "macos") {
        "Cmd"
    } else {
        "Ctrl"
    }
}

fn key_label(key: Key) -> &'static str {
    match key {
        Key::T => "T",
        Key::E => "E",
        Key::R => "R",
        _ => "Key",
    }
}
