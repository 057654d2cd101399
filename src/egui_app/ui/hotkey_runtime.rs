use crate::egui_app::controller::hotkeys;
use crate::egui_app::ui::EguiApp;
use eframe::egui;

struct KeyEventPress {
    press: hotkeys::KeyPress,
    repeat: bool,
}

impl EguiApp {
    pub(super) fn process_hotkeys(&mut self, ctx: &egui::Context) {
        let events = ctx.input(|i| i.events.clone());
        for event in events {
            let Some(key_event) = keypress_from_event(&event) else {
                continue;
            };
            let Some(action) = hotkeys::find_action(&key_event.press) else {
                continue;
            };
            consume_press(ctx, key_event.press);
            if !key_event.repeat {
                self.controller.handle_hotkey(action);
            }
        }
    }
}

fn keypress_from_event(event: &egui::Event) -> Option<KeyEventPress> {
    match event {
        egui::Event::Key {
            key,
            pressed: true,
            repeat,
            modifiers,
            ..
        } => {
            let command = if cfg!(target_os = "macos") {
                modifiers.command
            } else {
                modifiers.ctrl
            };
            Some(KeyEventPress {
                press: hotkeys::KeyPress {
                    key: *key,
                    command,
                    shift: modifiers.shift,
                    alt: modifiers.alt,
                },
                repeat: *repeat,
            })
        }
        _ => None,
    }
}

fn consume_press(ctx: &egui::Context, press: hotkeys::KeyPress) {
    let modifiers = keypress_modifiers(&press);
    ctx.input_mut(|i| {
        i.consume_key(modifiers, press.key);
    });
}

fn keypress_modifiers(press: &hotkeys::KeyPress) -> egui::Modifiers {
    let mut modifiers = egui::Modifiers::default();
    modifiers.alt = press.alt;
    modifiers.shift = press.shift;
    if cfg!(target_os = "macos") {
        modifiers.command = press.command;
    } else {
        modifiers.ctrl = press.command;
    }
    modifiers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_event(key: egui::Key, modifiers: egui::Modifiers, repeat: bool) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat,
            modifiers,
        }
    }

    fn command_modifiers() -> egui::Modifiers {
        keypress_modifiers(&hotkeys::KeyPress::with_command(egui::Key::T))
    }

    #[test]
    fn command_t_maps_to_a_command_press() {
        let event = key_event(egui::Key::T, command_modifiers(), false);
        let parsed = keypress_from_event(&event).unwrap();
        assert_eq!(parsed.press, hotkeys::KeyPress::with_command(egui::Key::T));
        assert!(!parsed.repeat);
    }

    #[test]
    fn releases_are_ignored() {
        let event = egui::Event::Key {
            key: egui::Key::T,
            physical_key: None,
            pressed: false,
            repeat: false,
            modifiers: command_modifiers(),
        };
        assert!(keypress_from_event(&event).is_none());
    }

    #[test]
    fn consume_press_drops_hotkey_events() {
        let ctx = egui::Context::default();
        let press = hotkeys::KeyPress::with_command(egui::Key::E);
        ctx.input_mut(|i| {
            i.events
                .push(key_event(egui::Key::E, keypress_modifiers(&press), false));
        });
        consume_press(&ctx, press);
        let remaining = ctx.input(|i| i.events.len());
        assert_eq!(remaining, 0);
    }
}
