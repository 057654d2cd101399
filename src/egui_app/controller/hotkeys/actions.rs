use super::types::{HotkeyAction, HotkeyCommand, KeyPress};
use egui::Key;

pub(super) const HOTKEY_ACTIONS: &[HotkeyAction] = &[
    HotkeyAction {
        id: "start-training",
        label: "Train model",
        gesture: KeyPress::with_command(Key::T),
        command: HotkeyCommand::StartTraining,
    },
    HotkeyAction {
        id: "load-example",
        label: "Load example",
        gesture: KeyPress::with_command(Key::E),
        command: HotkeyCommand::LoadExample,
    },
    HotkeyAction {
        id: "reset-form",
        label: "Reset form",
        gesture: KeyPress::with_command(Key::R),
        command: HotkeyCommand::ResetForm,
    },
];
