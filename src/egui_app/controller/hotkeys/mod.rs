mod actions;
mod format;
mod types;

pub(crate) use format::{command_label, format_keypress};
pub(crate) use types::{HotkeyAction, HotkeyCommand, KeyPress};

use actions::HOTKEY_ACTIONS;

pub(crate) fn iter_actions() -> impl Iterator<Item = HotkeyAction> {
    HOTKEY_ACTIONS.iter().copied()
}

/// The action bound to `press`, if any.
pub(crate) fn find_action(press: &KeyPress) -> Option<HotkeyAction> {
    iter_actions().find(|action| press.matches(&action.gesture))
}

/// "Ctrl + T train model · Ctrl + E load example · ..." for hints and logs.
pub fn describe_actions() -> String {
    iter_actions()
        .map(|action| {
            format!(
                "{} {}",
                format_keypress(&action.gesture),
                action.label.to_lowercase()
            )
        })
        .collect::<Vec<_>>()
        .join(" · ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Key;

    #[test]
    fn command_letters_map_to_commands() {
        let command = |key| find_action(&KeyPress::with_command(key)).map(|a| a.command());
        assert_eq!(command(Key::T), Some(HotkeyCommand::StartTraining));
        assert_eq!(command(Key::E), Some(HotkeyCommand::LoadExample));
        assert_eq!(command(Key::R), Some(HotkeyCommand::ResetForm));
        assert_eq!(command(Key::X), None);
    }

    #[test]
    fn bare_letters_do_not_trigger() {
        assert!(find_action(&KeyPress::new(Key::T)).is_none());
    }

    #[test]
    fn every_binding_is_a_command_chord() {
        for action in iter_actions() {
            let press = action.gesture;
            assert!(press.command, "{} lacks the command modifier", action.id);
            assert!(!press.shift && !press.alt, "{} has extra modifiers", action.id);
        }
    }

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<_> = iter_actions().map(|action| action.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), iter_actions().count());
    }

    #[test]
    fn description_lists_every_action() {
        let text = describe_actions();
        assert!(text.contains("train model"));
        assert!(text.contains("load example"));
        assert!(text.contains("reset form"));
    }
}
