use egui::Key;

/// A single keypress plus modifier state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct KeyPress {
    pub(crate) key: Key,
    /// Ctrl on Windows/Linux, Cmd on macOS.
    pub(crate) command: bool,
    pub(crate) shift: bool,
    pub(crate) alt: bool,
}

impl KeyPress {
    pub const fn new(key: Key) -> Self {
        Self {
            key,
            command: false,
            shift: false,
            alt: false,
        }
    }

    pub const fn with_command(key: Key) -> Self {
        Self {
            key,
            command: true,
            shift: false,
            alt: false,
        }
    }

    pub(crate) fn matches(&self, target: &KeyPress) -> bool {
        self.key == target.key
            && self.command == target.command
            && self.shift == target.shift
            && self.alt == target.alt
    }
}

/// Logical identifier for controller-dispatched hotkey commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum HotkeyCommand {
    StartTraining,
    LoadExample,
    ResetForm,
}

/// Hotkey metadata surfaced to the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct HotkeyAction {
    pub(crate) id: &'static str,
    pub(crate) label: &'static str,
    pub(crate) gesture: KeyPress,
    pub(super) command: HotkeyCommand,
}

impl HotkeyAction {
    pub(crate) fn command(&self) -> HotkeyCommand {
        self.command
    }
}
