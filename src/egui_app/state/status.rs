/// Style class of the training status region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusClass {
    #[default]
    Idle,
    Pending,
    Success,
    Error,
}

impl StatusClass {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Pending => "pending",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Training status region shown under the trigger.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusPanelState {
    pub visible: bool,
    pub class: StatusClass,
    pub message: String,
    pub details: String,
    /// Spinner next to the message while the request is outstanding.
    pub loader_visible: bool,
}
