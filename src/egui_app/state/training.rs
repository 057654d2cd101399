use super::StatusPanelState;

pub const START_TRAINING_LABEL: &str = "Start Training";
pub const TRAINING_BUSY_LABEL: &str = "Training...";
pub const TRAINING_COMPLETE_LABEL: &str = "Training Complete!";

/// The "start training" button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TriggerState {
    pub label: String,
    pub enabled: bool,
    /// Draw a spinner in front of the label.
    pub busy: bool,
}

impl Default for TriggerState {
    fn default() -> Self {
        Self::ready()
    }
}

impl TriggerState {
    pub fn ready() -> Self {
        Self {
            label: START_TRAINING_LABEL.to_string(),
            enabled: true,
            busy: false,
        }
    }

    pub fn busy() -> Self {
        Self {
            label: TRAINING_BUSY_LABEL.to_string(),
            enabled: false,
            busy: true,
        }
    }

    pub fn complete() -> Self {
        Self {
            label: TRAINING_COMPLETE_LABEL.to_string(),
            enabled: false,
            busy: false,
        }
    }
}

/// Step 1 of the page: trigger plus status region.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrainingPanelState {
    pub trigger: TriggerState,
    pub status: StatusPanelState,
}
