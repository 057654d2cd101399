/// Lifecycle of the training request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum JobState {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

/// Sequence number of a dispatched training request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct JobId(pub u64);

/// Snapshot of the training job as rendered by the status panel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Job {
    pub state: JobState,
    pub message: String,
    pub details: String,
}

impl Job {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn pending(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            state: JobState::Pending,
            message: message.into(),
            details: details.into(),
        }
    }

    pub fn succeeded(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            state: JobState::Succeeded,
            message: message.into(),
            details: details.into(),
        }
    }

    pub fn failed(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            state: JobState::Failed,
            message: message.into(),
            details: details.into(),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.state == JobState::Pending
    }
}
