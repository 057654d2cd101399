use std::time::Instant;

/// Severity of a transient notification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    /// Parse a severity name; unknown names fall back to `Info`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "success" => Self::Success,
            "warning" => Self::Warning,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// Identity of one notification instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NotificationId(pub u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub text: String,
    pub severity: Severity,
    pub created_at: Instant,
}

/// Which transition the visible notification is in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationPhase {
    /// Slid in (or sliding in) and dwelling.
    Shown,
    /// Sliding out; removal follows when the transition ends.
    Exiting { since: Instant },
}

/// What the toast renderer needs for the current frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotificationView {
    pub notification: Notification,
    pub phase: NotificationPhase,
}
