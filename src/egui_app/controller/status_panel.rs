use crate::egui_app::state::{Job, JobState, StatusClass, StatusPanelState};

/// Renders a job snapshot into the status region.
///
/// Every field is overwritten from the snapshot, so rendering is idempotent.
pub struct JobStatusPanel;

impl JobStatusPanel {
    pub fn render(panel: &mut StatusPanelState, job: &Job) {
        let (visible, class) = match job.state {
            JobState::Idle => (false, StatusClass::Idle),
            JobState::Pending => (true, StatusClass::Pending),
            JobState::Succeeded => (true, StatusClass::Success),
            JobState::Failed => (true, StatusClass::Error),
        };
        panel.visible = visible;
        panel.class = class;
        panel.loader_visible = job.state == JobState::Pending;
        panel.message.clone_from(&job.message);
        panel.details.clone_from(&job.details);
    }
}
