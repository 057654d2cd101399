//! Plain UI state consumed by the egui renderer.

mod form;
mod job;
mod notification;
mod status;
mod training;

pub use form::*;
pub use job::*;
pub use notification::*;
pub use status::*;
pub use training::*;

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub training: TrainingPanelState,
    pub form: FormState,
    pub result: ResultRegionState,
    /// One-shot request to bring the prediction form into view.
    pub scroll_to_form_requested: bool,
}
