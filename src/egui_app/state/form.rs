use std::time::Instant;

use crate::wine::WineFeature;

pub const PREDICT_LABEL: &str = "Predict Quality";
pub const PREDICT_BUSY_LABEL: &str = "Predicting...";

/// Border accent of a numeric input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldAccent {
    /// Empty, or reset after a successful validation pass.
    #[default]
    Neutral,
    Valid,
    /// Flagged by a rejected submit.
    Invalid,
}

/// One numeric input of the prediction form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldState {
    pub feature: WineFeature,
    pub value: String,
    pub valid: bool,
    pub accent: FieldAccent,
    /// Focus emphasis; purely cosmetic.
    pub emphasized: bool,
    /// Set while the example-load flash is showing.
    pub highlight_until: Option<Instant>,
}

impl FieldState {
    pub fn new(feature: WineFeature) -> Self {
        Self {
            feature,
            value: String::new(),
            valid: false,
            accent: FieldAccent::Neutral,
            emphasized: false,
            highlight_until: None,
        }
    }
}

/// Submit button of the prediction form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitButtonState {
    pub label: String,
    pub enabled: bool,
    pub busy: bool,
}

impl Default for SubmitButtonState {
    fn default() -> Self {
        Self {
            label: PREDICT_LABEL.to_string(),
            enabled: true,
            busy: false,
        }
    }
}

/// Step 2 of the page: the eleven inputs and their submit button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormState {
    pub fields: Vec<FieldState>,
    pub submit: SubmitButtonState,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            fields: WineFeature::ALL.iter().copied().map(FieldState::new).collect(),
            submit: SubmitButtonState::default(),
        }
    }
}

impl FormState {
    pub fn field(&self, feature: WineFeature) -> &FieldState {
        &self.fields[feature.index()]
    }

    pub fn field_mut(&mut self, feature: WineFeature) -> &mut FieldState {
        &mut self.fields[feature.index()]
    }
}

/// Region below the form that reports the last prediction submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultRegionState {
    pub visible: bool,
    pub text: String,
    pub is_error: bool,
}
