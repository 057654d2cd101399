use crate::egui_app::state::{FieldAccent, FieldState};

/// Per-field validity, recomputed on every interaction.
pub struct FieldValidator;

impl FieldValidator {
    /// A value is valid when it is a finite number after trimming.
    pub fn is_valid(value: &str) -> bool {
        let value = value.trim();
        !value.is_empty() && value.parse::<f64>().is_ok_and(f64::is_finite)
    }

    pub fn on_input(field: &mut FieldState, value: impl Into<String>) {
        field.value = value.into();
        field.valid = Self::is_valid(&field.value);
        field.accent = if field.valid {
            FieldAccent::Valid
        } else {
            FieldAccent::Neutral
        };
    }

    pub fn on_focus(field: &mut FieldState) {
        field.emphasized = true;
    }

    pub fn on_blur(field: &mut FieldState) {
        field.emphasized = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wine::WineFeature;

    #[test]
    fn input_drives_validity_and_accent() {
        let mut field = FieldState::new(WineFeature::Alcohol);

        FieldValidator::on_input(&mut field, "9.4");
        assert!(field.valid);
        assert_eq!(field.accent, FieldAccent::Valid);

        FieldValidator::on_input(&mut field, "");
        assert!(!field.valid);
        assert_eq!(field.accent, FieldAccent::Neutral);
    }

    #[test]
    fn non_numeric_and_non_finite_values_are_not_valid() {
        assert!(FieldValidator::is_valid(" 0.076 "));
        assert!(FieldValidator::is_valid("-1e3"));
        assert!(!FieldValidator::is_valid("   "));
        assert!(!FieldValidator::is_valid("abc"));
        assert!(!FieldValidator::is_valid("NaN"));
        assert!(!FieldValidator::is_valid("inf"));
    }

    #[test]
    fn focus_only_toggles_emphasis() {
        let mut field = FieldState::new(WineFeature::Density);
        FieldValidator::on_input(&mut field, "0.9978");
        FieldValidator::on_focus(&mut field);
        assert!(field.emphasized);
        assert!(field.valid);
        FieldValidator::on_blur(&mut field);
        assert!(!field.emphasized);
        assert_eq!(field.accent, FieldAccent::Valid);
    }
}
