use super::super::hotkeys::{KeyPress, find_action};
use super::super::test_support::{harness, train_response};
use super::super::*;
use crate::wine::WineFeature;
use egui::Key;

fn press(h: &mut super::super::test_support::Harness, key: Key) {
    let action = find_action(&KeyPress::with_command(key)).unwrap();
    h.controller.handle_hotkey(action);
}

#[test]
fn command_t_starts_training_once() {
    let mut h = harness();
    press(&mut h, Key::T);
    press(&mut h, Key::T);
    assert!(h.controller.training_job().is_pending());

    h.finish_training(Ok(train_response("success", "ok", "")));
    assert_eq!(h.training.calls(), 1);
}

#[test]
fn command_e_then_command_r_fills_and_clears() {
    let mut h = harness();
    press(&mut h, Key::E);
    assert_eq!(h.controller.ui.form.field(WineFeature::Alcohol).value, "9.4");

    press(&mut h, Key::R);
    assert!(h.controller.ui.form.field(WineFeature::Alcohol).value.is_empty());
    assert!(!h.controller.ui.result.visible);
}
