/// Controller that owns the UI model and talks to the wine service.
pub mod controller;
/// Plain state rendered by the UI.
pub mod state;
/// egui rendering.
pub mod ui;
