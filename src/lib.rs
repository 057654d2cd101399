//! Desktop client for a wine-quality model service.
/// Per-user application directories.
pub mod app_dirs;
/// Persisted settings.
pub mod config;
/// egui app: controller, state, and rendering.
pub mod egui_app;
pub(crate) mod http_client;
/// Log setup for the binary.
pub mod logging;
/// Wine features and the example record.
pub mod wine;
/// Training and prediction endpoints.
pub mod wine_api;
