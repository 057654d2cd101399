#![deny(missing_docs)]
#![deny(warnings)]

//! Entry point for the cellar desktop client.
use cellar::config;
use cellar::egui_app::controller::hotkeys;
use cellar::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use cellar::logging;
use eframe::egui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }
    tracing::info!("Keyboard shortcuts: {}", hotkeys::describe_actions());

    let app = config::load_or_default()
        .map_err(|err| format!("Failed to load config: {err}"))
        .and_then(|config| {
            tracing::info!("Using server at {}", config.server.base_url);
            EguiApp::new(&config)
        });

    let viewport = egui::ViewportBuilder::default()
        .with_min_inner_size(MIN_VIEWPORT_SIZE)
        .with_inner_size([720.0, 820.0]);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Cellar",
        native_options,
        Box::new(move |_cc| match app {
            Ok(app) => Ok(Box::new(app)),
            Err(message) => {
                tracing::error!("{message}");
                Ok(Box::new(LaunchError { message }))
            }
        }),
    )?;
    Ok(())
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start UI");
                ui.label(&self.message);
            });
        });
    }
}
