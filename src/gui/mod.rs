// Interactive shell
//
// - State: display state and the events that may change it
// - Controller: validation, background task, event hand-off
// - App: the eframe window (feature "gui")

pub mod controller;
pub mod state;

#[cfg(feature = "gui")]
pub mod app;

pub use controller::ConversionController;
pub use state::{UiEvent, UiState};

#[cfg(feature = "gui")]
pub fn run(workflow: crate::workflow::Workflow, runtime: tokio::runtime::Handle) -> anyhow::Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([600.0, 400.0])
            .with_min_inner_size([480.0, 360.0])
            .with_title("MOV to MP4 Converter"),
        ..Default::default()
    };

    eframe::run_native(
        "MOV to MP4 Converter",
        native_options,
        Box::new(move |cc| Box::new(app::ConverterApp::new(cc, workflow, runtime))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to open window: {}", e))
}
