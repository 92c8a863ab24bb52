//! Display state owned by the UI thread.

use crate::report::{ConversionResult, Dialog};

pub const STATUS_READY: &str = "Ready to convert";
pub const STATUS_CONVERTING: &str = "Converting...";
pub const STATUS_SUCCEEDED: &str = "Conversion completed successfully!";
pub const STATUS_FAILED: &str = "Conversion failed!";

/// Progress shown once the engine has been launched. The bar is a coarse
/// placeholder and does not follow the engine.
pub const PROGRESS_LAUNCHED: f32 = 20.0;

/// Everything the background task is allowed to say to the UI.
#[derive(Debug)]
pub enum UiEvent {
    /// Engine launched; move the bar
    Progress(f32),
    /// Run finished, successfully or not
    Finished(ConversionResult),
    /// Startup `-version` check: the version line, or why it failed
    EngineChecked(Result<String, String>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    pub status: String,
    /// 0..=100
    pub progress: f32,
    pub convert_enabled: bool,
    pub dialog: Option<Dialog>,
    /// Banner text when the engine could not be started
    pub engine_warning: Option<String>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            status: STATUS_READY.to_string(),
            progress: 0.0,
            convert_enabled: true,
            dialog: None,
            engine_warning: None,
        }
    }
}

impl UiState {
    pub fn is_running(&self) -> bool {
        !self.convert_enabled
    }

    /// idle -> running
    pub fn begin(&mut self) {
        self.convert_enabled = false;
        self.progress = 0.0;
        self.status = STATUS_CONVERTING.to_string();
    }

    /// Rejected before starting; state stays idle.
    pub fn reject(&mut self, dialog: Dialog) {
        self.dialog = Some(dialog);
    }

    pub fn apply(&mut self, event: UiEvent) {
        match event {
            UiEvent::Progress(value) => {
                self.progress = value.clamp(0.0, 100.0);
            }
            UiEvent::Finished(result) => {
                self.status = if result.is_success() {
                    STATUS_SUCCEEDED
                } else {
                    STATUS_FAILED
                }
                .to_string();
                self.dialog = Some(Dialog::for_result(&result));
                // running -> idle regardless of outcome
                self.convert_enabled = true;
                self.progress = 0.0;
            }
            UiEvent::EngineChecked(Ok(_)) => {
                self.engine_warning = None;
            }
            UiEvent::EngineChecked(Err(reason)) => {
                self.engine_warning = Some(format!("FFmpeg not available: {}", reason));
            }
        }
    }

    pub fn dismiss_dialog(&mut self) {
        self.dialog = None;
    }
}
