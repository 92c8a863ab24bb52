//! Converter window.

use std::path::PathBuf;
use std::sync::Arc;

use egui::{Color32, RichText, Vec2};
use tokio::runtime::Handle;

use super::controller::ConversionController;
use crate::report::DialogLevel;
use crate::request::SOURCE_EXTENSION;
use crate::workflow::Workflow;

const HELP_TEXT: &str = "1. Click 'Browse' to select a .mov file\n2. Click 'Convert to MP4' to start conversion";

pub struct ConverterApp {
    controller: ConversionController,
    runtime: Handle,
    /// Contents of the path field
    file_path: String,
    /// Exact path from the file picker, used while the field still shows it
    picked_path: Option<PathBuf>,
}

impl ConverterApp {
    pub fn new(cc: &eframe::CreationContext<'_>, workflow: Workflow, runtime: Handle) -> Self {
        let mut controller = ConversionController::new(workflow, runtime.clone());
        let ctx = cc.egui_ctx.clone();
        controller.set_notifier(Arc::new(move || ctx.request_repaint()));
        // Only feeds the warning banner; conversions are attempted regardless
        controller.check_engine();

        Self {
            controller,
            runtime,
            file_path: String::new(),
            picked_path: None,
        }
    }

    fn show_contents(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(20.0);
            ui.label(RichText::new("MOV to MP4 Converter").size(20.0).strong());
            ui.add_space(20.0);
        });

        if let Some(error) = self.controller.state().engine_warning.clone() {
            ui.horizontal(|ui| {
                ui.label(RichText::new("⚠").color(Color32::YELLOW));
                ui.label(RichText::new(error).color(Color32::YELLOW).small());
            });
            ui.separator();
        }

        // File selection
        ui.horizontal(|ui| {
            ui.add(egui::TextEdit::singleline(&mut self.file_path).desired_width(420.0));
            if ui.button("Browse").clicked() {
                self.open_file_dialog();
            }
        });

        ui.add_space(20.0);

        let state = self.controller.state();
        let (progress, status, convert_enabled) =
            (state.progress, state.status.clone(), state.convert_enabled);

        ui.add(egui::ProgressBar::new(progress / 100.0).desired_width(ui.available_width()));

        ui.add_space(10.0);

        ui.vertical_centered(|ui| {
            ui.label(status.as_str());
            ui.add_space(20.0);

            let button = egui::Button::new("Convert to MP4").min_size(Vec2::new(160.0, 32.0));
            if ui.add_enabled(convert_enabled, button).clicked() {
                let input = self.selected_path();
                self.controller.start(&input);
            }
        });

        ui.add_space(20.0);
        ui.label(RichText::new(HELP_TEXT).small());
    }

    fn show_dialog(&mut self, ctx: &egui::Context) {
        let Some(dialog) = self.controller.state().dialog.clone() else {
            return;
        };

        let title_color = match dialog.level {
            DialogLevel::Info => Color32::LIGHT_GREEN,
            DialogLevel::Error => Color32::LIGHT_RED,
        };

        let mut dismissed = false;
        egui::Window::new(RichText::new(dialog.title.as_str()).color(title_color))
            .id(egui::Id::new("movmp4_result_dialog"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().max_height(200.0).show(ui, |ui| {
                    ui.label(dialog.body.as_str());
                });
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });

        if dismissed {
            self.controller.dismiss_dialog();
        }
    }

    fn open_file_dialog(&mut self) {
        // The portal backend talks D-Bus through tokio
        let _guard = self.runtime.enter();
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("MOV files", &[SOURCE_EXTENSION])
            .add_filter("All files", &["*"])
            .pick_file()
        {
            self.file_path = path.display().to_string();
            self.picked_path = Some(path);
        }
    }

    /// The picked path unless the field was edited since, then the field text.
    fn selected_path(&self) -> PathBuf {
        match &self.picked_path {
            Some(path) if path.display().to_string() == self.file_path => path.clone(),
            _ => PathBuf::from(&self.file_path),
        }
    }
}

impl eframe::App for ConverterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.controller.poll_events();

        let modal_open = self.controller.state().dialog.is_some();
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!modal_open, |ui| {
                self.show_contents(ui);
            });
        });

        self.show_dialog(ctx);
    }
}
