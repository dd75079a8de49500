//! monocle - Waveform viewer
//!
//! Loads a WAV file, plots its first channel as a line and lets the user
//! pan and zoom with three linked slider + entry controls:
//!
//! - X Start: left edge of the visible window
//! - X End: right edge of the visible window
//! - X Pos: offset added to both edges

use eframe::egui;

mod audio;
mod palette;
mod render;
mod settings;
mod viewport;

use render::{PlotScene, WaveformPlot, WaveformSettings};
use settings::AppSettings;
use viewport::{ControlId, ViewportController, ViewportState};

/// Vertical space reserved below the plot for readouts and controls
const CONTROLS_HEIGHT: f32 = 150.0;

fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("Starting monocle");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_title("Monocle"),
        ..Default::default()
    };

    eframe::run_native(
        "Monocle",
        options,
        Box::new(|cc| Ok(Box::new(MonocleApp::new(cc)))),
    )
}

/// Main application state
struct MonocleApp {
    viewport: ViewportController<PlotScene>,
    plot: WaveformPlot,
    settings: AppSettings,

    /// Visuals the window started with, restored when the palette is off
    default_visuals: egui::Visuals,
}

impl MonocleApp {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = AppSettings::load();

        let mut app = Self {
            viewport: ViewportController::new(PlotScene::new()),
            plot: WaveformPlot::new(),
            settings,
            default_visuals: cc.egui_ctx.style().visuals.clone(),
        };
        app.plot.settings.line_width = app.settings.line_width;
        app.plot.settings.show_grid = app.settings.show_grid;
        app.apply_theme(&cc.egui_ctx);
        app
    }

    fn apply_theme(&mut self, ctx: &egui::Context) {
        if self.settings.custom_palette {
            palette::apply_visuals(ctx);
            self.plot.settings.color = palette::PLOT_LINE.color32();
        } else {
            ctx.set_visuals(self.default_visuals.clone());
            self.plot.settings.color = WaveformSettings::default().color;
        }
    }

    /// Ask for a file and load it. Cancelling changes nothing.
    fn open_file(&mut self) {
        let mut dialog = rfd::FileDialog::new()
            .set_title("Open")
            .add_filter("WAV audio", &["wav", "wave"]);
        if let Some(dir) = &self.settings.last_directory {
            dialog = dialog.set_directory(dir);
        }

        let Some(path) = dialog.pick_file() else {
            log::debug!("Open cancelled");
            return;
        };

        if let Some(parent) = path.parent() {
            self.settings.last_directory = Some(parent.to_path_buf());
            self.settings.save();
        }

        if let Err(e) = self.viewport.open_file(&path) {
            log::error!("Failed to load {}: {}", path.display(), e);
            self.viewport
                .set_status(format!("Failed to load {}: {}", path.display(), e));
        }
    }

    fn menu_bar(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        let mut open_requested = false;
        let mut theme_changed = false;

        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Open").clicked() {
                    open_requested = true;
                    ui.close_menu();
                }
                if ui.button("Exit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                if ui
                    .checkbox(&mut self.settings.custom_palette, "Srcery palette")
                    .changed()
                {
                    theme_changed = true;
                }
                if ui
                    .checkbox(&mut self.settings.show_grid, "Show grid")
                    .changed()
                {
                    self.plot.settings.show_grid = self.settings.show_grid;
                    self.settings.save();
                }
                let width = ui.add(
                    egui::Slider::new(&mut self.settings.line_width, 0.5..=5.0)
                        .text("Line width"),
                );
                if width.changed() {
                    self.plot.settings.line_width = self.settings.line_width;
                }
                // Drags save once on release; clicks and keys save right away
                if width.drag_stopped() || (width.changed() && !width.dragged()) {
                    self.settings.save();
                }
            });
        });

        if theme_changed {
            self.apply_theme(ctx);
            self.settings.save();
        }
        if open_requested {
            self.open_file();
        }
    }

    /// One row: label, entry box, slider
    fn control_row(&mut self, ui: &mut egui::Ui, id: ControlId) {
        ui.horizontal(|ui| {
            ui.add_sized([60.0, 20.0], egui::Label::new(id.label()));

            let entry = ui.add(
                egui::TextEdit::singleline(self.viewport.entry_text_mut(id)).desired_width(90.0),
            );
            if entry.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                self.viewport.commit_entry(id);
            }

            let control = self.viewport.control(id);
            let range = control.min()..=control.max();
            let mut value = control.value();

            ui.spacing_mut().slider_width = (ui.available_width() - 16.0).max(50.0);
            let slider = egui::Slider::new(&mut value, range)
                .show_value(false)
                .clamping(egui::SliderClamping::Never);
            if ui.add(slider).changed() {
                self.viewport.drag(id, value);
            }
        });
    }
}

impl eframe::App for MonocleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input_mut(|i| i.consume_key(egui::Modifiers::COMMAND, egui::Key::O)) {
            self.open_file();
        }

        // Menu bar
        egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
            self.menu_bar(ctx, ui);
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(self.viewport.status());
                if let ViewportState::FileLoaded(file) = self.viewport.state() {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.small(format!(
                            "{} samples @ {} Hz",
                            file.buffer.len(),
                            file.sample_rate
                        ))
                        .on_hover_text(file.path.display().to_string());
                    });
                }
            });
        });

        // Plot, readouts and controls
        egui::CentralPanel::default().show(ctx, |ui| {
            let plot_height = (ui.available_height() - CONTROLS_HEIGHT).max(120.0);
            self.plot.show(ui, self.viewport.surface(), plot_height);

            if self.viewport.is_loaded() {
                ui.label(self.viewport.x_readout());
                ui.label(self.viewport.y_readout());
            } else {
                ui.weak("File → Open to load a WAV file");
            }
            ui.separator();

            for id in ControlId::ALL {
                self.control_row(ui, id);
            }
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        log::info!("Saving settings on exit");
        self.settings.save();
    }
}
