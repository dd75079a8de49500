//! Waveform plot widget
//!
//! Draws a [`PlotScene`] with `egui_plot`.
//!
//! ## How it works
//!
//! - The full sample series is drawn as one continuous line every frame.
//!   What is visible is controlled only by the plot bounds, never by
//!   slicing the data, so drawing cost follows the buffer length.
//! - The axis window from the scene is pushed into the plot bounds only
//!   when the scene has been re-rendered. Between renders the user can pan
//!   and zoom freely with the mouse; double click snaps back to the last
//!   rendered window.
//!
//! ## Coordinate System
//!
//! - X: sample index (0 = first sample)
//! - Y: raw amplitude as decoded from the file

use eframe::egui::{self, Color32};
use egui_plot::{Line, Plot, PlotBounds, PlotPoints};

use super::surface::PlotScene;

/// Display settings for the waveform plot
#[derive(Clone)]
pub struct WaveformSettings {
    /// Line color
    pub color: Color32,

    /// Line thickness in pixels
    pub line_width: f32,

    /// Whether to show grid lines
    pub show_grid: bool,
}

impl Default for WaveformSettings {
    fn default() -> Self {
        Self {
            color: Color32::from_rgb(31, 119, 180),
            line_width: 1.0,
            show_grid: true,
        }
    }
}

/// Waveform widget
pub struct WaveformPlot {
    /// Display settings
    pub settings: WaveformSettings,

    /// Scene generation whose axis window is currently applied
    applied_generation: Option<u64>,
}

impl Default for WaveformPlot {
    fn default() -> Self {
        Self::new()
    }
}

impl WaveformPlot {
    pub fn new() -> Self {
        Self {
            settings: WaveformSettings::default(),
            applied_generation: None,
        }
    }

    /// True if the scene holds a render this widget has not applied yet
    fn needs_bounds(&self, scene: &PlotScene) -> bool {
        scene.axis().is_some() && self.applied_generation != Some(scene.generation())
    }

    /// Draw the scene into the remaining space of `ui`
    pub fn show(&mut self, ui: &mut egui::Ui, scene: &PlotScene, height: f32) -> egui::Response {
        let apply_bounds = self.needs_bounds(scene);
        let color = self.settings.color;
        let line_width = self.settings.line_width;

        let response = Plot::new("waveform_plot")
            .height(height)
            .show_grid(self.settings.show_grid)
            .allow_double_click_reset(false)
            .show(ui, |plot_ui| {
                if apply_bounds {
                    if let Some(window) = scene.axis() {
                        let (min, max) = window.corners();
                        plot_ui.set_plot_bounds(PlotBounds::from_min_max(min, max));
                    }
                }

                if let Some(series) = scene.series().filter(|s| !s.is_empty()) {
                    let points: PlotPoints = series
                        .samples()
                        .iter()
                        .enumerate()
                        .map(|(i, &y)| [i as f64, y])
                        .collect();
                    plot_ui.line(Line::new(points).color(color).width(line_width));
                }
            });

        if apply_bounds {
            self.applied_generation = Some(scene.generation());
        }
        if response.response.double_clicked() {
            self.applied_generation = None;
        }

        response.response
    }
}
