//! Plot surface abstraction
//!
//! The viewport controller never talks to egui directly. It issues three
//! commands per render (clear, plot the series, set the axis window) to a
//! [`PlotSurface`]. [`PlotScene`] records those commands so the egui widget
//! can draw them on the next frame.

use crate::audio::SampleBuffer;

/// Visible axis window: `[x_min, x_max]` in sample indices and
/// `[y_min, y_max]` in amplitude units.
///
/// `x_min > x_max` is allowed and means an inverted (empty) range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisWindow {
    pub x_min: i64,
    pub x_max: i64,
    pub y_min: f64,
    pub y_max: f64,
}

impl AxisWindow {
    pub fn is_inverted(&self) -> bool {
        self.x_min > self.x_max
    }

    /// `[x_min, y_min]`, `[x_max, y_max]` as plot coordinates
    pub fn corners(&self) -> ([f64; 2], [f64; 2]) {
        (
            [self.x_min as f64, self.y_min],
            [self.x_max as f64, self.y_max],
        )
    }
}

/// Something the render step can draw on
pub trait PlotSurface {
    /// Drop whatever was drawn before
    fn clear(&mut self);

    /// Draw the whole series as one continuous line
    fn plot_series(&mut self, series: &SampleBuffer);

    /// Apply the visible axis window
    fn set_axis(&mut self, window: AxisWindow);
}

/// Retained plot state consumed by [`WaveformPlot`](super::WaveformPlot)
#[derive(Debug, Default)]
pub struct PlotScene {
    series: Option<SampleBuffer>,
    axis: Option<AxisWindow>,
    generation: u64,
}

impl PlotScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn series(&self) -> Option<&SampleBuffer> {
        self.series.as_ref()
    }

    pub fn axis(&self) -> Option<AxisWindow> {
        self.axis
    }

    /// Bumped on every `set_axis`, so the widget knows a render happened
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl PlotSurface for PlotScene {
    fn clear(&mut self) {
        self.series = None;
        self.axis = None;
    }

    fn plot_series(&mut self, series: &SampleBuffer) {
        self.series = Some(series.clone_ref());
    }

    fn set_axis(&mut self, window: AxisWindow) {
        self.axis = Some(window);
        self.generation += 1;
    }
}
