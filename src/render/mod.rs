//! Render module - plot surface and UI components for visualization
//!
//! This module provides:
//! - The `PlotSurface` seam used by the viewport controller
//! - A retained scene that records render commands
//! - The egui_plot waveform widget that draws the scene

mod surface;
mod waveform;

pub use surface::{AxisWindow, PlotScene, PlotSurface};
pub use waveform::{WaveformPlot, WaveformSettings};
