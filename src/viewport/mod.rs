//! Viewport module - interactive pan/zoom state
//!
//! This module provides:
//! - Paired slider + entry controls holding one integer each
//! - The viewport controller that wires them to the plot surface

mod control;
mod controller;

pub use controller::{ControlId, ViewportController, ViewportState};
