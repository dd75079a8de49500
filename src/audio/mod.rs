//! Audio module - file decoding and sample storage
//!
//! This module provides:
//! - Immutable sample buffer shared between controller and plot
//! - WAV decoding via hound

mod buffer;
mod decode;

// Re-export public types
pub use buffer::SampleBuffer;
pub use decode::{decode_wav, DecodeError, DecodedAudio};
