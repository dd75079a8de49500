//! WAV decoding
//!
//! Reads a WAV file into interleaved amplitude values using `hound`.
//! Integer PCM keeps its raw integer amplitudes; float PCM keeps its float
//! amplitudes. Nothing is normalized, so a 16-bit file plots in the
//! `i16` range. 8-bit WAV is unsigned on disk and stays in `0..=255`.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use hound::{SampleFormat, WavReader};
use thiserror::Error;

use super::buffer::SampleBuffer;

/// hound re-centres unsigned 8-bit PCM around zero; this undoes it
const U8_OFFSET: f64 = 128.0;

/// Errors that can occur while decoding an audio file
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Failed to decode WAV file: {0}")]
    Wav(#[from] hound::Error),

    #[error("File declares zero channels")]
    NoChannels,
}

/// A decoded file: interleaved samples of shape `(frames, channels)`
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedAudio {
    pub sample_rate: u32,
    pub channels: u16,
    pub samples: Vec<f64>,
}

impl DecodedAudio {
    /// Number of frames (time steps)
    pub fn frames(&self) -> usize {
        match self.channels {
            0 => 0,
            n => self.samples.len() / n as usize,
        }
    }

    /// Project to a single channel by keeping only channel 0
    pub fn first_channel(&self) -> SampleBuffer {
        if self.channels <= 1 {
            return SampleBuffer::new(self.samples.clone());
        }
        let samples = self
            .samples
            .iter()
            .step_by(self.channels as usize)
            .copied()
            .collect();
        SampleBuffer::new(samples)
    }
}

/// Decode a WAV file from disk
pub fn decode_wav(path: impl AsRef<Path>) -> Result<DecodedAudio, DecodeError> {
    let file = File::open(path.as_ref()).map_err(hound::Error::from)?;
    decode_reader(BufReader::new(file))
}

/// Decode WAV data from any reader
pub fn decode_reader<R: Read>(reader: R) -> Result<DecodedAudio, DecodeError> {
    let mut reader = WavReader::new(reader)?;
    let spec = reader.spec();
    if spec.channels == 0 {
        return Err(DecodeError::NoChannels);
    }

    let samples = match spec.sample_format {
        SampleFormat::Int if spec.bits_per_sample == 8 => reader
            .samples::<i32>()
            .map(|s| s.map(|v| f64::from(v) + U8_OFFSET))
            .collect::<Result<Vec<_>, _>>()?,
        SampleFormat::Int => reader
            .samples::<i32>()
            .map(|s| s.map(f64::from))
            .collect::<Result<Vec<_>, _>>()?,
        SampleFormat::Float => reader
            .samples::<f32>()
            .map(|s| s.map(f64::from))
            .collect::<Result<Vec<_>, _>>()?,
    };

    log::debug!(
        "Decoded {} samples ({} ch, {} bit, {} Hz)",
        samples.len(),
        spec.channels,
        spec.bits_per_sample,
        spec.sample_rate
    );

    Ok(DecodedAudio {
        sample_rate: spec.sample_rate,
        channels: spec.channels,
        samples,
    })
}
