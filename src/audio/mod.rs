//! Sound output. Every call is fire-and-forget: callers log failures and move on.

pub mod synth;

#[cfg(feature = "audio")]
mod rodio_backend;

#[cfg(feature = "audio")]
pub use rodio_backend::RodioAudio;

use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AudioError {
    /// No device, or the backend doesn't support the request.
    #[error("audio unavailable: {0}")]
    Unavailable(String),
    #[error("playback failed: {0}")]
    Playback(String),
}

/// Where the game sends its sounds.
pub trait AudioSink {
    /// Start (or restart from the top) the looping background track.
    fn play_background_loop(&mut self) -> Result<(), AudioError>;
    fn stop_background_loop(&mut self) -> Result<(), AudioError>;
    /// One-shot sound for the end of a run.
    fn play_terminal_sound(&mut self) -> Result<(), AudioError>;
}

/// Which sink the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoundMode {
    /// Terminal bell on game over, no music.
    #[default]
    Bell,
    Silent,
    /// Synthesised music and effects through the default output device.
    Synth,
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play_background_loop(&mut self) -> Result<(), AudioError> {
        Ok(())
    }

    fn stop_background_loop(&mut self) -> Result<(), AudioError> {
        Ok(())
    }

    fn play_terminal_sound(&mut self) -> Result<(), AudioError> {
        Ok(())
    }
}

/// Rings the terminal bell. Has no way to play music.
pub struct BellAudio<W: Write> {
    out: W,
}

impl BellAudio<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> BellAudio<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> AudioSink for BellAudio<W> {
    fn play_background_loop(&mut self) -> Result<(), AudioError> {
        Err(AudioError::Unavailable(
            "terminal bell cannot play music".to_string(),
        ))
    }

    fn stop_background_loop(&mut self) -> Result<(), AudioError> {
        Ok(())
    }

    fn play_terminal_sound(&mut self) -> Result<(), AudioError> {
        self.out
            .write_all(b"\x07")
            .and_then(|_| self.out.flush())
            .map_err(|e| AudioError::Playback(e.to_string()))
    }
}

/// Build the sink for a sound mode, falling back to the bell when the
/// synthesiser can't be opened.
pub fn open_sink(mode: SoundMode) -> Box<dyn AudioSink> {
    match mode {
        SoundMode::Silent => Box::new(SilentAudio),
        SoundMode::Bell => Box::new(BellAudio::stdout()),
        SoundMode::Synth => open_synth(),
    }
}

#[cfg(feature = "audio")]
fn open_synth() -> Box<dyn AudioSink> {
    match RodioAudio::new() {
        Ok(audio) => Box::new(audio),
        Err(e) => {
            tracing::warn!("falling back to terminal bell: {}", e);
            Box::new(BellAudio::stdout())
        }
    }
}

#[cfg(not(feature = "audio"))]
fn open_synth() -> Box<dyn AudioSink> {
    tracing::warn!("built without the `audio` feature; falling back to terminal bell");
    Box::new(BellAudio::stdout())
}
