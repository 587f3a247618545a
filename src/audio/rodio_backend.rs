//! Audio through the default output device via `rodio`.

use super::synth::{background_loop, crash, SAMPLE_RATE};
use super::{AudioError, AudioSink};
use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, OutputStreamHandle, Sink, Source};

pub struct RodioAudio {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    background: Option<Sink>,
}

impl RodioAudio {
    pub fn new() -> Result<Self, AudioError> {
        let (stream, handle) =
            OutputStream::try_default().map_err(|e| AudioError::Unavailable(e.to_string()))?;
        Ok(Self {
            _stream: stream,
            handle,
            background: None,
        })
    }

    fn new_sink(&self) -> Result<Sink, AudioError> {
        Sink::try_new(&self.handle).map_err(|e| AudioError::Playback(e.to_string()))
    }
}

impl AudioSink for RodioAudio {
    fn play_background_loop(&mut self) -> Result<(), AudioError> {
        self.stop_background_loop()?;
        let sink = self.new_sink()?;
        sink.set_volume(0.5);
        let track = SamplesBuffer::new(1, SAMPLE_RATE, background_loop(SAMPLE_RATE));
        sink.append(track.repeat_infinite());
        self.background = Some(sink);
        Ok(())
    }

    fn stop_background_loop(&mut self) -> Result<(), AudioError> {
        if let Some(sink) = self.background.take() {
            sink.stop();
        }
        Ok(())
    }

    fn play_terminal_sound(&mut self) -> Result<(), AudioError> {
        let sink = self.new_sink()?;
        sink.append(SamplesBuffer::new(1, SAMPLE_RATE, crash(SAMPLE_RATE)));
        sink.detach();
        Ok(())
    }
}
