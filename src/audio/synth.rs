//! Tiny sample generators for the synthesised sound backend.

use std::f32::consts::TAU;

pub const SAMPLE_RATE: u32 = 44_100;

/// Sine tone with a linear fade-out, `volume` in 0..=1.
pub fn tone(freq: f32, duration: f32, volume: f32, sample_rate: u32) -> Vec<f32> {
    let count = (sample_rate as f32 * duration) as usize;
    (0..count)
        .map(|i| {
            let t = i as f32 / sample_rate as f32;
            let fade = 1.0 - i as f32 / count as f32;
            (TAU * freq * t).sin() * volume * fade
        })
        .collect()
}

/// Falling saw-like sweep for the end of a run.
pub fn crash(sample_rate: u32) -> Vec<f32> {
    let duration = 0.5;
    let count = (sample_rate as f32 * duration) as usize;
    let mut phase = 0.0f32;
    (0..count)
        .map(|i| {
            let progress = i as f32 / count as f32;
            let freq = 400.0 - 320.0 * (progress / 0.8).min(1.0);
            phase = (phase + freq / sample_rate as f32).fract();
            (phase * 2.0 - 1.0) * 0.15 * (1.0 - progress)
        })
        .collect()
}

/// A short arpeggio meant to be looped under gameplay.
pub fn background_loop(sample_rate: u32) -> Vec<f32> {
    const NOTES: [f32; 8] = [262.0, 330.0, 392.0, 523.0, 392.0, 330.0, 294.0, 349.0];
    let note_len = 0.25;
    NOTES
        .iter()
        .flat_map(|&freq| tone(freq, note_len, 0.08, sample_rate))
        .collect()
}
