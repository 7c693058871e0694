//! DSP — Pure Rust cue synthesis.
//!
//! All synthesis runs in Rust for deterministic, cross-platform output.
//! The same code powers WebAudio playback (via AudioWorklet + WASM) and
//! the native live output behind the `playback` feature.

pub mod engine;
pub mod envelope;
pub mod oscillator;
pub mod ramp;
pub mod renderer;
pub mod voice;
