//! Live playback through the host audio device (feature `playback`).
//!
//! Sound is a non-essential enhancement: every failure here — no device,
//! unsupported format, stream refused — degrades to a logged no-op and
//! never reaches the caller.
//!
//! cpal streams are not `Send`, so the stream lives on a dedicated output
//! thread created at most once per process. Callers talk to it through a
//! channel of rendered cue buffers; the stream callback mixes whatever
//! cues are active, so overlapping invocations simply sum in the output.

use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex, OnceLock};
use std::thread;

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};

use crate::cue;
use crate::dsp::engine::CueEngine;
use crate::error::RaceCueError;

/// A rendered cue currently mixing into the output stream.
struct ActiveCue {
    samples: Vec<f32>,
    position: usize,
}

struct OutputHandle {
    /// mpsc senders are not Sync, and the handle lives in a process-wide
    /// static; the mutex makes cross-thread `play` calls safe.
    sender: Mutex<Sender<Vec<f32>>>,
    sample_rate: f64,
}

static OUTPUT: OnceLock<Option<OutputHandle>> = OnceLock::new();

/// Acquire the output device. Idempotent; safe to call any number of
/// times. A no-op if the host has no usable audio output.
pub fn init() {
    let _ = output();
}

/// True once `init` (or the first `play`) found a usable output device.
pub fn is_available() -> bool {
    output().is_some()
}

/// Play a cue by id. Fire-and-forget: never blocks, never errors.
/// Unknown ids and audio failures are logged at debug level and skipped.
pub fn play(id: &str) {
    let Some(handle) = output() else {
        return;
    };
    let Some(cue) = cue::lookup(id) else {
        log::debug!("Unknown cue id '{id}', skipping");
        return;
    };

    let samples = CueEngine::new(handle.sample_rate).render(&cue);
    let Ok(sender) = handle.sender.lock() else {
        return;
    };
    if sender.send(samples).is_err() {
        log::debug!("Audio output thread gone, cue '{id}' dropped");
    }
}

fn output() -> &'static Option<OutputHandle> {
    OUTPUT.get_or_init(|| match spawn_output_thread() {
        Ok(handle) => Some(handle),
        Err(e) => {
            log::debug!("Audio unavailable, cues disabled: {e}");
            None
        }
    })
}

/// Spawn the thread that owns the cpal stream and pumps rendered cues
/// into the shared mixer. Reports the stream's sample rate (or the
/// failure) back through a one-shot channel before entering its loop.
fn spawn_output_thread() -> Result<OutputHandle, RaceCueError> {
    let (cue_tx, cue_rx) = mpsc::channel::<Vec<f32>>();
    let (ready_tx, ready_rx) = mpsc::channel::<Result<u32, String>>();

    thread::Builder::new()
        .name("racecue-output".to_string())
        .spawn(move || {
            let active: Arc<Mutex<Vec<ActiveCue>>> = Arc::new(Mutex::new(Vec::new()));
            let stream = match open_stream(Arc::clone(&active)) {
                Ok((stream, rate)) => {
                    let _ = ready_tx.send(Ok(rate));
                    stream
                }
                Err(reason) => {
                    let _ = ready_tx.send(Err(reason));
                    return;
                }
            };

            // The stream plays for the life of the process; this loop ends
            // only when every sender is dropped.
            for samples in cue_rx {
                if let Ok(mut active) = active.lock() {
                    active.push(ActiveCue { samples, position: 0 });
                }
            }
            drop(stream);
        })
        .map_err(|e| RaceCueError::AudioUnavailable { reason: e.to_string() })?;

    match ready_rx.recv() {
        Ok(Ok(rate)) => Ok(OutputHandle {
            sender: Mutex::new(cue_tx),
            sample_rate: rate as f64,
        }),
        Ok(Err(reason)) => Err(RaceCueError::AudioUnavailable { reason }),
        Err(_) => Err(RaceCueError::AudioUnavailable {
            reason: "output thread exited before reporting".to_string(),
        }),
    }
}

fn open_stream(active: Arc<Mutex<Vec<ActiveCue>>>) -> Result<(cpal::Stream, u32), String> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| "no default output device".to_string())?;
    let config = device.default_output_config().map_err(|e| e.to_string())?;

    if config.sample_format() != cpal::SampleFormat::F32 {
        return Err(format!("unsupported sample format {:?}", config.sample_format()));
    }

    let sample_rate = config.sample_rate().0;
    let channels = config.channels() as usize;

    let stream = device
        .build_output_stream(
            &config.into(),
            move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                mix_into(data, channels, &active);
            },
            |err| log::debug!("Audio stream error: {err}"),
            None,
        )
        .map_err(|e| e.to_string())?;
    stream.play().map_err(|e| e.to_string())?;

    Ok((stream, sample_rate))
}

/// Sum every active cue into the output buffer, mono duplicated across
/// all channels, and drop cues that have run out.
fn mix_into(data: &mut [f32], channels: usize, active: &Mutex<Vec<ActiveCue>>) {
    let Ok(mut active) = active.lock() else {
        data.fill(0.0);
        return;
    };

    for frame in data.chunks_mut(channels) {
        let mut sum = 0.0_f32;
        for cue in active.iter_mut() {
            if let Some(&s) = cue.samples.get(cue.position) {
                sum += s;
            }
            cue.position += 1;
        }
        let s = sum.clamp(-1.0, 1.0);
        for ch in frame.iter_mut() {
            *ch = s;
        }
    }

    active.retain(|c| c.position < c.samples.len());
}
