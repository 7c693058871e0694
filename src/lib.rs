pub mod cue;
pub mod dsp;
pub mod error;
#[cfg(feature = "playback")]
pub mod playback;

use crate::cue::CueDefinition;
use crate::dsp::engine::CueEngine;
use crate::error::RaceCueError;
use wasm_bindgen::prelude::*;

/// The crate version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// WASM-exposed: return the racecue-core version string.
#[wasm_bindgen]
pub fn core_version() -> String {
    VERSION.to_string()
}

/// Resolve a cue id to its definition.
pub fn cue_definition(id: &str) -> Result<CueDefinition, RaceCueError> {
    cue::lookup(id).ok_or_else(|| RaceCueError::UnknownCue { id: id.to_string() })
}

/// Every catalogued cue, in catalogue order.
pub fn catalog() -> Vec<CueDefinition> {
    cue::cue_ids().iter().filter_map(|id| cue::lookup(id)).collect()
}

/// JSON catalogue of every cue (native helper; WASM callers use `cue_catalog`).
pub fn catalog_json() -> Result<String, serde_json::Error> {
    serde_json::to_string(&catalog())
}

/// WASM-exposed: list every cue id the engine knows.
#[wasm_bindgen]
pub fn cue_ids() -> Vec<String> {
    cue::cue_ids()
}

/// WASM-exposed: the full cue catalogue as a JS value.
#[wasm_bindgen]
pub fn cue_catalog() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&catalog()).map_err(|e| JsValue::from_str(&format!("{e}")))
}

/// WASM-exposed: render a cue to mono f32 samples.
/// Returns the raw audio buffer for AudioWorklet playback.
#[wasm_bindgen]
pub fn render_cue_samples(id: &str, sample_rate: u32) -> Result<Vec<f32>, JsValue> {
    let cue = cue_definition(id).map_err(|e| JsValue::from_str(&format!("{e}")))?;
    Ok(CueEngine::new(sample_rate as f64).render(&cue))
}

/// WASM-exposed: render a cue to a WAV byte array.
#[wasm_bindgen]
pub fn render_cue_wav(id: &str, sample_rate: u32) -> Result<Vec<u8>, JsValue> {
    let cue = cue_definition(id).map_err(|e| JsValue::from_str(&format!("{e}")))?;
    Ok(dsp::renderer::render_wav(&cue, sample_rate))
}
