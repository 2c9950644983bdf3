use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::{js_message, SiteError};

#[wasm_bindgen]
extern "C" {
    // canvas-confetti browser bundle, loaded from index.html
    #[wasm_bindgen(catch, js_namespace = window, js_name = confetti)]
    fn confetti(options: JsValue) -> Result<JsValue, JsValue>;
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct Origin {
    pub x: f64,
    pub y: f64,
}

/// Options for one confetti burst, shaped the way canvas-confetti reads them.
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Burst {
    pub particle_count: u32,
    /// Degrees.
    pub spread: f64,
    pub origin: Origin,
}

impl Default for Burst {
    fn default() -> Self {
        Self {
            particle_count: 100,
            spread: 70.0,
            origin: Origin { x: 0.5, y: 0.6 },
        }
    }
}

/// Fires the burst. The returned promise only says when the animation ends,
/// nobody waits on it.
pub fn fire(burst: &Burst) -> Result<(), SiteError> {
    let options = serde_wasm_bindgen::to_value(burst)?;
    confetti(options).map_err(|e| SiteError::Celebration(js_message(&e)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_burst_matches_canvas_confetti_options() {
        let value = serde_json::to_value(Burst::default()).unwrap();
        assert_eq!(
            value,
            json!({
                "particleCount": 100,
                "spread": 70.0,
                "origin": { "x": 0.5, "y": 0.6 }
            })
        );
    }
}
