//! Orientation WASM bindings.
//!
//! # Functions
//!
//! - [`read_orientation_degrees`] - Clockwise angle recorded in a photo's EXIF tag
//! - [`rotate_upright`] - Re-encode a photo with its pixels turned upright
//!
//! # Example
//!
//! ```typescript
//! import { read_orientation_degrees, rotate_upright } from '@picorient/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! if (read_orientation_degrees(bytes) > 0) {
//!   const fixed = rotate_upright(bytes, { jpegQuality: 80, sampleSize: 2 });
//! }
//! ```

use picorient_core::decode::read_rotation;
use picorient_core::{FixerConfig, Logger, Rotation};
use wasm_bindgen::prelude::*;

use crate::logging::HostLogger;

/// Read the clockwise rotation (0, 90, 180 or 270) recorded in image bytes.
///
/// Never fails: unreadable metadata is reported to the console and read as 0.
#[wasm_bindgen]
pub fn read_orientation_degrees(bytes: &[u8]) -> u32 {
    rotation_or_upright(bytes, &HostLogger).degrees()
}

/// Rotate a photo upright according to its EXIF tag.
///
/// # Arguments
///
/// * `bytes` - The photo's file bytes
/// * `config` - `{ jpegQuality?, sampleSize? }`; `undefined` uses defaults
///
/// # Returns
///
/// The corrected JPEG bytes, or `undefined` when the photo is already upright.
#[wasm_bindgen]
pub fn rotate_upright(bytes: &[u8], config: JsValue) -> Result<Option<Vec<u8>>, JsValue> {
    let config = parse_config(config)?;
    picorient_core::rotate_upright(bytes, &config).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn parse_config(config: JsValue) -> Result<FixerConfig, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(FixerConfig::default());
    }
    serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))
}

fn rotation_or_upright(bytes: &[u8], logger: &dyn Logger) -> Rotation {
    read_rotation(bytes).unwrap_or_else(|e| {
        logger.warn("read_orientation_degrees", &e.to_string());
        Rotation::Deg0
    })
}
