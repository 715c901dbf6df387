//! picorient WASM - WebAssembly bindings for picorient
//!
//! Exposes orientation correction to JavaScript hosts such as web-based
//! image pickers. Everything operates on byte buffers; there is no
//! filesystem on this side.
//!
//! # Module Structure
//!
//! - `orient` - EXIF orientation lookup and upright re-encoding
//! - `crop` - Crop-to-display for camera frames
//! - `encode` - JPEG encoding of cropped frames
//! - `types` - WASM-compatible wrapper types for image data
//!
//! # Usage
//!
//! ```typescript
//! import init, { rotate_upright } from '@picorient/wasm';
//!
//! await init();
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const fixed = rotate_upright(bytes, undefined) ?? bytes;
//! ```

use wasm_bindgen::prelude::*;

mod crop;
mod encode;
mod logging;
mod orient;
mod types;

pub use crop::crop_to_display;
pub use encode::encode_jpeg;
pub use orient::{read_orientation_degrees, rotate_upright};
pub use types::JsDecodedImage;

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
