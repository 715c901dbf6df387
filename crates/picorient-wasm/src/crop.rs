//! Crop-to-display WASM binding.

use picorient_core::{crop_to_aspect, DecodedImage, DeviceRotation, Logger};
use wasm_bindgen::prelude::*;

use crate::logging::HostLogger;
use crate::types::JsDecodedImage;

/// Crop a camera frame to the display's aspect ratio.
///
/// # Arguments
///
/// * `bytes` - The photo's file bytes
/// * `display_width`, `display_height` - Current display size in pixels
/// * `is_front_camera` - Mirror the result left-right
/// * `surface_rotation` - Device rotation index: 0, 1 (90°), 2 (180°), 3 (270°)
///
/// # Example (TypeScript)
///
/// ```typescript
/// const framed = crop_to_display(bytes, innerWidth, innerHeight, true, 0);
/// const jpeg = encode_jpeg(framed, 80);
/// ```
#[wasm_bindgen]
pub fn crop_to_display(
    bytes: &[u8],
    display_width: u32,
    display_height: u32,
    is_front_camera: bool,
    surface_rotation: u8,
) -> Result<JsDecodedImage, JsValue> {
    crop_frame(
        bytes,
        (display_width, display_height),
        is_front_camera,
        surface_rotation,
        &HostLogger,
    )
    .map(JsDecodedImage::from_decoded)
    .map_err(|e| JsValue::from_str(&e))
}

fn crop_frame(
    bytes: &[u8],
    display_size: (u32, u32),
    is_front_camera: bool,
    surface_rotation: u8,
    logger: &dyn Logger,
) -> Result<DecodedImage, String> {
    let device_rotation = DeviceRotation::from_surface_index(surface_rotation)
        .ok_or_else(|| format!("Invalid surface rotation: {}", surface_rotation))?;

    crop_to_aspect(bytes, display_size, is_front_camera, device_rotation, logger)
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use picorient_core::encode::encode_jpeg;
    use picorient_core::NullLogger;

    fn jpeg(width: u32, height: u32) -> Vec<u8> {
        let pixels = vec![90u8; (width * height * 3) as usize];
        encode_jpeg(&pixels, width, height, 90).unwrap()
    }

    #[test]
    fn test_crop_frame_portrait() {
        let result = crop_frame(&jpeg(40, 100), (500, 1000), false, 0, &NullLogger).unwrap();
        assert_eq!((result.width, result.height), (40, 80));
    }

    #[test]
    fn test_crop_frame_landscape() {
        let result = crop_frame(&jpeg(90, 30), (500, 1000), false, 1, &NullLogger).unwrap();
        assert_eq!((result.width, result.height), (60, 30));
    }

    #[test]
    fn test_crop_frame_invalid_rotation() {
        let result = crop_frame(&jpeg(10, 10), (500, 1000), false, 7, &NullLogger);
        assert!(result.unwrap_err().contains("surface rotation"));
    }

    #[test]
    fn test_crop_frame_invalid_display() {
        let result = crop_frame(&jpeg(10, 10), (0, 0), false, 0, &NullLogger);
        assert!(result.is_err());
    }
}
