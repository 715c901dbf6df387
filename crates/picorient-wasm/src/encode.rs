//! Image encoding WASM bindings.

use crate::types::JsDecodedImage;
use picorient_core::encode;
use wasm_bindgen::prelude::*;

/// Encode a JsDecodedImage to JPEG bytes.
///
/// # Arguments
///
/// * `image` - The image to encode, e.g. the result of `crop_to_display`
/// * `quality` - JPEG quality (1-100); picorient writes corrected files at 80
#[wasm_bindgen]
pub fn encode_jpeg(image: &JsDecodedImage, quality: u8) -> Result<Vec<u8>, JsValue> {
    encode::encode_jpeg(image.pixel_slice(), image.width(), image.height(), quality)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_from_image_creates_valid_jpeg() {
        let img = JsDecodedImage::new(10, 10, vec![128u8; 10 * 10 * 3]);

        // JsValue results only work on wasm32, so exercise the core call
        let jpeg = encode::encode_jpeg(img.pixel_slice(), img.width(), img.height(), 80).unwrap();
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
    }
}
