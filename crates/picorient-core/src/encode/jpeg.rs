//! JPEG encoding and write-back.
//!
//! Corrected images are stored as JPEG at a fixed quality. The encoder never
//! writes an EXIF block, so a rewritten file always reads back as upright.

use std::fs::File;
use std::io::{BufWriter, Cursor, Write};
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use thiserror::Error;

use crate::decode::DecodedImage;

/// Errors that can occur during JPEG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// JPEG encoding failed
    #[error("JPEG encoding failed: {0}")]
    EncodingFailed(String),

    /// Writing the encoded bytes failed
    #[error("I/O error: {0}")]
    IoError(String),
}

/// Encode RGB pixel data to JPEG bytes.
///
/// # Arguments
///
/// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `quality` - JPEG quality (1-100, where 100 is highest quality)
pub fn encode_jpeg(
    pixels: &[u8],
    width: u32,
    height: u32,
    quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected_len = (width as usize) * (height as usize) * 3;
    if pixels.len() != expected_len {
        return Err(EncodeError::InvalidPixelData {
            expected: expected_len,
            actual: pixels.len(),
        });
    }

    // Clamp quality to valid range (1-100)
    let quality = quality.clamp(1, 100);

    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);

    encoder
        .write_image(pixels, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

/// Encode a decoded image to JPEG bytes.
pub fn encode_image(image: &DecodedImage, quality: u8) -> Result<Vec<u8>, EncodeError> {
    encode_jpeg(&image.pixels, image.width, image.height, quality)
}

/// Encode an image and overwrite `path` with the result.
///
/// Encoding happens before the file is opened, so a failed encode leaves the
/// existing file intact. The writer is flushed explicitly; the handle is
/// closed when it goes out of scope on every path.
pub fn save_jpeg(image: &DecodedImage, path: &Path, quality: u8) -> Result<(), EncodeError> {
    let bytes = encode_image(image, quality)?;
    write_bytes(path, &bytes)
}

/// Overwrite `path` with already-encoded bytes.
pub fn write_bytes(path: &Path, bytes: &[u8]) -> Result<(), EncodeError> {
    let file = File::create(path).map_err(|e| EncodeError::IoError(e.to_string()))?;
    let mut writer = BufWriter::new(file);

    writer
        .write_all(bytes)
        .and_then(|()| writer.flush())
        .map_err(|e| EncodeError::IoError(e.to_string()))
}


// ============================================================================
// Property-Based Tests
// ============================================================================
