//! Fixtures shared by unit tests.

use std::sync::Mutex;

use crate::decode::DecodedImage;
use crate::encode::encode_image;
use crate::logging::Logger;

/// An image where every pixel differs from its neighbours.
pub fn gradient_image(width: u32, height: u32) -> DecodedImage {
    let mut pixels = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            pixels.push((x * 255 / width.max(1)) as u8);
            pixels.push((y * 255 / height.max(1)) as u8);
            pixels.push(((y * width + x) % 256) as u8);
        }
    }
    DecodedImage::new(width, height, pixels)
}

/// A JPEG without any EXIF block.
pub fn sample_jpeg(width: u32, height: u32) -> Vec<u8> {
    encode_image(&gradient_image(width, height), 90).unwrap()
}

/// A JPEG whose EXIF block holds only the given orientation tag.
pub fn jpeg_with_orientation(width: u32, height: u32, orientation: u16) -> Vec<u8> {
    let jpeg = sample_jpeg(width, height);
    let [hi, lo] = orientation.to_be_bytes();

    #[rustfmt::skip]
    let app1 = [
        0xFF, 0xE1, 0x00, 0x22,                         // APP1, length 34
        b'E', b'x', b'i', b'f', 0x00, 0x00,             // Exif header
        b'M', b'M', 0x00, 0x2A, 0x00, 0x00, 0x00, 0x08, // big-endian TIFF, IFD0 at 8
        0x00, 0x01,                                     // one entry
        0x01, 0x12, 0x00, 0x03, 0x00, 0x00, 0x00, 0x01, // Orientation, SHORT, count 1
        hi, lo, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,                         // no next IFD
    ];

    // Insert right after SOI
    let mut out = Vec::with_capacity(jpeg.len() + app1.len());
    out.extend_from_slice(&jpeg[..2]);
    out.extend_from_slice(&app1);
    out.extend_from_slice(&jpeg[2..]);
    out
}

/// Keeps every message for later inspection.
#[derive(Debug, Default)]
pub struct RecordingLogger {
    debugs: Mutex<Vec<String>>,
    warnings: Mutex<Vec<String>>,
}

impl RecordingLogger {
    pub fn debugs(&self) -> Vec<String> {
        self.debugs.lock().unwrap().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().unwrap().clone()
    }
}

impl Logger for RecordingLogger {
    fn debug(&self, operation: &'static str, message: &str) {
        self.debugs
            .lock()
            .unwrap()
            .push(format!("{}: {}", operation, message));
    }

    fn warn(&self, operation: &'static str, message: &str) {
        self.warnings
            .lock()
            .unwrap()
            .push(format!("{}: {}", operation, message));
    }
}

#[test]
fn test_fixture_carries_orientation() {
    let bytes = jpeg_with_orientation(4, 2, 6);
    let orientation = crate::decode::read_orientation(&bytes).unwrap();
    assert_eq!(orientation, crate::decode::Orientation::Rotate90CW);
}
