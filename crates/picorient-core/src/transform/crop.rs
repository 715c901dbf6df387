//! Crop-to-aspect for camera frames.
//!
//! A captured frame rarely matches the screen it was previewed on. This
//! module trims the frame to the display's aspect ratio, keeping the crop
//! centered along the trimmed axis, and applies the orientation transform in
//! the same pass.
//!
//! # Ratio Convention
//!
//! The target ratio is always `display_height / display_width`. In portrait
//! device rotations it is compared against `image_height / image_width`; in
//! landscape rotations against `image_width / image_height`.

use image::imageops;
use serde::{Deserialize, Serialize};

use super::rotation::{apply_transform, Transform};
use crate::decode::{DecodeError, DecodedImage};

/// Physical rotation of the device when the photo was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DeviceRotation {
    #[default]
    Rotation0,
    Rotation90,
    Rotation180,
    Rotation270,
}

impl DeviceRotation {
    /// Build from a platform surface-rotation index (0, 1, 2, 3).
    pub fn from_surface_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(DeviceRotation::Rotation0),
            1 => Some(DeviceRotation::Rotation90),
            2 => Some(DeviceRotation::Rotation180),
            3 => Some(DeviceRotation::Rotation270),
            _ => None,
        }
    }

    /// Build from a rotation in degrees, normalized modulo 360.
    pub fn from_degrees(degrees: i32) -> Option<Self> {
        match degrees.rem_euclid(360) {
            0 => Some(DeviceRotation::Rotation0),
            90 => Some(DeviceRotation::Rotation90),
            180 => Some(DeviceRotation::Rotation180),
            270 => Some(DeviceRotation::Rotation270),
            _ => None,
        }
    }

    /// True for the upright and upside-down rotations.
    pub fn is_portrait(self) -> bool {
        matches!(self, DeviceRotation::Rotation0 | DeviceRotation::Rotation180)
    }
}

/// A rectangle in source pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRegion {
    /// The region covering a whole `width x height` image.
    pub fn full(width: u32, height: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    /// Trim the height to `clip`, centered vertically.
    fn centered_rows(width: u32, height: u32, clip: u32) -> Self {
        let clip = clip.clamp(1, height.max(1));
        Self {
            x: 0,
            y: (height - clip) >> 1,
            width,
            height: clip,
        }
    }

    /// Trim the width to `clip`, centered horizontally.
    fn centered_columns(width: u32, height: u32, clip: u32) -> Self {
        let clip = clip.clamp(1, width.max(1));
        Self {
            x: (width - clip) >> 1,
            y: 0,
            width: clip,
            height,
        }
    }
}

/// Compute the centered crop that matches `target_ratio`.
///
/// # Arguments
///
/// * `width`, `height` - Source image dimensions
/// * `target_ratio` - `display_height / display_width`
/// * `device_rotation` - Selects which image axis is compared to the ratio
///
/// Clipped sizes are truncated toward zero and offsets split the remainder
/// with a floor, so an odd difference leaves the extra pixel at the end.
pub fn compute_crop_region(
    width: u32,
    height: u32,
    target_ratio: f64,
    device_rotation: DeviceRotation,
) -> CropRegion {
    if width == 0 || height == 0 || !target_ratio.is_finite() || target_ratio <= 0.0 {
        return CropRegion::full(width, height);
    }

    let w = width as f64;
    let h = height as f64;

    if device_rotation.is_portrait() {
        if h / w > target_ratio {
            CropRegion::centered_rows(width, height, (w * target_ratio) as u32)
        } else {
            CropRegion::centered_columns(width, height, (h / target_ratio) as u32)
        }
    } else if w / h > target_ratio {
        CropRegion::centered_columns(width, height, (h * target_ratio) as u32)
    } else {
        CropRegion::centered_rows(width, height, (w / target_ratio) as u32)
    }
}

/// Copy a pixel region out of an image.
///
/// The region is clamped to the image bounds; the output is at least 1x1.
///
/// # Errors
///
/// Returns `DecodeError::CorruptedFile` if the pixel buffer does not match
/// the image dimensions.
pub fn crop(image: &DecodedImage, region: CropRegion) -> Result<DecodedImage, DecodeError> {
    if region == CropRegion::full(image.width, image.height) {
        return Ok(image.clone());
    }

    let px_left = region.x.min(image.width.saturating_sub(1));
    let px_top = region.y.min(image.height.saturating_sub(1));
    let px_right = (px_left + region.width).min(image.width);
    let px_bottom = (px_top + region.height).min(image.height);

    let out_width = px_right.saturating_sub(px_left).max(1);
    let out_height = px_bottom.saturating_sub(px_top).max(1);

    let rgb_image = image.rgb_image()?;
    let cropped =
        imageops::crop_imm(&rgb_image, px_left, px_top, out_width, out_height).to_image();

    Ok(DecodedImage::from_rgb_image(cropped))
}

/// Crop a region and apply a transform to it in one call.
pub fn crop_and_transform(
    image: &DecodedImage,
    region: CropRegion,
    transform: Transform,
) -> Result<DecodedImage, DecodeError> {
    let cropped = crop(image, region)?;
    if transform.is_identity() {
        return Ok(cropped);
    }
    apply_transform(&cropped, transform)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
