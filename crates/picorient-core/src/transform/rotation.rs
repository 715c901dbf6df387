//! Quarter-turn rotation and horizontal mirroring.
//!
//! Rotations are exact multiples of 90 degrees, so pixel values are copied
//! unchanged. The pixel work is done by `image::imageops`; [`Transform`]
//! only describes which of its operations to run.

use image::imageops;
use serde::{Deserialize, Serialize};

use crate::decode::{DecodeError, DecodedImage, Rotation};

/// A rotation followed by an optional horizontal mirror.
///
/// This is the affine map applied when correcting a photo: rotate by the
/// EXIF angle, then flip left-right for front-camera shots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Transform {
    /// Clockwise rotation, applied first.
    pub rotation: Rotation,
    /// Horizontal mirror (scale -1 on x), applied after the rotation.
    pub mirror: bool,
}

impl Transform {
    /// A rotation-only transform.
    pub fn rotate(rotation: Rotation) -> Self {
        Self {
            rotation,
            mirror: false,
        }
    }

    /// Returns a copy with the horizontal mirror switched on or off.
    pub fn mirrored(self, mirror: bool) -> Self {
        Self { mirror, ..self }
    }

    /// Check if applying this transform would leave pixels untouched.
    pub fn is_identity(&self) -> bool {
        self.rotation == Rotation::Deg0 && !self.mirror
    }

    /// Output dimensions for a source of `width x height`.
    pub fn output_dimensions(&self, width: u32, height: u32) -> (u32, u32) {
        if self.rotation.swaps_dimensions() {
            (height, width)
        } else {
            (width, height)
        }
    }
}

/// Rotate an image clockwise by a quarter-turn multiple.
///
/// Returns a new image; 90 and 270 degree rotations swap width and height.
/// The source is left untouched and can be dropped by the caller.
pub fn rotate(image: &DecodedImage, rotation: Rotation) -> Result<DecodedImage, DecodeError> {
    apply_transform(image, Transform::rotate(rotation))
}

/// Apply a rotation and optional mirror to an image.
///
/// # Errors
///
/// Returns `DecodeError::CorruptedFile` if the pixel buffer does not match
/// the image dimensions.
pub fn apply_transform(
    image: &DecodedImage,
    transform: Transform,
) -> Result<DecodedImage, DecodeError> {
    // Fast path: nothing to do
    if transform.is_identity() {
        return Ok(image.clone());
    }

    let rgb_image = image.rgb_image()?;
    let mut output = match transform.rotation {
        Rotation::Deg0 => rgb_image,
        Rotation::Deg90 => imageops::rotate90(&rgb_image),
        Rotation::Deg180 => imageops::rotate180(&rgb_image),
        Rotation::Deg270 => imageops::rotate270(&rgb_image),
    };

    if transform.mirror {
        imageops::flip_horizontal_in_place(&mut output);
    }

    Ok(DecodedImage::from_rgb_image(output))
}


// ============================================================================
// Property-Based Tests
// ============================================================================
