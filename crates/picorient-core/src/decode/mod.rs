//! Image decoding and orientation lookup.
//!
//! This module provides functionality for:
//! - Decoding JPEG (and PNG) images to RGB pixel data
//! - Shrinking decoded frames by an integer sample size
//! - Reading the EXIF orientation tag and mapping it to a rotation
//!
//! Decoding never applies the orientation tag. Callers read the rotation
//! separately and decide whether to turn the pixels.

mod jpeg;
mod resize;
mod types;

pub use jpeg::{
    decode_image, decode_sampled, get_orientation, read_orientation, read_orientation_from,
    read_rotation, read_rotation_from_path,
};
pub use resize::{downsample, resize, sampled_dimensions};
pub use types::{DecodeError, DecodedImage, Orientation, Rotation};
