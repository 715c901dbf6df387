//! Image transformation operations: quarter-turn rotation, mirroring and
//! crop-to-aspect.
//!
//! # Transform Order
//!
//! When a region is cropped and transformed together, operations run in
//! this order:
//! 1. Crop (in source pixel coordinates)
//! 2. Rotation (clockwise, multiple of 90 degrees)
//! 3. Horizontal mirror
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner
//! - Crop regions are in whole pixels of the source image

mod crop;
mod rotation;

pub use crop::{compute_crop_region, crop, crop_and_transform, CropRegion, DeviceRotation};
pub use rotation::{apply_transform, rotate, Transform};
