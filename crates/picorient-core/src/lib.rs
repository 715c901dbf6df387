//! picorient core - orientation correction for picked photos
//!
//! This crate reads the EXIF orientation of camera photos, rotates pixel
//! data upright, writes corrected JPEGs back to storage, and crops frames to
//! the aspect ratio of the display they were previewed on.
//!
//! # Module Structure
//!
//! - `decode` - Image decoding and EXIF orientation lookup
//! - `transform` - Quarter-turn rotation, mirroring and crop-to-aspect
//! - `encode` - JPEG encoding and file write-back
//! - `fixer` - [`PhotoFixer`], which ties the above to host collaborators
//! - `source`, `display`, `logging` - Collaborator traits
//! - `config` - [`FixerConfig`]

pub mod config;
pub mod decode;
pub mod display;
pub mod encode;
pub mod fixer;
pub mod logging;
pub mod source;
pub mod transform;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::FixerConfig;
pub use decode::{DecodedImage, Orientation, Rotation};
pub use display::{DisplayMetrics, FixedDisplay};
pub use fixer::{crop_to_aspect, rotate_upright, FixError, PhotoFixer};
pub use logging::{Logger, NullLogger, TracingLogger};
pub use source::{is_content_uri, ContentResolver};
pub use transform::{CropRegion, DeviceRotation, Transform};
