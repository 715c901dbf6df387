//! Orientation correction for picked and captured photos.
//!
//! [`PhotoFixer`] ties the decode, transform and encode modules to the host's
//! collaborators (content resolver, display metrics, logger).
//!
//! # Error Policy
//!
//! Every operation comes in two flavors:
//! - `try_*` methods return a [`FixError`] and let the caller decide whether
//!   a failure matters.
//! - The plain methods never fail: they log through the injected [`Logger`]
//!   and fall back to a safe default (no rotation, no write).
//!
//! `crop_to_display` has no silent flavor; a photo that cannot be decoded
//! has nothing to crop.

use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

use crate::config::FixerConfig;
use crate::decode::{
    decode_image, decode_sampled, read_rotation, read_rotation_from_path, DecodeError,
    DecodedImage, Rotation,
};
use crate::display::{display_ratio, DisplayMetrics};
use crate::encode::{encode_image, save_jpeg, write_bytes, EncodeError};
use crate::logging::{Logger, TracingLogger};
use crate::source::{is_content_uri, read_all, read_content, read_file, ContentResolver};
use crate::transform::{
    compute_crop_region, crop_and_transform, rotate, DeviceRotation, Transform,
};

/// Errors surfaced by the `try_*` operations.
#[derive(Debug, Error)]
pub enum FixError {
    /// Reading, parsing or decoding the source failed.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Encoding or writing the corrected image failed.
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// The path is a content URI, which cannot be overwritten in place.
    #[error("Content URI cannot be rewritten in place: {0}")]
    ContentUriNotWritable(String),

    /// The path is a content URI but no resolver was configured.
    #[error("No content resolver configured for {0}")]
    NoContentResolver(String),

    /// The display reported a zero dimension.
    #[error("Invalid display metrics: {width}x{height}")]
    InvalidDisplayMetrics { width: u32, height: u32 },
}

/// Rotate JPEG bytes upright according to their EXIF orientation.
///
/// Returns `Ok(None)` when the photo is already upright. Otherwise the image
/// is decoded at `1 / sample_size` resolution, rotated, and re-encoded at
/// the configured quality. The result carries no EXIF block.
pub fn rotate_upright(bytes: &[u8], config: &FixerConfig) -> Result<Option<Vec<u8>>, FixError> {
    let rotation = read_rotation(bytes)?;
    if rotation == Rotation::Deg0 {
        return Ok(None);
    }

    let decoded = decode_sampled(bytes, config.effective_sample_size())?;
    let upright = rotate(&decoded, rotation)?;
    drop(decoded);

    Ok(Some(encode_image(&upright, config.jpeg_quality)?))
}

/// Crop image bytes to a display's aspect ratio and orient the result.
///
/// The rotation comes from the EXIF tag of `bytes`; front-camera shots are
/// additionally mirrored left-right. See [`compute_crop_region`] for how the
/// crop is chosen.
///
/// # Errors
///
/// Fails if the display reports a zero dimension or the bytes cannot be
/// decoded. An unreadable EXIF block is logged and treated as upright.
pub fn crop_to_aspect(
    bytes: &[u8],
    display_size: (u32, u32),
    is_front_camera: bool,
    device_rotation: DeviceRotation,
    logger: &dyn Logger,
) -> Result<DecodedImage, FixError> {
    let (display_width, display_height) = display_size;
    let target_ratio =
        display_ratio(display_width, display_height).ok_or(FixError::InvalidDisplayMetrics {
            width: display_width,
            height: display_height,
        })?;

    let image = decode_image(bytes)?;
    // A decodable photo with a broken EXIF block is cropped as stored
    let rotation = read_rotation(bytes).unwrap_or_else(|e| {
        logger.warn("crop_to_display", &e.to_string());
        Rotation::Deg0
    });
    let transform = Transform::rotate(rotation).mirrored(is_front_camera);

    logger.debug(
        "crop_to_display",
        &format!(
            "device rotation {:?}, image {}x{}, display {}x{}, degree {}",
            device_rotation,
            image.width,
            image.height,
            display_width,
            display_height,
            rotation.degrees()
        ),
    );

    let region = compute_crop_region(image.width, image.height, target_ratio, device_rotation);
    Ok(crop_and_transform(&image, region, transform)?)
}

/// Corrects photo orientation on behalf of an image picker.
pub struct PhotoFixer {
    config: FixerConfig,
    display: Arc<dyn DisplayMetrics>,
    logger: Arc<dyn Logger>,
    resolver: Option<Arc<dyn ContentResolver>>,
}

impl PhotoFixer {
    /// Create a fixer with default config, logging through `tracing`, and
    /// no content resolver.
    pub fn new(display: Arc<dyn DisplayMetrics>) -> Self {
        Self {
            config: FixerConfig::default(),
            display,
            logger: Arc::new(TracingLogger),
            resolver: None,
        }
    }

    pub fn with_config(mut self, config: FixerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn with_content_resolver(mut self, resolver: Arc<dyn ContentResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    pub fn config(&self) -> &FixerConfig {
        &self.config
    }

    /// Read all bytes of a path or content URI.
    fn read_source(&self, path: &str) -> Result<Vec<u8>, FixError> {
        if is_content_uri(path) {
            let resolver = self
                .resolver
                .as_deref()
                .ok_or_else(|| FixError::NoContentResolver(path.to_string()))?;
            return Ok(read_content(resolver, path)?);
        }
        Ok(read_file(Path::new(path))?)
    }

    /// Read the rotation recorded for a file or content URI.
    ///
    /// Files are read through a buffered handle up to the EXIF block only;
    /// content streams cannot seek and are read whole.
    pub fn try_read_degree(&self, path: &str) -> Result<Rotation, FixError> {
        if !is_content_uri(path) {
            return Ok(read_rotation_from_path(Path::new(path))?);
        }
        let bytes = self.read_source(path)?;
        Ok(read_rotation(&bytes)?)
    }

    /// Read the rotation recorded for a file or content URI, or `Deg0` on failure.
    pub fn read_degree(&self, path: &str) -> Rotation {
        self.try_read_degree(path).unwrap_or_else(|e| {
            self.logger.warn("read_degree", &e.to_string());
            Rotation::Deg0
        })
    }

    /// Read the rotation recorded in an open stream.
    pub fn try_read_degree_from_reader<R: Read>(&self, reader: R) -> Result<Rotation, FixError> {
        let bytes = read_all(reader)?;
        Ok(read_rotation(&bytes)?)
    }

    /// Read the rotation recorded in an open stream, or `Deg0` on failure.
    pub fn read_degree_from_reader<R: Read>(&self, reader: R) -> Rotation {
        self.try_read_degree_from_reader(reader).unwrap_or_else(|e| {
            self.logger.warn("read_degree", &e.to_string());
            Rotation::Deg0
        })
    }

    /// Encode `image` and overwrite `path`.
    pub fn try_save(&self, image: &DecodedImage, path: &Path) -> Result<(), FixError> {
        Ok(save_jpeg(image, path, self.config.jpeg_quality)?)
    }

    /// Encode `image` and overwrite `path`, logging any failure.
    pub fn save(&self, image: &DecodedImage, path: &Path) {
        if let Err(e) = self.try_save(image, path) {
            self.logger.warn("save", &e.to_string());
        }
    }

    /// Rewrite a camera photo upright if its EXIF tag says it is rotated.
    ///
    /// Returns `Ok(true)` if the file was rewritten, `Ok(false)` if nothing
    /// needed doing. With `should_fix` false the file is never opened.
    pub fn try_fix_rotation_if_needed(
        &self,
        path: &str,
        should_fix: bool,
    ) -> Result<bool, FixError> {
        if !should_fix {
            return Ok(false);
        }
        if is_content_uri(path) {
            return Err(FixError::ContentUriNotWritable(path.to_string()));
        }

        let bytes = read_file(Path::new(path))?;
        match rotate_upright(&bytes, &self.config)? {
            Some(upright) => {
                write_bytes(Path::new(path), &upright)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Best-effort variant of [`try_fix_rotation_if_needed`](Self::try_fix_rotation_if_needed).
    pub fn fix_rotation_if_needed(&self, path: &str, should_fix: bool) {
        if let Err(e) = self.try_fix_rotation_if_needed(path, should_fix) {
            self.logger.warn("fix_rotation", &e.to_string());
        }
    }

    /// Crop a photo to the current display's aspect ratio.
    ///
    /// The result is rotated per the EXIF tag and mirrored for front-camera
    /// shots. The file itself is not modified.
    pub fn crop_to_display(
        &self,
        path: &str,
        is_front_camera: bool,
        device_rotation: DeviceRotation,
    ) -> Result<DecodedImage, FixError> {
        let bytes = self.read_source(path)?;
        crop_to_aspect(
            &bytes,
            self.display.display_size(),
            is_front_camera,
            device_rotation,
            self.logger.as_ref(),
        )
    }
}
