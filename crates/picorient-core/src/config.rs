//! Configuration for orientation correction.

use serde::{Deserialize, Serialize};

/// JPEG quality used when a corrected image is written back.
pub const DEFAULT_JPEG_QUALITY: u8 = 80;

/// Downsample factor applied when decoding a photo for rotation.
pub const DEFAULT_SAMPLE_SIZE: u32 = 2;

/// Settings shared by all correction operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FixerConfig {
    /// JPEG quality (1-100) for rewritten files. Out-of-range values are
    /// clamped at encode time.
    pub jpeg_quality: u8,
    /// Each side of the image is divided by this factor before rotating.
    /// Values below 1 behave as 1 (full resolution).
    pub sample_size: u32,
}

impl Default for FixerConfig {
    fn default() -> Self {
        Self {
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            sample_size: DEFAULT_SAMPLE_SIZE,
        }
    }
}

impl FixerConfig {
    /// Create a config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sample size with the lower bound applied.
    pub fn effective_sample_size(&self) -> u32 {
        self.sample_size.max(1)
    }
}
