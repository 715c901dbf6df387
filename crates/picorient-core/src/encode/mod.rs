//! Image encoding for write-back.
//!
//! This module provides functionality for:
//! - Encoding RGB images to JPEG with a configurable quality
//! - Overwriting a file with the encoded result

mod jpeg;

pub use jpeg::{encode_image, encode_jpeg, save_jpeg, write_bytes, EncodeError};
