//! Opening image sources: filesystem paths and content URIs.
//!
//! A content URI (`content://...`) is not a file; it is opened through a
//! [`ContentResolver`] supplied by the host platform. Everything else is
//! treated as a filesystem path.

use std::io::{self, Read};
use std::path::Path;

use crate::decode::DecodeError;

/// Scheme prefix identifying a content URI.
pub const CONTENT_SCHEME: &str = "content://";

/// Opens content URIs on behalf of the library.
pub trait ContentResolver: Send + Sync {
    /// Open the resource behind `uri` for reading.
    fn open(&self, uri: &str) -> io::Result<Box<dyn Read>>;
}

/// Check whether `path` is a content URI rather than a filesystem path.
pub fn is_content_uri(path: &str) -> bool {
    path.starts_with(CONTENT_SCHEME)
}

/// Read every byte from a stream.
///
/// The stream is consumed and dropped before returning.
pub fn read_all<R: Read>(mut reader: R) -> Result<Vec<u8>, DecodeError> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| DecodeError::IoError(e.to_string()))?;
    Ok(bytes)
}

/// Read a filesystem file into memory.
pub fn read_file(path: &Path) -> Result<Vec<u8>, DecodeError> {
    std::fs::read(path).map_err(|e| DecodeError::IoError(format!("{}: {}", path.display(), e)))
}

/// Read a content URI through a resolver.
pub fn read_content(resolver: &dyn ContentResolver, uri: &str) -> Result<Vec<u8>, DecodeError> {
    let stream = resolver
        .open(uri)
        .map_err(|e| DecodeError::IoError(format!("{}: {}", uri, e)))?;
    read_all(stream)
}
