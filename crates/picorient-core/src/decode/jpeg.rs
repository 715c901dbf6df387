//! Image decoding and EXIF orientation lookup.

use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Seek};
use std::path::Path;

use exif::{In, Reader, Tag};
use image::ImageReader;

use super::resize::downsample;
use super::{DecodeError, DecodedImage, Orientation, Rotation};

/// Decode image bytes at full resolution.
///
/// The EXIF orientation is not applied; pixel data comes back exactly as
/// stored. Use [`read_rotation`] to find out how it should be turned.
///
/// # Errors
///
/// Returns `DecodeError::CorruptedFile` if the bytes cannot be decoded.
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    let cursor = Cursor::new(bytes);
    let reader = ImageReader::new(cursor)
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    Ok(DecodedImage::from_rgb_image(img.into_rgb8()))
}

/// Decode image bytes, then shrink each side by `sample_size`.
///
/// The full-resolution frame is decoded first and averaged down afterwards,
/// so peak memory is that of a full decode. The smaller result keeps the
/// rotate and re-encode steps cheap. Sides are rounded up, so odd
/// dimensions never lose their last row or column.
pub fn decode_sampled(bytes: &[u8], sample_size: u32) -> Result<DecodedImage, DecodeError> {
    let image = decode_image(bytes)?;
    downsample(&image, sample_size)
}

/// Read the EXIF orientation tag from image bytes.
///
/// A container without an EXIF block, or an EXIF block without an
/// orientation tag, reads as `Orientation::Normal`.
///
/// # Errors
///
/// Returns `DecodeError::ExifError` if the container is not recognized or
/// its EXIF block is malformed.
pub fn read_orientation(bytes: &[u8]) -> Result<Orientation, DecodeError> {
    read_orientation_from(&mut Cursor::new(bytes))
}

/// Read the EXIF orientation tag from a seekable stream.
///
/// Only the container headers and the EXIF block are read, not the
/// compressed image data.
pub fn read_orientation_from<R: BufRead + Seek>(
    reader: &mut R,
) -> Result<Orientation, DecodeError> {
    match Reader::new().read_from_container(reader) {
        Ok(exif) => Ok(exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .map(Orientation::from)
            .unwrap_or_default()),
        Err(exif::Error::NotFound(_)) => Ok(Orientation::Normal),
        Err(e) => Err(DecodeError::ExifError(e.to_string())),
    }
}

/// Read the clockwise rotation needed to display the image upright.
pub fn read_rotation(bytes: &[u8]) -> Result<Rotation, DecodeError> {
    read_orientation(bytes).map(Rotation::from)
}

/// Read the rotation of an image file without loading it into memory.
///
/// # Errors
///
/// Returns `DecodeError::IoError` if the file cannot be opened, and
/// `DecodeError::ExifError` as [`read_orientation`] does.
pub fn read_rotation_from_path(path: &Path) -> Result<Rotation, DecodeError> {
    let file = File::open(path)
        .map_err(|e| DecodeError::IoError(format!("{}: {}", path.display(), e)))?;
    let mut reader = BufReader::new(file);
    read_orientation_from(&mut reader).map(Rotation::from)
}

/// Extract the EXIF orientation, treating any failure as `Normal`.
pub fn get_orientation(bytes: &[u8]) -> Orientation {
    read_orientation(bytes).unwrap_or_default()
}
