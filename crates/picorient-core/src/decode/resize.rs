//! Downsampling applied after decoding.
//!
//! All functions return new `DecodedImage` instances without modifying the input.

use image::imageops::{self, FilterType};

use super::{DecodeError, DecodedImage};

/// Resize an image to exact dimensions with a bilinear filter.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if a target dimension is zero.
pub fn resize(image: &DecodedImage, width: u32, height: u32) -> Result<DecodedImage, DecodeError> {
    if width == 0 || height == 0 {
        return Err(DecodeError::InvalidFormat);
    }

    // Fast path: if dimensions match, just clone
    if image.width == width && image.height == height {
        return Ok(image.clone());
    }

    let rgb_image = image.rgb_image()?;
    let resized = imageops::resize(&rgb_image, width, height, FilterType::Triangle);

    Ok(DecodedImage::from_rgb_image(resized))
}

/// Shrink both sides of an image by an integer factor.
///
/// Uses `imageops::thumbnail`, which averages each source block into one
/// output pixel. Factors of 0 and 1 leave the image unchanged.
pub fn downsample(image: &DecodedImage, factor: u32) -> Result<DecodedImage, DecodeError> {
    let (width, height) = sampled_dimensions(image.width, image.height, factor);
    if image.width == width && image.height == height {
        return Ok(image.clone());
    }

    let rgb_image = image.rgb_image()?;
    let shrunk = imageops::thumbnail(&rgb_image, width, height);

    Ok(DecodedImage::from_rgb_image(shrunk))
}

/// Dimensions after shrinking by `factor`, rounding each side up.
pub fn sampled_dimensions(width: u32, height: u32, factor: u32) -> (u32, u32) {
    let factor = factor.max(1);
    (width.div_ceil(factor).max(1), height.div_ceil(factor).max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_image(width: u32, height: u32) -> DecodedImage {
        let pixels = vec![128u8; (width * height * 3) as usize];
        DecodedImage::new(width, height, pixels)
    }

    #[test]
    fn test_resize_exact() {
        let img = create_test_image(100, 100);
        let resized = resize(&img, 50, 50).unwrap();
        assert_eq!(resized.width, 50);
        assert_eq!(resized.height, 50);
        assert_eq!(resized.pixels.len(), 50 * 50 * 3);
    }

    #[test]
    fn test_resize_same_size() {
        let img = create_test_image(100, 100);
        let resized = resize(&img, 100, 100).unwrap();
        assert_eq!(resized, img);
    }

    #[test]
    fn test_resize_zero_dimension() {
        let img = create_test_image(100, 100);
        assert!(resize(&img, 0, 50).is_err());
        assert!(resize(&img, 50, 0).is_err());
    }

    #[test]
    fn test_downsample_by_two() {
        let img = create_test_image(64, 48);
        let small = downsample(&img, 2).unwrap();
        assert_eq!((small.width, small.height), (32, 24));
        assert_eq!(small.pixels.len(), 32 * 24 * 3);
    }

    #[test]
    fn test_downsample_odd_sides_round_up() {
        let img = create_test_image(9, 5);
        let small = downsample(&img, 2).unwrap();
        assert_eq!((small.width, small.height), (5, 3));
    }

    #[test]
    fn test_downsample_averages_blocks() {
        // Left half black, right half white: averaging keeps the split sharp
        let mut pixels = Vec::with_capacity(4 * 2 * 3);
        for _ in 0..2 {
            pixels.extend_from_slice(&[0, 0, 0, 0, 0, 0, 255, 255, 255, 255, 255, 255]);
        }
        let img = DecodedImage::new(4, 2, pixels);

        let small = downsample(&img, 2).unwrap();
        assert_eq!((small.width, small.height), (2, 1));
        assert_eq!(small.pixel(0, 0), [0, 0, 0]);
        assert_eq!(small.pixel(1, 0), [255, 255, 255]);
    }

    #[test]
    fn test_downsample_factor_zero_is_identity() {
        let img = create_test_image(7, 3);
        let same = downsample(&img, 0).unwrap();
        assert_eq!(same, img);
    }

    #[test]
    fn test_sampled_dimensions() {
        assert_eq!(sampled_dimensions(4000, 3000, 2), (2000, 1500));
        assert_eq!(sampled_dimensions(4001, 3001, 2), (2001, 1501));
        assert_eq!(sampled_dimensions(1, 1, 4), (1, 1));
        assert_eq!(sampled_dimensions(10, 10, 1), (10, 10));
    }
}
