//! Owned RGB pixel buffer passed between transforms.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{DynamicImage, ExtendedColorType, ImageEncoder, Rgb, RgbImage};

use crate::api::StyleError;
use crate::color::Srgb;

/// A non-empty 2D grid of 8-bit RGB pixels in row-major order.
///
/// Transforms take a `PixelBuffer` by value and hand a new one back, so a
/// buffer only ever has one owner.
///
/// # Example
///
/// ```
/// use grunge_style::{PixelBuffer, Srgb};
///
/// let buffer = PixelBuffer::filled(4, 2, Srgb::from_u8(10, 20, 30)).unwrap();
/// assert_eq!(buffer.dimensions(), (4, 2));
/// assert_eq!(buffer.get(3, 1).to_bytes(), [10, 20, 30]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    image: RgbImage,
}

impl PixelBuffer {
    /// Wrap an `RgbImage`.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::ImageTooSmall`] if either dimension is zero.
    pub fn from_image(image: RgbImage) -> Result<Self, StyleError> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(StyleError::ImageTooSmall { width, height });
        }
        Ok(Self { image })
    }

    /// Wrap an image already known to be non-empty.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that both dimensions are non-zero.
    pub(crate) fn from_image_unchecked(image: RgbImage) -> Self {
        debug_assert!(
            image.width() > 0 && image.height() > 0,
            "pixel buffer must be non-empty, got {}x{}",
            image.width(),
            image.height()
        );
        Self { image }
    }

    /// Convert any decoded image to 8-bit RGB.
    pub fn from_dynamic(image: DynamicImage) -> Result<Self, StyleError> {
        Self::from_image(image.into_rgb8())
    }

    /// Decode an encoded image (JPEG, PNG, ...) from memory.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::MalformedImage`] if the bytes cannot be decoded,
    /// or [`StyleError::ImageTooSmall`] if the decoded image is empty.
    pub fn decode(bytes: &[u8]) -> Result<Self, StyleError> {
        let image = image::load_from_memory(bytes).map_err(StyleError::MalformedImage)?;
        Self::from_dynamic(image)
    }

    /// Build a buffer from row-major pixels.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::DimensionMismatch`] if `pixels.len()` is not
    /// `width * height`, or [`StyleError::ImageTooSmall`] for a zero dimension.
    pub fn from_pixels(pixels: &[Srgb], width: u32, height: u32) -> Result<Self, StyleError> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(StyleError::DimensionMismatch {
                expected,
                actual: pixels.len(),
            });
        }

        let raw: Vec<u8> = pixels.iter().flat_map(|p| p.to_bytes()).collect();
        let image = RgbImage::from_raw(width, height, raw).ok_or(StyleError::DimensionMismatch {
            expected,
            actual: pixels.len(),
        })?;
        Self::from_image(image)
    }

    /// A buffer of a single color.
    pub fn filled(width: u32, height: u32, color: Srgb) -> Result<Self, StyleError> {
        Self::from_image(RgbImage::from_pixel(width, height, Rgb(color.to_bytes())))
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// `(width, height)` in pixels.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Srgb {
        Srgb::from_bytes(self.image.get_pixel(x, y).0)
    }

    /// Overwrite the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn put(&mut self, x: u32, y: u32, color: Srgb) {
        self.image.put_pixel(x, y, Rgb(color.to_bytes()));
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> Vec<Srgb> {
        self.image.pixels().map(|p| Srgb::from_bytes(p.0)).collect()
    }

    /// Borrow the underlying image.
    #[inline]
    pub fn as_image(&self) -> &RgbImage {
        &self.image
    }

    /// Take the underlying image.
    #[inline]
    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// Encode as JPEG at `quality` (1..=100).
    pub fn encode_jpeg(&self, quality: u8) -> Result<Vec<u8>, StyleError> {
        let mut bytes = Vec::new();
        let encoder = JpegEncoder::new_with_quality(&mut bytes, quality.clamp(1, 100));
        encoder
            .write_image(
                self.image.as_raw(),
                self.width(),
                self.height(),
                ExtendedColorType::Rgb8,
            )
            .map_err(StyleError::Encode)?;
        Ok(bytes)
    }

    /// Encode as PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>, StyleError> {
        let mut cursor = Cursor::new(Vec::new());
        let encoder = PngEncoder::new(&mut cursor);
        encoder
            .write_image(
                self.image.as_raw(),
                self.width(),
                self.height(),
                ExtendedColorType::Rgb8,
            )
            .map_err(StyleError::Encode)?;
        Ok(cursor.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_dimensions_rejected() {
        let err = PixelBuffer::from_image(RgbImage::new(0, 5)).unwrap_err();
        assert!(matches!(
            err,
            StyleError::ImageTooSmall {
                width: 0,
                height: 5
            }
        ));
    }

    #[test]
    fn test_from_pixels_checks_length() {
        let pixels = vec![Srgb::from_u8(1, 2, 3); 5];
        let err = PixelBuffer::from_pixels(&pixels, 2, 3).unwrap_err();
        assert!(matches!(
            err,
            StyleError::DimensionMismatch {
                expected: 6,
                actual: 5
            }
        ));
    }

    #[test]
    fn test_from_pixels_row_major() {
        let pixels = vec![
            Srgb::from_u8(1, 0, 0),
            Srgb::from_u8(2, 0, 0),
            Srgb::from_u8(3, 0, 0),
            Srgb::from_u8(4, 0, 0),
            Srgb::from_u8(5, 0, 0),
            Srgb::from_u8(6, 0, 0),
        ];
        let buffer = PixelBuffer::from_pixels(&pixels, 3, 2).unwrap();

        assert_eq!(buffer.get(2, 0).to_bytes(), [3, 0, 0]);
        assert_eq!(buffer.get(0, 1).to_bytes(), [4, 0, 0]);
        assert_eq!(buffer.pixels(), pixels);
    }

    #[test]
    fn test_put_overwrites_pixel() {
        let mut buffer = PixelBuffer::filled(2, 2, Srgb::from_u8(0, 0, 0)).unwrap();
        buffer.put(1, 1, Srgb::from_u8(9, 8, 7));
        assert_eq!(buffer.get(1, 1).to_bytes(), [9, 8, 7]);
        assert_eq!(buffer.get(0, 0).to_bytes(), [0, 0, 0]);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let err = PixelBuffer::decode(b"<html>not found</html>").unwrap_err();
        assert!(matches!(err, StyleError::MalformedImage(_)));
    }

    #[test]
    fn test_png_encode_decode_preserves_pixels() {
        let mut buffer = PixelBuffer::filled(3, 2, Srgb::from_u8(200, 100, 50)).unwrap();
        buffer.put(0, 0, Srgb::from_u8(1, 2, 3));

        let decoded = PixelBuffer::decode(&buffer.encode_png().unwrap()).unwrap();
        assert_eq!(decoded, buffer);
    }

    #[test]
    fn test_jpeg_encode_produces_decodable_image() {
        let buffer = PixelBuffer::filled(16, 8, Srgb::from_u8(120, 200, 90)).unwrap();
        let bytes = buffer.encode_jpeg(90).unwrap();

        // JPEG SOI marker
        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
        let decoded = PixelBuffer::decode(&bytes).unwrap();
        assert_eq!(decoded.dimensions(), (16, 8));
    }
}
