//! Block pixelation via a lossy downscale/upscale cycle.

use image::imageops;

use super::buffer::PixelBuffer;
use super::options::PixelateOptions;
use crate::api::StyleError;

/// Pixelate with default options (800 px minimum width, 4 px blocks).
///
/// See [`pixelate_with`].
pub fn pixelate(image: PixelBuffer) -> Result<PixelBuffer, StyleError> {
    pixelate_with(image, &PixelateOptions::default())
}

/// Pixelate an image into soft blocks.
///
/// 1. If narrower than `min_width`, scale up to `min_width` wide with height
///    `round(height * min_width / width)`.
/// 2. If either side is not a multiple of `block_size`, crop the trailing
///    columns/rows (the top-left corner is kept).
/// 3. Shrink to `1 / block_size` in each dimension.
/// 4. Scale back up to the cropped size.
///
/// # Errors
///
/// - [`StyleError::InvalidOptions`] for a zero `block_size` or `min_width`
/// - [`StyleError::ImageTooLarge`] if the step 1 upscale would exceed
///   `max_pixels`; checked before anything is allocated
/// - [`StyleError::ImageTooSmall`] if, after step 1, a side is shorter than
///   one block
///
/// # Example
///
/// ```
/// use grunge_style::{pixelate, PixelBuffer, Srgb};
///
/// let photo = PixelBuffer::filled(403, 301, Srgb::from_u8(90, 140, 200)).unwrap();
/// let blocky = pixelate(photo).unwrap();
///
/// // 403 -> 800 wide, height round(301 * 800 / 403) = 598 -> both cropped to x4
/// assert_eq!(blocky.dimensions(), (800, 596));
/// ```
pub fn pixelate_with(
    image: PixelBuffer,
    options: &PixelateOptions,
) -> Result<PixelBuffer, StyleError> {
    options.validate()?;

    let block = options.block_size;
    let mut img = image.into_image();

    let (width, height) = img.dimensions();
    if width < options.min_width {
        let scaled_height = (height as f64 * options.min_width as f64 / width as f64).round();
        if options.min_width as f64 * scaled_height > options.max_pixels as f64 {
            return Err(StyleError::ImageTooLarge {
                width,
                height,
                max_pixels: options.max_pixels,
            });
        }
        let scaled_height = (scaled_height as u32).max(1);
        img = imageops::resize(&img, options.min_width, scaled_height, options.filter);
    }

    let (width, height) = img.dimensions();
    if width % block != 0 || height % block != 0 {
        let cropped_width = width - width % block;
        let cropped_height = height - height % block;
        if cropped_width == 0 || cropped_height == 0 {
            return Err(StyleError::ImageTooSmall { width, height });
        }
        img = imageops::crop_imm(&img, 0, 0, cropped_width, cropped_height).to_image();
    }

    let (width, height) = img.dimensions();
    let small = imageops::resize(&img, width / block, height / block, options.filter);
    let restored = imageops::resize(&small, width, height, options.filter);

    PixelBuffer::from_image(restored)
}
