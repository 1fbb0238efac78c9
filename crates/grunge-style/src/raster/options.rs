//! Pixelation options and configuration.

use image::imageops::FilterType;

use crate::api::StyleError;

/// Default minimum width; narrower images are scaled up to it first.
pub const DEFAULT_MIN_WIDTH: u32 = 800;

/// Default pixelation block edge in pixels.
pub const DEFAULT_BLOCK_SIZE: u32 = 4;

/// Default cap on the pixel count of an upscaled image (800 x 40000).
pub const DEFAULT_MAX_PIXELS: u64 = 32_000_000;

/// Configuration for [`pixelate_with`](super::pixelate_with).
///
/// # Defaults
///
/// - Minimum width: 800
/// - Block size: 4 (down to a quarter, then back up)
/// - Filter: triangle (bilinear) for every resampling step
/// - Max pixels: 32,000,000 after upscaling
///
/// # Example
///
/// ```
/// use grunge_style::PixelateOptions;
///
/// let options = PixelateOptions::new()
///     .min_width(1024)
///     .block_size(8);
///
/// assert_eq!(options.min_width, 1024);
/// assert_eq!(options.block_size, 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelateOptions {
    /// Images narrower than this are scaled up (aspect preserved).
    pub min_width: u32,

    /// Edge length of one pixelation block.
    ///
    /// The image is cropped to a multiple of this, shrunk by this factor and
    /// scaled back up.
    pub block_size: u32,

    /// Resampling filter used for all three resize steps.
    pub filter: FilterType,

    /// Largest `width * height` the upscale to `min_width` may produce.
    ///
    /// Very narrow, tall inputs would otherwise blow up to enormous sizes.
    pub max_pixels: u64,
}

impl Default for PixelateOptions {
    fn default() -> Self {
        Self {
            min_width: DEFAULT_MIN_WIDTH,
            block_size: DEFAULT_BLOCK_SIZE,
            filter: FilterType::Triangle,
            max_pixels: DEFAULT_MAX_PIXELS,
        }
    }
}

impl PixelateOptions {
    /// Create new options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum width.
    #[inline]
    pub fn min_width(mut self, width: u32) -> Self {
        self.min_width = width;
        self
    }

    /// Set the block size.
    #[inline]
    pub fn block_size(mut self, size: u32) -> Self {
        self.block_size = size;
        self
    }

    /// Set the resampling filter.
    #[inline]
    pub fn filter(mut self, filter: FilterType) -> Self {
        self.filter = filter;
        self
    }

    /// Set the upscale pixel cap.
    #[inline]
    pub fn max_pixels(mut self, pixels: u64) -> Self {
        self.max_pixels = pixels;
        self
    }

    /// Check that every option is in range.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::InvalidOptions`] for a zero `block_size`,
    /// `min_width` or `max_pixels`.
    pub fn validate(&self) -> Result<(), StyleError> {
        if self.block_size == 0 {
            return Err(StyleError::InvalidOptions(
                "block_size must be at least 1".to_string(),
            ));
        }
        if self.min_width == 0 {
            return Err(StyleError::InvalidOptions(
                "min_width must be at least 1".to_string(),
            ));
        }
        if self.max_pixels == 0 {
            return Err(StyleError::InvalidOptions(
                "max_pixels must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
