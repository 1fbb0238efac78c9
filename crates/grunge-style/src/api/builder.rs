//! Stylizer builder -- the primary ergonomic entry point for the crate.
//!
//! [`Stylizer`] wraps the pixelate → pastelize pipeline with fluent
//! configuration of both steps.

use image::imageops::FilterType;
use rand::Rng;

use super::error::StyleError;
use crate::palette::PaletteFactory;
use crate::raster::{pastelize_with_factory, pixelate_with, PixelBuffer, PixelateOptions};

/// High-level stylization builder.
///
/// # Design
///
/// - Configuration methods consume and return `self` (standard builder pattern)
/// - [`stylize()`](Self::stylize) takes `&self` so the builder is **reusable**
///   across images; the random source is passed per call
///
/// # Example
///
/// ```
/// use grunge_style::{PixelBuffer, Srgb, Stylizer};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let stylizer = Stylizer::new().min_width(64).block_size(8);
/// let mut rng = StdRng::seed_from_u64(5);
///
/// let photo = PixelBuffer::filled(50, 30, Srgb::from_u8(20, 90, 160)).unwrap();
/// let styled = stylizer.stylize(photo, &mut rng).unwrap();
///
/// // 50x30 -> 64x38 -> cropped to 64x32
/// assert_eq!(styled.dimensions(), (64, 32));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Stylizer {
    pixelate: PixelateOptions,
    factory: PaletteFactory,
}

impl Stylizer {
    /// Create a stylizer with default options and the six built-in hue pools.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum width before pixelation.
    #[inline]
    pub fn min_width(mut self, width: u32) -> Self {
        self.pixelate = self.pixelate.min_width(width);
        self
    }

    /// Set the pixelation block size.
    #[inline]
    pub fn block_size(mut self, size: u32) -> Self {
        self.pixelate = self.pixelate.block_size(size);
        self
    }

    /// Set the resampling filter for pixelation.
    #[inline]
    pub fn filter(mut self, filter: FilterType) -> Self {
        self.pixelate = self.pixelate.filter(filter);
        self
    }

    /// Set the cap on pixels produced by the upscale step.
    #[inline]
    pub fn max_pixels(mut self, pixels: u64) -> Self {
        self.pixelate = self.pixelate.max_pixels(pixels);
        self
    }

    /// Replace all pixelation options at once.
    #[inline]
    pub fn pixelate_options(mut self, options: PixelateOptions) -> Self {
        self.pixelate = options;
        self
    }

    /// Use a custom palette factory for pastelization.
    #[inline]
    pub fn factory(mut self, factory: PaletteFactory) -> Self {
        self.factory = factory;
        self
    }

    /// Check the pixelation options without touching an image.
    pub fn validate(&self) -> Result<(), StyleError> {
        self.pixelate.validate()
    }

    /// The palette factory in use.
    pub fn palette_factory(&self) -> &PaletteFactory {
        &self.factory
    }

    /// Run only the pixelation step.
    pub fn pixelate(&self, image: PixelBuffer) -> Result<PixelBuffer, StyleError> {
        pixelate_with(image, &self.pixelate)
    }

    /// Run only the pastelization step.
    pub fn pastelize<R: Rng + ?Sized>(
        &self,
        image: PixelBuffer,
        rng: &mut R,
    ) -> Result<PixelBuffer, StyleError> {
        pastelize_with_factory(image, &self.factory, rng)
    }

    /// Pixelate, then pastelize with a freshly drawn palette.
    pub fn stylize<R: Rng + ?Sized>(
        &self,
        image: PixelBuffer,
        rng: &mut R,
    ) -> Result<PixelBuffer, StyleError> {
        let pixelated = self.pixelate(image)?;
        self.pastelize(pixelated, rng)
    }
}
