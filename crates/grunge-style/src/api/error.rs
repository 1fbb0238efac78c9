//! Unified error type for the grunge-style public API.
//!
//! [`StyleError`] wraps all error types from the crate into a single enum
//! for convenient `?` propagation in application code.

use crate::palette::{PaletteError, ParseColorError};
use std::fmt;

/// Unified error type for the grunge-style public API.
///
/// # Example
///
/// ```
/// use grunge_style::{GradientPalette, StyleError, Srgb};
///
/// fn build() -> Result<GradientPalette, StyleError> {
///     let anchor: Srgb = "#ff4848".parse()?;
///     Ok(GradientPalette::new(&[anchor])?)
/// }
///
/// assert!(build().is_ok());
/// ```
#[derive(Debug)]
pub enum StyleError {
    /// Palette construction error (no anchors, bad pools)
    Palette(PaletteError),
    /// Color parsing error (invalid hex string)
    ParseColor(ParseColorError),
    /// Image bytes could not be decoded
    MalformedImage(image::ImageError),
    /// Image has no room for a single pixelation block
    ImageTooSmall {
        /// Width at the point of failure
        width: u32,
        /// Height at the point of failure
        height: u32,
    },
    /// Upscaling the image to the minimum width would exceed the pixel cap
    ImageTooLarge {
        /// Input width
        width: u32,
        /// Input height
        height: u32,
        /// Configured cap
        max_pixels: u64,
    },
    /// Pixel slice length does not match the given dimensions
    DimensionMismatch {
        /// `width * height`
        expected: usize,
        /// Number of pixels supplied
        actual: usize,
    },
    /// Transform options are out of range
    InvalidOptions(String),
    /// Image could not be encoded
    Encode(image::ImageError),
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleError::Palette(err) => write!(f, "palette error: {}", err),
            StyleError::ParseColor(err) => write!(f, "color parse error: {}", err),
            StyleError::MalformedImage(err) => write!(f, "malformed image: {}", err),
            StyleError::ImageTooSmall { width, height } => {
                write!(f, "image too small to pixelate: {}x{}", width, height)
            }
            StyleError::ImageTooLarge {
                width,
                height,
                max_pixels,
            } => write!(
                f,
                "image too large to upscale: {}x{} exceeds {} pixels",
                width, height, max_pixels
            ),
            StyleError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "pixel count mismatch: expected {} pixels, got {}",
                    expected, actual
                )
            }
            StyleError::InvalidOptions(msg) => write!(f, "invalid options: {}", msg),
            StyleError::Encode(err) => write!(f, "encode error: {}", err),
        }
    }
}

impl std::error::Error for StyleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StyleError::Palette(err) => Some(err),
            StyleError::ParseColor(err) => Some(err),
            StyleError::MalformedImage(err) => Some(err),
            StyleError::Encode(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PaletteError> for StyleError {
    fn from(err: PaletteError) -> Self {
        StyleError::Palette(err)
    }
}

impl From<ParseColorError> for StyleError {
    fn from(err: ParseColorError) -> Self {
        StyleError::ParseColor(err)
    }
}
