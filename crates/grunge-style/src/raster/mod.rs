//! Image transforms over owned pixel buffers.
//!
//! The stylization pipeline applied to a downloaded photograph:
//!
//! 1. **Pixelate** ([`pixelate`]) - scale up narrow images, crop to a
//!    block-aligned size, shrink by the block factor and scale back up.
//! 2. **Pastelize** ([`pastelize`]) - reduce to 256 gray levels and look
//!    every level up in a random [`GradientPalette`](crate::GradientPalette).
//!
//! Both steps take a [`PixelBuffer`] by value and return a new one.
//!
//! # Example
//!
//! ```
//! use grunge_style::{pastelize, pixelate, PixelBuffer, Srgb};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let photo = PixelBuffer::filled(640, 480, Srgb::from_u8(120, 130, 140)).unwrap();
//!
//! let blocky = pixelate(photo).unwrap();
//! let pastel = pastelize(blocky, &mut rng).unwrap();
//!
//! assert_eq!(pastel.dimensions(), (800, 600));
//! ```

mod buffer;
mod options;
mod pastelize;
mod pixelate;
mod swatch;

pub use buffer::PixelBuffer;
pub use options::{PixelateOptions, DEFAULT_BLOCK_SIZE, DEFAULT_MAX_PIXELS, DEFAULT_MIN_WIDTH};
pub use pastelize::{pastelize, pastelize_with, pastelize_with_factory, PARALLEL_THRESHOLD};
pub use pixelate::{pixelate, pixelate_with};
pub use swatch::render_swatch;
