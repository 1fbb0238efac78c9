//! grunge-style: soft-grunge image stylization
//!
//! This library turns ordinary photographs into blocky, pastel-toned images:
//! the picture is pixelated by a lossy downscale/upscale cycle, then every
//! gray level is remapped through a smooth gradient drawn at random from
//! curated pastel hue pools.
//!
//! # Quick Start
//!
//! The [`Stylizer`] builder is the primary entry point:
//!
//! ```
//! use grunge_style::{PixelBuffer, Srgb, Stylizer};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(2024);
//! let photo = PixelBuffer::filled(1024, 768, Srgb::from_u8(128, 128, 128)).unwrap();
//!
//! let styled = Stylizer::new().stylize(photo, &mut rng).unwrap();
//! assert_eq!(styled.dimensions(), (1024, 768));
//! ```
//!
//! # Gradients
//!
//! A [`GradientPalette`] is a 256-entry table built from two or more anchor
//! colors. Consecutive anchors are blended in [`Hsl`] space, with hue taking
//! the shorter way around the color wheel:
//!
//! ```text
//! anchors:   A ------- B ------- C ------- A
//! table:     [0 ............................ 255]
//!            \_ section 0 _/\_ section 1 _/\_ section 2 _/
//! ```
//!
//! Hue is circular, so blending 0.9 (pink) with 0.1 (orange) must pass
//! through 0.0 (red). A naive linear blend would pass through 0.5 (cyan)
//! instead, which is the most visible way a gradient can go wrong.
//!
//! # Randomness
//!
//! Nothing in this crate owns a random source. Every function that needs one
//! takes `&mut R where R: Rng`, and draws happen in a documented order (see
//! [`PaletteFactory`]), so a seeded generator reproduces a palette exactly.

pub mod api;
pub mod color;
pub mod palette;
pub mod raster;


pub use api::{StyleError, Stylizer};
pub use color::{hue_distance, lerp_hue, Hsl, Srgb};
pub use palette::{GradientPalette, HuePool, PaletteError, PaletteFactory, ParseColorError};
pub use raster::{
    pastelize, pastelize_with, pastelize_with_factory, pixelate, pixelate_with, render_swatch,
    PixelBuffer, PixelateOptions,
};
