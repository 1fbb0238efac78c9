//! Gradient palettes and the random palette factory
//!
//! This module provides [`GradientPalette`], the 256-entry shade lookup
//! table, [`PaletteFactory`] for drawing random closed-loop gradients from
//! hue pools, and the error types for both.

mod error;
mod factory;
mod gradient;

pub use error::{PaletteError, ParseColorError};
pub use factory::{HuePool, PaletteFactory, DEFAULT_MAX_ANCHORS, DEFAULT_MIN_ANCHORS};
pub use gradient::{GradientPalette, GRADIENT_SIZE};
