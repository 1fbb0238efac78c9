//! Color types and conversion utilities
//!
//! This module provides type-safe color handling with a compile-time
//! distinction between the RGB form used for pixel I/O and the cylindrical
//! HSL form used for gradient interpolation.
//!
//! # Color Spaces
//!
//! - **Srgb**: Normalized RGB channels. Use for I/O and palette tables.
//! - **Hsl**: Hue (circular, 0.0..1.0), saturation and lightness. Use for
//!   interpolation between anchor colors.
//!
//! # Example
//!
//! ```
//! use grunge_style::{Hsl, Srgb};
//!
//! let srgb = Srgb::from_u8(255, 72, 72);
//!
//! // Convert explicitly for interpolation
//! let hsl = Hsl::from(srgb);
//! assert!(hsl.h < 1e-6);
//!
//! // And back for output
//! let back = Srgb::from(hsl);
//! assert_eq!(back.to_bytes(), [255, 72, 72]);
//! ```

mod hsl;
mod srgb;

pub use hsl::{hue_distance, lerp_hue, Hsl};
pub use srgb::Srgb;
