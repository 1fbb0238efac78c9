//! Error types for palette operations
//!
//! This module provides error types for color parsing, gradient
//! construction and palette factory validation.

use std::fmt;
use std::num::ParseIntError;

/// Error type for parsing hex color strings.
///
/// Returned when parsing a hex color string fails, either due to
/// invalid length or invalid hexadecimal characters.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    InvalidLength,
    /// Invalid hexadecimal character encountered
    InvalidHex(ParseIntError),
    /// Character that is not a hex digit (signs included)
    InvalidCharacter(char),
}

impl From<ParseIntError> for ParseColorError {
    fn from(err: ParseIntError) -> Self {
        ParseColorError::InvalidHex(err)
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength => {
                write!(f, "invalid hex color length (expected 3 or 6 characters)")
            }
            ParseColorError::InvalidHex(err) => {
                write!(f, "invalid hex character: {}", err)
            }
            ParseColorError::InvalidCharacter(c) => {
                write!(f, "invalid hex character: '{}'", c)
            }
        }
    }
}

impl std::error::Error for ParseColorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseColorError::InvalidHex(err) => Some(err),
            _ => None,
        }
    }
}

/// Error type for palette construction.
///
/// Returned when a gradient has no anchors or a palette factory is
/// configured with pools it cannot draw from.
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteError {
    /// No anchor colors provided for a gradient
    EmptyPalette,
    /// Factory was given no hue pools
    NoPools,
    /// A hue pool contains no colors
    EmptyPool {
        /// Name of the empty pool
        name: String,
    },
    /// Anchor keep range is not satisfiable by the pools
    InvalidAnchorRange {
        /// Minimum number of anchors to keep
        min: usize,
        /// Maximum number of anchors to keep
        max: usize,
        /// Number of pools available to draw from
        pools: usize,
    },
    /// Invalid hex color string
    ParseColor(ParseColorError),
}

impl From<ParseColorError> for PaletteError {
    fn from(err: ParseColorError) -> Self {
        PaletteError::ParseColor(err)
    }
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::EmptyPalette => {
                write!(f, "gradient needs at least one anchor color")
            }
            PaletteError::NoPools => {
                write!(f, "palette factory needs at least one hue pool")
            }
            PaletteError::EmptyPool { name } => {
                write!(f, "hue pool '{}' has no colors", name)
            }
            PaletteError::InvalidAnchorRange { min, max, pools } => {
                write!(
                    f,
                    "cannot keep {}..={} anchors from {} pools (need 1 <= min <= max <= pools)",
                    min, max, pools
                )
            }
            PaletteError::ParseColor(err) => {
                write!(f, "invalid color: {}", err)
            }
        }
    }
}

impl std::error::Error for PaletteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PaletteError::ParseColor(err) => Some(err),
            _ => None,
        }
    }
}
