//! 256-entry gradient lookup table built from anchor colors.

use super::error::PaletteError;
use crate::color::{Hsl, Srgb};

/// Number of entries in every gradient table.
pub const GRADIENT_SIZE: usize = 256;

/// A smooth color gradient sampled into a fixed 256-entry table.
///
/// The gradient passes through each anchor in order. Consecutive anchors are
/// blended in HSL space with hue taking the shorter way around the color
/// wheel, so a red→purple segment never detours through green.
///
/// The table is computed once at construction and never changes.
///
/// # Example
///
/// ```
/// use grunge_style::{GradientPalette, Srgb};
///
/// let red = Srgb::from_u8(0xff, 0x48, 0x48);
/// let blue = Srgb::from_u8(0x62, 0xd0, 0xff);
/// let gradient = GradientPalette::new(&[red, blue]).unwrap();
///
/// assert_eq!(gradient.lookup(0.0).to_bytes(), red.to_bytes());
/// assert_eq!(gradient.anchors().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GradientPalette {
    anchors: Vec<Srgb>,
    entries: Vec<Srgb>,
}

impl GradientPalette {
    /// Build a gradient through `anchors`.
    ///
    /// A single anchor is duplicated, giving a constant gradient.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::EmptyPalette`] if `anchors` is empty.
    pub fn new(anchors: &[Srgb]) -> Result<Self, PaletteError> {
        let mut anchors = anchors.to_vec();
        match anchors.len() {
            0 => return Err(PaletteError::EmptyPalette),
            1 => anchors.push(anchors[0]),
            _ => {}
        }

        let hsl: Vec<Hsl> = anchors.iter().map(|&c| Hsl::from(c)).collect();
        let sections = hsl.len() - 1;
        let section_size = GRADIENT_SIZE as f64 / sections as f64;

        let entries = (0..GRADIENT_SIZE)
            .map(|i| {
                let position = i as f64 / section_size;
                let section = (position.floor() as usize).min(sections - 1);
                let t = (position - section as f64) as f32;
                Srgb::from(hsl[section].lerp(hsl[section + 1], t))
            })
            .collect();

        Ok(Self { anchors, entries })
    }

    /// Look up the color for a normalized shade.
    ///
    /// `shade` is clamped to `0.0..=1.0` (NaN counts as `0.0`), then mapped
    /// to index `min(floor(shade * 256), 255)`.
    #[inline]
    pub fn lookup(&self, shade: f32) -> Srgb {
        let shade = if shade.is_nan() {
            0.0
        } else {
            shade.clamp(0.0, 1.0)
        };
        let index = ((shade * GRADIENT_SIZE as f32).floor() as usize).min(GRADIENT_SIZE - 1);
        self.entries[index]
    }

    /// Table entry at `index`.
    #[inline]
    pub fn entry(&self, index: u8) -> Srgb {
        self.entries[index as usize]
    }

    /// All 256 table entries, darkest shade first.
    #[inline]
    pub fn entries(&self) -> &[Srgb] {
        &self.entries
    }

    /// The anchors this gradient was built from (after single-anchor
    /// duplication).
    #[inline]
    pub fn anchors(&self) -> &[Srgb] {
        &self.anchors
    }
}
