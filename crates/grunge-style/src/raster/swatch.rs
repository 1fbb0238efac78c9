//! Palette preview strips.

use image::{Rgb, RgbImage};

use super::buffer::PixelBuffer;
use crate::api::StyleError;
use crate::palette::GradientPalette;

/// Render `palette` as a horizontal strip, darkest shade on the left.
///
/// Column `x` shows `palette.lookup(x / (width - 1))`, so the first and last
/// columns are always table entries 0 and 255.
pub fn render_swatch(
    palette: &GradientPalette,
    width: u32,
    height: u32,
) -> Result<PixelBuffer, StyleError> {
    let span = width.saturating_sub(1).max(1) as f32;
    let image = RgbImage::from_fn(width, height, |x, _| {
        Rgb(palette.lookup(x as f32 / span).to_bytes())
    });
    PixelBuffer::from_image(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Srgb;

    #[test]
    fn test_swatch_ends_match_table() {
        let palette =
            GradientPalette::new(&[Srgb::from_u8(0xff, 0x48, 0x48), Srgb::from_u8(0x62, 0xd0, 0xff)])
                .unwrap();
        let swatch = render_swatch(&palette, 256, 4).unwrap();

        assert_eq!(swatch.dimensions(), (256, 4));
        assert_eq!(swatch.get(0, 3), Srgb::from_bytes(palette.entry(0).to_bytes()));
        assert_eq!(swatch.get(255, 0), Srgb::from_bytes(palette.entry(255).to_bytes()));
    }

    #[test]
    fn test_empty_swatch_rejected() {
        let palette = GradientPalette::new(&[Srgb::from_u8(1, 2, 3)]).unwrap();
        assert!(render_swatch(&palette, 0, 10).is_err());
    }
}
