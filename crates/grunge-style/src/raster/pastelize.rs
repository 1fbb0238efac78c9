//! Pastelization: grayscale levels remapped through a gradient palette.

use image::imageops;
use rand::Rng;
use rayon::prelude::*;

use super::buffer::PixelBuffer;
use crate::api::StyleError;
use crate::palette::{GradientPalette, PaletteFactory, GRADIENT_SIZE};

/// Minimum pixel count before the remap is split across threads.
pub const PARALLEL_THRESHOLD: usize = 100_000;

/// Pastelize with a random palette from the default factory.
///
/// Draws one [`GradientPalette`] from `rng` for the whole image.
pub fn pastelize<R: Rng + ?Sized>(
    image: PixelBuffer,
    rng: &mut R,
) -> Result<PixelBuffer, StyleError> {
    pastelize_with_factory(image, &PaletteFactory::default(), rng)
}

/// Pastelize with a random palette drawn from `factory`.
pub fn pastelize_with_factory<R: Rng + ?Sized>(
    image: PixelBuffer,
    factory: &PaletteFactory,
    rng: &mut R,
) -> Result<PixelBuffer, StyleError> {
    let palette = factory.random_palette(rng)?;
    Ok(pastelize_with(image, &palette))
}

/// Remap every pixel's gray level through `palette`.
///
/// Each pixel is reduced to an 8-bit luminance level `L` (Rec. 709 weights)
/// and replaced by `palette.lookup(L / 255)`. Dimensions are preserved.
///
/// # Example
///
/// ```
/// use grunge_style::{pastelize_with, GradientPalette, PixelBuffer, Srgb};
///
/// let black = PixelBuffer::filled(3, 3, Srgb::from_u8(0, 0, 0)).unwrap();
/// let palette = GradientPalette::new(&[Srgb::from_u8(0xff, 0x48, 0x48)]).unwrap();
///
/// let out = pastelize_with(black, &palette);
/// assert_eq!(out.dimensions(), (3, 3));
/// assert_eq!(out.get(1, 1).to_bytes(), [0xff, 0x48, 0x48]);
/// ```
pub fn pastelize_with(image: PixelBuffer, palette: &GradientPalette) -> PixelBuffer {
    let pixel_count = image.width() as usize * image.height() as usize;
    remap(image, palette, pixel_count >= PARALLEL_THRESHOLD)
}

fn remap(image: PixelBuffer, palette: &GradientPalette, parallel: bool) -> PixelBuffer {
    let gray = imageops::grayscale(image.as_image());

    // One RGB triple per gray level
    let levels: Vec<[u8; 3]> = (0..GRADIENT_SIZE)
        .map(|level| palette.lookup(level as f32 / 255.0).to_bytes())
        .collect();

    let width = image.width() as usize;
    let mut out = image.into_image();
    let dst: &mut [u8] = &mut out;
    let src: &[u8] = gray.as_raw();

    let remap_row = |(dst_row, src_row): (&mut [u8], &[u8])| {
        for (pixel, &level) in dst_row.chunks_exact_mut(3).zip(src_row) {
            pixel.copy_from_slice(&levels[level as usize]);
        }
    };

    if parallel {
        dst.par_chunks_mut(width * 3)
            .zip(src.par_chunks(width))
            .for_each(remap_row);
    } else {
        dst.chunks_mut(width * 3)
            .zip(src.chunks(width))
            .for_each(remap_row);
    }

    PixelBuffer::from_image_unchecked(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Srgb;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn gradient_image(width: u32, height: u32) -> PixelBuffer {
        let mut buffer = PixelBuffer::filled(width, height, Srgb::from_u8(0, 0, 0)).unwrap();
        for y in 0..height {
            for x in 0..width {
                let v = ((x * 255) / (width - 1).max(1)).min(255) as u8;
                buffer.put(x, y, Srgb::from_u8(v, v / 2, 255 - v));
            }
        }
        buffer
    }

    fn two_tone() -> GradientPalette {
        GradientPalette::new(&[Srgb::from_u8(0xff, 0x48, 0x48), Srgb::from_u8(0x62, 0xd0, 0xff)])
            .unwrap()
    }

    #[test]
    fn test_dimensions_preserved() {
        let mut rng = StdRng::seed_from_u64(3);
        for (w, h) in [(1, 1), (1, 7), (13, 1), (64, 48)] {
            let out = pastelize(gradient_image(w, h), &mut rng).unwrap();
            assert_eq!(out.dimensions(), (w, h));
        }
    }

    #[test]
    fn test_black_and_white_hit_table_ends() {
        let palette = two_tone();

        let mut image = PixelBuffer::filled(2, 1, Srgb::from_u8(0, 0, 0)).unwrap();
        image.put(1, 0, Srgb::from_u8(255, 255, 255));

        let out = pastelize_with(image, &palette);
        assert_eq!(out.get(0, 0).to_bytes(), palette.entry(0).to_bytes());
        assert_eq!(out.get(1, 0).to_bytes(), palette.entry(255).to_bytes());
    }

    #[test]
    fn test_output_colors_come_from_palette() {
        let palette = two_tone();
        let table: Vec<[u8; 3]> = palette.entries().iter().map(|c| c.to_bytes()).collect();

        let out = pastelize_with(gradient_image(40, 4), &palette);
        for pixel in out.pixels() {
            assert!(table.contains(&pixel.to_bytes()));
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let palette = two_tone();
        let image = gradient_image(97, 31);

        let sequential = remap(image.clone(), &palette, false);
        let parallel = remap(image, &palette, true);
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_same_seed_same_output() {
        let a = pastelize(gradient_image(20, 10), &mut StdRng::seed_from_u64(11)).unwrap();
        let b = pastelize(gradient_image(20, 10), &mut StdRng::seed_from_u64(11)).unwrap();
        assert_eq!(a, b);
    }
}
