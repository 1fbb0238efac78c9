//! Test fixtures: encoded images and configs.

use grunge::models::BotConfig;
use grunge_style::{PixelBuffer, Srgb};
use std::path::Path;

/// A flat-colored PNG.
pub fn flat_png(width: u32, height: u32) -> Vec<u8> {
    PixelBuffer::filled(width, height, Srgb::from_u8(90, 140, 200))
        .unwrap()
        .encode_png()
        .unwrap()
}

/// A horizontal black to white ramp, as a buffer.
pub fn ramp(width: u32, height: u32) -> PixelBuffer {
    let mut buffer = PixelBuffer::filled(width, height, Srgb::from_u8(0, 0, 0)).unwrap();
    for y in 0..height {
        for x in 0..width {
            let v = ((x * 255) / (width - 1).max(1)) as u8;
            buffer.put(x, y, Srgb::from_u8(v, v, v));
        }
    }
    buffer
}

/// The ramp as PNG bytes.
pub fn ramp_png(width: u32, height: u32) -> Vec<u8> {
    ramp(width, height).encode_png().unwrap()
}

/// A config for `words` (name, list URL) writing to `output_dir`, no wait
/// between posts.
pub fn config(words: &[(&str, &str)], output_dir: &Path, seed: u64) -> BotConfig {
    let mut yaml = String::from("words:\n");
    for (word, url) in words {
        yaml.push_str(&format!("  - word: {word}\n    image_list_url: {url}\n"));
    }
    yaml.push_str(&format!(
        "output_dir: {}\ninterval_secs: 0\nseed: {seed}\n",
        output_dir.display()
    ));
    BotConfig::from_yaml(&yaml).unwrap()
}

/// Sorted file names in `dir`.
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
