//! Source image fixtures, written as real PNG files.

use std::path::{Path, PathBuf};

/// Write a PNG whose pixels come from `pixel(x, y)`.
pub fn write_png<F>(dir: &Path, name: &str, width: u32, height: u32, pixel: F) -> PathBuf
where
    F: Fn(u32, u32) -> [u8; 3],
{
    let img = image::RgbImage::from_fn(width, height, |x, y| image::Rgb(pixel(x, y)));
    let path = dir.join(name);
    img.save(&path).expect("fixture PNG should save");
    path
}

/// Write a PNG filled with a single color.
pub fn solid_png(dir: &Path, name: &str, width: u32, height: u32, rgb: [u8; 3]) -> PathBuf {
    write_png(dir, name, width, height, |_, _| rgb)
}

/// Write a PNG with a horizontal black-to-white gradient.
pub fn gradient_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    write_png(dir, name, width, height, |x, _| {
        let level = (x * 255 / width.max(1)) as u8;
        [level, level, level]
    })
}
