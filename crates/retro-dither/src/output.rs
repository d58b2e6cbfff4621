//! Quantized output grid
//!
//! The end product of the pipeline: palette indices plus the palette they
//! index, ready to hand to an indexed-color encoder.

use crate::color::Rgb;
use crate::palette::Palette;

/// An indexed-color image: one palette index per pixel, row-major.
///
/// Every index is valid for the attached palette; constructing one from
/// [`quantize`](crate::dither::quantize) output upholds this by
/// construction.
#[derive(Debug, Clone)]
pub struct IndexedImage {
    indices: Vec<u8>,
    width: u32,
    height: u32,
    palette: Palette,
}

impl IndexedImage {
    /// Assemble an image from quantized indices.
    ///
    /// `indices` must hold exactly `width * height` entries.
    pub fn new(indices: Vec<u8>, width: u32, height: u32, palette: Palette) -> Self {
        debug_assert_eq!(
            indices.len(),
            width as usize * height as usize,
            "index count mismatch"
        );
        IndexedImage {
            indices,
            width,
            height,
            palette,
        }
    }

    /// Row-major palette indices.
    #[inline]
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The palette the indices refer to.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The palette flattened to `r, g, b` byte triples, the layout GIF
    /// global color tables use.
    pub fn palette_bytes(&self) -> Vec<u8> {
        self.palette.to_rgb_bytes()
    }

    /// Expand the indices back to RGB pixels.
    pub fn to_rgb(&self) -> Vec<Rgb> {
        self.indices
            .iter()
            .map(|&i| self.palette.color(i as usize))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_color() -> Palette {
        Palette::new(&[Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]).unwrap()
    }

    #[test]
    fn test_accessors() {
        let image = IndexedImage::new(vec![0, 1, 1, 0, 0, 1], 3, 2, two_color());
        assert_eq!(image.width(), 3);
        assert_eq!(image.height(), 2);
        assert_eq!(image.indices(), [0, 1, 1, 0, 0, 1]);
        assert_eq!(image.palette().len(), 2);
    }

    #[test]
    fn test_palette_bytes_layout() {
        let image = IndexedImage::new(vec![0], 1, 1, two_color());
        assert_eq!(image.palette_bytes(), [0, 0, 0, 255, 255, 255]);
    }

    #[test]
    fn test_to_rgb_round_trip() {
        let image = IndexedImage::new(vec![1, 0, 1], 3, 1, two_color());
        assert_eq!(
            image.to_rgb(),
            [
                Rgb::new(255, 255, 255),
                Rgb::new(0, 0, 0),
                Rgb::new(255, 255, 255)
            ]
        );
    }

    #[test]
    fn test_empty_image() {
        let image = IndexedImage::new(Vec::new(), 0, 0, two_color());
        assert!(image.indices().is_empty());
        assert!(image.to_rgb().is_empty());
    }
}
