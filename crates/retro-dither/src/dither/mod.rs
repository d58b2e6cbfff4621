//! Floyd-Steinberg error diffusion
//!
//! Quantizes a full-color pixel grid onto a small fixed palette, diffusing
//! each pixel's rounding error to its unvisited neighbors so that area
//! averages survive the brutal loss of color resolution.
//!
//! Pixels are visited in raster order (row-major, left to right, top to
//! bottom) and all arithmetic happens on plain 0-255 RGB channels. There is
//! no randomness anywhere; the same grid and palette always produce the
//! same indices.
//!
//! # Example
//!
//! ```
//! use retro_dither::color::Rgb;
//! use retro_dither::dither::quantize;
//! use retro_dither::palette::Palette;
//!
//! let palette = Palette::new(&[Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]).unwrap();
//! let pixels = vec![Rgb::new(10, 10, 10), Rgb::new(245, 245, 245)];
//! let indices = quantize(&pixels, 2, 1, &palette);
//! assert_eq!(indices, [0, 1]);
//! ```

mod kernel;

pub use kernel::{Kernel, FLOYD_STEINBERG};

use crate::color::Rgb;
use crate::palette::Palette;

/// Rolling per-channel residual store for the diffusion scan.
///
/// Holds one row of pending error per row the kernel can reach: row 0 is
/// the row currently being scanned, row 1 the next, and so on. Cells hold
/// signed sums in the 0-255 channel scale. Advancing recycles the finished
/// row as the new farthest one, so the store stays at `depth` rows no
/// matter how tall the image is.
#[derive(Debug)]
pub struct ErrorRows {
    rows: Vec<Vec<[f32; 3]>>,
    width: usize,
}

impl ErrorRows {
    /// A zeroed store of `depth` rows (`rows_ahead + 1` for the kernel in
    /// use), each `width` cells wide.
    pub fn new(width: usize, depth: usize) -> Self {
        ErrorRows {
            rows: vec![vec![[0.0; 3]; width]; depth],
            width,
        }
    }

    /// Pending error for column `x` of the row being scanned.
    #[inline]
    pub fn accumulated(&self, x: usize) -> [f32; 3] {
        self.rows[0][x]
    }

    /// Deposit error at column `x`, `rows_down` rows below the current one.
    ///
    /// Coordinates outside the store are dropped; that is how distribution
    /// gets clipped at the grid edges.
    #[inline]
    pub fn add(&mut self, x: usize, rows_down: usize, error: [f32; 3]) {
        if x >= self.width || rows_down >= self.rows.len() {
            return;
        }
        let cell = &mut self.rows[rows_down][x];
        cell[0] += error[0];
        cell[1] += error[1];
        cell[2] += error[2];
    }

    /// Finish the current row: every pending row moves one step closer and
    /// the freed row comes back zeroed as the farthest one.
    pub fn advance(&mut self) {
        self.rows.rotate_left(1);
        if let Some(farthest) = self.rows.last_mut() {
            farthest.fill([0.0; 3]);
        }
    }
}

/// Quantize a row-major RGB grid to palette indices with Floyd-Steinberg
/// dithering.
///
/// Each output byte is a valid index into `palette` (palettes hold at most
/// 256 colors, so `u8` always suffices). An empty grid produces an empty
/// vector.
///
/// `pixels` must hold exactly `width * height` entries in row-major order.
pub fn quantize(pixels: &[Rgb], width: usize, height: usize, palette: &Palette) -> Vec<u8> {
    debug_assert_eq!(pixels.len(), width * height, "pixel count mismatch");

    let kernel = &FLOYD_STEINBERG;
    let mut indices = vec![0u8; width * height];
    let mut errors = ErrorRows::new(width, kernel.rows_ahead + 1);
    let divisor = f32::from(kernel.divisor);

    for y in 0..height {
        for x in 0..width {
            let at = y * width + x;

            // What this pixel should look like once its neighbors' residue
            // is folded in, held to the displayable range.
            let carry = errors.accumulated(x);
            let source = pixels[at].to_f32();
            let desired = [
                (source[0] + carry[0]).clamp(0.0, 255.0),
                (source[1] + carry[1]).clamp(0.0, 255.0),
                (source[2] + carry[2]).clamp(0.0, 255.0),
            ];

            let chosen = palette.find_nearest(desired);
            indices[at] = chosen as u8;

            // The gap between what was wanted and what the palette can
            // show, split forward across the kernel's neighbors.
            let shown = palette.color(chosen).to_f32();
            let residual = [
                desired[0] - shown[0],
                desired[1] - shown[1],
                desired[2] - shown[2],
            ];

            for &(dx, dy, weight) in kernel.entries {
                let column = x as i64 + i64::from(dx);
                if column < 0 || column as usize >= width {
                    continue;
                }
                let share = f32::from(weight) / divisor;
                errors.add(
                    column as usize,
                    dy as usize,
                    [
                        residual[0] * share,
                        residual[1] * share,
                        residual[2] * share,
                    ],
                );
            }
        }
        errors.advance();
    }

    indices
}
