//! Palette struct with nearest-color matching.

use super::error::PaletteError;
use crate::color::Rgb;

/// Largest palette a one-byte pixel index can address.
pub const MAX_COLORS: usize = 256;

/// An ordered color palette.
///
/// Order is significant: the position of a color is the value a quantized
/// pixel stores, and for the generated VGA table that position encodes the
/// color's cube coordinates. Palettes are immutable after construction; the
/// only sanctioned edit is [`Palette::with_slot`], which builds a new
/// palette rather than touching the original.
///
/// Duplicate entries are allowed. The background override can legitimately
/// introduce one (e.g. replacing black with a cyan already present), and
/// [`Palette::find_nearest`] resolves ties toward the lowest index, so
/// duplicates cannot make matching ambiguous.
///
/// Matching-side `f32` triples are precomputed at construction, keeping the
/// per-pixel distance loop free of conversions.
///
/// # Example
///
/// ```
/// use retro_dither::{Palette, Rgb};
///
/// let palette = Palette::new(&[Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]).unwrap();
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.find_nearest([200.0, 200.0, 200.0]), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Palette {
    colors: Vec<Rgb>,
    matching: Vec<[f32; 3]>,
}

impl Palette {
    /// Create a palette from an ordered color slice.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::Empty`] for an empty slice and
    /// [`PaletteError::TooManyColors`] for more than 256 entries.
    pub fn new(colors: &[Rgb]) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::Empty);
        }
        if colors.len() > MAX_COLORS {
            return Err(PaletteError::TooManyColors {
                count: colors.len(),
            });
        }

        let matching = colors.iter().map(|c| c.to_f32()).collect();
        Ok(Self {
            colors: colors.to_vec(),
            matching,
        })
    }

    /// Number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette is empty. Always false for a constructed palette;
    /// provided for API completeness.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The ordered colors.
    #[inline]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Color at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[inline]
    pub fn color(&self, index: usize) -> Rgb {
        self.colors[index]
    }

    /// Index of the palette entry nearest to `target` by squared Euclidean
    /// distance across the three channels.
    ///
    /// `target` is in the 0..=255 channel scale (fractional values arise from
    /// accumulated dither error). Ties resolve to the lowest index, which
    /// keeps matching deterministic even with duplicate entries.
    pub fn find_nearest(&self, target: [f32; 3]) -> usize {
        let mut best = 0;
        let mut best_dist = f32::INFINITY;

        for (i, entry) in self.matching.iter().enumerate() {
            let dr = target[0] - entry[0];
            let dg = target[1] - entry[1];
            let db = target[2] - entry[2];
            let dist = dr * dr + dg * dg + db * db;
            if dist < best_dist {
                best = i;
                best_dist = dist;
            }
        }

        best
    }

    /// Copy of this palette with the color at `index` replaced.
    ///
    /// This is the zero-slot override primitive: the receiver is left
    /// untouched.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn with_slot(&self, index: usize, color: Rgb) -> Palette {
        let mut colors = self.colors.clone();
        colors[index] = color;
        let matching = colors.iter().map(|c| c.to_f32()).collect();
        Palette { colors, matching }
    }

    /// Palette colors flattened to `[r0, g0, b0, r1, g1, b1, ...]`, the
    /// layout a GIF global color table expects.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.colors.len() * 3);
        for color in &self.colors {
            bytes.extend_from_slice(&color.to_bytes());
        }
        bytes
    }
}
