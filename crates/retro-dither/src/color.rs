//! RGB color type.
//!
//! All pipeline arithmetic happens on plain 8-bit sRGB values, matching the
//! color behavior of the legacy adapters being emulated. There is no gamma
//! decode stage: palette matching and error diffusion both operate directly
//! on stored channel values.

/// An 8-bit RGB color.
///
/// Immutable value type used for source pixels and palette entries alike.
/// Alpha is not represented; it is discarded when an image is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Create a color from 8-bit channel values.
    ///
    /// # Example
    /// ```
    /// use retro_dither::Rgb;
    /// let magenta = Rgb::new(0xAA, 0x00, 0xAA);
    /// assert_eq!(magenta.g, 0);
    /// ```
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array [R, G, B].
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Convert to per-channel `f32` values, still in the 0..=255 scale.
    ///
    /// The dither loop accumulates fractional error in this scale, so the
    /// conversion is a plain widening, not a normalization.
    #[inline]
    pub fn to_f32(self) -> [f32; 3] {
        [f32::from(self.r), f32::from(self.g), f32::from(self.b)]
    }

    /// Squared Euclidean distance to another color across the three channels.
    ///
    /// # Example
    /// ```
    /// use retro_dither::Rgb;
    /// let black = Rgb::new(0, 0, 0);
    /// let white = Rgb::new(255, 255, 255);
    /// assert_eq!(black.distance_squared(white), 3 * 255 * 255);
    /// ```
    #[inline]
    pub fn distance_squared(self, other: Rgb) -> u32 {
        let dr = i32::from(self.r) - i32::from(other.r);
        let dg = i32::from(self.g) - i32::from(other.g);
        let db = i32::from(self.b) - i32::from(other.b);
        (dr * dr + dg * dg + db * db) as u32
    }
}
