//! The diffusion kernel and its weight table.

/// Weight table for error diffusion.
///
/// Entries are `(dx, dy, weight)` triples naming where a share of the
/// quantization residual lands, relative to the pixel being emitted. A
/// raster scan has already committed everything above and to the left, so
/// every entry must satisfy `dy > 0`, or `dy == 0` with `dx > 0`.
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    /// Offset and weight of each receiving neighbor.
    pub entries: &'static [(i32, i32, u8)],

    /// Weights are fractions of this value.
    pub divisor: u8,

    /// How many rows below the current one the kernel can touch. The
    /// diffusion state needs `rows_ahead + 1` rows.
    pub rows_ahead: usize,
}

/// The classic Floyd-Steinberg weights.
///
/// ```text
///         *   7/16
/// 3/16  5/16  1/16
/// ```
///
/// The four shares sum to the divisor, so away from the grid edges no
/// residual is lost.
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[(1, 0, 7), (-1, 1, 3), (0, 1, 5), (1, 1, 1)],
    divisor: 16,
    rows_ahead: 1,
};
