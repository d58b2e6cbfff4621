//! Error types for palette construction.

use thiserror::Error;

/// Error type for palette validation.
///
/// Quantized pixels store their palette position in a single byte, so a
/// palette must hold between 1 and 256 colors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// No colors provided.
    #[error("palette cannot be empty")]
    Empty,

    /// More colors than a one-byte index can address.
    #[error("palette has {count} colors (maximum 256)")]
    TooManyColors {
        /// Number of colors supplied.
        count: usize,
    },
}
