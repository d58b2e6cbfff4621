//! Palette types and the built-in adapter color tables
//!
//! This module provides the [`Palette`] container used for nearest-color
//! matching, its error type, and the constant hardware palettes in
//! [`catalog`].

pub mod catalog;
mod error;
#[allow(clippy::module_inception)]
mod palette;

pub use error::PaletteError;
pub use palette::{Palette, MAX_COLORS};
