//! retro-dither: legacy video-adapter palettes and dithered quantization
//!
//! This library reduces full-color images to the fixed palettes of
//! CGA/EGA/VGA-class display modes: a mode table with the historical
//! resolutions and color sets, output-dimension planning that fits a source
//! image into a mode's rectangle, and Floyd-Steinberg quantization onto the
//! mode's palette.
//!
//! # Quick Start
//!
//! ```
//! use retro_dither::{quantize, IndexedImage, ModeTable, Rgb};
//!
//! let table = ModeTable::builtin();
//! let mode = table.get("CGA1").unwrap();
//!
//! let pixels = vec![Rgb::new(128, 128, 128); 4];
//! let indices = quantize(&pixels, 2, 2, mode.palette());
//! let image = IndexedImage::new(indices, 2, 2, mode.palette().clone());
//!
//! assert!(image.indices().iter().all(|&i| i < 2));
//! ```
//!
//! # Pipeline
//!
//! ```text
//! RGB pixels ──> plan_dimensions ──> resample (caller) ──> quantize ──> IndexedImage
//!                     │                                        │
//!                ModeTable                              Mode palette
//!                                                  (optionally rebuilt via
//!                                                   Mode::with_background)
//! ```
//!
//! # Output character
//!
//! All color arithmetic is plain 0-255 RGB: nearest-palette matching is
//! squared Euclidean distance over raw channels, and diffusion error
//! accumulates in the same scale. There is no gamma decode and no
//! perceptual color space. That is deliberate: it reproduces the dither
//! character of period conversion tools, which worked on raw pixel bytes.
//! Ties between equidistant palette entries go to the lowest index, so
//! duplicate colors (a background override can introduce one) resolve
//! stably.
//!
//! Quantization is fully deterministic: the same pixels and palette yield
//! byte-identical indices on every run.

pub mod color;
pub mod dither;
pub mod mode;
pub mod output;
pub mod palette;
pub mod resize;

#[cfg(test)]
mod domain_tests;

pub use color::Rgb;
pub use dither::{quantize, Kernel, FLOYD_STEINBERG};
pub use mode::{Mode, ModeError, ModeTable, DEFAULT_MODE};
pub use output::IndexedImage;
pub use palette::{Palette, PaletteError};
pub use resize::{plan_dimensions, Extent, ResizeError, ResizePolicy, TargetDims};
