//! Cgaify - CGA-ify your images
//!
//! Batch converter that renders images in the fixed palettes of legacy PC
//! graphics modes and writes indexed GIFs.
//! This library exposes modules for integration testing.

pub mod cli;
pub mod convert;
pub mod error;
