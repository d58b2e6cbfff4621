//! Display modes of the emulated adapters
//!
//! A [`Mode`] couples a pixel resolution with one of the catalog palettes;
//! [`ModeTable`] holds the built-in set and resolves case-insensitive name
//! lookups.

mod error;
mod table;

pub use error::ModeError;
pub use table::{Mode, ModeTable, DEFAULT_MODE};
