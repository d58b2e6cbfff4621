//! Command line definition and resolution into pipeline inputs.

use std::fmt::Write as _;
use std::path::PathBuf;

use clap::Parser;

use retro_dither::{Mode, ModeTable, ResizePolicy, DEFAULT_MODE};

use crate::error::ConfigError;

#[derive(Debug, Parser)]
#[command(name = "cgaify")]
#[command(about = "Convert images to legacy CGA/EGA/VGA graphics modes")]
#[command(after_help = mode_listing())]
pub struct Cli {
    /// Target graphics mode, case-insensitive
    #[arg(short, long, default_value = DEFAULT_MODE)]
    pub mode: String,

    /// Keep the source resolution instead of fitting the mode's screen
    #[arg(short, long)]
    pub same_size: bool,

    /// Scale the source to a percentage of its width
    #[arg(
        short = 'p',
        long,
        value_name = "PERCENT",
        conflicts_with = "same_size",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub scale: Option<u32>,

    /// Replace palette slot 0 with this color index (4-color modes only)
    #[arg(
        short,
        long,
        value_name = "INDEX",
        value_parser = clap::value_parser!(u8).range(0..=15)
    )]
    pub background: Option<u8>,

    /// Image files to convert
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

impl Cli {
    /// How output dimensions should be chosen for this invocation.
    pub fn resize_policy(&self) -> ResizePolicy {
        if self.same_size {
            ResizePolicy::SameSize
        } else if let Some(percent) = self.scale {
            ResizePolicy::Percent(percent)
        } else {
            ResizePolicy::FitMode
        }
    }

    /// Look up the requested mode and apply the background override, if any.
    ///
    /// # Errors
    ///
    /// Fails when the mode name is unknown or the background override is
    /// rejected by the mode.
    pub fn resolve_mode(&self, table: &ModeTable) -> Result<Mode, ConfigError> {
        let mode = table
            .get(&self.mode)
            .ok_or_else(|| ConfigError::UnknownMode(self.mode.clone()))?;
        match self.background {
            Some(index) => Ok(mode.with_background(index)?),
            None => Ok(mode.clone()),
        }
    }
}

/// One line per built-in mode, aligned for terminal display.
pub fn mode_listing() -> String {
    let mut out = String::from("Modes:\n");
    for mode in ModeTable::builtin().iter() {
        let _ = writeln!(out, "  {:<8}{}", mode.name(), mode.description());
    }
    out
}
