use crate::color::Rgb;
use crate::mode::error::ModeError;
use crate::palette::{catalog, Palette};

/// Mode selected when the user does not ask for one.
pub const DEFAULT_MODE: &str = "CGA1";

/// A legacy display mode: a pixel resolution plus a fixed palette.
///
/// Modes come out of [`ModeTable::builtin`] and are read-only; the one
/// sanctioned customization is [`Mode::with_background`], which returns a
/// fresh value and leaves the table untouched.
#[derive(Debug, Clone)]
pub struct Mode {
    name: &'static str,
    width: u32,
    height: u32,
    palette: Palette,
    description: &'static str,
}

impl Mode {
    fn new(
        name: &'static str,
        width: u32,
        height: u32,
        colors: &[Rgb],
        description: &'static str,
    ) -> Self {
        let palette = Palette::new(colors).expect("built-in palette is sized 1..=256");
        Mode {
            name,
            width,
            height,
            palette,
            description,
        }
    }

    /// Canonical upper-case mode name.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Horizontal resolution in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Vertical resolution in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The mode's color palette.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// One-line description for the mode listing.
    #[inline]
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Pixel aspect ratio of the mode, width over height.
    #[inline]
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    /// Return a copy of this mode with the background (palette slot 0)
    /// replaced by EGA color `index`.
    ///
    /// Only the 4-color modes have a background slot; `index` must be a
    /// valid EGA table position (0-15).
    ///
    /// # Example
    ///
    /// ```
    /// use retro_dither::mode::ModeTable;
    ///
    /// let table = ModeTable::builtin();
    /// let mode = table.get("CGA2").unwrap();
    /// let custom = mode.with_background(5).unwrap();
    /// assert_eq!(custom.palette().color(0).to_bytes(), [0xAA, 0x00, 0xAA]);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ModeError::BackgroundOutOfRange`] for an index above 15 and
    /// [`ModeError::BackgroundNotSupported`] for any mode whose palette is
    /// not exactly 4 colors.
    pub fn with_background(&self, index: u8) -> Result<Mode, ModeError> {
        if usize::from(index) >= catalog::EGA_COLORS.len() {
            return Err(ModeError::BackgroundOutOfRange { index });
        }
        if self.palette.len() != 4 {
            return Err(ModeError::BackgroundNotSupported {
                mode: self.name,
                colors: self.palette.len(),
            });
        }
        let color = catalog::EGA_COLORS[usize::from(index)];
        Ok(Mode {
            palette: self.palette.with_slot(0, color),
            ..self.clone()
        })
    }
}

/// The built-in display modes, keyed by case-insensitive name.
#[derive(Debug)]
pub struct ModeTable {
    modes: Vec<Mode>,
}

impl ModeTable {
    /// Build the table of supported modes.
    ///
    /// The declaration order here is the order [`ModeTable::iter`] yields,
    /// which is the order the mode listing prints.
    pub fn builtin() -> Self {
        let modes = vec![
            Mode::new(
                "CGA1",
                640,
                200,
                &catalog::MONOCHROME,
                "2-color 640x200, black and white",
            ),
            Mode::new(
                "CGA2",
                320,
                200,
                &catalog::CGA_PALETTE1,
                "4-color 320x200, cyan/magenta/gray",
            ),
            Mode::new(
                "CGA2H",
                320,
                200,
                &catalog::CGA_PALETTE1_BRIGHT,
                "4-color 320x200, bright cyan/magenta/white",
            ),
            Mode::new(
                "CGA2A",
                320,
                200,
                &catalog::CGA_PALETTE0,
                "4-color 320x200, green/red/brown",
            ),
            Mode::new(
                "CGA2AH",
                320,
                200,
                &catalog::CGA_PALETTE0_BRIGHT,
                "4-color 320x200, bright green/red/yellow",
            ),
            Mode::new("EGA", 640, 350, &catalog::EGA_COLORS, "16-color 640x350"),
            Mode::new("VGA", 320, 200, &catalog::vga_colors(), "256-color 320x200"),
        ];
        ModeTable { modes }
    }

    /// Look up a mode by name, ignoring ASCII case.
    ///
    /// # Example
    ///
    /// ```
    /// use retro_dither::mode::ModeTable;
    ///
    /// let table = ModeTable::builtin();
    /// assert_eq!(table.get("cga1").unwrap().name(), "CGA1");
    /// assert!(table.get("HERCULES").is_none());
    /// ```
    pub fn get(&self, name: &str) -> Option<&Mode> {
        self.modes.iter().find(|m| m.name.eq_ignore_ascii_case(name))
    }

    /// Iterate the modes in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Mode> {
        self.modes.iter()
    }
}
