use thiserror::Error;

/// Errors raised when customizing a display mode.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModeError {
    /// The requested background color is not a valid EGA table index.
    #[error("background color {index} is out of range 0-15")]
    BackgroundOutOfRange { index: u8 },

    /// The mode has no background slot to replace.
    #[error("mode {mode} does not accept a background color ({colors}-color palette)")]
    BackgroundNotSupported { mode: &'static str, colors: usize },
}
