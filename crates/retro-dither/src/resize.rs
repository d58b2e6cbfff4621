//! Output-dimension planning
//!
//! Picks the pixel size a source image should be resampled to before
//! quantization. Planning is pure arithmetic; the actual resampling is done
//! by the caller with whatever interpolation it prefers.

use thiserror::Error;

use crate::mode::Mode;

/// How the output dimensions relate to the source and the mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizePolicy {
    /// Fit inside the mode's rectangle, preserving the source aspect ratio.
    #[default]
    FitMode,
    /// Keep the source dimensions unchanged.
    SameSize,
    /// Scale the source width to this percentage, deriving the height.
    Percent(u32),
}

/// One axis of the planned output size.
///
/// A derived axis is tagged [`Extent::FromAspect`] rather than smuggled
/// through a zero sentinel, and is resolved against the source dimensions
/// before any resampler sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extent {
    /// Use exactly this many pixels.
    Fixed(u32),
    /// Derive from the other axis so the source aspect ratio is kept.
    FromAspect,
}

/// Concrete output dimensions, both axes at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetDims {
    pub width: u32,
    pub height: u32,
}

/// Errors raised while planning output dimensions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResizeError {
    /// The source has a zero axis and cannot be scaled.
    #[error("source image is empty ({width}x{height})")]
    EmptySource { width: u32, height: u32 },

    /// A scale percentage of zero would collapse the image.
    #[error("scale percentage must be at least 1")]
    ZeroScale,
}

/// Plan the output dimensions for a source image under `policy`.
///
/// With [`ResizePolicy::FitMode`] the result touches the mode's rectangle on
/// one axis and fits inside it on the other: a source wider than the mode's
/// shape pins the width, anything else pins the height. Comparison is on
/// aspect ratios, so a 320x200 source fills the 640x200 monochrome mode's
/// height at 320x200 rather than stretching to 640 wide.
///
/// # Example
///
/// ```
/// use retro_dither::mode::ModeTable;
/// use retro_dither::resize::{plan_dimensions, ResizePolicy, TargetDims};
///
/// let table = ModeTable::builtin();
/// let cga1 = table.get("CGA1").unwrap();
/// let dims = plan_dimensions(320, 200, cga1, ResizePolicy::FitMode).unwrap();
/// assert_eq!(dims, TargetDims { width: 320, height: 200 });
/// ```
///
/// # Errors
///
/// Returns [`ResizeError::EmptySource`] when either source axis is zero and
/// [`ResizeError::ZeroScale`] for `Percent(0)`.
pub fn plan_dimensions(
    src_width: u32,
    src_height: u32,
    mode: &Mode,
    policy: ResizePolicy,
) -> Result<TargetDims, ResizeError> {
    if src_width == 0 || src_height == 0 {
        return Err(ResizeError::EmptySource {
            width: src_width,
            height: src_height,
        });
    }

    let (width, height) = match policy {
        ResizePolicy::SameSize => (Extent::Fixed(src_width), Extent::Fixed(src_height)),
        ResizePolicy::Percent(percent) => {
            if percent == 0 {
                return Err(ResizeError::ZeroScale);
            }
            let scaled = (f64::from(src_width) * f64::from(percent) / 100.0).round() as u32;
            (Extent::Fixed(scaled.max(1)), Extent::FromAspect)
        }
        ResizePolicy::FitMode => {
            let src_ratio = f64::from(src_width) / f64::from(src_height);
            if src_ratio > mode.aspect_ratio() {
                (Extent::Fixed(mode.width()), Extent::FromAspect)
            } else {
                (Extent::FromAspect, Extent::Fixed(mode.height()))
            }
        }
    };

    Ok(match (width, height) {
        (Extent::Fixed(w), Extent::Fixed(h)) => TargetDims {
            width: w,
            height: h,
        },
        (Extent::Fixed(w), Extent::FromAspect) => TargetDims {
            width: w,
            height: derive_axis(w, src_height, src_width),
        },
        (Extent::FromAspect, Extent::Fixed(h)) => TargetDims {
            width: derive_axis(h, src_width, src_height),
            height: h,
        },
        (Extent::FromAspect, Extent::FromAspect) => TargetDims {
            width: src_width,
            height: src_height,
        },
    })
}

/// Scale the free axis from the fixed one, rounding to nearest, never below 1.
fn derive_axis(fixed: u32, src_free: u32, src_fixed: u32) -> u32 {
    let derived = (f64::from(fixed) * f64::from(src_free) / f64::from(src_fixed)).round() as u32;
    derived.max(1)
}
