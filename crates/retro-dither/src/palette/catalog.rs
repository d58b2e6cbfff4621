//! Constant palettes of the emulated hardware, plus the generated VGA cube.
//!
//! The 2- and 4-color CGA palettes and the EGA 16-color table are literal
//! constants taken from the hardware's RGBI conventions: full-intensity
//! channels at 0xAA, the bright boost adding 0x55, and the famous brown
//! exception where EGA index 6 halves its green instead of showing dark
//! yellow. The 256-color VGA table is generated from a fixed 8x8x4 channel
//! cube.

use crate::color::Rgb;

/// Black and white, for the 1 bpp high-resolution CGA mode.
pub const MONOCHROME: [Rgb; 2] = [Rgb::new(0x00, 0x00, 0x00), Rgb::new(0xFF, 0xFF, 0xFF)];

/// CGA mode 4 palette 0, low intensity: green / red / brown.
pub const CGA_PALETTE0: [Rgb; 4] = [
    Rgb::new(0x00, 0x00, 0x00),
    Rgb::new(0x00, 0xAA, 0x00),
    Rgb::new(0xAA, 0x00, 0x00),
    Rgb::new(0xAA, 0x55, 0x00),
];

/// CGA mode 4 palette 0, high intensity: light green / light red / yellow.
pub const CGA_PALETTE0_BRIGHT: [Rgb; 4] = [
    Rgb::new(0x00, 0x00, 0x00),
    Rgb::new(0x55, 0xFF, 0x55),
    Rgb::new(0xFF, 0x55, 0x55),
    Rgb::new(0xFF, 0xFF, 0x55),
];

/// CGA mode 4 palette 1, low intensity: cyan / magenta / light gray.
pub const CGA_PALETTE1: [Rgb; 4] = [
    Rgb::new(0x00, 0x00, 0x00),
    Rgb::new(0x00, 0xAA, 0xAA),
    Rgb::new(0xAA, 0x00, 0xAA),
    Rgb::new(0xAA, 0xAA, 0xAA),
];

/// CGA mode 4 palette 1, high intensity: light cyan / light magenta / white.
pub const CGA_PALETTE1_BRIGHT: [Rgb; 4] = [
    Rgb::new(0x00, 0x00, 0x00),
    Rgb::new(0x55, 0xFF, 0xFF),
    Rgb::new(0xFF, 0x55, 0xFF),
    Rgb::new(0xFF, 0xFF, 0xFF),
];

/// The EGA 16-color table, in hardware order.
///
/// The background override addresses this table by index 0-15, so the order
/// is a compatibility contract.
pub const EGA_COLORS: [Rgb; 16] = [
    Rgb::new(0x00, 0x00, 0x00), // 0: black
    Rgb::new(0x00, 0x00, 0xAA), // 1: blue
    Rgb::new(0x00, 0xAA, 0x00), // 2: green
    Rgb::new(0x00, 0xAA, 0xAA), // 3: cyan
    Rgb::new(0xAA, 0x00, 0x00), // 4: red
    Rgb::new(0xAA, 0x00, 0xAA), // 5: magenta
    Rgb::new(0xAA, 0x55, 0x00), // 6: brown
    Rgb::new(0xAA, 0xAA, 0xAA), // 7: light gray
    Rgb::new(0x55, 0x55, 0x55), // 8: dark gray
    Rgb::new(0x55, 0x55, 0xFF), // 9: light blue
    Rgb::new(0x55, 0xFF, 0x55), // 10: light green
    Rgb::new(0x55, 0xFF, 0xFF), // 11: light cyan
    Rgb::new(0xFF, 0x55, 0x55), // 12: light red
    Rgb::new(0xFF, 0x55, 0xFF), // 13: light magenta
    Rgb::new(0xFF, 0xFF, 0x55), // 14: yellow
    Rgb::new(0xFF, 0xFF, 0xFF), // 15: white
];

/// Generate the 256-entry VGA-style RGB cube.
///
/// Channels are spread over 8 red levels, 8 green levels and 4 blue levels,
/// each level computed as `round(index * 255 / (levels - 1))`. The nesting
/// order is a compatibility contract: red is the outer loop, green the
/// middle, blue the inner, so the entry for cube position `(r, g, b)` sits
/// at index `r*32 + g*4 + b`. Stored VGA pixel values depend on this exact
/// enumeration; any reordering silently remaps every VGA image.
pub fn vga_colors() -> Vec<Rgb> {
    let mut colors = Vec::with_capacity(256);
    for r in 0..8u32 {
        let red = channel_level(r, 7);
        for g in 0..8u32 {
            let green = channel_level(g, 7);
            for b in 0..4u32 {
                let blue = channel_level(b, 3);
                colors.push(Rgb::new(red, green, blue));
            }
        }
    }
    colors
}

/// Spread a level index over 0..=255, rounding half up.
fn channel_level(index: u32, max_index: u32) -> u8 {
    (0.5 + f64::from(index) * 255.0 / f64::from(max_index)) as u8
}
