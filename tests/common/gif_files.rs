//! Reading back the GIF files the pipeline writes.

use std::fs::File;
use std::path::Path;

/// The parts of a written GIF that tests assert on.
pub struct DecodedGif {
    pub width: u16,
    pub height: u16,
    /// Global color table as flat RGB bytes.
    pub palette: Vec<u8>,
    /// One palette index per pixel, row-major.
    pub indices: Vec<u8>,
}

/// Decode a single-frame indexed GIF from disk.
///
/// Panics on anything unexpected. Tests want loud failures here, not error
/// plumbing.
pub fn read_gif(path: &Path) -> DecodedGif {
    let file = File::open(path).expect("output GIF should exist");
    let mut options = gif::DecodeOptions::new();
    options.set_color_output(gif::ColorOutput::Indexed);
    let mut decoder = options.read_info(file).expect("output should be a GIF");

    let palette = decoder
        .global_palette()
        .expect("output GIF should carry a global palette")
        .to_vec();
    let frame = decoder
        .read_next_frame()
        .expect("frame should decode")
        .expect("output GIF should have one frame");

    DecodedGif {
        width: frame.width,
        height: frame.height,
        palette,
        indices: frame.buffer.to_vec(),
    }
}
