//! The per-file conversion pipeline and the batch loop around it.
//!
//! decode -> plan output size -> resample -> quantize -> write GIF

use std::fs::File;
use std::io::{BufWriter, Write as _};
use std::path::{Path, PathBuf};

use gif::{Encoder, Frame};
use image::imageops::{self, FilterType};
use image::ImageReader;
use tracing::{debug, info};

use retro_dither::{plan_dimensions, quantize, IndexedImage, Mode, ResizePolicy, Rgb};

use crate::error::ConvertError;

/// Name of the GIF written for `path` in `mode`.
///
/// The full input file name is kept, extension included, with the canonical
/// mode name appended: `photo.jpg` in mode `CGA1` becomes
/// `photo.jpg_CGA1.gif`. Using the canonical name keeps output names stable
/// however the user spelled the mode.
pub fn output_file_name(path: &Path, mode: &Mode) -> String {
    let base = path.file_name().unwrap_or(path.as_os_str()).to_string_lossy();
    format!("{base}_{}.gif", mode.name())
}

/// Convert one image file and write the resulting GIF into `out_dir`.
///
/// Returns the path of the written file.
///
/// # Errors
///
/// Any step can fail per file: opening, decoding, size planning, exceeding
/// the GIF dimension limit, encoding, or writing. See [`ConvertError`].
pub fn convert_file(
    path: &Path,
    out_dir: &Path,
    mode: &Mode,
    policy: ResizePolicy,
) -> Result<PathBuf, ConvertError> {
    let reader = ImageReader::open(path)
        .map_err(ConvertError::Open)?
        .with_guessed_format()
        .map_err(ConvertError::Open)?;
    let decoded = reader.decode()?;

    // Alpha, if present, is discarded here.
    let rgb = decoded.to_rgb8();
    let (src_width, src_height) = rgb.dimensions();
    debug!(width = src_width, height = src_height, "decoded source");

    let dims = plan_dimensions(src_width, src_height, mode, policy)?;
    if dims.width > u32::from(u16::MAX) || dims.height > u32::from(u16::MAX) {
        return Err(ConvertError::TooLarge {
            width: dims.width,
            height: dims.height,
        });
    }
    debug!(width = dims.width, height = dims.height, "planned output size");

    let resized = if (dims.width, dims.height) == (src_width, src_height) {
        rgb
    } else {
        imageops::resize(&rgb, dims.width, dims.height, FilterType::CatmullRom)
    };

    let pixels: Vec<Rgb> = resized
        .pixels()
        .map(|p| Rgb::new(p.0[0], p.0[1], p.0[2]))
        .collect();
    let indices = quantize(
        &pixels,
        dims.width as usize,
        dims.height as usize,
        mode.palette(),
    );
    let indexed = IndexedImage::new(indices, dims.width, dims.height, mode.palette().clone());

    let out_path = out_dir.join(output_file_name(path, mode));
    write_gif(&out_path, &indexed)?;
    Ok(out_path)
}

/// Write an indexed image as a single-frame GIF with a global palette.
fn write_gif(path: &Path, image: &IndexedImage) -> Result<(), ConvertError> {
    let file = File::create(path).map_err(ConvertError::Write)?;
    let mut writer = BufWriter::new(file);
    let palette = image.palette_bytes();
    {
        let mut encoder = Encoder::new(
            &mut writer,
            image.width() as u16,
            image.height() as u16,
            &palette,
        )?;
        let frame = Frame::from_indexed_pixels(
            image.width() as u16,
            image.height() as u16,
            image.indices().to_vec(),
            None,
        );
        encoder.write_frame(&frame)?;
    }
    writer.flush().map_err(ConvertError::Write)?;
    Ok(())
}

/// Convert each file in turn, reporting failures to stderr.
///
/// A failing file never stops the batch. Returns the number of files that
/// failed.
pub fn run_batch(files: &[PathBuf], out_dir: &Path, mode: &Mode, policy: ResizePolicy) -> usize {
    let mut errors = 0;
    for path in files {
        match convert_file(path, out_dir, mode, policy) {
            Ok(written) => {
                info!(
                    input = %path.display(),
                    output = %written.display(),
                    "converted"
                );
            }
            Err(err) => {
                errors += 1;
                eprintln!("{}: {err}", path.display());
            }
        }
    }
    errors
}
