//! Uncompressed 24-bit bitmap output.
//!
//! Files are written by the `image` crate's BMP codec: a 14 byte file header, a 40 byte info
//! header, then the pixel rows bottom-up in blue-green-red order, each padded to four bytes.

use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Error};
use image::{codecs::bmp::BmpEncoder, ExtendedColorType, ImageEncoder, ImageFormat};

use crate::canvas::Canvas;

/// Encode `canvas` as a bitmap into `out`.
pub fn encode<W: Write>(canvas: &Canvas, mut out: W) -> Result<(), Error> {
    let encoder = BmpEncoder::new(&mut out);
    encoder.write_image(
        &canvas.data(),
        canvas.width(),
        canvas.height(),
        ExtendedColorType::Rgb8,
    )?;
    out.flush()?;
    Ok(())
}

/// Write `canvas` to the file at `path`, replacing it if it exists.
pub fn save(canvas: &Canvas, path: &Path) -> Result<(), Error> {
    let file = File::create(path).with_context(|| format!("failed to create `{}`", path.display()))?;
    encode(canvas, BufWriter::new(file))
        .with_context(|| format!("failed to write `{}`", path.display()))
}

/// Read a bitmap back into a [`Canvas`].
pub fn load(path: &Path) -> Result<Canvas, Error> {
    let file = File::open(path).with_context(|| format!("failed to open `{}`", path.display()))?;
    let img = image::load(BufReader::new(file), ImageFormat::Bmp)
        .with_context(|| format!("failed to decode `{}`", path.display()))?;
    Ok(Canvas::from_image(&img.to_rgb8()))
}

/// Decode an in-memory bitmap.
pub fn decode(bytes: &[u8]) -> Result<Canvas, Error> {
    let img = image::load_from_memory_with_format(bytes, ImageFormat::Bmp)?;
    Ok(Canvas::from_image(&img.to_rgb8()))
}
