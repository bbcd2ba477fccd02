//! Encoding rasterized barcodes into bitmap formats.
//!
//! Supports exactly three formats (GIF, JPEG, PNG). Stream writes leave the
//! caller's writer open; file saves own the file handle end-to-end and
//! release it on every exit path.

use std::fs::File;
use std::io::{Cursor, Write};
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;

use crate::drawable::{Drawable, rasterize};
use crate::error::ExportError;

/// An output bitmap format.
///
/// A closed set: no code path ever adds or removes formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Gif,
    Jpeg,
    Png,
}

/// All supported output formats.
pub const SUPPORTED_FORMATS: [ImageFormat; 3] =
    [ImageFormat::Gif, ImageFormat::Jpeg, ImageFormat::Png];

/// The supported output formats as a process-wide constant.
pub fn supported_formats() -> &'static [ImageFormat] {
    &SUPPORTED_FORMATS
}

/// A format tag outside the supported set.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown image format: {0:?}")]
pub struct UnknownFormatError(String);

impl ImageFormat {
    /// Canonical lowercase tag, as used in format negotiation and
    /// file extensions.
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Gif => "gif",
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Png => "png",
        }
    }

    fn to_image_format(self) -> image::ImageFormat {
        match self {
            ImageFormat::Gif => image::ImageFormat::Gif,
            ImageFormat::Jpeg => image::ImageFormat::Jpeg,
            ImageFormat::Png => image::ImageFormat::Png,
        }
    }
}

impl FromStr for ImageFormat {
    type Err = UnknownFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gif" => Ok(ImageFormat::Gif),
            "jpeg" => Ok(ImageFormat::Jpeg),
            "png" => Ok(ImageFormat::Png),
            other => Err(UnknownFormatError(other.to_string())),
        }
    }
}

/// Rasterize a barcode, encode it, and write the bytes to a stream.
///
/// The writer stays open; its lifecycle belongs to the caller.
pub fn write_to<W: Write>(
    barcode: &impl Drawable,
    format: ImageFormat,
    w: &mut W,
) -> Result<(), ExportError> {
    let canvas = rasterize(barcode)?;
    let image = canvas.to_rgb_image();

    // The image encoders need Write + Seek, so encode in memory first,
    // the same way preview rendering produces PNG bytes.
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), format.to_image_format())
        .map_err(ExportError::Encode)?;

    w.write_all(&bytes)?;
    Ok(())
}

/// Rasterize a barcode, encode it, and save it to a file.
///
/// The file handle is scoped to this call and released on every exit path.
/// A sync failure after an otherwise-successful write surfaces as an
/// [`ExportError`]; cleanup failures after a primary error are logged and
/// never replace it.
pub fn save_to(
    barcode: &impl Drawable,
    format: ImageFormat,
    path: impl AsRef<Path>,
) -> Result<(), ExportError> {
    let mut file = File::create(path.as_ref())?;
    match write_to(barcode, format, &mut file) {
        Ok(()) => {
            file.flush()?;
            // Surfaces flush-to-disk failures that a plain close would
            // silently swallow.
            file.sync_all()?;
            Ok(())
        }
        Err(e) => {
            if let Err(sync_err) = file.sync_all() {
                tracing::warn!(
                    error = %sync_err,
                    "ignoring file cleanup failure after failed export"
                );
            }
            Err(e)
        }
    }
}

/// Write a GIF image to a stream.
pub fn write_gif<W: Write>(barcode: &impl Drawable, w: &mut W) -> Result<(), ExportError> {
    write_to(barcode, ImageFormat::Gif, w)
}

/// Write a JPEG image to a stream.
pub fn write_jpeg<W: Write>(barcode: &impl Drawable, w: &mut W) -> Result<(), ExportError> {
    write_to(barcode, ImageFormat::Jpeg, w)
}

/// Write a PNG image to a stream.
pub fn write_png<W: Write>(barcode: &impl Drawable, w: &mut W) -> Result<(), ExportError> {
    write_to(barcode, ImageFormat::Png, w)
}

/// Save a GIF image to a file.
pub fn save_gif(barcode: &impl Drawable, path: impl AsRef<Path>) -> Result<(), ExportError> {
    save_to(barcode, ImageFormat::Gif, path)
}

/// Save a JPEG image to a file.
pub fn save_jpeg(barcode: &impl Drawable, path: impl AsRef<Path>) -> Result<(), ExportError> {
    save_to(barcode, ImageFormat::Jpeg, path)
}

/// Save a PNG image to a file.
pub fn save_png(barcode: &impl Drawable, path: impl AsRef<Path>) -> Result<(), ExportError> {
    save_to(barcode, ImageFormat::Png, path)
}
