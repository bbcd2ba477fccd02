//! The drawable-barcode capability and the rasterizer.
//!
//! Symbology encoders live outside this crate. All the rasterizer needs
//! from them is the [`Drawable`] capability: report pixel dimensions and
//! paint onto a [`Canvas`] at a given offset.

use crate::canvas::Canvas;
use crate::error::RenderError;

/// Something that can paint itself onto a canvas.
///
/// Implementors report their full pixel size (any quiet-zone margin must
/// already be part of it) and draw bars, label background, and label text
/// relative to the given origin. Neither the rasterizer nor the exporter
/// retains a drawable beyond a single call.
pub trait Drawable {
    /// Full raster width in pixels.
    fn width(&self) -> u32;

    /// Full raster height in pixels.
    fn height(&self) -> u32;

    /// Paint onto the canvas with the drawable's origin at `(x, y)`.
    fn draw(&self, canvas: &mut Canvas, x: i32, y: i32) -> Result<(), RenderError>;
}

impl<T: Drawable + ?Sized> Drawable for &T {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn draw(&self, canvas: &mut Canvas, x: i32, y: i32) -> Result<(), RenderError> {
        (**self).draw(canvas, x, y)
    }
}

/// Rasterize a barcode into a fresh canvas of exactly its reported size.
///
/// The barcode is always drawn at the canvas origin; no translation,
/// scaling, or extra margin is applied here. The canvas is returned only
/// after the draw completes, so no caller can observe a partially-drawn
/// buffer.
pub fn rasterize(barcode: &impl Drawable) -> Result<Canvas, RenderError> {
    let (width, height) = (barcode.width(), barcode.height());
    if width == 0 || height == 0 {
        return Err(RenderError::InvalidDimensions { width, height });
    }
    let mut canvas = Canvas::new(width, height);
    barcode.draw(&mut canvas, 0, 0)?;
    Ok(canvas)
}
