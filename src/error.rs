//! # Error Types
//!
//! This module defines error types used throughout the parrilla library.

use thiserror::Error;

/// Errors raised while rasterizing a barcode into a pixel buffer.
///
/// Never retried; always surfaced to the caller.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The drawable reported a zero-sized raster.
    #[error("invalid barcode dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// The drawable's own draw operation failed.
    #[error("barcode draw failed: {0}")]
    Draw(String),
}

/// Errors raised while encoding or writing an exported image.
///
/// Wraps the underlying cause; export either fully succeeds or fails
/// with one of these.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The barcode could not be rasterized.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// The encoder rejected the pixel buffer.
    #[error("image encoding error: {0}")]
    Encode(#[source] image::ImageError),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
