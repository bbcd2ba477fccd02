//! # Parrilla - Barcode Rendering and Export Library
//!
//! Parrilla is the output stage of a barcode pipeline: it turns an
//! already-computed barcode drawing into pixels and standard bitmap files.
//! It provides:
//!
//! - **Rasterization**: indexed-color pixel buffers sized exactly to the barcode
//! - **Export**: GIF, JPEG, and PNG encoding to streams or files
//! - **Label layout**: centered placement of the human-readable text under the bars
//!
//! Symbology encoders (Code 128, Code 39, PDF417, ...) live outside this
//! crate; they plug in through the [`Drawable`] trait.
//!
//! ## Quick Start
//!
//! ```
//! use parrilla::{Canvas, Drawable, RenderError, canvas::BLACK, save_png};
//!
//! // A drawable barcode, normally produced by a symbology encoder.
//! struct Bars;
//!
//! impl Drawable for Bars {
//!     fn width(&self) -> u32 { 40 }
//!     fn height(&self) -> u32 { 30 }
//!     fn draw(&self, canvas: &mut Canvas, x: i32, y: i32) -> Result<(), RenderError> {
//!         for bar in (0..40).step_by(4) {
//!             canvas.fill_rect(x + bar, y, 2, 30, BLACK);
//!         }
//!         Ok(())
//!     }
//! }
//!
//! # let dir = std::env::temp_dir();
//! save_png(&Bars, dir.join("bars.png"))?;
//! # Ok::<(), parrilla::ExportError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`canvas`] | Indexed-color pixel buffer and drawing surface |
//! | [`drawable`] | The drawable-barcode capability and the rasterizer |
//! | [`layout`] | Label text and background-box placement |
//! | [`export`] | Bitmap encoding and stream/file output |
//! | [`error`] | Error types |

pub mod canvas;
pub mod drawable;
pub mod error;
pub mod export;
pub mod layout;

// Re-exports for convenience
pub use canvas::Canvas;
pub use drawable::{Drawable, rasterize};
pub use error::{ExportError, RenderError};
pub use export::{
    ImageFormat, save_gif, save_jpeg, save_png, save_to, supported_formats, write_gif,
    write_jpeg, write_png, write_to,
};
pub use layout::{BarRegion, LabelGeometry, LabelLayout, TextMetrics, measure_text};
