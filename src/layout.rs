//! Label layout: positioning the human-readable text under the bars.
//!
//! A symbology encoder knows where its bars are; this module computes where
//! the text label and its background box go relative to that bar region.
//! Placement strategies form a closed set ([`LabelLayout`]); only centered
//! placement exists today.

use ab_glyph::{Font, ScaleFont};

/// Pixel gap between the barcode bars and the top of the text underneath.
pub const BARS_TEXT_VGAP: i32 = 5;

/// Horizontal span and top offset of the bar pattern.
///
/// `width` is the absolute right edge of the bar span, in the same
/// coordinate space as `x` — not a span length. Passing a length here
/// silently mis-centers the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarRegion {
    pub x: i32,
    /// Top of the bars; layout measures downward from here.
    pub y: i32,
    /// Right edge of the bar span. Must be >= `x`.
    pub width: i32,
}

/// Measured bounding box of the label text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    pub width: f32,
    pub height: f32,
}

/// Computed placement of the label text and its background box.
///
/// `(text_x, text_y)` is the text baseline position; the background box is
/// the rectangle painted behind the label. All values share the bar
/// region's coordinate origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelGeometry {
    pub text_x: f32,
    pub text_y: f32,
    pub bg_x: i32,
    pub bg_y: i32,
    pub bg_width: i32,
    pub bg_height: i32,
}

/// Label placement strategy.
///
/// A closed set rather than an open hierarchy: every strategy maps the same
/// input pair (bar region, text metrics) to the same output tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelLayout {
    /// Center the text within the bar span, [`BARS_TEXT_VGAP`] pixels
    /// below the bars.
    Centered,
}

impl LabelLayout {
    /// Compute the label geometry for a bar region and measured text.
    ///
    /// Pure arithmetic over already-valid geometry: idempotent, infallible.
    /// The caller ensures `region.width >= region.x` and that the metrics
    /// come from the font the label will be drawn with.
    pub fn calculate(&self, region: BarRegion, text: TextMetrics) -> LabelGeometry {
        match self {
            LabelLayout::Centered => {
                let span = (region.width - region.x) as f32;
                LabelGeometry {
                    text_x: region.x as f32 + (span - text.width) / 2.0,
                    text_y: region.y as f32 + text.height + BARS_TEXT_VGAP as f32,
                    bg_x: region.x,
                    bg_y: region.y,
                    bg_width: region.width - region.x,
                    // One extra pixel so anti-aliased descenders don't clip
                    // at the bottom edge of the box.
                    bg_height: (text.height + BARS_TEXT_VGAP as f32 + 1.0) as i32,
                }
            }
        }
    }
}

/// Measure a single line of text at the given pixel height.
///
/// Width is the sum of glyph advances; height is ascent minus descent.
/// Feeds [`LabelLayout::calculate`] so layout and drawing agree on the
/// same font metrics.
pub fn measure_text<F: Font>(font: &F, px_height: f32, text: &str) -> TextMetrics {
    let scaled = font.as_scaled(px_height);

    let mut width = 0.0f32;
    for ch in text.chars() {
        width += scaled.h_advance(font.glyph_id(ch));
    }

    TextMetrics {
        width,
        height: scaled.ascent() - scaled.descent(),
    }
}
