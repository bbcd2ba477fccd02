//! # Pipeline Tests
//!
//! End-to-end tests driving a real Code 39 symbology (via barcoders) through
//! rasterization, label layout, and every supported export format.

use barcoders::sym::code39::Code39;
use image::Rgb;
use parrilla::canvas::{BLACK, WHITE};
use parrilla::{
    BarRegion, Canvas, Drawable, ExportError, ImageFormat, LabelLayout, RenderError,
    TextMetrics, rasterize, save_png, save_to, supported_formats, write_to,
};
use pretty_assertions::assert_eq;

/// Pixels of quiet zone on each side of the bars.
const QUIET_ZONE: u32 = 10;
/// Bar height in pixels.
const BAR_HEIGHT: u32 = 50;

/// A linear barcode drawable backed by the barcoders Code 39 encoder.
///
/// Paints bars, then a light-gray background box under them where the data
/// text would sit, placed by the centered label layout.
struct Code39Barcode {
    bars: Vec<bool>,
    label: String,
}

impl Code39Barcode {
    fn new(data: &str) -> Self {
        let encoded = Code39::new(data).unwrap().encode();
        // Each module is 2 pixels wide for visibility
        let mut bars = Vec::with_capacity(encoded.len() * 2);
        for &module in &encoded {
            let is_bar = module == 1;
            bars.push(is_bar);
            bars.push(is_bar);
        }
        Self {
            bars,
            label: data.to_string(),
        }
    }

    /// Stand-in metrics for the label; real callers measure with a font.
    fn label_metrics(&self) -> TextMetrics {
        TextMetrics {
            width: self.label.chars().count() as f32 * 6.0,
            height: 10.0,
        }
    }

    fn geometry(&self) -> parrilla::LabelGeometry {
        let region = BarRegion {
            x: QUIET_ZONE as i32,
            y: BAR_HEIGHT as i32,
            width: (QUIET_ZONE + self.bars.len() as u32) as i32,
        };
        LabelLayout::Centered.calculate(region, self.label_metrics())
    }
}

impl Drawable for Code39Barcode {
    fn width(&self) -> u32 {
        self.bars.len() as u32 + QUIET_ZONE * 2
    }

    fn height(&self) -> u32 {
        BAR_HEIGHT + self.geometry().bg_height as u32
    }

    fn draw(&self, canvas: &mut Canvas, x: i32, y: i32) -> Result<(), RenderError> {
        for (i, &is_bar) in self.bars.iter().enumerate() {
            if is_bar {
                canvas.fill_rect(x + QUIET_ZONE as i32 + i as i32, y, 1, BAR_HEIGHT, BLACK);
            }
        }

        let geometry = self.geometry();
        let gray = canvas
            .add_color(Rgb([230, 230, 230]))
            .ok_or_else(|| RenderError::Draw("palette full".into()))?;
        canvas.fill_rect(
            x + geometry.bg_x,
            y + geometry.bg_y,
            geometry.bg_width as u32,
            geometry.bg_height as u32,
            gray,
        );
        Ok(())
    }
}

#[test]
fn test_rasterized_dimensions_match_drawable() {
    let barcode = Code39Barcode::new("HELLO-123");
    let canvas = rasterize(&barcode).unwrap();
    assert_eq!(canvas.width(), barcode.width());
    assert_eq!(canvas.height(), barcode.height());
}

#[test]
fn test_quiet_zone_stays_white() {
    let barcode = Code39Barcode::new("A");
    let canvas = rasterize(&barcode).unwrap();
    for x in 0..QUIET_ZONE {
        assert_eq!(canvas.index_at(x, 0), Some(WHITE));
        assert_eq!(canvas.index_at(canvas.width() - 1 - x, 0), Some(WHITE));
    }
}

#[test]
fn test_bars_are_painted() {
    let barcode = Code39Barcode::new("A");
    let canvas = rasterize(&barcode).unwrap();
    // Code 39 always starts with a bar after the quiet zone
    assert_eq!(canvas.index_at(QUIET_ZONE, 0), Some(BLACK));
    assert_eq!(canvas.index_at(QUIET_ZONE, BAR_HEIGHT - 1), Some(BLACK));
}

#[test]
fn test_label_background_sits_below_bars() {
    let barcode = Code39Barcode::new("A");
    let canvas = rasterize(&barcode).unwrap();
    let geometry = barcode.geometry();

    assert_eq!(geometry.bg_y as u32, BAR_HEIGHT);
    // Inside the background box: the gray fill, not white and not a bar
    let inside = canvas
        .color_at(QUIET_ZONE + 1, BAR_HEIGHT + 2)
        .unwrap();
    assert_eq!(inside, Rgb([230, 230, 230]));
    // Left of the box, the quiet zone column stays white
    assert_eq!(canvas.index_at(0, BAR_HEIGHT + 2), Some(WHITE));
}

#[test]
fn test_every_format_streams_decodable_bytes() {
    let barcode = Code39Barcode::new("PARRILLA");
    for &format in supported_formats() {
        let mut bytes = Vec::new();
        write_to(&barcode, format, &mut bytes).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.width(), barcode.width());
        assert_eq!(decoded.height(), barcode.height());
    }
}

#[test]
fn test_save_png_round_trip() {
    let barcode = Code39Barcode::new("HELLO-123");
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("barcode.png");

    save_png(&barcode, &path).unwrap();

    let decoded = image::open(&path).unwrap().to_rgb8();
    let original = rasterize(&barcode).unwrap().to_rgb_image();
    assert_eq!(decoded.dimensions(), original.dimensions());
    // PNG is lossless: byte-exact pixels
    assert_eq!(decoded.as_raw(), original.as_raw());
}

#[test]
fn test_save_gif_round_trip() {
    let barcode = Code39Barcode::new("HELLO-123");
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("barcode.gif");

    parrilla::save_gif(&barcode, &path).unwrap();

    let decoded = image::open(&path).unwrap().to_rgb8();
    let original = rasterize(&barcode).unwrap().to_rgb_image();
    assert_eq!(decoded.dimensions(), original.dimensions());
    // GIF is palette-based: with well under 256 distinct colors the
    // encoder keeps every pixel exact
    assert_eq!(decoded.as_raw(), original.as_raw());
}

#[test]
fn test_save_to_unwritable_path_fails_with_export_error() {
    let barcode = Code39Barcode::new("A");
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("barcode.png");

    let err = save_to(&barcode, ImageFormat::Png, &path).unwrap_err();
    assert!(matches!(err, ExportError::Io(_)));
    // Nothing was created along the way
    assert!(!dir.path().join("missing").exists());
    // The handle was released, so the directory can be removed cleanly
    dir.close().unwrap();
}

#[test]
fn test_save_all_formats_create_nonempty_files() {
    let barcode = Code39Barcode::new("HELLO-123");
    let dir = tempfile::tempdir().unwrap();
    for &format in supported_formats() {
        let path = dir.path().join(format!("barcode.{}", format.extension()));
        save_to(&barcode, format, &path).unwrap();
        let len = std::fs::metadata(&path).unwrap().len();
        assert!(len > 0, "{} file is empty", format.extension());
    }
}
