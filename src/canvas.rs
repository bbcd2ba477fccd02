//! Indexed-color drawing canvas.
//!
//! `Canvas` is both the pixel buffer and the drawing surface: a fixed-size
//! row-major raster of palette indices plus the palette itself. Barcodes
//! paint bars, label background, and label text onto it; the exporter
//! materializes it to RGB for encoding.
//!
//! Dimensions are fixed at creation. Out-of-bounds draws are clipped,
//! never grow the buffer, never panic.

use ab_glyph::{Font, ScaleFont};
use image::{Rgb, RgbImage};

/// Palette index of the white background fill.
pub const WHITE: u8 = 0;
/// Palette index of the black ink.
pub const BLACK: u8 = 1;

/// Glyph coverage at or above this becomes ink; an indexed raster has no
/// room for anti-aliased edges.
const INK_COVERAGE: f32 = 0.5;

/// An owned indexed-color raster with drawing operations.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    /// Palette indices, `width * height` entries, row-major.
    pixels: Vec<u8>,
    palette: Vec<Rgb<u8>>,
}

impl Canvas {
    /// Create a canvas filled with the white background color.
    ///
    /// The palette starts with two entries: [`WHITE`] and [`BLACK`].
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![WHITE; width as usize * height as usize],
            palette: vec![Rgb([255, 255, 255]), Rgb([0, 0, 0])],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Register a color and return its palette index.
    ///
    /// Returns the existing index if the color is already in the palette,
    /// or `None` once the palette holds 256 entries.
    pub fn add_color(&mut self, color: Rgb<u8>) -> Option<u8> {
        if let Some(i) = self.palette.iter().position(|c| *c == color) {
            return Some(i as u8);
        }
        if self.palette.len() >= 256 {
            return None;
        }
        self.palette.push(color);
        Some((self.palette.len() - 1) as u8)
    }

    /// Set one pixel to a palette index.
    ///
    /// Out-of-bounds coordinates and unregistered indices are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, index: u8) {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return;
        }
        if index as usize >= self.palette.len() {
            return;
        }
        self.pixels[y as usize * self.width as usize + x as usize] = index;
    }

    /// Palette index at a pixel, or `None` outside the canvas.
    pub fn index_at(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y as usize * self.width as usize + x as usize])
    }

    /// Resolved color at a pixel, or `None` outside the canvas.
    pub fn color_at(&self, x: u32, y: u32) -> Option<Rgb<u8>> {
        self.index_at(x, y).map(|i| self.palette[i as usize])
    }

    /// Fill a rectangle, clipped to the canvas bounds.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, index: u8) {
        if index as usize >= self.palette.len() {
            return;
        }
        let x0 = x.max(0) as u32;
        let y0 = y.max(0) as u32;
        let x1 = (x as i64 + w as i64).clamp(0, self.width as i64) as u32;
        let y1 = (y as i64 + h as i64).clamp(0, self.height as i64) as u32;
        for py in y0..y1 {
            let row = py as usize * self.width as usize;
            for px in x0..x1 {
                self.pixels[row + px as usize] = index;
            }
        }
    }

    /// Draw a line of text with its baseline at `(x, y)`.
    ///
    /// Glyphs are rasterized with ab_glyph and thresholded at 50% coverage
    /// into the given palette index. Pixels outside the canvas are clipped.
    pub fn draw_text<F: Font>(
        &mut self,
        font: &F,
        px_height: f32,
        text: &str,
        x: f32,
        y: f32,
        index: u8,
    ) {
        if index as usize >= self.palette.len() {
            return;
        }
        let scaled = font.as_scaled(px_height);

        let mut caret_x = x;
        for ch in text.chars() {
            let glyph_id = font.glyph_id(ch);
            let advance = scaled.h_advance(glyph_id);

            let glyph =
                glyph_id.with_scale_and_position(px_height, ab_glyph::point(caret_x, y));
            if let Some(outlined) = font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                outlined.draw(|px, py, coverage| {
                    if coverage >= INK_COVERAGE {
                        let gx = px as i32 + bounds.min.x as i32;
                        let gy = py as i32 + bounds.min.y as i32;
                        self.set_pixel(gx, gy, index);
                    }
                });
            }

            caret_x += advance;
        }
    }

    /// Materialize the palette into a full-color image for encoding.
    pub fn to_rgb_image(&self) -> RgbImage {
        let mut img = RgbImage::new(self.width, self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                let idx = self.pixels[y as usize * self.width as usize + x as usize];
                img.put_pixel(x, y, self.palette[idx as usize]);
            }
        }
        img
    }
}
