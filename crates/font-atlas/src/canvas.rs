//! Single-channel raster the atlas is drawn into.

use tiny_skia::{Color, FillRule, Paint, Path, Pixmap, Transform};

use crate::{Error, Result};

/// An 8-bit grayscale canvas.
///
/// Backed by a `tiny_skia::Pixmap`; glyphs are painted white over a zeroed
/// background, so the coverage of a pixel is its alpha.
pub struct GrayCanvas {
    pixmap: Pixmap,
}

impl GrayCanvas {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap = Pixmap::new(width, height).ok_or(Error::EmptyCanvas { width, height })?;
        Ok(Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Fill a Y-up outline with its origin placed at `(x, baseline)` on the canvas.
    pub fn fill_outline(&mut self, path: &Path, x: f32, baseline: f32) {
        let mut paint = Paint::default();
        paint.set_color(Color::WHITE);
        paint.anti_alias = true;

        let transform = Transform::from_row(1.0, 0.0, 0.0, -1.0, x, baseline);
        self.pixmap.fill_path(path, &paint, FillRule::Winding, transform, None);
    }

    /// Intensity at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<u8> {
        self.pixmap.pixel(x, y).map(|p| p.alpha())
    }

    /// Row-major grayscale samples.
    pub fn to_gray(&self) -> Vec<u8> {
        self.pixmap.pixels().iter().map(|p| p.alpha()).collect()
    }

    /// Encode the canvas as an 8-bit grayscale PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut out, self.width(), self.height());
            encoder.set_color(png::ColorType::Grayscale);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header()?;
            writer.write_image_data(&self.to_gray())?;
            writer.finish()?;
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use tiny_skia::{PathBuilder, Rect};

    use super::*;

    fn square(size: f32) -> Path {
        PathBuilder::from_rect(Rect::from_ltrb(0.0, 0.0, size, size).unwrap())
    }

    #[test]
    fn test_empty_canvas_rejected() {
        assert!(matches!(
            GrayCanvas::new(0, 10),
            Err(Error::EmptyCanvas { width: 0, height: 10 })
        ));
    }

    #[test]
    fn test_new_canvas_is_black() {
        let canvas = GrayCanvas::new(4, 3).unwrap();
        assert_eq!(canvas.to_gray(), vec![0; 12]);
    }

    #[test]
    fn test_fill_outline_flips_y() {
        let mut canvas = GrayCanvas::new(8, 8).unwrap();
        // Square sitting on a baseline at y=6, origin at x=2.
        canvas.fill_outline(&square(3.0), 2.0, 6.0);

        assert_eq!(canvas.pixel(2, 3), Some(255));
        assert_eq!(canvas.pixel(4, 5), Some(255));
        assert_eq!(canvas.pixel(2, 6), Some(0));
        assert_eq!(canvas.pixel(1, 4), Some(0));
        assert_eq!(canvas.pixel(5, 4), Some(0));
        assert_eq!(canvas.pixel(2, 2), Some(0));
    }

    #[test]
    fn test_encode_png_grayscale() {
        let mut canvas = GrayCanvas::new(5, 4).unwrap();
        canvas.fill_outline(&square(2.0), 0.0, 2.0);
        let bytes = canvas.encode_png().unwrap();

        let decoder = png::Decoder::new(Cursor::new(bytes));
        let mut reader = decoder.read_info().unwrap();
        let mut buf = vec![0; reader.output_buffer_size().unwrap()];
        let info = reader.next_frame(&mut buf).unwrap();

        assert_eq!((info.width, info.height), (5, 4));
        assert_eq!(info.color_type, png::ColorType::Grayscale);
        assert_eq!(&buf[..info.buffer_size()], canvas.to_gray().as_slice());
    }
}
