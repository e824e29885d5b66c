//! Fixed-width glyph atlas layout.

use log::debug;

use crate::{
    Error, Result,
    canvas::GrayCanvas,
    charset::{GLYPH_COUNT, glyph_set},
    face::GlyphFace,
};

/// Cell geometry shared by every glyph in an atlas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtlasMetrics {
    pub glyph_count: u32,
    pub glyph_height: u32,
    pub glyph_width: u32,
    /// Baseline position from the top of a cell (the font's ascent).
    pub baseline_offset: u32,
}

impl AtlasMetrics {
    /// Pixel width of the whole strip, or `None` if it does not fit in a `u32`.
    pub fn atlas_width(&self) -> Option<u32> {
        self.glyph_count.checked_mul(self.glyph_width)
    }

    /// Left edge of the `index`-th cell.
    pub fn cell_x(&self, index: u32) -> u32 {
        index * self.glyph_width
    }
}

/// A rendered strip of glyph cells plus its geometry.
pub struct GlyphAtlas {
    pub metrics: AtlasMetrics,
    pub canvas: GrayCanvas,
}

impl GlyphAtlas {
    /// Measure and draw every glyph of the character set.
    ///
    /// Fails before anything is drawn if the advances differ, since the atlas
    /// has no per-glyph width table.
    pub fn render(face: &impl GlyphFace) -> Result<Self> {
        let vertical = face.vertical_metrics();
        let advance = measure_advance(face)?;

        let metrics = AtlasMetrics {
            glyph_count: GLYPH_COUNT,
            glyph_height: vertical.height().ok_or(Error::CanvasOverflow)?,
            glyph_width: advance.ceil() as u32,
            baseline_offset: vertical.ascent,
        };
        debug!("Advance {advance} -> cell {}x{}", metrics.glyph_width, metrics.glyph_height);

        let width = metrics.atlas_width().ok_or(Error::CanvasOverflow)?;
        let mut canvas = GrayCanvas::new(width, metrics.glyph_height)?;
        let baseline = metrics.baseline_offset as f32;
        for (index, ch) in (0..).zip(glyph_set()) {
            if let Some(path) = face.outline(ch)? {
                canvas.fill_outline(&path, metrics.cell_x(index) as f32, baseline);
            }
        }

        Ok(Self { metrics, canvas })
    }
}

/// The advance shared by every character of the set.
pub fn measure_advance(face: &impl GlyphFace) -> Result<f32> {
    let mut common = None;
    for ch in glyph_set() {
        let found = face.advance(ch)?;
        match common {
            None => common = Some(found),
            Some(expected) if expected != found => {
                return Err(Error::NonUniformAdvance { ch, expected, found });
            }
            Some(_) => {}
        }
    }
    Ok(common.unwrap_or_default())
}
