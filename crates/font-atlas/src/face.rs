//! Font loading and per-size glyph access.

use std::{fs::read, path::Path};

use skrifa::{
    FontRef, GlyphId, MetadataProvider,
    charmap::Charmap,
    instance::{LocationRef, Size},
    metrics::GlyphMetrics,
    outline::{
        DrawSettings, HintingInstance, HintingOptions, OutlineGlyphCollection, OutlinePen,
        pen::NullPen,
    },
};
use tiny_skia::{Path as OutlinePath, PathBuilder};

use crate::{Error, Result};

/// Vertical extent of a glyph cell in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerticalMetrics {
    /// Distance from the top of the cell to the baseline.
    pub ascent: u32,
    /// Distance from the baseline to the bottom of the cell.
    pub descent: u32,
}

impl VerticalMetrics {
    /// Cell height, or `None` if it does not fit in a `u32`.
    pub fn height(&self) -> Option<u32> {
        self.ascent.checked_add(self.descent)
    }
}

/// A font face bound to one pixel size.
///
/// Outlines are returned in pixels, Y-up, with the origin on the baseline at
/// the pen position.
pub trait GlyphFace {
    fn vertical_metrics(&self) -> VerticalMetrics;

    fn advance(&self, ch: char) -> Result<f32>;

    /// `None` for glyphs without ink (e.g. space).
    fn outline(&self, ch: char) -> Result<Option<OutlinePath>>;
}

/// A font that can be instantiated at a pixel size.
pub trait ScalableFont {
    type Face<'a>: GlyphFace
    where
        Self: 'a;

    fn at_size(&self, size: u32) -> Result<Self::Face<'_>>;
}

/// Raw font file contents, validated as a scalable font.
#[derive(Debug, Clone)]
pub struct FontData {
    data: Vec<u8>,
}

impl FontData {
    /// Read and validate a font file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = read(path).map_err(|e| Error::io(path, e))?;
        Self::from_bytes(data)
    }

    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let font = FontRef::new(&data)?;
        if font.outline_glyphs().format().is_none() {
            return Err(Error::NoOutlines);
        }
        Ok(Self { data })
    }
}

impl ScalableFont for FontData {
    type Face<'a> = ScaledFace<'a>;

    fn at_size(&self, size: u32) -> Result<ScaledFace<'_>> {
        if size == 0 {
            return Err(Error::InvalidSize(size));
        }
        let font = FontRef::new(&self.data)?;
        ScaledFace::new(&font, Size::new(size as f32))
    }
}

/// A `skrifa` face at a fixed size and the default variation location.
///
/// Glyphs are hinted with the font's own instructions (or the autohinter as a
/// fallback), so advances land on whole pixels the way FreeType's default load
/// does.
pub struct ScaledFace<'a> {
    hinting: HintingInstance,
    vertical: VerticalMetrics,
    charmap: Charmap<'a>,
    glyph_metrics: GlyphMetrics<'a>,
    outlines: OutlineGlyphCollection<'a>,
}

impl<'a> ScaledFace<'a> {
    fn new(font: &FontRef<'a>, size: Size) -> Result<Self> {
        let location = LocationRef::default();
        let metrics = font.metrics(size, location);
        // Round outward to whole pixels so nothing between the extremes is clipped.
        let vertical = VerticalMetrics {
            ascent: metrics.ascent.max(0.0).ceil() as u32,
            descent: (-metrics.descent).max(0.0).ceil() as u32,
        };

        let outlines = font.outline_glyphs();
        let hinting = HintingInstance::new(&outlines, size, location, HintingOptions::default())
            .map_err(Error::Hinting)?;

        Ok(Self {
            hinting,
            vertical,
            charmap: font.charmap(),
            glyph_metrics: font.glyph_metrics(size, location),
            outlines,
        })
    }

    /// Unmapped characters render as `.notdef`.
    fn glyph_id(&self, ch: char) -> GlyphId {
        self.charmap.map(ch).unwrap_or(GlyphId::NOTDEF)
    }
}

impl GlyphFace for ScaledFace<'_> {
    fn vertical_metrics(&self) -> VerticalMetrics {
        self.vertical
    }

    /// Hinted advance, falling back to the scaled `hmtx` advance when the
    /// scaler does not adjust it.
    fn advance(&self, ch: char) -> Result<f32> {
        let gid = self.glyph_id(ch);
        let hinted = match self.outlines.get(gid) {
            Some(glyph) => {
                glyph
                    .draw(DrawSettings::hinted(&self.hinting, false), &mut NullPen)
                    .map_err(|source| Error::Draw { ch, source })?
                    .advance_width
            }
            None => None,
        };
        Ok(hinted.or_else(|| self.glyph_metrics.advance_width(gid)).unwrap_or_default())
    }

    fn outline(&self, ch: char) -> Result<Option<OutlinePath>> {
        let Some(glyph) = self.outlines.get(self.glyph_id(ch)) else {
            return Ok(None);
        };

        let mut pen = PathPen::new();
        glyph
            .draw(DrawSettings::hinted(&self.hinting, false), &mut pen)
            .map_err(|source| Error::Draw { ch, source })?;
        Ok(pen.finish())
    }
}

/// Collects `skrifa` drawing commands into a `tiny_skia` path.
struct PathPen {
    builder: PathBuilder,
}

impl PathPen {
    fn new() -> Self {
        Self { builder: PathBuilder::new() }
    }

    fn finish(self) -> Option<OutlinePath> {
        self.builder.finish()
    }
}

impl OutlinePen for PathPen {
    fn move_to(&mut self, x: f32, y: f32) {
        self.builder.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.builder.line_to(x, y);
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        self.builder.quad_to(cx0, cy0, x, y);
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.builder.cubic_to(cx0, cy0, cx1, cy1, x, y);
    }

    fn close(&mut self) {
        self.builder.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_metrics_height() {
        let metrics = VerticalMetrics { ascent: 12, descent: 4 };
        assert_eq!(metrics.height(), Some(16));
    }

    #[test]
    fn test_vertical_metrics_height_overflow() {
        let metrics = VerticalMetrics { ascent: u32::MAX, descent: 1 };
        assert_eq!(metrics.height(), None);
    }

    #[test]
    fn test_from_bytes_rejects_garbage() {
        let err = FontData::from_bytes(b"definitely not a font".to_vec()).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_open_missing_file() {
        let err = FontData::open("does/not/exist.ttf").unwrap_err();
        match err {
            Error::Io { path, .. } => assert_eq!(path, Path::new("does/not/exist.ttf")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_pen_builds_path() {
        let mut pen = PathPen::new();
        pen.move_to(0.0, 0.0);
        pen.line_to(4.0, 0.0);
        pen.quad_to(6.0, 2.0, 4.0, 4.0);
        pen.curve_to(3.0, 5.0, 1.0, 5.0, 0.0, 4.0);
        pen.close();

        let path = pen.finish().unwrap();
        let bounds = path.bounds();
        assert_eq!(bounds.left(), 0.0);
        assert_eq!(bounds.top(), 0.0);
        assert!(bounds.right() >= 4.0);
    }

    #[test]
    fn test_empty_pen_has_no_path() {
        assert!(PathPen::new().finish().is_none());
    }
}
