//! # Font Atlas
//!
//! Rasterize the printable ASCII range of a monospace font into a single
//! grayscale strip of fixed-width cells, plus a JSON descriptor of the cell
//! geometry.
//!
//! ## Example
//!
//! ```no_run
//! use font_atlas::{FontData, render_family};
//!
//! let font = FontData::open("DejaVuSansMono.ttf").unwrap();
//! // Writes applib/fonts/mono/{12,14}/{bitmap.png,spec.json}
//! render_family(&font, "applib/fonts", "mono", &[12, 14]).unwrap();
//! ```

mod atlas;
mod canvas;
mod charset;
pub mod config;
mod descriptor;
mod error;
mod face;
mod output;

use std::path::{Path, PathBuf};

use log::info;

pub use atlas::{AtlasMetrics, GlyphAtlas, measure_advance};
pub use canvas::GrayCanvas;
pub use charset::{GLYPH_COUNT, GLYPH_RANGE, glyph_set};
pub use descriptor::SizeDescriptor;
pub use error::{Error, Result};
pub use face::{FontData, GlyphFace, ScalableFont, ScaledFace, VerticalMetrics};
pub use output::{FamilyDir, write_atlas};

/// Render one size into `<root>/<name>/<size>`.
///
/// Other sizes already present for the family are left alone and the
/// descriptor carries no `size` key.
pub fn render_size<F: ScalableFont>(
    font: &F,
    root: impl AsRef<Path>,
    name: &str,
    size: u32,
) -> Result<PathBuf> {
    if size == 0 {
        return Err(Error::InvalidSize(size));
    }
    let dir = FamilyDir::new(root, name).size_dir(size);
    render_into(font, &dir, size, None)?;
    Ok(dir)
}

/// Regenerate a family from scratch for the given sizes.
///
/// The family directory is removed first so sizes dropped from the list do
/// not survive. Sizes are rendered in order; the first failure aborts the run
/// and leaves earlier sizes on disk.
pub fn render_family<F: ScalableFont>(
    font: &F,
    root: impl AsRef<Path>,
    name: &str,
    sizes: &[u32],
) -> Result<Vec<PathBuf>> {
    if sizes.is_empty() {
        return Err(Error::EmptySizeList);
    }
    if let Some(&size) = sizes.iter().find(|&&size| size == 0) {
        return Err(Error::InvalidSize(size));
    }

    let family = FamilyDir::new(root, name);
    family.reset()?;

    sizes
        .iter()
        .map(|&size| {
            let dir = family.size_dir(size);
            render_into(font, &dir, size, Some(size))?;
            Ok(dir)
        })
        .collect()
}

fn render_into<F: ScalableFont>(
    font: &F,
    dir: &Path,
    size: u32,
    descriptor_size: Option<u32>,
) -> Result<()> {
    let face = font.at_size(size)?;
    let atlas = GlyphAtlas::render(&face)?;
    let metrics = &atlas.metrics;
    info!(
        "Size {size}: {} glyphs, cell {}x{}, baseline {}",
        metrics.glyph_count, metrics.glyph_width, metrics.glyph_height, metrics.baseline_offset
    );
    write_atlas(dir, &atlas, &SizeDescriptor::new(metrics, descriptor_size))
}
