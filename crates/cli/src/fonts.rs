//! Font atlas commands.

use std::path::Path;

use anyhow::{Context, Result};
use font_atlas::{FontData, render_family, render_size};

pub fn make_font(font: &Path, out_dir: &Path, name: &str, size: u32) -> Result<()> {
    let data = FontData::open(font)?;
    let dir = render_size(&data, out_dir, name, size)
        .with_context(|| format!("Failed to render {name} at size {size}"))?;
    println!("Wrote {}", dir.display());
    Ok(())
}

pub fn make_fonts(font: &Path, out_dir: &Path, name: &str, sizes: &[u32]) -> Result<()> {
    let data = FontData::open(font)?;
    let dirs = render_family(&data, out_dir, name, sizes)
        .with_context(|| format!("Failed to render family {name}"))?;
    for dir in &dirs {
        println!("Wrote {}", dir.display());
    }
    println!("Rendered {} sizes for {name}", dirs.len());
    Ok(())
}
