//! On-disk layout: `<root>/<family>/<size>/{bitmap.png,spec.json}`.

use std::{
    fs::{create_dir_all, remove_dir_all, write},
    io::ErrorKind,
    path::{Path, PathBuf},
};

use log::info;

use crate::{
    Error, Result,
    atlas::GlyphAtlas,
    config::{BITMAP_FILENAME, DESCRIPTOR_FILENAME},
    descriptor::SizeDescriptor,
};

/// The directory holding every size of one font family.
#[derive(Debug, Clone)]
pub struct FamilyDir {
    path: PathBuf,
}

impl FamilyDir {
    /// The family name is used verbatim as a path segment.
    pub fn new(root: impl AsRef<Path>, name: &str) -> Self {
        Self { path: root.as_ref().join(name) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn size_dir(&self, size: u32) -> PathBuf {
        self.path.join(size.to_string())
    }

    /// Recursively delete the family directory.
    ///
    /// Returns whether anything was removed; a missing directory is not an error.
    pub fn reset(&self) -> Result<bool> {
        match remove_dir_all(&self.path) {
            Ok(()) => {
                info!("Removed {}", self.path.display());
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(Error::io(&self.path, e)),
        }
    }
}

/// Write the atlas image and its descriptor into `dir`, creating it as needed.
pub fn write_atlas(dir: &Path, atlas: &GlyphAtlas, descriptor: &SizeDescriptor) -> Result<()> {
    create_dir_all(dir).map_err(|e| Error::io(dir, e))?;

    let bitmap_path = dir.join(BITMAP_FILENAME);
    write(&bitmap_path, atlas.canvas.encode_png()?).map_err(|e| Error::io(&bitmap_path, e))?;
    info!("Wrote {}", bitmap_path.display());

    let descriptor_path = dir.join(DESCRIPTOR_FILENAME);
    write(&descriptor_path, descriptor.to_json()?).map_err(|e| Error::io(&descriptor_path, e))?;
    info!("Wrote {}", descriptor_path.display());

    Ok(())
}
