use std::path::Path;

use anyhow::Result;
use font_atlas::FamilyDir;

pub fn clean_family(out_dir: &Path, name: &str) -> Result<bool> {
    let family = FamilyDir::new(out_dir, name);

    let removed = family.reset()?;
    if removed {
        println!("Removed {}", family.path().display());
    } else {
        println!("Skipped {} (not found)", family.path().display());
    }

    Ok(removed)
}
