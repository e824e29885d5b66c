use std::path::Path;

use anyhow::Result;
use icon_credits::write_readme;

pub fn make_credits(input: &Path, output: &Path) -> Result<()> {
    let rows = write_readme(input, output)?;
    println!("Wrote {rows} credits to {}", output.display());
    Ok(())
}
