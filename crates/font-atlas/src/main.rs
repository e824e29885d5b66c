use std::{path::PathBuf, process::ExitCode};

use clap::{ArgGroup, Parser, value_parser};
use font_atlas::{FontData, Result, config::DEFAULT_FONTS_DIR, render_family, render_size};

#[derive(Parser)]
#[command(name = "font-atlas", version)]
#[command(about = "Rasterize a monospace font into fixed-width glyph atlases")]
#[command(group(ArgGroup::new("sizes_arg").required(true).args(["size", "sizes"])))]
struct Cli {
    /// Font file (TTF/OTF)
    #[arg(long)]
    font: PathBuf,

    /// Family name, used as the output directory name
    #[arg(long)]
    name: String,

    /// Render a single size, keeping other sizes of the family
    #[arg(long, value_parser = value_parser!(u32).range(1..))]
    size: Option<u32>,

    /// Comma-separated sizes; replaces the whole family directory
    #[arg(long, value_delimiter = ',', value_parser = value_parser!(u32).range(1..))]
    sizes: Option<Vec<u32>>,

    /// Root directory for font families
    #[arg(long, default_value = DEFAULT_FONTS_DIR)]
    out_dir: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let font = FontData::open(&cli.font)?;

    if let Some(size) = cli.size {
        let dir = render_size(&font, &cli.out_dir, &cli.name, size)?;
        println!("Wrote {}", dir.display());
    } else {
        let sizes = cli.sizes.unwrap_or_default();
        let dirs = render_family(&font, &cli.out_dir, &cli.name, &sizes)?;
        println!("Wrote {} sizes for {}", dirs.len(), cli.name);
    }

    Ok(())
}
