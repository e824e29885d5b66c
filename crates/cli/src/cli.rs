//! CLI definitions and command dispatch.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, value_parser};
use font_atlas::config::DEFAULT_FONTS_DIR;
use icon_credits::{CREDITS_FILENAME, README_FILENAME};

use crate::{clean::clean_family, credits::make_credits, fonts};

#[derive(Parser)]
#[command(name = "applib-assets")]
#[command(about = "Generate applib font atlases and icon credits")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, clap::Args)]
pub struct FontArgs {
    /// Font file (TTF/OTF)
    #[arg(long)]
    pub font: PathBuf,
    /// Family name, used as the output directory name
    #[arg(long)]
    pub name: String,
    #[arg(long, default_value = DEFAULT_FONTS_DIR)]
    pub out_dir: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render one size, keeping the family's other sizes
    Font {
        #[command(flatten)]
        args: FontArgs,
        #[arg(long, value_parser = value_parser!(u32).range(1..))]
        size: u32,
    },
    /// Regenerate a family from scratch for a comma-separated size list
    Fonts {
        #[command(flatten)]
        args: FontArgs,
        #[arg(long, required = true, value_delimiter = ',', value_parser = value_parser!(u32).range(1..))]
        sizes: Vec<u32>,
    },
    /// Write the icon attribution table
    Credits {
        #[arg(long, default_value = ".")]
        dir: PathBuf,
        #[arg(long, default_value = CREDITS_FILENAME)]
        input: PathBuf,
        #[arg(long, default_value = README_FILENAME)]
        output: PathBuf,
    },
    /// Remove a generated font family
    Clean {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = DEFAULT_FONTS_DIR)]
        out_dir: PathBuf,
    },
}

impl Commands {
    pub fn run(self) -> Result<()> {
        match self {
            Commands::Font { args, size } => {
                fonts::make_font(&args.font, &args.out_dir, &args.name, size)?;
            }
            Commands::Fonts { args, sizes } => {
                fonts::make_fonts(&args.font, &args.out_dir, &args.name, &sizes)?;
            }
            Commands::Credits { dir, input, output } => {
                make_credits(&dir.join(input), &dir.join(output))?;
            }
            Commands::Clean { name, out_dir } => {
                clean_family(&out_dir, &name)?;
            }
        }
        Ok(())
    }
}
