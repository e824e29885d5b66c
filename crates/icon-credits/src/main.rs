use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use icon_credits::{CREDITS_FILENAME, README_FILENAME, Result, write_readme};

#[derive(Parser)]
#[command(name = "icon-credits", version)]
#[command(about = "Render icon credits as a Markdown table")]
struct Cli {
    /// Directory the input and output paths are relative to
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// Credits JSON (filename -> {link, author})
    #[arg(long, default_value = CREDITS_FILENAME)]
    input: PathBuf,

    /// Markdown output, overwritten
    #[arg(long, default_value = README_FILENAME)]
    output: PathBuf,
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
    let output = cli.dir.join(&cli.output);
    let rows = write_readme(cli.dir.join(&cli.input), &output)?;
    println!("Wrote {rows} credits to {}", output.display());
    Ok(())
}
