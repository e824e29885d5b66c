use anyhow::Result;
use applib_assets_cli::cli::Cli;
use clap::Parser;
use env_logger::init;

fn main() -> Result<()> {
    init();
    Cli::parse().command.run()
}
