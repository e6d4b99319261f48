use anyhow::Result;
use clap::Parser;
use pennywise::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
