//! Set or clear the `proper_noun` marker on every catalog item.

use anyhow::{Context, Result};
use clap::Parser;
use curator::cli::Cli;
use curator::mark_dataset;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    cli.init_logging();
    let options = cli.run_options();

    for (i, dataset) in options.datasets.iter().copied().enumerate() {
        let report = mark_dataset(&options, dataset)
            .with_context(|| format!("marking {} aborted", dataset))?;
        if i > 0 {
            println!();
        }
        print!("{}", report);
    }
    Ok(())
}
