//! Remove and rename catalog items according to the curation policies.

use anyhow::{Context, Result};
use clap::Parser;
use curator::cli::Cli;
use curator::clean_dataset;

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
        let report = clean_dataset(&options, dataset)
            .with_context(|| format!("cleaning {} aborted", dataset))?;
        if i > 0 {
            println!();
        }
        print!("{}", report);
    }
    Ok(())
}
