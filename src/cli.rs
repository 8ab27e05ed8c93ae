use crate::models::Dataset;
use crate::pipeline::RunOptions;
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

/// Arguments shared by `clean-data` and `mark-proper-nouns`.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory holding world_measurements.json and world_durations.json
    #[arg(long, default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data"))]
    pub data_dir: PathBuf,

    /// Directory holding the per-dataset curation policies
    #[arg(long, default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/config"))]
    pub config_dir: PathBuf,

    /// Only process the given dataset (repeatable; default: all)
    #[arg(long = "dataset", value_enum)]
    pub datasets: Vec<Dataset>,

    /// Report what would change without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Log per-item decisions
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn run_options(&self) -> RunOptions {
        let datasets = Dataset::ALL
            .into_iter()
            .filter(|dataset| self.datasets.is_empty() || self.datasets.contains(dataset))
            .collect();

        RunOptions {
            data_dir: self.data_dir.clone(),
            config_dir: self.config_dir.clone(),
            datasets,
            dry_run: self.dry_run,
        }
    }

    /// Log to stderr at `warn` unless `RUST_LOG` says otherwise; `--verbose`
    /// forces `debug`.
    pub fn init_logging(&self) {
        let mut builder =
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
        if self.verbose {
            builder.filter_level(LevelFilter::Debug);
        }
        builder.init();
    }
}
