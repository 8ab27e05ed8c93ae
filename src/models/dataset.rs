use clap::ValueEnum;
use std::fmt;

/// The catalogs this tool knows how to curate.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dataset {
    Measurements,
    Durations,
}

impl Dataset {
    pub const ALL: [Dataset; 2] = [Dataset::Measurements, Dataset::Durations];

    pub fn file_name(self) -> &'static str {
        match self {
            Dataset::Measurements => "world_measurements.json",
            Dataset::Durations => "world_durations.json",
        }
    }

    pub fn policy_file_name(self) -> &'static str {
        match self {
            Dataset::Measurements => "measurements.yaml",
            Dataset::Durations => "durations.yaml",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}
