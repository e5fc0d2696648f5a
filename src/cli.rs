use std::path::PathBuf;

use clap::{ArgAction, Parser};
use log::LevelFilter;

use crate::summary::DEFAULT_DATASET_FILE;

/// nutri_calc: enter foods and quantities, get a running nutrition total.
#[derive(Parser, Debug)]
#[command(name = "nutri_calc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the nutrition dataset JSON file.
    #[arg(short, long, default_value = DEFAULT_DATASET_FILE)]
    pub file: PathBuf,

    /// Show how each entry was matched under every summary.
    #[arg(short, long)]
    pub breakdown: bool,

    /// Increase log output (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }
}
