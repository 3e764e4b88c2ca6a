use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;
use derive_getters::Getters;

#[derive(Parser, Debug, Getters)]
#[command(name = "noise-maker")]
#[command(about = "Generate fake W3C access log files for testing", long_about = None)]
pub struct CliArgs {
    #[arg(long, default_value = "access_logs")]
    folder: PathBuf,

    /// Number of log files, one per day
    #[arg(long, default_value_t = 3)]
    files: usize,

    /// Request lines per file
    #[arg(long, default_value_t = 1000)]
    lines: usize,

    /// First day to generate, as YYYY-MM-DD. Defaults to today.
    #[arg(long)]
    start_date: Option<NaiveDate>,

    /// Fixed RNG seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}
