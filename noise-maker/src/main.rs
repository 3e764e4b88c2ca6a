mod args;
mod generator;
mod writer;

use args::CliArgs;
use chrono::Local;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use writer::write_log_files;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();
    let mut rng = match args.seed() {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_os_rng(),
    };
    let start = args
        .start_date()
        .unwrap_or_else(|| Local::now().date_naive());
    println!(
        "Writing {} log files of {} requests to {}",
        args.files(),
        args.lines(),
        args.folder().display()
    );

    let written = write_log_files(&mut rng, args.folder(), start, *args.files(), *args.lines())?;
    for path in written {
        println!("{}", path.display());
    }
    Ok(())
}
