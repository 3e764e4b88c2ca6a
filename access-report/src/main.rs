mod analytics;
mod config;
mod error;
mod ingest;
mod invariants;
mod logging;
mod models;
mod parser;
mod pipeline;
mod report;

use std::process::ExitCode;

use clap::Parser;
use config::{Args, Settings};
use error::ReportError;
use tracing::{error, info, warn};

fn main() -> ExitCode {
    logging::init_logging();
    match analyse(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn analyse(args: Args) -> Result<(), ReportError> {
    let settings = Settings::resolve(args)?;
    let report = pipeline::run(&settings)?;
    if report.is_empty() {
        warn!(
            input_dir = %settings.input_dir.display(),
            "no requests matched any configured URL"
        );
    }
    let path = report::write_report_file(&report, &settings)?;
    info!(path = %path.display(), rows = report.len(), "report written");
    print!("{}", report::render(&report));
    Ok(())
}
