use tracing::info;

use crate::{
    analytics::{Report, analyze_file},
    config::Settings,
    error::ReportError,
    ingest::log_files,
    parser::parse_file,
};

/// Analyses every log file under the input directory, one file at a time in
/// name order, and merges the results into a single report.
pub fn run(settings: &Settings) -> Result<Report, ReportError> {
    let files = log_files(&settings.input_dir, &settings.extension)?;
    let mut report = Report::default();
    for file in files {
        info!(file = %file.name, "analysing");
        let rows = parse_file(&file.path, &settings.comment_marker)?;
        match analyze_file(&file.name, &rows, &settings.urls) {
            Some(table) => report.merge(table)?,
            None => info!(file = %file.name, "no requests for configured URLs, skipping"),
        }
    }
    Ok(report)
}
