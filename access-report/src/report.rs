use std::{fs, io, path::PathBuf};

use num_format::{Locale, ToFormattedString};

use crate::{analytics::Report, config::Settings, error::ReportError};

const BANNER_WIDTH: usize = 128;

fn header(report: &Report) -> Vec<String> {
    ["file", "URL"]
        .into_iter()
        .map(String::from)
        .chain(report.hours().iter().map(|h| h.as_str().to_owned()))
        .collect()
}

pub fn write_csv<W: io::Write>(report: &Report, writer: W) -> Result<(), csv::Error> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(header(report))?;
    for row in report.rows() {
        let record = [row.file.as_str().to_owned(), row.url.to_string()]
            .into_iter()
            .chain(row.counts.iter().map(u64::to_string));
        csv.write_record(record)?;
    }
    csv.flush()?;
    Ok(())
}

pub fn write_report_file(report: &Report, settings: &Settings) -> Result<PathBuf, ReportError> {
    fs::create_dir_all(&settings.output_dir).map_err(|source| ReportError::CreateOutputDir {
        path: settings.output_dir.clone(),
        source,
    })?;
    let path = settings.report_path();
    let write_err = |source| ReportError::WriteReport {
        path: path.clone(),
        source,
    };
    let file = fs::File::create(&path).map_err(|e| write_err(e.into()))?;
    write_csv(report, file).map_err(write_err)?;
    Ok(path)
}

pub fn render(report: &Report) -> String {
    let banner = "*".repeat(BANNER_WIDTH);
    if report.is_empty() {
        return format!("{banner}\nno matching requests found\n{banner}\n");
    }

    let mut table = vec![header(report)];
    table.extend(report.rows().map(|row| {
        [row.file.as_str().to_owned(), row.url.to_string()]
            .into_iter()
            .chain(row.counts.iter().map(|c| c.to_formatted_string(&Locale::en)))
            .collect()
    }));

    let columns = table[0].len();
    let widths: Vec<usize> = (0..columns)
        .map(|col| table.iter().map(|cells| cells[col].chars().count()).max().unwrap_or(0))
        .collect();

    let mut out = format!("{banner}\n");
    for cells in &table {
        let line = cells
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(col, (cell, width))| {
                // key columns read left to right, counts line up on the right
                if col < 2 {
                    format!("{cell:<width$}")
                } else {
                    format!("{cell:>width$}")
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out.push_str(&banner);
    out.push('\n');
    out
}
