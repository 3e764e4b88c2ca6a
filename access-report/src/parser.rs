use std::path::Path;

use tracing::debug;

use crate::{
    error::{LineError, ReportError},
    ingest::read_log,
    models::{FIELDS, LogRow},
};

/// Parses every request line of the file at `path`.
///
/// Blank lines and lines starting with `comment_marker` are skipped. The
/// first line that does not split into exactly fifteen columns aborts the
/// whole file.
pub fn parse_file(path: &Path, comment_marker: &str) -> Result<Vec<LogRow>, ReportError> {
    let contents = read_log(path)?;
    let rows = parse_lines(&contents, comment_marker).map_err(|(line, reason)| {
        ReportError::MalformedLine {
            path: path.to_path_buf(),
            line,
            reason,
        }
    })?;
    debug!(path = %path.display(), rows = rows.len(), "parsed log file");
    Ok(rows)
}

/// Parses a whole log body, reporting the 1-based number of the first bad line.
fn parse_lines(contents: &str, comment_marker: &str) -> Result<Vec<LogRow>, (usize, LineError)> {
    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim_start();
            !line.is_empty() && !line.starts_with(comment_marker)
        })
        .map(|(idx, line)| parse_line(line).map_err(|e| (idx + 1, e)))
        .collect()
}

pub fn parse_line(line: &str) -> Result<LogRow, LineError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let &[
        date,
        time,
        server_ip,
        method,
        uri_stem,
        uri_query,
        port,
        username,
        client_ip,
        user_agent,
        referer,
        status,
        sub_status,
        win32_status,
        time_taken,
    ] = parts.as_slice()
    else {
        return Err(LineError::FieldCount {
            expected: FIELDS.len(),
            found: parts.len(),
        });
    };
    let time_taken: u64 = time_taken.parse().map_err(|_| LineError::TimeTaken {
        value: time_taken.into(),
    })?;
    Ok(LogRow {
        date: date.into(),
        time: time.into(),
        server_ip: server_ip.into(),
        method: method.into(),
        uri_stem: uri_stem.into(),
        uri_query: uri_query.into(),
        port: port.into(),
        username: username.into(),
        client_ip: client_ip.into(),
        user_agent: user_agent.into(),
        referer: referer.into(),
        status: status.into(),
        sub_status: sub_status.into(),
        win32_status: win32_status.into(),
        time_taken,
    })
}
