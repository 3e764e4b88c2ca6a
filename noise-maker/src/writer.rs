use std::{
    fs, io,
    path::{Path, PathBuf},
};

use chrono::{Days, NaiveDate};
use rand::Rng;

use crate::generator::{generate_w3c_log, header, random_time};

/// Writes `files` daily logs named `u_ex<yymmdd>.log` starting at `start`.
///
/// Requests within a file are in chronological order.
pub fn write_log_files<R: Rng + ?Sized>(
    rng: &mut R,
    folder: &Path,
    start: NaiveDate,
    files: usize,
    lines: usize,
) -> io::Result<Vec<PathBuf>> {
    fs::create_dir_all(folder)?;
    let mut written = Vec::with_capacity(files);
    for day in 0..files {
        let date = start
            .checked_add_days(Days::new(day as u64))
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "date out of range"))?;
        let mut times: Vec<_> = (0..lines).map(|_| random_time(rng)).collect();
        times.sort_unstable();

        let mut buffer = String::with_capacity(lines * 128);
        buffer.push_str(&header(date));
        for time in times {
            buffer.push_str(&generate_w3c_log(rng, date, time));
            buffer.push('\n');
        }
        let path = folder.join(format!("u_ex{}.log", date.format("%y%m%d")));
        fs::write(&path, buffer)?;
        written.push(path);
    }
    Ok(written)
}
