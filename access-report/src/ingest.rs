use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::warn;

use crate::{error::ReportError, invariants::FileName};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFile {
    pub name: FileName,
    pub path: PathBuf,
}

/// Lists the regular files in `dir` whose name ends with `.{extension}`,
/// sorted by name.
pub fn log_files(dir: &Path, extension: &str) -> Result<Vec<LogFile>, ReportError> {
    let read_dir_err = |source| ReportError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };
    let suffix = format!(".{extension}");
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_err)? {
        let path = entry.map_err(read_dir_err)?.path();
        if !path.is_file() {
            continue;
        }
        let Some(raw) = path.file_name() else {
            continue;
        };
        let Some(name) = raw.to_str() else {
            if raw.to_string_lossy().ends_with(&suffix) {
                warn!(path = %path.display(), "skipping log file with a non UTF-8 name");
            }
            continue;
        };
        if name.ends_with(&suffix) {
            files.push(LogFile {
                name: FileName::from(name),
                path: path.clone(),
            });
        }
    }
    if files.is_empty() {
        return Err(ReportError::EmptyInputDirectory {
            path: dir.to_path_buf(),
            extension: extension.into(),
        });
    }
    files.sort_unstable_by(|a, b| a.name.cmp(&b.name));
    Ok(files)
}

pub fn read_log(path: &Path) -> Result<String, ReportError> {
    fs::read_to_string(path).map_err(|source| ReportError::ReadFile {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use asserting::prelude::*;
    use std::fs::{File, create_dir};
    use tempfile::TempDir;

    fn names(files: &[LogFile]) -> Vec<&str> {
        files.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn lists_matching_files_sorted() {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join("u_ex190302.log")).unwrap();
        File::create(dir.path().join("u_ex190301.log")).unwrap();
        File::create(dir.path().join("notes.txt")).unwrap();
        File::create(dir.path().join("archive.log.gz")).unwrap();

        let files = log_files(dir.path(), "log").unwrap();
        assert_that!(names(&files)).is_equal_to(vec!["u_ex190301.log", "u_ex190302.log"]);
        assert_eq!(files[0].path, dir.path().join("u_ex190301.log"));
    }

    #[test]
    fn skips_directories() {
        let dir = TempDir::new().unwrap();
        create_dir(dir.path().join("old.log")).unwrap();
        File::create(dir.path().join("new.log")).unwrap();

        let files = log_files(dir.path(), "log").unwrap();
        assert_that!(names(&files)).is_equal_to(vec!["new.log"]);
    }

    #[cfg(unix)]
    #[test]
    fn skips_non_utf8_names() {
        use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

        let dir = TempDir::new().unwrap();
        File::create(dir.path().join(OsStr::from_bytes(b"bad\xff.log"))).unwrap();
        File::create(dir.path().join("good.log")).unwrap();

        let files = log_files(dir.path(), "log").unwrap();
        assert_that!(names(&files)).is_equal_to(vec!["good.log"]);
    }

    #[test]
    fn empty_directory_is_reported() {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join("readme.md")).unwrap();

        let err = log_files(dir.path(), "log").unwrap_err();
        assert!(matches!(err, ReportError::EmptyInputDirectory { .. }));
        assert_that!(err.to_string()).contains(".log");
    }

    #[test]
    fn missing_directory_is_a_read_error() {
        let dir = TempDir::new().unwrap();
        let err = log_files(&dir.path().join("absent"), "log").unwrap_err();
        assert!(matches!(err, ReportError::ReadDir { .. }));
    }
}
