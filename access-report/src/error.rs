use std::path::PathBuf;

use thiserror::Error;

use crate::invariants::{FileName, UrlPath};

/// Why a single log line was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LineError {
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("time-taken '{value}' is not a whole number of milliseconds")]
    TimeTaken { value: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("no URLs configured")]
    EmptyUrlList,

    #[error("URL {url} is configured more than once")]
    DuplicateUrl { url: UrlPath },

    #[error("comment marker must not be empty")]
    EmptyCommentMarker,

    #[error("log file extension must not be empty")]
    EmptyExtension,
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to read input directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read log file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed log line at {path}:{line}: {reason}")]
    MalformedLine {
        path: PathBuf,
        line: usize,
        #[source]
        reason: LineError,
    },

    #[error("no files ending in .{extension} found in {path}")]
    EmptyInputDirectory { path: PathBuf, extension: String },

    #[error("duplicate report row for file {file} and URL {url}")]
    DuplicateKey { file: FileName, url: UrlPath },

    #[error("failed to create output directory {path}: {source}")]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write report to {path}: {source}")]
    WriteReport {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}
