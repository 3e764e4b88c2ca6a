use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use clap::Parser;
use serde::Deserialize;

use crate::{error::ConfigError, invariants::UrlPath};

const DEFAULT_URLS: [&str; 3] = ["/app/reports", "/app/to-do", "/app/report-history"];

/// Counts hourly requests to selected URLs across a directory of access logs.
#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// TOML file providing defaults for every other flag
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Name of the report written inside the output directory
    #[arg(long)]
    pub output_file: Option<String>,

    /// Only files ending in `.<extension>` are analysed
    #[arg(long)]
    pub extension: Option<String>,

    #[arg(long)]
    pub comment_marker: Option<String>,

    /// URL path to count, matched exactly against `cs-uri-stem`. Repeatable; order is kept.
    #[arg(long = "url")]
    pub urls: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub output_file: String,
    pub extension: String,
    pub comment_marker: String,
    pub urls: Vec<UrlPath>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input_dir: "access_logs".into(),
            output_dir: "output".into(),
            output_file: "final.csv".into(),
            extension: "log".into(),
            comment_marker: "#".into(),
            urls: DEFAULT_URLS.into_iter().map(UrlPath::from).collect(),
        }
    }
}

impl Settings {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Layers command line flags over the config file (or built-in defaults).
    pub fn resolve(args: Args) -> Result<Self, ConfigError> {
        let mut settings = match &args.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        if let Some(dir) = args.input_dir {
            settings.input_dir = dir;
        }
        if let Some(dir) = args.output_dir {
            settings.output_dir = dir;
        }
        if let Some(name) = args.output_file {
            settings.output_file = name;
        }
        if let Some(ext) = args.extension {
            settings.extension = ext;
        }
        if let Some(marker) = args.comment_marker {
            settings.comment_marker = marker;
        }
        if !args.urls.is_empty() {
            settings.urls = args.urls.iter().map(|u| UrlPath::from(u.as_str())).collect();
        }
        settings.extension = settings.extension.trim_start_matches('.').to_string();
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.urls.is_empty() {
            return Err(ConfigError::EmptyUrlList);
        }
        let mut seen = HashSet::new();
        for url in &self.urls {
            if !seen.insert(url) {
                return Err(ConfigError::DuplicateUrl { url: url.clone() });
            }
        }
        if self.comment_marker.is_empty() {
            return Err(ConfigError::EmptyCommentMarker);
        }
        if self.extension.is_empty() {
            return Err(ConfigError::EmptyExtension);
        }
        Ok(())
    }

    pub fn report_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use asserting::prelude::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("report.toml");
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn defaults_without_flags() {
        let settings = Settings::resolve(Args::default()).unwrap();
        assert_that!(&settings).is_equal_to(&Settings::default());
        assert_eq!(settings.report_path(), PathBuf::from("output/final.csv"));
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::try_parse_from([
            "access-report",
            "--input-dir",
            "/var/log/iis",
            "--extension",
            ".txt",
            "--url",
            "/b",
            "--url",
            "/a",
        ])
        .unwrap();
        let settings = Settings::resolve(args).unwrap();
        assert_eq!(settings.input_dir, PathBuf::from("/var/log/iis"));
        assert_eq!(settings.extension, "txt");
        assert_eq!(settings.urls, vec![UrlPath::from("/b"), UrlPath::from("/a")]);
        assert_eq!(settings.output_dir, PathBuf::from("output"));
    }

    #[test]
    fn file_is_layered_under_flags() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
input_dir = "logs"
output_file = "hours.csv"
urls = ["/x", "/y"]
"#,
        );
        let args = Args {
            config: Some(path),
            output_file: Some("override.csv".into()),
            ..Args::default()
        };
        let settings = Settings::resolve(args).unwrap();
        assert_eq!(settings.input_dir, PathBuf::from("logs"));
        assert_eq!(settings.output_file, "override.csv");
        assert_eq!(settings.urls, vec![UrlPath::from("/x"), UrlPath::from("/y")]);
        assert_eq!(settings.comment_marker, "#");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "input_directory = \"logs\"\n");
        let err = Settings::from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn duplicate_urls_are_rejected() {
        let args = Args {
            urls: vec!["/a".into(), "/b".into(), "/a".into()],
            ..Args::default()
        };
        let err = Settings::resolve(args).unwrap_err();
        assert_that!(err.to_string()).is_equal_to("URL /a is configured more than once".to_string());
    }

    #[test]
    fn empty_values_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "urls = []\n");
        let args = Args {
            config: Some(path),
            ..Args::default()
        };
        assert!(matches!(
            Settings::resolve(args),
            Err(ConfigError::EmptyUrlList)
        ));

        let args = Args {
            comment_marker: Some(String::new()),
            ..Args::default()
        };
        assert!(matches!(
            Settings::resolve(args),
            Err(ConfigError::EmptyCommentMarker)
        ));

        let args = Args::try_parse_from(["access-report", "--extension", "."]).unwrap();
        assert!(matches!(
            Settings::resolve(args),
            Err(ConfigError::EmptyExtension)
        ));
    }
}
