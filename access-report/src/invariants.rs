use std::{convert::Infallible, str::FromStr};

use derive_more::{AsRef, Debug, Display};
use serde::Deserialize;

/// A request path as it appears in the `cs-uri-stem` column.
#[derive(Debug, Display, AsRef, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct UrlPath(String);

impl UrlPath {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl FromStr for UrlPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.into()))
    }
}

impl From<&str> for UrlPath {
    fn from(value: &str) -> Self {
        Self(value.into())
    }
}

/// Name of an analysed log file, without its directory.
#[derive(Debug, Display, AsRef, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileName(String);

impl FileName {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for FileName {
    fn from(value: &str) -> Self {
        Self(value.into())
    }
}

/// Hour-of-day label: whatever precedes the first `:` of the `time` column.
///
/// The label is kept verbatim, so `"9"` and `"09"` are distinct buckets.
#[derive(Debug, Display, AsRef, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HourBucket(String);

impl HourBucket {
    pub fn from_time(time: &str) -> Self {
        let hour = time.split_once(':').map_or(time, |(hour, _)| hour);
        Self(hour.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for HourBucket {
    fn from(value: &str) -> Self {
        Self(value.into())
    }
}
