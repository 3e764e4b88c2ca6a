use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::{
    error::ReportError,
    invariants::{FileName, HourBucket, UrlPath},
    models::LogRow,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourHit<'a> {
    pub row: &'a LogRow,
    pub hour: HourBucket,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlSummary {
    pub file: FileName,
    pub url: UrlPath,
    pub counts: BTreeMap<HourBucket, u64>,
}

impl UrlSummary {
    pub fn count(&self, hour: &HourBucket) -> u64 {
        self.counts.get(hour).copied().unwrap_or(0)
    }
}

// every row carries an entry for every hour in `hours`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTable {
    pub file: FileName,
    pub hours: BTreeSet<HourBucket>,
    pub rows: Vec<UrlSummary>,
}

pub fn tag_hours<'a>(rows: &'a [LogRow], urls: &[UrlPath]) -> Vec<HourHit<'a>> {
    rows.iter()
        .filter(|row| urls.iter().any(|url| url.as_str() == row.uri_stem))
        .map(|row| HourHit {
            row,
            hour: HourBucket::from_time(&row.time),
        })
        .collect()
}

pub fn summarize_url(hits: &[HourHit<'_>], url: &UrlPath, file: &FileName) -> UrlSummary {
    let mut counts: BTreeMap<HourBucket, u64> = BTreeMap::new();
    for hit in hits.iter().filter(|h| h.row.uri_stem == url.as_str()) {
        *counts.entry(hit.hour.clone()).or_default() += 1;
    }
    UrlSummary {
        file: file.clone(),
        url: url.clone(),
        counts,
    }
}

pub fn combine_file(file: &FileName, summaries: Vec<UrlSummary>) -> Option<FileTable> {
    if summaries.is_empty() {
        return None;
    }
    let hours: BTreeSet<HourBucket> = summaries
        .iter()
        .flat_map(|s| s.counts.keys().cloned())
        .collect();
    let rows = summaries
        .into_iter()
        .map(|mut summary| {
            for hour in &hours {
                summary.counts.entry(hour.clone()).or_insert(0);
            }
            summary
        })
        .collect();
    Some(FileTable {
        file: file.clone(),
        hours,
        rows,
    })
}

/// Runs filter, per-URL counting and per-file stacking for one file.
///
/// A file without a single request for a configured URL yields `None`.
/// Otherwise every configured URL gets a row, all zeros if it was never hit.
pub fn analyze_file(file: &FileName, rows: &[LogRow], urls: &[UrlPath]) -> Option<FileTable> {
    let hits = tag_hours(rows, urls);
    if hits.is_empty() {
        return None;
    }
    let summaries = urls
        .iter()
        .map(|url| summarize_url(&hits, url, file))
        .collect();
    combine_file(file, summaries)
}

#[derive(Debug, Default)]
pub struct Report {
    hours: BTreeSet<HourBucket>,
    rows: Vec<UrlSummary>,
    keys: HashSet<(FileName, UrlPath)>,
}

impl Report {
    pub fn merge(&mut self, table: FileTable) -> Result<(), ReportError> {
        let mut fresh = HashSet::with_capacity(table.rows.len());
        for row in &table.rows {
            let key = (row.file.clone(), row.url.clone());
            if self.keys.contains(&key) || !fresh.insert(key.clone()) {
                let (file, url) = key;
                return Err(ReportError::DuplicateKey { file, url });
            }
        }
        self.keys.extend(fresh);
        self.hours.extend(table.hours);
        self.rows.extend(table.rows);
        Ok(())
    }

    pub fn hours(&self) -> &BTreeSet<HourBucket> {
        &self.hours
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Rows in merge order, each with one count per column of [`Report::hours`].
    pub fn rows(&self) -> impl Iterator<Item = ReportRow<'_>> {
        self.rows.iter().map(|summary| ReportRow {
            file: &summary.file,
            url: &summary.url,
            counts: self.hours.iter().map(|h| summary.count(h)).collect(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow<'a> {
    pub file: &'a FileName,
    pub url: &'a UrlPath,
    pub counts: Vec<u64>,
}
