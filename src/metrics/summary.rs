use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::error::MetricsError;

use super::{LatencyHistogram, TimingRecord};

/// Latency statistics for a single URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlSummary {
    pub url: String,
    pub count: u64,
    pub min_ms: u64,
    pub max_ms: u64,
    pub mean_ms: u64,
    pub p50_ms: u64,
    pub p90_ms: u64,
    pub p99_ms: u64,
}

#[derive(Debug)]
struct UrlAccumulator {
    count: u64,
    sum_ms: u128,
    min_ms: u64,
    max_ms: u64,
    histogram: LatencyHistogram,
}

/// Summarizes records per URL, ordered by URL.
///
/// # Errors
///
/// Returns an error if a histogram cannot be created or updated.
pub fn summarize_by_url(records: &[TimingRecord]) -> Result<Vec<UrlSummary>, MetricsError> {
    let mut by_url: BTreeMap<&str, UrlAccumulator> = BTreeMap::new();

    for record in records {
        let acc = match by_url.entry(record.url.as_str()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(UrlAccumulator {
                count: 0,
                sum_ms: 0,
                min_ms: u64::MAX,
                max_ms: 0,
                histogram: LatencyHistogram::new()?,
            }),
        };
        acc.count = acc.count.saturating_add(1);
        acc.sum_ms = acc.sum_ms.saturating_add(u128::from(record.duration_ms));
        acc.min_ms = acc.min_ms.min(record.duration_ms);
        acc.max_ms = acc.max_ms.max(record.duration_ms);
        acc.histogram.record(record.duration_ms)?;
    }

    Ok(by_url
        .into_iter()
        .map(|(url, acc)| {
            let (p50_ms, p90_ms, p99_ms) = acc.histogram.percentiles();
            let mean = acc.sum_ms.checked_div(u128::from(acc.count)).unwrap_or(0);
            UrlSummary {
                url: url.to_owned(),
                count: acc.count,
                min_ms: acc.min_ms,
                max_ms: acc.max_ms,
                mean_ms: u64::try_from(mean).unwrap_or(u64::MAX),
                p50_ms,
                p90_ms,
                p99_ms,
            }
        })
        .collect())
}
