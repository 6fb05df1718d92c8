//! Timing records and latency summaries.
mod histogram;
mod summary;
mod types;


pub use histogram::LatencyHistogram;
pub use summary::{UrlSummary, summarize_by_url};
pub use types::{RunReport, TimingRecord};
