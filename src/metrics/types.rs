use std::path::PathBuf;
use std::time::Duration;

/// One successfully measured request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingRecord {
    pub url: String,
    pub duration_ms: u64,
}

impl TimingRecord {
    /// Builds a record from a measured duration, truncating to whole
    /// milliseconds.
    #[must_use]
    pub fn new(url: String, elapsed: Duration) -> Self {
        Self {
            url,
            duration_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
        }
    }
}

/// Outcome of a completed run.
#[derive(Debug)]
pub struct RunReport {
    pub planned: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub records: Vec<TimingRecord>,
    pub output_path: PathBuf,
}
