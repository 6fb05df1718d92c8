use std::error::Error as _;
use std::fmt::Write as _;

use futures_util::{StreamExt, stream};
use tracing::{error, info};

use crate::args::PositiveUsize;
use crate::error::HttpError;
use crate::metrics::TimingRecord;
use crate::plan::WorkItem;

use super::Probe;

#[derive(Debug, Default)]
pub struct ExecutionOutcome {
    pub records: Vec<TimingRecord>,
    pub failed: usize,
}

/// Runs every work item through `probe`, keeping at most `concurrency`
/// requests in flight. A failed item is logged and skipped; it never stops
/// the remaining items.
pub async fn run_work_items<P>(
    probe: &P,
    items: Vec<WorkItem>,
    concurrency: PositiveUsize,
) -> ExecutionOutcome
where
    P: Probe + ?Sized,
{
    let mut outcome = ExecutionOutcome {
        records: Vec::with_capacity(items.len()),
        failed: 0,
    };

    let mut completions = stream::iter(items)
        .map(move |url| async move {
            let result = probe.probe(&url).await;
            (url, result)
        })
        .buffer_unordered(concurrency.get());

    while let Some((url, result)) = completions.next().await {
        match result {
            Ok(elapsed) => {
                let record = TimingRecord::new(url, elapsed);
                info!("{}: {}", record.url, record.duration_ms);
                outcome.records.push(record);
            }
            Err(err) => {
                outcome.failed = outcome.failed.saturating_add(1);
                error!("{}: {}", url, failure_detail(&err));
            }
        }
    }

    outcome
}

fn failure_detail(err: &HttpError) -> String {
    let mut detail = err.to_string();
    // The top-level message already embeds its direct source.
    let mut cause = err.source().and_then(|source| source.source());
    while let Some(inner) = cause {
        if write!(detail, "\n  caused by: {}", inner).is_err() {
            break;
        }
        cause = inner.source();
    }
    detail
}
