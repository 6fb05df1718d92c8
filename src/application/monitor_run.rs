use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};

use crate::args::{Grouping, MonitorArgs, PositiveUsize};
use crate::config::types::EnvironmentConfig;
use crate::error::AppResult;
use crate::http::{Probe, run_work_items};
use crate::metrics::{RunReport, summarize_by_url};
use crate::plan::{expand_urls, shuffle};
use crate::sinks::{render_results, sort_records, write_results};

/// Everything a run needs once CLI arguments and the environment config have
/// been merged.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub environment: String,
    pub urls: Vec<String>,
    pub requests_per_url: PositiveUsize,
    pub concurrency: PositiveUsize,
    pub grouping: Grouping,
    pub results_dir: PathBuf,
    pub seed: Option<u64>,
}

impl RunSettings {
    #[must_use]
    pub fn new(args: &MonitorArgs, config: EnvironmentConfig) -> Self {
        Self {
            environment: args.environment.clone(),
            urls: config.urls,
            requests_per_url: args.requests_per_url,
            concurrency: args.concurrency,
            grouping: args.grouping,
            results_dir: PathBuf::from(&args.results_dir),
            seed: args.seed,
        }
    }
}

/// Runs one measurement pass and writes the result file.
///
/// Request failures are logged and counted; only output errors abort the run.
///
/// # Errors
///
/// Returns an error when the result file cannot be rendered or written.
pub async fn run_monitor<P>(settings: &RunSettings, probe: &P) -> AppResult<RunReport>
where
    P: Probe + ?Sized,
{
    if settings.urls.is_empty() {
        warn!(
            "Environment '{}' lists no URLs; writing an empty result file.",
            settings.environment
        );
    }

    let mut work_items = expand_urls(&settings.urls, settings.requests_per_url.get());
    let planned = work_items.len();

    let mut rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    shuffle(&mut work_items, &mut rng);

    if settings.concurrency.get() == 1 {
        info!("Serial: {} requests across {} URLs", planned, settings.urls.len());
    } else {
        info!(
            "Concurrent ({} in flight): {} requests across {} URLs",
            settings.concurrency.get(),
            planned,
            settings.urls.len()
        );
    }

    let outcome = run_work_items(probe, work_items, settings.concurrency).await;
    let mut records = outcome.records;
    sort_records(&mut records);

    let content = render_results(&records, settings.requests_per_url, settings.grouping)?;
    let output_path = write_results(&settings.results_dir, &settings.environment, &content).await?;

    Ok(RunReport {
        planned,
        succeeded: records.len(),
        failed: outcome.failed,
        records,
        output_path,
    })
}

/// Logs the run totals and per-URL latency statistics.
///
/// # Errors
///
/// Returns an error if latency statistics cannot be computed.
pub fn log_run_summary(report: &RunReport, grouping: Grouping) -> AppResult<()> {
    info!(
        "Completed {} of {} requests ({} failed); results written to {} (grouping: {})",
        report.succeeded,
        report.planned,
        report.failed,
        report.output_path.display(),
        grouping.as_str()
    );

    for summary in summarize_by_url(&report.records)? {
        info!(
            "{}: n={} min={}ms max={}ms mean={}ms p50={}ms p90={}ms p99={}ms",
            summary.url,
            summary.count,
            summary.min_ms,
            summary.max_ms,
            summary.mean_ms,
            summary.p50_ms,
            summary.p90_ms,
            summary.p99_ms
        );
    }

    Ok(())
}
