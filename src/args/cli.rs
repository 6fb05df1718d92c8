use clap::Parser;
use std::time::Duration;

use super::defaults::{DEFAULT_ENVIRONMENT, default_results_dir};
use super::parsers::{parse_duration_arg, parse_positive_usize};
use super::types::{Grouping, PositiveUsize};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Measure HTTP response times for a list of URLs and write per-request and per-URL mean timings to CSV."
)]
pub struct MonitorArgs {
    /// Environment name; selects `<ENVIRONMENT>.json` (or `.toml`) from the config directory
    #[arg(default_value = DEFAULT_ENVIRONMENT)]
    pub environment: String,

    /// Explicit config file (.json or .toml); overrides the environment lookup
    #[arg(long, short)]
    pub config: Option<String>,

    /// Directory searched for `<ENVIRONMENT>.json`
    #[arg(long = "config-dir", default_value = ".")]
    pub config_dir: String,

    /// Directory the result CSV is written to
    #[arg(long = "results-dir", env = "RTMON_RESULTS_DIR", default_value_t = default_results_dir())]
    pub results_dir: String,

    /// Requests issued for every configured URL
    #[arg(long = "requests-per-url", short = 'n', default_value = "10", value_parser = parse_positive_usize)]
    pub requests_per_url: PositiveUsize,

    /// Maximum requests in flight; 1 keeps measurements strictly sequential
    #[arg(long, default_value = "1", value_parser = parse_positive_usize)]
    pub concurrency: PositiveUsize,

    /// How mean columns are assigned to result lines
    #[arg(long, value_enum, default_value_t = Grouping::ByUrl)]
    pub grouping: Grouping,

    /// Per-request timeout (supports ms/s/m/h)
    #[arg(long = "timeout", default_value = "30s", value_parser = parse_duration_arg)]
    pub request_timeout: Duration,

    /// Connection timeout (supports ms/s/m/h)
    #[arg(long = "connect-timeout", default_value = "10s", value_parser = parse_duration_arg)]
    pub connect_timeout: Duration,

    /// Seed for the work-order shuffle; omit for a fresh random order every run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Do not send the default User-Agent header
    #[arg(long = "no-ua")]
    pub no_ua: bool,

    /// Accept invalid TLS certificates and hostnames
    #[arg(long)]
    pub insecure: bool,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Disable ANSI colors in log output
    #[arg(long = "no-color")]
    pub no_color: bool,
}
