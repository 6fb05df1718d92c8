use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::{MonitorArgs, PositiveUsize};
use crate::error::{AppError, AppResult, ConfigError};

use super::types::EnvironmentConfig;

/// Applies configuration values to CLI arguments. Values given on the command
/// line or through the environment are left untouched.
///
/// # Errors
///
/// Returns an error when a config value is out of range.
pub fn apply_config(
    args: &mut MonitorArgs,
    matches: &ArgMatches,
    config: &EnvironmentConfig,
) -> AppResult<()> {
    if !is_explicit(matches, "requests_per_url")
        && let Some(count) = config.requests_per_url
    {
        args.requests_per_url = ensure_positive_usize(count, "RequestsPerUrl")?;
    }

    if !is_explicit(matches, "concurrency")
        && let Some(concurrency) = config.concurrency
    {
        args.concurrency = ensure_positive_usize(concurrency, "Concurrency")?;
    }

    if !is_explicit(matches, "grouping")
        && let Some(grouping) = config.grouping
    {
        args.grouping = grouping;
    }

    if !is_explicit(matches, "request_timeout")
        && let Some(timeout) = config.timeout.as_ref()
    {
        args.request_timeout = timeout.to_duration().map_err(|err| {
            AppError::config(ConfigError::InvalidDuration {
                field: "Timeout",
                source: err,
            })
        })?;
    }

    if !is_explicit(matches, "connect_timeout")
        && let Some(timeout) = config.connect_timeout.as_ref()
    {
        args.connect_timeout = timeout.to_duration().map_err(|err| {
            AppError::config(ConfigError::InvalidDuration {
                field: "ConnectTimeout",
                source: err,
            })
        })?;
    }

    if !is_explicit(matches, "results_dir")
        && let Some(results_dir) = config.results_dir.clone()
    {
        args.results_dir = results_dir;
    }

    Ok(())
}

fn is_explicit(matches: &ArgMatches, name: &str) -> bool {
    matches!(
        matches.value_source(name),
        Some(ValueSource::CommandLine | ValueSource::EnvVariable)
    )
}

fn ensure_positive_usize(value: usize, field: &'static str) -> AppResult<PositiveUsize> {
    PositiveUsize::try_from(value)
        .map_err(|err| AppError::config(ConfigError::FieldMustBePositive { field, source: err }))
}
