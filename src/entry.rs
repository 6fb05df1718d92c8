use clap::{ArgMatches, CommandFactory, FromArgMatches};
use tracing::info;

use crate::application::{RunSettings, log_run_summary, run_monitor};
use crate::args::MonitorArgs;
use crate::config::{apply_config, load_config};
use crate::error::AppResult;
use crate::http::{HttpProbe, build_client};

/// Binary entry point: parses arguments, loads the environment and drives a
/// single run on a Tokio runtime.
///
/// # Errors
///
/// Returns an error when arguments or configuration are invalid, or when the
/// result file cannot be written.
pub fn run() -> AppResult<()> {
    let matches = MonitorArgs::command().get_matches();
    let mut args = MonitorArgs::from_arg_matches(&matches)?;

    crate::system::logger::init_logging(args.verbose, args.no_color);

    let settings = prepare_settings(&mut args, &matches)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(args, settings))
}

fn prepare_settings(args: &mut MonitorArgs, matches: &ArgMatches) -> AppResult<RunSettings> {
    let (path, config) = load_config(args)?;
    apply_config(args, matches, &config)?;
    info!(
        "Environment '{}' loaded from {} ({} URLs)",
        args.environment,
        path.display(),
        config.urls.len()
    );
    Ok(RunSettings::new(args, config))
}

async fn run_async(args: MonitorArgs, settings: RunSettings) -> AppResult<()> {
    let probe = HttpProbe::new(build_client(&args)?);
    let report = run_monitor(&settings, &probe).await?;
    log_run_summary(&report, settings.grouping)
}
