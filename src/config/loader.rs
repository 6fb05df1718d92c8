use std::path::{Path, PathBuf};

use tracing::debug;

use crate::args::MonitorArgs;
use crate::error::{AppError, AppResult, ConfigError};

use super::types::EnvironmentConfig;

/// Loads the configuration selected by `--config` or by the environment name.
///
/// # Errors
///
/// Returns an error when no config file exists for the environment or the
/// file cannot be read or parsed.
pub fn load_config(args: &MonitorArgs) -> AppResult<(PathBuf, EnvironmentConfig)> {
    let path = resolve_config_path(
        args.config.as_deref(),
        Path::new(&args.config_dir),
        &args.environment,
    )?;
    debug!("Loading config from {}", path.display());
    let config = load_config_file(&path)?;
    Ok((path, config))
}

/// Picks the config file for a run: an explicit path wins, otherwise
/// `<dir>/<environment>.json`, falling back to `<dir>/<environment>.toml`.
///
/// # Errors
///
/// Returns an error when neither environment file exists.
pub fn resolve_config_path(
    explicit: Option<&str>,
    config_dir: &Path,
    environment: &str,
) -> AppResult<PathBuf> {
    if let Some(path) = explicit {
        return Ok(PathBuf::from(path));
    }

    let json_path = config_dir.join(format!("{}.json", environment));
    if json_path.exists() {
        return Ok(json_path);
    }

    let toml_path = config_dir.join(format!("{}.toml", environment));
    if toml_path.exists() {
        return Ok(toml_path);
    }

    Err(AppError::config(ConfigError::EnvironmentNotFound {
        environment: environment.to_owned(),
        json: json_path,
        toml: toml_path,
    }))
}

pub(crate) fn load_config_file(path: &Path) -> AppResult<EnvironmentConfig> {
    let content = std::fs::read_to_string(path).map_err(|err| {
        AppError::config(ConfigError::ReadConfig {
            path: path.to_path_buf(),
            source: err,
        })
    })?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => toml::from_str(&content).map_err(|err| {
            AppError::config(ConfigError::ParseToml {
                path: path.to_path_buf(),
                source: err,
            })
        }),
        Some("json") => serde_json::from_str(&content).map_err(|err| {
            AppError::config(ConfigError::ParseJson {
                path: path.to_path_buf(),
                source: err,
            })
        }),
        Some(ext) => Err(AppError::config(ConfigError::UnsupportedExtension {
            ext: ext.to_owned(),
        })),
        None => Err(AppError::config(ConfigError::MissingExtension)),
    }
}
