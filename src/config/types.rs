use std::time::Duration;

use serde::Deserialize;

use crate::args::{Grouping, parse_duration_value};
use crate::error::ValidationError;

/// Typed shape of `<environment>.json`.
///
/// Only `Urls` is required. The optional keys let an environment pin its own
/// run settings; explicit CLI flags still take precedence.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct EnvironmentConfig {
    pub urls: Vec<String>,
    pub requests_per_url: Option<usize>,
    pub concurrency: Option<usize>,
    pub grouping: Option<Grouping>,
    pub timeout: Option<DurationValue>,
    pub connect_timeout: Option<DurationValue>,
    pub results_dir: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self) -> Result<Duration, ValidationError> {
        match self {
            DurationValue::Seconds(secs) => {
                if *secs == 0 {
                    Err(ValidationError::DurationZero)
                } else {
                    Ok(Duration::from_secs(*secs))
                }
            }
            DurationValue::Text(text) => parse_duration_value(text),
        }
    }
}
