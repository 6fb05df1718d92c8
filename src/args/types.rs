use clap::ValueEnum;
use serde::Deserialize;
use std::num::NonZeroUsize;

use crate::error::ValidationError;

/// How the result writer decides which lines carry a mean column.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Grouping {
    /// Means are computed per URL; a short batch still gets a mean on its last line.
    #[default]
    ByUrl,
    /// Every Nth sorted line carries a mean regardless of URL boundaries.
    Positional,
}

impl Grouping {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Grouping::ByUrl => "by-url",
            Grouping::Positional => "positional",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositiveUsize(NonZeroUsize);

impl PositiveUsize {
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl TryFrom<usize> for PositiveUsize {
    type Error = ValidationError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        NonZeroUsize::new(value)
            .map(PositiveUsize)
            .ok_or(ValidationError::ValueTooSmall { min: 1 })
    }
}

impl std::str::FromStr for PositiveUsize {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: usize = s
            .trim()
            .parse()
            .map_err(|err| ValidationError::InvalidNumber { source: err })?;
        PositiveUsize::try_from(value)
    }
}

impl From<PositiveUsize> for usize {
    fn from(value: PositiveUsize) -> Self {
        value.get()
    }
}
