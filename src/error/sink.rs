use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Failed to write line: {source}")]
    WriteLine {
        #[source]
        source: std::fmt::Error,
    },
    #[error("Failed to create results directory '{path}': {source}")]
    CreateResultsDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to create result file '{path}': {source}")]
    CreateResultFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write result file '{path}': {source}")]
    WriteResultFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
