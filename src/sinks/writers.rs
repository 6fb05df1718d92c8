use std::path::{Path, PathBuf};

use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::debug;
use uuid::Uuid;

use crate::error::{AppError, AppResult, SinkError};

/// `<environment>-result-<uuid>.csv`
#[must_use]
pub fn result_file_name(environment: &str) -> String {
    format!("{}-result-{}.csv", environment, Uuid::new_v4())
}

/// Writes rendered CSV content to a fresh, uniquely named file inside
/// `results_dir`, creating the directory when needed. The file is flushed
/// before returning.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be created or written.
pub async fn write_results(
    results_dir: &Path,
    environment: &str,
    content: &str,
) -> AppResult<PathBuf> {
    tokio::fs::create_dir_all(results_dir).await.map_err(|err| {
        AppError::sink(SinkError::CreateResultsDir {
            path: results_dir.to_path_buf(),
            source: err,
        })
    })?;

    let path = results_dir.join(result_file_name(environment));
    let file = tokio::fs::File::create(&path).await.map_err(|err| {
        AppError::sink(SinkError::CreateResultFile {
            path: path.clone(),
            source: err,
        })
    })?;

    let mut writer = BufWriter::new(file);
    let write_result = async {
        writer.write_all(content.as_bytes()).await?;
        writer.flush().await?;
        writer.get_mut().sync_all().await
    }
    .await;
    write_result.map_err(|err| {
        AppError::sink(SinkError::WriteResultFile {
            path: path.clone(),
            source: err,
        })
    })?;

    debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(path)
}
