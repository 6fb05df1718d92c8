use std::time::Duration;

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::Client;
use tokio::time::Instant;

use crate::error::HttpError;

/// Issues one measured request for a URL.
#[async_trait]
pub trait Probe: Send + Sync {
    /// Fetches `url` and returns the elapsed wall-clock time.
    ///
    /// # Errors
    ///
    /// Returns an error when the request, status, or body read fails.
    async fn probe(&self, url: &str) -> Result<Duration, HttpError>;
}

/// GET-based probe that downloads and discards the full response body.
#[derive(Debug, Clone)]
pub struct HttpProbe {
    client: Client,
}

impl HttpProbe {
    #[must_use]
    pub const fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Probe for HttpProbe {
    async fn probe(&self, url: &str) -> Result<Duration, HttpError> {
        let start = Instant::now();
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| HttpError::RequestFailed {
                url: url.to_owned(),
                source: err,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(HttpError::UnexpectedStatus {
                url: url.to_owned(),
                status: status.as_u16(),
            });
        }

        drain_response_body(response)
            .await
            .map_err(|err| HttpError::ReadBodyFailed {
                url: url.to_owned(),
                source: err,
            })?;

        Ok(start.elapsed())
    }
}

async fn drain_response_body(response: reqwest::Response) -> Result<u64, reqwest::Error> {
    let mut stream = response.bytes_stream();
    let mut total_bytes: u64 = 0;
    while let Some(chunk) = stream.next().await {
        let bytes = chunk?;
        total_bytes = total_bytes.saturating_add(u64::try_from(bytes.len()).unwrap_or(u64::MAX));
    }
    Ok(total_bytes)
}
