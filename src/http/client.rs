use reqwest::Client;
use tracing::error;

use crate::args::{DEFAULT_USER_AGENT, MonitorArgs};
use crate::error::{AppError, AppResult, HttpError};

/// Builds the single HTTP client shared by every work item of a run.
///
/// # Errors
///
/// Returns an error when the client cannot be constructed.
pub fn build_client(args: &MonitorArgs) -> AppResult<Client> {
    let mut client_builder = Client::builder()
        .timeout(args.request_timeout)
        .connect_timeout(args.connect_timeout);

    if !args.no_ua {
        client_builder = client_builder.user_agent(DEFAULT_USER_AGENT);
    }

    if args.insecure {
        client_builder = client_builder
            .danger_accept_invalid_certs(true)
            .danger_accept_invalid_hostnames(true);
    }

    client_builder.build().map_err(|err| {
        error!("Failed to build HTTP client: {}", err);
        AppError::http(HttpError::BuildClientFailed { source: err })
    })
}
