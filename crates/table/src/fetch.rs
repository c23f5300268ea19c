//! The single fetch against the proxy endpoint and its error
//! classification.

use niftyboard_market_data::{normalize, StockRow};
use reqwest::StatusCode;
use thiserror::Error;
use tracing::debug;

/// Why the fetch failed, with the fixed user-facing messages.
///
/// A 401 means the proxy itself lost upstream trust and gets its own
/// message; every other non-success status collapses to the generic
/// one. Transport failures surface the underlying error's message.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Unauthorized access")]
    Unauthorized,

    #[error("API request failed")]
    RequestFailed { status: u16 },

    #[error("{0}")]
    Transport(String),
}

impl FetchError {
    pub fn from_status(status: StatusCode) -> Self {
        if status == StatusCode::UNAUTHORIZED {
            Self::Unauthorized
        } else {
            Self::RequestFailed {
                status: status.as_u16(),
            }
        }
    }

    fn transport(err: reqwest::Error) -> Self {
        let message = err.to_string();
        if message.is_empty() {
            Self::Transport("Failed to load stock data".to_string())
        } else {
            Self::Transport(message)
        }
    }

    /// The message shown in the `Failed` state.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Fetch the row list from the proxy. Called exactly once per session.
///
/// A successful response is parsed as JSON and normalized: a body
/// without the expected `data` array yields an empty list rather than
/// an error.
pub async fn fetch_rows(
    client: &reqwest::Client,
    server_url: &str,
) -> Result<Vec<StockRow>, FetchError> {
    let url = format!("{}/api/stocks", server_url.trim_end_matches('/'));
    debug!("Fetching stock rows from {}", url);

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(FetchError::transport)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::from_status(status));
    }

    let body: serde_json::Value = response.json().await.map_err(FetchError::transport)?;
    Ok(normalize(&body))
}
