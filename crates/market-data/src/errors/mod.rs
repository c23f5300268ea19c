//! Error types for the market data crate.

use thiserror::Error;

/// Errors that can occur while fetching the upstream index feed.
///
/// The two handshake steps fail with distinct variants so callers can
/// log them apart even when the outward contract collapses them into a
/// single failure response.
#[derive(Error, Debug)]
pub enum FeedError {
    /// Step 1 failed: the landing page request errored or returned a
    /// non-success status, so no session could be established.
    #[error("session bootstrap failed: {message}")]
    SessionBootstrap {
        /// Description of the bootstrap failure
        message: String,
    },

    /// Step 1 succeeded but the landing response carried no cookies.
    /// The data endpoint cannot be called without a session cookie.
    #[error("upstream landing response set no session cookie")]
    MissingSessionCookie,

    /// Step 2 failed: the data endpoint request errored or returned a
    /// non-success status.
    #[error("index data fetch failed: {message}")]
    DataFetch {
        /// Description of the data fetch failure
        message: String,
    },

    /// Either outbound call exceeded the bounded request timeout.
    #[error("upstream request timed out")]
    Timeout,

    /// A network error occurred while reading a response body.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl FeedError {
    /// True when the failure happened before a session was established.
    /// Used for step-distinct logging at the proxy boundary.
    pub fn is_bootstrap(&self) -> bool {
        matches!(
            self,
            Self::SessionBootstrap { .. } | Self::MissingSessionCookie
        )
    }
}
