//! NSE index feed client.
//!
//! NSE blocks direct anonymous API access: the JSON endpoints require a
//! session cookie issued on the public landing page plus a matching
//! Referer. The client performs that two-step handshake on every call:
//! - GET the landing page with a browser-like User-Agent (step 1)
//! - pause for a paced delay to avoid upstream blocking
//! - GET the index endpoint with the harvested cookie (step 2)
//!
//! Exactly one attempt per step, no token reuse across invocations.

use std::time::Duration;

use reqwest::{header, Client};
use tracing::debug;

use crate::errors::FeedError;
use crate::session::SessionToken;

const USER_AGENT: &str = "Mozilla/5.0";
const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
const ACCEPT_JSON: &str = "application/json";
const DATA_PATH: &str = "/api/equity-stockIndices";

/// Configuration for one index feed.
#[derive(Clone, Debug)]
pub struct NseConfig {
    /// Upstream origin, e.g. `https://www.nseindia.com`.
    pub base_url: String,
    /// Index name passed as the `index` query parameter.
    pub index: String,
    /// Pause between the two handshake steps. A deliberate throttle to
    /// mimic human pacing, not a performance accident.
    pub handshake_delay: Duration,
    /// Bound on each outbound request.
    pub request_timeout: Duration,
}

impl Default for NseConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.nseindia.com".to_string(),
            index: "NIFTY 500".to_string(),
            handshake_delay: Duration::from_millis(1000),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Two-step handshake client for the NSE index feed.
pub struct NseClient {
    client: Client,
    config: NseConfig,
}

impl NseClient {
    pub fn new(mut config: NseConfig) -> Self {
        while config.base_url.ends_with('/') {
            config.base_url.pop();
        }
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, config }
    }

    /// Step 1: obtain a fresh session token from the landing page.
    async fn bootstrap_session(&self) -> Result<SessionToken, FeedError> {
        let response = self
            .client
            .get(&self.config.base_url)
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::ACCEPT, ACCEPT_HTML)
            .send()
            .await
            .map_err(|e| bootstrap_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::SessionBootstrap {
                message: format!("landing page returned HTTP {}", status),
            });
        }

        let cookies = response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok());

        SessionToken::from_set_cookie(cookies).ok_or(FeedError::MissingSessionCookie)
    }

    /// Fetch the configured index and return the raw JSON body verbatim.
    ///
    /// Both outbound calls and the handshake pause are await points, so
    /// concurrent invocations interleave freely.
    pub async fn fetch_index(&self) -> Result<String, FeedError> {
        let token = self.bootstrap_session().await?;

        debug!(
            "Session established for {}, pausing {:?} before data fetch",
            self.config.index, self.config.handshake_delay
        );
        tokio::time::sleep(self.config.handshake_delay).await;

        let url = format!(
            "{}{}?index={}",
            self.config.base_url,
            DATA_PATH,
            urlencoding::encode(&self.config.index)
        );

        let response = self
            .client
            .get(&url)
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::ACCEPT, ACCEPT_JSON)
            .header(header::REFERER, format!("{}/", self.config.base_url))
            .header(header::COOKIE, token.as_cookie_header())
            .send()
            .await
            .map_err(|e| data_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::DataFetch {
                message: format!("data endpoint returned HTTP {}", status),
            });
        }

        debug!("Index payload received for {}", self.config.index);
        response.text().await.map_err(FeedError::Network)
    }
}

fn bootstrap_error(err: &reqwest::Error) -> FeedError {
    if err.is_timeout() {
        FeedError::Timeout
    } else {
        FeedError::SessionBootstrap {
            message: err.to_string(),
        }
    }
}

fn data_error(err: &reqwest::Error) -> FeedError {
    if err.is_timeout() {
        FeedError::Timeout
    } else {
        FeedError::DataFetch {
            message: err.to_string(),
        }
    }
}
