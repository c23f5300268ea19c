use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use niftyboard_market_data::FeedError;

/// Fixed wire message for any feed failure. Both handshake steps
/// collapse into it; the distinction lives in the logs only.
const FEED_FAILURE_MESSAGE: &str = "Failed to fetch NSE stock data";

#[allow(dead_code)]
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Feed(#[from] FeedError),
    // Reserved for an authenticated-proxy variant; the open proxy never
    // emits it.
    #[error("{0}")]
    Unauthorized(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Feed(err) => {
                if err.is_bootstrap() {
                    tracing::error!("NSE session bootstrap failed: {}", err);
                } else {
                    tracing::error!("NSE data fetch failed: {}", err);
                }
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    FEED_FAILURE_MESSAGE.to_string(),
                )
            }
            ApiError::Unauthorized(reason) => (StatusCode::UNAUTHORIZED, reason.clone()),
        };
        let body = Json(ErrorBody { error: message });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
