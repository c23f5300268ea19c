use std::sync::Arc;

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    routing::get,
    Router,
};

use crate::error::ApiResult;
use crate::main_lib::AppState;

/// Relay the upstream index payload verbatim.
///
/// Each invocation repeats the full handshake: latency is bounded below
/// by landing-page RTT + handshake delay + data-endpoint RTT. No token
/// is cached between calls.
async fn get_stocks(State(state): State<Arc<AppState>>) -> ApiResult<impl IntoResponse> {
    let body = state.feed.fetch_index().await?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/stocks", get(get_stocks))
}
