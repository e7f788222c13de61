//! Rate Limit Middleware
//!
//! Throttles each client before the handler runs and reports the client's
//! remaining quota on every admitted response.

use axum::{
    extract::{Request, State},
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::error::{AppError, Result};
use crate::rate_limit::client_identifier;

use super::handlers::AppState;

pub const RATE_LIMIT_REMAINING_HEADER: &str = "x-ratelimit-remaining";
pub const RATE_LIMIT_RESET_HEADER: &str = "x-ratelimit-reset";

/// Checks the caller's quota; rejected requests get a 429 carrying `resetAt`.
pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response> {
    let identifier = client_identifier(request.headers());
    let decision = state.rate_limiter.write().await.check(&identifier);

    if !decision.allowed {
        warn!(
            client = %identifier,
            reset_at = decision.reset_at,
            "Rate limit exceeded"
        );
        return Err(AppError::RateLimited {
            reset_at: decision.reset_at,
        });
    }

    let mut response = next.run(request).await;
    let headers = response.headers_mut();
    headers.insert(
        RATE_LIMIT_REMAINING_HEADER,
        HeaderValue::from(decision.remaining),
    );
    headers.insert(RATE_LIMIT_RESET_HEADER, HeaderValue::from(decision.reset_at));

    Ok(response)
}
