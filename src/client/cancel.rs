//! Abandoning in-flight calls.
//!
//! A caller that loses interest cancels its token. The pending future is
//! dropped, which aborts the underlying HTTP exchange, and a result that
//! races in after cancellation is discarded.

use std::future::Future;

use tokio_util::sync::CancellationToken;

use crate::client::ApiError;

/// Drive `call` until it completes or `token` is cancelled.
///
/// Never yields data once the token is cancelled, even if `call` finished
/// on the same poll.
pub async fn with_cancellation<T, F>(token: &CancellationToken, call: F) -> Result<T, ApiError>
where
    F: Future<Output = Result<T, ApiError>>,
{
    if token.is_cancelled() {
        return Err(ApiError::Cancelled);
    }

    let result = tokio::select! {
        biased;
        _ = token.cancelled() => return Err(ApiError::Cancelled),
        result = call => result,
    };

    if token.is_cancelled() {
        tracing::debug!("dropping result that arrived after cancellation");
        return Err(ApiError::Cancelled);
    }
    result
}
