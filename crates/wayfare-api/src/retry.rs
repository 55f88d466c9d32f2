//! Retry with exponential back-off and jitter for the planning client.
//!
//! Only transient failures are retried: timeouts, connection errors and 5xx
//! responses. A 4xx, an undecodable body or a payload that fails
//! normalization will not improve on a second attempt.

use std::future::Future;
use std::time::Duration;

use crate::error::ApiError;

pub(crate) fn is_retriable(err: &ApiError) -> bool {
    match err {
        ApiError::Http(e) => {
            e.is_timeout() || e.is_connect() || e.status().is_some_and(|s| s.is_server_error())
        }
        ApiError::UnexpectedStatus { status, .. } => *status >= 500,
        ApiError::NotFound { .. }
        | ApiError::Deserialize { .. }
        | ApiError::InvalidBaseUrl { .. }
        | ApiError::Normalize(_) => false,
    }
}

/// Runs `operation` with up to `max_retries` additional attempts on transient
/// errors. The n-th retry waits `backoff_base_ms * 2^(n-1)` ms ± 25% jitter,
/// capped at 30 s.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_ms: u64,
    mut operation: F,
) -> Result<T, ApiError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    const MAX_DELAY_MS: u64 = 30_000;
    let mut attempt = 0u32;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !is_retriable(&err) || attempt >= max_retries {
                    return Err(err);
                }
                attempt += 1;
                let computed = backoff_base_ms.saturating_mul(1u64 << (attempt - 1).min(10));
                let capped = computed.min(MAX_DELAY_MS);
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    clippy::cast_precision_loss
                )]
                let delay_ms = (capped as f64 * (rand::random::<f64>() * 0.5 + 0.75)) as u64;
                tracing::warn!(
                    attempt,
                    max_retries,
                    delay_ms,
                    error = %err,
                    "planning service transient error, retrying after back-off"
                );
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    use super::*;

    fn server_error() -> ApiError {
        ApiError::UnexpectedStatus {
            status: 503,
            url: "http://planner.test/plan/trip".to_owned(),
        }
    }

    #[test]
    fn server_errors_are_retriable() {
        assert!(is_retriable(&server_error()));
    }

    #[test]
    fn client_errors_are_not_retriable() {
        assert!(!is_retriable(&ApiError::UnexpectedStatus {
            status: 422,
            url: "x".to_owned()
        }));
        assert!(!is_retriable(&ApiError::NotFound {
            url: "x".to_owned()
        }));
    }

    #[test]
    fn normalization_errors_are_not_retriable() {
        let err = ApiError::Normalize(wayfare_planner::NormalizeError::InvalidResponseShape {
            reason: "not an object".to_owned(),
        });
        assert!(!is_retriable(&err));
    }

    #[tokio::test]
    async fn succeeds_immediately_on_first_try() {
        let calls = Arc::new(AtomicU32::new(0));
        let c = Arc::clone(&calls);
        let result = retry_with_backoff(3, 0, || {
            let c = Arc::clone(&c);
            async move {
                c.fetch_add(1, Ordering::SeqCst);
                Ok::<u32, ApiError>(7)
            }
        })
        .await;
        assert_eq!(result.unwrap(), 7);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn retries_server_errors_then_succeeds() {
        let calls = Arc::new(AtomicU32::new(0));
        let c = Arc::clone(&calls);
        let result = retry_with_backoff(3, 0, || {
            let c = Arc::clone(&c);
            async move {
                let attempt = c.fetch_add(1, Ordering::SeqCst) + 1;
                if attempt < 3 {
                    Err(server_error())
                } else {
                    Ok(99)
                }
            }
        })
        .await;
        assert_eq!(result.unwrap(), 99);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn gives_up_after_max_retries() {
        let calls = Arc::new(AtomicU32::new(0));
        let c = Arc::clone(&calls);
        let result = retry_with_backoff(2, 0, || {
            let c = Arc::clone(&c);
            async move {
                c.fetch_add(1, Ordering::SeqCst);
                Err::<u32, _>(server_error())
            }
        })
        .await;
        assert!(matches!(
            result,
            Err(ApiError::UnexpectedStatus { status: 503, .. })
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn does_not_retry_not_found() {
        let calls = Arc::new(AtomicU32::new(0));
        let c = Arc::clone(&calls);
        let result = retry_with_backoff(3, 0, || {
            let c = Arc::clone(&c);
            async move {
                c.fetch_add(1, Ordering::SeqCst);
                Err::<u32, _>(ApiError::NotFound {
                    url: "trips/9".to_owned(),
                })
            }
        })
        .await;
        assert!(matches!(result, Err(ApiError::NotFound { .. })));
        assert_eq!(calls.load(Ordering::SeqCst), 1, "404 must not be retried");
    }
}
