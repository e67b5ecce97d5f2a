use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderValue},
    middleware::Next,
    response::{IntoResponse, Response},
};
use subtle::ConstantTimeEq;
use tokio::sync::Mutex;
use tourdb_search::CallerId;
use uuid::Uuid;

use crate::api::ApiError;

/// Newtype wrapping a request ID string, stored as a request extension.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// The resolved caller for a request; `None` means anonymous.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller(pub Option<CallerId>);

/// Bearer token to caller id mapping used by [`resolve_caller`].
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    callers: Arc<Vec<(String, CallerId)>>,
}

impl AuthState {
    /// Builds the token map from `TOURDB_API_KEYS` (`token:caller_id`, comma-separated).
    ///
    /// An empty or missing variable leaves every request anonymous; any
    /// bearer token presented is then unknown and rejected.
    pub fn from_env() -> anyhow::Result<Self> {
        let raw = std::env::var("TOURDB_API_KEYS").unwrap_or_default();
        let pairs = parse_api_keys(&raw)?;
        if pairs.is_empty() {
            tracing::warn!("TOURDB_API_KEYS not set; all requests are served anonymously");
        }
        Ok(Self::from_pairs(pairs))
    }

    #[must_use]
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, CallerId)>) -> Self {
        Self {
            callers: Arc::new(pairs.into_iter().collect()),
        }
    }

    /// Look up `token`, comparing against every entry in constant time.
    fn resolve(&self, token: &str) -> Option<CallerId> {
        let mut found = None;
        for (known, caller) in self.callers.iter() {
            if bool::from(known.as_bytes().ct_eq(token.as_bytes())) {
                found = Some(*caller);
            }
        }
        found
    }
}

fn parse_api_keys(raw: &str) -> anyhow::Result<Vec<(String, CallerId)>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|entry| {
            let Some((token, caller)) = entry.split_once(':') else {
                anyhow::bail!("TOURDB_API_KEYS entries must be token:caller_id");
            };
            let token = token.trim();
            if token.is_empty() {
                anyhow::bail!("TOURDB_API_KEYS contains an empty token");
            }
            let caller: i64 = caller.trim().parse().map_err(|_| {
                anyhow::anyhow!("TOURDB_API_KEYS caller id must be an integer")
            })?;
            Ok((token.to_owned(), CallerId(caller)))
        })
        .collect()
}

#[derive(Debug, Clone)]
struct RateLimitWindow {
    started_at: Instant,
    count: usize,
}

/// Sliding fixed-window limiter for simple API protection.
#[derive(Debug, Clone)]
pub struct RateLimitState {
    max_requests: usize,
    window: Duration,
    state: Arc<Mutex<RateLimitWindow>>,
}

impl RateLimitState {
    #[must_use]
    pub fn new(max_requests: usize, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            state: Arc::new(Mutex::new(RateLimitWindow {
                started_at: Instant::now(),
                count: 0,
            })),
        }
    }
}

fn request_id_of(req: &Request) -> String {
    req.extensions()
        .get::<RequestId>()
        .map(|id| id.0.clone())
        .unwrap_or_default()
}

/// Axum middleware that extracts or generates a request ID.
///
/// If the incoming request has an `x-request-id` header, that value is used.
/// Otherwise a new `UUIDv4` is generated. The ID is:
/// - Inserted into request extensions as [`RequestId`]
/// - Set on the response as the `x-request-id` header
pub async fn request_id(mut req: Request, next: Next) -> Response {
    let id = req
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map_or_else(|| Uuid::new_v4().to_string(), String::from);

    req.extensions_mut().insert(RequestId(id.clone()));

    let mut res = next.run(req).await;

    if let Ok(val) = HeaderValue::from_str(&id) {
        res.headers_mut().insert("x-request-id", val);
    }

    res
}

/// Middleware attaching a [`Caller`] to the request.
///
/// No `Authorization` header means anonymous. A header that is not a
/// known bearer token is rejected with 401.
pub async fn resolve_caller(
    State(auth): State<AuthState>,
    mut req: Request,
    next: Next,
) -> Response {
    let caller = match req.headers().get(AUTHORIZATION) {
        None => None,
        Some(value) => {
            let Some(caller) = extract_bearer_token(Some(value)).and_then(|t| auth.resolve(t))
            else {
                return ApiError::new(
                    request_id_of(&req),
                    "unauthorized",
                    "missing or invalid bearer token",
                )
                .into_response();
            };
            Some(caller)
        }
    };

    req.extensions_mut().insert(Caller(caller));
    next.run(req).await
}

/// Middleware enforcing a fixed request-per-window limit.
pub async fn enforce_rate_limit(
    State(rate_limit): State<RateLimitState>,
    req: Request,
    next: Next,
) -> Response {
    let mut window = rate_limit.state.lock().await;
    let elapsed = window.started_at.elapsed();

    if elapsed >= rate_limit.window {
        window.started_at = Instant::now();
        window.count = 0;
    }

    if window.count >= rate_limit.max_requests {
        drop(window);
        return ApiError::new(request_id_of(&req), "rate_limited", "rate limit exceeded")
            .into_response();
    }

    window.count += 1;
    drop(window);

    next.run(req).await
}

fn extract_bearer_token(value: Option<&HeaderValue>) -> Option<&str> {
    value
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_bearer_token_accepts_valid_header() {
        let header = HeaderValue::from_static("Bearer test-token");
        assert_eq!(extract_bearer_token(Some(&header)), Some("test-token"));
    }

    #[test]
    fn extract_bearer_token_rejects_non_bearer_header() {
        let header = HeaderValue::from_static("Basic abc123");
        assert_eq!(extract_bearer_token(Some(&header)), None);
    }

    #[test]
    fn parse_api_keys_reads_token_caller_pairs() {
        let pairs = parse_api_keys(" alpha:1, beta:42 ,,").expect("parse");
        assert_eq!(
            pairs,
            vec![
                ("alpha".to_string(), CallerId(1)),
                ("beta".to_string(), CallerId(42)),
            ]
        );
    }

    #[test]
    fn parse_api_keys_allows_empty_input() {
        assert!(parse_api_keys("").expect("parse").is_empty());
    }

    #[test]
    fn parse_api_keys_rejects_malformed_entries() {
        assert!(parse_api_keys("no-caller-id").is_err());
        assert!(parse_api_keys(":7").is_err());
        assert!(parse_api_keys("alpha:seven").is_err());
    }

    #[test]
    fn resolve_matches_only_exact_tokens() {
        let auth = AuthState::from_pairs([
            ("alpha".to_string(), CallerId(1)),
            ("beta".to_string(), CallerId(2)),
        ]);
        assert_eq!(auth.resolve("beta"), Some(CallerId(2)));
        assert_eq!(auth.resolve("alph"), None);
        assert_eq!(auth.resolve("alphabet"), None);
        assert_eq!(AuthState::default().resolve("alpha"), None);
    }
}
