//! Response status handling for the query API.
//!
//! A 429 becomes [`ContentError::RateLimited`]; any other non-success status,
//! and an error envelope delivered with a success status, becomes
//! [`ContentError::Api`] carrying the store's own error description.

use serde::Deserialize;

use crate::error::ContentError;

/// Error body returned by the query API, e.g.
/// `{"error": {"description": "...", "type": "queryParseError"}}`.
#[derive(Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    description: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
}

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success. Handles:
/// - **429 Too Many Requests** → [`ContentError::RateLimited`] with
///   `Retry-After` header parsing (falls back to 60 s if absent or
///   unparseable).
/// - **Non-success status** → [`ContentError::Api`] with status code and the
///   store's error description, or the raw body when it has none.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ContentError> {
    if resp.status() == 429 {
        let retry_after = parse_retry_after(&resp);
        return Err(ContentError::RateLimited {
            retry_after_secs: retry_after,
        });
    }
    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        tracing::warn!(status, "content store returned an error status");
        return Err(ContentError::Api {
            status,
            message: error_message(&body),
        });
    }
    Ok(resp)
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}

/// Detect an `{"error": ...}` body delivered with a success status.
pub fn embedded_error(status: u16, body: &str) -> Option<ContentError> {
    serde_json::from_str::<ErrorBody>(body).ok()?;
    tracing::warn!(status, "content store returned an error envelope");
    Some(ContentError::Api {
        status,
        message: error_message(body),
    })
}

fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            error:
                ErrorDetail {
                    description: Some(description),
                    kind,
                },
        }) => match kind {
            Some(kind) => format!("{kind}: {description}"),
            None => description,
        },
        _ => body.to_string(),
    }
}
