// Weapi Response Classification
// Maps the `code` field of a decoded response body to success, retry or failure

use serde_json::Value;
use thiserror::Error;

/// Codes the server uses for throttling
pub const RATE_LIMIT_CODES: [i64; 3] = [405, 429, 503];

/// Errors surfaced by the transport layer for a decoded response
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("rate limited (code {code})")]
    RateLimited { code: i64 },

    #[error("request failed (code {code}): {message}")]
    RequestFailed { code: i64, message: String },

    #[error("response has no numeric `code` field")]
    MalformedResponse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseStatus {
    Success,
    RateLimited,
    Failed,
}

impl ResponseStatus {
    pub fn from_code(code: i64) -> Self {
        if code == 200 {
            ResponseStatus::Success
        } else if RATE_LIMIT_CODES.contains(&code) {
            ResponseStatus::RateLimited
        } else {
            ResponseStatus::Failed
        }
    }
}

/// Check a decoded JSON body. The error message is taken from `msg`,
/// falling back to `message`.
pub fn check_response(body: &Value) -> Result<(), TransportError> {
    let code = body
        .get("code")
        .and_then(Value::as_i64)
        .ok_or(TransportError::MalformedResponse)?;

    match ResponseStatus::from_code(code) {
        ResponseStatus::Success => Ok(()),
        ResponseStatus::RateLimited => Err(TransportError::RateLimited { code }),
        ResponseStatus::Failed => {
            let message = body
                .get("msg")
                .or_else(|| body.get("message"))
                .and_then(Value::as_str)
                .unwrap_or("unknown error")
                .to_string();
            Err(TransportError::RequestFailed { code, message })
        }
    }
}
