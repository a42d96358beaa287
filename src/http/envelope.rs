//! Response envelope decoding
//!
//! Every backend response is `{ "code": int, "msg"?: string, "data"?: T }`.
//! `code` is a business status independent of the HTTP status.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, AppResult, DEFAULT_FAILURE_MESSAGE, MALFORMED_RESPONSE_MESSAGE};

/// Business code signalling success
pub const SUCCESS_CODE: i64 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub code: i64,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default = "none")]
    pub data: Option<T>,
}

fn none<T>() -> Option<T> {
    None
}

impl<T> Envelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: SUCCESS_CODE,
            msg: None,
            data: Some(data),
        }
    }

    pub fn failure(code: i64, msg: impl Into<String>) -> Self {
        Self {
            code,
            msg: Some(msg.into()),
            data: None,
        }
    }

    /// The message, when present and not blank
    pub fn message(&self) -> Option<&str> {
        self.msg.as_deref().map(str::trim).filter(|m| !m.is_empty())
    }
}

impl Envelope<Value> {
    /// Parse a raw body. Empty bodies and bodies that are not an object with
    /// an integer `code` yield `None`.
    pub fn parse(body: &str) -> Option<Self> {
        if body.trim().is_empty() {
            return None;
        }
        match serde_json::from_str::<Value>(body).ok()? {
            object @ Value::Object(_) => serde_json::from_value(object).ok(),
            _ => None,
        }
    }
}

fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Decode a response using the wire's success code
pub fn decode<T: DeserializeOwned>(status: u16, body: &str) -> AppResult<T> {
    decode_with(status, body, SUCCESS_CODE)
}

/// Decode a response against an explicit success code.
///
/// Failure precedence: non-2xx status, then missing envelope, then business
/// code mismatch. An absent `data` decodes as JSON `null`, which suits `()`
/// and `Option<_>` payloads.
pub fn decode_with<T: DeserializeOwned>(status: u16, body: &str, success_code: i64) -> AppResult<T> {
    let envelope = Envelope::parse(body);

    if !is_success_status(status) {
        let message = envelope
            .as_ref()
            .and_then(|e| e.message())
            .map(String::from)
            .unwrap_or_else(|| format!("{} ({})", DEFAULT_FAILURE_MESSAGE, status));
        return Err(AppError::Transport { status, message });
    }

    let envelope = envelope.ok_or_else(|| {
        AppError::MalformedResponse(MALFORMED_RESPONSE_MESSAGE.to_string())
    })?;

    if envelope.code != success_code {
        return Err(AppError::Business {
            code: envelope.code,
            message: envelope
                .message()
                .unwrap_or(DEFAULT_FAILURE_MESSAGE)
                .to_string(),
        });
    }

    serde_json::from_value(envelope.data.unwrap_or(Value::Null)).map_err(|e| {
        tracing::debug!("Envelope payload did not match the expected type: {}", e);
        AppError::MalformedResponse(format!("{}: {}", MALFORMED_RESPONSE_MESSAGE, e))
    })
}
