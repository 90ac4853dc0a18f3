//! Response normalization
//!
//! Converts a completed HTTP exchange into the single success-or-error result
//! the endpoint methods return. Classification order, first match wins:
//! transport failure, HTTP status outside [200, 300), JSON decode failure,
//! non-object payload (public requests only), embedded exchange error code,
//! then success.

use cryptopia_types::error_codes;
use serde_json::Value;

use crate::error::{RestError, RestResult};

/// How the response body is expected to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ResponseMode {
    /// Private POST responses: any well-formed JSON is accepted
    Json,
    /// Public GET responses: the payload must be a JSON object
    JsonObject,
}

/// Read the body and classify the exchange into a result.
pub(crate) async fn normalize(
    response: reqwest::Response,
    request: &str,
    mode: ResponseMode,
) -> RestResult<Value> {
    let status = response.status().as_u16();
    let body = response.text().await.map_err(|source| RestError::Transport {
        request: request.to_string(),
        source,
    })?;

    classify(status, &body, request, mode)
}

/// Pure classification over the received status and body.
pub(crate) fn classify(
    status: u16,
    body: &str,
    request: &str,
    mode: ResponseMode,
) -> RestResult<Value> {
    if !(200..300).contains(&status) {
        return Err(RestError::Status {
            status,
            request: request.to_string(),
        });
    }

    let payload: Value = serde_json::from_str(body).map_err(|e| RestError::Parse {
        request: request.to_string(),
        detail: format!("could not parse response from server: {} ({})", body, e),
    })?;

    if mode == ResponseMode::JsonObject && !payload.is_object() {
        return Err(RestError::Parse {
            request: request.to_string(),
            detail: format!("response is not a JSON object: {}", body),
        });
    }

    if let Some(code) = embedded_error_code(&payload) {
        return Err(RestError::Api {
            code,
            message: error_codes::describe(code),
            request: request.to_string(),
        });
    }

    Ok(payload)
}

/// Extract the exchange's `error_code` member, accepting a JSON number or a
/// numeric string.
fn embedded_error_code(payload: &Value) -> Option<i64> {
    match payload.as_object()?.get("error_code")? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}
