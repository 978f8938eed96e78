// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Midnight Bridge contributors

//! Maps raw [`BridgeResponse`]s into typed results and errors.
//!
//! Transport failures (connect, timeout) never reach this module; it only
//! distinguishes protocol-level error payloads from success payloads.

use crate::{error::BridgeError, responses::BridgeResponse};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Pulls a human-readable message out of an error body.
///
/// The bridge reports errors as `{"error": "..."}`; some older builds use
/// `{"message": "..."}`. Anything else degrades to `"Unknown error"`.
fn extract_error_message(response: &BridgeResponse) -> String {
    response
        .json()
        .as_ref()
        .and_then(|value| {
            value
                .get("error")
                .or_else(|| value.get("message"))
                .and_then(Value::as_str)
                .map(String::from)
        })
        .unwrap_or_else(|| "Unknown error".to_string())
}

/// Builds the [`BridgeError::Bridge`] for an error-status response.
pub fn status_error(response: &BridgeResponse, endpoint: &str) -> BridgeError {
    BridgeError::Bridge {
        status: response.status,
        endpoint: endpoint.to_string(),
        message: extract_error_message(response),
    }
}

/// Maps a response to its JSON payload.
///
/// Status >= 400 becomes [`BridgeError::Bridge`] carrying the extracted
/// message; a success status with a non-JSON body is itself an error
/// condition, [`BridgeError::InvalidResponse`].
pub fn map_response(response: &BridgeResponse, endpoint: &str) -> Result<Value, BridgeError> {
    if response.status >= 400 {
        return Err(status_error(response, endpoint));
    }
    serde_json::from_slice(&response.body).map_err(|e| BridgeError::InvalidResponse {
        endpoint: endpoint.to_string(),
        reason: e.to_string(),
    })
}

/// Maps a response and decodes the payload into a typed shape.
pub fn decode<T: DeserializeOwned>(
    response: &BridgeResponse,
    endpoint: &str,
) -> Result<T, BridgeError> {
    let value = map_response(response, endpoint)?;
    serde_json::from_value(value).map_err(|e| BridgeError::InvalidResponse {
        endpoint: endpoint.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responses::HealthResponse;

    fn response(status: u16, body: &str) -> BridgeResponse {
        BridgeResponse {
            status,
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn success_decodes() {
        let resp = response(200, r#"{"status":"ok","timestamp":1700000000,"version":"0.1.0"}"#);
        let health: HealthResponse = decode(&resp, "/health").unwrap();
        assert_eq!(health.status, "ok");
        assert_eq!(health.version.as_deref(), Some("0.1.0"));
    }

    #[test]
    fn error_field_is_extracted() {
        let resp = response(401, r#"{"error":"Request timestamp expired"}"#);
        match map_response(&resp, "/tx/submit") {
            Err(BridgeError::Bridge {
                status,
                endpoint,
                message,
            }) => {
                assert_eq!(status, 401);
                assert_eq!(endpoint, "/tx/submit");
                assert_eq!(message, "Request timestamp expired");
            }
            other => panic!("unexpected mapping: {other:?}"),
        }
    }

    #[test]
    fn message_field_is_a_fallback() {
        let resp = response(503, r#"{"message":"node syncing"}"#);
        match map_response(&resp, "/health") {
            Err(BridgeError::Bridge { message, .. }) => assert_eq!(message, "node syncing"),
            other => panic!("unexpected mapping: {other:?}"),
        }
    }

    #[test]
    fn unparseable_error_body_degrades_to_unknown() {
        let resp = response(500, "<html>gateway</html>");
        match map_response(&resp, "/health") {
            Err(BridgeError::Bridge { message, .. }) => assert_eq!(message, "Unknown error"),
            other => panic!("unexpected mapping: {other:?}"),
        }
    }

    #[test]
    fn non_json_success_is_invalid_response() {
        let resp = response(200, "not json");
        assert!(matches!(
            map_response(&resp, "/health"),
            Err(BridgeError::InvalidResponse { .. })
        ));
    }
}
