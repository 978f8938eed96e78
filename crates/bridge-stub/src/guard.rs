// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Midnight Bridge contributors

//! Request authentication gate, shared by all routes.

use crate::StubConfig;
use actix_web::{http::StatusCode, HttpRequest, HttpResponse, ResponseError};
use midnight_bridge_api::signing::{
    self, SignatureError, API_KEY_HEADER, SIGNATURE_HEADER, TIMESTAMP_HEADER,
};
use serde_json::json;
use thiserror::Error;

/// Rejections the stub answers with 401 and an `{"error": ...}` body.
#[derive(Error, Debug)]
pub enum StubError {
    /// Signature verification failed; the `Display` string is the wire
    /// message ("Missing signature headers", "Invalid signature",
    /// "Request timestamp expired").
    #[error(transparent)]
    Signature(#[from] SignatureError),
    /// The `X-API-Key` header did not match the configured key.
    #[error("Invalid API key")]
    InvalidApiKey,
}

impl ResponseError for StubError {
    fn status_code(&self) -> StatusCode {
        StatusCode::UNAUTHORIZED
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}

fn header<'a>(req: &'a HttpRequest, name: &str) -> Option<&'a str> {
    req.headers().get(name).and_then(|v| v.to_str().ok())
}

/// Verifies the API key and, when signing is enabled, the request
/// signature over the raw path and query exactly as received.
pub(crate) fn check(req: &HttpRequest, body: &[u8], config: &StubConfig) -> Result<(), StubError> {
    if let Some(expected) = &config.api_key {
        if header(req, API_KEY_HEADER) != Some(expected.as_str()) {
            tracing::debug!(path = req.path(), "rejecting request with bad API key");
            return Err(StubError::InvalidApiKey);
        }
    }

    let Some(secret) = &config.signing_secret else {
        return Ok(());
    };

    let (Some(timestamp), Some(signature)) =
        (header(req, TIMESTAMP_HEADER), header(req, SIGNATURE_HEADER))
    else {
        tracing::debug!(path = req.path(), "rejecting unsigned request");
        return Err(SignatureError::MissingSignature.into());
    };
    let timestamp: i64 = timestamp
        .parse()
        .map_err(|_| SignatureError::InvalidSignature)?;

    // The raw request line is authoritative; no re-normalization.
    let path_with_query = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| req.uri().path());

    signing::verify(
        secret.as_bytes(),
        signature,
        req.method().as_str(),
        path_with_query,
        body,
        timestamp,
        signing::unix_timestamp(),
    )?;
    Ok(())
}
