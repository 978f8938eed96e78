// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Midnight Bridge contributors

//! Internal transport plumbing: URL resolution, per-attempt signing, and
//! the retry loop.

use super::BridgeClient;
use crate::{
    error::{BridgeError, Result},
    mapper,
    responses::BridgeResponse,
    signing::{self, API_KEY_HEADER, SIGNATURE_HEADER, TIMESTAMP_HEADER},
};
use reqwest::{header, Method, Url};

/// Serializes the path and query of `url` exactly as it appears on the
/// request line, which is the byte sequence the signature must cover.
fn signed_path(url: &Url) -> String {
    match url.query() {
        Some(query) => format!("{}?{}", url.path(), query),
        None => url.path().to_string(),
    }
}

impl BridgeClient {
    /// Resolves an endpoint path against the base URL, preserving any path
    /// prefix the base URL carries (`http://host/bridge` + `/health` is
    /// `http://host/bridge/health`).
    pub(super) fn endpoint_url(&self, path_and_query: &str) -> Result<Url> {
        let mut base = self.config.base_url.clone();
        if !base.path().ends_with('/') {
            base.set_path(&format!("{}/", base.path()));
        }
        Ok(base.join(path_and_query.trim_start_matches('/'))?)
    }

    /// Executes a request against an already-resolved URL, retrying
    /// transient failures per the configured policy.
    pub(super) async fn request_url(
        &self,
        method: Method,
        url: Url,
        body: Option<&serde_json::Value>,
    ) -> Result<BridgeResponse> {
        let body_bytes = match body {
            Some(value) => serde_json::to_vec(value)?,
            None => Vec::new(),
        };
        let has_body = body.is_some();

        let mut attempt: u32 = 0;
        loop {
            let outcome = self.execute_once(&method, &url, &body_bytes, has_body).await;

            // Error statuses are classified through the same error type the
            // policy's decision table is written against.
            let status_failure;
            let failure = match &outcome {
                Ok(response) if response.status >= 400 => {
                    status_failure = mapper::status_error(response, url.path());
                    Some(&status_failure)
                }
                Ok(_) => None,
                Err(BridgeError::Cancelled) => return Err(BridgeError::Cancelled),
                Err(error) => Some(error),
            };
            let Some(error) = failure else {
                return outcome;
            };
            let Some(delay) = self.config.retry.decide(attempt, error) else {
                return outcome;
            };

            tracing::warn!(
                method = %method,
                path = url.path(),
                %error,
                attempt,
                delay_ms = delay.as_millis() as u64,
                "transient bridge failure, retrying"
            );

            // The backoff sleep is additive to the per-attempt timeout and
            // must remain abortable.
            tokio::select! {
                _ = self.cancellation.cancelled() => return Err(BridgeError::Cancelled),
                _ = tokio::time::sleep(delay) => {}
            }
            attempt += 1;
        }
    }

    /// One HTTP attempt: fresh timestamp, fresh signature, one round-trip.
    async fn execute_once(
        &self,
        method: &Method,
        url: &Url,
        body: &[u8],
        has_body: bool,
    ) -> Result<BridgeResponse> {
        let mut builder = self
            .client
            .request(method.clone(), url.clone())
            .header(header::ACCEPT, "application/json");
        if has_body {
            builder = builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(body.to_vec());
        }
        if let Some(api_key) = &self.config.api_key {
            builder = builder.header(API_KEY_HEADER, api_key);
        }
        if let Some(secret) = &self.config.signing_secret {
            // A signature is valid for exactly one timestamp; never reuse
            // one across attempts.
            let timestamp = signing::unix_timestamp();
            let signature = signing::sign(
                secret.as_bytes(),
                method.as_str(),
                &signed_path(url),
                body,
                timestamp,
            );
            builder = builder
                .header(TIMESTAMP_HEADER, timestamp.to_string())
                .header(SIGNATURE_HEADER, signature);
        }

        // Signature and API key are deliberately absent from the logs.
        tracing::debug!(method = %method, path = %signed_path(url), "sending bridge request");

        let response = tokio::select! {
            _ = self.cancellation.cancelled() => return Err(BridgeError::Cancelled),
            sent = builder.send() => {
                sent.map_err(|e| BridgeError::from_reqwest(e, self.config.request_timeout))?
            }
        };
        let status = response.status().as_u16();
        let body = tokio::select! {
            _ = self.cancellation.cancelled() => return Err(BridgeError::Cancelled),
            read = response.bytes() => {
                read.map_err(|e| BridgeError::from_reqwest(e, self.config.request_timeout))?
            }
        };
        tracing::debug!(status, "bridge response received");

        Ok(BridgeResponse {
            status,
            body: body.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BridgeClient, BridgeClientConfig};

    #[test]
    fn endpoint_url_preserves_base_path_prefix() {
        let config = BridgeClientConfig::new("http://localhost:8787/bridge").unwrap();
        let client = BridgeClient::new(config).unwrap();
        assert_eq!(
            client.endpoint_url("/health").unwrap().as_str(),
            "http://localhost:8787/bridge/health"
        );

        let config = BridgeClientConfig::new("http://localhost:8787").unwrap();
        let client = BridgeClient::new(config).unwrap();
        assert_eq!(
            client.endpoint_url("/tx/submit").unwrap().as_str(),
            "http://localhost:8787/tx/submit"
        );
    }

    #[test]
    fn signed_path_includes_query() {
        let url = Url::parse("http://localhost:8787/wallet/balance?address=0xAAA").unwrap();
        assert_eq!(signed_path(&url), "/wallet/balance?address=0xAAA");

        let url = Url::parse("http://localhost:8787/health").unwrap();
        assert_eq!(signed_path(&url), "/health");
    }
}
