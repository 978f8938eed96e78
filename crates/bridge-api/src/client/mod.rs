// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Midnight Bridge contributors

mod contract;
mod helpers;
mod network;
mod proof;
mod transaction;
mod wallet;

use crate::{
    error::{BridgeError, Result},
    responses::BridgeResponse,
    retry::RetryConfig,
};
use reqwest::{Client, Method};
use serde_json::Value;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use url::Url;

const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Construction-time configuration for a [`BridgeClient`].
///
/// All fields are fixed once the client is built; there is no global or
/// rebindable state.
#[derive(Debug, Clone)]
pub struct BridgeClientConfig {
    /// Base URI of the bridge, e.g. `http://localhost:8787`. A path
    /// prefix, when present, is kept when resolving endpoint paths.
    pub base_url: Url,
    /// Static API key sent as `X-API-Key` on every request, when set.
    pub api_key: Option<String>,
    /// HMAC secret; `None` disables request signing.
    pub signing_secret: Option<String>,
    /// TCP connect timeout.
    pub connect_timeout: Duration,
    /// Overall per-attempt request timeout.
    pub request_timeout: Duration,
    /// Retry policy for transient failures.
    pub retry: RetryConfig,
}

impl BridgeClientConfig {
    /// Creates a configuration with default timeouts and retry policy.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::UrlParse`] when `base_url` is not a valid
    /// absolute URL.
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
            api_key: None,
            signing_secret: None,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            retry: RetryConfig::default(),
        })
    }

    /// Sets the static API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Enables request signing with the given shared secret.
    pub fn with_signing_secret(mut self, secret: impl Into<String>) -> Self {
        self.signing_secret = Some(secret.into());
        self
    }

    /// Overrides the per-attempt request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Overrides the retry policy.
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }
}

/// Client for the Midnight bridge microservice.
///
/// One logical operation per bridge capability, all built on a single
/// generic [`request`](Self::request). Each call runs to completion on the
/// calling task, including its retries; independent calls may run
/// concurrently since the client holds no mutable state beyond reqwest's
/// connection pool.
#[derive(Clone)]
pub struct BridgeClient {
    client: Client,
    config: BridgeClientConfig,
    cancellation: CancellationToken,
}

impl BridgeClient {
    /// Builds a client from its configuration.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::Config`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: BridgeClientConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| BridgeError::Config(e.to_string()))?;
        Ok(Self {
            client,
            config,
            cancellation: CancellationToken::new(),
        })
    }

    /// Token that aborts this client's in-flight calls when cancelled.
    ///
    /// Cancellation interrupts both network I/O and pending backoff sleeps;
    /// affected calls return [`BridgeError::Cancelled`]. A cancelled token
    /// stays cancelled, so this is a whole-client shutdown switch; use
    /// [`with_cancellation`](Self::with_cancellation) to scope cancellation
    /// to a subset of calls.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancellation.clone()
    }

    /// Returns a clone of this client whose calls are aborted by `token`
    /// instead of the client-wide token.
    ///
    /// Cancelling `token` affects only the clone; the original client and
    /// its other clones keep working. Pass a
    /// [`CancellationToken::child_token`] of the client-wide token when
    /// whole-client shutdown should still cover the scoped calls.
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        Self {
            client: self.client.clone(),
            config: self.config.clone(),
            cancellation: token,
        }
    }

    /// The configuration the client was built with.
    pub fn config(&self) -> &BridgeClientConfig {
        &self.config
    }

    /// Executes one logical request against the bridge.
    ///
    /// `path_and_query` is resolved against the configured base URL. The
    /// body, when present, is serialized once to canonical JSON bytes and
    /// re-sent verbatim on every retry; the timestamp and signature are
    /// regenerated per attempt so retries stay within the acceptance
    /// window.
    ///
    /// # Errors
    ///
    /// Transient failures are retried per the configured policy and only
    /// surfaced after exhaustion. The returned [`BridgeResponse`] may still
    /// carry an error status; use [`crate::mapper`] to turn it into a typed
    /// result.
    pub async fn request(
        &self,
        method: Method,
        path_and_query: &str,
        body: Option<&Value>,
    ) -> Result<BridgeResponse> {
        let url = self.endpoint_url(path_and_query)?;
        self.request_url(method, url, body).await
    }
}

impl std::fmt::Debug for BridgeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BridgeClient")
            .field("base_url", &self.config.base_url.as_str())
            .field("signing", &self.config.signing_secret.is_some())
            .field("request_timeout", &self.config.request_timeout)
            .finish()
    }
}
