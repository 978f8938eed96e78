// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Midnight Bridge contributors

//! Transaction submission and status tracking.

use super::BridgeClient;
use crate::{
    error::{BridgeError, Result},
    mapper,
    responses::{TxStatusResponse, TxSubmitRaw},
};
use reqwest::Method;
use serde_json::Value;

impl BridgeClient {
    /// POST /tx/submit
    /// Submits a serialized transaction and returns its hash.
    ///
    /// The transaction fields are bridge-defined and passed through
    /// untouched. Retries re-send the identical signed body, so the bridge
    /// is expected to deduplicate; callers otherwise get at-least-once
    /// semantics.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::MissingField`] when the bridge acknowledges
    /// the submission without a `tx_hash`/`txHash` field, or any transport
    /// error after retries.
    pub async fn submit_transaction(&self, tx: &Value) -> Result<String> {
        let response = self.request(Method::POST, "/tx/submit", Some(tx)).await?;
        let raw: TxSubmitRaw = mapper::decode(&response, "/tx/submit")?;
        raw.tx_hash.ok_or(BridgeError::MissingField {
            endpoint: "/tx/submit".to_string(),
            field: "tx_hash",
        })
    }

    /// GET /tx/{hash}/status
    /// Retrieves the lifecycle state of a previously submitted transaction.
    ///
    /// # Errors
    ///
    /// Returns a [`BridgeError`] when the request fails or the response
    /// cannot be decoded.
    pub async fn transaction_status(&self, tx_hash: &str) -> Result<TxStatusResponse> {
        let path = format!("/tx/{tx_hash}/status");
        let response = self.request(Method::GET, &path, None).await?;
        mapper::decode(&response, &path)
    }
}
