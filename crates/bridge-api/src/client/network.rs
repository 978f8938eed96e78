// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Midnight Bridge contributors

//! Health and network metadata queries.

use super::BridgeClient;
use crate::{
    error::Result,
    mapper,
    responses::{HealthResponse, NetworkMetadata},
};
use reqwest::Method;

impl BridgeClient {
    /// GET /health
    /// Checks that the bridge is up and answering.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::BridgeError`] when the bridge is unreachable
    /// after retries or answers with an error status.
    pub async fn health(&self) -> Result<HealthResponse> {
        let response = self.request(Method::GET, "/health", None).await?;
        mapper::decode(&response, "/health")
    }

    /// GET /network/metadata
    /// Retrieves the identity and sync state of the network the bridge
    /// proxies to.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::BridgeError`] when the request fails or the
    /// response cannot be decoded.
    pub async fn network_metadata(&self) -> Result<NetworkMetadata> {
        let response = self.request(Method::GET, "/network/metadata", None).await?;
        mapper::decode(&response, "/network/metadata")
    }
}
