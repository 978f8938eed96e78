// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Midnight Bridge contributors

//! Zero-knowledge proof generation.

use super::BridgeClient;
use crate::{error::Result, mapper, requests::ProofRequest, responses::ProofResponse};
use reqwest::Method;
use serde_json::Value;

impl BridgeClient {
    /// POST /proof/generate
    /// Asks the bridge's prover for a proof over the given circuit inputs.
    ///
    /// Private inputs travel to the bridge in the request body; the
    /// transport signature protects their integrity, confidentiality is
    /// the deployment's TLS concern.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::BridgeError`] when the request fails or the
    /// response cannot be decoded. Proof generation is slow; configure a
    /// generous request timeout for clients that call this.
    pub async fn generate_proof(
        &self,
        contract_name: &str,
        entrypoint: &str,
        public_inputs: &Value,
        private_inputs: &Value,
    ) -> Result<ProofResponse> {
        let body = serde_json::to_value(ProofRequest {
            contract_name,
            entrypoint,
            public_inputs,
            private_inputs,
        })?;
        let response = self.request(Method::POST, "/proof/generate", Some(&body)).await?;
        mapper::decode(&response, "/proof/generate")
    }
}
