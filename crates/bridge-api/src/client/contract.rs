// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Midnight Bridge contributors

//! Contract call, deploy and join operations.

use super::BridgeClient;
use crate::{
    error::Result,
    mapper,
    requests::{ContractCallRequest, DeployRequest, JoinRequest},
    responses::{ContractCallResponse, DeployResponse, JoinResponse},
};
use reqwest::Method;
use serde_json::Value;

impl BridgeClient {
    /// POST /contract/call
    /// Invokes a read-only contract entrypoint.
    ///
    /// `arguments` is the entrypoint's argument list in whatever shape the
    /// contract expects.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::BridgeError`] when the request fails or the
    /// response cannot be decoded.
    pub async fn call_contract(
        &self,
        contract_address: &str,
        entrypoint: &str,
        arguments: &Value,
    ) -> Result<ContractCallResponse> {
        let body = serde_json::to_value(ContractCallRequest {
            contract_address,
            entrypoint,
            arguments,
        })?;
        let response = self.request(Method::POST, "/contract/call", Some(&body)).await?;
        mapper::decode(&response, "/contract/call")
    }

    /// POST /contract/deploy
    /// Deploys a compiled contract and returns its address and deployment
    /// transaction hash.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::BridgeError`] when the request fails or the
    /// response cannot be decoded.
    pub async fn deploy_contract(
        &self,
        contract_path: &str,
        constructor_args: &Value,
        options: Option<&Value>,
    ) -> Result<DeployResponse> {
        let body = serde_json::to_value(DeployRequest {
            contract_path,
            constructor_args,
            options,
        })?;
        let response = self
            .request(Method::POST, "/contract/deploy", Some(&body))
            .await?;
        mapper::decode(&response, "/contract/deploy")
    }

    /// POST /contract/join
    /// Joins an existing multi-party contract as a new participant.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::BridgeError`] when the request fails or the
    /// response cannot be decoded.
    pub async fn join_contract(
        &self,
        contract_address: &str,
        params: &Value,
    ) -> Result<JoinResponse> {
        let body = serde_json::to_value(JoinRequest {
            contract_address,
            params,
        })?;
        let response = self.request(Method::POST, "/contract/join", Some(&body)).await?;
        mapper::decode(&response, "/contract/join")
    }
}
