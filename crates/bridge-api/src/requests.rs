// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Midnight Bridge contributors

//! Request body shapes for the bridge endpoints.
//!
//! Built internally from operation arguments; open-ended fields (contract
//! arguments, proof inputs) stay as [`serde_json::Value`] because their
//! schema belongs to the contract being called, not to the transport.

use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Serialize)]
pub(crate) struct ContractCallRequest<'a> {
    pub contract_address: &'a str,
    pub entrypoint: &'a str,
    pub arguments: &'a Value,
}

#[derive(Serialize)]
pub(crate) struct ProofRequest<'a> {
    pub contract_name: &'a str,
    pub entrypoint: &'a str,
    pub public_inputs: &'a Value,
    pub private_inputs: &'a Value,
}

#[derive(Serialize)]
pub(crate) struct DeployRequest<'a> {
    pub contract_path: &'a str,
    pub constructor_args: &'a Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<&'a Value>,
}

#[derive(Serialize)]
pub(crate) struct JoinRequest<'a> {
    pub contract_address: &'a str,
    pub params: &'a Value,
}

#[derive(Serialize)]
pub(crate) struct TransferRequest<'a> {
    pub to_address: &'a str,
    pub amount: &'a str,
    #[serde(flatten)]
    pub extra: Option<&'a Map<String, Value>>,
}
