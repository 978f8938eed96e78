// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Midnight Bridge contributors

//! Response shapes for the bridge endpoints.

use serde::Deserialize;
use serde_json::{Map, Value};

/// One HTTP round-trip against the bridge, before mapping.
///
/// Created per attempt and discarded once [`crate::mapper`] has turned it
/// into a typed result or error.
#[derive(Debug, Clone)]
pub struct BridgeResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: Vec<u8>,
}

impl BridgeResponse {
    /// Parses the body as JSON, if it is JSON.
    pub fn json(&self) -> Option<Value> {
        serde_json::from_slice(&self.body).ok()
    }
}

/// Response of `GET /health`.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    /// Reported bridge status, `"ok"` when healthy.
    pub status: String,
    /// Bridge-side unix timestamp.
    #[serde(default)]
    pub timestamp: Option<i64>,
    /// Bridge software version.
    #[serde(default)]
    pub version: Option<String>,
}

/// Response of `GET /network/metadata`.
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkMetadata {
    /// Network identifier, e.g. `"midnight-testnet-02"`.
    pub network_id: String,
    /// Human-readable network name.
    pub network_name: String,
    /// Latest block height the bridge node has seen.
    pub block_height: u64,
    /// Whether the bridge node considers itself fully synced.
    pub synced: bool,
}

/// Raw shape of `POST /tx/submit`; the hash field arrives in either snake
/// or camel casing depending on the bridge build, and its absence is
/// escalated to a typed error by the submit operation.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TxSubmitRaw {
    #[serde(default, alias = "txHash")]
    pub tx_hash: Option<String>,
}

/// Response of `GET /tx/{hash}/status`.
#[derive(Debug, Clone, Deserialize)]
pub struct TxStatusResponse {
    /// Transaction lifecycle state, e.g. `"pending"` or `"confirmed"`.
    pub status: String,
    /// Number of confirmations observed so far.
    #[serde(default)]
    pub confirmations: u64,
    /// Any further bridge-specific fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response of `POST /contract/call`.
#[derive(Debug, Clone, Deserialize)]
pub struct ContractCallResponse {
    /// Whether the read-only call succeeded on the bridge side.
    pub success: bool,
    /// Entrypoint return value.
    #[serde(default)]
    pub result: Value,
    /// Gas consumed, when the bridge reports it.
    #[serde(default)]
    pub gas_used: Option<u64>,
}

/// Response of `POST /proof/generate`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProofResponse {
    /// Serialized zero-knowledge proof.
    pub proof: String,
    /// Verification key matching the proof.
    pub verification_key: String,
    /// Public outputs produced by the circuit, if any.
    #[serde(default)]
    pub public_outputs: Option<Value>,
}

/// Response of `POST /contract/deploy`.
#[derive(Debug, Clone, Deserialize)]
pub struct DeployResponse {
    /// Address the contract was deployed at.
    pub contract_address: String,
    /// Hash of the deployment transaction.
    pub tx_hash: String,
}

/// Response of `POST /contract/join`.
#[derive(Debug, Clone, Deserialize)]
pub struct JoinResponse {
    /// Whether the join was accepted.
    pub success: bool,
    /// Hash of the join transaction.
    pub tx_hash: String,
    /// Identifier assigned to this participant.
    pub participant_id: String,
}

/// Response of `GET /wallet/address`.
#[derive(Debug, Clone, Deserialize)]
pub struct WalletAddressResponse {
    /// The wallet's receive address.
    pub address: String,
    /// The wallet's public key, hex-encoded.
    pub public_key: String,
}

/// Response of `GET /wallet/balance`.
#[derive(Debug, Clone, Deserialize)]
pub struct WalletBalanceResponse {
    /// Balance as a decimal string, to avoid precision loss.
    pub balance: String,
    /// Unit of the balance, e.g. `"tDUST"`.
    pub unit: String,
    /// Address the balance belongs to, when echoed by the bridge.
    #[serde(default)]
    pub address: Option<String>,
}

/// Response of `POST /wallet/transfer`.
#[derive(Debug, Clone, Deserialize)]
pub struct TransferResponse {
    /// Hash of the transfer transaction.
    pub tx_hash: String,
    /// Transfer state as reported by the bridge.
    pub status: String,
    /// Destination address, echoed back.
    pub to_address: String,
}
