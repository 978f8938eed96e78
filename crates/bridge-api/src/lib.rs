// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Midnight Bridge contributors

//! Midnight Bridge API Client
//!
//! This crate implements the signed transport protocol spoken between backend
//! services and the Midnight bridge microservice. Every request carries an
//! HMAC-SHA256 signature binding the timestamp, HTTP method, path (including
//! the query string) and body hash, so the bridge can reject tampered or
//! replayed requests.
//!
//! Create a [`BridgeClient`] to talk to a bridge instance.
//!
//! Example
//! ```rust,no_run
//! use midnight_bridge_api::{BridgeClient, BridgeClientConfig};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = BridgeClientConfig::new("http://localhost:8787")?
//!         .with_api_key("local-dev-key")
//!         .with_signing_secret("local-dev-secret");
//!     let client = BridgeClient::new(config)?;
//!
//!     let health = client.health().await?;
//!     println!("bridge status: {}", health.status);
//!
//!     let tx_hash = client
//!         .submit_transaction(&json!({"from": "0x1", "to": "0x2", "amount": "10"}))
//!         .await?;
//!     println!("submitted: {tx_hash}");
//!
//!     Ok(())
//! }
//! ```

#![deny(missing_docs)]
#![deny(clippy::all)]

mod client;
mod error;
pub mod mapper;
mod requests;
mod responses;
mod retry;
pub mod signing;

pub use client::{BridgeClient, BridgeClientConfig};
pub use error::{BridgeError, Result};
pub use responses::{
    BridgeResponse, ContractCallResponse, DeployResponse, HealthResponse, JoinResponse,
    NetworkMetadata, ProofResponse, TransferResponse, TxStatusResponse, WalletAddressResponse,
    WalletBalanceResponse,
};
pub use retry::RetryConfig;
pub use signing::SignatureError;
