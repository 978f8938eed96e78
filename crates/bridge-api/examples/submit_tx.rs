// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Midnight Bridge contributors

//! Submit a transaction through a locally running bridge.
//!
//! ```sh
//! BRIDGE_URL=http://localhost:8787 \
//! BRIDGE_API_KEY=local-dev-key \
//! BRIDGE_SIGNING_SECRET=local-dev-secret \
//! cargo run --example submit_tx
//! ```

use midnight_bridge_api::{BridgeClient, BridgeClientConfig};
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = std::env::var("BRIDGE_URL").unwrap_or_else(|_| "http://localhost:8787".into());
    let mut config = BridgeClientConfig::new(&base_url)?;
    if let Ok(api_key) = std::env::var("BRIDGE_API_KEY") {
        config = config.with_api_key(api_key);
    }
    if let Ok(secret) = std::env::var("BRIDGE_SIGNING_SECRET") {
        config = config.with_signing_secret(secret);
    }
    let client = BridgeClient::new(config)?;

    let health = client.health().await?;
    println!("bridge is {}", health.status);

    let tx_hash = client
        .submit_transaction(&json!({"from": "0x1", "to": "0x2", "amount": "10"}))
        .await?;
    println!("submitted transaction {tx_hash}");

    let status = client.transaction_status(&tx_hash).await?;
    println!("status: {} ({} confirmations)", status.status, status.confirmations);

    Ok(())
}
