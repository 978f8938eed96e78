// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Midnight Bridge contributors

//! Wire conformance: the real transport client against the reference
//! server, over actual HTTP.

use actix_web::{App, HttpServer};
use midnight_bridge_api::{
    signing::{self, API_KEY_HEADER, SIGNATURE_HEADER, TIMESTAMP_HEADER},
    BridgeClient, BridgeClientConfig, BridgeError,
};
use midnight_bridge_stub::{configure, StubConfig};
use serde_json::{json, Value};

const SECRET: &str = "conformance-secret";
const API_KEY: &str = "conformance-key";

/// Spawns the stub on an ephemeral port and returns its base URL.
async fn spawn_stub(config: StubConfig) -> String {
    let factory = configure(config);
    let server = HttpServer::new(move || App::new().configure(|cfg| factory(cfg)))
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("failed to bind stub server");
    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    format!("http://{addr}")
}

fn signed_config() -> StubConfig {
    StubConfig {
        signing_secret: Some(SECRET.to_string()),
        api_key: Some(API_KEY.to_string()),
    }
}

fn signed_client(base_url: &str) -> BridgeClient {
    let config = BridgeClientConfig::new(base_url)
        .expect("valid base url")
        .with_api_key(API_KEY)
        .with_signing_secret(SECRET);
    BridgeClient::new(config).expect("failed to build client")
}

#[actix_web::test]
async fn signed_submit_round_trip() {
    let base_url = spawn_stub(signed_config()).await;
    let client = signed_client(&base_url);

    let tx_hash = client
        .submit_transaction(&json!({"from":"0x1","to":"0x2","amount":"10"}))
        .await
        .expect("signed submit rejected");
    assert!(tx_hash.starts_with("0x"), "canned hash is hex: {tx_hash}");

    let status = client
        .transaction_status(&tx_hash)
        .await
        .expect("status query rejected");
    assert_eq!(status.status, "confirmed");
    assert_eq!(status.confirmations, 3);
}

#[actix_web::test]
async fn all_endpoints_decode_against_the_stub() {
    let base_url = spawn_stub(signed_config()).await;
    let client = signed_client(&base_url);

    let health = client.health().await.expect("health");
    assert_eq!(health.status, "ok");

    let metadata = client.network_metadata().await.expect("metadata");
    assert_eq!(metadata.network_id, "midnight-testnet-02");
    assert!(metadata.synced);

    let call = client
        .call_contract("0xc0ffee", "tally", &json!([]))
        .await
        .expect("contract call");
    assert!(call.success);

    let deployed = client
        .deploy_contract("./ballot.compact", &json!(["question"]), None)
        .await
        .expect("deploy");
    assert!(deployed.contract_address.starts_with("0x"));

    let joined = client
        .join_contract(&deployed.contract_address, &json!({}))
        .await
        .expect("join");
    assert_eq!(joined.participant_id, "participant-1");

    let proof = client
        .generate_proof("ballot", "cast", &json!(["1"]), &json!({"secret":"0x9"}))
        .await
        .expect("proof");
    assert!(!proof.verification_key.is_empty());

    let address = client.wallet_address().await.expect("address");
    assert!(address.address.starts_with("mn_"));

    let transfer = client
        .transfer(&address.address, "25", None)
        .await
        .expect("transfer");
    assert_eq!(transfer.status, "submitted");
    assert_eq!(transfer.to_address, address.address);
}

#[actix_web::test]
async fn stale_timestamp_replay_is_rejected() {
    let base_url = spawn_stub(signed_config()).await;

    // Replay a request whose signature is valid but ten minutes old.
    let body = br#"{"from":"0x1","to":"0x2","amount":"10"}"#;
    let stale = signing::unix_timestamp() - 600;
    let signature = signing::sign(SECRET.as_bytes(), "POST", "/tx/submit", body, stale);

    let response = reqwest::Client::new()
        .post(format!("{base_url}/tx/submit"))
        .header("content-type", "application/json")
        .header(API_KEY_HEADER, API_KEY)
        .header(TIMESTAMP_HEADER, stale.to_string())
        .header(SIGNATURE_HEADER, signature)
        .body(body.to_vec())
        .send()
        .await
        .expect("request failed");

    assert_eq!(response.status().as_u16(), 401);
    let payload: Value = response.json().await.expect("json body");
    assert_eq!(payload["error"], "Request timestamp expired");
}

#[actix_web::test]
async fn query_string_is_bound_into_the_signature() {
    let base_url = spawn_stub(signed_config()).await;
    let client = signed_client(&base_url);

    // Signed over the full path including the query: accepted.
    let balance = client.wallet_balance("0xAAA").await.expect("balance");
    assert_eq!(balance.balance, "1000000");
    assert_eq!(balance.address.as_deref(), Some("0xAAA"));

    // Same request, but signed over the path without the query: rejected.
    let now = signing::unix_timestamp();
    let signature = signing::sign(SECRET.as_bytes(), "GET", "/wallet/balance", &[], now);
    let response = reqwest::Client::new()
        .get(format!("{base_url}/wallet/balance?address=0xAAA"))
        .header(API_KEY_HEADER, API_KEY)
        .header(TIMESTAMP_HEADER, now.to_string())
        .header(SIGNATURE_HEADER, signature)
        .send()
        .await
        .expect("request failed");

    assert_eq!(response.status().as_u16(), 401);
    let payload: Value = response.json().await.expect("json body");
    assert_eq!(payload["error"], "Invalid signature");
}

#[actix_web::test]
async fn missing_signature_headers_are_rejected() {
    let base_url = spawn_stub(signed_config()).await;

    let response = reqwest::Client::new()
        .get(format!("{base_url}/health"))
        .header(API_KEY_HEADER, API_KEY)
        .send()
        .await
        .expect("request failed");

    assert_eq!(response.status().as_u16(), 401);
    let payload: Value = response.json().await.expect("json body");
    let message = payload["error"].as_str().unwrap_or_default();
    assert!(
        message.to_lowercase().contains("signature"),
        "error must mention the signature: {message}"
    );
}

#[actix_web::test]
async fn tampered_body_is_rejected() {
    let base_url = spawn_stub(signed_config()).await;

    let signed_body = br#"{"amount":"10"}"#;
    let sent_body = br#"{"amount":"99"}"#;
    let now = signing::unix_timestamp();
    let signature = signing::sign(SECRET.as_bytes(), "POST", "/tx/submit", signed_body, now);

    let response = reqwest::Client::new()
        .post(format!("{base_url}/tx/submit"))
        .header("content-type", "application/json")
        .header(API_KEY_HEADER, API_KEY)
        .header(TIMESTAMP_HEADER, now.to_string())
        .header(SIGNATURE_HEADER, signature)
        .body(sent_body.to_vec())
        .send()
        .await
        .expect("request failed");

    assert_eq!(response.status().as_u16(), 401);
    let payload: Value = response.json().await.expect("json body");
    assert_eq!(payload["error"], "Invalid signature");
}

#[actix_web::test]
async fn wrong_api_key_is_rejected() {
    let base_url = spawn_stub(signed_config()).await;
    let config = BridgeClientConfig::new(&base_url)
        .expect("valid base url")
        .with_api_key("not-the-key")
        .with_signing_secret(SECRET);
    let client = BridgeClient::new(config).expect("failed to build client");

    match client.health().await {
        Err(BridgeError::Bridge { status, message, .. }) => {
            assert_eq!(status, 401);
            assert_eq!(message, "Invalid API key");
        }
        other => panic!("expected Bridge(401), got {other:?}"),
    }
}

#[actix_web::test]
async fn unsigned_mode_passes_through() {
    let base_url = spawn_stub(StubConfig::default()).await;
    let config = BridgeClientConfig::new(&base_url).expect("valid base url");
    let client = BridgeClient::new(config).expect("failed to build client");

    let health = client.health().await.expect("health without signing");
    assert_eq!(health.status, "ok");
}

#[actix_web::test]
async fn unknown_path_is_not_found() {
    let base_url = spawn_stub(StubConfig::default()).await;

    let response = reqwest::Client::new()
        .get(format!("{base_url}/nope"))
        .send()
        .await
        .expect("request failed");
    assert_eq!(response.status().as_u16(), 404);
    let payload: Value = response.json().await.expect("json body");
    assert_eq!(payload["error"], "Not found");
}
