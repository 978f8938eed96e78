// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Midnight Bridge contributors

//! Canned endpoint handlers.
//!
//! Responses are deterministic per path so conformance tests can assert on
//! them; the submit/transfer hashes are derived from the request body to
//! stay deterministic without being constant.

use crate::{guard, StubConfig};
use actix_web::{web, HttpRequest, HttpResponse};
use midnight_bridge_api::signing;
use serde::Deserialize;
use serde_json::{json, Value};
use sha2::{Digest, Sha256};

type StubResult = Result<HttpResponse, guard::StubError>;

fn body_hash(body: &[u8]) -> String {
    format!("0x{}", hex::encode(Sha256::digest(body)))
}

pub(crate) async fn health(req: HttpRequest, state: web::Data<StubConfig>) -> StubResult {
    guard::check(&req, &[], &state)?;
    Ok(HttpResponse::Ok().json(json!({
        "status": "ok",
        "timestamp": signing::unix_timestamp(),
        "version": env!("CARGO_PKG_VERSION"),
    })))
}

pub(crate) async fn network_metadata(req: HttpRequest, state: web::Data<StubConfig>) -> StubResult {
    guard::check(&req, &[], &state)?;
    Ok(HttpResponse::Ok().json(json!({
        "network_id": "midnight-testnet-02",
        "network_name": "Midnight Testnet",
        "block_height": 128_764,
        "synced": true,
    })))
}

pub(crate) async fn tx_submit(
    req: HttpRequest,
    body: web::Bytes,
    state: web::Data<StubConfig>,
) -> StubResult {
    guard::check(&req, &body, &state)?;
    Ok(HttpResponse::Ok().json(json!({
        "tx_hash": body_hash(&body),
        "status": "pending",
    })))
}

pub(crate) async fn tx_status(
    req: HttpRequest,
    path: web::Path<String>,
    state: web::Data<StubConfig>,
) -> StubResult {
    guard::check(&req, &[], &state)?;
    Ok(HttpResponse::Ok().json(json!({
        "tx_hash": path.into_inner(),
        "status": "confirmed",
        "confirmations": 3,
        "block_height": 128_764,
    })))
}

pub(crate) async fn contract_call(
    req: HttpRequest,
    body: web::Bytes,
    state: web::Data<StubConfig>,
) -> StubResult {
    guard::check(&req, &body, &state)?;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "result": { "value": "42" },
        "gas_used": 21_000,
    })))
}

pub(crate) async fn contract_deploy(
    req: HttpRequest,
    body: web::Bytes,
    state: web::Data<StubConfig>,
) -> StubResult {
    guard::check(&req, &body, &state)?;
    Ok(HttpResponse::Ok().json(json!({
        "contract_address": "0x0100aabbccddeeff0100aabbccddeeff01234567",
        "tx_hash": body_hash(&body),
    })))
}

pub(crate) async fn contract_join(
    req: HttpRequest,
    body: web::Bytes,
    state: web::Data<StubConfig>,
) -> StubResult {
    guard::check(&req, &body, &state)?;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "tx_hash": body_hash(&body),
        "participant_id": "participant-1",
    })))
}

pub(crate) async fn proof_generate(
    req: HttpRequest,
    body: web::Bytes,
    state: web::Data<StubConfig>,
) -> StubResult {
    guard::check(&req, &body, &state)?;
    Ok(HttpResponse::Ok().json(json!({
        "proof": body_hash(&body),
        "verification_key": "0x766b5f746573745f6b6579",
        "public_outputs": ["1"],
    })))
}

pub(crate) async fn wallet_address(req: HttpRequest, state: web::Data<StubConfig>) -> StubResult {
    guard::check(&req, &[], &state)?;
    Ok(HttpResponse::Ok().json(json!({
        "address": "mn_shield-addr_test1qzstub",
        "public_key": "0x02aabbccddeeff00112233445566778899aabbccddeeff001122334455667788",
    })))
}

#[derive(Deserialize)]
pub(crate) struct BalanceQuery {
    address: Option<String>,
}

pub(crate) async fn wallet_balance(
    req: HttpRequest,
    query: web::Query<BalanceQuery>,
    state: web::Data<StubConfig>,
) -> StubResult {
    guard::check(&req, &[], &state)?;
    Ok(HttpResponse::Ok().json(json!({
        "balance": "1000000",
        "unit": "tDUST",
        "address": query.into_inner().address,
    })))
}

pub(crate) async fn wallet_transfer(
    req: HttpRequest,
    body: web::Bytes,
    state: web::Data<StubConfig>,
) -> StubResult {
    guard::check(&req, &body, &state)?;
    let to_address = serde_json::from_slice::<Value>(&body)
        .ok()
        .and_then(|v| v.get("to_address").and_then(Value::as_str).map(String::from))
        .unwrap_or_default();
    Ok(HttpResponse::Ok().json(json!({
        "tx_hash": body_hash(&body),
        "status": "submitted",
        "to_address": to_address,
    })))
}

pub(crate) async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({ "error": "Not found" }))
}
