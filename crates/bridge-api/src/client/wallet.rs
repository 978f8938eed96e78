// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Midnight Bridge contributors

//! Wallet queries and transfers.

use super::BridgeClient;
use crate::{
    error::Result,
    mapper,
    requests::TransferRequest,
    responses::{TransferResponse, WalletAddressResponse, WalletBalanceResponse},
};
use reqwest::Method;
use serde_json::{Map, Value};

impl BridgeClient {
    /// GET /wallet/address
    /// Retrieves the bridge wallet's receive address and public key.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::BridgeError`] when the request fails or the
    /// response cannot be decoded.
    pub async fn wallet_address(&self) -> Result<WalletAddressResponse> {
        let response = self.request(Method::GET, "/wallet/address", None).await?;
        mapper::decode(&response, "/wallet/address")
    }

    /// GET /wallet/balance?address=
    /// Retrieves the balance of an address.
    ///
    /// The query string is part of the signed path; the signature computed
    /// here is invalid for the same path without the query.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::BridgeError`] when the request fails or the
    /// response cannot be decoded.
    pub async fn wallet_balance(&self, address: &str) -> Result<WalletBalanceResponse> {
        let mut url = self.endpoint_url("/wallet/balance")?;
        url.query_pairs_mut().append_pair("address", address);
        let response = self.request_url(Method::GET, url, None).await?;
        mapper::decode(&response, "/wallet/balance")
    }

    /// POST /wallet/transfer
    /// Transfers funds from the bridge wallet to `to_address`.
    ///
    /// `extra` carries bridge-specific optional fields (fee hints, memos)
    /// merged into the request body.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::BridgeError`] when the request fails or the
    /// response cannot be decoded.
    pub async fn transfer(
        &self,
        to_address: &str,
        amount: &str,
        extra: Option<&Map<String, Value>>,
    ) -> Result<TransferResponse> {
        let body = serde_json::to_value(TransferRequest {
            to_address,
            amount,
            extra,
        })?;
        let response = self.request(Method::POST, "/wallet/transfer", Some(&body)).await?;
        mapper::decode(&response, "/wallet/transfer")
    }
}
