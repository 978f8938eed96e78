// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Midnight Bridge contributors

//! Reference bridge server.
//!
//! A minimal, protocol-faithful stand-in for the real bridge: it enforces
//! the identical request-signing contract (via [`midnight_bridge_api::signing`],
//! the same module the client signs with) and answers every endpoint with
//! deterministic canned JSON. Used exclusively to prove the transport
//! client and signature engine interoperate across the wire; never
//! deployed in production.

#![deny(missing_docs)]
#![deny(clippy::all)]

mod guard;
mod routes;

pub use guard::StubError;

use actix_web::web;

/// Construction-time configuration of the stub.
#[derive(Debug, Clone, Default)]
pub struct StubConfig {
    /// HMAC secret; `None` disables signature verification.
    pub signing_secret: Option<String>,
    /// Expected `X-API-Key` value; `None` disables the check.
    pub api_key: Option<String>,
}

/// Returns a closure wiring the stub's state and routes into an actix app.
///
/// ```rust,no_run
/// use actix_web::{App, HttpServer};
/// use midnight_bridge_stub::{configure, StubConfig};
///
/// #[actix_web::main]
/// async fn main() -> std::io::Result<()> {
///     let factory = configure(StubConfig::default());
///     HttpServer::new(move || App::new().configure(|cfg| factory(cfg)))
///         .bind(("127.0.0.1", 8787))?
///         .run()
///         .await
/// }
/// ```
pub fn configure(config: StubConfig) -> impl Fn(&mut web::ServiceConfig) + Clone {
    let state = web::Data::new(config);
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(state.clone())
            .service(web::resource("/health").route(web::get().to(routes::health)))
            .service(web::resource("/network/metadata").route(web::get().to(routes::network_metadata)))
            .service(web::resource("/tx/submit").route(web::post().to(routes::tx_submit)))
            .service(web::resource("/tx/{hash}/status").route(web::get().to(routes::tx_status)))
            .service(web::resource("/contract/call").route(web::post().to(routes::contract_call)))
            .service(web::resource("/contract/deploy").route(web::post().to(routes::contract_deploy)))
            .service(web::resource("/contract/join").route(web::post().to(routes::contract_join)))
            .service(web::resource("/proof/generate").route(web::post().to(routes::proof_generate)))
            .service(web::resource("/wallet/address").route(web::get().to(routes::wallet_address)))
            .service(web::resource("/wallet/balance").route(web::get().to(routes::wallet_balance)))
            .service(web::resource("/wallet/transfer").route(web::post().to(routes::wallet_transfer)))
            .default_service(web::route().to(routes::not_found));
    }
}
