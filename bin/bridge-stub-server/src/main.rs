// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Midnight Bridge contributors

//! Standalone reference bridge server.
//!
//! Serves the canned bridge endpoints with optional request signing, for
//! conformance testing transport clients against a known-good verifier.

#![deny(missing_docs)]
#![deny(clippy::all)]

use actix_web::{App, HttpServer};
use anyhow::{Context, Result};
use clap::Parser;
use midnight_bridge_stub::{configure, StubConfig};
use tracing::info;
use tracing_actix_web::TracingLogger;
use tracing_log::LogTracer;
use tracing_subscriber::{fmt, prelude::*, EnvFilter, Registry};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// address to bind to
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1")]
    bind_addr: String,
    /// port to listen on
    #[arg(long, env = "PORT", default_value = "8300")]
    port: u16,
    /// shared HMAC secret; requests are unauthenticated when unset
    #[arg(long, env = "BRIDGE_SIGNING_SECRET")]
    signing_secret: Option<String>,
    /// expected API key; not checked when unset
    #[arg(long, env = "BRIDGE_API_KEY")]
    api_key: Option<String>,
}

#[actix_web::main]
async fn main() -> Result<()> {
    LogTracer::init().context("Failed to set logger")?;

    let subscriber = Registry::default()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr));
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set global subscriber")?;

    let args = Args::parse();

    info!(
        bind_addr = %args.bind_addr,
        port = args.port,
        signing = args.signing_secret.is_some(),
        api_key = args.api_key.is_some(),
        "Starting bridge stub server"
    );

    let factory = configure(StubConfig {
        signing_secret: args.signing_secret,
        api_key: args.api_key,
    });

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .configure(|cfg| factory(cfg))
    })
    .bind((args.bind_addr.as_str(), args.port))
    .with_context(|| format!("Failed to bind to port {}", args.port))?
    .run()
    .await
    .context("Failed to start HTTP server")?;

    Ok(())
}
