// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Midnight Bridge contributors

//! HMAC-SHA256 request signing shared by the client and the reference server.
//!
//! A signature binds one `(timestamp, method, path+query, body)` tuple:
//!
//! ```text
//! string_to_sign = timestamp "\n" uppercase(method) "\n" path_with_query "\n" hex(sha256(body))
//! signature      = hex(HMAC-SHA256(secret, string_to_sign))
//! ```
//!
//! The path used for signing must be byte-identical on both sides. The
//! canonical rule is: the signer uses the serialized RFC 3986 path and query
//! exactly as written to the request line (the [`url::Url`] rendering on the
//! client side), and the verifier reconstructs it from the raw request line,
//! with no re-normalization of percent-encoding on either side.

use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

/// Maximum accepted clock drift between signer and verifier, in seconds.
pub const ACCEPTANCE_WINDOW_SECS: i64 = 300;

/// Header carrying the request timestamp (unix seconds, decimal string).
pub const TIMESTAMP_HEADER: &str = "X-Timestamp";
/// Header carrying the hex-encoded HMAC-SHA256 signature.
pub const SIGNATURE_HEADER: &str = "X-Signature";
/// Header carrying the static API key.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Authentication failures detected by the verifier.
///
/// The `Display` strings double as the wire-level `error` messages the
/// reference server returns with status 401.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureError {
    /// The timestamp or signature header is absent.
    #[error("Missing signature headers")]
    MissingSignature,
    /// The timestamp is outside the acceptance window.
    #[error("Request timestamp expired")]
    TimestampExpired,
    /// The signature does not match the request contents.
    #[error("Invalid signature")]
    InvalidSignature,
}

/// Current unix time in seconds.
pub fn unix_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default()
}

fn string_to_sign(method: &str, path_with_query: &str, body: &[u8], timestamp: i64) -> String {
    let body_hash = hex::encode(Sha256::digest(body));
    format!(
        "{timestamp}\n{method}\n{path_with_query}\n{body_hash}",
        method = method.to_uppercase()
    )
}

/// Computes the hex-encoded request signature.
///
/// An empty `body` is hashed as the empty byte sequence, so GET requests and
/// body-less POSTs are signed consistently.
pub fn sign(secret: &[u8], method: &str, path_with_query: &str, body: &[u8], timestamp: i64) -> String {
    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC accepts any key length");
    mac.update(string_to_sign(method, path_with_query, body, timestamp).as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Verifies a received signature against the reconstructed request.
///
/// Two independent checks, both required: the timestamp must be within
/// [`ACCEPTANCE_WINDOW_SECS`] of `now`, and the signature must match the
/// one recomputed over `(timestamp, method, path, body)`. The comparison is
/// constant-time ([`Mac::verify_slice`]), so a mismatch leaks no prefix
/// information.
pub fn verify(
    secret: &[u8],
    received_signature: &str,
    method: &str,
    path_with_query: &str,
    body: &[u8],
    received_timestamp: i64,
    now: i64,
) -> Result<(), SignatureError> {
    if (now - received_timestamp).abs() > ACCEPTANCE_WINDOW_SECS {
        return Err(SignatureError::TimestampExpired);
    }
    let raw = hex::decode(received_signature).map_err(|_| SignatureError::InvalidSignature)?;
    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC accepts any key length");
    mac.update(string_to_sign(method, path_with_query, body, received_timestamp).as_bytes());
    mac.verify_slice(&raw)
        .map_err(|_| SignatureError::InvalidSignature)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test-secret";

    #[test]
    fn sign_verify_round_trip() {
        let body = br#"{"from":"0x1","to":"0x2","amount":"10"}"#;
        let ts = 1_700_000_000;
        let sig = sign(SECRET, "post", "/tx/submit", body, ts);
        assert!(verify(SECRET, &sig, "POST", "/tx/submit", body, ts, ts).is_ok());
    }

    #[test]
    fn empty_body_hashes_empty_sequence() {
        let ts = 1_700_000_000;
        let sig = sign(SECRET, "GET", "/health", &[], ts);
        assert!(verify(SECRET, &sig, "GET", "/health", &[], ts, ts).is_ok());
    }

    #[test]
    fn body_bit_flip_rejected() {
        let ts = 1_700_000_000;
        let mut body = br#"{"amount":"10"}"#.to_vec();
        let sig = sign(SECRET, "POST", "/tx/submit", &body, ts);
        body[2] ^= 0x01;
        assert_eq!(
            verify(SECRET, &sig, "POST", "/tx/submit", &body, ts, ts),
            Err(SignatureError::InvalidSignature)
        );
    }

    #[test]
    fn path_bit_flip_rejected() {
        let ts = 1_700_000_000;
        let sig = sign(SECRET, "GET", "/wallet/balance?address=0xAAA", &[], ts);
        assert_eq!(
            verify(SECRET, &sig, "GET", "/wallet/balance?address=0xAAB", &[], ts, ts),
            Err(SignatureError::InvalidSignature)
        );
    }

    #[test]
    fn query_string_is_part_of_the_signed_path() {
        let ts = 1_700_000_000;
        let sig = sign(SECRET, "GET", "/wallet/balance", &[], ts);
        assert_eq!(
            verify(SECRET, &sig, "GET", "/wallet/balance?address=0xAAA", &[], ts, ts),
            Err(SignatureError::InvalidSignature)
        );
    }

    #[test]
    fn timestamp_window_boundaries() {
        let ts = 1_700_000_000;
        let sig = sign(SECRET, "GET", "/health", &[], ts);
        assert!(verify(SECRET, &sig, "GET", "/health", &[], ts, ts + 299).is_ok());
        assert!(verify(SECRET, &sig, "GET", "/health", &[], ts, ts - 299).is_ok());
        assert_eq!(
            verify(SECRET, &sig, "GET", "/health", &[], ts, ts + 301),
            Err(SignatureError::TimestampExpired)
        );
        assert_eq!(
            verify(SECRET, &sig, "GET", "/health", &[], ts, ts - 301),
            Err(SignatureError::TimestampExpired)
        );
    }

    #[test]
    fn method_case_is_canonicalized() {
        let ts = 1_700_000_000;
        let sig = sign(SECRET, "post", "/tx/submit", b"{}", ts);
        assert_eq!(sig, sign(SECRET, "POST", "/tx/submit", b"{}", ts));
    }
}
