//! Per-browser visitor identity.
//!
//! Identity tags votes, it does not prevent duplicate voting. A returning
//! cookie is accepted verbatim with no format check; a missing or empty
//! cookie gets a fresh token minted from a random 64-bit value. Collisions
//! are accepted silently.

use axum_extra::extract::cookie::{Cookie, CookieJar};

pub const VOTER_COOKIE: &str = "voter_id";

/// Resolves the visitor identity for a request, minting one if absent.
pub fn resolve(jar: &CookieJar) -> String {
    match jar.get(VOTER_COOKIE) {
        Some(cookie) if !cookie.value().is_empty() => cookie.value().to_string(),
        _ => new_voter_id(),
    }
}

/// Lowercase hex of a uniformly random u64, no width padding.
pub fn new_voter_id() -> String {
    format!("{:x}", rand::random::<u64>())
}

/// Writes the identity back to the response. No expiry, no security flags.
pub fn remember(jar: CookieJar, voter_id: &str) -> CookieJar {
    jar.add(
        Cookie::build((VOTER_COOKIE, voter_id.to_string()))
            .path("/")
            .build(),
    )
}
