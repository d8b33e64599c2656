//! Per-request tokens and request path derivation.

use crate::config::REQUEST_PATH_PREFIX;

/// Token identifying one request, embedded in the options dictionary as
/// `handle_token` so the portal can derive the same request path the client
/// subscribed on.
///
/// Uniqueness within a process lifetime comes from a random `u32`; a
/// collision is an accepted risk, not something the crate detects.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HandleToken(String);

impl HandleToken {
    pub fn generate() -> Self {
        Self(format!("wicket{}", rand::random::<u32>()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for HandleToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The object path a request's `Response` signal is addressed to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestPath(String);

impl RequestPath {
    /// Allocate a fresh token and derive the request path from it and the
    /// caller's sender identity: `<prefix><sender>/<token>`. Pure
    /// computation, no error conditions.
    pub fn allocate(prefix: &str, sender: &str) -> (HandleToken, RequestPath) {
        let token = HandleToken::generate();
        let path = RequestPath(format!("{}{}/{}", prefix, sender, token));
        (token, path)
    }

    /// Allocate under the standard freedesktop prefix.
    pub fn allocate_default(sender: &str) -> (HandleToken, RequestPath) {
        Self::allocate(REQUEST_PATH_PREFIX, sender)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RequestPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
