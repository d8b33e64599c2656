//! Error types for portal requests.

use thiserror::Error;

/// Errors raised by a transport while subscribing, dispatching, or closing
/// a request.
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    #[error("dispatch rejected: {0}")]
    DispatchRejected(String),

    #[error("subscription failed for {path}: {reason}")]
    SubscriptionFailed { path: String, reason: String },

    #[error("connection lost: {0}")]
    ConnectionLost(String),
}

/// Terminal outcome of a failed portal request.
///
/// Every request resolves through exactly one of these or success; there are
/// no retries anywhere in the crate. A failed or cancelled request must be
/// re-issued from scratch.
#[derive(Debug, Error)]
pub enum PortalError {
    /// The user dismissed the dialog, or the caller cancelled the request
    /// before a response arrived. Both surface identically.
    #[error("portal request cancelled")]
    Cancelled,

    /// The portal answered with a failure response code (anything other
    /// than 0 or 1).
    #[error("portal request failed with response code {0}")]
    RemoteFailure(u32),

    /// The portal answered success but the result bundle is missing a field
    /// the feature requires.
    #[error("malformed portal response: missing `{0}`")]
    MalformedResponse(&'static str),

    /// The remote call could not be dispatched at all.
    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),
}

impl PortalError {
    /// Whether this is a failure outcome in the coarse sense of the portal
    /// protocol (everything that is neither success nor cancellation).
    pub fn is_failure(&self) -> bool {
        !matches!(self, PortalError::Cancelled)
    }
}
