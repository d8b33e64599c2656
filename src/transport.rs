//! The transport seam.
//!
//! The bus connection, message serialization, and signal matching all live
//! behind [`Transport`]. The request controller only needs four things from
//! it: the caller's sender identity, a one-shot subscription on a request
//! path, fire-and-forget method dispatch, and a best-effort `Close`.
//!
//! A transport is shared read-only across all in-flight requests; each
//! request exclusively owns its own subscription.

use async_trait::async_trait;

use crate::error::TransportError;
use crate::options::{OptionsDict, ResultBundle};
use crate::token::RequestPath;

/// One outgoing portal method invocation.
///
/// The wire shape is `(parent_handle, options)`; feature-specific positional
/// arguments (a file chooser title, say) travel inside the options
/// dictionary, keyed by the payload that produced them.
#[derive(Debug, Clone)]
pub struct MethodCall {
    /// Portal interface, e.g. `org.freedesktop.portal.Screenshot`
    pub interface: &'static str,
    /// Method on that interface, e.g. `Screenshot`
    pub method: &'static str,
    /// Resolved parent window handle, empty for "no parent"
    pub parent_handle: String,
    /// Feature options plus the controller-merged `handle_token`
    pub options: OptionsDict,
}

/// The one notification a request path ever receives.
#[derive(Debug, Clone)]
pub struct Response {
    /// 0 = success, 1 = user-cancelled, anything else = failure
    pub code: u32,
    pub results: ResultBundle,
}

/// Identifier of an active response subscription, used to unsubscribe at
/// teardown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A live subscription for exactly one [`Response`] on one request path.
#[derive(Debug)]
pub struct ResponseSubscription {
    pub id: SubscriptionId,
    receiver: tokio::sync::oneshot::Receiver<Response>,
}

impl ResponseSubscription {
    pub fn new(id: SubscriptionId, receiver: tokio::sync::oneshot::Receiver<Response>) -> Self {
        Self { id, receiver }
    }

    /// Wait for the notification. Yields `None` if the transport dropped the
    /// sending side without ever delivering one.
    pub async fn recv(&mut self) -> Option<Response> {
        (&mut self.receiver).await.ok()
    }
}

/// Narrow interface to the bus connection.
#[async_trait]
pub trait Transport: Send + Sync {
    /// The caller's identity on the bus, used only as a namespacing
    /// component of request paths. Must already be path-safe; sanitizing
    /// the raw unique name is the implementation's job.
    fn sender_identity(&self) -> String;

    /// Register interest in the one `Response` addressed to `path`. At most
    /// one notification is ever delivered per subscription.
    async fn subscribe(&self, path: &RequestPath) -> Result<ResponseSubscription, TransportError>;

    /// Drop a subscription. Idempotent, and safe to call whether or not a
    /// notification was ever delivered.
    async fn unsubscribe(&self, id: SubscriptionId);

    /// Issue a portal method call. Fire-and-forget from the controller's
    /// perspective; the real result arrives through the subscription. An
    /// error here means the call could not be dispatched at all.
    async fn dispatch(&self, call: MethodCall) -> Result<(), TransportError>;

    /// Ask the portal to close the dialog behind `path`. Best effort; the
    /// caller ignores failures.
    async fn close_request(&self, path: &RequestPath) -> Result<(), TransportError>;
}
