//! The generic portal request controller.
//!
//! Every portal dialog request follows the same lifecycle:
//!
//! 1. export the parent window handle (skipped when there is no parent),
//! 2. allocate a token and derive the request path from it,
//! 3. subscribe to the one response notification on that path,
//! 4. attach the cancellation bridge if the caller supplied a token,
//! 5. dispatch the remote method carrying the handle, options, and token,
//! 6. await exactly one of: response notification, cancellation,
//! 7. complete once and tear everything down.
//!
//! Steps 2 through 4 strictly precede step 5: a fast response must never
//! race an unregistered subscriber. The controller suspends only at the
//! export future, the response receiver, and the cancellation token; whoever
//! resolves first produces the single outcome, the loser is dropped as a
//! no-op.

use std::sync::Arc;

use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::cancel::CancelBridge;
use crate::config::PortalConfig;
use crate::error::{PortalError, TransportError};
use crate::options::{OptionsDict, ResultBundle};
use crate::token::RequestPath;
use crate::transport::{MethodCall, Response, ResponseSubscription, Transport};
use crate::window::{ParentWindow, WindowHandle};

/// Feature-specific marshaling plugged into the controller.
///
/// The controller never inspects payload-specific keys: the payload supplies
/// the fields to merge into the outgoing options dictionary and the decoder
/// from the result bundle into its public return type.
pub trait RequestPayload: Send {
    type Output: Send;

    /// Portal interface the method lives on.
    fn interface(&self) -> &'static str;

    /// Method to invoke.
    fn method(&self) -> &'static str;

    /// Options to merge into the outgoing call. The controller adds the
    /// `handle_token` entry itself.
    fn to_options(&self) -> OptionsDict;

    /// Decode the success result bundle.
    fn decode(results: ResultBundle) -> Result<Self::Output, PortalError>;
}

/// One in-flight portal request.
///
/// Owns its payload, parent context, and cancellation token exclusively;
/// consumed by [`Call::execute`], which completes exactly once.
pub struct Call<P: RequestPayload> {
    transport: Arc<dyn Transport>,
    config: PortalConfig,
    payload: P,
    parent: Option<Box<dyn ParentWindow>>,
    cancel: Option<CancellationToken>,
}

impl<P: RequestPayload> Call<P> {
    pub fn new(transport: Arc<dyn Transport>, payload: P) -> Self {
        Self {
            transport,
            config: PortalConfig::default(),
            payload,
            parent: None,
            cancel: None,
        }
    }

    pub fn with_config(mut self, config: PortalConfig) -> Self {
        self.config = config;
        self
    }

    /// Attach parent window context. The request owns it until completion.
    pub fn parent(mut self, parent: Box<dyn ParentWindow>) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Attach a caller-side cancellation token. Triggering it sends one
    /// best-effort `Close` to the portal and resolves the request as
    /// [`PortalError::Cancelled`].
    pub fn cancel_on(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Run the request through to its single completion.
    ///
    /// Success, cancellation, and every failure mode (including a transport
    /// that rejects the dispatch outright) resolve through this one return
    /// path, after unconditional teardown: unexport the parent, drop the
    /// subscription, detach the cancellation bridge, release owned state.
    pub async fn execute(self) -> Result<P::Output, PortalError> {
        let Call {
            transport,
            config,
            payload,
            parent,
            cancel,
        } = self;

        // Export phase, skipped entirely without parent context.
        let handle = match parent.as_deref() {
            Some(p) => p.export().await,
            None => WindowHandle::none(),
        };

        let (token, path) = RequestPath::allocate(
            &config.request_path_prefix,
            &transport.sender_identity(),
        );
        debug!(%token, %path, "allocated request path");

        // Subscribe before dispatch so a fast response cannot be lost.
        let mut subscription = match transport.subscribe(&path).await {
            Ok(subscription) => subscription,
            Err(err) => {
                if let Some(p) = parent.as_deref() {
                    p.unexport();
                }
                return Err(err.into());
            }
        };

        let mut bridge =
            cancel.map(|t| CancelBridge::attach(Arc::clone(&transport), path.clone(), t));

        let mut options = payload.to_options();
        options.insert(
            "handle_token".to_string(),
            Value::String(token.as_str().to_string()),
        );
        let call = MethodCall {
            interface: payload.interface(),
            method: payload.method(),
            parent_handle: handle.as_str().to_string(),
            options,
        };

        debug!(
            interface = call.interface,
            method = call.method,
            "dispatching portal request"
        );
        let outcome = match transport.dispatch(call).await {
            Ok(()) => await_outcome::<P>(&mut subscription, bridge.as_mut()).await,
            // A rejected dispatch is an ordinary failure, not a separate
            // code path: it still flows through the completion point below.
            Err(err) => Err(PortalError::Transport(err)),
        };

        // Unconditional teardown before the outcome is surfaced. The bridge
        // is detached (and dropped) here, so a token triggered after
        // completion can never send a Close.
        if let Some(p) = parent.as_deref() {
            p.unexport();
        }
        transport.unsubscribe(subscription.id).await;
        if let Some(b) = bridge.as_mut() {
            b.detach();
        }

        outcome
    }
}

async fn await_outcome<P: RequestPayload>(
    subscription: &mut ResponseSubscription,
    bridge: Option<&mut CancelBridge>,
) -> Result<P::Output, PortalError> {
    match bridge {
        Some(bridge) => {
            let cancelled = bridge.token();
            tokio::select! {
                response = subscription.recv() => complete::<P>(response),
                _ = cancelled.cancelled() => {
                    bridge.fire_close().await;
                    Err(PortalError::Cancelled)
                }
            }
        }
        None => complete::<P>(subscription.recv().await),
    }
}

/// Map the response code onto the closed outcome set.
fn complete<P: RequestPayload>(response: Option<Response>) -> Result<P::Output, PortalError> {
    let response = response.ok_or_else(|| {
        PortalError::Transport(TransportError::ConnectionLost(
            "response subscription dropped without a notification".to_string(),
        ))
    })?;

    match response.code {
        0 => P::decode(response.results),
        1 => Err(PortalError::Cancelled),
        code => Err(PortalError::RemoteFailure(code)),
    }
}
