//! Bridge between a caller-side cancellation token and the remote `Close`.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::token::RequestPath;
use crate::transport::Transport;

/// Links one request's cancellation token to a best-effort remote `Close`.
///
/// The bridge owns no background task: the controller awaits
/// [`CancelBridge::token`] as one of its suspension points and calls
/// [`CancelBridge::fire_close`] on the cancellation branch. A detached or
/// dropped bridge can therefore never fire after the request is gone.
pub struct CancelBridge {
    transport: Arc<dyn Transport>,
    path: RequestPath,
    token: CancellationToken,
    fired: bool,
    detached: bool,
}

impl CancelBridge {
    pub fn attach(
        transport: Arc<dyn Transport>,
        path: RequestPath,
        token: CancellationToken,
    ) -> Self {
        Self {
            transport,
            path,
            token,
            fired: false,
            detached: false,
        }
    }

    /// The token to await on. Cloned so the controller can select on it
    /// while still holding the bridge mutably for [`fire_close`].
    ///
    /// [`fire_close`]: CancelBridge::fire_close
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Send the remote `Close`, at most once per request no matter how many
    /// times the token triggers. Delivery failure is ignored; the remote
    /// dialog may linger or time out on its own.
    pub async fn fire_close(&mut self) {
        if self.fired || self.detached {
            return;
        }
        self.fired = true;

        debug!(path = %self.path, "sending Close for cancelled request");
        if let Err(err) = self.transport.close_request(&self.path).await {
            warn!(path = %self.path, %err, "failed to deliver Close, ignoring");
        }
    }

    /// Detach the bridge so it can never fire. Idempotent; must run during
    /// teardown even if the token was never triggered.
    pub fn detach(&mut self) {
        self.detached = true;
    }
}
