//! Shared test doubles: a recording transport and a scripted parent window.

// Not every test binary uses every helper here.
#![allow(dead_code)]

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;
use tokio::sync::oneshot;

use wicket::{
    MethodCall, ParentWindow, RequestPath, Response, ResponseSubscription, ResultBundle,
    SubscriptionId, Transport, TransportError, WindowHandle,
};

#[derive(Default)]
pub struct TransportState {
    pub pending: Vec<(String, SubscriptionId, oneshot::Sender<Response>)>,
    pub subscribed: Vec<String>,
    pub dispatched: Vec<MethodCall>,
    pub unsubscribed: Vec<SubscriptionId>,
    pub closes: Vec<String>,
}

/// In-memory transport that records every interaction. A reply configured
/// with [`RecordingTransport::reply_with`] is delivered synchronously at
/// dispatch time, before the controller starts waiting; without one the
/// subscription stays pending until [`RecordingTransport::respond`].
#[derive(Default)]
pub struct RecordingTransport {
    reply: Mutex<Option<Response>>,
    next_id: AtomicU64,
    pub state: Mutex<TransportState>,
}

/// Install the env-filter subscriber once so `RUST_LOG` surfaces controller
/// traces during a test run.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

impl RecordingTransport {
    pub fn new() -> Arc<Self> {
        init_tracing();
        Arc::new(Self::default())
    }

    pub fn reply_with(self: Arc<Self>, code: u32, results: ResultBundle) -> Arc<Self> {
        *self.reply.lock() = Some(Response { code, results });
        self
    }

    /// Deliver the one response for the given request path by hand.
    pub fn respond(&self, path: &str, code: u32, results: ResultBundle) {
        let mut state = self.state.lock();
        if let Some(pos) = state.pending.iter().position(|(p, _, _)| p == path) {
            let (_, _, tx) = state.pending.remove(pos);
            let _ = tx.send(Response { code, results });
        }
    }

    /// The path of the most recent subscription, i.e. the allocated request
    /// path of the in-flight call.
    pub fn last_path(&self) -> Option<String> {
        self.state
            .lock()
            .pending
            .last()
            .map(|(path, _, _)| path.clone())
    }

    pub fn close_count(&self) -> usize {
        self.state.lock().closes.len()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    fn sender_identity(&self) -> String {
        "1_42".to_string()
    }

    async fn subscribe(&self, path: &RequestPath) -> Result<ResponseSubscription, TransportError> {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let (tx, rx) = oneshot::channel();
        let mut state = self.state.lock();
        state.subscribed.push(path.as_str().to_string());
        state.pending.push((path.as_str().to_string(), id, tx));
        Ok(ResponseSubscription::new(id, rx))
    }

    async fn unsubscribe(&self, id: SubscriptionId) {
        self.state.lock().unsubscribed.push(id);
    }

    async fn dispatch(&self, call: MethodCall) -> Result<(), TransportError> {
        let reply = self.reply.lock().clone();
        let mut state = self.state.lock();
        state.dispatched.push(call);
        if let Some(reply) = reply {
            if let Some((_, _, tx)) = state.pending.pop() {
                let _ = tx.send(reply);
            }
        }
        Ok(())
    }

    async fn close_request(&self, path: &RequestPath) -> Result<(), TransportError> {
        self.state.lock().closes.push(path.as_str().to_string());
        Ok(())
    }
}

/// Parent window that exports a fixed handle and counts its lifecycle.
pub struct ScriptedParent {
    handle: String,
    pub exports: AtomicUsize,
    pub unexports: AtomicUsize,
}

impl ScriptedParent {
    pub fn new(handle: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            handle: handle.into(),
            exports: AtomicUsize::new(0),
            unexports: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl ParentWindow for ScriptedParent {
    async fn export(&self) -> WindowHandle {
        self.exports.fetch_add(1, Ordering::Relaxed);
        WindowHandle::new(self.handle.clone())
    }

    fn unexport(&self) {
        self.unexports.fetch_add(1, Ordering::Relaxed);
    }
}

/// `Arc`-backed handle so tests can keep observing a parent the call owns.
pub struct SharedParent(pub Arc<ScriptedParent>);

#[async_trait]
impl ParentWindow for SharedParent {
    async fn export(&self) -> WindowHandle {
        self.0.export().await
    }

    fn unexport(&self) {
        self.0.unexport()
    }
}

pub fn bundle(entries: &[(&str, Value)]) -> ResultBundle {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}
