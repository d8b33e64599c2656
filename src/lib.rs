//! Wicket: Desktop Portal Client Bindings
//!
//! Asynchronous bindings for the desktop sandboxing portal protocol. Every
//! portal dialog (screenshot, file chooser, email, account, print) follows the
//! same request lifecycle: export a parent window handle, allocate a request
//! path, subscribe to the one-shot response signal, dispatch the remote
//! method, and resolve exactly one of success, cancelled, or failure. The
//! [`request::Call`] controller implements that lifecycle once; features plug
//! in as [`request::RequestPayload`] implementations.

pub mod account;
pub mod cancel;
pub mod config;
pub mod email;
pub mod error;
pub mod file_chooser;
pub mod options;
pub mod portal;
pub mod print;
pub mod request;
pub mod screenshot;
pub mod token;
pub mod transport;
pub mod window;

pub use config::PortalConfig;
pub use error::{PortalError, TransportError};
pub use options::{OptionsDict, ResultBundle};
pub use portal::Portal;
pub use request::{Call, RequestPayload};
pub use token::{HandleToken, RequestPath};
pub use transport::{MethodCall, Response, ResponseSubscription, SubscriptionId, Transport};
pub use window::{ParentWindow, WindowHandle};
