//! Portal entry point.
//!
//! [`Portal`] pairs a shared transport with addressing configuration and
//! hands out [`Call`]s. The transport is injected, shared immutably across
//! all requests; nothing here is a singleton.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::account::{UserInfo, UserInformation};
use crate::config::PortalConfig;
use crate::email::ComposeEmail;
use crate::error::PortalError;
use crate::file_chooser::{FileChoices, OpenFile, SaveFile};
use crate::print::{PreparePrint, PreparedPrint, Print};
use crate::request::{Call, RequestPayload};
use crate::screenshot::{Color, PickColor, Screenshot};
use crate::transport::Transport;
use crate::window::ParentWindow;

/// Client handle for issuing portal requests.
#[derive(Clone)]
pub struct Portal {
    transport: Arc<dyn Transport>,
    config: PortalConfig,
}

impl Portal {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self::with_config(transport, PortalConfig::default())
    }

    pub fn with_config(transport: Arc<dyn Transport>, config: PortalConfig) -> Self {
        Self { transport, config }
    }

    /// Build a request for an arbitrary payload. The feature methods below
    /// are conveniences over this.
    pub fn request<P: RequestPayload>(&self, payload: P) -> Call<P> {
        Call::new(Arc::clone(&self.transport), payload).with_config(self.config.clone())
    }

    async fn run<P: RequestPayload>(
        &self,
        payload: P,
        parent: Option<Box<dyn ParentWindow>>,
        cancel: Option<CancellationToken>,
    ) -> Result<P::Output, PortalError> {
        let mut call = self.request(payload);
        if let Some(parent) = parent {
            call = call.parent(parent);
        }
        if let Some(token) = cancel {
            call = call.cancel_on(token);
        }
        call.execute().await
    }

    /// Take a screenshot. Resolves to a URI pointing at the image file.
    pub async fn take_screenshot(
        &self,
        parent: Option<Box<dyn ParentWindow>>,
        options: Screenshot,
        cancel: Option<CancellationToken>,
    ) -> Result<String, PortalError> {
        self.run(options, parent, cancel).await
    }

    /// Let the user pick a color from the screen.
    pub async fn pick_color(
        &self,
        parent: Option<Box<dyn ParentWindow>>,
        cancel: Option<CancellationToken>,
    ) -> Result<Color, PortalError> {
        self.run(PickColor, parent, cancel).await
    }

    /// Ask the user to open one or more files.
    pub async fn open_file(
        &self,
        parent: Option<Box<dyn ParentWindow>>,
        options: OpenFile,
        cancel: Option<CancellationToken>,
    ) -> Result<FileChoices, PortalError> {
        self.run(options, parent, cancel).await
    }

    /// Ask the user for a location to save a file.
    pub async fn save_file(
        &self,
        parent: Option<Box<dyn ParentWindow>>,
        options: SaveFile,
        cancel: Option<CancellationToken>,
    ) -> Result<FileChoices, PortalError> {
        self.run(options, parent, cancel).await
    }

    /// Prompt the user to compose an email.
    pub async fn compose_email(
        &self,
        parent: Option<Box<dyn ParentWindow>>,
        options: ComposeEmail,
        cancel: Option<CancellationToken>,
    ) -> Result<(), PortalError> {
        self.run(options, parent, cancel).await
    }

    /// Request basic information about the user.
    pub async fn user_information(
        &self,
        parent: Option<Box<dyn ParentWindow>>,
        options: UserInformation,
        cancel: Option<CancellationToken>,
    ) -> Result<UserInfo, PortalError> {
        self.run(options, parent, cancel).await
    }

    /// Present a print dialog and obtain a token for a follow-up
    /// [`Portal::print`] call.
    pub async fn prepare_print(
        &self,
        parent: Option<Box<dyn ParentWindow>>,
        options: PreparePrint,
        cancel: Option<CancellationToken>,
    ) -> Result<PreparedPrint, PortalError> {
        self.run(options, parent, cancel).await
    }

    /// Print a document, optionally skipping the dialog with a token from a
    /// previous [`Portal::prepare_print`].
    pub async fn print(
        &self,
        parent: Option<Box<dyn ParentWindow>>,
        options: Print,
        cancel: Option<CancellationToken>,
    ) -> Result<(), PortalError> {
        self.run(options, parent, cancel).await
    }
}
