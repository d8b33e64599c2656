//! Printing.
//!
//! The underlying portal is `org.freedesktop.portal.Print`. A
//! [`PreparePrint`] request shows the dialog and yields a token; a follow-up
//! [`Print`] carrying that token skips the dialog. Document transfer is the
//! transport's concern and stays outside these payloads.

use serde_json::{json, Value};

use crate::error::PortalError;
use crate::options::{OptionsDict, ResultBundle};
use crate::request::RequestPayload;

const INTERFACE: &str = "org.freedesktop.portal.Print";

/// What the user chose in the print dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedPrint {
    /// Token authorizing a dialog-free [`Print`]
    pub token: u32,
    /// Print settings as adjusted by the user
    pub settings: Option<Value>,
    /// Page setup as adjusted by the user
    pub page_setup: Option<Value>,
}

/// Present a print dialog.
#[derive(Debug, Clone, Default)]
pub struct PreparePrint {
    /// Dialog title
    pub title: String,
    pub modal: bool,
    /// Initial print settings
    pub settings: OptionsDict,
    /// Initial page setup
    pub page_setup: OptionsDict,
}

impl PreparePrint {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

impl RequestPayload for PreparePrint {
    type Output = PreparedPrint;

    fn interface(&self) -> &'static str {
        INTERFACE
    }

    fn method(&self) -> &'static str {
        "PreparePrint"
    }

    fn to_options(&self) -> OptionsDict {
        let mut options = OptionsDict::new();
        options.insert("title".to_string(), json!(self.title));
        options.insert("modal".to_string(), json!(self.modal));
        options.insert("settings".to_string(), json!(self.settings));
        options.insert("page-setup".to_string(), json!(self.page_setup));
        options
    }

    fn decode(results: ResultBundle) -> Result<PreparedPrint, PortalError> {
        Ok(PreparedPrint {
            token: results.require_u32("token")?,
            settings: results.get("settings").cloned(),
            page_setup: results.get("page-setup").cloned(),
        })
    }
}

/// Print a document.
#[derive(Debug, Clone, Default)]
pub struct Print {
    /// Dialog title, shown only when no token skips the dialog
    pub title: String,
    pub modal: bool,
    /// Token from an earlier [`PreparePrint`]
    pub token: Option<u32>,
}

impl Print {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_token(mut self, token: u32) -> Self {
        self.token = Some(token);
        self
    }
}

impl RequestPayload for Print {
    type Output = ();

    fn interface(&self) -> &'static str {
        INTERFACE
    }

    fn method(&self) -> &'static str {
        "Print"
    }

    fn to_options(&self) -> OptionsDict {
        let mut options = OptionsDict::new();
        options.insert("title".to_string(), json!(self.title));
        options.insert("modal".to_string(), json!(self.modal));
        if let Some(token) = self.token {
            options.insert("token".to_string(), json!(token));
        }
        options
    }

    fn decode(_results: ResultBundle) -> Result<(), PortalError> {
        Ok(())
    }
}
