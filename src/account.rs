//! User identity.
//!
//! The underlying portal is `org.freedesktop.portal.Account`.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::PortalError;
use crate::options::{OptionsDict, ResultBundle};
use crate::request::RequestPayload;

/// Basic information about the user, as shared by the portal dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    /// URI of an avatar image, if the user shared one
    pub image: Option<String>,
}

/// Request basic information about the user.
#[derive(Debug, Clone, Default)]
pub struct UserInformation {
    /// Shown to the user to explain why the information is needed
    pub reason: String,
}

impl UserInformation {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl RequestPayload for UserInformation {
    type Output = UserInfo;

    fn interface(&self) -> &'static str {
        "org.freedesktop.portal.Account"
    }

    fn method(&self) -> &'static str {
        "GetUserInformation"
    }

    fn to_options(&self) -> OptionsDict {
        let mut options = OptionsDict::new();
        options.insert("reason".to_string(), json!(self.reason));
        options
    }

    fn decode(results: ResultBundle) -> Result<UserInfo, PortalError> {
        Ok(UserInfo {
            id: results.require_str("id")?,
            name: results.require_str("name")?,
            image: results.lookup_str("image").map(str::to_string),
        })
    }
}
