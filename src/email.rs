//! Email composition.
//!
//! The underlying portal is `org.freedesktop.portal.Email`. The message may
//! be pre-filled with an address, subject, body, and attachments; the user
//! reviews and sends it from their own client.

use std::path::PathBuf;

use serde_json::{json, Value};
use tracing::warn;

use crate::error::PortalError;
use crate::options::{OptionsDict, ResultBundle};
use crate::request::RequestPayload;

/// Prompt the user to compose an email.
#[derive(Debug, Clone, Default)]
pub struct ComposeEmail {
    pub address: Option<String>,
    pub subject: Option<String>,
    pub body: Option<String>,
    /// Files to attach. An attachment that cannot be opened is skipped with
    /// a warning; it never fails the whole request.
    pub attachments: Vec<PathBuf>,
}

impl ComposeEmail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn attach(mut self, path: impl Into<PathBuf>) -> Self {
        self.attachments.push(path.into());
        self
    }

    fn readable_attachments(&self) -> Vec<Value> {
        self.attachments
            .iter()
            .filter_map(|path| match std::fs::File::open(path) {
                Ok(_) => Some(json!(path.display().to_string())),
                Err(err) => {
                    warn!(path = %path.display(), %err, "failed to open attachment, skipping");
                    None
                }
            })
            .collect()
    }
}

impl RequestPayload for ComposeEmail {
    type Output = ();

    fn interface(&self) -> &'static str {
        "org.freedesktop.portal.Email"
    }

    fn method(&self) -> &'static str {
        "ComposeEmail"
    }

    fn to_options(&self) -> OptionsDict {
        let mut options = OptionsDict::new();
        if let Some(address) = &self.address {
            options.insert("address".to_string(), json!(address));
        }
        if let Some(subject) = &self.subject {
            options.insert("subject".to_string(), json!(subject));
        }
        if let Some(body) = &self.body {
            options.insert("body".to_string(), json!(body));
        }
        if !self.attachments.is_empty() {
            options.insert(
                "attachments".to_string(),
                Value::Array(self.readable_attachments()),
            );
        }
        options
    }

    fn decode(_results: ResultBundle) -> Result<(), PortalError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_include_only_set_fields() {
        let options = ComposeEmail::new()
            .address("peer@example.org")
            .subject("minutes")
            .to_options();
        assert_eq!(options["address"], json!("peer@example.org"));
        assert_eq!(options["subject"], json!("minutes"));
        assert!(!options.contains_key("body"));
        assert!(!options.contains_key("attachments"));
    }

    #[test]
    fn test_unreadable_attachment_is_skipped() {
        let options = ComposeEmail::new()
            .attach("/nonexistent/definitely-missing.txt")
            .to_options();
        // The key is present (attachments were requested) but the broken
        // item degraded out of the list.
        assert_eq!(options["attachments"], json!([]));
    }

    #[test]
    fn test_decode_ignores_bundle() {
        ComposeEmail::decode(ResultBundle::default()).unwrap();
    }
}
