//! Structured dictionaries exchanged with the portal.
//!
//! Outgoing options and incoming result bundles are open string-keyed maps.
//! The request controller never inspects feature-specific keys; it only
//! merges the `handle_token` entry into the outgoing options. Decoding a
//! result bundle into typed fields is the feature payload's job.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::PortalError;

/// Options dictionary merged into an outgoing portal method call.
pub type OptionsDict = BTreeMap<String, Value>;

/// Result bundle carried by a response notification.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultBundle(BTreeMap<String, Value>);

impl ResultBundle {
    pub fn new(fields: BTreeMap<String, Value>) -> Self {
        Self(fields)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn lookup_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn lookup_u32(&self, key: &str) -> Option<u32> {
        self.0
            .get(key)
            .and_then(Value::as_u64)
            .and_then(|v| u32::try_from(v).ok())
    }

    pub fn lookup_str_array(&self, key: &str) -> Option<Vec<String>> {
        let items = self.0.get(key)?.as_array()?;
        items
            .iter()
            .map(|v| v.as_str().map(str::to_string))
            .collect()
    }

    /// Look up a field the feature cannot do without.
    pub fn require_str(&self, key: &'static str) -> Result<String, PortalError> {
        self.lookup_str(key)
            .map(str::to_string)
            .ok_or(PortalError::MalformedResponse(key))
    }

    pub fn require_u32(&self, key: &'static str) -> Result<u32, PortalError> {
        self.lookup_u32(key).ok_or(PortalError::MalformedResponse(key))
    }

    pub fn require_str_array(&self, key: &'static str) -> Result<Vec<String>, PortalError> {
        self.lookup_str_array(key)
            .ok_or(PortalError::MalformedResponse(key))
    }
}

impl FromIterator<(String, Value)> for ResultBundle {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
