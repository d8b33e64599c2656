//! Screenshot and color picking.
//!
//! The underlying portal is `org.freedesktop.portal.Screenshot`.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::PortalError;
use crate::options::{OptionsDict, ResultBundle};
use crate::request::RequestPayload;

const INTERFACE: &str = "org.freedesktop.portal.Screenshot";

/// Take a screenshot. Resolves to a URI pointing at the image file.
#[derive(Debug, Clone, Default)]
pub struct Screenshot {
    /// Present the dialog modally
    pub modal: bool,
    /// Offer interactive options before shooting
    pub interactive: bool,
}

impl RequestPayload for Screenshot {
    type Output = String;

    fn interface(&self) -> &'static str {
        INTERFACE
    }

    fn method(&self) -> &'static str {
        "Screenshot"
    }

    fn to_options(&self) -> OptionsDict {
        let mut options = OptionsDict::new();
        options.insert("modal".to_string(), json!(self.modal));
        options.insert("interactive".to_string(), json!(self.interactive));
        options
    }

    fn decode(results: ResultBundle) -> Result<String, PortalError> {
        results.require_str("uri")
    }
}

/// An RGB color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Color {
    fn from_value(value: &Value) -> Option<Self> {
        let parts = value.as_array()?;
        if parts.len() != 3 {
            return None;
        }
        Some(Color {
            red: parts[0].as_f64()?,
            green: parts[1].as_f64()?,
            blue: parts[2].as_f64()?,
        })
    }
}

/// Let the user pick a color from the screen.
#[derive(Debug, Clone, Copy, Default)]
pub struct PickColor;

impl RequestPayload for PickColor {
    type Output = Color;

    fn interface(&self) -> &'static str {
        INTERFACE
    }

    fn method(&self) -> &'static str {
        "PickColor"
    }

    fn to_options(&self) -> OptionsDict {
        OptionsDict::new()
    }

    fn decode(results: ResultBundle) -> Result<Color, PortalError> {
        results
            .get("color")
            .and_then(Color::from_value)
            .ok_or(PortalError::MalformedResponse("color"))
    }
}
