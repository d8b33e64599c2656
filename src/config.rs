//! Portal addressing configuration.
//!
//! Defaults match the freedesktop portal service. A transport implementation
//! reads these to address calls; the request controller only uses the
//! request path prefix.

use serde::{Deserialize, Serialize};

/// Well-known bus name of the portal service.
pub const PORTAL_BUS_NAME: &str = "org.freedesktop.portal.Desktop";
/// Object path the portal service exposes its interfaces on.
pub const PORTAL_OBJECT_PATH: &str = "/org/freedesktop/portal/desktop";
/// Prefix under which per-request objects are created.
pub const REQUEST_PATH_PREFIX: &str = "/org/freedesktop/portal/desktop/request/";
/// Interface carrying the `Response` signal and the `Close` method.
pub const REQUEST_INTERFACE: &str = "org.freedesktop.portal.Request";

/// Portal addressing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalConfig {
    /// Bus name of the portal service
    #[serde(default = "default_bus_name")]
    pub bus_name: String,

    /// Object path portal methods are invoked on
    #[serde(default = "default_object_path")]
    pub object_path: String,

    /// Prefix request paths are derived under
    #[serde(default = "default_request_path_prefix")]
    pub request_path_prefix: String,

    /// Interface of the per-request object
    #[serde(default = "default_request_interface")]
    pub request_interface: String,
}

fn default_bus_name() -> String {
    PORTAL_BUS_NAME.to_string()
}

fn default_object_path() -> String {
    PORTAL_OBJECT_PATH.to_string()
}

fn default_request_path_prefix() -> String {
    REQUEST_PATH_PREFIX.to_string()
}

fn default_request_interface() -> String {
    REQUEST_INTERFACE.to_string()
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            bus_name: default_bus_name(),
            object_path: default_object_path(),
            request_path_prefix: default_request_path_prefix(),
            request_interface: default_request_interface(),
        }
    }
}
