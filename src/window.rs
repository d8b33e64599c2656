//! Parent window export.
//!
//! Exporting a window handle is toolkit territory; the crate only consumes
//! the result through [`ParentWindow`]. An implementation wraps whatever the
//! windowing system needs (a foreign surface on Wayland, an XID on X11) and
//! yields a string handle token the portal can use to parent its dialog.

use async_trait::async_trait;

/// An exported window handle. The empty handle means "no usable parent";
/// the portal then positions its dialog on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowHandle(String);

impl WindowHandle {
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    /// The handle used when no parent context exists.
    pub fn none() -> Self {
        Self(String::new())
    }

    pub fn is_none(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parent window context owned by a request for its whole lifetime.
#[async_trait]
pub trait ParentWindow: Send + Sync {
    /// Resolve the exported handle. Resolves exactly once per request, and
    /// must yield [`WindowHandle::none`] on failure rather than erroring the
    /// request.
    async fn export(&self) -> WindowHandle;

    /// Release whatever the export acquired. Idempotent; called during
    /// request teardown whether or not `export` ever ran.
    fn unexport(&self);
}
