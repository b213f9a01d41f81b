//! Share port - platform share surface with clipboard fallback.

use async_trait::async_trait;

/// Share trait - abstraction over the platform share sheet and clipboard.
#[async_trait]
pub trait ShareTarget: Send + Sync {
    /// Offer a link through the platform share surface.
    async fn share(&self, title: &str, url: &str) -> Result<(), ShareError>;

    /// Copy text to the clipboard.
    async fn copy(&self, text: &str) -> Result<(), ShareError>;
}

/// Share errors.
#[derive(Debug, thiserror::Error)]
pub enum ShareError {
    /// No platform share surface exists in this environment.
    #[error("native sharing is unavailable")]
    Unavailable,

    #[error("clipboard access failed: {0}")]
    Clipboard(String),
}
