//! Clipboard-backed share target.
//!
//! There is no platform share sheet in-process, so `share` always reports
//! unavailable and callers degrade to the clipboard copy.

use tokio::sync::RwLock;

use async_trait::async_trait;

use quill_core::ports::{ShareError, ShareTarget};

/// In-memory clipboard standing in for the platform share surface.
#[derive(Default)]
pub struct InMemoryShareTarget {
    clipboard: RwLock<Option<String>>,
}

impl InMemoryShareTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently copied text, if any.
    pub async fn clipboard(&self) -> Option<String> {
        self.clipboard.read().await.clone()
    }
}

#[async_trait]
impl ShareTarget for InMemoryShareTarget {
    async fn share(&self, _title: &str, _url: &str) -> Result<(), ShareError> {
        Err(ShareError::Unavailable)
    }

    async fn copy(&self, text: &str) -> Result<(), ShareError> {
        tracing::debug!("text copied to clipboard");
        *self.clipboard.write().await = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_share_is_unavailable() {
        let target = InMemoryShareTarget::new();
        assert!(matches!(
            target.share("Title", "/post/1").await,
            Err(ShareError::Unavailable)
        ));
    }

    #[tokio::test]
    async fn test_copy_stores_text() {
        let target = InMemoryShareTarget::new();
        target.copy("/post/1").await.unwrap();
        assert_eq!(target.clipboard().await.as_deref(), Some("/post/1"));
    }
}
