//! Notification port - abstraction over the user-facing toast surface.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// How prominently a notification should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Normal,
    Destructive,
}

/// Short-lived user-facing notification emitted by mutating operations.
///
/// The core only decides that a notification should fire and with what text
/// and severity; rendering belongs to the embedding surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    pub fn normal(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Normal,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Destructive,
        }
    }
}

/// Notifier trait - abstraction over notification delivery.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver a notification to the viewer.
    async fn notify(&self, notification: Notification) -> Result<(), NotifyError>;
}

/// Notifier errors.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("failed to deliver notification: {0}")]
    Delivery(String),
}

/// Deliver a notification, logging instead of failing the surrounding
/// operation when delivery breaks. Notifications are advisory; no state
/// transition depends on one landing.
pub async fn fire(notifier: &dyn Notifier, notification: Notification) {
    if let Err(err) = notifier.notify(notification).await {
        tracing::warn!(error = %err, "notification dropped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_serializes_lowercase() {
        let notification = Notification::destructive("Sharing failed", "Couldn't copy the link.");
        let json = serde_json::to_value(&notification).unwrap();
        assert_eq!(json["severity"], "destructive");
        assert_eq!(json["title"], "Sharing failed");
    }
}
