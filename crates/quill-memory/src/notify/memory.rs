//! In-memory notifier.
//!
//! Records every notification and fans it out over an in-process broadcast
//! channel. Works within a single process only.

use tokio::sync::{RwLock, broadcast};

use async_trait::async_trait;

use quill_core::ports::{Notification, Notifier, NotifyError};

/// In-memory notification sink.
pub struct InMemoryNotifier {
    log: RwLock<Vec<Notification>>,
    sender: broadcast::Sender<Notification>,
}

impl InMemoryNotifier {
    pub fn new(buffer_size: usize) -> Self {
        let (sender, _) = broadcast::channel(buffer_size);
        Self {
            log: RwLock::new(Vec::new()),
            sender,
        }
    }

    /// Subscribe to notifications as they fire.
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.sender.subscribe()
    }

    /// Everything delivered so far, oldest first.
    pub async fn delivered(&self) -> Vec<Notification> {
        self.log.read().await.clone()
    }

    /// The most recent notification, if any.
    pub async fn last(&self) -> Option<Notification> {
        self.log.read().await.last().cloned()
    }
}

impl Default for InMemoryNotifier {
    fn default() -> Self {
        Self::new(100)
    }
}

#[async_trait]
impl Notifier for InMemoryNotifier {
    async fn notify(&self, notification: Notification) -> Result<(), NotifyError> {
        tracing::debug!(title = %notification.title, "notification recorded");
        self.log.write().await.push(notification.clone());
        // Ignore send errors (no subscribers)
        let _ = self.sender.send(notification);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::ports::Severity;

    #[tokio::test]
    async fn test_notify_records_in_order() {
        let notifier = InMemoryNotifier::default();
        notifier
            .notify(Notification::normal("Liked!", "first"))
            .await
            .unwrap();
        notifier
            .notify(Notification::destructive("Sharing failed", "second"))
            .await
            .unwrap();

        let delivered = notifier.delivered().await;
        assert_eq!(delivered.len(), 2);
        assert_eq!(delivered[0].title, "Liked!");
        assert_eq!(delivered[1].severity, Severity::Destructive);
    }

    #[tokio::test]
    async fn test_subscribers_receive_notifications() {
        let notifier = InMemoryNotifier::default();
        let mut receiver = notifier.subscribe();

        notifier
            .notify(Notification::normal("Bookmarked!", "saved for later"))
            .await
            .unwrap();

        let received = receiver.recv().await.unwrap();
        assert_eq!(received.title, "Bookmarked!");
    }
}
