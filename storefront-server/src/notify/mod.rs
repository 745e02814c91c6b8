//! Notification service
//!
//! User-visible transient messages ("Order submitted", "Sync failed").
//! The [`Notifier`] is created at startup, carried in `ServerState`, and
//! shut down with the server.
//!
//! ```text
//! notify() ──▶ recent ring (polled by GET /api/notifications)
//!          └─▶ broadcast::Sender ──▶ log sink task
//!                                └─▶ other subscribers
//! ```

use std::collections::VecDeque;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::Serialize;
use tokio::sync::broadcast;
use tokio_util::sync::CancellationToken;

/// Broadcast channel capacity
const CHANNEL_CAPACITY: usize = 256;
/// Notifications kept for polling clients
const RECENT_CAPACITY: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Notifier {
    tx: broadcast::Sender<Notification>,
    recent: Arc<Mutex<VecDeque<Notification>>>,
    shutdown_token: CancellationToken,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            tx,
            recent: Arc::new(Mutex::new(VecDeque::with_capacity(RECENT_CAPACITY))),
            shutdown_token: CancellationToken::new(),
        }
    }

    /// Spawn the log sink; a no-op outside a tokio runtime
    pub fn start(&self) {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            tracing::debug!("No runtime, notification log sink not started");
            return;
        };
        let mut rx = self.tx.subscribe();
        let token = self.shutdown_token.clone();

        handle.spawn(async move {
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    received = rx.recv() => match received {
                        Ok(n) => match n.level {
                            NotificationLevel::Error => tracing::error!(text = %n.message, "Notification"),
                            NotificationLevel::Warning => tracing::warn!(text = %n.message, "Notification"),
                            _ => tracing::info!(text = %n.message, "Notification"),
                        },
                        Err(broadcast::error::RecvError::Lagged(skipped)) => {
                            tracing::warn!(skipped, "Notification sink lagged");
                        }
                        Err(broadcast::error::RecvError::Closed) => break,
                    },
                }
            }
            tracing::debug!("Notification sink stopped");
        });
    }

    pub fn notify(&self, level: NotificationLevel, message: impl Into<String>) {
        if self.is_shutdown() {
            return;
        }
        let notification = Notification {
            level,
            message: message.into(),
            at: Utc::now(),
        };
        {
            let mut recent = self.recent.lock();
            if recent.len() == RECENT_CAPACITY {
                recent.pop_front();
            }
            recent.push_back(notification.clone());
        }
        // No receivers is fine
        let _ = self.tx.send(notification);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.notify(NotificationLevel::Info, message);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(NotificationLevel::Success, message);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.notify(NotificationLevel::Warning, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(NotificationLevel::Error, message);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.tx.subscribe()
    }

    /// Most recent notifications, oldest first
    pub fn recent(&self) -> Vec<Notification> {
        self.recent.lock().iter().cloned().collect()
    }

    pub fn shutdown(&self) {
        tracing::info!("Shutting down notifier");
        self.shutdown_token.cancel();
    }

    pub fn is_shutdown(&self) -> bool {
        self.shutdown_token.is_cancelled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recent_ring_is_bounded() {
        let notifier = Notifier::new();
        for i in 0..(RECENT_CAPACITY + 5) {
            notifier.info(format!("n{i}"));
        }
        let recent = notifier.recent();
        assert_eq!(recent.len(), RECENT_CAPACITY);
        assert_eq!(recent[0].message, "n5");
    }

    #[tokio::test]
    async fn test_subscribers_receive_notifications() {
        let notifier = Notifier::new();
        notifier.start();
        let mut rx = notifier.subscribe();

        notifier.error("Sync failed");
        let received = rx.recv().await.unwrap();
        assert_eq!(received.level, NotificationLevel::Error);
        assert_eq!(received.message, "Sync failed");
    }

    #[tokio::test]
    async fn test_shutdown_silences_notifier() {
        let notifier = Notifier::new();
        notifier.start();
        notifier.shutdown();
        assert!(notifier.is_shutdown());

        notifier.success("ignored");
        assert!(notifier.recent().is_empty());
    }
}
