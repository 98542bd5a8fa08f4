use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use crate::models::{Notification, NotificationKind};

/// Default auto-dismiss delay
pub const DEFAULT_TTL: Duration = Duration::from_secs(3);

/// One-at-a-time user notification with timed auto-dismiss.
///
/// A new notification replaces the current one. Each notification schedules
/// its own clear, which only applies while that notification is still
/// current, so the visible message always disappears one full delay after the
/// most recent `notify` call.
#[derive(Clone)]
pub struct Notifier {
    tx: Arc<watch::Sender<Option<Notification>>>,
    next_id: Arc<AtomicU64>,
    ttl: Duration,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl Notifier {
    pub fn new(ttl: Duration) -> Self {
        let (tx, _rx) = watch::channel(None);
        Self {
            tx: Arc::new(tx),
            next_id: Arc::new(AtomicU64::new(1)),
            ttl,
        }
    }

    /// Shows `message`, replacing whatever is displayed. Must be called
    /// from within a tokio runtime.
    pub fn notify(&self, message: impl Into<String>, kind: NotificationKind) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let notification = Notification {
            id,
            message: message.into(),
            kind,
        };

        match kind {
            NotificationKind::Success => tracing::info!(message = %notification.message, "Notification"),
            NotificationKind::Error => tracing::warn!(message = %notification.message, "Notification"),
        }

        self.tx.send_replace(Some(notification));

        let tx = self.tx.clone();
        let deadline = tokio::time::Instant::now() + self.ttl;
        tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            tx.send_if_modified(|current| match current {
                Some(n) if n.id == id => {
                    *current = None;
                    true
                }
                _ => false,
            });
        });

        id
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.notify(message, NotificationKind::Success)
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.notify(message, NotificationKind::Error)
    }

    /// The notification currently displayed, if any
    pub fn current(&self) -> Option<Notification> {
        self.tx.borrow().clone()
    }

    /// Receiver that observes every change, including clears
    pub fn subscribe(&self) -> watch::Receiver<Option<Notification>> {
        self.tx.subscribe()
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}
