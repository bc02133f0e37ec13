//! User-facing notifications (toasts)

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Maximum number of toasts kept around
const MAX_NOTIFICATIONS: usize = 16;

/// A short message about something that happened
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Receives notifications. Purely observational.
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

#[derive(Debug, Clone)]
struct Toast {
    notification: Notification,
    shown_at: Instant,
}

/// Keeps recent notifications for the status bar and logs them
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    toasts: VecDeque<Toast>,
    lifetime: Duration,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(Duration::from_secs(3))
    }
}

impl NotificationCenter {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            toasts: VecDeque::new(),
            lifetime,
        }
    }

    /// Most recent notification that has not expired yet
    pub fn current(&self) -> Option<&Notification> {
        self.current_at(Instant::now())
    }

    fn current_at(&self, now: Instant) -> Option<&Notification> {
        self.toasts
            .back()
            .filter(|toast| now.saturating_duration_since(toast.shown_at) < self.lifetime)
            .map(|toast| &toast.notification)
    }

    /// All retained notifications, oldest first
    #[allow(dead_code)]
    pub fn history(&self) -> impl Iterator<Item = &Notification> {
        self.toasts.iter().map(|toast| &toast.notification)
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl Notifier for NotificationCenter {
    fn notify(&mut self, notification: Notification) {
        tracing::info!("{}: {}", notification.title, notification.description);
        if self.toasts.len() == MAX_NOTIFICATIONS {
            self.toasts.pop_front();
        }
        self.toasts.push_back(Toast {
            notification,
            shown_at: Instant::now(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_notification_is_current() {
        let mut center = NotificationCenter::default();
        center.notify(Notification::new("First", "one"));
        center.notify(Notification::new("Second", "two"));
        assert_eq!(center.current().map(|n| n.title.as_str()), Some("Second"));
        assert_eq!(center.len(), 2);
    }

    #[test]
    fn test_notifications_expire() {
        let mut center = NotificationCenter::new(Duration::from_millis(100));
        center.notify(Notification::new("Saved", ""));
        let later = Instant::now() + Duration::from_secs(1);
        assert!(center.current_at(later).is_none());
        assert_eq!(center.len(), 1);
    }

    #[test]
    fn test_history_is_capped() {
        let mut center = NotificationCenter::default();
        for i in 0..(MAX_NOTIFICATIONS + 4) {
            center.notify(Notification::new(format!("n{}", i), ""));
        }
        assert_eq!(center.len(), MAX_NOTIFICATIONS);
        assert_eq!(center.history().next().map(|n| n.title.as_str()), Some("n4"));
    }
}
