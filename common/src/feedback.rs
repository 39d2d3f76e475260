//! User-facing feedback: the shared loading indicator and the transient
//! notification stack.

use std::time::Duration;

/// One spinner shared by every fetch.
///
/// Each request acquires it when it starts and releases it when it settles.
/// It is deliberately not a busy count: when requests overlap, the first one
/// to settle hides the spinner while the others are still in flight.
#[derive(Debug, Default)]
pub struct LoadingIndicator {
    visible: bool,
}

impl LoadingIndicator {
    pub fn acquire(&mut self) {
        self.visible = true;
    }

    pub fn release(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
}

/// Error notifications, newest first.
///
/// Messages are not deduplicated. Each one stays until it is dismissed,
/// either by the user or by its own expiry timer armed for [`Notifications::ttl`].
#[derive(Debug)]
pub struct Notifications {
    ttl: Duration,
    issued: u64,
    items: Vec<Notification>,
}

impl Notifications {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            issued: 0,
            items: Vec::new(),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn push(&mut self, message: impl Into<String>) -> NotificationId {
        self.issued += 1;
        let id = NotificationId(self.issued);
        self.items.insert(
            0,
            Notification {
                id,
                message: message.into(),
            },
        );
        id
    }

    /// Removes one notification (user dismissal or its timer firing).
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }
}
