//! Transient notifications and cardinality badges
//!
//! Models the website's toast/badge rendering without a DOM: notices
//! stack additively and expire after a fixed delay, badges are a pure
//! function of the shortlist cardinality.

use std::time::{Duration, Instant};

use uuid::Uuid;

/// Notices auto-dismiss after this long.
pub const DISMISS_AFTER: Duration = Duration::from_millis(3000);

/// Visual level of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Warning,
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Level::Success => write!(f, "success"),
            Level::Warning => write!(f, "warning"),
        }
    }
}

/// One transient notice.
#[derive(Debug, Clone)]
pub struct Notice {
    pub id: Uuid,
    pub message: String,
    pub level: Level,
    posted_at: Instant,
}

impl Notice {
    /// Whether the auto-dismiss delay has elapsed.
    pub fn expired(&self, ttl: Duration) -> bool {
        self.posted_at.elapsed() >= ttl
    }
}

/// Fixed-position stack of transient notices.
///
/// Every `show` appends an independent notice; there is no dedup and no
/// queueing. The dismiss timer is unconditional: once posted, a notice
/// expires `ttl` later regardless of what else happens.
pub struct NotificationCenter {
    notices: Vec<Notice>,
    ttl: Duration,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::with_ttl(DISMISS_AFTER)
    }

    /// Custom dismiss delay, mainly for tests.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            notices: Vec::new(),
            ttl,
        }
    }

    /// Post a notice. Returns its id so a renderer can dismiss it early.
    pub fn show(&mut self, message: impl Into<String>, level: Level) -> Uuid {
        let notice = Notice {
            id: Uuid::new_v4(),
            message: message.into(),
            level,
            posted_at: Instant::now(),
        };
        let id = notice.id;
        self.notices.push(notice);
        id
    }

    /// Notices still inside their dismiss window, oldest first.
    pub fn active(&self) -> Vec<&Notice> {
        self.notices.iter().filter(|n| !n.expired(self.ttl)).collect()
    }

    /// Drop expired notices. `active` already filters them; this just
    /// releases the memory.
    pub fn sweep(&mut self) {
        let ttl = self.ttl;
        self.notices.retain(|n| !n.expired(ttl));
    }

    pub fn dismiss(&mut self, id: Uuid) {
        self.notices.retain(|n| n.id != id);
    }
}

/// Cardinality badge: visible with the count as text iff the count is
/// positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    count: usize,
}

impl Badge {
    pub fn render(count: usize) -> Self {
        Self { count }
    }

    pub fn visible(&self) -> bool {
        self.count > 0
    }

    /// Badge text, or `None` when the badge is hidden.
    pub fn text(&self) -> Option<String> {
        self.visible().then(|| self.count.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_visibility_tracks_count() {
        assert!(!Badge::render(0).visible());
        assert_eq!(Badge::render(0).text(), None);
        assert!(Badge::render(1).visible());
        assert_eq!(Badge::render(2).text(), Some("2".to_string()));
    }

    #[test]
    fn notices_stack_additively() {
        let mut center = NotificationCenter::new();
        center.show("Property added to favorites", Level::Success);
        center.show("Property added to favorites", Level::Success);
        assert_eq!(center.active().len(), 2);
    }

    #[test]
    fn notices_expire_after_ttl() {
        let mut center = NotificationCenter::with_ttl(Duration::ZERO);
        center.show("gone immediately", Level::Warning);
        assert!(center.active().is_empty());
        center.sweep();
    }

    #[test]
    fn dismiss_removes_one_notice() {
        let mut center = NotificationCenter::new();
        let first = center.show("first", Level::Success);
        center.show("second", Level::Warning);
        center.dismiss(first);
        let active = center.active();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].message, "second");
    }
}
