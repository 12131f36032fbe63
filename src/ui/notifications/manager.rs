// SPDX-License-Identifier: MPL-2.0
//! Toast queue.
//!
//! At most [`MAX_VISIBLE`] toasts are on screen; the rest wait in arrival
//! order and are promoted as visible ones expire or get dismissed.

use super::notification::{Notification, NotificationId};
use std::collections::VecDeque;
use std::time::Instant;

const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
    Tick,
}

#[derive(Debug, Default)]
pub struct Manager {
    /// Newest first.
    visible: VecDeque<Notification>,
    queue: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Drops any toast with the same key before pushing, so a periodic
    /// failure shows one toast instead of a growing stack.
    pub fn replace(&mut self, notification: Notification) {
        let key = notification.message_key().to_string();
        self.clear_matching(|n| n.message_key() == key);
        self.push(notification);
    }

    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Expires visible toasts as of `now`.
    pub fn tick_at(&mut self, now: Instant) {
        let expired: Vec<NotificationId> = self
            .visible
            .iter()
            .filter(|n| n.is_expired_at(now))
            .map(Notification::id)
            .collect();

        for id in expired {
            self.dismiss(id);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick => self.tick(),
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    /// Removes toasts whose key starts with `prefix`, e.g. stale catalog
    /// errors once a refresh succeeds.
    pub fn clear_prefixed(&mut self, prefix: &str) {
        self.clear_matching(|n| n.message_key().starts_with(prefix));
    }

    fn clear_matching(&mut self, matches: impl Fn(&Notification) -> bool) {
        let before = self.visible.len();
        self.visible.retain(|n| !matches(n));
        self.queue.retain(|n| !matches(n));
        if self.visible.len() < before {
            self.promote_from_queue();
        }
    }

    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            match self.queue.pop_front() {
                Some(notification) => self.visible.push_back(notification),
                None => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn overflow_is_queued_and_promoted() {
        let mut manager = Manager::new();
        let first = Notification::info("a");
        let first_id = first.id();
        manager.push(first);
        for key in ["b", "c", "d", "e"] {
            manager.push(Notification::info(key));
        }
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 2);

        assert!(manager.dismiss(first_id));
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 1);
        assert!(manager.visible().any(|n| n.message_key() == "d"));
    }

    #[test]
    fn dismiss_unknown_id_is_false() {
        let mut manager = Manager::new();
        let stray = Notification::info("x");
        assert!(!manager.dismiss(stray.id()));
    }

    #[test]
    fn tick_expires_old_toasts() {
        let mut manager = Manager::new();
        manager.push(Notification::success("saved"));
        manager.push(Notification::error("broken").auto_dismiss(Duration::from_secs(60)));

        manager.tick_at(Instant::now() + Duration::from_secs(10));
        assert_eq!(manager.visible_count(), 1);
        assert_eq!(manager.visible().next().map(Notification::message_key), Some("broken"));

        manager.tick_at(Instant::now() + Duration::from_secs(120));
        assert!(!manager.has_notifications());
    }

    #[test]
    fn replace_keeps_a_single_toast_per_key() {
        let mut manager = Manager::new();
        manager.replace(Notification::warning("notification-catalog-load-error"));
        manager.replace(Notification::warning("notification-catalog-load-error"));
        manager.push(Notification::info("other"));
        assert_eq!(manager.visible_count(), 2);
    }

    #[test]
    fn clear_prefixed_promotes_queued() {
        let mut manager = Manager::new();
        for _ in 0..3 {
            manager.push(Notification::warning("notification-catalog-load-error"));
        }
        manager.push(Notification::info("notification-state-write-error"));
        assert_eq!(manager.queued_count(), 1);

        manager.clear_prefixed("notification-catalog-");
        assert_eq!(manager.visible_count(), 1);
        assert_eq!(manager.queued_count(), 0);
    }

    #[test]
    fn dismiss_message_routes() {
        let mut manager = Manager::new();
        let n = Notification::info("x");
        let id = n.id();
        manager.push(n);
        manager.handle_message(&Message::Dismiss(id));
        assert!(!manager.has_notifications());
    }
}
