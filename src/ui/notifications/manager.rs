// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns the active toasts and drops the ones whose fade has
//! finished. There is no visible-count cap and no queue: every pushed toast
//! is displayed immediately and runs its own timer.

use super::notification::{Notification, NotificationId};
use std::collections::VecDeque;
use std::time::Instant;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Periodic tick carrying the current instant, used to expire toasts.
    Tick(Instant),
}

/// Holds the currently displayed notifications, newest first.
#[derive(Debug, Default)]
pub struct Manager {
    active: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Displays a new notification. Concurrent toasts stack independently.
    pub fn push(&mut self, notification: Notification) {
        self.active.push_front(notification);
    }

    /// Dismisses a notification by its ID before its timer runs out.
    ///
    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.active.iter().position(|n| n.id() == id) {
            self.active.remove(pos);
            return true;
        }
        false
    }

    /// Drops every notification whose display and fade windows have elapsed
    /// at `now`.
    pub fn tick(&mut self, now: Instant) {
        self.active.retain(|n| !n.is_expired_at(now));
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick(now) => {
                self.tick(*now);
            }
        }
    }

    /// Returns the displayed notifications, newest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.active.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.active.len()
    }

    /// Whether any toast is on screen (drives the tick subscription).
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.active.is_empty()
    }

    /// Removes all notifications.
    pub fn clear(&mut self) {
        self.active.clear();
    }
}
