// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Toasts appear in the top-right corner, stay fully visible for
//! [`notification::DISPLAY_DURATION`], fade out over
//! [`notification::FADE_DURATION`] and are then removed. Every toast runs an
//! independent timer; concurrent toasts simply stack, without deduplication
//! or queueing.
//!
//! Time flows in through the tick messages produced by the app's timer
//! subscription, so the whole lifecycle is deterministic under test.

pub mod manager;
pub mod notification;
pub mod toast;

pub use manager::{Manager, Message as ManagerMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
