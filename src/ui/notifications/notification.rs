// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// How long a toast stays fully visible before it starts fading.
pub const DISPLAY_DURATION: Duration = Duration::from_millis(3000);

/// Length of the fade-out that precedes removal.
pub const FADE_DURATION: Duration = Duration::from_millis(500);

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity category selecting the toast's visual style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Success,
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Returns the accent color for this severity.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// The category name callers use to request this style.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    /// Parses a severity category name, case-insensitively.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "success" => Some(Severity::Success),
            "info" => Some(Severity::Info),
            "warning" => Some(Severity::Warning),
            "error" => Some(Severity::Error),
            _ => None,
        }
    }
}

/// A notification to be displayed to the user.
///
/// The message is rendered as plain text; callers cannot inject markup.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message: String,
    created_at: Instant,
}

impl Notification {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message: message.into(),
            created_at: Instant::now(),
        }
    }

    /// Creates a notification from a severity category name, for callers
    /// that carry the category as a string. Unknown categories fall back to
    /// [`Severity::Info`].
    pub fn with_category(message: impl Into<String>, category: &str) -> Self {
        let severity = Severity::from_name(category).unwrap_or(Severity::Info);
        Self::new(severity, message)
    }

    /// Creates a success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    /// Creates an info notification.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    /// Creates a warning notification.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Creates an error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Age of this notification at `now`. Zero if `now` predates creation
    /// (a render can race the first tick).
    #[must_use]
    pub fn age_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    /// Whether the toast is in its fade-out window at `now`.
    #[must_use]
    pub fn is_fading_at(&self, now: Instant) -> bool {
        let age = self.age_at(now);
        age >= DISPLAY_DURATION && age < DISPLAY_DURATION + FADE_DURATION
    }

    /// Whether the toast has finished its fade and should be removed.
    #[must_use]
    pub fn is_expired_at(&self, now: Instant) -> bool {
        self.age_at(now) >= DISPLAY_DURATION + FADE_DURATION
    }

    /// Opacity at `now`: fully opaque while displayed, then a linear ramp
    /// from 1.0 to 0.0 across the fade window.
    #[must_use]
    pub fn opacity_at(&self, now: Instant) -> f32 {
        let age = self.age_at(now);
        if age < DISPLAY_DURATION {
            return 1.0;
        }
        if age >= DISPLAY_DURATION + FADE_DURATION {
            return 0.0;
        }
        let faded = (age - DISPLAY_DURATION).as_secs_f32() / FADE_DURATION.as_secs_f32();
        1.0 - faded
    }
}
