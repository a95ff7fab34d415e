// SPDX-License-Identifier: MPL-2.0
//! Top-level message and launch flags for the application.

use crate::ui::theming::ThemeMode;
use crate::ui::{category_form, category_table, notifications};
use std::time::Instant;

/// Launch options passed from `main.rs`.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Theme override from the command line; falls back to the configured
    /// theme when absent.
    pub theme: Option<ThemeMode>,
}

/// Root message type dispatched through `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Entry form messages.
    Form(category_form::Message),
    /// Category list messages.
    Table(category_table::Message),
    /// Toast notification messages.
    Notification(notifications::ManagerMessage),
    /// Periodic tick driving notification expiry.
    Tick(Instant),
}
