// SPDX-License-Identifier: MPL-2.0
//! `category_lens` is a small category-management desktop app built with the
//! Iced GUI framework.
//!
//! It provides an in-memory category catalog with a validated entry form,
//! search and pagination, and transient toast notifications for user feedback.

pub mod app;
pub mod catalog;
pub mod error;
pub mod ui;
