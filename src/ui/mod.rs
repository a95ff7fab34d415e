// SPDX-License-Identifier: MPL-2.0
//! UI components and styling.

pub mod category_form;
pub mod category_table;
pub mod design_tokens;
pub mod notifications;
pub mod theming;
