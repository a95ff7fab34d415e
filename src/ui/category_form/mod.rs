// SPDX-License-Identifier: MPL-2.0
//! Category entry form component.
//!
//! Renders the name input with its inline error and gates submission on the
//! naming rules in [`state`]. The same component serves both adding a new
//! category and editing an existing one.

pub mod state;
pub mod view;

pub use state::{validate_name, State, CHARSET_MESSAGE, REQUIRED_MESSAGE};

use crate::catalog::CategoryId;

/// Configuration binding the form to a concrete field.
///
/// The label, placeholder and validation rule are supplied by the host
/// rather than baked into the component, so the form is reusable across
/// fields.
#[derive(Debug, Clone)]
pub struct FieldBinding {
    pub label: &'static str,
    pub placeholder: &'static str,
    pub validate: fn(&str) -> Option<String>,
}

impl Default for FieldBinding {
    fn default() -> Self {
        Self {
            label: "Category name",
            placeholder: "e.g. Electronics",
            validate: state::validate_name,
        }
    }
}

/// Messages emitted by the form.
#[derive(Debug, Clone)]
pub enum Message {
    /// The name input changed.
    NameChanged(String),
    /// The listed checkbox was toggled.
    ListedToggled(bool),
    /// The form was submitted (button press or Enter in the input).
    Submit,
    /// Editing was cancelled.
    CancelEdit,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    /// No action needed.
    None,
    /// Validation passed; the host should apply the submission.
    Submitted {
        name: String,
        is_listed: bool,
        editing: Option<CategoryId>,
    },
    /// Validation failed; the submission was blocked and the inline error
    /// is showing.
    Rejected,
}

/// Processes a form message and returns the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::NameChanged(value) => {
            state.input_changed(value);
            Event::None
        }
        Message::ListedToggled(is_listed) => {
            state.set_listed(is_listed);
            Event::None
        }
        Message::Submit => match state.submit() {
            Some(name) => Event::Submitted {
                name,
                is_listed: state.is_listed(),
                editing: state.editing(),
            },
            None => Event::Rejected,
        },
        Message::CancelEdit => {
            state.reset();
            Event::None
        }
    }
}
