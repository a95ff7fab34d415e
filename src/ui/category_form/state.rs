// SPDX-License-Identifier: MPL-2.0
//! State management and validation rules for the category entry form.

use super::FieldBinding;
use crate::catalog::CategoryId;

/// Error text for an empty name.
pub const REQUIRED_MESSAGE: &str = "Category name is required";

/// Error text for a name with characters outside letters and whitespace.
pub const CHARSET_MESSAGE: &str = "Category name can only contain letters and spaces";

/// Validates a category name against the naming rules.
///
/// The value is trimmed first. Rule order matters: the required check runs
/// before the character-set check, so an empty value never reports a
/// character-set error.
#[must_use]
pub fn validate_name(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(REQUIRED_MESSAGE.to_string());
    }
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
    {
        return Some(CHARSET_MESSAGE.to_string());
    }
    None
}

/// State for the category entry form.
#[derive(Debug, Clone)]
pub struct State {
    binding: FieldBinding,
    name: String,
    is_listed: bool,
    error: Option<String>,
    /// When set, submission edits this category instead of adding a new one.
    editing: Option<CategoryId>,
}

impl Default for State {
    fn default() -> Self {
        Self::new(FieldBinding::default())
    }
}

impl State {
    /// Creates an empty form bound to the given field configuration.
    #[must_use]
    pub fn new(binding: FieldBinding) -> Self {
        Self {
            binding,
            name: String::new(),
            is_listed: true,
            error: None,
            editing: None,
        }
    }

    #[must_use]
    pub fn binding(&self) -> &FieldBinding {
        &self.binding
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn is_listed(&self) -> bool {
        self.is_listed
    }

    /// The inline error, if one is currently shown.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn editing(&self) -> Option<CategoryId> {
        self.editing
    }

    /// Applies an input change.
    ///
    /// Any non-empty value hides the error immediately, without re-running
    /// the character-set rule. A value that is non-empty but still invalid
    /// keeps its error hidden until the next submit attempt.
    pub fn input_changed(&mut self, value: String) {
        self.name = value;
        if !self.name.trim().is_empty() {
            self.error = None;
        }
    }

    pub fn set_listed(&mut self, is_listed: bool) {
        self.is_listed = is_listed;
    }

    /// Loads an existing category into the form for editing.
    pub fn begin_edit(&mut self, id: CategoryId, name: &str, is_listed: bool) {
        self.editing = Some(id);
        self.name = name.to_owned();
        self.is_listed = is_listed;
        self.error = None;
    }

    /// Clears the form back to its add-new state.
    pub fn reset(&mut self) {
        self.name.clear();
        self.is_listed = true;
        self.error = None;
        self.editing = None;
    }

    /// Validates the current value for submission.
    ///
    /// On failure the inline error is set and `None` is returned, blocking
    /// the submission. On success the trimmed name is returned and the error
    /// state is left untouched.
    pub fn submit(&mut self) -> Option<String> {
        match (self.binding.validate)(&self.name) {
            Some(message) => {
                self.error = Some(message);
                None
            }
            None => Some(self.name.trim().to_owned()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_and_spaces_are_valid() {
        assert_eq!(validate_name("Books"), None);
        assert_eq!(validate_name("Home Decor"), None);
        assert_eq!(validate_name("  Garden Tools  "), None);
    }

    #[test]
    fn empty_value_is_required() {
        assert_eq!(validate_name(""), Some(REQUIRED_MESSAGE.to_string()));
        // Whitespace-only trims to empty and must hit the required rule,
        // not the character-set rule.
        assert_eq!(validate_name("   "), Some(REQUIRED_MESSAGE.to_string()));
    }

    #[test]
    fn digits_punctuation_and_symbols_are_rejected() {
        for value in ["Books2", "Home-Decor", "Toys!", "50% off", "a_b"] {
            assert_eq!(
                validate_name(value),
                Some(CHARSET_MESSAGE.to_string()),
                "expected rejection for {value:?}"
            );
        }
    }

    #[test]
    fn non_ascii_letters_are_rejected() {
        // Only the Latin a-z range counts as a letter here.
        assert_eq!(validate_name("Café"), Some(CHARSET_MESSAGE.to_string()));
    }

    #[test]
    fn submit_with_valid_name_returns_trimmed_value() {
        let mut form = State::default();
        form.input_changed("  Books  ".to_string());
        assert_eq!(form.submit(), Some("Books".to_string()));
        assert!(form.error().is_none());
    }

    #[test]
    fn submit_with_empty_name_sets_required_error() {
        let mut form = State::default();
        assert_eq!(form.submit(), None);
        assert_eq!(form.error(), Some(REQUIRED_MESSAGE));
    }

    #[test]
    fn submit_with_invalid_charset_sets_charset_error() {
        let mut form = State::default();
        form.input_changed("Books2".to_string());
        assert_eq!(form.submit(), None);
        assert_eq!(form.error(), Some(CHARSET_MESSAGE));
    }

    #[test]
    fn typing_nonempty_value_clears_error_without_revalidating() {
        let mut form = State::default();
        form.input_changed("Books2".to_string());
        form.submit();
        assert!(form.error().is_some());

        // Still invalid under the character-set rule, but the error is
        // cleared anyway; it comes back on the next submit attempt.
        form.input_changed("Books23".to_string());
        assert!(form.error().is_none());
    }

    #[test]
    fn typing_whitespace_only_keeps_error_visible() {
        let mut form = State::default();
        form.submit();
        assert_eq!(form.error(), Some(REQUIRED_MESSAGE));

        form.input_changed("   ".to_string());
        assert_eq!(form.error(), Some(REQUIRED_MESSAGE));
    }

    #[test]
    fn begin_edit_fills_fields_and_reset_clears_them() {
        let mut form = State::default();
        let mut catalog = crate::catalog::Catalog::new();
        let id = catalog.add("Books", false).expect("add");

        form.begin_edit(id, "Books", false);
        assert_eq!(form.editing(), Some(id));
        assert_eq!(form.name(), "Books");
        assert!(!form.is_listed());

        form.reset();
        assert_eq!(form.editing(), None);
        assert_eq!(form.name(), "");
        assert!(form.is_listed());
    }
}
