// SPDX-License-Identifier: MPL-2.0
//! Category list component: search box, paginated rows and per-row actions.

pub mod view;

pub use view::ViewContext;

use crate::catalog::CategoryId;

/// List state owned by the app: the current search query and page.
#[derive(Debug, Clone)]
pub struct State {
    pub search: String,
    /// 1-based page selection; the paginator clamps stale values.
    pub page: usize,
}

impl Default for State {
    fn default() -> Self {
        Self {
            search: String::new(),
            page: 1,
        }
    }
}

/// Messages emitted by the list.
#[derive(Debug, Clone)]
pub enum Message {
    SearchChanged(String),
    GoToPage(usize),
    Edit(CategoryId),
    Delete(CategoryId),
    ToggleListed(CategoryId),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    EditRequested(CategoryId),
    DeleteRequested(CategoryId),
    ToggleRequested(CategoryId),
}

/// Processes a list message and returns the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::SearchChanged(query) => {
            state.search = query;
            // A new query invalidates the old page selection.
            state.page = 1;
            Event::None
        }
        Message::GoToPage(page) => {
            state.page = page;
            Event::None
        }
        Message::Edit(id) => Event::EditRequested(id),
        Message::Delete(id) => Event::DeleteRequested(id),
        Message::ToggleListed(id) => Event::ToggleRequested(id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn search_change_resets_to_first_page() {
        let mut state = State {
            search: String::new(),
            page: 3,
        };
        update(&mut state, Message::SearchChanged("dec".to_string()));
        assert_eq!(state.search, "dec");
        assert_eq!(state.page, 1);
    }

    #[test]
    fn go_to_page_updates_selection() {
        let mut state = State::default();
        update(&mut state, Message::GoToPage(2));
        assert_eq!(state.page, 2);
    }

    #[test]
    fn row_actions_emit_requests() {
        let mut catalog = Catalog::new();
        let id = catalog.add("Books", true).expect("add");
        let mut state = State::default();

        assert!(matches!(
            update(&mut state, Message::Edit(id)),
            Event::EditRequested(found) if found == id
        ));
        assert!(matches!(
            update(&mut state, Message::Delete(id)),
            Event::DeleteRequested(found) if found == id
        ));
        assert!(matches!(
            update(&mut state, Message::ToggleListed(id)),
            Event::ToggleRequested(found) if found == id
        ));
    }
}
