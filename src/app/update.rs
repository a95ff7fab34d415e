// SPDX-License-Identifier: MPL-2.0
//! Root update loop: routes component events into catalog mutations and
//! user-facing toasts.

use super::{App, Message};
use crate::ui::notifications::Notification;
use crate::ui::{category_form, category_table};
use iced::Task;

/// Applies a message to the application state.
pub(super) fn handle(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Form(message) => handle_form_message(app, message),
        Message::Table(message) => handle_table_message(app, message),
        Message::Notification(message) => {
            app.notifications.handle_message(&message);
            Task::none()
        }
        Message::Tick(now) => {
            app.now = now;
            app.notifications.tick(now);
            Task::none()
        }
    }
}

fn handle_form_message(app: &mut App, message: category_form::Message) -> Task<Message> {
    match category_form::update(&mut app.form, message) {
        category_form::Event::None => {}
        // A blocked submission shows its inline error; the catalog is not
        // touched and no toast fires.
        category_form::Event::Rejected => {}
        category_form::Event::Submitted {
            name,
            is_listed,
            editing,
        } => {
            let result = match editing {
                Some(id) => app.catalog.update(id, &name, is_listed).map(|()| {
                    "Category updated successfully"
                }),
                None => app
                    .catalog
                    .add(&name, is_listed)
                    .map(|_| "Category added successfully"),
            };

            match result {
                Ok(toast) => {
                    app.form.reset();
                    app.notifications.push(Notification::success(toast));
                }
                Err(rejection) => {
                    // The form keeps its value so the user can correct it.
                    app.notifications
                        .push(Notification::error(rejection.to_string()));
                }
            }
        }
    }
    Task::none()
}

fn handle_table_message(app: &mut App, message: category_table::Message) -> Task<Message> {
    match category_table::update(&mut app.table, message) {
        category_table::Event::None => {}
        category_table::Event::EditRequested(id) => {
            if let Some(category) = app.catalog.get(id) {
                let (name, is_listed) = (category.name().to_owned(), category.is_listed());
                app.form.begin_edit(id, &name, is_listed);
            }
        }
        category_table::Event::DeleteRequested(id) => match app.catalog.soft_delete(id) {
            Ok(()) => {
                // Deleting the category being edited abandons the edit.
                if app.form.editing() == Some(id) {
                    app.form.reset();
                }
                app.notifications
                    .push(Notification::success("Category deleted successfully"));
            }
            Err(rejection) => {
                app.notifications
                    .push(Notification::error(rejection.to_string()));
            }
        },
        category_table::Event::ToggleRequested(id) => match app.catalog.toggle_listed(id) {
            Ok(true) => {
                app.notifications
                    .push(Notification::success("Category listed successfully"));
            }
            Ok(false) => {
                app.notifications
                    .push(Notification::success("Category unlisted successfully"));
            }
            Err(rejection) => {
                app.notifications
                    .push(Notification::error(rejection.to_string()));
            }
        },
    }
    Task::none()
}
