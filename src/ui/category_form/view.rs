// SPDX-License-Identifier: MPL-2.0
//! View rendering for the category entry form.

use super::{Message, State};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use iced::widget::{button, checkbox, text, text_input, Column, Row};
use iced::{Element, Length};

/// Renders the entry form: label, name input, inline error, listed checkbox
/// and the submit/cancel actions.
pub fn view(state: &State) -> Element<'_, Message> {
    let binding = state.binding();

    let mut col = Column::new().spacing(spacing::XS);

    col = col.push(text(format!("{}:", binding.label)).size(typography::BODY_SM));

    let input = text_input(binding.placeholder, state.name())
        .on_input(Message::NameChanged)
        .on_submit(Message::Submit)
        .padding(spacing::XS)
        .size(typography::BODY);
    col = col.push(input);

    // Inline error, shown only while the last validation attempt failed.
    if let Some(err) = state.error() {
        col = col.push(
            text(err.to_owned())
                .size(typography::CAPTION)
                .color(palette::ERROR_500),
        );
    }

    col = col.push(
        checkbox(state.is_listed())
            .label("Listed on the storefront")
            .on_toggle(Message::ListedToggled)
            .size(typography::BODY)
            .spacing(spacing::XS),
    );

    let submit_label = if state.editing().is_some() {
        "Save changes"
    } else {
        "Add category"
    };
    let mut actions = Row::new().spacing(spacing::XS).push(
        button(text(submit_label).size(typography::BODY))
            .on_press(Message::Submit)
            .padding(spacing::XS),
    );
    if state.editing().is_some() {
        actions = actions.push(
            button(text("Cancel").size(typography::BODY))
                .on_press(Message::CancelEdit)
                .padding(spacing::XS),
        );
    }
    col = col.push(actions);

    col.width(Length::Fixed(sizing::FORM_WIDTH)).into()
}
