// SPDX-License-Identifier: MPL-2.0
//! View rendering for the category list.

use super::{Message, State};
use crate::catalog::Page;
use crate::ui::design_tokens::{border, palette, spacing, typography};
use iced::widget::{button, container, rule, text, Column, Row};
use iced::{alignment, Element, Length, Theme};

/// Context required to render the list.
///
/// The page borrow is independent of the state borrow: the page is computed
/// per render, so everything derived from it is cloned into the widgets.
pub struct ViewContext<'a, 'p> {
    pub state: &'a State,
    pub page: &'p Page<'p>,
}

/// Renders the search box, the current page of categories and the
/// pagination controls.
pub fn view<'a>(ctx: ViewContext<'a, '_>) -> Element<'a, Message> {
    let search = iced::widget::text_input("Search categories", &ctx.state.search)
        .on_input(Message::SearchChanged)
        .padding(spacing::XS)
        .size(typography::BODY);

    let mut rows = Column::new().spacing(spacing::XS);
    if ctx.page.items.is_empty() {
        rows = rows.push(
            text(empty_label(&ctx.state.search))
                .size(typography::BODY)
                .color(palette::GRAY_400),
        );
    } else {
        for category in &ctx.page.items {
            let listed_label = if category.is_listed() {
                "Listed"
            } else {
                "Unlisted"
            };
            let listed_color = if category.is_listed() {
                palette::SUCCESS_500
            } else {
                palette::GRAY_400
            };
            let toggle_label = if category.is_listed() {
                "Unlist"
            } else {
                "List"
            };

            let row = Row::new()
                .spacing(spacing::SM)
                .align_y(alignment::Vertical::Center)
                .push(
                    Column::new()
                        .spacing(spacing::XXS)
                        .push(text(category.name().to_owned()).size(typography::BODY_LG))
                        .push(
                            text(category.created_at().format("%Y-%m-%d %H:%M").to_string())
                                .size(typography::CAPTION)
                                .color(palette::GRAY_400),
                        )
                        .width(Length::Fill),
                )
                .push(
                    text(listed_label)
                        .size(typography::BODY_SM)
                        .color(listed_color),
                )
                .push(action_button(toggle_label, Message::ToggleListed(category.id())))
                .push(action_button("Edit", Message::Edit(category.id())))
                .push(action_button("Delete", Message::Delete(category.id())));

            rows = rows.push(container(row).padding(spacing::XS).style(row_style));
        }
    }

    let pagination = pagination_controls(ctx.page);

    Column::new()
        .spacing(spacing::SM)
        .push(search)
        .push(rule::horizontal(border::WIDTH_SM))
        .push(rows)
        .push(pagination)
        .into()
}

fn empty_label(search: &str) -> String {
    if search.trim().is_empty() {
        "No categories yet.".to_owned()
    } else {
        format!("No categories match \"{}\".", search.trim())
    }
}

fn action_button(label: &str, message: Message) -> Element<'static, Message> {
    button(text(label.to_owned()).size(typography::BODY_SM))
        .on_press(message)
        .padding(spacing::XXS)
        .into()
}

fn pagination_controls(page: &Page<'_>) -> Element<'static, Message> {
    let summary = format!(
        "Page {} of {} ({} categories)",
        page.number, page.total_pages, page.total_count
    );

    let mut previous = button(text("Previous").size(typography::BODY_SM)).padding(spacing::XXS);
    if page.has_previous() {
        previous = previous.on_press(Message::GoToPage(page.number - 1));
    }

    let mut next = button(text("Next").size(typography::BODY_SM)).padding(spacing::XXS);
    if page.has_next() {
        next = next.on_press(Message::GoToPage(page.number + 1));
    }

    Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(previous)
        .push(next)
        .push(
            text(summary)
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        )
        .into()
}

/// Style function for a category row card.
fn row_style(theme: &Theme) -> container::Style {
    let weak = theme.extended_palette().background.weak;

    container::Style {
        background: Some(iced::Background::Color(weak.color)),
        border: iced::Border {
            radius: crate::ui::design_tokens::radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_label_mentions_the_query() {
        assert_eq!(empty_label(""), "No categories yet.");
        assert_eq!(empty_label(" toys "), "No categories match \"toys\".");
    }
}
