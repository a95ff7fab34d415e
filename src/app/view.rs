// SPDX-License-Identifier: MPL-2.0
//! Root view: the category screen with the toast overlay stacked on top.

use super::{App, Message};
use crate::catalog;
use crate::ui::category_form;
use crate::ui::category_table::{self, ViewContext};
use crate::ui::design_tokens::{border, spacing, typography};
use crate::ui::notifications::Toast;
use iced::widget::{container, rule, scrollable, text, Column, Stack};
use iced::{Element, Length};

pub(super) fn view(app: &App) -> Element<'_, Message> {
    // The page is computed per render from the live catalog, so stale page
    // numbers and deleted rows resolve themselves.
    let results = app.catalog.search(&app.table.search);
    let page = catalog::paginate(results, app.table.page, app.page_size);

    let content = Column::new()
        .spacing(spacing::MD)
        .push(text("Categories").size(typography::TITLE_MD))
        .push(category_form::view::view(&app.form).map(Message::Form))
        .push(rule::horizontal(border::WIDTH_SM))
        .push(
            category_table::view::view(ViewContext {
                state: &app.table,
                page: &page,
            })
            .map(Message::Table),
        );

    let screen = container(scrollable(content))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD);

    let overlay = Toast::view_overlay(&app.notifications, app.now).map(Message::Notification);

    Stack::new().push(screen).push(overlay).into()
}
