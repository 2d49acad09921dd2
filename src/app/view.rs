// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The artwork screen is centered in a scrollable column, with the toast
//! overlay stacked on top.

use super::Message;
use crate::gallery::{ArtworkCache, Navigator};
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, Toast};
use crate::ui::viewer;
use iced::widget::{scrollable, Container, Stack};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub navigator: &'a Navigator<'static>,
    pub artworks: &'a ArtworkCache,
    pub notifications: &'a notifications::Manager,
}

/// Renders the artwork screen for the navigator's current item.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let record = ctx.navigator.current();

    let screen = viewer::view(viewer::ViewContext {
        i18n: ctx.i18n,
        record,
        artwork: ctx.artworks.get(record.image()),
        image_size: ctx.artworks.size(),
        info: ctx.navigator.info(),
    })
    .map(Message::Controls);

    let centered = Container::new(scrollable(
        Container::new(screen)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    ))
    .width(Length::Fill)
    .height(Length::Fill)
    .align_y(alignment::Vertical::Center);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .push(centered)
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
