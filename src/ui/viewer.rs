// SPDX-License-Identifier: MPL-2.0
//! Artwork screen: the image, its caption and the navigation buttons.

use crate::gallery::{ArtworkRecord, NavigationInfo};
use crate::i18n::fluent::I18n;
use crate::ui::controls;
use crate::ui::design_tokens::{border, palette, radius, spacing, typography};
use iced::font::Weight;
use iced::widget::image::Handle;
use iced::widget::{container, Column, Container, Image, Text};
use iced::{alignment, ContentFit, Element, Font, Length, Theme};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub record: &'a ArtworkRecord,
    /// Decoded image for `record`, or `None` if it failed to load.
    pub artwork: Option<&'a Handle>,
    /// Edge length of the square image frame.
    pub image_size: u32,
    pub info: NavigationInfo,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, controls::Message> {
    let size = ctx.image_size as f32;

    Column::new()
        .width(Length::Fill)
        .spacing(spacing::SM)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(artwork_frame(ctx.artwork, ctx.i18n, size))
        .push(caption(ctx.record))
        .push(controls::view(controls::ViewContext {
            i18n: ctx.i18n,
            info: ctx.info,
        }))
        .into()
}

fn artwork_frame<'a, Message: 'a>(
    artwork: Option<&'a Handle>,
    i18n: &I18n,
    size: f32,
) -> Element<'a, Message> {
    let content: Element<'a, Message> = match artwork {
        Some(handle) => Image::new(handle.clone())
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .content_fit(ContentFit::Cover)
            .into(),
        None => Text::new(i18n.tr("artwork-unavailable"))
            .size(typography::BODY)
            .into(),
    };

    Container::new(content)
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .clip(true)
        .style(frame_style)
        .into()
}

fn frame_style(theme: &Theme) -> container::Style {
    let background = theme.extended_palette().background.weak.color;

    container::Style {
        background: Some(iced::Background::Color(background)),
        border: iced::Border {
            color: palette::GRAY_400,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

fn caption<'a, Message: 'a>(record: &'a ArtworkRecord) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .padding(spacing::XXS)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new(record.title())
                .size(typography::TITLE_LG)
                .font(Font {
                    weight: Weight::Bold,
                    ..Font::default()
                }),
        )
        .push(Text::new(record.artist()).size(typography::BODY_LG))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_style_has_rounded_outline() {
        let style = frame_style(&Theme::Light);
        assert_eq!(style.border.width, border::WIDTH_SM);
        assert!(style.background.is_some());
    }
}
