// SPDX-License-Identifier: MPL-2.0
//! Previous/next button row.
//!
//! Labels are derived from the navigation snapshot only: the left button
//! reads "first" on the first artwork and "previous" elsewhere, the right
//! button reads "last" on the last artwork and "next" elsewhere. Both
//! buttons stay enabled at the edges so a press can produce a boundary
//! notice.

use crate::gallery::{Boundary, NavigationInfo};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::{button, text, Container, Row};
use iced::{alignment, Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Left button (or left arrow key).
    PreviousPressed,
    /// Right button (or right arrow key).
    NextPressed,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub info: NavigationInfo,
}

#[must_use]
pub fn left_label_key(info: &NavigationInfo) -> &'static str {
    if info.at_first {
        "nav-first"
    } else {
        "nav-previous"
    }
}

#[must_use]
pub fn right_label_key(info: &NavigationInfo) -> &'static str {
    if info.at_last {
        "nav-last"
    } else {
        "nav-next"
    }
}

/// The i18n key of the notice shown when a step is rejected at `boundary`.
#[must_use]
pub fn boundary_notice_key(boundary: Boundary) -> &'static str {
    match boundary {
        Boundary::First => "notice-first-of-items",
        Boundary::Last => "notice-last-of-items",
    }
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let left = nav_button(ctx.i18n.tr(left_label_key(&ctx.info)), Message::PreviousPressed);
    let right = nav_button(ctx.i18n.tr(right_label_key(&ctx.info)), Message::NextPressed);

    // Equal-width cells spread the two buttons evenly across the row.
    Row::new()
        .width(Length::Fill)
        .align_y(alignment::Vertical::Center)
        .push(cell(left))
        .push(cell(right))
        .into()
}

fn nav_button<'a>(label: String, message: Message) -> Element<'a, Message> {
    button(text(label).size(typography::BODY).width(Length::Fill).center())
        .width(Length::Fixed(sizing::BUTTON_MIN_WIDTH))
        .padding([spacing::XS, spacing::MD])
        .on_press(message)
        .into()
}

fn cell(content: Element<'_, Message>) -> Element<'_, Message> {
    Container::new(content)
        .width(Length::FillPortion(1))
        .align_x(alignment::Horizontal::Center)
        .padding(spacing::XXS)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(current_index: usize, total: usize) -> NavigationInfo {
        NavigationInfo {
            current_index,
            total,
            at_first: current_index == 0,
            at_last: current_index + 1 == total,
        }
    }

    #[test]
    fn labels_at_first_artwork() {
        let info = info(0, 3);
        assert_eq!(left_label_key(&info), "nav-first");
        assert_eq!(right_label_key(&info), "nav-next");
    }

    #[test]
    fn labels_in_the_middle() {
        let info = info(1, 3);
        assert_eq!(left_label_key(&info), "nav-previous");
        assert_eq!(right_label_key(&info), "nav-next");
    }

    #[test]
    fn labels_at_last_artwork() {
        let info = info(2, 3);
        assert_eq!(left_label_key(&info), "nav-previous");
        assert_eq!(right_label_key(&info), "nav-last");
    }

    #[test]
    fn single_artwork_shows_first_and_last() {
        let info = info(0, 1);
        assert_eq!(left_label_key(&info), "nav-first");
        assert_eq!(right_label_key(&info), "nav-last");
    }

    #[test]
    fn boundary_notice_keys() {
        assert_eq!(boundary_notice_key(Boundary::First), "notice-first-of-items");
        assert_eq!(boundary_notice_key(Boundary::Last), "notice-last-of-items");
    }
}
