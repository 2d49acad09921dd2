// SPDX-License-Identifier: MPL-2.0
//! Message handlers for `App::update`.

use super::Message;
use crate::gallery::{ArtworkCache, ArtworkRecord, Navigation, NavigationInfo, Navigator};
use crate::ui::controls;
use crate::ui::notifications::{self, Notification};
use iced::Task;
use std::time::Duration;

/// Mutable view of the application state needed by the handlers.
pub struct UpdateContext<'a> {
    pub navigator: &'a mut Navigator<'static>,
    pub artworks: &'a mut ArtworkCache,
    pub notifications: &'a mut notifications::Manager,
    pub notice_duration: Duration,
}

/// Applies a button press (or arrow key) to the navigator.
///
/// A move loads the new artwork; a rejected step shows the boundary notice.
pub fn handle_controls_message(
    ctx: &mut UpdateContext<'_>,
    message: controls::Message,
) -> Task<Message> {
    let gallery = ctx.navigator.gallery();
    let artworks = &mut *ctx.artworks;
    let notifications = &mut *ctx.notifications;
    let notice_duration = ctx.notice_duration;

    let redraw = move |outcome: Navigation, info: NavigationInfo| match outcome {
        Navigation::Moved { .. } => {
            load_artwork(&gallery[info.current_index], artworks, notifications);
        }
        Navigation::Blocked(boundary) => {
            notifications.push_replacing(
                Notification::info(controls::boundary_notice_key(boundary))
                    .auto_dismiss(notice_duration),
            );
        }
    };

    match message {
        controls::Message::PreviousPressed => ctx.navigator.retreat_with(redraw),
        controls::Message::NextPressed => ctx.navigator.advance_with(redraw),
    };

    Task::none()
}

/// Makes sure `record`'s image is decoded, warning the user if it cannot be.
pub fn load_artwork(
    record: &ArtworkRecord,
    artworks: &mut ArtworkCache,
    notifications: &mut notifications::Manager,
) {
    if let Err(err) = artworks.ensure_loaded(record.image()) {
        notifications.push(
            Notification::warning(err.i18n_key()).with_arg("name", record.image().name()),
        );
    }
}
