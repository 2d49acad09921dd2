// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Arrow keys are routed to the same messages as the navigation buttons.

use super::Message;
use crate::ui::controls;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Tick interval while toasts are on screen.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Listens for keyboard events not already captured by a widget.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if matches!(status, event::Status::Captured) {
            return None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
                key_to_message(&key, modifiers)
            }
            _ => None,
        }
    })
}

/// Maps a key press to a navigation message.
///
/// Presses with Ctrl/Cmd or Alt held are left to the platform.
pub fn key_to_message(key: &Key, modifiers: keyboard::Modifiers) -> Option<Message> {
    if modifiers.command() || modifiers.alt() {
        return None;
    }
    let pressed = match key {
        Key::Named(Named::ArrowLeft) => controls::Message::PreviousPressed,
        Key::Named(Named::ArrowRight) => controls::Message::NextPressed,
        _ => return None,
    };
    Some(Message::Controls(pressed))
}

/// Creates a periodic tick subscription for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
