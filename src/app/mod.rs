// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration for the gallery screen.
//!
//! The `App` struct wires the navigator to localization, configuration and
//! notifications, and translates messages into navigator calls. The
//! navigator reports each outcome back through an observer, which is where
//! the next artwork gets loaded or the boundary notice gets queued.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::gallery::{self, ArtworkCache, Gallery, Navigator};
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Duration;
use tracing::info;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    navigator: Navigator<'static>,
    artworks: ArtworkCache,
    notifications: notifications::Manager,
    theme_mode: ThemeMode,
    /// How long boundary notices stay on screen.
    notice_duration: Duration,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("current_index", &self.navigator.current_index())
            .field("total", &self.navigator.gallery().len())
            .field("artworks_loaded", &self.artworks.len())
            .field("notifications", &self.notifications.visible_count())
            .field("queued_notifications", &self.notifications.queued_count())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_override(flags.config_dir.clone());

    // iced 0.14 requires a `Fn` boot closure; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from the config file and CLI flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, flags.i18n_dir, &config);

        let mut app = Self::with_config(gallery::builtin(), &config, i18n);
        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }

        info!(
            artworks = app.navigator.gallery().len(),
            locale = %app.i18n.current_locale(),
            "art space started"
        );

        (app, Task::none())
    }

    /// Builds the application for `gallery`, starting at its first artwork.
    #[must_use]
    pub fn with_config(gallery: &'static Gallery, config: &Config, i18n: I18n) -> Self {
        let mut app = Self {
            i18n,
            navigator: Navigator::new(gallery),
            artworks: ArtworkCache::new(config.display.image_size()),
            notifications: notifications::Manager::new(),
            theme_mode: config.general.theme_mode,
            notice_duration: config.display.notice_duration(),
        };

        update::load_artwork(
            app.navigator.current(),
            &mut app.artworks,
            &mut app.notifications,
        );
        app
    }

    #[must_use]
    pub fn title(&self) -> String {
        self.i18n.tr_with_args(
            "window-title-artwork",
            &[("title", self.navigator.current().title())],
        )
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());

        Subscription::batch([event_sub, tick_sub])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Controls(controls_message) => {
                let mut ctx = update::UpdateContext {
                    navigator: &mut self.navigator,
                    artworks: &mut self.artworks,
                    notifications: &mut self.notifications,
                    notice_duration: self.notice_duration,
                };
                update::handle_controls_message(&mut ctx, controls_message)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(_) => {
                self.notifications.tick();
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            navigator: &self.navigator,
            artworks: &self.artworks,
            notifications: &self.notifications,
        })
    }

    #[must_use]
    pub fn navigator(&self) -> &Navigator<'static> {
        &self.navigator
    }

    #[must_use]
    pub fn artworks(&self) -> &ArtworkCache {
        &self.artworks
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::controls;
    use std::time::Instant;

    fn english_app() -> App {
        let config = Config::default();
        let i18n = I18n::new(Some("en-US".to_string()), None, &config);
        App::with_config(gallery::builtin(), &config, i18n)
    }

    fn press(app: &mut App, message: controls::Message) {
        let _ = app.update(Message::Controls(message));
    }

    fn labels(app: &App) -> (String, String) {
        let info = app.navigator().info();
        (
            app.i18n.tr(controls::left_label_key(&info)),
            app.i18n.tr(controls::right_label_key(&info)),
        )
    }

    fn notice_keys(app: &App) -> Vec<String> {
        app.notifications()
            .visible()
            .map(|notification| notification.message_key().to_string())
            .collect()
    }

    #[test]
    fn starts_on_first_artwork_with_it_loaded() {
        let app = english_app();
        assert_eq!(app.navigator().current_index(), 0);
        assert!(app
            .artworks()
            .get(app.navigator().current().image())
            .is_some());
        assert!(!app.notifications().has_notifications());
        assert_eq!(labels(&app), ("First".to_string(), "Next".to_string()));
    }

    #[test]
    fn walking_the_builtin_gallery() {
        let mut app = english_app();

        press(&mut app, controls::Message::PreviousPressed);
        assert_eq!(app.navigator().current_index(), 0);
        assert_eq!(notice_keys(&app), vec!["notice-first-of-items"]);

        press(&mut app, controls::Message::NextPressed);
        assert_eq!(app.navigator().current_index(), 1);
        assert_eq!(labels(&app), ("Previous".to_string(), "Next".to_string()));

        press(&mut app, controls::Message::NextPressed);
        assert_eq!(app.navigator().current_index(), 2);
        assert_eq!(labels(&app), ("Previous".to_string(), "Last".to_string()));

        press(&mut app, controls::Message::NextPressed);
        assert_eq!(app.navigator().current_index(), 2);
        assert!(notice_keys(&app).contains(&"notice-last-of-items".to_string()));

        press(&mut app, controls::Message::PreviousPressed);
        assert_eq!(app.navigator().current_index(), 1);
        assert_eq!(app.artworks().len(), 3);
    }

    #[test]
    fn repeated_boundary_presses_keep_a_single_notice() {
        let mut app = english_app();
        for _ in 0..5 {
            press(&mut app, controls::Message::PreviousPressed);
        }
        assert_eq!(app.notifications().visible_count(), 1);
        assert_eq!(app.notifications().queued_count(), 0);
    }

    #[test]
    fn notices_can_be_dismissed() {
        let mut app = english_app();
        press(&mut app, controls::Message::PreviousPressed);
        let id = app
            .notifications()
            .visible()
            .next()
            .map(Notification::id)
            .expect("notice should be visible");

        let _ = app.update(Message::Notification(
            notifications::NotificationMessage::Dismiss(id),
        ));
        assert!(!app.notifications().has_notifications());
    }

    #[test]
    fn tick_keeps_fresh_notices() {
        let mut app = english_app();
        press(&mut app, controls::Message::NextPressed);
        press(&mut app, controls::Message::NextPressed);
        press(&mut app, controls::Message::NextPressed);

        let _ = app.update(Message::Tick(Instant::now()));
        assert_eq!(notice_keys(&app), vec!["notice-last-of-items"]);
    }

    #[test]
    fn boundary_notice_expires_after_configured_duration() {
        let mut config = Config::default();
        config.display.notice_duration_ms = Some(config::MIN_NOTICE_DURATION_MS);
        let i18n = I18n::new(Some("en-US".to_string()), None, &config);
        let mut app = App::with_config(gallery::builtin(), &config, i18n);

        press(&mut app, controls::Message::PreviousPressed);
        assert_eq!(app.notifications().visible_count(), 1);

        std::thread::sleep(config.display.notice_duration() + Duration::from_millis(100));
        let _ = app.update(Message::Tick(Instant::now()));

        assert_eq!(app.notifications().visible_count(), 0);
        assert!(!app.notifications().has_notifications());
    }

    #[test]
    fn title_names_current_artwork() {
        let mut app = english_app();
        let first = app.navigator().current().title().to_string();
        assert_eq!(app.title(), format!("{first} - Art Space"));

        press(&mut app, controls::Message::NextPressed);
        let second = app.navigator().current().title().to_string();
        assert_eq!(app.title(), format!("{second} - Art Space"));
    }

    #[test]
    fn theme_follows_config() {
        let mut config = Config::default();
        config.general.theme_mode = ThemeMode::Light;
        let i18n = I18n::new(Some("en-US".to_string()), None, &config);
        let app = App::with_config(gallery::builtin(), &config, i18n);
        assert_eq!(app.theme(), Theme::Light);
    }

    #[test]
    fn image_size_comes_from_config() {
        let mut config = Config::default();
        config.display.image_size = Some(5_000);
        let i18n = I18n::default();
        let app = App::with_config(gallery::builtin(), &config, i18n);
        assert_eq!(app.artworks().size(), config::MAX_IMAGE_SIZE);
    }
}
