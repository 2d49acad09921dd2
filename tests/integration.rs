// SPDX-License-Identifier: MPL-2.0
use art_space::app::{App, Message};
use art_space::config::{self, Config, DisplayConfig, GeneralConfig};
use art_space::error::Error;
use art_space::gallery::{
    self, ArtworkRecord, Boundary, Gallery, GalleryError, ImageRef, Navigation, Navigator,
};
use art_space::i18n::fluent::I18n;
use art_space::ui::controls;
use art_space::ui::theming::ThemeMode;
use tempfile::tempdir;

fn record(title: &str) -> ArtworkRecord {
    ArtworkRecord::new(title, "Anonymous", ImageRef::embedded("a.svg"))
}

fn three_item_gallery() -> Gallery {
    Gallery::new(vec![record("One"), record("Two"), record("Three")])
        .expect("gallery is not empty")
}

fn rendered_labels(i18n: &I18n, navigator: &Navigator<'_>) -> (String, String) {
    let info = navigator.info();
    (
        i18n.tr(controls::left_label_key(&info)),
        i18n.tr(controls::right_label_key(&info)),
    )
}

#[test]
fn navigating_three_artworks_clamps_and_relabels() {
    let gallery = three_item_gallery();
    let i18n = I18n::new(Some("en-US".to_string()), None, &Config::default());
    let mut navigator = Navigator::new(&gallery);

    assert_eq!(navigator.current().title(), "One");
    assert_eq!(
        rendered_labels(&i18n, &navigator),
        ("First".to_string(), "Next".to_string())
    );

    assert_eq!(navigator.retreat(), Navigation::Blocked(Boundary::First));
    assert_eq!(navigator.current_index(), 0);

    assert_eq!(navigator.advance(), Navigation::Moved { from: 0, to: 1 });
    assert_eq!(
        rendered_labels(&i18n, &navigator),
        ("Previous".to_string(), "Next".to_string())
    );

    assert!(navigator.advance().is_moved());
    assert_eq!(navigator.current().title(), "Three");
    assert_eq!(
        rendered_labels(&i18n, &navigator),
        ("Previous".to_string(), "Last".to_string())
    );

    assert_eq!(navigator.advance(), Navigation::Blocked(Boundary::Last));
    assert_eq!(navigator.current_index(), 2);
    assert_eq!(
        i18n.tr(controls::boundary_notice_key(Boundary::Last)),
        "This is the last artwork."
    );

    assert!(navigator.retreat().is_moved());
    assert!(navigator.retreat().is_moved());
    assert_eq!(navigator.current().title(), "One");
    assert_eq!(
        rendered_labels(&i18n, &navigator),
        ("First".to_string(), "Next".to_string())
    );
}

#[test]
fn single_artwork_is_both_first_and_last() {
    let gallery = Gallery::new(vec![record("Alone")]).expect("gallery is not empty");
    let i18n = I18n::new(Some("en-US".to_string()), None, &Config::default());
    let mut navigator = Navigator::new(&gallery);

    assert_eq!(
        rendered_labels(&i18n, &navigator),
        ("First".to_string(), "Last".to_string())
    );
    assert_eq!(navigator.retreat(), Navigation::Blocked(Boundary::First));
    assert_eq!(navigator.advance(), Navigation::Blocked(Boundary::Last));
    assert_eq!(navigator.current().title(), "Alone");
}

#[test]
fn empty_gallery_is_rejected() {
    let err = Gallery::new(Vec::new()).unwrap_err();
    assert_eq!(err, GalleryError::Empty);

    let err: Error = err.into();
    assert_eq!(err.i18n_key(), "error-gallery-empty");
}

#[test]
fn app_walks_builtin_gallery_through_messages() {
    let config = Config::default();
    let i18n = I18n::new(Some("en-US".to_string()), None, &config);
    let mut app = App::with_config(gallery::builtin(), &config, i18n);

    for _ in 0..5 {
        let _ = app.update(Message::Controls(controls::Message::NextPressed));
    }
    assert!(app.navigator().is_at_last());
    assert_eq!(
        app.navigator().current_index(),
        gallery::builtin().last_index()
    );

    let keys: Vec<&str> = app
        .notifications()
        .visible()
        .map(|notification| notification.message_key())
        .collect();
    assert_eq!(keys, vec!["notice-last-of-items"]);
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    let initial_config = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            theme_mode: ThemeMode::Dark,
        },
        display: DisplayConfig::default(),
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    assert_eq!(loaded_initial_config, initial_config);
    let i18n_en = I18n::new(None, None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    let french_config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            ..initial_config.general.clone()
        },
        ..initial_config
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("nav-next"), "Suivant");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn broken_config_falls_back_to_defaults_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[display\nimage_size = ")
        .expect("Failed to write broken config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}

#[test]
fn display_settings_are_clamped() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(
        dir.path().join("settings.toml"),
        "[display]\nimage_size = 20\nnotice_duration_ms = 60000\n",
    )
    .expect("Failed to write config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded.display.image_size(), config::MIN_IMAGE_SIZE);
    assert_eq!(
        loaded.display.notice_duration().as_millis(),
        u128::from(config::MAX_NOTICE_DURATION_MS)
    );
}
