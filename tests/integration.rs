// SPDX-License-Identifier: MPL-2.0
use qrs_landing::config::{self, Config};
use qrs_landing::contact::{ContactForm, Field};
use qrs_landing::i18n::I18n;
use qrs_landing::showcase::RotationController;
use qrs_landing::ui::theming::ThemeMode;
use std::time::{Duration, Instant};
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let mut initial_config = Config::default();
    initial_config.general.language = Some("en-US".to_string());
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let mut french_config = Config::default();
    french_config.general.language = Some("fr".to_string());
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_cli_language_overrides_config() {
    let mut config = Config::default();
    config.general.language = Some("fr".to_string());

    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn test_theme_mode_round_trips_through_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.general.theme_mode = ThemeMode::Dark;
    config::save_to_path(&config, &path).expect("save");

    let loaded = config::load_from_path(&path).expect("load");
    assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
}

#[test]
fn test_showcase_timing_flows_from_config_to_controller() {
    let mut config = Config::default();
    config.showcase.interval_ms = Some(2000);
    config.showcase.transition_ms = Some(100);

    let now = Instant::now();
    let mut controller = RotationController::new(
        vec!["a", "b", "c"],
        config.showcase.interval(),
        config.showcase.transition(),
        now,
    )
    .expect("valid configuration");

    // Rotation follows the configured cadence.
    controller.tick(now + Duration::from_millis(1999));
    assert_eq!(controller.active_index(), 0);

    controller.tick(now + Duration::from_millis(2000));
    controller.tick(now + Duration::from_millis(2100));
    assert_eq!(controller.active_index(), 1);
}

#[test]
fn test_contact_errors_resolve_to_translations() {
    let i18n = I18n::default();

    let mut form = ContactForm::new();
    form.set_name("A".to_string());
    form.set_email("not-an-email".to_string());
    form.set_message("hi".to_string());
    assert!(form.submit().is_none());

    // Every recorded error key must resolve in the default locale.
    for field in [Field::Name, Field::Email, Field::Message] {
        let key = form.error_key(field).expect("error recorded");
        let message = i18n.tr(key);
        assert!(
            !message.starts_with("MISSING:"),
            "untranslated error key: {key}"
        );
    }
}

#[test]
fn test_broken_config_degrades_with_translated_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "not = [valid").expect("write");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());

    let key = warning.expect("warning for broken file");
    let i18n = I18n::default();
    assert!(!i18n.tr(&key).starts_with("MISSING:"));
}
