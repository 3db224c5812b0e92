// SPDX-License-Identifier: MPL-2.0
use iced_toastbox::app::config::{self, Config, DEFAULT_TOAST_DURATION_MS};
use iced_toastbox::i18n::fluent::I18n;
use iced_toastbox::ui::notifications::{
    Message, Notification, Position, Severity, Store, Toasts,
};
use tempfile::tempdir;

#[test]
fn show_then_snapshot_reflects_the_call() {
    let toasts = Toasts::provider();

    toasts.acquire().show("Saved", Severity::Success);

    let snapshot = toasts.snapshot().expect("provider is mounted");
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].message(), "Saved");
    assert_eq!(snapshot[0].severity(), Severity::Success);
}

#[test]
fn removing_the_first_of_two_keeps_the_second() {
    let mut store = Store::new();
    let id_a = store.show("A", Severity::Info);
    store.show("B", Severity::Info);

    assert!(store.remove(id_a));

    assert_eq!(store.len(), 1);
    assert_eq!(store.toasts()[0].message(), "B");
    assert_eq!(store.toasts()[0].severity(), Severity::Info);
}

#[test]
fn expiry_message_after_manual_dismissal_changes_nothing() {
    let mut store = Store::new();
    let id = store.show("hi", Severity::Info);

    store.handle_message(&Message::Dismiss(id));
    let before: Vec<String> = store
        .toasts()
        .iter()
        .map(|n| n.message().to_owned())
        .collect();

    store.handle_message(&Message::Expired(id));
    let after: Vec<String> = store
        .toasts()
        .iter()
        .map(|n| n.message().to_owned())
        .collect();

    assert_eq!(before, after);
}

#[test]
fn consumer_outside_a_provider_fails_before_any_render() {
    let consumer = Toasts::unmounted();
    assert!(consumer.try_acquire().is_err());
    assert!(consumer.snapshot().is_err());
}

#[test]
fn ids_stay_unique_across_stores() {
    let mut first = Store::new();
    let mut second = Store::new();

    let id_a = first.show("a", Severity::Info);
    let id_b = second.show("b", Severity::Info);

    assert_ne!(id_a, id_b);
}

#[test]
fn notification_settings_flow_from_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let config = Config {
        notifications: config::NotificationsConfig {
            duration_ms: Some(1500),
            position: Some(Position::BottomLeft),
        },
        ..Config::default()
    };
    config::save_to_path(&config, &config_path).expect("Failed to write config file");

    let loaded = config::load_from_path(&config_path).expect("Failed to load config from path");
    assert_eq!(loaded.notifications.duration_ms, Some(1500));
    assert_eq!(loaded.notifications.position, Some(Position::BottomLeft));

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn config_defaults_preserve_the_original_constants() {
    let config = Config::default();
    assert_eq!(config.notifications.duration_ms, Some(3000));
    assert_eq!(DEFAULT_TOAST_DURATION_MS, 3000);
    assert_eq!(config.notifications.position, Some(Position::TopRight));
}

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.general.language = Some("fr".to_string());
    config::save_to_path(&config, &config_path).expect("Failed to write config file");

    let loaded = config::load_from_path(&config_path).expect("Failed to load config from path");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn severity_drives_presentation_not_behavior() {
    // Same lifecycle regardless of severity: each record is removed by the
    // same idempotent remove call, whatever its visual category.
    let mut store = Store::new();
    let ids: Vec<_> = [
        Severity::Info,
        Severity::Success,
        Severity::Warning,
        Severity::Error,
    ]
    .into_iter()
    .map(|severity| store.show("x", severity))
    .collect();

    assert_eq!(store.len(), 4);
    for id in ids {
        store.handle_message(&Message::Expired(id));
    }
    assert!(store.is_empty());
}

#[test]
fn records_are_immutable_snapshots() {
    let toasts = Toasts::provider();
    toasts.acquire().show("original", Severity::Info);

    let snapshot: Vec<Notification> = toasts.snapshot().expect("provider is mounted");

    // Mutating the store afterwards leaves the snapshot untouched
    toasts.acquire().clear();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].message(), "original");
}
