// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery screen and
//! the toast provider.
//!
//! The `App` struct wires together the domains (gallery, localization,
//! notifications) and translates messages into side effects like arming
//! expiry timers. This file intentionally keeps policy decisions (window
//! sizing, toast duration resolution, localization switching) close to the
//! main update loop so it is easy to audit user-facing behavior.

pub mod config;
mod message;
pub mod paths;
mod view;

pub use message::{Flags, Message};

use crate::i18n::fluent::I18n;
use crate::ui::gallery;
use crate::ui::notifications::{self, Position, Severity, Toasts};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Task, Theme};
use std::time::Duration;

/// Root Iced application state that bridges the gallery screen,
/// localization, and the mounted toast provider.
pub struct App {
    pub i18n: I18n,
    gallery: gallery::State,
    /// Provider handle owning the toast store for the whole view tree.
    toasts: Toasts,
    theme_mode: ThemeMode,
    /// Display duration before a toast auto-expires.
    toast_duration: Duration,
    /// Screen corner the toast overlay anchors to.
    toast_position: Position,
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 360;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
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
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            gallery: gallery::State::new(),
            toasts: Toasts::provider(),
            theme_mode: ThemeMode::System,
            toast_duration: notifications::DEFAULT_DURATION,
            toast_position: Position::default(),
        }
    }
}

impl App {
    /// Initializes application state from `Flags` received from the launcher
    /// and the persisted configuration.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());

        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };

        app.theme_mode = config.general.theme_mode;
        app.toast_duration = Duration::from_millis(
            config
                .notifications
                .duration_ms
                .unwrap_or(config::DEFAULT_TOAST_DURATION_MS),
        );
        app.toast_position = config.notifications.position.unwrap_or_default();

        // Surface config loading issues as a startup toast
        let task = if let Some(key) = config_warning {
            let warning = app.i18n.tr(&key);
            app.show_toast(warning, Severity::Warning)
        } else {
            Task::none()
        };

        (app, task)
    }

    /// Raises a toast through the provider and arms its expiry timer.
    fn show_toast(&mut self, message: String, severity: Severity) -> Task<Message> {
        let id = self.toasts.acquire().show(message, severity);
        notifications::expiry(id, self.toast_duration).map(Message::Toast)
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.resolve()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(gallery_message) => {
                match gallery::update(&mut self.gallery, gallery_message, &self.i18n) {
                    gallery::Event::None => Task::none(),
                    gallery::Event::ShowToast { message, severity } => {
                        self.show_toast(message, severity)
                    }
                }
            }
            Message::Toast(toast_message) => {
                self.toasts.acquire().handle_message(&toast_message);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let toasts = self.toasts.acquire().toasts().to_vec();

        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: &self.gallery,
            toasts,
            position: self.toast_position,
        })
    }
}
