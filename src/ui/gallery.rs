// SPDX-License-Identifier: MPL-2.0
//! Gallery screen showcasing the crate's components.
//!
//! Hosts the toggle-text heading and a row of toast triggers, one per
//! severity, dressed in the three button variants. Toast requests are not
//! applied here; they bubble up as [`Event::ShowToast`] for the parent to
//! run through the mounted provider.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::notifications::Severity;
use crate::ui::styles;
use iced::widget::{button, text, Column, Container, Row};
use iced::{alignment, Element, Length, Theme};

/// State for the gallery screen.
#[derive(Debug, Clone, Copy, Default)]
pub struct State {
    /// Whether the heading currently shows the greeting.
    hello: bool,
}

impl State {
    /// Creates the gallery state with the farewell heading showing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the greeting heading is showing.
    #[must_use]
    pub fn is_hello(&self) -> bool {
        self.hello
    }
}

/// Messages emitted by the gallery screen.
#[derive(Debug, Clone)]
pub enum Message {
    /// Flip the heading between greeting and farewell.
    ToggleText,
    /// One of the toast triggers was pressed.
    ShowToast(Severity),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Ask the provider to raise a toast.
    ShowToast { message: String, severity: Severity },
}

/// Contextual data needed to render the gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Process a gallery message and return the corresponding event.
pub fn update(state: &mut State, message: Message, i18n: &I18n) -> Event {
    match message {
        Message::ToggleText => {
            state.hello = !state.hello;
            Event::None
        }
        Message::ShowToast(severity) => Event::ShowToast {
            message: i18n.tr(toast_message_key(severity)),
            severity,
        },
    }
}

/// Demo message key for each severity trigger.
fn toast_message_key(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "gallery-toast-info",
        Severity::Success => "gallery-toast-success",
        Severity::Warning => "gallery-toast-warning",
        Severity::Error => "gallery-toast-error",
    }
}

/// Render the gallery screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let heading_key = if ctx.state.is_hello() {
        "gallery-heading-hello"
    } else {
        "gallery-heading-bye"
    };
    let heading = text(ctx.i18n.tr(heading_key)).size(typography::TITLE_LG);

    let toggle_button = button(text(ctx.i18n.tr("gallery-toggle-button")).size(typography::BODY))
        .on_press(Message::ToggleText)
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary);

    let section_title = text(ctx.i18n.tr("gallery-toast-section")).size(typography::TITLE_SM);

    // One trigger per severity; together they show off all three variants.
    let triggers = Row::new()
        .spacing(spacing::SM)
        .push(trigger(ctx.i18n, "gallery-show-success", Severity::Success, styles::button::primary))
        .push(trigger(ctx.i18n, "gallery-show-info", Severity::Info, styles::button::secondary))
        .push(trigger(ctx.i18n, "gallery-show-warning", Severity::Warning, styles::button::secondary))
        .push(trigger(ctx.i18n, "gallery-show-error", Severity::Error, styles::button::ghost));

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(heading)
        .push(toggle_button)
        .push(section_title)
        .push(triggers);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn trigger<'a>(
    i18n: &I18n,
    caption_key: &str,
    severity: Severity,
    style: impl Fn(&Theme, button::Status) -> button::Style + 'a,
) -> Element<'a, Message> {
    button(text(i18n.tr(caption_key)).size(typography::BODY))
        .on_press(Message::ShowToast(severity))
        .padding([spacing::XS, spacing::MD])
        .style(style)
        .into()
}
