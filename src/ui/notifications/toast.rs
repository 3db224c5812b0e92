// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering notifications.
//!
//! Toasts are the visual representation of notifications, appearing as
//! small cards with a severity-colored accent bar and glyph, stacked at a
//! configurable screen corner above the regular content.

use super::notification::Notification;
use super::store::Message;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, mouse_area, text, Column, Container, Row, Space};
use iced::{alignment, Color, Element, Length, Theme};
use serde::{Deserialize, Serialize};

/// Screen corner the toast overlay anchors to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    TopLeft,
    #[default]
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Position {
    /// Horizontal and vertical anchoring for this corner.
    pub fn alignment(self) -> (alignment::Horizontal, alignment::Vertical) {
        match self {
            Position::TopLeft => (alignment::Horizontal::Left, alignment::Vertical::Top),
            Position::TopRight => (alignment::Horizontal::Right, alignment::Vertical::Top),
            Position::BottomLeft => (alignment::Horizontal::Left, alignment::Vertical::Bottom),
            Position::BottomRight => (alignment::Horizontal::Right, alignment::Vertical::Bottom),
        }
    }
}

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast card.
    ///
    /// The whole card dismisses on click. The explicit close control is a
    /// real button whose press is consumed before the surrounding mouse
    /// area sees it, so one physical click is only ever attributed to one
    /// dismissal.
    pub fn view(notification: &Notification) -> Element<'static, Message> {
        let severity = notification.severity();
        let accent_color = severity.color();
        let id = notification.id();

        // Left accent bar (thin vertical line)
        let accent_bar = container(
            Space::new()
                .width(sizing::ACCENT_BAR_WIDTH)
                .height(sizing::ACCENT_BAR_HEIGHT),
        )
        .style(move |_theme: &Theme| container::Style {
            background: Some(iced::Background::Color(accent_color)),
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        });

        // Severity glyph with accent color
        let glyph = text(severity.glyph())
            .size(typography::BODY)
            .color(accent_color);

        // Message text
        let message = text(notification.message().to_owned())
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.palette().text),
            });

        // Close control (always visible, uses main text color for contrast)
        let close_button = button(text("×").size(typography::BODY_LG))
            .on_press(Message::Dismiss(id))
            .padding(spacing::XXS)
            .style(close_button_style);

        // Layout: [accent] [glyph] [message] [close]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(accent_bar)
            .push(glyph)
            .push(
                Container::new(message)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(close_button);

        let card = Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| card_style(theme, accent_color));

        mouse_area(card).on_press(Message::Dismiss(id)).into()
    }

    /// Renders the overlay with all active toasts.
    ///
    /// Toasts stack vertically at the given corner, in insertion order.
    /// The overlay is non-modal: outside the cards it is plain layout
    /// space that never captures input or steals focus.
    pub fn view_overlay(toasts: &[Notification], position: Position) -> Element<'static, Message> {
        if toasts.is_empty() {
            // Zero-size element so the stack stays structurally stable
            return Space::new().width(0.0).height(0.0).into();
        }

        let cards: Vec<Element<'static, Message>> = toasts.iter().map(Self::view).collect();

        let (horizontal, vertical) = position.alignment();
        let column = Column::with_children(cards)
            .spacing(spacing::XS)
            .align_x(horizontal);

        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(horizontal)
            .align_y(vertical)
            .padding(spacing::MD)
            .into()
    }
}

/// Style function for the toast card.
fn card_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the close control.
fn close_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Severity;

    #[test]
    fn card_style_uses_accent_color() {
        let theme = Theme::Dark;
        let accent = Severity::Success.color();
        let style = card_style(&theme, accent);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn default_position_is_top_right() {
        assert_eq!(Position::default(), Position::TopRight);
    }

    #[test]
    fn position_alignment_covers_all_corners() {
        let (h, v) = Position::TopLeft.alignment();
        assert_eq!(h, alignment::Horizontal::Left);
        assert_eq!(v, alignment::Vertical::Top);

        let (h, v) = Position::BottomRight.alignment();
        assert_eq!(h, alignment::Horizontal::Right);
        assert_eq!(v, alignment::Vertical::Bottom);
    }
}
