// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the gallery screen and layers the toast overlay above it. The
//! overlay is rebuilt from a store snapshot on every render; it owns no
//! state of its own, so unmounting and remounting the surface leaves
//! in-flight toasts untouched.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::gallery;
use crate::ui::notifications::{Notification, Position, Toast};
use iced::widget::stack;
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a gallery::State,
    /// Snapshot of the active toasts, in display order.
    pub toasts: Vec<Notification>,
    pub position: Position,
}

/// Renders the current application view with the toast overlay on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let screen = gallery::view(gallery::ViewContext {
        i18n: ctx.i18n,
        state: ctx.gallery,
    })
    .map(Message::Gallery);

    let toast_overlay = Toast::view_overlay(&ctx.toasts, ctx.position).map(Message::Toast);

    stack![screen, toast_overlay]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
