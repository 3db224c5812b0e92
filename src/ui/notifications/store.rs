// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Store` holds the ordered collection of active toasts; [`expiry`]
//! produces the one-shot task that removes a toast once its display
//! duration has elapsed.

use super::notification::{Notification, Severity, ToastId};
use iced::Task;
use std::time::Duration;

/// Display duration before a toast auto-expires.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(3000);

/// Messages for toast state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Manual dismissal of a toast (body click or close control).
    Dismiss(ToastId),
    /// The auto-expiry timer for a toast elapsed.
    Expired(ToastId),
}

/// Ordered collection of active toasts.
///
/// Insertion order is display order; the newest toast sits at the end.
/// Mutation happens only through [`show`](Store::show) and
/// [`remove`](Store::remove), both of which run to completion before the
/// next message is processed.
#[derive(Debug, Default)]
pub struct Store {
    toasts: Vec<Notification>,
}

impl Store {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a toast and returns its id.
    ///
    /// The id is what callers hand to [`expiry`] to arm the auto-removal
    /// timer. `show` never fails; any string is a valid message.
    pub fn show(&mut self, message: impl Into<String>, severity: Severity) -> ToastId {
        let notification = Notification::new(severity, message);
        let id = notification.id();
        self.toasts.push(notification);
        id
    }

    /// Appends a toast with the default `Info` severity.
    pub fn show_message(&mut self, message: impl Into<String>) -> ToastId {
        self.show(message, Severity::default())
    }

    /// Removes the toast with the matching id.
    ///
    /// Returns `true` if a toast was removed. Removing an absent id is a
    /// no-op, which makes removal idempotent: manual dismissal and a late
    /// expiry timer can both target the same id safely.
    pub fn remove(&mut self, id: ToastId) -> bool {
        if let Some(pos) = self.toasts.iter().position(|n| n.id() == id) {
            self.toasts.remove(pos);
            true
        } else {
            false
        }
    }

    /// Handles a toast message. Both variants funnel into [`Store::remove`].
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) | Message::Expired(id) => {
                self.remove(*id);
            }
        }
    }

    /// Returns the active toasts in display order.
    #[must_use]
    pub fn toasts(&self) -> &[Notification] {
        &self.toasts
    }

    /// Returns the number of active toasts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Returns whether the store holds no toasts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Removes all toasts.
    pub fn clear(&mut self) {
        self.toasts.clear();
    }
}

/// Schedules the one-shot expiry for a freshly shown toast.
///
/// The timer is independent of the store and is never cancelled. If the
/// toast was dismissed before the delay elapses, the late
/// [`Message::Expired`] delivery targets an absent id and removal is a
/// no-op.
pub fn expiry(id: ToastId, delay: Duration) -> Task<Message> {
    Task::perform(
        async move {
            tokio::time::sleep(delay).await;
        },
        move |_| Message::Expired(id),
    )
}
