// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Notifications appear temporarily to inform
//! users about actions (save success, errors, etc.) without blocking
//! interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` record with severity levels
//! - [`store`] - Ordered `Store` of active toasts plus the expiry timer
//! - [`context`] - `Toasts` provider handle shared across the view tree
//! - [`toast`] - Toast widget and corner-anchored overlay
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{self, Severity, Toasts};
//!
//! // Mount a provider near the application root
//! let toasts = Toasts::provider();
//!
//! // Anywhere a clone of the handle reaches: raise a toast and arm its timer
//! let id = toasts.acquire().show("Saved", Severity::Success);
//! let timer = notifications::expiry(id, duration).map(Message::Toast);
//!
//! // In your view function, render the overlay over the screen content
//! let overlay = Toast::view_overlay(&toasts.acquire().toasts().to_vec(), position);
//! ```
//!
//! Dismissal is idempotent: a toast removed manually before its timer fires
//! leaves the late timer callback with nothing to do.

pub mod context;
mod notification;
mod store;
mod toast;

pub use context::{MissingProviderError, StoreGuard, Toasts};
pub use notification::{Notification, Severity, ToastId};
pub use store::{expiry, Message, Store, DEFAULT_DURATION};
pub use toast::{Position, Toast};
