// SPDX-License-Identifier: MPL-2.0
//! `iced_toastbox` provides toast notifications and button components for the
//! Iced GUI toolkit.
//!
//! The crate ships a provider-based toast store with auto-expiry, a
//! corner-anchored overlay widget, centralized button styles, and a small
//! demo application showcasing the components. It also demonstrates
//! internationalization with Fluent and user preference management.

#![doc(html_root_url = "https://docs.rs/iced_toastbox/0.2.0")]

pub mod app;
pub mod error;
pub mod i18n;
pub mod ui;
