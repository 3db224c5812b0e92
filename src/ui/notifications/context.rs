// SPDX-License-Identifier: MPL-2.0
//! Provider handle giving components shared access to the toast store.
//!
//! The application mounts the store once near its root via
//! [`Toasts::provider`] and hands clones of the handle to whichever
//! components need to raise or dismiss toasts. The store is exclusively
//! mutated through the guard returned by the accessor; every other
//! component only reads snapshots. A handle that was never wired to a
//! provider fails on first use with [`MissingProviderError`].

use super::notification::Notification;
use super::store::Store;
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Usage error: a toast handle was used outside a mounted provider.
///
/// This is a programmer-contract violation, not a runtime condition to
/// recover from: the fix is to mount a provider above the consumer, not to
/// handle the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingProviderError;

impl fmt::Display for MissingProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast handle used outside a mounted provider")
    }
}

impl std::error::Error for MissingProviderError {}

/// Cloneable handle to a toast store.
///
/// Clones share the same store; the store lives as long as any handle
/// cloned from the provider does.
#[derive(Debug, Clone, Default)]
pub struct Toasts {
    store: Option<Arc<Mutex<Store>>>,
}

impl Toasts {
    /// Mounts a fresh empty store and returns the owning handle.
    #[must_use]
    pub fn provider() -> Self {
        Self {
            store: Some(Arc::new(Mutex::new(Store::new()))),
        }
    }

    /// A handle that is not connected to any provider.
    ///
    /// This is what a component holds before the application wires it up;
    /// using it fails with [`MissingProviderError`].
    #[must_use]
    pub fn unmounted() -> Self {
        Self { store: None }
    }

    /// Returns whether this handle is backed by a mounted provider.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.store.is_some()
    }

    /// Acquires exclusive access to the store.
    ///
    /// The provider check happens here, synchronously, before any store
    /// operation runs. Store operations through the returned guard are
    /// infallible.
    pub fn try_acquire(&self) -> Result<StoreGuard<'_>, MissingProviderError> {
        let store = self.store.as_ref().ok_or(MissingProviderError)?;
        // A poisoned lock only means a panic mid-operation elsewhere; no
        // single store operation can leave the collection incoherent.
        let guard = store.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(StoreGuard { guard })
    }

    /// Acquires exclusive access to the store.
    ///
    /// # Panics
    ///
    /// Panics with [`MissingProviderError`] when no provider is mounted.
    /// Call sites that cannot uphold the mounting contract themselves
    /// should use [`Toasts::try_acquire`].
    #[must_use]
    pub fn acquire(&self) -> StoreGuard<'_> {
        match self.try_acquire() {
            Ok(guard) => guard,
            Err(err) => panic!("{err}"),
        }
    }

    /// Returns an owned snapshot of the active toasts, in display order.
    pub fn snapshot(&self) -> Result<Vec<Notification>, MissingProviderError> {
        Ok(self.try_acquire()?.toasts().to_vec())
    }
}

/// Exclusive access to a mounted store.
pub struct StoreGuard<'a> {
    guard: MutexGuard<'a, Store>,
}

impl Deref for StoreGuard<'_> {
    type Target = Store;

    fn deref(&self) -> &Self::Target {
        &self.guard
    }
}

impl DerefMut for StoreGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.guard
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Severity;

    #[test]
    fn unmounted_handle_fails_synchronously() {
        let toasts = Toasts::unmounted();
        assert!(!toasts.is_mounted());
        assert_eq!(toasts.try_acquire().err(), Some(MissingProviderError));
    }

    #[test]
    fn default_handle_is_unmounted() {
        let toasts = Toasts::default();
        assert!(toasts.snapshot().is_err());
    }

    #[test]
    #[should_panic(expected = "outside a mounted provider")]
    fn acquire_panics_without_provider() {
        let toasts = Toasts::unmounted();
        let _ = toasts.acquire();
    }

    #[test]
    fn provider_round_trips_show_and_remove() {
        let toasts = Toasts::provider();

        let id = toasts.acquire().show("Saved", Severity::Success);

        let snapshot = toasts.snapshot().expect("provider is mounted");
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].message(), "Saved");
        assert_eq!(snapshot[0].severity(), Severity::Success);

        assert!(toasts.acquire().remove(id));
        assert!(toasts.acquire().is_empty());
    }

    #[test]
    fn clones_share_the_store() {
        let provider = Toasts::provider();
        let consumer = provider.clone();

        provider.acquire().show("shared", Severity::Info);

        let snapshot = consumer.snapshot().expect("clone is mounted");
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].message(), "shared");
    }

    #[test]
    fn missing_provider_error_mentions_the_contract() {
        let rendered = MissingProviderError.to_string();
        assert!(rendered.contains("mounted provider"));
    }
}
