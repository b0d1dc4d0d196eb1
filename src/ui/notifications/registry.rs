// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `Registry` owns the ordered collection of active toasts and the
//! shared corner preference. There is one logical registry per process,
//! reached through [`registry`] (or [`registry_at`] to pick the corner);
//! every consumer observes the same live collection.
//!
//! Showing a toast with a non-zero duration schedules an independent
//! removal callback on the timer runtime. Removal callbacks are not
//! individually cancelable; removing a toast early simply turns the
//! later firing into a no-op.

use super::toast::{Position, Toast, ToastId};
use crate::timer;
use std::sync::{Arc, Mutex, OnceLock};

/// Ordered collection of active toasts plus the corner preference.
#[derive(Debug, Default)]
pub struct Registry {
    toasts: Mutex<Vec<Toast>>,
    position: Mutex<Position>,
}

static REGISTRY: OnceLock<Arc<Registry>> = OnceLock::new();

/// Returns the process-wide toast registry.
///
/// Every call returns a handle to the same underlying instance; the
/// collection it holds is shared by all consumers.
pub fn registry() -> Arc<Registry> {
    Arc::clone(REGISTRY.get_or_init(|| Arc::new(Registry::new())))
}

/// Returns the process-wide registry, anchoring the overlay at `position`.
///
/// The position is shared state: a later call with a different corner
/// overwrites it for all consumers.
pub fn registry_at(position: Position) -> Arc<Registry> {
    let registry = registry();
    registry.set_position(position);
    registry
}

impl Registry {
    /// Creates an empty registry.
    ///
    /// Application code goes through [`registry`]; this exists so tests
    /// can exercise isolated instances.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `toast` to the collection and schedules its removal.
    ///
    /// The toast is visible to all consumers immediately. If its duration
    /// is non-zero, a removal callback fires after at least that long; a
    /// zero duration means the toast stays until [`Registry::remove`] is
    /// called. Returns the toast's id.
    pub fn show(self: &Arc<Self>, toast: Toast) -> ToastId {
        let id = toast.id();
        let duration = toast.display_duration();

        self.toasts
            .lock()
            .expect("toast collection lock poisoned")
            .push(toast);

        if !duration.is_zero() {
            let registry = Arc::downgrade(self);
            timer::spawn_after(duration, move || {
                if let Some(registry) = registry.upgrade() {
                    registry.remove(id);
                }
            });
        }

        id
    }

    /// Removes the toast with the given id, preserving the order of the
    /// rest. Unknown ids are ignored: the toast may already have been
    /// removed by its expiry timer or an earlier explicit call.
    pub fn remove(&self, id: ToastId) {
        let mut toasts = self
            .toasts
            .lock()
            .expect("toast collection lock poisoned");
        if let Some(index) = toasts.iter().position(|t| t.id() == id) {
            toasts.remove(index);
        }
    }

    /// Returns a snapshot of the active toasts in display order.
    ///
    /// Consumers re-invoke this accessor to observe changes; the UI does
    /// so on every tick.
    #[must_use]
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts
            .lock()
            .expect("toast collection lock poisoned")
            .clone()
    }

    /// Returns whether the collection is currently empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts
            .lock()
            .expect("toast collection lock poisoned")
            .is_empty()
    }

    /// Returns the shared corner preference.
    #[must_use]
    pub fn position(&self) -> Position {
        *self.position.lock().expect("position lock poisoned")
    }

    /// Overwrites the shared corner preference for all consumers.
    pub fn set_position(&self, position: Position) {
        *self.position.lock().expect("position lock poisoned") = position;
    }
}
