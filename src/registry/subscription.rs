//! Push-based registry feeds
//!
//! The host owns the category and label registries and pushes the full
//! collection whenever it changes. The picker keeps the latest push in a
//! `RegistrySlot` and holds a `Subscription` per feed; dropping the
//! subscription tears the feed down.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use super::types::{CategoryRegistryEntry, LabelRegistryEntry};

/// Callback invoked with the current full collection
pub type RegistryCallback<T> = Box<dyn Fn(Vec<T>) + Send + Sync>;

/// Registry subscription service exposed by the host connection.
pub trait RegistryConnection: Send + Sync {
    /// Subscribe to categories of one scope (e.g. "script").
    fn subscribe_categories(
        &self,
        scope: &str,
        callback: RegistryCallback<CategoryRegistryEntry>,
    ) -> Subscription;

    fn subscribe_labels(&self, callback: RegistryCallback<LabelRegistryEntry>) -> Subscription;
}

/// Handle to a live feed. Unsubscribes when dropped.
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    pub fn new(unsubscribe: impl FnOnce() + Send + 'static) -> Self {
        Self {
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }

    /// A subscription with nothing to tear down
    pub fn noop() -> Self {
        Self { unsubscribe: None }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.unsubscribe.is_some())
            .finish()
    }
}

struct SlotState<T> {
    value: Option<Arc<[T]>>,
    epoch: u64,
}

/// Latest collection pushed by one registry feed.
///
/// Each push replaces the stored `Arc`, so identity changes exactly when
/// the host delivered new data. Pushes carrying a stale epoch (from a feed
/// that was already torn down) are dropped.
pub struct RegistrySlot<T> {
    name: &'static str,
    inner: Arc<Mutex<SlotState<T>>>,
}

impl<T> Clone for RegistrySlot<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Send + Sync + 'static> RegistrySlot<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            inner: Arc::new(Mutex::new(SlotState {
                value: None,
                epoch: 0,
            })),
        }
    }

    /// Latest collection, or `None` if nothing was pushed yet
    pub fn get(&self) -> Option<Arc<[T]>> {
        self.inner.lock().value.clone()
    }

    /// Build a callback bound to the current epoch.
    pub fn callback(&self) -> RegistryCallback<T> {
        let epoch = self.inner.lock().epoch;
        let inner = Arc::clone(&self.inner);
        let name = self.name;
        Box::new(move |items: Vec<T>| {
            let mut state = inner.lock();
            if state.epoch != epoch {
                debug!(registry = name, "Ignoring push from a closed feed");
                return;
            }
            debug!(registry = name, count = items.len(), "Registry updated");
            state.value = Some(Arc::from(items));
        })
    }

    /// Invalidate every callback handed out so far. The last value is kept.
    pub fn close(&self) {
        self.inner.lock().epoch += 1;
    }
}
