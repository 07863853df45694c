//! In-process fan-out of auth-state changes.
//!
//! Backend implementations own one [`AuthChannel`]: `on_auth_state_change`
//! registers a listener and returns a [`Subscription`] that removes it again;
//! sign-in, sign-out and token refresh call [`AuthChannel::emit`].

#[cfg(test)]
#[path = "channel_test.rs"]
mod channel_test;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError, Weak};

use crate::backend::{AuthCallback, AuthChange, Subscription};

struct Entry {
    id: u64,
    /// Cleared by the subscription before removal; checked per call during `emit`.
    live: Arc<AtomicBool>,
    callback: AuthCallback,
}

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<Entry>,
}

/// Listener registry; clones share the same registry.
#[derive(Clone, Default)]
pub struct AuthChannel {
    inner: Arc<Mutex<Listeners>>,
}

impl AuthChannel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, callback: AuthCallback) -> Subscription {
        let live = Arc::new(AtomicBool::new(true));
        let id = {
            let mut listeners = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
            let id = listeners.next_id;
            listeners.next_id += 1;
            listeners.entries.push(Entry { id, live: live.clone(), callback });
            id
        };
        let registry: Weak<Mutex<Listeners>> = Arc::downgrade(&self.inner);
        Subscription::new(move || {
            live.store(false, Ordering::Release);
            let Some(registry) = registry.upgrade() else {
                return;
            };
            // Drop the callback after releasing the lock; it may own other subscriptions.
            let removed = {
                let mut listeners = registry.lock().unwrap_or_else(PoisonError::into_inner);
                listeners
                    .entries
                    .iter()
                    .position(|entry| entry.id == id)
                    .map(|index| listeners.entries.remove(index))
            };
            drop(removed);
        })
    }

    /// Deliver `change` to every listener registered at the time of the call
    /// and still subscribed when its turn comes.
    ///
    /// Listeners run outside the registry lock, so they may subscribe or
    /// unsubscribe re-entrantly. A listener cancelled by an earlier one in
    /// the same pass is skipped.
    pub fn emit(&self, change: &AuthChange) {
        let snapshot: Vec<(Arc<AtomicBool>, AuthCallback)> = self
            .inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .iter()
            .map(|entry| (entry.live.clone(), entry.callback.clone()))
            .collect();
        log::debug!("auth change {} -> {} listener(s)", change.event, snapshot.len());
        for (live, callback) in snapshot {
            if live.load(Ordering::Acquire) {
                callback(change.clone());
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn listener_count(&self) -> usize {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).entries.len()
    }
}
