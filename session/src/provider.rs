//! Session provider: keeps the exposed [`Session`] in step with the backend.
//!
//! DESIGN
//! ======
//! [`SessionStore`] is the pure reducer. [`SessionProvider`] wires it to an
//! [`AuthBackend`]: it subscribes to auth-state changes on mount, hands back an
//! [`InitialFetch`] future for the caller to spawn, and publishes a snapshot
//! after every applied transition.
//!
//! ORDERING
//! ========
//! The initial fetch and the first change notification race. A change that
//! arrives first wins: the later fetch result is discarded instead of
//! overwriting fresher state. A failed fetch settles the session as signed
//! out.
//!
//! LIFECYCLE
//! =========
//! Dropping the provider cancels the subscription exactly once and stops all
//! publishing. `InitialFetch` only holds a weak reference, so a fetch that
//! resolves after teardown is a no-op.

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError, Weak};
use std::task::{Context, Poll};

use crate::backend::{AuthBackend, AuthChange, BackendError, SessionFuture, Subscription};
use crate::identity::UserIdentity;
use crate::state::Session;

// =============================================================================
// STORE
// =============================================================================

/// Pure session reducer.
#[derive(Clone, Debug, Default)]
pub struct SessionStore {
    session: Session,
    changes_applied: u64,
    initial_settled: bool,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Number of change notifications applied so far.
    #[must_use]
    pub fn changes_applied(&self) -> u64 {
        self.changes_applied
    }

    /// Apply one auth-state change unconditionally.
    pub fn apply_change(&mut self, change: AuthChange) {
        self.session.user = change.user;
        self.session.loading = false;
        self.changes_applied += 1;
    }

    /// Apply the initial fetch result. Returns whether the session changed.
    ///
    /// Only the first call counts, and it is discarded when a change
    /// notification has already been applied.
    pub fn resolve_initial(&mut self, result: Result<Option<UserIdentity>, BackendError>) -> bool {
        if self.initial_settled {
            return false;
        }
        self.initial_settled = true;

        if self.changes_applied > 0 {
            log::debug!(
                "discarding initial session fetch; {} change(s) already applied",
                self.changes_applied
            );
            return false;
        }

        let user = match result {
            Ok(user) => user,
            Err(e) => {
                log::warn!("initial session fetch failed, treating as signed out: {e}");
                None
            }
        };
        self.session.user = user;
        self.session.loading = false;
        true
    }
}

// =============================================================================
// PROVIDER
// =============================================================================

type Publish = Box<dyn Fn(&Session) + Send + Sync>;

struct Shared {
    store: Mutex<SessionStore>,
    publish: Publish,
    mounted: AtomicBool,
}

impl Shared {
    fn apply_change(&self, change: AuthChange) {
        if !self.mounted.load(Ordering::Acquire) {
            return;
        }
        let event = change.event;
        let snapshot = {
            let mut store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
            store.apply_change(change);
            store.session().clone()
        };
        log::debug!("session updated by {event}");
        (self.publish)(&snapshot);
    }

    fn resolve_initial(&self, result: Result<Option<UserIdentity>, BackendError>) {
        if !self.mounted.load(Ordering::Acquire) {
            return;
        }
        let snapshot = {
            let mut store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
            if !store.resolve_initial(result) {
                return;
            }
            store.session().clone()
        };
        (self.publish)(&snapshot);
    }

    fn snapshot(&self) -> Session {
        self.store.lock().unwrap_or_else(PoisonError::into_inner).session().clone()
    }
}

/// Owner of the session state for one mounted application root.
pub struct SessionProvider {
    shared: Arc<Shared>,
    subscription: Option<Subscription>,
}

impl SessionProvider {
    /// Subscribe to `backend` and prepare the initial session fetch.
    ///
    /// `publish` receives a snapshot after every applied transition. The
    /// returned [`InitialFetch`] must be spawned (or awaited) by the caller.
    ///
    /// # Errors
    ///
    /// Returns the backend's error if the subscription cannot be established.
    pub fn mount<B>(backend: &B, publish: impl Fn(&Session) + Send + Sync + 'static) -> Result<(Self, InitialFetch), BackendError>
    where
        B: AuthBackend + ?Sized,
    {
        let shared = Arc::new(Shared {
            store: Mutex::new(SessionStore::new()),
            publish: Box::new(publish),
            mounted: AtomicBool::new(true),
        });

        let listener = Arc::downgrade(&shared);
        let subscription = backend.on_auth_state_change(Arc::new(move |change| {
            if let Some(shared) = listener.upgrade() {
                shared.apply_change(change);
            }
        }))?;

        let fetch = InitialFetch { shared: Arc::downgrade(&shared), pending: backend.get_session() };
        log::debug!("session provider mounted");
        Ok((Self { shared, subscription: Some(subscription) }, fetch))
    }

    /// Current session snapshot.
    #[must_use]
    pub fn session(&self) -> Session {
        self.shared.snapshot()
    }

    /// Tear down explicitly; equivalent to dropping.
    pub fn unmount(self) {}
}

impl Drop for SessionProvider {
    fn drop(&mut self) {
        self.shared.mounted.store(false, Ordering::Release);
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
        log::debug!("session provider unmounted");
    }
}

/// Pending initial session fetch created by [`SessionProvider::mount`].
#[must_use = "the initial session is only applied when this future is polled"]
pub struct InitialFetch {
    shared: Weak<Shared>,
    pending: SessionFuture,
}

impl Future for InitialFetch {
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        let Poll::Ready(result) = this.pending.as_mut().poll(cx) else {
            return Poll::Pending;
        };
        match this.shared.upgrade() {
            Some(shared) => shared.resolve_initial(result),
            None => log::debug!("initial session fetch resolved after unmount; ignored"),
        }
        Poll::Ready(())
    }
}
