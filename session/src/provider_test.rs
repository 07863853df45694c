use super::*;
use crate::backend::AuthEvent;
use crate::channel::AuthChannel;
use crate::state::AuthStatus;
use futures::FutureExt;
use futures::channel::oneshot;
use futures::executor::block_on;
use std::sync::atomic::AtomicUsize;

type InitialResult = Result<Option<UserIdentity>, BackendError>;

/// In-memory backend whose initial fetch resolves when the test says so.
struct MockBackend {
    channel: AuthChannel,
    initial: Mutex<Option<oneshot::Receiver<InitialResult>>>,
    unsubscribes: Arc<AtomicUsize>,
    refuse_subscribe: bool,
}

impl MockBackend {
    fn new() -> (Self, oneshot::Sender<InitialResult>) {
        let (tx, rx) = oneshot::channel();
        let backend = Self {
            channel: AuthChannel::new(),
            initial: Mutex::new(Some(rx)),
            unsubscribes: Arc::new(AtomicUsize::new(0)),
            refuse_subscribe: false,
        };
        (backend, tx)
    }

    fn emit(&self, change: AuthChange) {
        self.channel.emit(&change);
    }

    fn unsubscribe_count(&self) -> usize {
        self.unsubscribes.load(Ordering::SeqCst)
    }
}

impl AuthBackend for MockBackend {
    fn get_session(&self) -> SessionFuture {
        let rx = self.initial.lock().unwrap().take();
        async move {
            match rx {
                Some(rx) => rx.await.unwrap_or(Err(BackendError::Request("fetch abandoned".to_owned()))),
                None => Ok(None),
            }
        }
        .boxed_local()
    }

    fn on_auth_state_change(&self, callback: crate::backend::AuthCallback) -> Result<Subscription, BackendError> {
        if self.refuse_subscribe {
            return Err(BackendError::Unavailable("listeners disabled"));
        }
        let inner = self.channel.subscribe(callback);
        let counter = self.unsubscribes.clone();
        Ok(Subscription::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            inner.unsubscribe();
        }))
    }
}

fn recording_publish() -> (impl Fn(&Session) + Send + Sync + 'static, Arc<Mutex<Vec<Session>>>) {
    let published = Arc::new(Mutex::new(Vec::new()));
    let sink = published.clone();
    (move |session: &Session| sink.lock().unwrap().push(session.clone()), published)
}

fn user(id: &str) -> UserIdentity {
    UserIdentity::new(id)
}

// =============================================================
// SessionStore
// =============================================================

#[test]
fn store_starts_loading() {
    let store = SessionStore::new();
    assert!(store.session().loading);
    assert!(store.session().user.is_none());
    assert_eq!(store.changes_applied(), 0);
}

#[test]
fn store_applies_initial_user() {
    let mut store = SessionStore::new();
    assert!(store.resolve_initial(Ok(Some(user("u1")))));
    assert_eq!(store.session(), &Session { user: Some(user("u1")), loading: false });
}

#[test]
fn store_treats_failed_initial_fetch_as_signed_out() {
    let mut store = SessionStore::new();
    assert!(store.resolve_initial(Err(BackendError::Status(500))));
    assert_eq!(store.session(), &Session { user: None, loading: false });
}

#[test]
fn store_discards_initial_fetch_after_change() {
    let mut store = SessionStore::new();
    store.apply_change(AuthChange::signed_in(user("fresh")));
    assert!(!store.resolve_initial(Ok(Some(user("stale")))));
    assert_eq!(store.session().user, Some(user("fresh")));
}

#[test]
fn store_ignores_second_initial_resolution() {
    let mut store = SessionStore::new();
    assert!(store.resolve_initial(Ok(None)));
    assert!(!store.resolve_initial(Ok(Some(user("u1")))));
    assert!(store.session().user.is_none());
}

#[test]
fn store_user_tracks_most_recent_change() {
    let sequences: Vec<Vec<AuthChange>> = vec![
        vec![AuthChange::signed_in(user("a"))],
        vec![AuthChange::signed_in(user("a")), AuthChange::signed_out()],
        vec![
            AuthChange::signed_out(),
            AuthChange::signed_in(user("b")),
            AuthChange::new(AuthEvent::TokenRefreshed, Some(user("b"))),
            AuthChange::new(AuthEvent::UserUpdated, Some(user("c"))),
        ],
    ];
    for changes in sequences {
        let mut store = SessionStore::new();
        store.resolve_initial(Ok(Some(user("initial"))));
        let expected = changes.last().and_then(|c| c.user.clone());
        for change in changes {
            store.apply_change(change);
            assert!(!store.session().loading);
        }
        assert_eq!(store.session().user, expected);
    }
}

// =============================================================
// SessionProvider
// =============================================================

#[test]
fn provider_is_loading_until_initial_fetch_resolves() {
    let (backend, tx) = MockBackend::new();
    let (publish, published) = recording_publish();
    let (provider, fetch) = SessionProvider::mount(&backend, publish).unwrap();

    assert!(provider.session().loading);
    assert!(published.lock().unwrap().is_empty());

    tx.send(Ok(Some(user("u1")))).unwrap();
    block_on(fetch);

    assert_eq!(provider.session(), Session { user: Some(user("u1")), loading: false });
    assert_eq!(published.lock().unwrap().len(), 1);
}

#[test]
fn provider_settles_signed_out_when_no_session() {
    let (backend, tx) = MockBackend::new();
    let (publish, _published) = recording_publish();
    let (provider, fetch) = SessionProvider::mount(&backend, publish).unwrap();

    tx.send(Ok(None)).unwrap();
    block_on(fetch);

    assert_eq!(provider.session(), Session { user: None, loading: false });
}

#[test]
fn provider_settles_signed_out_when_fetch_fails() {
    let (backend, tx) = MockBackend::new();
    let (publish, published) = recording_publish();
    let (provider, fetch) = SessionProvider::mount(&backend, publish).unwrap();

    tx.send(Err(BackendError::Request("offline".to_owned()))).unwrap();
    block_on(fetch);

    assert_eq!(provider.session(), Session { user: None, loading: false });
    assert_eq!(published.lock().unwrap().last().map(|s| s.loading), Some(false));
}

#[test]
fn provider_first_change_settles_loading_before_fetch() {
    let (backend, tx) = MockBackend::new();
    let (publish, published) = recording_publish();
    let (provider, fetch) = SessionProvider::mount(&backend, publish).unwrap();

    backend.emit(AuthChange::signed_in(user("fresh")));
    assert_eq!(provider.session(), Session { user: Some(user("fresh")), loading: false });

    tx.send(Ok(None)).unwrap();
    block_on(fetch);

    assert_eq!(provider.session().user, Some(user("fresh")));
    assert_eq!(published.lock().unwrap().len(), 1);
}

#[test]
fn provider_user_equals_latest_change() {
    let (backend, tx) = MockBackend::new();
    let (publish, published) = recording_publish();
    let (provider, fetch) = SessionProvider::mount(&backend, publish).unwrap();

    tx.send(Ok(Some(user("a")))).unwrap();
    block_on(fetch);
    backend.emit(AuthChange::signed_out());
    backend.emit(AuthChange::signed_in(user("b")));
    backend.emit(AuthChange::new(AuthEvent::TokenRefreshed, Some(user("b"))));

    assert_eq!(provider.session().user, Some(user("b")));
    let published = published.lock().unwrap();
    assert_eq!(published.len(), 4);
    assert!(published.iter().all(|s| !s.loading));
    assert_eq!(published[1].user, None);
}

#[test]
fn dropping_provider_unsubscribes_exactly_once() {
    let (backend, _tx) = MockBackend::new();
    let (publish, _published) = recording_publish();
    let (provider, _fetch) = SessionProvider::mount(&backend, publish).unwrap();
    assert_eq!(backend.channel.listener_count(), 1);

    drop(provider);

    assert_eq!(backend.unsubscribe_count(), 1);
    assert_eq!(backend.channel.listener_count(), 0);
}

#[test]
fn explicit_unmount_unsubscribes_exactly_once() {
    let (backend, _tx) = MockBackend::new();
    let (publish, _published) = recording_publish();
    let (provider, _fetch) = SessionProvider::mount(&backend, publish).unwrap();

    provider.unmount();

    assert_eq!(backend.unsubscribe_count(), 1);
}

#[test]
fn no_updates_published_after_unmount() {
    let (backend, tx) = MockBackend::new();
    let (publish, published) = recording_publish();
    let (provider, fetch) = SessionProvider::mount(&backend, publish).unwrap();

    drop(provider);
    backend.emit(AuthChange::signed_in(user("late")));
    tx.send(Ok(Some(user("late")))).unwrap();
    block_on(fetch);

    assert!(published.lock().unwrap().is_empty());
}

#[test]
fn mount_propagates_subscription_failure() {
    let (mut backend, _tx) = MockBackend::new();
    backend.refuse_subscribe = true;
    let (publish, _published) = recording_publish();

    let result = SessionProvider::mount(&backend, publish);

    assert!(matches!(result, Err(BackendError::Unavailable(_))));
    assert_eq!(backend.unsubscribe_count(), 0);
}

#[test]
fn refresh_then_rejected_restore_ends_signed_out() {
    let (backend, tx) = MockBackend::new();
    let (publish, published) = recording_publish();
    let (provider, fetch) = SessionProvider::mount(&backend, publish).unwrap();

    // Restore refreshes the stored token, then the backend rejects the user.
    backend.emit(AuthChange::new(AuthEvent::TokenRefreshed, Some(user("u1"))));
    assert_eq!(provider.session().status(), AuthStatus::Authenticated);
    backend.emit(AuthChange::signed_out());
    tx.send(Ok(None)).unwrap();
    block_on(fetch);

    assert_eq!(provider.session(), Session { user: None, loading: false });
    assert_eq!(provider.session().status(), AuthStatus::Unauthenticated);
    assert_eq!(published.lock().unwrap().last().and_then(|s| s.user.clone()), None);
}
