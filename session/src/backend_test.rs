use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};

fn counting_subscription() -> (Subscription, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let hook = calls.clone();
    let sub = Subscription::new(move || {
        hook.fetch_add(1, Ordering::SeqCst);
    });
    (sub, calls)
}

// =============================================================
// Subscription
// =============================================================

#[test]
fn unsubscribe_runs_cancel_once() {
    let (sub, calls) = counting_subscription();
    assert!(sub.is_active());
    sub.unsubscribe();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn drop_runs_cancel_once() {
    let (sub, calls) = counting_subscription();
    drop(sub);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn debug_reports_cancelled_after_drop_hook_ran() {
    let (mut sub, calls) = counting_subscription();
    assert_eq!(format!("{sub:?}"), "Subscription { active: true }");
    sub.cancel_now();
    assert_eq!(format!("{sub:?}"), "Subscription { active: false }");
    drop(sub);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

// =============================================================
// AuthEvent wire names
// =============================================================

#[test]
fn auth_event_deserializes_wire_names() {
    for event in [
        AuthEvent::InitialSession,
        AuthEvent::SignedIn,
        AuthEvent::SignedOut,
        AuthEvent::TokenRefreshed,
        AuthEvent::UserUpdated,
        AuthEvent::PasswordRecovery,
    ] {
        let parsed: AuthEvent = serde_json::from_str(&format!("\"{}\"", event.as_str())).unwrap();
        assert_eq!(parsed, event);
    }
}

#[test]
fn auth_event_serde_matches_display() {
    let json = serde_json::to_string(&AuthEvent::TokenRefreshed).unwrap();
    assert_eq!(json, format!("\"{}\"", AuthEvent::TokenRefreshed));
}

#[test]
fn auth_change_helpers_set_user() {
    let user = UserIdentity::new("u1");
    assert_eq!(AuthChange::signed_in(user.clone()).user, Some(user));
    assert_eq!(AuthChange::signed_out().user, None);
    assert_eq!(AuthChange::signed_out().event, AuthEvent::SignedOut);
}
