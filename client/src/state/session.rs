//! Session provider wiring for the Leptos tree.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the `RwSignal<Session>`; this module mounts the provider that
//! writes it and ties the provider's lifetime to the owning component. Every
//! other component reads the session through [`use_session`].

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use session::{AuthBackend, Session};
#[cfg(feature = "hydrate")]
use session::SessionProvider;

/// Mount the session provider against `backend`, publishing into `session`.
///
/// Browser only: during SSR the session stays in its loading state, which is
/// also what the first hydrated render shows. The provider is dropped (and
/// its subscription cancelled) when the calling component is cleaned up.
pub fn mount_session_provider<B>(backend: &B, session: RwSignal<Session>)
where
    B: AuthBackend + ?Sized,
{
    #[cfg(feature = "hydrate")]
    {
        match SessionProvider::mount(backend, move |next: &Session| session.set(next.clone())) {
            Ok((provider, initial)) => {
                leptos::task::spawn_local(initial);
                on_cleanup(move || provider.unmount());
            }
            Err(e) => {
                log::error!("session provider failed to mount, treating as signed out: {e}");
                session.set(Session { user: None, loading: false });
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (backend, session);
    }
}

/// Read-only session view provided by `App`.
pub fn use_session() -> ReadSignal<Session> {
    expect_context::<ReadSignal<Session>>()
}

/// Display label of the signed-in user; empty while signed out.
#[must_use]
pub fn signed_in_label(session: &Session) -> String {
    session.user.as_ref().map(|user| user.display_label().to_owned()).unwrap_or_default()
}
