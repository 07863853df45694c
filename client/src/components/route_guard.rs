//! Route guard requiring a signed-in user.
//!
//! ARCHITECTURE
//! ============
//! The rendered branch is a memo over [`GuardView`], so token refreshes and
//! other same-state updates do not remount the protected page. Navigation to
//! `/login` is installed as an effect (see `util::auth`).

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use session::GuardView;

use crate::state::session::use_session;
use crate::util::auth::install_unauth_redirect;

/// Render `children` only for an authenticated session.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    install_unauth_redirect(session, use_navigate());

    let view_state = Memo::new(move |_| session.with(GuardView::for_session));

    move || match view_state.get() {
        GuardView::Placeholder => view! {
            <div class="route-guard route-guard--loading" aria-busy="true">
                <span class="spinner"></span>
            </div>
        }
        .into_any(),
        GuardView::Children => children().into_any(),
        GuardView::Blank => ().into_any(),
    }
}
