//! Navigation layout wrapping every protected page.
//!
//! ARCHITECTURE
//! ============
//! Non-interactive part of the page shell: picks the layout and the active
//! tab, renders the sidebar, and leaves the content slot to the page.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::net::hosted_auth::HostedAuth;
use crate::state::nav::NavTab;
use crate::state::session::{signed_in_label, use_session};

/// Sidebar navigation with the active tab highlighted and a sign-out button.
///
/// The active tab follows the current location.
#[component]
pub fn NavLayout(children: Children) -> impl IntoView {
    let session = use_session();
    let location = use_location();
    let active = Memo::new(move |_| location.pathname.with(|path| NavTab::for_path(path)));
    let auth = expect_context::<HostedAuth>();

    let on_sign_out = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let auth = auth.clone();
            leptos::task::spawn_local(async move { auth.sign_out().await });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &auth;
        }
    };

    let tabs = NavTab::ALL
        .into_iter()
        .map(|tab| {
            let is_active = move || active.get() == Some(tab);
            view! {
                <li>
                    <a
                        href=tab.href()
                        class="nav-layout__tab"
                        class:nav-layout__tab--active=is_active
                        aria-current=move || is_active().then_some("page")
                    >
                        {tab.label()}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="nav-layout">
            <nav class="nav-layout__sidebar">
                <p class="nav-layout__brand">"Back Office"</p>
                <ul class="nav-layout__tabs">{tabs}</ul>
                <div class="nav-layout__account">
                    <span class="nav-layout__user">{move || session.with(signed_in_label)}</span>
                    <button class="btn nav-layout__sign-out" on:click=on_sign_out>
                        "Sign out"
                    </button>
                </div>
            </nav>
            <main class="nav-layout__content">{children()}</main>
        </div>
    }
}
