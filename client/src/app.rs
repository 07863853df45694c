//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};
use session::Session;

use crate::net::config::{ANON_KEY_META, BackendConfig, URL_META};
use crate::net::hosted_auth::HostedAuth;
use crate::pages::{
    employee::EmployeePage, login::LoginPage, purchase_approve::PurchaseApprovePage, purchase_email::PurchaseEmailPage,
    vendor::VendorPage,
};
use crate::state::session::mount_session_provider;

/// HTML shell rendered on the server for SSR + hydration.
///
/// The public backend settings are embedded as `<meta>` tags so the browser
/// bundle can pick them up during hydration.
pub fn shell(options: LeptosOptions, backend: BackendConfig) -> impl IntoView {
    let BackendConfig { url, anon_key } = backend;
    view! {
        <!DOCTYPE html>
        <html lang="ko">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=URL_META content=url/>
                <meta name=ANON_KEY_META content=anon_key/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the session signal and the session provider; descendants only get a
/// read-only view of the session through context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(Session::default());
    let backend = HostedAuth::new(BackendConfig::current());

    provide_context(session.read_only());
    provide_context(backend.clone());
    mount_session_provider(&backend, session);

    view! {
        <Stylesheet id="leptos" href="/pkg/backoffice.css"/>
        <Title text="Back Office"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("employee") view=EmployeePage/>
                <Route path=(StaticSegment("purchase"), StaticSegment("approve")) view=PurchaseApprovePage/>
                <Route
                    path=(StaticSegment("purchase"), StaticSegment("email"), ParamSegment("id"))
                    view=PurchaseEmailPage
                />
                <Route path=StaticSegment("vendor") view=VendorPage/>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/employee"/> }/>
            </Routes>
        </Router>
    }
}
