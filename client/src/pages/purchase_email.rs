//! Purchase e-mail page, keyed by the `:id` route parameter.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::email_composer::EmailComposer;
use crate::components::entrance::EntranceAnimation;
use crate::components::nav_layout::NavLayout;
use crate::components::route_guard::RequireAuth;

#[component]
pub fn PurchaseEmailPage() -> impl IntoView {
    let params = use_params_map();
    let purchase_id = Signal::derive(move || params.with(|p| p.get("id").unwrap_or_default()));

    view! {
        <RequireAuth>
            <NavLayout>
                <EntranceAnimation>
                    <EmailComposer purchase_id=purchase_id/>
                </EntranceAnimation>
            </NavLayout>
        </RequireAuth>
    }
}
