//! Purchase approval queue page.

use leptos::prelude::*;

use crate::components::approval_main::ApprovalMain;
use crate::components::entrance::EntranceAnimation;
use crate::components::nav_layout::NavLayout;
use crate::components::route_guard::RequireAuth;

#[component]
pub fn PurchaseApprovePage() -> impl IntoView {
    view! {
        <RequireAuth>
            <NavLayout>
                <EntranceAnimation>
                    <ApprovalMain/>
                </EntranceAnimation>
            </NavLayout>
        </RequireAuth>
    }
}
