//! Vendor list page.

use leptos::prelude::*;

use crate::components::entrance::EntranceAnimation;
use crate::components::nav_layout::NavLayout;
use crate::components::route_guard::RequireAuth;
use crate::components::vendor_list::VendorList;

#[component]
pub fn VendorPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <NavLayout>
                <EntranceAnimation>
                    <VendorList/>
                </EntranceAnimation>
            </NavLayout>
        </RequireAuth>
    }
}
