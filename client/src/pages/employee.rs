//! Employee list page.

use leptos::prelude::*;

use crate::components::employee_main::EmployeeMain;
use crate::components::entrance::EntranceAnimation;
use crate::components::nav_layout::NavLayout;
use crate::components::route_guard::RequireAuth;

#[component]
pub fn EmployeePage() -> impl IntoView {
    view! {
        <RequireAuth>
            <NavLayout>
                <EntranceAnimation>
                    <EmployeeMain/>
                </EntranceAnimation>
            </NavLayout>
        </RequireAuth>
    }
}
