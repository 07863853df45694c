//! Employee directory with a department filter.
//!
//! DESIGN
//! ======
//! Rows are loaded once per mount, ordered by name. The department filter is
//! applied client-side so the dropdown always lists every department.

#[cfg(test)]
#[path = "employee_main_test.rs"]
mod employee_main_test;

use std::collections::BTreeSet;

use leptos::prelude::*;

use crate::components::records_notice::RecordsNotice;
use crate::net::hosted_auth::HostedAuth;
use crate::net::rest::{SortOrder, TableQuery, fetch_rows};
use crate::net::types::Employee;
use crate::state::records::{RecordsState, spawn_load};

pub const EMPLOYEES_TABLE: &str = "employees";

#[must_use]
pub fn employee_query() -> TableQuery {
    TableQuery::from_table(EMPLOYEES_TABLE).order("name", SortOrder::Asc)
}

/// Distinct non-blank departments, sorted.
#[must_use]
pub fn departments(employees: &[Employee]) -> Vec<String> {
    employees
        .iter()
        .filter_map(|e| e.department.as_deref())
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

/// An empty `department` matches everyone.
#[must_use]
pub fn in_department(employee: &Employee, department: &str) -> bool {
    department.is_empty() || employee.department.as_deref().map(str::trim) == Some(department)
}

#[component]
pub fn EmployeeMain() -> impl IntoView {
    let auth = expect_context::<HostedAuth>();
    let records = RwSignal::new(RecordsState::<Employee>::default());
    let department = RwSignal::new(String::new());

    spawn_load(records, async move { fetch_rows(&auth, &employee_query()).await });

    let options = move || {
        records
            .with(|s| departments(&s.items))
            .into_iter()
            .map(|d| view! { <option value=d.clone()>{d.clone()}</option> })
            .collect_view()
    };

    let rows = move || {
        let selected = department.get();
        records.with(|s| {
            s.items
                .iter()
                .filter(|e| in_department(e, &selected))
                .map(|e| {
                    view! {
                        <tr>
                            <td>{e.name.clone()}</td>
                            <td>{e.department.clone().unwrap_or_default()}</td>
                            <td>{e.position.clone().unwrap_or_default()}</td>
                            <td>{e.email.clone().unwrap_or_default()}</td>
                        </tr>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <section class="feature employee-main">
            <header class="feature__header">
                <h1>"Employees"</h1>
                <select
                    class="feature__filter"
                    aria-label="Department"
                    prop:value=move || department.get()
                    on:change=move |ev| department.set(event_target_value(&ev))
                >
                    <option value="">"All departments"</option>
                    {options}
                </select>
            </header>
            {move || records.with(RecordsState::notice).map(|notice| view! { <RecordsNotice notice=notice empty_text="No employees yet." /> })}
            <table class="feature__table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Department"</th>
                        <th>"Position"</th>
                        <th>"E-mail"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </section>
    }
}
