//! Vendor directory with a free-text search.

#[cfg(test)]
#[path = "vendor_list_test.rs"]
mod vendor_list_test;

use leptos::prelude::*;

use crate::components::records_notice::RecordsNotice;
use crate::net::hosted_auth::HostedAuth;
use crate::net::rest::{SortOrder, TableQuery, fetch_rows};
use crate::net::types::Vendor;
use crate::state::records::{RecordsState, spawn_load};

pub const VENDORS_TABLE: &str = "vendors";

#[must_use]
pub fn vendor_query() -> TableQuery {
    TableQuery::from_table(VENDORS_TABLE).order("name", SortOrder::Asc)
}

/// Case-insensitive match on name, contact name, or contact e-mail. A blank
/// needle keeps every vendor.
#[must_use]
pub fn filter_vendors<'a>(vendors: &'a [Vendor], needle: &str) -> Vec<&'a Vendor> {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return vendors.iter().collect();
    }
    vendors
        .iter()
        .filter(|v| {
            std::iter::once(v.name.as_str())
                .chain(v.contact_name.as_deref())
                .chain(v.contact_email.as_deref())
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}

#[component]
pub fn VendorList() -> impl IntoView {
    let auth = expect_context::<HostedAuth>();
    let records = RwSignal::new(RecordsState::<Vendor>::default());
    let search = RwSignal::new(String::new());

    spawn_load(records, async move { fetch_rows(&auth, &vendor_query()).await });

    let rows = move || {
        let needle = search.get();
        records.with(|s| {
            filter_vendors(&s.items, &needle)
                .into_iter()
                .map(|v| {
                    let email = v.contact_email.clone().unwrap_or_default();
                    view! {
                        <tr>
                            <td>{v.name.clone()}</td>
                            <td>{v.contact_name.clone().unwrap_or_default()}</td>
                            <td>
                                <a href=format!("mailto:{email}")>{email.clone()}</a>
                            </td>
                            <td>{v.phone.clone().unwrap_or_default()}</td>
                        </tr>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <section class="feature vendor-list">
            <header class="feature__header">
                <h1>"Vendors"</h1>
                <input
                    class="feature__filter"
                    type="search"
                    placeholder="Search vendors"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
            </header>
            {move || records.with(RecordsState::notice).map(|notice| view! { <RecordsNotice notice=notice empty_text="No vendors yet." /> })}
            <table class="feature__table">
                <thead>
                    <tr>
                        <th>"Vendor"</th>
                        <th>"Contact"</th>
                        <th>"E-mail"</th>
                        <th>"Phone"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </section>
    }
}
