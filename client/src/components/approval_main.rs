//! Purchase approval queue.
//!
//! DESIGN
//! ======
//! One status tab is shown at a time, starting on `pending`. Approve/reject
//! PATCH the request's `status` and then reload the current tab; the backend
//! row policies decide whether the signed-in user may do so.

#[cfg(test)]
#[path = "approval_main_test.rs"]
mod approval_main_test;

use leptos::prelude::*;
use serde_json::json;

use crate::components::records_notice::RecordsNotice;
use crate::net::hosted_auth::HostedAuth;
use crate::net::rest::{SortOrder, TableQuery, fetch_rows, patch_rows};
use crate::net::types::{PurchaseRequest, PurchaseStatus};
use crate::state::records::{RecordsState, spawn_load};

pub const PURCHASE_TABLE: &str = "purchase_requests";

#[must_use]
pub fn approval_query(status: PurchaseStatus) -> TableQuery {
    TableQuery::from_table(PURCHASE_TABLE)
        .eq("status", status)
        .order("created_at", SortOrder::Desc)
}

/// Query addressing a single request by id.
#[must_use]
pub fn request_query(id: &str) -> TableQuery {
    TableQuery::from_table(PURCHASE_TABLE).eq("id", id)
}

#[must_use]
pub fn status_patch(status: PurchaseStatus) -> serde_json::Value {
    json!({ "status": status.as_str() })
}

/// Decisions offered for a request in `status`. Only pending requests can
/// be decided.
#[must_use]
pub fn decisions(status: PurchaseStatus) -> &'static [PurchaseStatus] {
    match status {
        PurchaseStatus::Pending => &[PurchaseStatus::Approved, PurchaseStatus::Rejected],
        PurchaseStatus::Approved | PurchaseStatus::Rejected => &[],
    }
}

#[must_use]
pub fn email_composer_path(id: &str) -> String {
    format!("/purchase/email/{id}")
}

/// Whole-won amount, or a dash when unknown.
#[must_use]
pub fn format_amount(amount: Option<f64>) -> String {
    amount.map_or_else(|| "-".to_owned(), |a| format!("{a:.0}"))
}

fn decision_label(status: PurchaseStatus) -> &'static str {
    match status {
        PurchaseStatus::Approved => "Approve",
        PurchaseStatus::Rejected => "Reject",
        PurchaseStatus::Pending => "Reopen",
    }
}

#[component]
pub fn ApprovalMain() -> impl IntoView {
    let auth = expect_context::<HostedAuth>();
    let tab = RwSignal::new(PurchaseStatus::default());
    let records = RwSignal::new(RecordsState::<PurchaseRequest>::default());
    let action_error = RwSignal::new(None::<String>);

    let reload = {
        let auth = auth.clone();
        move || {
            let auth = auth.clone();
            let status = tab.get_untracked();
            spawn_load(records, async move { fetch_rows(&auth, &approval_query(status)).await });
        }
    };

    Effect::new({
        let reload = reload.clone();
        move || {
            tab.track();
            reload();
        }
    });

    let decide = move |id: String, status: PurchaseStatus| {
        #[cfg(feature = "hydrate")]
        {
            let auth = auth.clone();
            let reload = reload.clone();
            leptos::task::spawn_local(async move {
                match patch_rows(&auth, &request_query(&id), &status_patch(status)).await {
                    Ok(()) => {
                        log::info!("approval: request {id} marked {status}");
                        action_error.set(None);
                        reload();
                    }
                    Err(e) => {
                        log::warn!("approval: update of request {id} failed: {e}");
                        action_error.set(Some(format!("Could not update request {id}: {e}")));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&auth, &reload, id, status);
        }
    };

    let tabs = PurchaseStatus::ALL
        .into_iter()
        .map(|status| {
            view! {
                <button
                    class="feature__tab"
                    class:feature__tab--active=move || tab.get() == status
                    on:click=move |_| tab.set(status)
                >
                    {status.label()}
                </button>
            }
        })
        .collect_view();

    let rows = move || {
        records.with(|s| {
            s.items
                .iter()
                .map(|req| {
                    let actions = decisions(req.status)
                        .iter()
                        .map(|&next| {
                            let decide = decide.clone();
                            let id = req.id.clone();
                            view! {
                                <button class="btn feature__action" on:click=move |_| decide(id.clone(), next)>
                                    {decision_label(next)}
                                </button>
                            }
                        })
                        .collect_view();
                    view! {
                        <tr>
                            <td>{req.id.clone()}</td>
                            <td>{req.item.clone()}</td>
                            <td>{req.quantity.map(|q| q.to_string()).unwrap_or_default()}</td>
                            <td>{format_amount(req.amount)}</td>
                            <td>{req.requester.clone().unwrap_or_default()}</td>
                            <td>{req.vendor.clone().unwrap_or_default()}</td>
                            <td>{req.status.label()}</td>
                            <td class="feature__actions">
                                {actions}
                                <a class="btn btn--link" href=email_composer_path(&req.id)>
                                    "E-mail"
                                </a>
                            </td>
                        </tr>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <section class="feature approval-main">
            <header class="feature__header">
                <h1>"Purchase approval"</h1>
                <div class="feature__tabs" role="tablist">{tabs}</div>
            </header>
            {move || action_error.get().map(|e| view! { <p class="feature__notice feature__notice--error">{e}</p> })}
            {move || records.with(RecordsState::notice).map(|notice| view! { <RecordsNotice notice=notice empty_text="No requests in this tab." /> })}
            <table class="feature__table">
                <thead>
                    <tr>
                        <th>"No."</th>
                        <th>"Item"</th>
                        <th>"Qty"</th>
                        <th>"Amount"</th>
                        <th>"Requester"</th>
                        <th>"Vendor"</th>
                        <th>"Status"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </section>
    }
}
