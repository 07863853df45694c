//! E-mail composer for a single purchase request.
//!
//! DESIGN
//! ======
//! The draft is pre-filled from the request whenever a load settles and stays
//! editable; sending hands the `mailto:` URL to the user's mail client.

#[cfg(test)]
#[path = "email_composer_test.rs"]
mod email_composer_test;

use leptos::prelude::*;

use crate::components::approval_main::request_query;
use crate::components::records_notice::RecordsNotice;
use crate::net::hosted_auth::HostedAuth;
use crate::net::rest::fetch_one;
use crate::net::types::PurchaseRequest;
use crate::state::records::{Notice, RecordsState, spawn_load};
use crate::util::mail::EmailDraft;

/// Hint shown next to the send link, if any.
#[must_use]
pub fn send_hint(draft: &EmailDraft) -> Option<&'static str> {
    if draft.to.trim().is_empty() {
        Some("This vendor has no e-mail address on file.")
    } else if !draft.to.contains('@') {
        Some("Recipient is not an e-mail address.")
    } else if draft.subject.trim().is_empty() {
        Some("A subject is required.")
    } else {
        None
    }
}

#[component]
pub fn EmailComposer(#[prop(into)] purchase_id: Signal<String>) -> impl IntoView {
    let auth = expect_context::<HostedAuth>();
    let records = RwSignal::new(RecordsState::<PurchaseRequest>::default());
    let draft = RwSignal::new(EmailDraft::default());

    Effect::new(move || {
        let id = purchase_id.get();
        let auth = auth.clone();
        spawn_load(records, async move {
            fetch_one(&auth, &request_query(&id)).await.map(|row| row.into_iter().collect())
        });
    });

    Effect::new(move || {
        if let Some(filled) = records.with(|s| s.items.first().map(EmailDraft::for_purchase)) {
            draft.set(filled);
        }
    });

    let ready = move || records.with(|s| s.notice().is_none());

    view! {
        <section class="feature email-composer">
            <header class="feature__header">
                <h1>{move || format!("E-mail for request #{}", purchase_id.get())}</h1>
                <a class="btn btn--link" href="/purchase/approve">
                    "Back to approvals"
                </a>
            </header>
            {move || {
                records
                    .with(RecordsState::notice)
                    .map(|notice| {
                        let empty_text = match notice {
                            Notice::Empty => "Purchase request not found.",
                            _ => "",
                        };
                        view! { <RecordsNotice notice=notice empty_text=empty_text /> }
                    })
            }}
            <Show when=ready>
                <form class="email-composer__form" on:submit=|ev| ev.prevent_default()>
                    <label>
                        "To"
                        <input
                            type="email"
                            prop:value=move || draft.with(|d| d.to.clone())
                            on:input=move |ev| draft.update(|d| d.to = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Subject"
                        <input
                            type="text"
                            prop:value=move || draft.with(|d| d.subject.clone())
                            on:input=move |ev| draft.update(|d| d.subject = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Body"
                        <textarea
                            rows="12"
                            prop:value=move || draft.with(|d| d.body.clone())
                            on:input=move |ev| draft.update(|d| d.body = event_target_value(&ev))
                        ></textarea>
                    </label>
                    {move || draft.with(send_hint).map(|hint| view! { <p class="feature__notice">{hint}</p> })}
                    <a
                        class="btn btn--primary"
                        class:btn--disabled=move || !draft.with(EmailDraft::is_sendable)
                        href=move || draft.with(EmailDraft::mailto_url)
                    >
                        "Open in mail client"
                    </a>
                </form>
            </Show>
        </section>
    }
}
