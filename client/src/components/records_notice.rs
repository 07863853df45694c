//! Placeholder line shown while a table is loading, failed, or empty.

use leptos::prelude::*;

use crate::state::records::Notice;

#[component]
pub fn RecordsNotice(notice: Notice, empty_text: &'static str) -> impl IntoView {
    let (class, text) = match notice {
        Notice::Loading => ("feature__notice", "Loading...".to_owned()),
        Notice::Failed(error) => ("feature__notice feature__notice--error", format!("Could not load data: {error}")),
        Notice::Empty => ("feature__notice", empty_text.to_owned()),
    };
    view! { <p class=class>{text}</p> }
}
