//! Entrance transition for page content.

use leptos::prelude::*;

/// Delay before the visible class is applied, so the browser paints the
/// initial state first.
#[cfg(feature = "hydrate")]
const ENTER_DELAY_MS: u32 = 16;

/// Interactive part of the page shell: fades its children in after hydration.
#[component]
pub fn EntranceAnimation(children: Children) -> impl IntoView {
    let entered = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            gloo_timers::callback::Timeout::new(ENTER_DELAY_MS, move || entered.set(true)).forget();
        });
    }

    view! {
        <div class=move || if entered.get() { "entrance entrance--visible" } else { "entrance" }>
            {children()}
        </div>
    }
}
