//! トップへ戻るボタン

use portfolio_common::back_to_top_visible;
use leptos::ev;
use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollToOptions};

#[component]
pub fn BackToTop() -> impl IntoView {
    let (visible, set_visible) = signal(false);

    let listener = window_event_listener(ev::scroll, move |_| {
        let scroll_y = window().scroll_y().unwrap_or(0.0);
        set_visible.set(back_to_top_visible(scroll_y));
    });
    on_cleanup(move || listener.remove());

    let scroll_to_top = move |_| {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&options);
    };

    view! {
        <Show when=move || visible.get()>
            <button class="back-to-top" aria-label="Scroll to top" on:click=scroll_to_top>
                "↑"
            </button>
        </Show>
    }
}
