//! ヘッダーコンポーネント

use crate::app::Page;
use portfolio_common::site::{NavLink, SocialLink};
use leptos::prelude::*;

#[component]
pub fn Header(
    name: String,
    links: Vec<NavLink>,
    social: Vec<SocialLink>,
    page: ReadSignal<Page>,
    set_page: WriteSignal<Page>,
) -> impl IntoView {
    let nav_button = move |target: Page| {
        view! {
            <button
                class=move || if page.get() == target { "nav-link active" } else { "nav-link" }
                on:click=move |_| set_page.set(target)
            >
                {target.label()}
            </button>
        }
    };

    view! {
        <header class="header">
            <h1 class="site-name">{name}</h1>
            <nav class="navbar">
                {Page::ALL.into_iter().map(nav_button).collect_view()}
                {links
                    .into_iter()
                    .map(|link| view! { <a class="nav-link" href=link.href>{link.label}</a> })
                    .collect_view()}
                {social
                    .into_iter()
                    .map(|s| view! {
                        <a class="nav-link social" href=s.url target="_blank" rel="noopener noreferrer">
                            {s.name}
                        </a>
                    })
                    .collect_view()}
            </nav>
        </header>
    }
}
