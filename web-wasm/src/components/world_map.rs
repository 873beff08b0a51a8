//! 訪問国マップ
//!
//! 地域ごとに訪問国を並べ、ホバー中の国名をラベルに出す。

use portfolio_common::Travels;
use leptos::prelude::*;

#[component]
pub fn WorldMap(travels: Travels) -> impl IntoView {
    let (hovered, set_hovered) = signal(None::<String>);

    let regions = travels
        .by_region()
        .into_iter()
        .map(|group| {
            let chips = group
                .countries
                .into_iter()
                .map(|country| {
                    let name = country.clone();
                    view! {
                        <span
                            class="country visited"
                            class:hovered={
                                let country = country.clone();
                                move || hovered.with(|h| h.as_deref() == Some(country.as_str()))
                            }
                            on:mouseenter=move |_| set_hovered.set(Some(name.clone()))
                            on:mouseleave=move |_| set_hovered.set(None)
                        >
                            {country.clone()}
                        </span>
                    }
                })
                .collect_view();

            view! {
                <div class="region">
                    <h3 class="region-name">{group.region}</h3>
                    <div class="region-countries">{chips}</div>
                </div>
            }
        })
        .collect_view();

    let visited_count = travels.visited.len();

    view! {
        <section class="section world-map">
            <h2>"Countries I've Visited"</h2>
            <p class="text-muted">{format!("{} countries", visited_count)}</p>
            <div class="map-label">
                {move || hovered.get().unwrap_or_else(|| "Hover over a country".to_string())}
            </div>
            <div class="regions">{regions}</div>
        </section>
    }
}
