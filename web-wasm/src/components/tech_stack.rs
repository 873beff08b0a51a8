//! 技術スタック（流れるマーキー / カテゴリ別グリッド）

use portfolio_common::tech::{marquee_items, TechCategory, TechItem, TechView};
use leptos::prelude::*;

fn tech_badge(item: TechItem) -> impl IntoView {
    view! {
        <div class="tech-badge" title=item.name.clone()>
            <img src=item.logo alt=item.name.clone() loading="lazy" />
            <span>{item.name.clone()}</span>
        </div>
    }
}

#[component]
pub fn TechStack(categories: Vec<TechCategory>) -> impl IntoView {
    let (mode, set_mode) = signal(TechView::default());

    // 継ぎ目なく流すため2周分
    let marquee: Vec<TechItem> = marquee_items(&categories).into_iter().cloned().collect();

    let body = move || match mode.get() {
        TechView::Marquee => view! {
            <div class="marquee">
                <div class="marquee-track">
                    {marquee.clone().into_iter().map(tech_badge).collect_view()}
                </div>
            </div>
        }
        .into_any(),
        TechView::Grid => view! {
            <div class="tech-grid">
                {categories
                    .clone()
                    .into_iter()
                    .map(|category| view! {
                        <div class="tech-category">
                            <h3>{category.category}</h3>
                            <div class="tech-items">
                                {category.items.into_iter().map(tech_badge).collect_view()}
                            </div>
                        </div>
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
    };

    view! {
        <section class="section tech-stack">
            <div class="section-header">
                <h2>"Tech Stack"</h2>
                <button
                    class="btn btn-small btn-secondary"
                    on:click=move |_| set_mode.update(|m| *m = m.toggled())
                >
                    {move || match mode.get() {
                        TechView::Marquee => "Show all",
                        TechView::Grid => "Show less",
                    }}
                </button>
            </div>
            {body}
        </section>
    }
}
