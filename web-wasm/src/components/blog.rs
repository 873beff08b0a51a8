//! ブログ一覧（検索・カテゴリ・期間で絞り込み）
//!
//! 絞り込み条件はこのビューだけが持つ。ページを離れると破棄される。

use chrono::NaiveDate;
use portfolio_common::{
    derive_categories, filter_owned, CategoryFilter, ContentItem, DatePreset, FilterEvent, FilterState,
};
use leptos::prelude::*;

/// ブラウザのローカル日付
fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
        .unwrap_or_default()
}

fn bound_value(bound: Option<NaiveDate>) -> String {
    bound.map(|d| d.to_string()).unwrap_or_default()
}

#[component]
pub fn BlogList(posts: Vec<ContentItem>) -> impl IntoView {
    let items = RwSignal::new(posts);
    let (state, set_state) = signal(FilterState::default());

    let categories = Memo::new(move |_| items.with(|items| derive_categories(items)));
    let visible = Memo::new(move |_| items.with(|items| state.with(|s| filter_owned(items, s))));

    let dispatch = move |event: FilterEvent| {
        set_state.update(|s| *s = std::mem::take(s).apply(event));
    };

    let category_buttons = move || {
        categories
            .get()
            .into_iter()
            .map(|category| {
                let selected = category.clone();
                let label = category.label().to_string();
                view! {
                    <button
                        class=move || {
                            if state.with(|s| s.category == category) {
                                "btn btn-small btn-primary"
                            } else {
                                "btn btn-small btn-secondary"
                            }
                        }
                        on:click=move |_| dispatch(FilterEvent::SelectCategory(selected.clone()))
                    >
                        {label}
                    </button>
                }
            })
            .collect_view()
    };

    let preset_buttons = DatePreset::ALL
        .into_iter()
        .map(|preset| {
            view! {
                <button
                    class=move || {
                        if state.with(|s| s.range == preset.range(today())) {
                            "btn btn-small btn-primary"
                        } else {
                            "btn btn-small btn-secondary"
                        }
                    }
                    on:click=move |_| dispatch(FilterEvent::ApplyPreset { preset, today: today() })
                >
                    {preset.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <section class="section blog">
            <h2>"Blog"</h2>

            <div class="filters">
                <input
                    type="search"
                    class="input"
                    placeholder="Search posts..."
                    prop:value=move || state.with(|s| s.search.clone())
                    on:input=move |ev| dispatch(FilterEvent::Search(event_target_value(&ev)))
                />

                <div class="category-filter">{category_buttons}</div>

                <div class="date-filter">
                    {preset_buttons}
                    <label>
                        "From"
                        <input
                            type="date"
                            prop:value=move || state.with(|s| bound_value(s.range.from))
                            on:input=move |ev| dispatch(FilterEvent::SetFrom(event_target_value(&ev)))
                        />
                    </label>
                    <label>
                        "To"
                        <input
                            type="date"
                            prop:value=move || state.with(|s| bound_value(s.range.to))
                            on:input=move |ev| dispatch(FilterEvent::SetTo(event_target_value(&ev)))
                        />
                    </label>
                    <Show when=move || !state.with(|s| s.is_noop())>
                        <button class="btn btn-small btn-secondary" on:click=move |_| dispatch(FilterEvent::Reset)>
                            "Clear filters"
                        </button>
                    </Show>
                </div>
            </div>

            <p class="text-muted">
                {move || format!("{} of {} posts", visible.with(|v| v.len()), items.with(|i| i.len()))}
            </p>

            <Show
                when=move || visible.with(|v| !v.is_empty())
                fallback=|| view! { <p class="text-muted">"No posts match the current filters."</p> }
            >
                <ul class="post-list">
                    <For
                        each=move || visible.get()
                        key=|item| item.slug.clone()
                        children=move |item| view! { <PostCard item=item /> }
                    />
                </ul>
            </Show>
        </section>
    }
}

#[component]
fn PostCard(item: ContentItem) -> impl IntoView {
    let tags = item
        .display_tags()
        .into_iter()
        .map(|tag| {
            let tag = tag.to_string();
            view! { <span class="badge">{tag}</span> }
        })
        .collect_view();

    view! {
        <li class="card post-card">
            <a href=format!("/blog/{}", item.slug)>
                <h3 class="card-title">{item.title.clone()}</h3>
            </a>
            <time class="text-muted">{item.display_date()}</time>
            <p class="card-description">{item.summary.clone()}</p>
            <div class="badges">{tags}</div>
        </li>
    }
}
