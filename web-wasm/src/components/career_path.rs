//! キャリアパス

use portfolio_common::site::{with_last_flag, CareerStage};
use leptos::prelude::*;

#[component]
pub fn CareerPath(stages: Vec<CareerStage>) -> impl IntoView {
    let items = with_last_flag(&stages)
        .enumerate()
        .map(|(i, (stage, last))| {
            view! {
                <li class="career-stage">
                    <div class="career-step">
                        <span class="career-number">{i + 1}</span>
                        {(!last).then(|| view! { <span class="career-arrow">"→"</span> })}
                    </div>
                    <div class="career-body">
                        <h3>{stage.title.clone()}</h3>
                        <p class="text-muted">{stage.description.clone()}</p>
                    </div>
                </li>
            }
        })
        .collect_view();

    view! {
        <section class="section career-path">
            <h2>"Career Path"</h2>
            <ol class="career-list">{items}</ol>
        </section>
    }
}
