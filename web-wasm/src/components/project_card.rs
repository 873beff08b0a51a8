//! プロジェクトカード
//!
//! 画像が複数あれば5秒ごとのスライドショー、なければ動画か単一画像。

use portfolio_common::{Project, ProjectMedia, Slideshow, SLIDESHOW_INTERVAL_MS};
use leptos::prelude::*;
use std::time::Duration;

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let title = project.title.clone();

    let media = match project.media() {
        ProjectMedia::Slideshow(images) => {
            let images = images.to_vec();
            let (slide, set_slide) = signal(Slideshow::new(images.len()));

            if slide.get_untracked().should_rotate() {
                match set_interval_with_handle(
                    move || set_slide.update(|s| {
                        s.advance();
                    }),
                    Duration::from_millis(SLIDESHOW_INTERVAL_MS as u64),
                ) {
                    Ok(handle) => on_cleanup(move || handle.clear()),
                    Err(e) => gloo::console::warn!("スライドショーのタイマーを設定できません", e),
                }
            }

            let alt_title = title.clone();
            view! {
                <div class="project-media slideshow">
                    <img
                        src=move || slide.with(|s| s.current(&images).cloned().unwrap_or_default())
                        alt=move || format!("{} screenshot {}", alt_title, slide.with(|s| s.index()) + 1)
                    />
                </div>
            }
            .into_any()
        }
        ProjectMedia::Video(url) => view! {
            <div class="project-media">
                <video src=url.to_string() autoplay=true loop=true muted=true playsinline=true />
            </div>
        }
        .into_any(),
        ProjectMedia::Image(url) => view! {
            <div class="project-media">
                <img src=url.to_string() alt=title.clone() />
            </div>
        }
        .into_any(),
        ProjectMedia::None => ().into_any(),
    };

    let technologies = project
        .technologies
        .iter()
        .map(|t| view! { <span class="badge">{t.clone()}</span> })
        .collect_view();

    let links = project
        .links
        .iter()
        .map(|link| view! {
            <a class="badge badge-link" href=link.href.clone() target="_blank" rel="noopener noreferrer">
                {link.kind.clone()}
            </a>
        })
        .collect_view();

    view! {
        <article class="card project-card">
            <a href=project.href.clone() target="_blank" rel="noopener noreferrer">{media}</a>
            <div class="card-body">
                <h3 class="card-title">
                    {title}
                    {project.active.then(|| view! { <span class="status-dot" title="Active"></span> })}
                </h3>
                <time class="text-muted">{project.dates.clone()}</time>
                {project.link_label().map(|label| view! { <div class="print-only link-label">{label}</div> })}
                <p class="card-description">{project.description.clone()}</p>
                <div class="badges">{technologies}</div>
                <div class="badges">{links}</div>
            </div>
        </article>
    }
}
