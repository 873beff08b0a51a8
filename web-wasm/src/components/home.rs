//! トップページ（プロフィール・職歴・プロジェクトなど）

use crate::components::{
    book_list::BookList, career_path::CareerPath, project_card::ProjectCard, tech_stack::TechStack,
    world_map::WorldMap,
};
use portfolio_common::SiteData;
use leptos::prelude::*;

fn period(start: &str, end: &str) -> String {
    if end.is_empty() {
        format!("{} - Present", start)
    } else {
        format!("{} - {}", start, end)
    }
}

#[component]
pub fn Home(site: SiteData) -> impl IntoView {
    let work = site
        .work
        .iter()
        .map(|w| view! {
            <li class="resume-entry">
                <img class="logo" src=w.logo_url.clone() alt=w.company.clone() />
                <div>
                    <a href=w.href.clone() target="_blank" rel="noopener noreferrer">
                        <h3>{w.company.clone()}</h3>
                    </a>
                    <p>{w.title.clone()}</p>
                    <p class="text-muted">{period(&w.start, &w.end)}</p>
                    <p>{w.description.clone()}</p>
                </div>
            </li>
        })
        .collect_view();

    let education = site
        .education
        .iter()
        .map(|e| view! {
            <li class="resume-entry">
                <img class="logo" src=e.logo_url.clone() alt=e.school.clone() />
                <div>
                    <a href=e.href.clone() target="_blank" rel="noopener noreferrer">
                        <h3>{e.school.clone()}</h3>
                    </a>
                    <p>{e.degree.clone()}</p>
                    <p class="text-muted">{period(&e.start, &e.end)}</p>
                </div>
            </li>
        })
        .collect_view();

    let certifications = site
        .certifications
        .iter()
        .map(|c| view! {
            <li class="resume-entry">
                <img class="logo" src=c.logo_url.clone() alt=c.issuer.clone() />
                <div>
                    <a href=c.href.clone() target="_blank" rel="noopener noreferrer">
                        <h3>{c.title.clone()}</h3>
                    </a>
                    <p class="text-muted">{format!("{} · {}", c.issuer, c.year)}</p>
                </div>
            </li>
        })
        .collect_view();

    let skills = site
        .skills
        .iter()
        .map(|s| view! { <span class="badge">{s.clone()}</span> })
        .collect_view();

    let projects = site
        .projects
        .into_iter()
        .map(|project| view! { <ProjectCard project=project /> })
        .collect_view();

    view! {
        <section class="section hero">
            <img class="avatar" src=site.avatar_url alt=site.initials />
            <div>
                <h2>{format!("Hi, I'm {}", site.name)}</h2>
                <p>{site.description}</p>
                <p class="text-muted">{site.location}</p>
            </div>
        </section>

        <section class="section">
            <h2>"About"</h2>
            <p class="summary">{site.summary}</p>
        </section>

        <section class="section">
            <h2>"Work Experience"</h2>
            <ul class="resume-list">{work}</ul>
        </section>

        <section class="section">
            <h2>"Education"</h2>
            <ul class="resume-list">{education}</ul>
        </section>

        <section class="section">
            <h2>"Certifications"</h2>
            <ul class="resume-list">{certifications}</ul>
        </section>

        <section class="section">
            <h2>"Skills"</h2>
            <div class="badges">{skills}</div>
        </section>

        <TechStack categories=site.tech_stack />
        <CareerPath stages=site.career_path />

        <section class="section">
            <h2>"Projects"</h2>
            <div class="project-grid">{projects}</div>
        </section>

        <BookList themes=site.books />
        <WorldMap travels=site.travels />

        <section class="section contact">
            <h2>"Get in Touch"</h2>
            <a href=format!("mailto:{}", site.contact.email)>{site.contact.email.clone()}</a>
        </section>
    }
}
