//! メインアプリケーションコンポーネント

use crate::components::{
    back_to_top::BackToTop, blog::BlogList, header::Header, home::Home, python_runner::PythonRunner,
};
use crate::data;
use leptos::prelude::*;

/// 表示中のページ
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Home,
    Blog,
    Python,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::Blog, Page::Python];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Blog => "Blog",
            Page::Python => "Python",
        }
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let site = data::site_data();
    let posts = data::posts();
    let (page, set_page) = signal(Page::default());

    let links = site.navbar.clone();
    let social = site.navbar_social().cloned().collect::<Vec<_>>();
    let name = site.name.clone();

    // ページを切り替えると前のページの状態は破棄される
    let content = move || match page.get() {
        Page::Home => view! { <Home site=site.clone() /> }.into_any(),
        Page::Blog => view! { <BlogList posts=posts.clone() /> }.into_any(),
        Page::Python => view! { <PythonRunner /> }.into_any(),
    };

    view! {
        <div class="container">
            <Header name=name links=links social=social page=page set_page=set_page />
            <main>{content}</main>
            <BackToTop />
        </div>
    }
}
