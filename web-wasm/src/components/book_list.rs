//! 読書リスト（テーマごと）

use portfolio_common::site::{with_last_flag, BookTheme};
use leptos::prelude::*;

#[component]
pub fn BookList(themes: Vec<BookTheme>) -> impl IntoView {
    let sections = themes
        .iter()
        .map(|theme| {
            let books = theme.listed();
            let rows = with_last_flag(&books)
                .map(|(book, last)| {
                    view! {
                        <li class=if last { "book last" } else { "book" }>
                            <span class="book-number">{book.number}</span>
                            <div>
                                <p class="book-title">{book.title.clone()}</p>
                                <p class="book-author text-muted">{book.author.clone()}</p>
                            </div>
                        </li>
                    }
                })
                .collect_view();

            view! {
                <div class="book-theme">
                    <h3>{theme.theme.clone()}</h3>
                    <ul class="book-timeline">{rows}</ul>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="section books">
            <h2>"Reading List"</h2>
            {sections}
        </section>
    }
}
