//! Site search: case-insensitive substring match over the fixed candidate
//! set, recomputed a short interval after the last keystroke.

use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::components::PageHero;
use crate::content::search::{self, SearchEntry};
use crate::core::format;
use crate::core::lang::use_lang;
use crate::core::timing;
use crate::nav::{Navigator, Page};
use crate::t;

/// Interval after the last keystroke before results are computed. Purely a
/// recomputation saver; a superseded query firing late only produces a
/// harmless redundant overwrite.
const SEARCH_DEBOUNCE_MS: u64 = 250;

#[component]
pub fn SearchView() -> Element {
    let lang = use_lang();
    let mut nav = Navigator::use_navigator();
    let mut query = use_signal(String::new);
    let mut results = use_signal(|| Option::<Vec<SearchEntry>>::None);

    let debounce = use_coroutine(move |mut rx: UnboundedReceiver<String>| async move {
        while let Some(candidate) = rx.next().await {
            timing::sleep_ms(SEARCH_DEBOUNCE_MS).await;
            // Only the newest input is worth computing.
            if candidate == query() {
                results.set(search::match_query(&candidate));
            }
        }
    });

    let on_input = move |evt: FormEvent| {
        let value = evt.value();
        query.set(value.clone());
        debounce.send(value);
    };

    let body = match results() {
        None => rsx! {
            p { class: "page-search__prompt", {t!("search-prompt")} }
        },
        Some(entries) if entries.is_empty() => rsx! {
            p { class: "page-search__empty", {t!("search-no-results")} }
        },
        Some(entries) => rsx! {
            p { class: "page-search__count",
                {t!("search-results-count", count = format::localize_count(entries.len(), lang))}
            }
            ul { class: "page-search__results",
                for entry in entries.into_iter() {
                    li {
                        button {
                            r#type: "button",
                            class: "search-result",
                            onclick: move |_| nav.go(entry.page),
                            span { class: "search-result__category", {entry.category.resolve(lang)} }
                            h3 { class: "search-result__title", {entry.title.resolve(lang)} }
                            p { class: "search-result__blurb", {entry.blurb.resolve(lang)} }
                        }
                    }
                }
            }
        },
    };

    rsx! {
        PageHero { page: Page::Search }

        section { class: "page page-search",
            div { class: "page-search__box",
                input {
                    r#type: "search",
                    class: "page-search__input",
                    placeholder: t!("search-placeholder"),
                    value: "{query}",
                    oninput: on_input,
                }
            }
            {body}
        }
    }
}
