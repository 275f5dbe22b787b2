//! Previous/next pagination controls with a localized "page X of Y" label.

use dioxus::prelude::*;

use crate::core::format;
use crate::core::lang::use_lang;
use crate::t;

#[component]
pub fn Pagination(
    /// Zero-indexed current page.
    current: usize,
    total_pages: usize,
    on_change: EventHandler<usize>,
) -> Element {
    let lang = use_lang();
    let at_first = current == 0;
    let at_last = current + 1 >= total_pages;

    rsx! {
        div { class: "pagination",
            button {
                r#type: "button",
                class: "pagination__btn",
                disabled: at_first,
                onclick: move |_| {
                    if current > 0 {
                        on_change.call(current - 1);
                    }
                },
                {t!("pagination-prev")}
            }
            span { class: "pagination__info",
                {t!(
                    "pagination-page-info",
                    page = format::localize_count(current + 1, lang),
                    total = format::localize_count(total_pages.max(1), lang),
                )}
            }
            button {
                r#type: "button",
                class: "pagination__btn",
                disabled: at_last,
                onclick: move |_| {
                    if current + 1 < total_pages {
                        on_change.call(current + 1);
                    }
                },
                {t!("pagination-next")}
            }
        }
    }
}
