//! Generic fallback for catalog entries without authored content: hero
//! with the page's bilingual title, a fixed under-construction message and
//! one action back to home.

use dioxus::prelude::*;

use crate::components::PageHero;
use crate::nav::{Navigator, Page};
use crate::t;

#[component]
pub fn PlaceholderView(page: Page) -> Element {
    let mut nav = Navigator::use_navigator();

    rsx! {
        PageHero { page }
        section { class: "page page-placeholder",
            div { class: "page-placeholder__panel", "data-reveal": "",
                p { class: "page-placeholder__message", {t!("placeholder-message")} }
                button {
                    r#type: "button",
                    class: "button button--primary",
                    onclick: move |_| nav.go(Page::Home),
                    {t!("placeholder-back-home")}
                }
            }
        }
    }
}
