//! Standard page hero: bilingual title over a breadcrumb trail derived
//! from the page hierarchy.

use dioxus::prelude::*;

use crate::core::lang::use_lang;
use crate::nav::{Navigator, Page};

#[component]
pub fn PageHero(page: Page) -> Element {
    let lang = use_lang();
    let mut nav = Navigator::use_navigator();
    let crumbs = page.breadcrumbs();
    let last = crumbs.len().saturating_sub(1);

    rsx! {
        section { class: "page-hero",
            div { class: "page-hero__inner",
                nav { class: "page-hero__breadcrumbs", aria_label: "breadcrumbs",
                    for (index, crumb) in crumbs.into_iter().enumerate() {
                        if index < last {
                            button {
                                r#type: "button",
                                class: "page-hero__crumb page-hero__crumb--link",
                                onclick: move |_| nav.go(crumb.page),
                                {crumb.label.resolve(lang)}
                            }
                            span { class: "page-hero__crumb-sep", aria_hidden: "true", "›" }
                        } else {
                            span { class: "page-hero__crumb page-hero__crumb--current",
                                {crumb.label.resolve(lang)}
                            }
                        }
                    }
                }
                h1 { class: "page-hero__title", {page.title().resolve(lang)} }
            }
        }
    }
}
