//! Awards and recognition, newest first, from the static table.

use dioxus::prelude::*;

use crate::components::PageHero;
use crate::content::awards::AWARDS;
use crate::core::format;
use crate::core::lang::use_lang;
use crate::nav::{AboutSection, Page};

#[component]
pub fn AwardsView() -> Element {
    let lang = use_lang();

    rsx! {
        PageHero { page: Page::About(AboutSection::Awards) }

        section { class: "page page-awards",
            ul { class: "page-awards__list",
                for award in AWARDS.iter() {
                    li { class: "award-row", "data-reveal": "",
                        span { class: "award-row__year",
                            {format::localize_count(award.year as usize, lang)}
                        }
                        div { class: "award-row__detail",
                            h3 { class: "award-row__title", {award.title.resolve(lang)} }
                            span { class: "award-row__issuer", {award.issuer.resolve(lang)} }
                        }
                    }
                }
            }
        }
    }
}
