//! Home: video hero, key figures, section previews and the news strip.
//! The preview sections carry the anchor ids the `#`-prefixed navigation
//! targets resolve against.

use dioxus::prelude::*;

use crate::components::{HeroVideo, NewsCard};
use crate::content::{news, plants};
use crate::core::format;
use crate::core::lang::{bi, use_lang};
use crate::nav::{AboutSection, BusinessSection, Navigator, Page};
use crate::t;

#[component]
pub fn HomeView() -> Element {
    let lang = use_lang();
    let mut nav = Navigator::use_navigator();

    let total_capacity: usize = plants::PLANTS.iter().map(|p| p.capacity_mw as usize).sum();
    let preview = news::home_preview(news::ARTICLES);

    let about_blurb = bi(
        "Shams Levant Power develops, owns and operates power-generation assets in Jordan. Since our first plant came online in 2009 we have supplied a significant share of the kingdom's electricity, safely and around the clock.",
        "تقوم شمس المشرق للطاقة بتطوير وتملّك وتشغيل أصول توليد الكهرباء في الأردن. ومنذ دخول محطتنا الأولى الخدمة عام ٢٠٠٩ ونحن نزوّد المملكة بحصة مهمة من كهربائها بأمان وعلى مدار الساعة.",
    );

    rsx! {
        section { class: "home-hero",
            HeroVideo {}
            div { class: "home-hero__overlay",
                h1 { class: "home-hero__title", {t!("home-hero-title")} }
                p { class: "home-hero__subtitle", {t!("home-hero-subtitle")} }
                div { class: "home-hero__actions",
                    button {
                        r#type: "button",
                        class: "button button--primary",
                        onclick: move |_| nav.navigate("#home-business"),
                        {t!("home-hero-cta-business")}
                    }
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        onclick: move |_| nav.go(Page::About(AboutSection::Overview)),
                        {t!("home-hero-cta-about")}
                    }
                }
            }
        }

        section { class: "home-stats", "data-reveal": "",
            div { class: "home-stats__grid",
                div { class: "home-stat",
                    span { class: "home-stat__value", {format::localize_count(total_capacity, lang)} " MW" }
                    span { class: "home-stat__label", {t!("home-stat-capacity")} }
                }
                div { class: "home-stat",
                    span { class: "home-stat__value", {format::localize_count(plants::PLANTS.len(), lang)} }
                    span { class: "home-stat__label", {t!("home-stat-plants")} }
                }
                div { class: "home-stat",
                    span { class: "home-stat__value", {format::localize_count(5_000_000, lang)} }
                    span { class: "home-stat__label", {t!("home-stat-safe-hours")} }
                }
                div { class: "home-stat",
                    span { class: "home-stat__value", {format::localize_count(380, lang)} }
                    span { class: "home-stat__label", {t!("home-stat-employees")} }
                }
            }
        }

        section { id: "home-about", class: "home-section", "data-reveal": "",
            h2 { class: "home-section__heading", {t!("home-about-heading")} }
            p { class: "home-section__body", {about_blurb.resolve(lang)} }
            button {
                r#type: "button",
                class: "button button--link",
                onclick: move |_| nav.go(Page::About(AboutSection::Overview)),
                {t!("home-about-cta")}
            }
        }

        section { id: "home-business", class: "home-section", "data-reveal": "",
            h2 { class: "home-section__heading", {t!("home-business-heading")} }
            div { class: "home-business__grid",
                for plant in plants::PLANTS.iter() {
                    {
                        let section = plant.section;
                        rsx! {
                            button {
                                r#type: "button",
                                class: "plant-card",
                                onclick: move |_| nav.go(Page::Business(section)),
                                h3 { class: "plant-card__name", {plant.name.resolve(lang)} }
                                span { class: "plant-card__capacity",
                                    {format::localize_count(plant.capacity_mw as usize, lang)} " MW"
                                }
                                p { class: "plant-card__technology", {plant.technology.resolve(lang)} }
                            }
                        }
                    }
                }
            }
        }

        section { id: "home-news", class: "home-section", "data-reveal": "",
            h2 { class: "home-section__heading", {t!("home-news-heading")} }
            div { class: "home-news__grid",
                for article in preview.iter().copied() {
                    NewsCard { article, featured: false }
                }
            }
            button {
                r#type: "button",
                class: "button button--link",
                onclick: move |_| nav.go(Page::News),
                {t!("home-news-cta")}
            }
        }
    }
}
