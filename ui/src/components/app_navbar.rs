//! The site header: brand, section navigation with sub-page dropdowns, the
//! search toggle and the language toggle.
//!
//! The header element carries `id = "site-header"`; a window scroll
//! listener (armed once by the launcher) toggles its `navbar--scrolled`
//! class past a fixed offset.

use dioxus::prelude::*;

use crate::core::browser;
use crate::core::lang::{bi, Bilingual, Lang};
use crate::nav::{AboutSection, BusinessSection, Navigator, Page, SustainabilitySection};
use crate::t;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Company name; a proper noun, rendered in the script of the active
/// language but never translated through Fluent.
pub const BRAND: Bilingual = bi("Shams Levant Power", "شمس المشرق للطاقة");

#[component]
pub fn AppNavbar() -> Element {
    let mut lang_signal = use_context::<Signal<Lang>>();
    let lang = lang_signal();
    let mut nav = Navigator::use_navigator();
    let current = nav.current();

    let on_toggle_language = move |_| {
        let next = lang_signal().toggled();
        crate::core::lang::apply(next);
        lang_signal.set(next);
    };

    let sections: &[(Page, String, &[Page])] = &[
        (
            Page::About(AboutSection::Overview),
            t!("nav-about"),
            &[
                Page::About(AboutSection::Leadership),
                Page::About(AboutSection::Awards),
                Page::About(AboutSection::History),
                Page::About(AboutSection::Governance),
            ],
        ),
        (
            Page::Business(BusinessSection::Overview),
            t!("nav-business"),
            &[
                Page::Business(BusinessSection::AmmanEastIpp),
                Page::Business(BusinessSection::LevantIpp4),
                Page::Business(BusinessSection::MafraqSolar),
                Page::Business(BusinessSection::OmServices),
            ],
        ),
        (
            Page::Sustainability(SustainabilitySection::Overview),
            t!("nav-sustainability"),
            &[
                Page::Sustainability(SustainabilitySection::Safety),
                Page::Sustainability(SustainabilitySection::Environment),
                Page::Sustainability(SustainabilitySection::Community),
                Page::Sustainability(SustainabilitySection::Reports),
            ],
        ),
        (Page::News, t!("nav-news"), &[]),
        (Page::Careers, t!("nav-careers"), &[]),
        (Page::Contact, t!("nav-contact"), &[]),
    ];

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        header {
            id: browser::HEADER_ID,
            class: "navbar",
            div { class: "navbar__inner",
                button {
                    r#type: "button",
                    class: "navbar__brand",
                    onclick: move |_| nav.go(Page::Home),
                    span { class: "navbar__brand-mark", {BRAND.resolve(lang)} }
                    span { class: "navbar__brand-subtitle", {t!("tagline")} }
                }

                nav { class: "navbar__links",
                    button {
                        r#type: "button",
                        class: if current == Page::Home { "navbar__link navbar__link--active" } else { "navbar__link" },
                        onclick: move |_| nav.go(Page::Home),
                        {t!("nav-home")}
                    }
                    for (section, label, children) in sections.iter().cloned() {
                        {nav_section(nav, section, label, children, current, lang)}
                    }
                }

                div { class: "navbar__actions",
                    button {
                        r#type: "button",
                        class: "navbar__search-toggle",
                        aria_label: t!("nav-search-label"),
                        onclick: move |_| nav.toggle_search(),
                        "⌕"
                    }
                    button {
                        r#type: "button",
                        class: "navbar__lang-toggle",
                        aria_label: t!("nav-language-label"),
                        onclick: on_toggle_language,
                        {lang.toggle_label()}
                    }
                }
            }
        }
    }
}

fn nav_section(
    mut nav: Navigator,
    section: Page,
    label: String,
    children: &[Page],
    current: Page,
    lang: Lang,
) -> Element {
    let active = current == section || current.parent() == Some(section);
    let class = if active {
        "navbar__link navbar__link--active"
    } else {
        "navbar__link"
    };

    rsx! {
        div { class: "navbar__item",
            button {
                r#type: "button",
                class: class,
                onclick: move |_| nav.go(section),
                {label}
            }
            if !children.is_empty() {
                div { class: "navbar__dropdown",
                    for child in children.iter().copied() {
                        button {
                            r#type: "button",
                            class: "navbar__dropdown-link",
                            onclick: move |_| nav.go(child),
                            {child.title().resolve(lang)}
                        }
                    }
                }
            }
        }
    }
}
