//! Site footer: company blurb, quick links, contact details and the fixed
//! external standards-body links (static hrefs, not integrations).

use dioxus::prelude::*;

use crate::components::app_navbar::BRAND;
use crate::core::lang::{bi, use_lang};
use crate::nav::{AboutSection, BusinessSection, Navigator, Page, SustainabilitySection};
use crate::t;

const QUICK_LINKS: &[Page] = &[
    Page::About(AboutSection::Overview),
    Page::Business(BusinessSection::Overview),
    Page::Sustainability(SustainabilitySection::Overview),
    Page::News,
    Page::Careers,
    Page::Contact,
];

const STANDARDS_LINKS: &[(&str, &str)] = &[
    ("ISO 45001 — Occupational health & safety", "https://www.iso.org/iso-45001-occupational-health-and-safety.html"),
    ("ISO 14001 — Environmental management", "https://www.iso.org/iso-14001-environmental-management.html"),
    ("Ministry of Energy and Mineral Resources", "https://www.memr.gov.jo/"),
];

#[component]
pub fn AppFooter() -> Element {
    let lang = use_lang();
    let mut nav = Navigator::use_navigator();

    let blurb = bi(
        "An independent power producer generating reliable electricity for Jordan since 2009.",
        "منتج مستقل للطاقة يولّد كهرباء موثوقة للأردن منذ عام ٢٠٠٩.",
    );

    rsx! {
        footer { class: "footer",
            div { class: "footer__inner",
                div { class: "footer__column footer__column--brand",
                    h3 { {BRAND.resolve(lang)} }
                    p { {blurb.resolve(lang)} }
                }

                div { class: "footer__column",
                    h4 { {t!("footer-links-heading")} }
                    ul {
                        for page in QUICK_LINKS.iter().copied() {
                            li {
                                button {
                                    r#type: "button",
                                    class: "footer__link",
                                    onclick: move |_| nav.go(page),
                                    {page.title().resolve(lang)}
                                }
                            }
                        }
                    }
                }

                div { class: "footer__column",
                    h4 { {t!("footer-contact-heading")} }
                    ul {
                        li { "P.O. Box 941082, Amman 11194, Jordan" }
                        li { "+962 6 580 0000" }
                        li { "info@shamslevant.example" }
                    }
                }

                div { class: "footer__column",
                    h4 { {t!("footer-standards-heading")} }
                    ul {
                        for (label, href) in STANDARDS_LINKS.iter().copied() {
                            li {
                                a {
                                    class: "footer__link",
                                    href: href,
                                    target: "_blank",
                                    rel: "noopener",
                                    {label}
                                }
                            }
                        }
                    }
                }
            }

            div { class: "footer__legal",
                span { {t!("footer-rights")} }
            }
        }
    }
}
