//! Business overview and the parameterized plant detail view. The three
//! plant pages render from the shared `content::plants` table.

use dioxus::prelude::*;

use crate::components::PageHero;
use crate::content::plants::{self, Plant};
use crate::core::format;
use crate::core::lang::{bi, use_lang, Lang};
use crate::nav::{BusinessSection, Navigator, Page};
use crate::views::PlaceholderView;

#[component]
pub fn BusinessView() -> Element {
    let lang = use_lang();
    let mut nav = Navigator::use_navigator();

    let intro = bi(
        "Our portfolio covers the three roles a modern grid needs: thermal baseload for the backbone of supply, fast-start peaking for stability, and solar generation for the energy transition.",
        "تغطي محفظتنا الأدوار الثلاثة التي تحتاجها الشبكة الحديثة: الحمل الأساسي الحراري عموداً فقرياً للتزويد، ومحطات الذروة سريعة الإقلاع للاستقرار، والتوليد الشمسي لمرحلة التحول في الطاقة.",
    );
    let om_heading = bi("Operations & Maintenance services", "خدمات التشغيل والصيانة");
    let om_blurb = bi(
        "Our O&M subsidiary offers third-party plant operation, drawing on the track record of our own fleet.",
        "تقدم شركتنا الفرعية للتشغيل والصيانة خدمات تشغيل المحطات للغير، استناداً إلى سجل أسطولنا.",
    );
    let om_cta = bi("Learn more", "اعرف المزيد");

    rsx! {
        PageHero { page: Page::Business(BusinessSection::Overview) }

        section { class: "page page-business",
            p { class: "page-business__intro", "data-reveal": "", {intro.resolve(lang)} }

            div { class: "page-business__grid",
                for plant in plants::PLANTS.iter() {
                    {plant_summary_card(nav, plant, lang)}
                }
            }

            div { class: "page-business__om", "data-reveal": "",
                h2 { {om_heading.resolve(lang)} }
                p { {om_blurb.resolve(lang)} }
                button {
                    r#type: "button",
                    class: "button button--link",
                    onclick: move |_| nav.go(Page::Business(BusinessSection::OmServices)),
                    {om_cta.resolve(lang)}
                }
            }
        }
    }
}

fn plant_summary_card(mut nav: Navigator, plant: &Plant, lang: Lang) -> Element {
    let section = plant.section;

    rsx! {
        button {
            r#type: "button",
            class: "plant-card plant-card--large",
            "data-reveal": "",
            onclick: move |_| nav.go(Page::Business(section)),
            h3 { class: "plant-card__name", {plant.name.resolve(lang)} }
            span { class: "plant-card__capacity",
                {format::localize_count(plant.capacity_mw as usize, lang)} " MW"
            }
            p { class: "plant-card__technology", {plant.technology.resolve(lang)} }
            p { class: "plant-card__location", {plant.location.resolve(lang)} }
        }
    }
}

#[component]
pub fn PlantView(section: BusinessSection) -> Element {
    let lang = use_lang();

    // Overview/OM sections never reach this view; guard anyway with the
    // generic placeholder rather than an error state.
    let Some(plant) = plants::by_section(section) else {
        return rsx! { PlaceholderView { page: Page::Business(section) } };
    };

    let facts_heading = bi("At a glance", "لمحة سريعة");
    let capacity_label = bi("Installed capacity", "القدرة المركّبة");
    let technology_label = bi("Technology", "التقنية");
    let commissioned_label = bi("Commissioned", "دخول الخدمة");
    let location_label = bi("Location", "الموقع");
    let highlights_heading = bi("Highlights", "أبرز النقاط");

    rsx! {
        PageHero { page: Page::Business(section) }

        section { class: "page page-plant",
            p { class: "page-plant__description", "data-reveal": "", {plant.description.resolve(lang)} }

            h2 { {facts_heading.resolve(lang)} }
            dl { class: "page-plant__facts", "data-reveal": "",
                div { class: "fact",
                    dt { {capacity_label.resolve(lang)} }
                    dd { {format::localize_count(plant.capacity_mw as usize, lang)} " MW" }
                }
                div { class: "fact",
                    dt { {technology_label.resolve(lang)} }
                    dd { {plant.technology.resolve(lang)} }
                }
                div { class: "fact",
                    dt { {commissioned_label.resolve(lang)} }
                    dd { {format::localize_count(plant.commissioned as usize, lang)} }
                }
                div { class: "fact",
                    dt { {location_label.resolve(lang)} }
                    dd { {plant.location.resolve(lang)} }
                }
            }

            h2 { {highlights_heading.resolve(lang)} }
            ul { class: "page-plant__highlights", "data-reveal": "",
                for highlight in plant.highlights.iter() {
                    li { {highlight.resolve(lang)} }
                }
            }
        }
    }
}
