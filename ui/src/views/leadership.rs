//! Leadership bios. Names stay in Latin script (proper nouns); roles and
//! bios are bilingual.

use dioxus::prelude::*;

use crate::components::PageHero;
use crate::core::lang::{bi, Bilingual, use_lang};
use crate::nav::{AboutSection, Page};

struct Leader {
    name: &'static str,
    role: Bilingual,
    bio: Bilingual,
}

static LEADERS: &[Leader] = &[
    Leader {
        name: "Omar Haddadin",
        role: bi("Chief Executive Officer", "الرئيس التنفيذي"),
        bio: bi(
            "Omar has led the company since 2018, after a decade running the Amman East plant. He chairs the industry association's generation committee.",
            "يقود عمر الشركة منذ عام ٢٠١٨ بعد عقد من إدارة محطة شرق عمان. ويرأس لجنة التوليد في جمعية قطاع الكهرباء.",
        ),
    },
    Leader {
        name: "Rana Khatib",
        role: bi("Chief Financial Officer", "المديرة المالية"),
        bio: bi(
            "Rana oversees project finance, treasury and investor reporting across the portfolio. She joined from a regional infrastructure fund.",
            "تشرف رنا على تمويل المشاريع والخزينة وتقارير المستثمرين عبر المحفظة. انضمت إلينا من صندوق إقليمي للبنية التحتية.",
        ),
    },
    Leader {
        name: "Khaled Nassar",
        role: bi("Chief Operating Officer", "مدير العمليات"),
        bio: bi(
            "Khaled is responsible for operations and maintenance at all three sites, with thirty years in thermal and renewable generation.",
            "يتولى خالد مسؤولية التشغيل والصيانة في المواقع الثلاثة، وله ثلاثون عاماً في التوليد الحراري والمتجدد.",
        ),
    },
    Leader {
        name: "Dana Qudah",
        role: bi("Director of Sustainability", "مديرة الاستدامة"),
        bio: bi(
            "Dana built the company's HSE management system and leads the community investment program and annual sustainability reporting.",
            "أسست دانة نظام إدارة الصحة والسلامة والبيئة في الشركة وتقود برنامج الاستثمار المجتمعي وتقارير الاستدامة السنوية.",
        ),
    },
];

#[component]
pub fn LeadershipView() -> Element {
    let lang = use_lang();

    rsx! {
        PageHero { page: Page::About(AboutSection::Leadership) }

        section { class: "page page-leadership",
            div { class: "page-leadership__grid",
                for leader in LEADERS.iter() {
                    div { class: "leader-card", "data-reveal": "",
                        h3 { class: "leader-card__name", {leader.name} }
                        span { class: "leader-card__role", {leader.role.resolve(lang)} }
                        p { class: "leader-card__bio", {leader.bio.resolve(lang)} }
                    }
                }
            }
        }
    }
}
