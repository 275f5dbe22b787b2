//! About overview: company profile, mission/vision, values and links into
//! the section's sub-pages.

use dioxus::prelude::*;

use crate::components::PageHero;
use crate::core::lang::{bi, Bilingual, use_lang};
use crate::nav::{AboutSection, Navigator, Page};

struct ValueCard {
    title: Bilingual,
    body: Bilingual,
}

static VALUES: &[ValueCard] = &[
    ValueCard {
        title: bi("Safety first", "السلامة أولاً"),
        body: bi(
            "No megawatt is worth an injury. Every task starts with a risk assessment and the authority to stop work.",
            "لا ميغاواط يستحق إصابة. كل مهمة تبدأ بتقييم للمخاطر ومعها صلاحية إيقاف العمل.",
        ),
    },
    ValueCard {
        title: bi("Reliability", "الموثوقية"),
        body: bi(
            "The grid counts on us. We plan, maintain and operate so that our plants deliver whenever they are dispatched.",
            "الشبكة تعتمد علينا. نخطط ونصون ونشغّل لتلبي محطاتنا التحميل متى ما طُلبت.",
        ),
    },
    ValueCard {
        title: bi("Local commitment", "الالتزام المحلي"),
        body: bi(
            "We hire, train and buy locally, and we invest in the communities that host our plants.",
            "نوظّف وندرّب ونشتري محلياً، ونستثمر في المجتمعات التي تستضيف محطاتنا.",
        ),
    },
];

const SUB_PAGES: &[Page] = &[
    Page::About(AboutSection::Leadership),
    Page::About(AboutSection::Awards),
    Page::About(AboutSection::History),
    Page::About(AboutSection::Governance),
];

#[component]
pub fn AboutView() -> Element {
    let lang = use_lang();
    let mut nav = Navigator::use_navigator();

    let profile = bi(
        "Shams Levant Power is an independent power producer headquartered in Amman. We own and operate a 700 MW generation portfolio spanning combined-cycle baseload, fast-start peaking and utility-scale solar, all contracted to the national grid under long-term power purchase agreements.",
        "شمس المشرق للطاقة منتج مستقل للكهرباء مقره عمان. نملك ونشغّل محفظة توليد بقدرة ٧٠٠ ميغاواط تشمل الحمل الأساسي بالدورة المركبة، ومحطات الذروة سريعة الإقلاع، والطاقة الشمسية على النطاق المرفقي، وجميعها متعاقد عليها مع الشبكة الوطنية بموجب اتفاقيات شراء طاقة طويلة الأمد.",
    );
    let mission = bi(
        "Our mission is to generate safe, reliable and increasingly clean electricity for Jordan.",
        "رسالتنا توليد كهرباء آمنة وموثوقة ومتزايدة النظافة للأردن.",
    );
    let vision = bi(
        "Our vision is to be the region's reference operator for performance, safety and community partnership.",
        "رؤيتنا أن نكون المشغّل المرجعي في المنطقة في الأداء والسلامة والشراكة المجتمعية.",
    );
    let mission_heading = bi("Our Mission", "رسالتنا");
    let vision_heading = bi("Our Vision", "رؤيتنا");
    let values_heading = bi("Our Values", "قيمنا");
    let explore_heading = bi("Explore this section", "استكشف هذا القسم");

    rsx! {
        PageHero { page: Page::About(AboutSection::Overview) }

        section { class: "page page-about",
            p { class: "page-about__profile", "data-reveal": "", {profile.resolve(lang)} }

            div { class: "page-about__mission-grid",
                div { class: "page-about__panel", "data-reveal": "",
                    h2 { {mission_heading.resolve(lang)} }
                    p { {mission.resolve(lang)} }
                }
                div { class: "page-about__panel", "data-reveal": "",
                    h2 { {vision_heading.resolve(lang)} }
                    p { {vision.resolve(lang)} }
                }
            }

            h2 { class: "page-about__values-heading", {values_heading.resolve(lang)} }
            div { class: "page-about__values", "data-reveal": "",
                for value in VALUES.iter() {
                    div { class: "value-card",
                        h3 { {value.title.resolve(lang)} }
                        p { {value.body.resolve(lang)} }
                    }
                }
            }

            h2 { class: "page-about__explore-heading", {explore_heading.resolve(lang)} }
            div { class: "page-about__subpages",
                for page in SUB_PAGES.iter().copied() {
                    button {
                        r#type: "button",
                        class: "subpage-card",
                        onclick: move |_| nav.go(page),
                        {page.title().resolve(lang)}
                    }
                }
            }
        }
    }
}
