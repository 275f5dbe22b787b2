//! The sustainability section: overview plus the safety, environment and
//! community pages. The safety page carries the fixed external
//! standards-body links in its sidebar.

use dioxus::prelude::*;

use crate::components::PageHero;
use crate::core::lang::{bi, Bilingual, use_lang};
use crate::nav::{Navigator, Page, SustainabilitySection};

const SUB_PAGES: &[Page] = &[
    Page::Sustainability(SustainabilitySection::Safety),
    Page::Sustainability(SustainabilitySection::Environment),
    Page::Sustainability(SustainabilitySection::Community),
    Page::Sustainability(SustainabilitySection::Reports),
];

#[component]
pub fn SustainabilityView() -> Element {
    let lang = use_lang();
    let mut nav = Navigator::use_navigator();

    let intro = bi(
        "Sustainability at Shams Levant Power rests on three programs: safety for our people, protection of the environment around our sites, and investment in our host communities. Each program has named owners, public targets and third-party audits.",
        "تقوم الاستدامة في شمس المشرق للطاقة على ثلاثة برامج: الحفاظ على سلامة العاملين لدينا، وحماية البيئة المحيطة بمواقعنا، والاستثمار في مجتمعاتنا المضيفة. ولكل برنامج مسؤولون محددون وأهداف معلنة وتدقيق من طرف ثالث.",
    );

    rsx! {
        PageHero { page: Page::Sustainability(SustainabilitySection::Overview) }

        section { class: "page page-sustainability",
            p { class: "page-sustainability__intro", "data-reveal": "", {intro.resolve(lang)} }

            div { class: "page-sustainability__subpages",
                for page in SUB_PAGES.iter().copied() {
                    button {
                        r#type: "button",
                        class: "subpage-card",
                        "data-reveal": "",
                        onclick: move |_| nav.go(page),
                        {page.title().resolve(lang)}
                    }
                }
            }
        }
    }
}

struct SidebarLink {
    label: &'static str,
    href: &'static str,
}

// Static external references, not integrations.
static SAFETY_LINKS: &[SidebarLink] = &[
    SidebarLink {
        label: "ISO 45001 — Occupational health & safety",
        href: "https://www.iso.org/iso-45001-occupational-health-and-safety.html",
    },
    SidebarLink {
        label: "ISO 14001 — Environmental management",
        href: "https://www.iso.org/iso-14001-environmental-management.html",
    },
    SidebarLink {
        label: "Ministry of Energy and Mineral Resources",
        href: "https://www.memr.gov.jo/",
    },
    SidebarLink {
        label: "Ministry of Environment",
        href: "https://www.moenv.gov.jo/",
    },
];

#[component]
pub fn SafetyView() -> Element {
    let lang = use_lang();

    let policy = bi(
        "Our zero-harm policy applies to employees, contractors and visitors alike. Every site runs a permit-to-work system, daily toolbox talks and a stop-work authority that any worker can invoke without consequence. The fleet has passed five million working hours without a lost-time injury.",
        "تنطبق سياسة انعدام الأذى لدينا على الموظفين والمقاولين والزوار على حد سواء. ويعمل كل موقع بنظام تصاريح العمل وجلسات توعية يومية وصلاحية إيقاف للعمل يمكن لأي عامل استخدامها دون أي تبعات. وقد تجاوز أسطولنا خمسة ملايين ساعة عمل دون إصابة مضيّعة للوقت.",
    );
    let certifications = bi(
        "All three sites are certified to ISO 45001 for occupational health and safety and ISO 14001 for environmental management, with surveillance audits every year.",
        "حصلت مواقعنا الثلاثة على شهادة ISO 45001 للصحة والسلامة المهنية وISO 14001 للإدارة البيئية، مع تدقيق رقابي كل عام.",
    );
    let links_heading = bi("Standards & references", "المعايير والمراجع");

    rsx! {
        PageHero { page: Page::Sustainability(SustainabilitySection::Safety) }

        section { class: "page page-safety",
            div { class: "page-safety__layout",
                div { class: "page-safety__main",
                    p { "data-reveal": "", {policy.resolve(lang)} }
                    p { "data-reveal": "", {certifications.resolve(lang)} }
                }
                aside { class: "page-safety__sidebar", "data-reveal": "",
                    h3 { {links_heading.resolve(lang)} }
                    ul {
                        for link in SAFETY_LINKS.iter() {
                            li {
                                a {
                                    href: link.href,
                                    target: "_blank",
                                    rel: "noopener",
                                    {link.label}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

struct ProgramItem {
    title: Bilingual,
    body: Bilingual,
}

static ENVIRONMENT_PROGRAMS: &[ProgramItem] = &[
    ProgramItem {
        title: bi("Emissions monitoring", "رصد الانبعاثات"),
        body: bi(
            "Continuous stack monitoring at both thermal plants, reported quarterly to the regulator.",
            "رصد مستمر للمداخن في المحطتين الحراريتين، مع تقارير فصلية إلى الجهة الرقابية.",
        ),
    },
    ProgramItem {
        title: bi("Water stewardship", "الإشراف المائي"),
        body: bi(
            "Treated wastewater is the primary cooling source at Amman East, sparing the aquifer.",
            "المياه العادمة المعالجة هي مصدر التبريد الرئيسي في شرق عمان، حفاظاً على الخزان الجوفي.",
        ),
    },
    ProgramItem {
        title: bi("Biodiversity", "التنوع الحيوي"),
        body: bi(
            "Seasonal surveys around the Mafraq park track resident and migratory species.",
            "مسوح موسمية حول مجمع المفرق تتابع الأنواع المقيمة والمهاجرة.",
        ),
    },
];

#[component]
pub fn EnvironmentView() -> Element {
    let lang = use_lang();

    let intro = bi(
        "We operate under site environmental permits and report our footprint publicly every year.",
        "نعمل بموجب تصاريح بيئية لكل موقع وننشر بصمتنا البيئية علناً كل عام.",
    );

    rsx! {
        PageHero { page: Page::Sustainability(SustainabilitySection::Environment) }

        section { class: "page page-environment",
            p { "data-reveal": "", {intro.resolve(lang)} }
            div { class: "page-environment__programs",
                for program in ENVIRONMENT_PROGRAMS.iter() {
                    div { class: "program-card", "data-reveal": "",
                        h3 { {program.title.resolve(lang)} }
                        p { {program.body.resolve(lang)} }
                    }
                }
            }
        }
    }
}

static COMMUNITY_PROGRAMS: &[ProgramItem] = &[
    ProgramItem {
        title: bi("Engineering scholarships", "منح الهندسة"),
        body: bi(
            "Ten full scholarships a year for students from plant-adjacent communities, with paid placements.",
            "عشر منح كاملة سنوياً لطلبة من المجتمعات المجاورة للمحطات، مع فترات تدريب مدفوعة.",
        ),
    },
    ProgramItem {
        title: bi("Local hiring & procurement", "التوظيف والشراء المحلي"),
        body: bi(
            "Eight in ten site roles are filled locally, and local suppliers get first consideration.",
            "ثمانية من كل عشرة وظائف في المواقع تُشغل محلياً، وللموردين المحليين أولوية النظر.",
        ),
    },
    ProgramItem {
        title: bi("Neighbourhood infrastructure", "البنية التحتية للجوار"),
        body: bi(
            "School refurbishments, clinic equipment and road-safety upgrades around all three sites.",
            "تجديد المدارس وتجهيز العيادات وتحسينات السلامة المرورية حول المواقع الثلاثة.",
        ),
    },
];

#[component]
pub fn CommunityView() -> Element {
    let lang = use_lang();

    let intro = bi(
        "A power plant is a decades-long neighbour. Our community program is planned with municipal councils and reviewed with them every year.",
        "محطة الكهرباء جارٌ لعقود. يُخطط برنامجنا المجتمعي مع المجالس البلدية ويُراجع معها كل عام.",
    );

    rsx! {
        PageHero { page: Page::Sustainability(SustainabilitySection::Community) }

        section { class: "page page-community",
            p { "data-reveal": "", {intro.resolve(lang)} }
            div { class: "page-community__programs",
                for program in COMMUNITY_PROGRAMS.iter() {
                    div { class: "program-card", "data-reveal": "",
                        h3 { {program.title.resolve(lang)} }
                        p { {program.body.resolve(lang)} }
                    }
                }
            }
        }
    }
}
