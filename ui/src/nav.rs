//! The page catalog and the navigation dispatcher.
//!
//! Pages are an in-memory concept: no URL or history integration, one
//! `Signal<Page>` provided through context is the whole routing state.
//! External identifiers stay flat string slugs (`"about-leadership"`), but
//! the type is hierarchical so breadcrumbs and fallbacks are structural
//! rather than convention.

use dioxus::prelude::*;

use crate::core::browser;
use crate::core::lang::{bi, Bilingual};
use crate::core::timing;

/// Delay before the `loaded` class is reapplied, replaying the fade-in.
const MOUNT_TRANSITION_DELAY_MS: u64 = 60;

/// Delay before scrolling to a home anchor from another page; the anchor
/// node only exists once the freshly mounted home markup is in the DOM.
const ANCHOR_MOUNT_DELAY_MS: u64 = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    About(AboutSection),
    Business(BusinessSection),
    Sustainability(SustainabilitySection),
    News,
    Careers,
    Contact,
    Search,
    Investors,
    Suppliers,
    MediaGallery,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AboutSection {
    Overview,
    Leadership,
    Awards,
    History,
    Governance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusinessSection {
    Overview,
    AmmanEastIpp,
    LevantIpp4,
    MafraqSolar,
    OmServices,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SustainabilitySection {
    Overview,
    Safety,
    Environment,
    Community,
    Reports,
}

/// Every renderable page, in navigation order. Also the search candidate
/// universe.
pub const CATALOG: &[Page] = &[
    Page::Home,
    Page::About(AboutSection::Overview),
    Page::About(AboutSection::Leadership),
    Page::About(AboutSection::Awards),
    Page::About(AboutSection::History),
    Page::About(AboutSection::Governance),
    Page::Business(BusinessSection::Overview),
    Page::Business(BusinessSection::AmmanEastIpp),
    Page::Business(BusinessSection::LevantIpp4),
    Page::Business(BusinessSection::MafraqSolar),
    Page::Business(BusinessSection::OmServices),
    Page::Sustainability(SustainabilitySection::Overview),
    Page::Sustainability(SustainabilitySection::Safety),
    Page::Sustainability(SustainabilitySection::Environment),
    Page::Sustainability(SustainabilitySection::Community),
    Page::Sustainability(SustainabilitySection::Reports),
    Page::News,
    Page::Careers,
    Page::Contact,
    Page::Search,
    Page::Investors,
    Page::Suppliers,
    Page::MediaGallery,
];

impl Page {
    /// The flat string identifier used by callers of `navigate`.
    pub fn slug(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About(AboutSection::Overview) => "about",
            Page::About(AboutSection::Leadership) => "about-leadership",
            Page::About(AboutSection::Awards) => "about-awards",
            Page::About(AboutSection::History) => "about-history",
            Page::About(AboutSection::Governance) => "about-governance",
            Page::Business(BusinessSection::Overview) => "business",
            Page::Business(BusinessSection::AmmanEastIpp) => "business-amman-east-ipp",
            Page::Business(BusinessSection::LevantIpp4) => "business-levant-ipp4",
            Page::Business(BusinessSection::MafraqSolar) => "business-mafraq-solar",
            Page::Business(BusinessSection::OmServices) => "business-om-services",
            Page::Sustainability(SustainabilitySection::Overview) => "sustainability",
            Page::Sustainability(SustainabilitySection::Safety) => "sustainability-safety",
            Page::Sustainability(SustainabilitySection::Environment) => {
                "sustainability-environment"
            }
            Page::Sustainability(SustainabilitySection::Community) => "sustainability-community",
            Page::Sustainability(SustainabilitySection::Reports) => "sustainability-reports",
            Page::News => "news",
            Page::Careers => "careers",
            Page::Contact => "contact",
            Page::Search => "search",
            Page::Investors => "investors",
            Page::Suppliers => "suppliers",
            Page::MediaGallery => "media-gallery",
        }
    }

    /// Total over all strings: unknown identifiers fall back to home.
    /// Deliberate policy, not an omission.
    pub fn parse(slug: &str) -> Page {
        CATALOG
            .iter()
            .copied()
            .find(|page| page.slug() == slug)
            .unwrap_or(Page::Home)
    }

    /// Bilingual display title, used by heroes, breadcrumbs, the search
    /// candidate set and the placeholder renderer.
    pub fn title(self) -> Bilingual {
        match self {
            Page::Home => bi("Home", "الرئيسية"),
            Page::About(AboutSection::Overview) => bi("About Us", "من نحن"),
            Page::About(AboutSection::Leadership) => bi("Our Leadership", "قيادتنا"),
            Page::About(AboutSection::Awards) => bi("Awards & Recognition", "الجوائز والتكريم"),
            Page::About(AboutSection::History) => bi("Our History", "تاريخنا"),
            Page::About(AboutSection::Governance) => bi("Corporate Governance", "الحوكمة المؤسسية"),
            Page::Business(BusinessSection::Overview) => bi("Our Business", "أعمالنا"),
            Page::Business(BusinessSection::AmmanEastIpp) => {
                bi("Amman East Power Plant", "محطة شرق عمان لتوليد الطاقة")
            }
            Page::Business(BusinessSection::LevantIpp4) => {
                bi("Levant Peaking Plant (IPP4)", "محطة المشرق للذروة (IPP4)")
            }
            Page::Business(BusinessSection::MafraqSolar) => {
                bi("Mafraq Solar Park", "مجمع المفرق للطاقة الشمسية")
            }
            Page::Business(BusinessSection::OmServices) => {
                bi("Operations & Maintenance", "التشغيل والصيانة")
            }
            Page::Sustainability(SustainabilitySection::Overview) => bi("Sustainability", "الاستدامة"),
            Page::Sustainability(SustainabilitySection::Safety) => {
                bi("Health & Safety", "الصحة والسلامة")
            }
            Page::Sustainability(SustainabilitySection::Environment) => bi("Environment", "البيئة"),
            Page::Sustainability(SustainabilitySection::Community) => {
                bi("Community Programs", "البرامج المجتمعية")
            }
            Page::Sustainability(SustainabilitySection::Reports) => {
                bi("Sustainability Reports", "تقارير الاستدامة")
            }
            Page::News => bi("News & Media", "الأخبار والإعلام"),
            Page::Careers => bi("Careers", "الوظائف"),
            Page::Contact => bi("Contact Us", "اتصل بنا"),
            Page::Search => bi("Search", "البحث"),
            Page::Investors => bi("Investor Relations", "علاقات المستثمرين"),
            Page::Suppliers => bi("Suppliers", "الموردون"),
            Page::MediaGallery => bi("Media Gallery", "معرض الوسائط"),
        }
    }

    /// Structural parent (the section overview), if any.
    pub fn parent(self) -> Option<Page> {
        match self {
            Page::About(sub) if sub != AboutSection::Overview => {
                Some(Page::About(AboutSection::Overview))
            }
            Page::Business(sub) if sub != BusinessSection::Overview => {
                Some(Page::Business(BusinessSection::Overview))
            }
            Page::Sustainability(sub) if sub != SustainabilitySection::Overview => {
                Some(Page::Sustainability(SustainabilitySection::Overview))
            }
            _ => None,
        }
    }

    /// Breadcrumb trail: home, then the section overview, then the page
    /// itself. Derived from the hierarchy, never hand-maintained.
    pub fn breadcrumbs(self) -> Vec<Crumb> {
        let mut trail = vec![Crumb {
            label: Page::Home.title(),
            page: Page::Home,
        }];
        if self == Page::Home {
            return trail;
        }
        if let Some(parent) = self.parent() {
            trail.push(Crumb {
                label: parent.title(),
                page: parent,
            });
        }
        trail.push(Crumb {
            label: self.title(),
            page: self,
        });
        trail
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crumb {
    pub label: Bilingual,
    pub page: Page,
}

/// Target of the search toggle: a plain two-state flip, not a stack.
pub fn search_toggle_target(current: Page) -> Page {
    if current == Page::Search {
        Page::Home
    } else {
        Page::Search
    }
}

/// Routing state: one mutable current-page signal, written only here.
#[derive(Clone, Copy)]
pub struct Navigator {
    current: Signal<Page>,
}

impl Navigator {
    /// Install the current-page signal into context. Launcher-only.
    pub fn provide() -> Self {
        Self {
            current: use_context_provider(|| Signal::new(Page::Home)),
        }
    }

    /// Grab the navigator anywhere below the launcher.
    pub fn use_navigator() -> Self {
        Self {
            current: use_context::<Signal<Page>>(),
        }
    }

    /// Reading subscribes the caller to page changes.
    pub fn current(&self) -> Page {
        (self.current)()
    }

    /// String-keyed dispatch, total over all inputs. `#`-prefixed targets
    /// are home-view anchors; everything else resolves through
    /// `Page::parse` (home fallback).
    pub fn navigate(&mut self, target: &str) {
        if let Some(anchor) = target.strip_prefix('#') {
            self.go_anchor(anchor.to_string());
        } else {
            self.go(Page::parse(target));
        }
    }

    /// Typed navigation: update the signal, reset scroll, replay the mount
    /// fade on the content shell.
    pub fn go(&mut self, page: Page) {
        self.current.set(page);
        browser::scroll_to_top();
        browser::shell_set_loaded(false);
        spawn(async move {
            timing::sleep_ms(MOUNT_TRANSITION_DELAY_MS).await;
            browser::shell_set_loaded(true);
        });
    }

    /// Anchors only resolve against mounted home markup: when called away
    /// from home, render home first and defer the scroll.
    fn go_anchor(&mut self, anchor: String) {
        if self.current() == Page::Home {
            browser::scroll_to_anchor(&anchor);
        } else {
            self.go(Page::Home);
            spawn(async move {
                timing::sleep_ms(ANCHOR_MOUNT_DELAY_MS).await;
                browser::scroll_to_anchor(&anchor);
            });
        }
    }

    pub fn toggle_search(&mut self) {
        let target = search_toggle_target(self.current());
        self.go(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_catalog_slug_parses_back_to_itself() {
        for page in CATALOG.iter().copied() {
            assert_eq!(Page::parse(page.slug()), page, "slug {}", page.slug());
        }
    }

    #[test]
    fn slugs_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for page in CATALOG.iter() {
            assert!(seen.insert(page.slug()), "duplicate slug {}", page.slug());
        }
    }

    #[test]
    fn unknown_identifiers_fall_back_to_home() {
        for junk in ["", "about-us", "HOME", "news/42", "بحث", "business-ipp9"] {
            assert_eq!(Page::parse(junk), Page::Home);
        }
    }

    #[test]
    fn search_toggle_is_a_two_state_flip() {
        assert_eq!(search_toggle_target(Page::Search), Page::Home);
        assert_eq!(search_toggle_target(Page::Home), Page::Search);
        assert_eq!(search_toggle_target(Page::Careers), Page::Search);
    }

    #[test]
    fn breadcrumbs_follow_the_hierarchy() {
        let trail = Page::About(AboutSection::Leadership).breadcrumbs();
        let pages: Vec<Page> = trail.iter().map(|c| c.page).collect();
        assert_eq!(
            pages,
            vec![
                Page::Home,
                Page::About(AboutSection::Overview),
                Page::About(AboutSection::Leadership)
            ]
        );
    }

    #[test]
    fn top_level_pages_have_two_crumbs_home_has_one() {
        assert_eq!(Page::Home.breadcrumbs().len(), 1);
        assert_eq!(Page::News.breadcrumbs().len(), 2);
        assert_eq!(Page::Business(BusinessSection::Overview).breadcrumbs().len(), 2);
    }

    #[test]
    fn every_page_has_both_title_variants() {
        for page in CATALOG.iter() {
            let title = page.title();
            assert!(!title.en.is_empty());
            assert!(!title.ar.is_empty());
        }
    }
}
