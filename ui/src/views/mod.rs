//! The page catalog's renderers and the outlet that dispatches to them.

mod about;
mod awards;
mod business;
mod careers;
mod contact;
mod home;
mod leadership;
mod news;
mod placeholder;
mod search;
mod sustainability;

pub use about::AboutView;
pub use awards::AwardsView;
pub use business::{BusinessView, PlantView};
pub use careers::CareersView;
pub use contact::ContactView;
pub use home::HomeView;
pub use leadership::LeadershipView;
pub use news::NewsView;
pub use placeholder::PlaceholderView;
pub use search::SearchView;
pub use sustainability::{CommunityView, EnvironmentView, SafetyView, SustainabilityView};

use dioxus::prelude::*;

use crate::core::{browser, timing};
use crate::nav::{
    AboutSection, BusinessSection, Navigator, Page, SustainabilitySection,
};

/// Delay before the reveal observer is re-armed after a page replacement;
/// the fresh markup has to be in the DOM first.
const REVEAL_REARM_DELAY_MS: u64 = 90;

#[cfg(debug_assertions)]
fn log_outlet_render(page: Page) {
    // Lightweight render trace for diagnosing navigation refresh issues.
    browser::log(&format!("[nav] outlet render page={}", page.slug()));
}

/// Maps the current page to its renderer. Sub-pages without authored
/// content fall back to the generic placeholder, never to an error state.
#[component]
pub fn PageOutlet() -> Element {
    let nav = Navigator::use_navigator();
    let page = nav.current();

    #[cfg(debug_assertions)]
    {
        log_outlet_render(page);
    }

    // Entrance animations observe nodes that are discarded on every page
    // replacement, so the observer is re-armed per navigation.
    use_effect(move || {
        let _ = nav.current();
        spawn(async move {
            timing::sleep_ms(REVEAL_REARM_DELAY_MS).await;
            browser::arm_reveal_observer();
        });
    });

    match page {
        Page::Home => rsx! { HomeView {} },
        Page::About(AboutSection::Overview) => rsx! { AboutView {} },
        Page::About(AboutSection::Leadership) => rsx! { LeadershipView {} },
        Page::About(AboutSection::Awards) => rsx! { AwardsView {} },
        Page::Business(BusinessSection::Overview) => rsx! { BusinessView {} },
        Page::Business(
            section @ (BusinessSection::AmmanEastIpp
            | BusinessSection::LevantIpp4
            | BusinessSection::MafraqSolar),
        ) => rsx! { PlantView { section } },
        Page::Sustainability(SustainabilitySection::Overview) => rsx! { SustainabilityView {} },
        Page::Sustainability(SustainabilitySection::Safety) => rsx! { SafetyView {} },
        Page::Sustainability(SustainabilitySection::Environment) => rsx! { EnvironmentView {} },
        Page::Sustainability(SustainabilitySection::Community) => rsx! { CommunityView {} },
        Page::News => rsx! { NewsView {} },
        Page::Careers => rsx! { CareersView {} },
        Page::Contact => rsx! { ContactView {} },
        Page::Search => rsx! { SearchView {} },
        // Catalog entries whose content has not been authored yet.
        other => rsx! { PlaceholderView { page: other } },
    }
}
