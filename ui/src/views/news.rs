//! News listing: featured slot, six-per-page grid, pagination.

use dioxus::prelude::*;

use crate::components::{NewsCard, PageHero, Pagination};
use crate::content::news::{self, ARTICLES};
use crate::nav::Page;

#[component]
pub fn NewsView() -> Element {
    let mut current_page = use_signal(|| 0usize);

    let total_pages = news::page_count(ARTICLES.len());
    let page_articles = news::page_slice(ARTICLES, current_page());
    let featured = news::featured(ARTICLES);
    let featured_id = featured.map(|a| a.id);

    rsx! {
        PageHero { page: Page::News }

        section { class: "page page-news",
            if let Some(article) = featured {
                div { class: "page-news__featured",
                    NewsCard { article: *article, featured: true }
                }
            }

            div { class: "page-news__grid",
                for article in page_articles
                    .iter()
                    .filter(|a| Some(a.id) != featured_id)
                    .copied()
                {
                    NewsCard { article, featured: false }
                }
            }

            if total_pages > 1 {
                Pagination {
                    current: current_page(),
                    total_pages,
                    on_change: move |page| current_page.set(page),
                }
            }
        }
    }
}
