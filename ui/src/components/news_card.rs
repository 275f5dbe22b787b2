//! Card rendering for one news article. "Read full article" is a labeled
//! stub action standing in for a future detail flow.

use dioxus::prelude::*;

use crate::content::news::NewsArticle;
use crate::core::browser;
use crate::core::format;
use crate::core::lang::use_lang;
use crate::t;

#[component]
pub fn NewsCard(article: NewsArticle, featured: bool) -> Element {
    let lang = use_lang();

    let class = if featured {
        "news-card news-card--featured"
    } else {
        "news-card"
    };

    let read_more = move |_| {
        // Stub: the article detail flow is a future feature.
        browser::acknowledge(&t!("news-stub-ack"));
    };

    rsx! {
        article { class: class, "data-reveal": "",
            div { class: "news-card__media",
                img { src: article.image, alt: article.title.resolve(lang), loading: "lazy" }
                span { class: "news-card__category", {article.category.resolve(lang)} }
                if featured {
                    span { class: "news-card__featured-badge", {t!("news-featured-label")} }
                }
            }
            div { class: "news-card__body",
                time { class: "news-card__date", datetime: article.date,
                    {format::long_date(article.date, lang)}
                }
                h3 { class: "news-card__title", {article.title.resolve(lang)} }
                p { class: "news-card__excerpt", {article.excerpt.resolve(lang)} }
                div { class: "news-card__meta",
                    span { class: "news-card__stat",
                        {t!("news-views-label", count = format::localize_count(article.views as usize, lang))}
                    }
                    span { class: "news-card__stat",
                        {t!("news-shares-label", count = format::localize_count(article.shares as usize, lang))}
                    }
                }
                button {
                    r#type: "button",
                    class: "news-card__read-more",
                    onclick: read_more,
                    {t!("news-read-more")}
                }
            }
        }
    }
}
