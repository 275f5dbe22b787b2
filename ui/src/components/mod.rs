//! Shared components: layout chrome and the reusable content widgets.

pub mod app_navbar;
pub mod footer;
pub mod hero;
pub mod news_card;
pub mod pagination;
pub mod video_hero;

pub use app_navbar::AppNavbar;
pub use footer::AppFooter;
pub use hero::PageHero;
pub use news_card::NewsCard;
pub use pagination::Pagination;
pub use video_hero::HeroVideo;
