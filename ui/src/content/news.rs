//! The news table and its derivation rules (home preview, pagination,
//! featured slot).

use crate::core::lang::{bi, Bilingual};

/// Articles shown per page on the news view.
pub const PAGE_SIZE: usize = 6;

/// Articles shown in the home-page preview strip.
pub const HOME_PREVIEW_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewsArticle {
    pub id: u32,
    pub category: Bilingual,
    pub featured: bool,
    pub image: &'static str,
    /// ISO `YYYY-MM-DD`; formatted per locale at render time.
    pub date: &'static str,
    pub title: Bilingual,
    pub excerpt: Bilingual,
    pub content: Bilingual,
    pub views: u32,
    pub shares: u32,
}

pub static ARTICLES: &[NewsArticle] = &[
    NewsArticle {
        id: 1,
        category: bi("Company News", "أخبار الشركة"),
        featured: true,
        image: "https://cdn.shamslevant.example/news/amman-east-upgrade.jpg",
        date: "2024-01-15",
        title: bi(
            "Amman East Power Plant completes major efficiency upgrade",
            "محطة شرق عمان لتوليد الطاقة تستكمل ترقية كبرى لرفع الكفاءة",
        ),
        excerpt: bi(
            "A six-month turbine modernization program lifts the plant's net output while cutting fuel consumption per megawatt-hour.",
            "برنامج تحديث للتوربينات استمر ستة أشهر يرفع صافي إنتاج المحطة ويخفض استهلاك الوقود لكل ميغاواط/ساعة.",
        ),
        content: bi(
            "Shams Levant Power announced the completion of a comprehensive efficiency upgrade at the Amman East Power Plant. The program, executed with the plant's original equipment manufacturer over six months of phased outages, modernized both gas turbines and the steam cycle's heat-recovery systems. The upgrade raises the facility's net capacity and reduces fuel consumption per megawatt-hour, directly lowering the plant's carbon intensity. Throughout the program the plant continued to meet its dispatch obligations to the national grid operator without interruption.",
            "أعلنت شركة شمس المشرق للطاقة عن استكمال ترقية شاملة لرفع الكفاءة في محطة شرق عمان لتوليد الطاقة. وقد نُفّذ البرنامج بالتعاون مع الشركة المصنّعة الأصلية للمعدات على مدى ستة أشهر من التوقفات المرحلية، وشمل تحديث التوربينين الغازيين وأنظمة استرجاع الحرارة في الدورة البخارية. وترفع الترقية القدرة الصافية للمحطة وتخفض استهلاك الوقود لكل ميغاواط/ساعة، ما يقلل مباشرة من كثافتها الكربونية. وطوال فترة البرنامج واصلت المحطة الوفاء بالتزامات التحميل تجاه مشغل الشبكة الوطنية دون انقطاع.",
        ),
        views: 1243,
        shares: 87,
    },
    NewsArticle {
        id: 2,
        category: bi("Community", "المجتمع"),
        featured: false,
        image: "https://cdn.shamslevant.example/news/stem-scholarship.jpg",
        date: "2024-01-10",
        title: bi(
            "Company launches engineering scholarship for local students",
            "الشركة تطلق منحة هندسية للطلبة المحليين",
        ),
        excerpt: bi(
            "Ten full scholarships per year will support engineering students from the communities neighbouring our plants.",
            "عشر منح دراسية كاملة سنوياً لدعم طلبة الهندسة من المجتمعات المجاورة لمحطاتنا.",
        ),
        content: bi(
            "Shams Levant Power has launched an annual scholarship program covering tuition and living support for ten engineering students drawn from the communities around its generation sites. The program includes paid summer placements at the Amman East and Levant plants and a mentorship track with the company's senior engineers. Applications open each spring through the careers office and partner universities.",
            "أطلقت شركة شمس المشرق للطاقة برنامج منح سنوياً يغطي الرسوم الدراسية ودعم المعيشة لعشرة من طلبة الهندسة من المجتمعات المحيطة بمواقع التوليد التابعة لها. ويشمل البرنامج فترات تدريب صيفية مدفوعة في محطتي شرق عمان والمشرق ومساراً للإرشاد مع كبار مهندسي الشركة. ويُفتح باب التقديم كل ربيع عبر مكتب التوظيف والجامعات الشريكة.",
        ),
        views: 862,
        shares: 54,
    },
];

/// First featured article, rendered in the featured slot.
pub fn featured(articles: &[NewsArticle]) -> Option<&NewsArticle> {
    articles.iter().find(|a| a.featured)
}

/// `min(HOME_PREVIEW_COUNT, N)` articles from the start, original order.
pub fn home_preview(articles: &[NewsArticle]) -> &[NewsArticle] {
    &articles[..articles.len().min(HOME_PREVIEW_COUNT)]
}

/// Number of pages at `PAGE_SIZE` per page; an empty table still renders
/// one (empty) page.
pub fn page_count(total: usize) -> usize {
    total.div_ceil(PAGE_SIZE).max(1)
}

/// The slice of articles for a zero-indexed page. Out-of-range pages are
/// empty rather than a panic.
pub fn page_slice(articles: &[NewsArticle], page_index: usize) -> &[NewsArticle] {
    let start = page_index.saturating_mul(PAGE_SIZE);
    if start >= articles.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(articles.len());
    &articles[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn synthetic(count: usize) -> Vec<NewsArticle> {
        (0..count)
            .map(|i| NewsArticle {
                id: i as u32 + 1,
                category: bi("Test", "اختبار"),
                featured: i == 0,
                image: "",
                date: "2024-01-01",
                title: bi("t", "ت"),
                excerpt: bi("e", "م"),
                content: bi("c", "ن"),
                views: 0,
                shares: 0,
            })
            .collect()
    }

    #[test]
    fn seeded_table_matches_the_launch_content() {
        assert_eq!(ARTICLES.len(), 2);
        assert_eq!(ARTICLES[0].id, 1);
        assert!(ARTICLES[0].featured);
        assert_eq!(ARTICLES[0].date, "2024-01-15");
        assert_eq!(ARTICLES[1].id, 2);
        assert!(!ARTICLES[1].featured);
        assert_eq!(ARTICLES[1].date, "2024-01-10");
    }

    #[test]
    fn seeded_table_fits_one_page_with_article_one_featured() {
        assert_eq!(page_count(ARTICLES.len()), 1);
        let page = page_slice(ARTICLES, 0);
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].id, 1);
        assert_eq!(page[1].id, 2);
        assert_eq!(featured(ARTICLES).map(|a| a.id), Some(1));
    }

    #[test]
    fn pages_partition_the_table_without_duplicates() {
        for n in [0, 1, 5, 6, 7, 12, 13, 25] {
            let table = synthetic(n);
            let pages = page_count(table.len());
            let mut seen = Vec::new();
            for p in 0..pages {
                seen.extend(page_slice(&table, p).iter().map(|a| a.id));
            }
            let expected: Vec<u32> = (1..=n as u32).collect();
            assert_eq!(seen, expected, "N = {n}");
        }
    }

    #[test]
    fn last_page_holds_the_remainder() {
        for n in [1, 5, 6, 7, 11, 12, 13] {
            let table = synthetic(n);
            let last = page_count(n) - 1;
            let expected = if n % PAGE_SIZE == 0 { PAGE_SIZE } else { n % PAGE_SIZE };
            assert_eq!(page_slice(&table, last).len(), expected, "N = {n}");
        }
    }

    #[test]
    fn out_of_range_page_is_empty() {
        let table = synthetic(7);
        assert!(page_slice(&table, 99).is_empty());
    }

    #[test]
    fn home_preview_is_min_four_head_of_table() {
        for n in [0, 1, 3, 4, 9] {
            let table = synthetic(n);
            let preview = home_preview(&table);
            assert_eq!(preview.len(), n.min(HOME_PREVIEW_COUNT));
            for (i, article) in preview.iter().enumerate() {
                assert_eq!(article.id, i as u32 + 1);
            }
        }
    }

    #[test]
    fn article_ids_are_unique() {
        let mut ids: Vec<u32> = ARTICLES.iter().map(|a| a.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), ARTICLES.len());
    }
}
