//! The mock search index: a fixed candidate set derived from the page
//! catalog, matched by case-insensitive substring against both language
//! variants. No ranking beyond catalog order.

use crate::core::lang::{bi, Bilingual};
use crate::nav::{Page, CATALOG};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchEntry {
    pub page: Page,
    pub title: Bilingual,
    pub blurb: Bilingual,
    pub category: Bilingual,
}

/// The fixed candidate set, in catalog order. The search page itself is not
/// a candidate.
pub fn candidates() -> Vec<SearchEntry> {
    CATALOG
        .iter()
        .copied()
        .filter(|page| *page != Page::Search)
        .map(|page| SearchEntry {
            page,
            title: page.title(),
            blurb: blurb(page),
            category: page.parent().unwrap_or(page).title(),
        })
        .collect()
}

fn blurb(page: Page) -> Bilingual {
    use crate::nav::{AboutSection, BusinessSection, SustainabilitySection};
    match page {
        Page::Home => bi(
            "Powering Jordan's homes and industry around the clock.",
            "نزوّد منازل الأردن وصناعته بالطاقة على مدار الساعة.",
        ),
        Page::About(AboutSection::Overview) => bi(
            "Who we are, our mission and the values behind our business.",
            "من نحن، ورسالتنا، والقيم التي تقوم عليها أعمالنا.",
        ),
        Page::About(AboutSection::Leadership) => bi(
            "The executive team steering the company.",
            "الفريق التنفيذي الذي يقود الشركة.",
        ),
        Page::About(AboutSection::Awards) => bi(
            "Recognitions earned across safety, sustainability and business performance.",
            "تكريمات نلناها في السلامة والاستدامة والأداء المؤسسي.",
        ),
        Page::Business(BusinessSection::Overview) => bi(
            "Our generation portfolio: thermal baseload, fast peaking and solar.",
            "محفظتنا التوليدية: حمل أساسي حراري، وذروة سريعة، وطاقة شمسية.",
        ),
        Page::Business(BusinessSection::AmmanEastIpp) => bi(
            "400 MW combined-cycle baseload plant east of Amman.",
            "محطة حمل أساسي بالدورة المركبة بقدرة ٤٠٠ ميغاواط شرق عمان.",
        ),
        Page::Business(BusinessSection::LevantIpp4) => bi(
            "250 MW fast-start peaking plant on tri-fuel engines.",
            "محطة ذروة سريعة الإقلاع بقدرة ٢٥٠ ميغاواط بمحركات ثلاثية الوقود.",
        ),
        Page::Business(BusinessSection::MafraqSolar) => bi(
            "50 MW tracking photovoltaic park in the Mafraq development zone.",
            "مجمع كهروضوئي متتبع بقدرة ٥٠ ميغاواط في منطقة المفرق التنموية.",
        ),
        Page::Sustainability(SustainabilitySection::Overview) => bi(
            "Safety, environment and community programs across every site.",
            "برامج السلامة والبيئة والمجتمع في جميع مواقعنا.",
        ),
        Page::Sustainability(SustainabilitySection::Safety) => bi(
            "Zero-harm policy, certifications and safety performance.",
            "سياسة انعدام الأذى، والشهادات، وأداء السلامة.",
        ),
        Page::Sustainability(SustainabilitySection::Environment) => bi(
            "Emissions, water stewardship and environmental monitoring.",
            "الانبعاثات، والإشراف المائي، والرصد البيئي.",
        ),
        Page::Sustainability(SustainabilitySection::Community) => bi(
            "Scholarships, local hiring and neighbourhood investment.",
            "المنح الدراسية، والتوظيف المحلي، والاستثمار في الجوار.",
        ),
        Page::News => bi(
            "Announcements, milestones and stories from our plants.",
            "إعلانات وإنجازات وقصص من محطاتنا.",
        ),
        Page::Careers => bi(
            "Open positions and how to join the team.",
            "الشواغر المتاحة وكيفية الانضمام إلى الفريق.",
        ),
        Page::Contact => bi(
            "Reach our head office and plant gate offices.",
            "تواصل مع مكتبنا الرئيسي ومكاتب بوابات المحطات.",
        ),
        // Placeholder pages share the under-construction description.
        _ => bi(
            "Section under construction, content coming soon.",
            "قسم قيد الإنشاء، المحتوى قادم قريباً.",
        ),
    }
}

/// `None` for an empty/whitespace query (the prompt state, distinct from
/// zero matches); otherwise the candidates whose English or Arabic title,
/// blurb or category contains the query case-insensitively, catalog order.
pub fn match_query(query: &str) -> Option<Vec<SearchEntry>> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    Some(
        candidates()
            .into_iter()
            .filter(|entry| {
                [entry.title, entry.blurb, entry.category]
                    .iter()
                    .any(|value| {
                        value.en.to_lowercase().contains(&needle)
                            || value.ar.to_lowercase().contains(&needle)
                    })
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_is_the_prompt_state_not_zero_matches() {
        assert!(match_query("").is_none());
        assert!(match_query("   ").is_none());
    }

    #[test]
    fn business_query_matches_only_entries_containing_it() {
        let results = match_query("business").expect("non-empty query");
        assert!(!results.is_empty());
        for entry in &results {
            let hay = format!(
                "{} {} {} {} {} {}",
                entry.title.en, entry.title.ar, entry.blurb.en, entry.blurb.ar,
                entry.category.en, entry.category.ar
            )
            .to_lowercase();
            assert!(hay.contains("business"), "{:?}", entry.page);
        }
    }

    #[test]
    fn matching_is_case_insensitive() {
        let lower = match_query("solar").expect("query");
        let upper = match_query("SOLAR").expect("query");
        assert_eq!(lower, upper);
        assert!(lower.iter().any(|e| e.page.slug() == "business-mafraq-solar"));
    }

    #[test]
    fn arabic_queries_match_arabic_variants() {
        let results = match_query("الاستدامة").expect("query");
        assert!(results
            .iter()
            .any(|e| e.page.slug() == "sustainability"));
    }

    #[test]
    fn results_preserve_catalog_order() {
        let results = match_query("a").expect("query");
        let order: Vec<usize> = results
            .iter()
            .map(|e| CATALOG.iter().position(|p| *p == e.page).unwrap())
            .collect();
        let mut sorted = order.clone();
        sorted.sort_unstable();
        assert_eq!(order, sorted);
    }

    #[test]
    fn unmatched_query_yields_empty_results() {
        let results = match_query("zzzzqqqq").expect("query");
        assert!(results.is_empty());
    }
}
