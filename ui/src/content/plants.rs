//! Generation-asset descriptors. The three business detail pages render
//! from this table through one parameterized view.

use crate::core::lang::{bi, Bilingual};
use crate::nav::BusinessSection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plant {
    pub section: BusinessSection,
    pub name: Bilingual,
    pub capacity_mw: u16,
    pub technology: Bilingual,
    pub commissioned: u16,
    pub location: Bilingual,
    pub description: Bilingual,
    pub highlights: &'static [Bilingual],
}

pub static PLANTS: &[Plant] = &[
    Plant {
        section: BusinessSection::AmmanEastIpp,
        name: bi("Amman East Power Plant", "محطة شرق عمان لتوليد الطاقة"),
        capacity_mw: 400,
        technology: bi("Combined-cycle gas turbine", "توربينات غازية بالدورة المركبة"),
        commissioned: 2009,
        location: bi("Al Manakher, east of Amman", "المناخر، شرق عمان"),
        description: bi(
            "Jordan's first independent power project, supplying baseload electricity to the national grid under a long-term power purchase agreement. The combined-cycle configuration pairs two gas turbines with a steam turbine fed from heat-recovery boilers.",
            "أول مشروع مستقل لتوليد الطاقة في الأردن، يزوّد الشبكة الوطنية بالحمل الأساسي من الكهرباء بموجب اتفاقية شراء طاقة طويلة الأمد. وتجمع تهيئة الدورة المركبة بين توربينين غازيين وتوربين بخاري يُغذّى من مراجل استرجاع الحرارة.",
        ),
        highlights: &[
            bi("Baseload supplier to the national grid", "مزوّد الحمل الأساسي للشبكة الوطنية"),
            bi("Dual-fuel capability for supply security", "قدرة على التشغيل بوقودين لأمن التزويد"),
            bi("ISO 9001, 14001 and 45001 certified", "حاصلة على شهادات ISO 9001 و14001 و45001"),
        ],
    },
    Plant {
        section: BusinessSection::LevantIpp4,
        name: bi("Levant Peaking Plant (IPP4)", "محطة المشرق للذروة (IPP4)"),
        capacity_mw: 250,
        technology: bi("Tri-fuel reciprocating engines", "محركات ترددية ثلاثية الوقود"),
        commissioned: 2014,
        location: bi("Al Manakher, east of Amman", "المناخر، شرق عمان"),
        description: bi(
            "A fast-start peaking facility built around a farm of reciprocating engines that can reach full output in minutes, stabilising the grid as renewable penetration grows. The engines run on natural gas, heavy fuel oil or diesel.",
            "محطة ذروة سريعة الإقلاع تقوم على مجموعة من المحركات الترددية القادرة على بلوغ كامل طاقتها خلال دقائق، بما يدعم استقرار الشبكة مع تنامي حصة الطاقة المتجددة. وتعمل المحركات بالغاز الطبيعي أو زيت الوقود الثقيل أو الديزل.",
        ),
        highlights: &[
            bi("Full output in under five minutes", "كامل الطاقة في أقل من خمس دقائق"),
            bi("Grid-balancing partner for renewables", "شريك موازنة الشبكة لمصادر الطاقة المتجددة"),
            bi("Tri-fuel flexibility", "مرونة التشغيل بثلاثة أنواع وقود"),
        ],
    },
    Plant {
        section: BusinessSection::MafraqSolar,
        name: bi("Mafraq Solar Park", "مجمع المفرق للطاقة الشمسية"),
        capacity_mw: 50,
        technology: bi("Photovoltaic with single-axis tracking", "ألواح كهروضوئية بتتبع أحادي المحور"),
        commissioned: 2020,
        location: bi("Mafraq development zone", "منطقة المفرق التنموية"),
        description: bi(
            "Our first utility-scale renewable asset: a photovoltaic park whose single-axis trackers follow the sun through the day, lifting yield well above fixed-tilt designs in Jordan's high-irradiance north-east.",
            "أول أصولنا المتجددة على النطاق المرفقي: مجمع كهروضوئي تتبع ألواحه الشمس على محور واحد طوال النهار، ما يرفع الإنتاجية بوضوح عن التصاميم الثابتة في شمال شرق الأردن عالي الإشعاع الشمسي.",
        ),
        highlights: &[
            bi("120,000 tonnes of CO₂ avoided annually", "تفادي ١٢٠ ألف طن من ثاني أكسيد الكربون سنوياً"),
            bi("Local workforce during construction and operation", "عمالة محلية في مرحلتي الإنشاء والتشغيل"),
            bi("First step of the renewable growth plan", "الخطوة الأولى في خطة النمو المتجدد"),
        ],
    },
];

/// Look up a plant by its business sub-section.
pub fn by_section(section: BusinessSection) -> Option<&'static Plant> {
    PLANTS.iter().find(|p| p.section == section)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_detail_section_resolves_to_a_plant() {
        for section in [
            BusinessSection::AmmanEastIpp,
            BusinessSection::LevantIpp4,
            BusinessSection::MafraqSolar,
        ] {
            assert!(by_section(section).is_some(), "{section:?}");
        }
    }

    #[test]
    fn overview_sections_have_no_plant_entry() {
        assert!(by_section(BusinessSection::Overview).is_none());
        assert!(by_section(BusinessSection::OmServices).is_none());
    }
}
