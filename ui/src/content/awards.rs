//! Awards and recognitions shown on the about section's awards page.

use crate::core::lang::{bi, Bilingual};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Award {
    pub year: u16,
    pub title: Bilingual,
    pub issuer: Bilingual,
}

pub static AWARDS: &[Award] = &[
    Award {
        year: 2023,
        title: bi(
            "Best Independent Power Producer — Levant",
            "أفضل منتج مستقل للطاقة — بلاد الشام",
        ),
        issuer: bi("Regional Energy Forum", "منتدى الطاقة الإقليمي"),
    },
    Award {
        year: 2023,
        title: bi(
            "Gold Award for Occupational Safety",
            "الجائزة الذهبية للسلامة المهنية",
        ),
        issuer: bi("Jordan Industrial Safety Council", "مجلس السلامة الصناعية الأردني"),
    },
    Award {
        year: 2022,
        title: bi(
            "Five million safe working hours without lost time",
            "خمسة ملايين ساعة عمل آمنة دون إصابات مضيّعة للوقت",
        ),
        issuer: bi("Internal HSE milestone", "إنجاز داخلي للصحة والسلامة"),
    },
    Award {
        year: 2021,
        title: bi(
            "Corporate Social Responsibility Excellence",
            "التميز في المسؤولية الاجتماعية للشركات",
        ),
        issuer: bi("Ministry of Social Development", "وزارة التنمية الاجتماعية"),
    },
    Award {
        year: 2020,
        title: bi(
            "ISO 14001 environmental certification, all sites",
            "شهادة ISO 14001 البيئية لجميع المواقع",
        ),
        issuer: bi("International certification body", "هيئة اعتماد دولية"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn awards_are_listed_newest_first() {
        for pair in AWARDS.windows(2) {
            assert!(pair[0].year >= pair[1].year);
        }
    }
}
