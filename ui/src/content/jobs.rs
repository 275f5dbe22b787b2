//! Current job openings. Applying is a labeled stub action; the careers
//! view logs the payload and acknowledges; the submission backend is an
//! external collaborator.

use crate::core::lang::{bi, Bilingual};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobOpening {
    pub id: u32,
    pub title: Bilingual,
    /// Department names are kept as plain strings (proper-noun style
    /// org-chart labels).
    pub department: &'static str,
    pub location: Bilingual,
    pub job_type: Bilingual,
    pub experience: Bilingual,
    pub salary: &'static str,
    pub description: Bilingual,
    pub requirements: &'static [Bilingual],
}

pub static OPENINGS: &[JobOpening] = &[
    JobOpening {
        id: 1,
        title: bi("Shift Operations Engineer", "مهندس تشغيل مناوب"),
        department: "Operations",
        location: bi("Amman East Power Plant, Jordan", "محطة شرق عمان، الأردن"),
        job_type: bi("Full time", "دوام كامل"),
        experience: bi("3–5 years", "٣–٥ سنوات"),
        salary: "Competitive",
        description: bi(
            "Operate the combined-cycle plant from the central control room, coordinate with the grid dispatcher and lead the shift team through routine and emergency procedures.",
            "تشغيل محطة الدورة المركبة من غرفة التحكم المركزية، والتنسيق مع مركز التحميل الوطني، وقيادة فريق المناوبة في الإجراءات الاعتيادية والطارئة.",
        ),
        requirements: &[
            bi(
                "B.Sc. in electrical or mechanical engineering",
                "بكالوريوس في الهندسة الكهربائية أو الميكانيكية",
            ),
            bi(
                "Control-room experience at a thermal generation facility",
                "خبرة في غرف التحكم بمحطات التوليد الحرارية",
            ),
            bi(
                "Working knowledge of grid-code dispatch procedures",
                "إلمام عملي بإجراءات التحميل وفق كود الشبكة",
            ),
        ],
    },
    JobOpening {
        id: 2,
        title: bi("HSE Specialist", "أخصائي صحة وسلامة وبيئة"),
        department: "Health, Safety & Environment",
        location: bi("Mafraq Solar Park, Jordan", "مجمع المفرق للطاقة الشمسية، الأردن"),
        job_type: bi("Full time", "دوام كامل"),
        experience: bi("2–4 years", "٢–٤ سنوات"),
        salary: "Competitive",
        description: bi(
            "Own the site's safety program: toolbox talks, permit-to-work administration, incident investigation and ISO 45001 compliance reporting.",
            "إدارة برنامج السلامة في الموقع: جلسات التوعية، وإدارة تصاريح العمل، والتحقيق في الحوادث، وتقارير الامتثال لمواصفة ISO 45001.",
        ),
        requirements: &[
            bi(
                "Degree in occupational safety or an engineering discipline",
                "شهادة في السلامة المهنية أو أحد التخصصات الهندسية",
            ),
            bi("NEBOSH IGC or equivalent certification", "شهادة NEBOSH IGC أو ما يعادلها"),
            bi(
                "Field experience on power or heavy-industry sites",
                "خبرة ميدانية في مواقع الطاقة أو الصناعات الثقيلة",
            ),
        ],
    },
    JobOpening {
        id: 3,
        title: bi("Financial Analyst", "محلل مالي"),
        department: "Finance",
        location: bi("Head Office, Amman", "المكتب الرئيسي، عمان"),
        job_type: bi("Full time", "دوام كامل"),
        experience: bi("1–3 years", "١–٣ سنوات"),
        salary: "Competitive",
        description: bi(
            "Support monthly management reporting, PPA revenue reconciliation and the annual budgeting cycle across the generation portfolio.",
            "دعم التقارير الإدارية الشهرية، وتسوية إيرادات اتفاقيات شراء الطاقة، ودورة الموازنة السنوية عبر محفظة التوليد.",
        ),
        requirements: &[
            bi("B.Sc. in finance, accounting or economics", "بكالوريوس في المالية أو المحاسبة أو الاقتصاد"),
            bi("Strong spreadsheet modelling skills", "مهارات قوية في النمذجة على جداول البيانات"),
            bi("Professional English and Arabic", "إتقان اللغتين الإنجليزية والعربية"),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_ids_are_unique() {
        let mut ids: Vec<u32> = OPENINGS.iter().map(|j| j.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), OPENINGS.len());
    }

    #[test]
    fn every_opening_carries_requirements_in_both_languages() {
        for job in OPENINGS {
            assert!(!job.requirements.is_empty(), "job {}", job.id);
            for req in job.requirements {
                assert!(!req.en.is_empty());
                assert!(!req.ar.is_empty());
            }
        }
    }
}
