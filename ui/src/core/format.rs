//! Locale-aware formatting helpers: Arabic-Indic digits and long dates.

use time::macros::format_description;
use time::Date;

use crate::core::lang::Lang;

/// Arabic-Indic numeral glyphs, indexed by the ASCII digit they replace.
const ARABIC_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

// Modern Standard Arabic month names (in common use in Jordan alongside the
// Levantine set).
const MONTHS_AR: [&str; 12] = [
    "يناير",
    "فبراير",
    "مارس",
    "أبريل",
    "مايو",
    "يونيو",
    "يوليو",
    "أغسطس",
    "سبتمبر",
    "أكتوبر",
    "نوفمبر",
    "ديسمبر",
];

/// Transliterate ASCII digits to Arabic-Indic numerals, one-to-one.
/// Non-digit characters pass through unchanged.
pub fn arabic_digits(input: &str) -> String {
    input
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) if c.is_ascii_digit() => ARABIC_DIGITS[d as usize],
            _ => c,
        })
        .collect()
}

/// Render a number for display, transliterating digits when Arabic.
pub fn localize_count(n: usize, lang: Lang) -> String {
    let plain = n.to_string();
    if lang.is_arabic() {
        arabic_digits(&plain)
    } else {
        plain
    }
}

/// Long-form date (day, full month name, year) from an ISO `YYYY-MM-DD`
/// string. Malformed input falls back to the raw string; this function
/// never fails.
pub fn long_date(iso: &str, lang: Lang) -> String {
    let Ok(date) = Date::parse(iso, format_description!("[year]-[month]-[day]")) else {
        return iso.to_string();
    };

    let month_index = date.month() as usize - 1;
    match lang {
        Lang::En => format!(
            "{} {}, {}",
            MONTHS_EN[month_index],
            date.day(),
            date.year()
        ),
        Lang::Ar => arabic_digits(&format!(
            "{} {} {}",
            date.day(),
            MONTHS_AR[month_index],
            date.year()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_transliteration_is_one_to_one() {
        assert_eq!(arabic_digits("0123456789"), "٠١٢٣٤٥٦٧٨٩");
    }

    #[test]
    fn non_digits_pass_through() {
        assert_eq!(arabic_digits("IPP-1 (2024)"), "IPP-١ (٢٠٢٤)");
        assert_eq!(arabic_digits("لا أرقام"), "لا أرقام");
    }

    #[test]
    fn long_date_english() {
        assert_eq!(long_date("2024-01-15", Lang::En), "January 15, 2024");
    }

    #[test]
    fn long_date_arabic_uses_arabic_indic_digits() {
        assert_eq!(long_date("2024-01-15", Lang::Ar), "١٥ يناير ٢٠٢٤");
    }

    #[test]
    fn malformed_date_falls_back_to_raw() {
        assert_eq!(long_date("soon", Lang::En), "soon");
        assert_eq!(long_date("2024-13-40", Lang::Ar), "2024-13-40");
    }

    #[test]
    fn counts_localize_per_language() {
        assert_eq!(localize_count(6, Lang::En), "6");
        assert_eq!(localize_count(6, Lang::Ar), "٦");
    }
}
