//! The active-language flag and the bilingual pair type.
//!
//! UI chrome goes through Fluent (`crate::i18n`); content tables carry
//! explicit `Bilingual` pairs resolved against the process-wide `Lang`
//! signal. Both react to the same toggle: `apply` persists the choice,
//! flips the document direction and switches the Fluent loader, and the
//! launcher bumps the `Signal<Lang>` context so every mounted node
//! re-resolves.

use dioxus::prelude::*;

use crate::core::browser;

/// localStorage key recording the language preference.
/// `"ar"` means Arabic; absence or any other value means English.
pub const STORAGE_KEY: &str = "shams-lang";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    En,
    Ar,
}

impl Lang {
    pub fn is_arabic(self) -> bool {
        matches!(self, Lang::Ar)
    }

    pub fn toggled(self) -> Self {
        match self {
            Lang::En => Lang::Ar,
            Lang::Ar => Lang::En,
        }
    }

    /// Tag understood by the Fluent loader (`i18n/<tag>/shams-ui.ftl`).
    pub fn locale_tag(self) -> &'static str {
        match self {
            Lang::En => "en-US",
            Lang::Ar => "ar",
        }
    }

    /// Value of the document `lang` attribute.
    pub fn html_lang(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Ar => "ar",
        }
    }

    pub fn dir(self) -> &'static str {
        match self {
            Lang::En => "ltr",
            Lang::Ar => "rtl",
        }
    }

    /// The language toggle always advertises the *other* language by its
    /// endonym, so it is never localized through Fluent.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Lang::En => "العربية",
            Lang::Ar => "English",
        }
    }

    fn persisted_value(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Ar => "ar",
        }
    }

    pub fn from_persisted(value: Option<&str>) -> Self {
        match value {
            Some("ar") => Lang::Ar,
            _ => Lang::En,
        }
    }
}

/// Read the persisted preference (English when absent or unreadable).
pub fn initial() -> Lang {
    Lang::from_persisted(browser::storage_get(STORAGE_KEY).as_deref())
}

/// Apply every flag-change side effect: persist the choice, flip the
/// document `dir`/`lang` attributes, switch the Fluent loader. The caller
/// owns the `Signal<Lang>` bump that re-renders mounted text.
pub fn apply(lang: Lang) {
    browser::storage_set(STORAGE_KEY, lang.persisted_value());
    browser::set_document_language(lang.html_lang(), lang.dir());
    let _ = crate::i18n::set_language(lang.locale_tag());
}

/// Current language from the context signal the launcher provides.
/// Reading it inside a component subscribes that component to toggles.
pub fn use_lang() -> Lang {
    try_use_context::<Signal<Lang>>()
        .map(|s| s())
        .unwrap_or_default()
}

/// An English/Arabic string pair. Resolution is pure and total: exactly the
/// requested variant, never a fallback to the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bilingual {
    pub en: &'static str,
    pub ar: &'static str,
}

impl Bilingual {
    pub const fn new(en: &'static str, ar: &'static str) -> Self {
        Self { en, ar }
    }

    pub fn resolve(&self, lang: Lang) -> &'static str {
        match lang {
            Lang::En => self.en,
            Lang::Ar => self.ar,
        }
    }
}

/// Terse constructor for content tables.
pub const fn bi(en: &'static str, ar: &'static str) -> Bilingual {
    Bilingual::new(en, ar)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_returns_exactly_the_requested_variant() {
        let v = bi("Power", "طاقة");
        assert_eq!(v.resolve(Lang::En), "Power");
        assert_eq!(v.resolve(Lang::Ar), "طاقة");
    }

    #[test]
    fn double_toggle_is_identity() {
        for lang in [Lang::En, Lang::Ar] {
            assert_eq!(lang.toggled().toggled(), lang);
        }
    }

    #[test]
    fn persisted_ar_means_arabic_everything_else_english() {
        assert_eq!(Lang::from_persisted(Some("ar")), Lang::Ar);
        assert_eq!(Lang::from_persisted(Some("en")), Lang::En);
        assert_eq!(Lang::from_persisted(Some("garbage")), Lang::En);
        assert_eq!(Lang::from_persisted(None), Lang::En);
    }

    #[test]
    fn toggle_flips_direction_and_label() {
        assert_eq!(Lang::En.dir(), "ltr");
        assert_eq!(Lang::Ar.dir(), "rtl");
        assert_eq!(Lang::En.toggle_label(), "العربية");
        assert_eq!(Lang::Ar.toggle_label(), "English");
    }

    #[test]
    fn persist_round_trip() {
        for lang in [Lang::En, Lang::Ar] {
            assert_eq!(Lang::from_persisted(Some(lang.persisted_value())), lang);
        }
    }
}
