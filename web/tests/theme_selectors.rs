#![cfg(test)]
/*!
Theme selector lint for the web build.

Purpose:
- Ensure that critical CSS selectors required by the site (page transitions,
  scroll reveal, hero video, cards, forms) remain present in the theme:
  web/assets/main.css
- Fail fast if a refactor accidentally drops or renames core classes, preventing a
  silent styling regression.

How it works:
- We compile-time embed the theme using `include_str!`, mirroring the `asset!`
  constant in `web/src/main.rs`.
- We assert presence of a curated set of selectors / tokens.
- If you intentionally rename or remove a selector:
    1. Update the component markup.
    2. Adjust this test's REQUIRED_SELECTORS accordingly.

Why not parse CSS properly?
- A lightweight substring presence check is sufficient as an early warning.
- Keeping zero extra dependencies avoids increasing compile times.
*/

const THEME_CSS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/main.css"));

/// Core selectors / tokens that must exist in the theme.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    // Page transition and scroll reveal
    ".page-shell",
    ".page-shell.loaded",
    "[data-reveal]",
    "[data-reveal].is-visible",
    // Buttons & shared UI
    ".button {",
    ".button--primary",
    ".button--ghost",
    ".button--link",
    // Page hero / breadcrumbs
    ".page-hero",
    ".page-hero__breadcrumbs",
    ".page-hero__crumb--current",
    // Home hero video
    ".home-hero",
    ".hero-video__media",
    ".hero-video__controls",
    // Stats strip
    ".home-stats__grid",
    ".home-stat__value",
    // Cards
    ".plant-card",
    ".news-card__featured-badge",
    ".news-card--featured",
    ".job-card__requirements",
    ".leader-card",
    ".search-result",
    // Pagination
    ".pagination__btn",
    ".pagination__info",
    // Forms
    ".application-form",
    ".page-contact__form",
    "form textarea",
    // Footer
    ".footer__inner",
    ".footer__legal",
    // RTL flip for directional glyphs
    "[dir=\"rtl\"]",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 860px)",
    // Reduced motion escape hatch
    "@media (prefers-reduced-motion: reduce)",
];

#[test]
fn theme_contains_required_selectors() {
    let mut missing = Vec::new();
    for sel in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(sel) {
            missing.push(*sel);
        }
    }

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars), \
         did the file get truncated or path change?",
        non_ws_len
    );
}
