#![cfg(test)]
//! Selector lint for the shared theme.
//!
//! Every class the map, catalog and navbar components rely on must exist in
//! `ui/assets/theme/main.css` (or the navbar sheet). This is a substring
//! check, not a CSS parser; update the lists when markup classes change.

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/navbar.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".visually-hidden",
    // Buttons
    ".button {",
    ".button--primary",
    ".button--ghost",
    // Cards and banners
    ".map-card {",
    ".map-card__header",
    ".map-card__meta",
    ".map-card__meta--success",
    ".map-card__meta--error",
    ".map-card__placeholder",
    ".map-banner--warning",
    // Form
    ".map__panels",
    ".map-form__field",
    ".map-form__input",
    ".map-expander__summary",
    ".map-expander__count",
    ".map-swatch",
    ".map-row {",
    ".map-row--active",
    ".map-row__slider",
    // Preview and legend
    ".map-preview__figure svg",
    ".map-legend__item",
    ".map-legend__meter",
    // Export and gate
    ".map-export__actions",
    ".map-gate__form",
    // Catalog
    ".catalog-grid",
    ".catalog-card__items",
    // Responsive block
    "@media (max-width: 720px)",
];

const NAVBAR_SELECTORS: &[&str] = &[
    ".navbar {",
    ".navbar__inner",
    ".navbar__brand-mark",
    ".navbar__links",
    ".navbar__link",
    ".navbar__locale",
];

fn missing<'a>(css: &str, selectors: &[&'a str]) -> Vec<&'a str> {
    selectors
        .iter()
        .copied()
        .filter(|s| !css.contains(s))
        .collect()
}

#[test]
fn theme_contains_required_selectors() {
    let missing = missing(THEME_CSS, REQUIRED_SELECTORS);
    assert!(
        missing.is_empty(),
        "theme is missing {} selector(s):\n  {}",
        missing.len(),
        missing.join("\n  ")
    );
}

#[test]
fn navbar_sheet_contains_required_selectors() {
    let missing = missing(NAVBAR_CSS, NAVBAR_SELECTORS);
    assert!(missing.is_empty(), "navbar sheet is missing: {missing:?}");
}

#[test]
fn theme_has_reasonable_size() {
    assert!(
        THEME_CSS.len() > 4_000,
        "theme looks truncated ({} bytes)",
        THEME_CSS.len()
    );
}
