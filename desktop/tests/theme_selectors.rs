#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Ensures the CSS classes the shared sections render (portfolio filters, cards,
blog list, right-to-left overrides) stay present in `ui/assets/theme/main.css`.
A plain substring check is enough as an early warning.

If you rename a class, update the component markup and REQUIRED_SELECTORS together.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".section {",
    ".section__title",
    ".visually-hidden",
    // Buttons & shared UI
    ".button {",
    ".button--primary",
    ".button--ghost",
    ".chip {",
    ".card {",
    // Sections
    ".hero__title",
    ".skills__grid",
    ".apps__grid",
    ".app-card__title",
    ".testimonial__quote",
    ".certification__issuer",
    ".faq__item",
    ".services__grid",
    ".pricing__card--popular",
    ".pricing__badge",
    ".contact__actions",
    // Search & filter states
    ".filters__search",
    ".filters__category",
    ".filters__count",
    ".state--empty",
    ".state--loading",
    // Blog
    ".blog__list",
    ".post-card__meta",
    ".post__body",
    ".not-found__code",
    ".footer {",
    // Right-to-left and responsive blocks
    "[dir=\"rtl\"]",
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<&str> = REQUIRED_SELECTORS
        .iter()
        .copied()
        .filter(|sel| !THEME_CSS.contains(sel))
        .collect();

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 3_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars); \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn rtl_block_consistency() {
    // Every rtl override sits next to the ltr rule it flips.
    assert!(THEME_CSS.contains("[dir=\"rtl\"] .filters__count"));
    assert!(THEME_CSS.contains("margin-inline-start: auto"));
}
