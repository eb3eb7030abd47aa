use crate::core::context::use_locale;
use crate::core::seo;
use crate::i18n;
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

// Navbar stylesheet (inlined as well for release native builds)
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Platforms register a `NavBuilder` providing fully constructed `Link` elements
/// so `ui` does not need to know each platform's `Route` enum.
///
/// Each function receives the localized label and must return a link that
/// contains exactly that label:
/// ```ignore
/// register_nav(NavBuilder {
///     home: |label| rsx!( Link { class: "navbar__link", to: Route::Home {}, "{label}" } ),
///     blog: |label| rsx!( Link { class: "navbar__link", to: Route::Blog {}, "{label}" } ),
///     post: |slug, label| {
///         rsx!( Link { to: Route::BlogPost { slug: slug.to_string() }, "{label}" } )
///     },
/// });
/// ```
///
/// Section anchors on the home page (`/#skills`, ...) are plain links and need no builder.
pub struct NavBuilder {
    pub home: fn(label: &str) -> Element,
    pub blog: fn(label: &str) -> Element,
    pub post: fn(slug: &str, label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    if NAV_BUILDER.set(builder).is_err() {
        tracing::debug!("navigation builder already registered");
    }
}

/// Router link to the home page; a plain anchor before any builder is registered.
pub fn home_link(label: &str) -> Element {
    match NAV_BUILDER.get() {
        Some(b) => (b.home)(label),
        None => rsx! { a { href: "/", "{label}" } },
    }
}

pub fn blog_link(label: &str) -> Element {
    match NAV_BUILDER.get() {
        Some(b) => (b.blog)(label),
        None => rsx! { a { href: "/blog", "{label}" } },
    }
}

/// Router link to the article with `slug`.
pub fn post_link(slug: &str, label: &str) -> Element {
    match NAV_BUILDER.get() {
        Some(b) => (b.post)(slug, label),
        None => {
            let href = seo::post_path(slug);
            rsx! { a { href: "{href}", "{label}" } }
        }
    }
}

/// Home-page sections reachable from the navbar, as (anchor, catalog key).
const SECTION_LINKS: &[(&str, &str)] = &[
    ("/#about", "nav.about"),
    ("/#services", "nav.services"),
    ("/#skills", "nav.skills"),
    ("/#apps", "nav.apps"),
    ("/#pricing", "nav.pricing"),
    ("/#testimonials", "nav.testimonials"),
    ("/#certifications", "nav.certifications"),
    ("/#faq", "nav.faq"),
    ("/#contact", "nav.contact"),
];

#[component]
pub fn AppNavbar(children: Element) -> Element {
    let mut locale_state = use_locale();
    let locale = locale_state.read().active();

    let on_change = move |evt: FormEvent| {
        let value = evt.value();
        if let Err(err) = locale_state.write().set_active_code(&value) {
            tracing::warn!(error = %err, "language picker sent an unsupported value");
        }
    };

    let builder = NAV_BUILDER.get();
    let catalog = i18n::catalog();
    let tagline = t!(locale, "tagline");

    rsx! {
        // Include shared navbar stylesheet (and inline in release native)
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "Yahya Houssini" }
                    }
                    span { class: "navbar__brand-subtitle", "{tagline}" }
                }

                nav { class: "navbar__links",
                    if let Some(b) = builder {
                        {(b.home)(&t!(locale, "nav.home"))}
                    }
                    for (href, key) in SECTION_LINKS.iter() {
                        a {
                            key: "{href}",
                            class: "navbar__link",
                            href: "{href}",
                            {catalog.translate(key, locale, &[])}
                        }
                    }
                    if let Some(b) = builder {
                        {(b.blog)(&t!(locale, "nav.blog"))}
                    } else {
                        {children}
                    }
                }

                div { class: "navbar__locale",
                    label {
                        class: "visually-hidden",
                        r#for: "locale-select",
                        {t!(locale, "nav.language_label")}
                    }
                    select {
                        id: "locale-select",
                        value: locale.code(),
                        oninput: on_change,
                        for l in i18n::available_locales() {
                            option {
                                key: "{l}",
                                value: l.code(),
                                lang: l.code(),
                                selected: l == locale,
                                {l.native_name()}
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;

    #[test]
    fn every_section_link_is_translated() {
        let catalog = i18n::catalog();
        for locale in Locale::ALL {
            for (_, key) in SECTION_LINKS {
                assert!(catalog.contains(key, locale), "{key} missing for {locale}");
            }
        }
    }

    #[test]
    fn section_links_are_listed_in_the_sitemap() {
        for (href, _) in SECTION_LINKS {
            assert!(
                seo::SITE_ROUTES.iter().any(|r| r.path == *href),
                "{href} missing from SITE_ROUTES"
            );
        }
    }
}
