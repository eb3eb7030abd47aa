use dioxus::prelude::*;

use crate::components::{home_link, SeoHead};
use crate::core::context::use_locale;
use crate::sections::Footer;
use crate::t;

/// Catch-all page; also shown for unknown or unpublished article slugs.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let locale = use_locale().read().active();
    let path = format!("/{}", route.join("/"));
    tracing::debug!(%path, "page not found");

    rsx! {
        SeoHead {
            title: t!(locale, "not_found.title"),
            description: t!(locale, "not_found.body"),
            path: path.clone(),
        }
        document::Meta { name: "robots", content: "noindex" }
        main { class: "page page-not-found",
            section { class: "section not-found",
                p { class: "not-found__code", "404" }
                h1 { class: "section__title", {t!(locale, "not_found.title")} }
                p { class: "section__subtitle", {t!(locale, "not_found.body")} }
                div { class: "not-found__home", {home_link(&t!(locale, "not_found.home"))} }
            }
        }
        Footer {}
    }
}
